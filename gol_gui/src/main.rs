#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")] // hide console window on Windows in release

use std::error::Error;

use app::LifeApp;
use args::{Args, Config};
use clap::Parser;

mod app;
mod args;
mod render;
mod settings;
mod tick;

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let args = Args::parse();
    let config = Config::try_from(args)
        .inspect_err(|err| eprintln!("{}{err}", error_text::INVALID_CONFIG))?;

    // The board is sized to the window, so the window cannot be resized.
    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(lang::APP_NAME)
            .with_inner_size(config.window_size)
            .with_resizable(false),
        ..Default::default()
    };

    // The ui has to run on the main thread for compatibility purposes.
    eframe::run_native(
        lang::APP_NAME,
        native_options,
        Box::new(move |_cc| Ok(Box::new(LifeApp::new(config)))),
    )
    .inspect_err(|_| eprintln!("{}", error_text::UI_INIT))?;

    Ok(())
}

/// Creates a public constant string with the name as the name of the constant
/// and the text as the value of the string.
///
/// # Examples
/// ```
/// lang!{QUOTE, "Ya like jazz?"}
/// assert_eq!(QUOTE, "Ya like jazz?");
/// ```
#[macro_export]
macro_rules! lang {
    {$($name:tt, $text:literal);*} => {
        $(
        pub const $name: &str = $text;
        )*
    };
}

mod error_text {
    lang! {
        INVALID_CONFIG, "Unable to start with the given arguments: ";
        UI_INIT, "Unable to initialise UI graphical context."
    }
}

mod lang {
    lang! {
        APP_NAME, "Game of Life - Rose & Rainbow Edition";
        PAUSED, "PAUSED - Space to continue";

        SETTINGS_WINDOW, "Settings";
        SETTINGS_RESET, "Reset";
        SETTINGS_COLOUR_HEADER, "Colours";
        SETTINGS_BACKGROUND_COLOUR, "Background";
        SETTINGS_GRID_COLOUR, "Grid lines";
        SETTINGS_CELL_ALIVE_COLOUR, "Alive cells";
        SETTINGS_CELL_DYING_COLOUR, "Dying cells";
        SETTINGS_CELL_BORN_COLOUR, "Born cells";
        SETTINGS_TEXT_COLOUR, "Text";
        SETTINGS_RAINBOW, "Rainbow patterns";
        SETTINGS_KEYBIND_HEADER, "Keybinds";

        KEYBIND_SETTINGS_MENU, "Settings menu";
        KEYBIND_TOGGLE_PAUSE, "Pause/Resume";
        KEYBIND_STEP_ONCE, "Step once";
        KEYBIND_RANDOMIZE, "Randomize";
        KEYBIND_CLEAR, "Clear";
        KEYBIND_RANDOM_PATTERNS, "Random patterns";
        KEYBIND_GLIDER, "Place glider";
        KEYBIND_BLINKER, "Place blinker";
        KEYBIND_TOAD, "Place toad";
        KEYBIND_BEACON, "Place beacon";
        KEYBIND_SPACESHIP, "Place spaceship";
        KEYBIND_QUIT, "Quit";
        KEYBIND_QUIT_ALTERNATE, "Quit (alternate)"
    }

    /// The controls shown in the top left of the window.
    pub const HELP_LINES: [&str; 9] = [
        "Controls:",
        "Left-click: Toggle cells",
        "Right-click: Place random pattern",
        "P: Place multiple random patterns",
        "1-5: Place specific patterns",
        "R: Random cell pattern",
        "C: Clear grid",
        "Space: Pause/Resume",
        "Q/ESC: Quit",
    ];
}
