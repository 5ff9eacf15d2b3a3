pub(crate) mod keybinds;

use std::marker::PhantomData;

use egui::Color32;
use keybinds::{Keybind, KeybindHolder};

use crate::lang::{
    SETTINGS_BACKGROUND_COLOUR, SETTINGS_CELL_ALIVE_COLOUR, SETTINGS_CELL_BORN_COLOUR,
    SETTINGS_CELL_DYING_COLOUR, SETTINGS_COLOUR_HEADER, SETTINGS_GRID_COLOUR,
    SETTINGS_KEYBIND_HEADER, SETTINGS_RAINBOW, SETTINGS_RESET, SETTINGS_TEXT_COLOUR,
    SETTINGS_WINDOW,
};

/// The settings of the current session.
#[derive(Debug, Default)]
pub(crate) struct Settings {
    pub(crate) colour: ColourSettings,
    /// Whether stamped patterns are given rainbow colours.
    pub(crate) rainbow: bool,
    pub(crate) keybind: KeybindHolder,
}

impl Settings {
    pub(crate) fn new() -> Self {
        Self {
            rainbow: true,
            ..Default::default()
        }
    }
}

/// The colours used to draw the board, defaulting to shades of rose.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct ColourSettings {
    pub(crate) background: Color32,
    pub(crate) grid: Color32,
    pub(crate) alive: Color32,
    pub(crate) dying: Color32,
    pub(crate) born: Color32,
    pub(crate) text: Color32,
}

impl Default for ColourSettings {
    fn default() -> Self {
        Self {
            background: Color32::from_rgb(25, 0, 15),
            grid: Color32::from_rgb(60, 20, 40),
            alive: Color32::from_rgb(255, 105, 180),
            dying: Color32::from_rgb(219, 112, 147),
            born: Color32::from_rgb(255, 182, 193),
            text: Color32::from_rgb(255, 240, 245),
        }
    }
}

pub(crate) struct SettingsMenu {
    // Whether the menu is open.
    pub(crate) open: bool,

    sub_menus: Box<[Box<dyn Menu>]>,
}

impl SettingsMenu {
    pub(crate) fn draw(&mut self, settings: &mut Settings, ctx: &egui::Context) {
        let sub_menus = &mut self.sub_menus;

        egui::Window::new(SETTINGS_WINDOW)
            .open(&mut self.open)
            .resizable(false)
            .default_pos((40.0, 40.0))
            .show(ctx, |ui| {
                for menu in sub_menus.iter_mut() {
                    menu.draw(settings, ui);
                }
            });
    }
}

impl Default for SettingsMenu {
    fn default() -> Self {
        Self {
            open: false,
            sub_menus: Box::new([
                Box::new(SubMenu::<Colours>::default()),
                Box::new(SubMenu::<Keybinds>::default()),
            ]),
        }
    }
}

pub(crate) trait Menu {
    fn draw(&mut self, settings: &mut Settings, ui: &mut egui::Ui);
}

struct SubMenu<MenuType> {
    _variant: PhantomData<MenuType>,
}

impl<MenuType> Default for SubMenu<MenuType> {
    fn default() -> Self {
        Self {
            _variant: PhantomData,
        }
    }
}

struct Colours {}
struct Keybinds {}

/// Draws a colour picker with a button to reset the colour to its default.
fn colour_row(ui: &mut egui::Ui, label: &str, colour: &mut Color32, default: Color32) {
    ui.horizontal(|ui| {
        ui.label(label);
        ui.color_edit_button_srgba(colour);
        if ui.small_button(SETTINGS_RESET).clicked() {
            *colour = default;
        }
    });
}

impl Menu for SubMenu<Colours> {
    fn draw(&mut self, settings: &mut Settings, ui: &mut egui::Ui) {
        let defaults = ColourSettings::default();
        let colour = &mut settings.colour;

        egui::CollapsingHeader::new(SETTINGS_COLOUR_HEADER).show(ui, |ui| {
            colour_row(ui, SETTINGS_BACKGROUND_COLOUR, &mut colour.background, defaults.background);
            colour_row(ui, SETTINGS_GRID_COLOUR, &mut colour.grid, defaults.grid);
            colour_row(ui, SETTINGS_CELL_ALIVE_COLOUR, &mut colour.alive, defaults.alive);
            colour_row(ui, SETTINGS_CELL_DYING_COLOUR, &mut colour.dying, defaults.dying);
            colour_row(ui, SETTINGS_CELL_BORN_COLOUR, &mut colour.born, defaults.born);
            colour_row(ui, SETTINGS_TEXT_COLOUR, &mut colour.text, defaults.text);

            ui.checkbox(&mut settings.rainbow, SETTINGS_RAINBOW);
        });
    }
}

impl Menu for SubMenu<Keybinds> {
    fn draw(&mut self, settings: &mut Settings, ui: &mut egui::Ui) {
        egui::CollapsingHeader::new(SETTINGS_KEYBIND_HEADER).show(ui, |ui| {
            egui::Grid::new(SETTINGS_KEYBIND_HEADER).show(ui, |ui| {
                for keybind in enum_iterator::all::<Keybind>() {
                    ui.label(keybind.label());
                    ui.add(egui_keybind::Keybind::new(
                        settings.keybind.get_shortcut_mut(keybind),
                        keybind.label(),
                    ));
                    if ui.small_button(SETTINGS_RESET).clicked() {
                        settings.keybind.reset(keybind);
                    }
                    ui.end_row();
                }
            });
        });
    }
}
