mod edit;

use crate::{
    args::Config,
    render,
    settings::{
        keybinds::{drop_key_repeats, Keybind},
        Settings, SettingsMenu,
    },
    tick::TickTimer,
};
use egui::{Id, Sense};
use gol_lib::Board;
use rand::{rngs::StdRng, Rng, SeedableRng};
use std::time::{Duration, Instant};

/// The egui id for the board where the cells are being displayed.
const BOARD_ID: &str = "board";
/// The egui id for the debug window.
#[cfg(debug_assertions)]
const DEBUG_WINDOW: &str = "Debug_Window";

/// The least & most patterns stamped by [`Keybind::PlaceRandomPatterns`].
const RANDOM_PATTERN_COUNT: std::ops::RangeInclusive<usize> = 3..=6;

/// Whether the application should keep running after handling an action.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub(crate) enum Flow {
    Continue,
    Quit,
}

/// The struct that contains the data for the gui of my app.
pub struct LifeApp {
    /// Whether the debug window is open or not.
    #[cfg(debug_assertions)]
    debug_menu_open: bool,
    /// Time taken to produce the last frame.
    #[cfg(debug_assertions)]
    last_frame_time: Duration,

    /// The simulation being displayed.
    board: Board,
    /// The source of randomness for randomizing the board & placing random patterns.
    rng: StdRng,
    /// The chance of a cell being alive when the board is randomized.
    density: f64,
    /// The size of each cell in pixels.
    cell_size: f32,

    /// Whether the simulation is paused.
    paused: bool,
    /// Decides when the next frame of the simulation happens.
    timer: TickTimer,

    /// The settings for the current session.
    settings: Settings,
    settings_menu: SettingsMenu,
}

impl LifeApp {
    pub(crate) fn new(config: Config) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        let mut app = LifeApp {
            #[cfg(debug_assertions)]
            debug_menu_open: true,
            #[cfg(debug_assertions)]
            last_frame_time: Duration::ZERO,
            board: Board::new(config.cols, config.rows),
            rng,
            density: config.density,
            cell_size: config.cell_size,
            paused: false,
            timer: TickTimer::new(config.tick_period, Instant::now()),
            settings: Settings::new(),
            settings_menu: SettingsMenu::default(),
        };

        app.board.randomize(app.density, &mut app.rng);

        log::info!(
            "Started with a {}x{} board ({} px cells, {:?} per frame, density {}, seed {:?})",
            config.cols,
            config.rows,
            config.cell_size,
            config.tick_period,
            config.density,
            config.seed
        );

        app
    }

    /// Performs the action of the given keybind.
    pub(crate) fn apply(&mut self, keybind: Keybind) -> Flow {
        if let Some((pattern, col_divisor, row_divisor)) = keybind.preset() {
            let x = self.board.cols().get() / col_divisor;
            let y = self.board.rows().get() / row_divisor;
            self.board.place(pattern, (x as i32, y as i32), self.settings.rainbow);
            return Flow::Continue;
        }

        match keybind {
            Keybind::SettingsMenu => self.settings_menu.open = !self.settings_menu.open,
            Keybind::TogglePause => {
                self.paused = !self.paused;
                log::debug!("Paused: {}", self.paused);
            }
            Keybind::StepOnce => {
                if self.paused {
                    self.board.tick();
                }
            }
            Keybind::Randomize => self.board.randomize(self.density, &mut self.rng),
            Keybind::Clear => self.board.clear(),
            Keybind::PlaceRandomPatterns => {
                let count = self.rng.gen_range(RANDOM_PATTERN_COUNT);
                self.board.place_random_patterns(count, &mut self.rng);
            }
            Keybind::Quit | Keybind::QuitAlternate => return Flow::Quit,
            Keybind::PlaceGlider
            | Keybind::PlaceBlinker
            | Keybind::PlaceToad
            | Keybind::PlaceBeacon
            | Keybind::PlaceSpaceship => {}
        }

        Flow::Continue
    }

    /// Advances the simulation if a frame is due at the given time.
    ///
    /// The rainbow keeps drifting whilst the simulation is paused.
    /// Returns true if a frame happened.
    pub(crate) fn advance_frame(&mut self, now: Instant) -> bool {
        if !self.timer.poll(now) {
            return false;
        }

        if !self.paused {
            self.board.tick();
        }
        self.board.advance_rainbow();

        true
    }

    /// Checks if any keybinds have been pressed & executes the corresponding action.
    fn check_keybinds(&mut self, ctx: &egui::Context) {
        // Typing into a text field, such as when rebinding a key, must not trigger keybinds.
        if ctx.wants_keyboard_input() {
            return;
        }

        let keybind = &mut self.settings.keybind;
        let pressed = ctx.input_mut(|input| {
            drop_key_repeats(input);
            keybind.pressed(input)
        });

        for keybind in pressed {
            if self.apply(keybind) == Flow::Quit {
                log::info!("Quitting");
                ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                return;
            }
        }
    }

    /// Draws the debug window.
    ///
    /// This method only exists on debug builds.
    #[cfg(debug_assertions)]
    fn debug_window(&mut self, ctx: &egui::Context) {
        egui::Window::new(DEBUG_WINDOW)
            .open(&mut self.debug_menu_open)
            .default_pos((500.0, 40.0))
            .show(ctx, |ui| {
                ui.heading("Internal Values");
                ui.label(format!(
                    "Generation: {}\n\
                        Population: {}\n\
                        Board Size: {}x{}\n\
                        Rainbow Phase: {:.2}\n\
                        Paused: {}\n\
                        Cell Size: {}",
                    self.board.get_generation(),
                    self.board.population(),
                    self.board.cols(),
                    self.board.rows(),
                    self.board.rainbow_phase().get(),
                    self.paused,
                    self.cell_size
                ));
                ui.label(format!(
                    "Cursor Position: {}",
                    match ctx.pointer_latest_pos() {
                        Some(pos) => pos.to_string(),
                        None => "Offscreen".to_owned(),
                    },
                ));

                ui.separator();
                let secs_f64 = self.last_frame_time.as_secs_f64();
                if secs_f64.is_normal() {
                    let fps = 1.0 / secs_f64;
                    ui.label(format!("Frame Time: {:?} ({fps:.0} fps)", self.last_frame_time));
                }
            });
    }
}

impl eframe::App for LifeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        #[cfg(debug_assertions)]
        let start_time = Instant::now();
        #[cfg(debug_assertions)]
        self.debug_window(ctx);

        self.check_keybinds(ctx);
        self.settings_menu.draw(&mut self.settings, ctx);
        self.advance_frame(Instant::now());

        // Draws the central panel to provide the area for user interaction.
        egui::CentralPanel::default()
            .frame(egui::Frame::none())
            .show(ctx, |ui| {
                let board_rect = ui.max_rect();
                let interact = ui.interact(board_rect, Id::new(BOARD_ID), Sense::click());

                edit::board_interaction(
                    &mut self.board,
                    board_rect.min,
                    self.cell_size,
                    self.settings.rainbow,
                    &mut self.rng,
                    interact,
                );

                let painter = ui.painter();
                render::draw_board(
                    painter,
                    board_rect,
                    &self.board,
                    self.cell_size,
                    &self.settings.colour,
                );
                render::draw_overlay(painter, board_rect, self.paused, &self.settings.colour);
            });

        ctx.request_repaint_after(self.timer.remaining(Instant::now()));

        #[cfg(debug_assertions)]
        {
            self.last_frame_time = start_time.elapsed();
        }
    }
}

#[cfg(test)]
mod tests {
    use std::num::NonZeroUsize;

    use gol_lib::Pattern;

    use super::*;

    fn config() -> Config {
        Config {
            window_size: [200.0, 100.0],
            cell_size: 10.0,
            cols: NonZeroUsize::new(20).unwrap(),
            rows: NonZeroUsize::new(10).unwrap(),
            tick_period: Duration::from_millis(100),
            density: 0.3,
            seed: Some(7),
        }
    }

    #[test]
    /// The board starts randomized with the configured density.
    fn starts_randomized() {
        let app = LifeApp::new(config());

        assert!(app.board.population() > 0);
        assert_eq!(app.board.get_generation(), 0);
    }

    #[test]
    /// The same seed produces the same starting board.
    fn seeded_start_is_reproducible() {
        let first = LifeApp::new(config());
        let second = LifeApp::new(config());

        assert_eq!(first.board.grid(), second.board.grid());
    }

    #[test]
    fn clear_and_randomize() {
        let mut app = LifeApp::new(config());

        assert_eq!(app.apply(Keybind::Clear), Flow::Continue);
        assert_eq!(app.board.population(), 0);

        app.apply(Keybind::Randomize);
        assert!(app.board.population() > 0);
    }

    #[test]
    fn quit() {
        let mut app = LifeApp::new(config());

        assert_eq!(app.apply(Keybind::Quit), Flow::Quit);
        assert_eq!(app.apply(Keybind::QuitAlternate), Flow::Quit);
    }

    #[test]
    /// The numbered keys stamp their pattern at a fixed fraction of the board.
    fn preset_patterns() {
        let mut app = LifeApp::new(config());
        app.apply(Keybind::Clear);

        app.apply(Keybind::PlaceGlider);

        let mut expected = Board::new(config().cols, config().rows);
        expected.place(Pattern::Glider, (20 / 3, 10 / 3), true);
        assert_eq!(app.board.grid(), expected.grid());
        assert!(app.board.colour((20 / 3 + 1, 10 / 3)).is_some());
    }

    #[test]
    fn presets_follow_rainbow_setting() {
        let mut app = LifeApp::new(config());
        app.apply(Keybind::Clear);
        app.settings.rainbow = false;

        app.apply(Keybind::PlaceBlinker);

        assert_eq!(app.board.population(), 3);
        assert!(app.board.colour((20 / 3, 10 / 2)).is_none());
    }

    #[test]
    fn random_patterns() {
        let mut app = LifeApp::new(config());

        app.apply(Keybind::PlaceRandomPatterns);

        assert!(app.board.population() > 0);
        assert_eq!(app.board.get_generation(), 0);
    }

    #[test]
    /// Whilst paused no generations pass, but the rainbow keeps moving.
    fn pause_stops_the_simulation() {
        let mut app = LifeApp::new(config());
        let start = Instant::now();
        app.timer = TickTimer::new(Duration::from_millis(100), start);

        app.apply(Keybind::TogglePause);
        assert!(app.paused);
        assert!(app.advance_frame(start));
        assert_eq!(app.board.get_generation(), 0);
        assert!(app.board.rainbow_phase().get() > 0.0);

        app.apply(Keybind::TogglePause);
        assert!(!app.paused);
        assert!(app.advance_frame(start + Duration::from_millis(100)));
        assert_eq!(app.board.get_generation(), 1);
    }

    #[test]
    /// Frames only happen once the tick period has passed.
    fn frames_are_rate_limited() {
        let mut app = LifeApp::new(config());
        let start = Instant::now();
        app.timer = TickTimer::new(Duration::from_millis(100), start);

        assert!(app.advance_frame(start));
        assert!(!app.advance_frame(start + Duration::from_millis(50)));
        assert_eq!(app.board.get_generation(), 1);
    }

    #[test]
    /// Single stepping only works whilst paused.
    fn step_once() {
        let mut app = LifeApp::new(config());

        app.apply(Keybind::StepOnce);
        assert_eq!(app.board.get_generation(), 0);

        app.apply(Keybind::TogglePause);
        app.apply(Keybind::StepOnce);
        assert_eq!(app.board.get_generation(), 1);
    }

    #[test]
    fn toggle_settings_menu() {
        let mut app = LifeApp::new(config());

        app.apply(Keybind::SettingsMenu);
        assert!(app.settings_menu.open);
        app.apply(Keybind::SettingsMenu);
        assert!(!app.settings_menu.open);
    }
}
