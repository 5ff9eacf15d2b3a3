use egui::{InputState, Key, KeyboardShortcut, Modifiers};
use egui_keybind::{Bind, Shortcut};
use enum_iterator::Sequence;
use gol_lib::Pattern;

use crate::lang;

/// The keybind identifiers that this application is listening for.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Sequence)]
pub(crate) enum Keybind {
    SettingsMenu,
    TogglePause,
    StepOnce,
    Randomize,
    Clear,
    PlaceRandomPatterns,
    PlaceGlider,
    PlaceBlinker,
    PlaceToad,
    PlaceBeacon,
    PlaceSpaceship,
    Quit,
    QuitAlternate,
}

/// A combination of a keybind identifier and the input data needed to trigger the keybind.
#[derive(Debug)]
pub(crate) struct KeybindData {
    /// Keybind identifier
    keybind: Keybind,
    /// Trigger
    shortcut: Shortcut,
}

/// Holds the collection of [`Keybind`]s and their corresponding [`Shortcut`]s.
#[derive(Debug)]
pub(crate) struct KeybindHolder {
    /// The keybinds this application is listening for.
    ///
    /// It is guaranteed that each keybind will have one and exactly one entry in this vector.
    keybinds: Vec<KeybindData>,
}

impl PartialEq<Keybind> for KeybindData {
    fn eq(&self, other: &Keybind) -> bool {
        self.keybind == *other
    }
}

/// Creates a shortcut triggered by the given key without any modifiers.
fn key(key: Key) -> Shortcut {
    Shortcut::new(Some(KeyboardShortcut::new(Modifiers::NONE, key)), None)
}

impl Keybind {
    pub(crate) fn get_default(self) -> KeybindData {
        let shortcut = match self {
            Keybind::SettingsMenu => Shortcut::new(
                Some(KeyboardShortcut::new(Modifiers::COMMAND, Key::Comma)),
                None,
            ),
            Keybind::TogglePause => key(Key::Space),
            Keybind::StepOnce => key(Key::N),
            Keybind::Randomize => key(Key::R),
            Keybind::Clear => key(Key::C),
            Keybind::PlaceRandomPatterns => key(Key::P),
            Keybind::PlaceGlider => key(Key::Num1),
            Keybind::PlaceBlinker => key(Key::Num2),
            Keybind::PlaceToad => key(Key::Num3),
            Keybind::PlaceBeacon => key(Key::Num4),
            Keybind::PlaceSpaceship => key(Key::Num5),
            Keybind::Quit => key(Key::Q),
            Keybind::QuitAlternate => key(Key::Escape),
        };

        KeybindData {
            keybind: self,
            shortcut,
        }
    }

    /// The name of the keybind shown to the user.
    pub(crate) fn label(self) -> &'static str {
        match self {
            Keybind::SettingsMenu => lang::KEYBIND_SETTINGS_MENU,
            Keybind::TogglePause => lang::KEYBIND_TOGGLE_PAUSE,
            Keybind::StepOnce => lang::KEYBIND_STEP_ONCE,
            Keybind::Randomize => lang::KEYBIND_RANDOMIZE,
            Keybind::Clear => lang::KEYBIND_CLEAR,
            Keybind::PlaceRandomPatterns => lang::KEYBIND_RANDOM_PATTERNS,
            Keybind::PlaceGlider => lang::KEYBIND_GLIDER,
            Keybind::PlaceBlinker => lang::KEYBIND_BLINKER,
            Keybind::PlaceToad => lang::KEYBIND_TOAD,
            Keybind::PlaceBeacon => lang::KEYBIND_BEACON,
            Keybind::PlaceSpaceship => lang::KEYBIND_SPACESHIP,
            Keybind::Quit => lang::KEYBIND_QUIT,
            Keybind::QuitAlternate => lang::KEYBIND_QUIT_ALTERNATE,
        }
    }

    /// The pattern a numbered keybind stamps, & where it is stamped.
    ///
    /// The position is given as the amounts the board's width & height are divided by.
    pub(crate) fn preset(self) -> Option<(Pattern, usize, usize)> {
        match self {
            Keybind::PlaceGlider => Some((Pattern::Glider, 3, 3)),
            Keybind::PlaceBlinker => Some((Pattern::Blinker, 3, 2)),
            Keybind::PlaceToad => Some((Pattern::Toad, 2, 2)),
            Keybind::PlaceBeacon => Some((Pattern::Beacon, 2, 3)),
            Keybind::PlaceSpaceship => Some((Pattern::Spaceship, 2, 2)),
            _ => None,
        }
    }
}

impl Default for KeybindHolder {
    fn default() -> Self {
        Self {
            keybinds: enum_iterator::all::<Keybind>()
                .map(|keybind| keybind.get_default())
                .collect(),
        }
    }
}

impl KeybindHolder {
    /// Returns a mutable reference to the [`Shortcut`] that the given [`Keybind`] will be triggered by.
    pub(crate) fn get_shortcut_mut(&mut self, keybind: Keybind) -> &mut Shortcut {
        self.keybinds
            .iter_mut()
            .find(|data| **data == keybind)
            .map(|data| &mut data.shortcut)
            .expect("All keybinds are guaranteed to be in the vector.")
    }

    /// Resets the [`Shortcut`] of the given [`Keybind`] to its default value.
    pub(crate) fn reset(&mut self, keybind: Keybind) {
        self.keybinds
            .iter_mut()
            .filter(|data| **data == keybind)
            .for_each(|data| *data = keybind.get_default());
    }

    /// Returns the [`Keybind`]s that have been triggered by the given [`InputState`].
    ///
    /// If a keybind has been pressed, then it consumes the input keys. This prevents any other matches.
    /// Due to this keybinds are checked via the most complex keybinds (ones with the most keys) first.
    pub(crate) fn pressed(&mut self, input_state: &mut InputState) -> Vec<Keybind> {
        // Ensure that the keybinds are in the correct order.
        self.sort();

        self.keybinds
            .iter()
            .filter_map(|data| data.shortcut.pressed(input_state).then_some(data.keybind))
            .collect()
    }

    /// Sorts the internal keybind data structure, such that more complex keybinds are towards the front of the vector.
    fn sort(&mut self) {
        // Not unstable so that keybind order remains consistent.
        self.keybinds.sort_by_key(|data| {
            let mut weight = u8::MAX;

            let keyboard_shortcut = match data.shortcut.keyboard() {
                Some(var) => var,
                None => return weight,
            };

            if keyboard_shortcut.modifiers.alt {
                weight -= 1;
            }
            if keyboard_shortcut.modifiers.shift {
                weight -= 1;
            }
            if keyboard_shortcut.modifiers.command || keyboard_shortcut.modifiers.ctrl {
                weight -= 1;
            }

            weight
        });
    }
}

/// Removes key presses generated by a key being held down, so that each keybind fires once per press.
pub(crate) fn drop_key_repeats(input_state: &mut InputState) {
    input_state
        .events
        .retain(|event| !matches!(event, egui::Event::Key { repeat: true, .. }));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// Every keybind has exactly one shortcut.
    fn one_shortcut_per_keybind() {
        let holder = KeybindHolder::default();

        for keybind in enum_iterator::all::<Keybind>() {
            let count = holder.keybinds.iter().filter(|data| **data == keybind).count();
            assert_eq!(count, 1, "{keybind:?} must have exactly one shortcut");
        }
    }

    #[test]
    /// Keybinds with modifiers are checked before plain keys.
    fn sort_puts_modifiers_first() {
        let mut holder = KeybindHolder::default();
        holder.sort();

        assert_eq!(holder.keybinds[0].keybind, Keybind::SettingsMenu);
    }

    #[test]
    fn reset_restores_default() {
        let mut holder = KeybindHolder::default();
        *holder.get_shortcut_mut(Keybind::Clear) = key(Key::X);
        assert_eq!(
            holder.get_shortcut_mut(Keybind::Clear).keyboard(),
            key(Key::X).keyboard()
        );

        holder.reset(Keybind::Clear);
        assert_eq!(
            holder.get_shortcut_mut(Keybind::Clear).keyboard(),
            Some(KeyboardShortcut::new(Modifiers::NONE, Key::C))
        );
    }

    #[test]
    fn presets() {
        assert_eq!(Keybind::PlaceGlider.preset(), Some((Pattern::Glider, 3, 3)));
        assert_eq!(Keybind::PlaceSpaceship.preset(), Some((Pattern::Spaceship, 2, 2)));
        assert_eq!(Keybind::Clear.preset(), None);
    }

    #[test]
    /// Held keys only trigger their keybind once.
    fn repeats_are_dropped() {
        let key_event = |repeat| egui::Event::Key {
            key: Key::Space,
            physical_key: None,
            pressed: true,
            repeat,
            modifiers: Modifiers::NONE,
        };

        let mut input_state = InputState::default();
        input_state.events = vec![key_event(false), key_event(true), key_event(true)];
        drop_key_repeats(&mut input_state);

        assert_eq!(input_state.events, vec![key_event(false)]);
    }
}
