use egui::Pos2;
use gol_lib::{Area, Board, GlobalPosition, Pattern};
use rand::Rng;

/// Converts a position on the screen into the position of the cell underneath it.
///
/// Returns [`None`] if the pointer is outside of the given area of the board.
pub(crate) fn pointer_to_cell(
    pointer: Pos2,
    origin: Pos2,
    cell_size: f32,
    area: Area,
) -> Option<GlobalPosition> {
    let relative = pointer - origin;
    let x = (relative.x / cell_size).floor();
    let y = (relative.y / cell_size).floor();

    if !x.is_finite() || !y.is_finite() {
        return None;
    }

    let position = GlobalPosition::new(x as i32, y as i32);
    area.contains(position).then_some(position)
}

/// The mouse buttons that edit the board.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub(crate) enum Click {
    /// Toggles the cell under the pointer.
    Primary,
    /// Stamps a random pattern at the cell under the pointer.
    Secondary,
}

/// Performs the edit for the given click at the pointer position.
///
/// Returns the cell that was clicked, or [`None`] if the pointer was not over the board.
pub(crate) fn click(
    board: &mut Board,
    pointer: Pos2,
    origin: Pos2,
    cell_size: f32,
    button: Click,
    rainbow: bool,
    rng: &mut impl Rng,
) -> Option<GlobalPosition> {
    let position = pointer_to_cell(pointer, origin, cell_size, board.area())?;

    match button {
        Click::Primary => {
            let cell = board.toggle(position);
            log::debug!("Toggled {position:?} to {cell:?}");
        }
        Click::Secondary => board.place(Pattern::random(rng), position, rainbow),
    }

    Some(position)
}

/// Edits the board in response to the user clicking on it.
pub(crate) fn board_interaction(
    board: &mut Board,
    origin: Pos2,
    cell_size: f32,
    rainbow: bool,
    rng: &mut impl Rng,
    interact: egui::Response,
) {
    let Some(pointer) = interact.interact_pointer_pos() else {
        return;
    };

    if interact.clicked() {
        click(board, pointer, origin, cell_size, Click::Primary, rainbow, rng);
    }
    if interact.secondary_clicked() {
        click(board, pointer, origin, cell_size, Click::Secondary, rainbow, rng);
    }
}
