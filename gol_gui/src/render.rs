use egui::{pos2, vec2, Align2, Color32, FontId, Painter, Rect, Rounding, Stroke};
use gol_lib::{Board, CellState, Rgb};

use crate::{lang, settings::ColourSettings};

/// The size of the help & pause text.
const TEXT_SIZE: f32 = 18.0;
/// The distance between the top of each help line.
const LINE_SPACING: f32 = 22.0;
/// The distance of the text from the edges of the window.
const TEXT_MARGIN: f32 = 10.0;
/// How far left of the centre the pause text starts.
const PAUSE_TEXT_OFFSET: f32 = 100.0;

/// The colour a cell is drawn in, or [`None`] if it is not drawn.
///
/// A custom colour takes priority over the colour of the cell's animation state.
pub(crate) fn cell_colour(
    state: CellState,
    custom: Option<Rgb>,
    colours: &ColourSettings,
) -> Option<Color32> {
    match (state, custom) {
        (CellState::Dead, _) => None,
        (_, Some(Rgb(r, g, b))) => Some(Color32::from_rgb(r, g, b)),
        (CellState::Alive, None) => Some(colours.alive),
        (CellState::Dying, None) => Some(colours.dying),
        (CellState::Born, None) => Some(colours.born),
    }
}

/// The rectangle a cell is drawn in, leaving a one pixel gap for the grid lines.
pub(crate) fn cell_rect(origin: egui::Pos2, x: i32, y: i32, cell_size: f32) -> Rect {
    Rect::from_min_size(
        origin + vec2(x as f32 * cell_size + 1.0, y as f32 * cell_size + 1.0),
        vec2(cell_size - 1.0, cell_size - 1.0),
    )
}

/// Draws the background, grid lines & every visible cell of the board within `rect`.
pub(crate) fn draw_board(
    painter: &Painter,
    rect: Rect,
    board: &Board,
    cell_size: f32,
    colours: &ColourSettings,
) {
    painter.rect_filled(rect, Rounding::ZERO, colours.background);

    let stroke = Stroke::new(1.0, colours.grid);
    for col in 0..=board.cols().get() {
        let x = rect.left() + col as f32 * cell_size;
        painter.line_segment([pos2(x, rect.top()), pos2(x, rect.bottom())], stroke);
    }
    for row in 0..=board.rows().get() {
        let y = rect.top() + row as f32 * cell_size;
        painter.line_segment([pos2(rect.left(), y), pos2(rect.right(), y)], stroke);
    }

    for (position, state) in board.visible_cells() {
        let Some(colour) = cell_colour(state, board.display_colour(position), colours) else {
            continue;
        };

        painter.rect_filled(
            cell_rect(rect.min, position.get_x(), position.get_y(), cell_size),
            Rounding::ZERO,
            colour,
        );
    }
}

/// Draws the help text, and the pause indicator if the simulation is paused.
pub(crate) fn draw_overlay(painter: &Painter, rect: Rect, paused: bool, colours: &ColourSettings) {
    let font = FontId::proportional(TEXT_SIZE);

    for (index, line) in lang::HELP_LINES.iter().enumerate() {
        painter.text(
            rect.min + vec2(TEXT_MARGIN, TEXT_MARGIN + index as f32 * LINE_SPACING),
            Align2::LEFT_TOP,
            line,
            font.clone(),
            colours.text,
        );
    }

    if paused {
        painter.text(
            rect.min + vec2(rect.width() / 2.0 - PAUSE_TEXT_OFFSET, TEXT_MARGIN),
            Align2::LEFT_TOP,
            lang::PAUSED,
            font,
            colours.text,
        );
    }
}

#[cfg(test)]
mod tests {
    use gol_lib::{RainbowColour, RainbowPhase, RAINBOW};

    use super::*;

    #[test]
    fn dead_cells_are_not_drawn() {
        let colours = ColourSettings::default();

        assert_eq!(cell_colour(CellState::Dead, None, &colours), None);
        assert_eq!(cell_colour(CellState::Dead, Some(RAINBOW[0]), &colours), None);
    }

    #[test]
    fn state_colours() {
        let colours = ColourSettings::default();

        assert_eq!(cell_colour(CellState::Alive, None, &colours), Some(colours.alive));
        assert_eq!(cell_colour(CellState::Dying, None, &colours), Some(colours.dying));
        assert_eq!(cell_colour(CellState::Born, None, &colours), Some(colours.born));
    }

    #[test]
    /// Rainbow cells keep their colour whatever their animation state.
    fn custom_colour_overrides_state() {
        let colours = ColourSettings::default();
        let rgb = RainbowColour::for_offset(1, 0).shifted(RainbowPhase::default());
        let expected = Color32::from_rgb(rgb.0, rgb.1, rgb.2);

        for state in [CellState::Alive, CellState::Dying, CellState::Born] {
            assert_eq!(cell_colour(state, Some(rgb), &colours), Some(expected));
        }
    }

    #[test]
    /// Cells are inset so the grid lines stay visible.
    fn cells_are_inset() {
        let rect = cell_rect(pos2(0.0, 0.0), 2, 3, 10.0);

        assert_eq!(rect.min, pos2(21.0, 31.0));
        assert_eq!(rect.size(), vec2(9.0, 9.0));
    }
}
