//! Board rendering for the Connect-Four GUI

use egui::{CornerRadius, Painter, Pos2, Rect, Sense, Stroke, Vec2};

use crate::{Board, Cell, Player, HEIGHT, WIDTH};

use super::theme::*;

/// Board view handles rendering and input for the game board
pub struct BoardView {
    /// Cached cell size for coordinate calculations
    cell_size: f32,
    /// Board drawing area
    board_rect: Rect,
}

impl Default for BoardView {
    fn default() -> Self {
        Self {
            cell_size: 60.0,
            board_rect: Rect::NOTHING,
        }
    }
}

impl BoardView {
    /// Render the board and return the clicked column if any
    pub fn show(
        &mut self,
        ui: &mut egui::Ui,
        board: &Board,
        last_move: Option<Cell>,
        winning_cells: &[Cell],
        accepts_input: bool,
    ) -> Option<usize> {
        let available = ui.available_size();

        // Fit a 7:6 board into the available space
        self.cell_size = ((available.x - 2.0 * BOARD_MARGIN) / WIDTH as f32)
            .min((available.y - 2.0 * BOARD_MARGIN) / HEIGHT as f32)
            .max(10.0);
        let size = Vec2::new(
            self.cell_size * WIDTH as f32 + 2.0 * BOARD_MARGIN,
            self.cell_size * HEIGHT as f32 + 2.0 * BOARD_MARGIN,
        );

        let (response, painter) = ui.allocate_painter(size, Sense::click());
        self.board_rect = response.rect;

        painter.rect_filled(self.board_rect, CornerRadius::same(12), BOARD_BG);
        painter.rect_stroke(
            self.board_rect,
            CornerRadius::same(12),
            Stroke::new(3.0, BOARD_BORDER),
            egui::StrokeKind::Inside,
        );

        self.draw_coins(&painter, board);

        if let Some(cell) = last_move {
            painter.circle_filled(self.cell_center(cell), LAST_MOVE_MARKER_RADIUS, LAST_MOVE_MARKER);
        }

        for &cell in winning_cells {
            let radius = self.cell_size * COIN_RADIUS_RATIO + 2.0;
            painter.circle_stroke(self.cell_center(cell), radius, Stroke::new(4.0, WIN_HIGHLIGHT));
        }

        // Hover preview and click
        if !accepts_input {
            return None;
        }
        let column = response.hover_pos().and_then(|p| self.screen_to_column(p))?;
        if !board.is_valid(column) {
            return None;
        }

        let drop_cell = Cell::new(column as u8, board.column_height(column)? as u8);
        painter.circle_filled(
            self.cell_center(drop_cell),
            self.cell_size * COIN_RADIUS_RATIO,
            hover_preview(board.side_to_move()),
        );

        response.clicked().then_some(column)
    }

    /// Draw every hole, filled or empty
    fn draw_coins(&self, painter: &Painter, board: &Board) {
        let radius = self.cell_size * COIN_RADIUS_RATIO;
        for column in 0..WIDTH {
            for row in 0..HEIGHT {
                let cell = Cell::new(column as u8, row as u8);
                let center = self.cell_center(cell);
                match board.cell(column, row) {
                    Some(player) => self.draw_coin(painter, center, radius, player),
                    None => {
                        painter.circle_filled(center, radius, HOLE);
                    }
                }
            }
        }
    }

    fn draw_coin(&self, painter: &Painter, center: Pos2, radius: f32, player: Player) {
        let (fill, border) = coin_colors(player);
        painter.circle_filled(center, radius, fill);
        painter.circle_stroke(
            center,
            radius - COIN_BORDER_WIDTH * 0.5,
            Stroke::new(COIN_BORDER_WIDTH, border),
        );
    }

    /// Column under a screen position, if it lies on the board
    pub fn screen_to_column(&self, screen_pos: Pos2) -> Option<usize> {
        if !self.board_rect.contains(screen_pos) {
            return None;
        }
        let x = (screen_pos.x - self.board_rect.min.x - BOARD_MARGIN) / self.cell_size;
        (x >= 0.0 && x < WIDTH as f32).then(|| x as usize)
    }

    /// Screen center of a cell; row 0 is drawn at the bottom
    pub fn cell_center(&self, cell: Cell) -> Pos2 {
        let x = self.board_rect.min.x + BOARD_MARGIN + (cell.column as f32 + 0.5) * self.cell_size;
        let y = self.board_rect.max.y - BOARD_MARGIN - (cell.row as f32 + 0.5) * self.cell_size;
        Pos2::new(x, y)
    }
}
