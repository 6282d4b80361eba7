use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Paragraph};
use ratatui::Frame;

use crate::chain::GridPosition;
use crate::config::{GridSize, GLYPH_HALF_UPPER, PALETTE};
use crate::game::{FrameView, Phase};
use crate::tile_map::{Tile, TileMap};
use crate::ui::hud::render_hud;
use crate::ui::menu::{render_game_over_menu, render_pause_menu, render_start_menu};

/// Screen placement of the tile grid.
///
/// Every tile is `scale` terminal columns wide and `scale` half-lines tall, so
/// tiles come out roughly square and two tile rows share one terminal line.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct BoardLayout {
    pub area: Rect,
    pub scale: u16,
}

impl BoardLayout {
    /// Largest integer scale that fits `size` inside `area`, centered.
    /// Returns `None` when not even one cell per tile fits.
    #[must_use]
    pub fn fit(area: Rect, size: GridSize) -> Option<Self> {
        let columns = size.columns.max(1);
        let rows = size.rows.max(1);
        let scale = (area.width / columns).min(area.height.saturating_mul(2) / rows);
        if scale == 0 {
            return None;
        }

        let width = columns * scale;
        let height = (rows * scale).div_ceil(2);
        Some(Self {
            area: Rect {
                x: area.x + (area.width - width) / 2,
                y: area.y + (area.height - height) / 2,
                width,
                height,
            },
            scale,
        })
    }

    /// Terminal lines covered by the two-row top wall.
    #[must_use]
    pub fn top_strip(self) -> Rect {
        Rect {
            height: self.scale.min(self.area.height),
            ..self.area
        }
    }
}

/// Draws one frame from the read-only view handed out by the game state.
pub fn render(frame: &mut Frame<'_>, view: &FrameView<'_>) {
    let area = frame.area();
    frame.render_widget(Block::new().style(Style::new().bg(PALETTE.backdrop)), area);

    match view.phase {
        Phase::Menu => render_start_menu(frame, area, view.difficulty),
        Phase::GameOver => render_game_over_menu(
            frame,
            area,
            view.score,
            view.difficulty,
            view.death_reason,
        ),
        Phase::Playing | Phase::Paused => {
            let Some(board) = BoardLayout::fit(area, view.tiles.size()) else {
                render_too_small(frame, area, view.tiles.size());
                return;
            };

            render_tiles(frame.buffer_mut(), board, view.tiles);
            render_hud(frame, board.top_strip(), view.score, view.difficulty);

            if view.phase == Phase::Paused {
                render_pause_menu(frame, board.area);
            }
        }
        Phase::Quit => {}
    }
}

fn render_tiles(buffer: &mut Buffer, board: BoardLayout, tiles: &TileMap) {
    let scale = i32::from(board.scale);

    for y in 0..board.area.height {
        let upper_row = 2 * i32::from(y) / scale;
        let lower_row = (2 * i32::from(y) + 1) / scale;

        for x in 0..board.area.width {
            let column = i32::from(x) / scale;
            let upper = tile_color(tiles, GridPosition::new(upper_row, column));
            let lower = tile_color(tiles, GridPosition::new(lower_row, column));

            buffer.set_string(
                board.area.x + x,
                board.area.y + y,
                GLYPH_HALF_UPPER,
                Style::new().fg(upper).bg(lower),
            );
        }
    }
}

fn tile_color(tiles: &TileMap, position: GridPosition) -> Color {
    match tiles.get(position) {
        Some(Tile::Empty) => PALETTE.empty,
        Some(Tile::Body) => PALETTE.body,
        Some(Tile::Head) => PALETTE.head,
        Some(Tile::Wall) => PALETTE.wall,
        Some(Tile::Food) => PALETTE.food,
        None => PALETTE.backdrop,
    }
}

fn render_too_small(frame: &mut Frame<'_>, area: Rect, size: GridSize) {
    let lines = vec![
        Line::from("Terminal too small"),
        Line::from(format!(
            "need at least {}x{}",
            size.columns,
            size.rows.div_ceil(2)
        )),
    ];
    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .style(Style::new().fg(PALETTE.text)),
        area,
    );
}
