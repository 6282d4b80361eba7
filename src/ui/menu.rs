use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Clear, Paragraph};
use ratatui::Frame;

use crate::config::{Difficulty, PALETTE};
use crate::game::Collision;

/// Blank columns between a panel's border and its widest line, per side.
const PANEL_PADDING: u16 = 1;

/// Draws the start screen with the currently selected difficulty.
pub fn render_start_menu(frame: &mut Frame<'_>, area: Rect, difficulty: Difficulty) {
    let lines = vec![
        heading("SNEK", PALETTE.head),
        Line::from(""),
        Line::from(format!("Difficulty selected: {}", difficulty.label())),
        Line::from(""),
        Line::from("[E] Easy  [R] Regular  [Q] Hard"),
        Line::from("Any other key to start"),
        Line::from(""),
        Line::from("Arrows/WASD steer, [P] pause, [Esc] quit")
            .style(Style::new().fg(PALETTE.muted)),
    ];
    render_panel(frame, area, lines);
}

/// Draws the pause notice over the board.
pub fn render_pause_menu(frame: &mut Frame<'_>, area: Rect) {
    let lines = vec![
        heading("PAUSED", PALETTE.text),
        Line::from(""),
        Line::from("[P] Resume"),
        Line::from("[Esc] Quit"),
    ];
    render_panel(frame, area, lines);
}

/// Draws the game-over screen with the final score.
pub fn render_game_over_menu(
    frame: &mut Frame<'_>,
    area: Rect,
    score: u32,
    difficulty: Difficulty,
    death_reason: Option<Collision>,
) {
    let mut lines = vec![
        heading("GAME OVER", PALETTE.food),
        Line::from(""),
        Line::from(format!("Final score: {score}")),
        Line::from(format!("Difficulty: {}", difficulty.label())),
    ];
    match death_reason {
        Some(Collision::Boundary) => lines.push(Line::from("Cause: hit wall")),
        Some(Collision::SelfCollision) => lines.push(Line::from("Cause: hit yourself")),
        None => {}
    }
    lines.push(Line::from(""));
    lines.push(Line::from("Any key to return to the menu"));

    render_panel(frame, area, lines);
}

fn heading(text: &'static str, color: Color) -> Line<'static> {
    Line::from(text).style(Style::new().fg(color).add_modifier(Modifier::BOLD))
}

fn render_panel(frame: &mut Frame<'_>, area: Rect, lines: Vec<Line<'_>>) {
    let panel = panel_area(area, &lines);
    frame.render_widget(Clear, panel);
    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .style(Style::new().fg(PALETTE.text).bg(PALETTE.backdrop))
            .block(Block::bordered().border_style(Style::new().fg(PALETTE.muted))),
        panel,
    );
}

/// Smallest bordered rectangle that holds `lines`, centered in `area` and
/// clipped to it.
fn panel_area(area: Rect, lines: &[Line<'_>]) -> Rect {
    let widest = lines.iter().map(Line::width).max().unwrap_or(0);
    let width = u16::try_from(widest)
        .unwrap_or(u16::MAX)
        .saturating_add(2 * (PANEL_PADDING + 1));
    let height = u16::try_from(lines.len())
        .unwrap_or(u16::MAX)
        .saturating_add(2);

    let [row] = Layout::vertical([Constraint::Length(height.min(area.height))])
        .flex(Flex::Center)
        .areas(area);
    let [panel] = Layout::horizontal([Constraint::Length(width.min(area.width))])
        .flex(Flex::Center)
        .areas(row);
    panel
}
