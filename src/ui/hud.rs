use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::config::{Difficulty, PALETTE};

const HUD_INNER_MARGIN_X: u16 = 1;

/// Draws the score and difficulty over the top wall strip of the board.
pub fn render_hud(frame: &mut Frame<'_>, strip: Rect, score: u32, difficulty: Difficulty) {
    let band = inset_horizontal(strip, HUD_INNER_MARGIN_X);
    let style = Style::default().fg(PALETTE.text).bg(PALETTE.wall);

    let [score_area, difficulty_area] =
        Layout::horizontal([Constraint::Min(0), Constraint::Length(difficulty_width(difficulty))])
            .areas(band);

    frame.render_widget(
        Paragraph::new(score_line(score))
            .alignment(Alignment::Left)
            .style(style),
        score_area,
    );
    frame.render_widget(
        Paragraph::new(Line::from(difficulty.label()))
            .alignment(Alignment::Right)
            .style(style.fg(PALETTE.muted)),
        difficulty_area,
    );
}

fn score_line(score: u32) -> Line<'static> {
    Line::from(vec![
        Span::raw("Score: "),
        Span::styled(
            score.to_string(),
            Style::default().add_modifier(Modifier::BOLD),
        ),
    ])
}

fn difficulty_width(difficulty: Difficulty) -> u16 {
    u16::try_from(difficulty.label().chars().count()).unwrap_or(u16::MAX)
}

fn inset_horizontal(area: Rect, margin: u16) -> Rect {
    let total_margin = margin.saturating_mul(2);
    Rect {
        x: area.x.saturating_add(margin),
        y: area.y,
        width: area.width.saturating_sub(total_margin),
        height: area.height,
    }
}

#[cfg(test)]
mod tests {
    use super::{inset_horizontal, score_line};
    use ratatui::layout::Rect;

    #[test]
    fn inset_shrinks_both_sides() {
        let inset = inset_horizontal(Rect::new(10, 2, 20, 1), 1);

        assert_eq!(inset, Rect::new(11, 2, 18, 1));
        assert_eq!(inset_horizontal(Rect::new(0, 0, 1, 1), 1).width, 0);
    }

    #[test]
    fn score_line_reads_naturally() {
        assert_eq!(score_line(12).to_string(), "Score: 12");
    }
}
