use super::messages::format_loot;
use crate::core::{GameState, OfflineReport};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

/// Centered rectangle of at most `width` x `height` inside `area`.
fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width.saturating_sub(4));
    let height = height.min(area.height.saturating_sub(4));
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width, height)
}

fn draw_dialog(frame: &mut Frame, area: Rect, title: &str, color: Color, lines: Vec<Line>) {
    frame.render_widget(Clear, area);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color))
        .title(Span::styled(
            format!(" {} ", title),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ));
    frame.render_widget(
        Paragraph::new(lines)
            .block(block)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true }),
        area,
    );
}

/// Draws the reset confirmation as an overlay.
pub fn draw_reset_confirm(frame: &mut Frame, state: &GameState) {
    let area = centered(frame.size(), 50, 11);
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "Starting over will erase:",
            Style::default().fg(Color::Red),
        )),
        Line::from(format!(
            "Shop level {} and {} gold",
            state.player.level, state.player.gold
        )),
        Line::from(format!(
            "{} adventurers and all stock",
            state.adventurers.len()
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("[Y]", Style::default().fg(Color::Green)),
            Span::raw(" Reset   "),
            Span::styled("[any other key]", Style::default().fg(Color::Yellow)),
            Span::raw(" Cancel"),
        ]),
    ];
    draw_dialog(frame, area, "Reset Shop?", Color::Red, lines);
}

/// Welcome-back summary after offline catch-up.
pub fn draw_welcome_back(frame: &mut Frame, report: &OfflineReport) {
    let area = centered(frame.size(), 60, 13);
    let hours = report.offline_seconds / 3600.0;
    let mut lines = vec![
        Line::from(""),
        Line::from(format!("You were away for {:.1} hours.", hours)),
    ];
    if report.capped {
        lines.push(Line::from(Span::styled(
            "Only the most recent stretch was simulated.",
            Style::default().fg(Color::DarkGray),
        )));
    }
    lines.extend([
        Line::from(""),
        Line::from(format!("Dungeon runs finished: {}", report.cycles_resolved)),
        Line::from(format!(
            "Adventurers back in town: {}",
            report.adventurers_returned
        )),
        Line::from(format!("Level ups: {}", report.adventurer_level_ups)),
        Line::from(format!("Loot: {}", format_loot(&report.loot_gathered))),
        Line::from(""),
        Line::from(Span::styled(
            "Press any key to continue",
            Style::default().fg(Color::Yellow),
        )),
    ]);
    draw_dialog(frame, area, "Welcome Back", Color::Cyan, lines);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_fits_inside_small_area() {
        let rect = centered(Rect::new(0, 0, 30, 10), 50, 11);
        assert_eq!(rect.width, 26);
        assert_eq!(rect.height, 6);
        assert_eq!(rect.x, 2);
        assert_eq!(rect.y, 2);
    }
}
