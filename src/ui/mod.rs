pub mod app;
mod dialogs;
pub mod messages;
mod tabs;

pub use app::{App, Command, Tab};

use crate::catalog;
use crate::core::{GameState, OfflineReport};
use messages::Tone;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, List, ListItem, Paragraph, Tabs},
    Frame,
};

/// Draws the whole screen for one frame.
pub fn draw_ui(
    frame: &mut Frame,
    app: &App,
    state: &GameState,
    welcome_back: Option<&OfflineReport>,
    now: i64,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Length(3), // Tabs
            Constraint::Min(8),    // Tab body
            Constraint::Length(8), // Message log
            Constraint::Length(1), // Footer
        ])
        .split(frame.size());

    draw_header(frame, chunks[0], state);
    draw_tab_bar(frame, chunks[1], app);
    tabs::draw_tab(frame, chunks[2], app, state, now);
    draw_messages(frame, chunks[3], app);
    draw_footer(frame, chunks[4]);

    if app.confirm_reset {
        dialogs::draw_reset_confirm(frame, state);
    } else if app.show_welcome {
        if let Some(report) = welcome_back {
            dialogs::draw_welcome_back(frame, report);
        }
    }
}

/// Shop level, exp bar and gold.
fn draw_header(frame: &mut Frame, area: Rect, state: &GameState) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(24),
            Constraint::Min(10),
            Constraint::Length(20),
        ])
        .split(area);

    let title = Paragraph::new(Line::from(vec![
        Span::styled(
            "Weapon Shop ",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("Lv.{}", state.player.level),
            Style::default().fg(Color::Yellow),
        ),
    ]))
    .block(Block::default().borders(Borders::ALL));
    frame.render_widget(title, chunks[0]);

    let needed = catalog::exp_for_level(state.player.level);
    let ratio = if needed > 0 {
        (state.player.exp as f64 / needed as f64).clamp(0.0, 1.0)
    } else {
        0.0
    };
    let gauge = Gauge::default()
        .block(Block::default().borders(Borders::ALL).title("EXP"))
        .gauge_style(Style::default().fg(Color::Green))
        .label(format!("{}/{}", state.player.exp, needed))
        .ratio(ratio);
    frame.render_widget(gauge, chunks[1]);

    let gold = Paragraph::new(Span::styled(
        format!("{} gold", state.player.gold),
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    ))
    .alignment(Alignment::Right)
    .block(Block::default().borders(Borders::ALL));
    frame.render_widget(gold, chunks[2]);
}

fn draw_tab_bar(frame: &mut Frame, area: Rect, app: &App) {
    let titles: Vec<Line> = Tab::ALL
        .iter()
        .enumerate()
        .map(|(i, tab)| Line::from(format!("{} {}", i + 1, tab.title())))
        .collect();
    let tabs = Tabs::new(titles)
        .block(Block::default().borders(Borders::ALL))
        .select(app.tab.index())
        .highlight_style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        );
    frame.render_widget(tabs, area);
}

fn draw_messages(frame: &mut Frame, area: Rect, app: &App) {
    let items: Vec<ListItem> = app
        .messages
        .iter()
        .map(|message| {
            let color = match message.tone {
                Tone::Info => Color::White,
                Tone::Good => Color::Green,
                Tone::Bad => Color::Red,
            };
            ListItem::new(Span::styled(message.text.clone(), Style::default().fg(color)))
        })
        .collect();
    frame.render_widget(
        List::new(items).block(Block::default().borders(Borders::ALL).title("Log")),
        area,
    );
}

fn draw_footer(frame: &mut Frame, area: Rect) {
    let footer = Paragraph::new(Line::from(vec![
        Span::styled("[1-5/Tab]", Style::default().fg(Color::Cyan)),
        Span::raw(" tabs  "),
        Span::styled("[Up/Down]", Style::default().fg(Color::Cyan)),
        Span::raw(" select  "),
        Span::styled("[R]", Style::default().fg(Color::Cyan)),
        Span::raw(" reset  "),
        Span::styled("[Q]", Style::default().fg(Color::Cyan)),
        Span::raw(" quit"),
    ]))
    .alignment(Alignment::Center);
    frame.render_widget(footer, area);
}
