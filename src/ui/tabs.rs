//! Body of each tab.

use super::app::{App, Tab};
use super::messages::format_loot;
use crate::adventurer::{Adventurer, AdventurerStatus};
use crate::catalog::{self, DungeonId, WeaponId};
use crate::core::GameState;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};

pub fn draw_tab(frame: &mut Frame, area: Rect, app: &App, state: &GameState, now: i64) {
    match app.tab {
        Tab::Craft => draw_craft(frame, area, app, state),
        Tab::Shop => draw_shop(frame, area, app, state),
        Tab::Dungeon => draw_dungeon(frame, area, app, state),
        Tab::Adventurers => draw_adventurers(frame, area, app, state, now),
        Tab::Stats => draw_stats(frame, area, state),
    }
}

fn highlight() -> Style {
    Style::default()
        .bg(Color::DarkGray)
        .add_modifier(Modifier::BOLD)
}

fn rank_color(weapon: WeaponId) -> Color {
    let (r, g, b) = catalog::weapon(weapon).rank.color();
    Color::Rgb(r, g, b)
}

fn render_list(frame: &mut Frame, area: Rect, title: &str, items: Vec<ListItem>, selected: usize) {
    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title(title.to_string()))
        .highlight_style(highlight())
        .highlight_symbol("> ");
    let mut list_state = ListState::default();
    list_state.select(Some(selected));
    frame.render_stateful_widget(list, area, &mut list_state);
}

fn materials_text(required: &[(catalog::MaterialId, u32)], state: &GameState) -> Vec<Span<'static>> {
    let mut spans = Vec::new();
    for (i, (material, amount)) in required.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw(", "));
        }
        let have = state.inventory.material(*material);
        let color = if have >= *amount {
            Color::Green
        } else {
            Color::Red
        };
        spans.push(Span::styled(
            format!("{} {}/{}", catalog::material(*material).name, have, amount),
            Style::default().fg(color),
        ));
    }
    spans
}

fn draw_craft(frame: &mut Frame, area: Rect, app: &App, state: &GameState) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(area);

    let items: Vec<ListItem> = WeaponId::ALL
        .iter()
        .map(|id| {
            let weapon = catalog::weapon(*id);
            let locked = state.player.level < weapon.required_level;
            let mut spans = vec![Span::styled(
                format!("{} {:<14}", weapon.icon, weapon.name),
                Style::default().fg(rank_color(*id)),
            )];
            if locked {
                spans.push(Span::styled(
                    format!(" requires shop Lv.{}", weapon.required_level),
                    Style::default().fg(Color::DarkGray),
                ));
            } else {
                spans.push(Span::raw(" "));
                spans.extend(materials_text(weapon.required_materials, state));
            }
            ListItem::new(Line::from(spans))
        })
        .collect();
    render_list(frame, chunks[0], "Recipes [Enter] craft", items, app.selected_row);

    let mut lines = vec![Line::from(Span::styled(
        "Materials",
        Style::default().add_modifier(Modifier::BOLD),
    ))];
    for id in catalog::MaterialId::ALL {
        let count = state.inventory.material(id);
        if count > 0 {
            let material = catalog::material(id);
            lines.push(Line::from(format!("{} {:<17} {}", material.icon, material.name, count)));
        }
    }
    frame.render_widget(
        Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title("Storage")),
        chunks[1],
    );
}

fn adventurer_picker(app: &App, state: &GameState) -> Line<'static> {
    match state.adventurers.get(app.selected_adventurer) {
        Some(adv) => Line::from(vec![
            Span::raw("[<-/->] "),
            Span::styled(
                adv.name.clone(),
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(format!(
                " Lv.{} {} ATK {} HP {}/{} {}g",
                adv.level,
                adv.status.label(),
                adv.total_attack(),
                adv.hp,
                adv.max_hp,
                adv.gold
            )),
        ]),
        None => Line::from("No adventurers"),
    }
}

fn draw_shop(frame: &mut Frame, area: Rect, app: &App, state: &GameState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(0)])
        .split(area);

    frame.render_widget(
        Paragraph::new(adventurer_picker(app, state))
            .block(Block::default().borders(Borders::ALL).title("Customer")),
        chunks[0],
    );

    let items: Vec<ListItem> = WeaponId::ALL
        .iter()
        .map(|id| {
            let weapon = catalog::weapon(*id);
            let stock = state.inventory.weapon(*id);
            let style = if stock > 0 {
                Style::default().fg(rank_color(*id))
            } else {
                Style::default().fg(Color::DarkGray)
            };
            ListItem::new(Line::from(vec![
                Span::styled(format!("{} {:<14}", weapon.icon, weapon.name), style),
                Span::raw(format!(
                    " x{:<3} {:>5}g  ATK +{}  ({}g direct)",
                    stock,
                    weapon.sell_price,
                    weapon.attack_bonus,
                    catalog::direct_sale_price(weapon.sell_price)
                )),
            ]))
        })
        .collect();
    render_list(
        frame,
        chunks[1],
        "Stock [Enter] sell to customer [d] sell direct",
        items,
        app.selected_row,
    );
}

fn draw_dungeon(frame: &mut Frame, area: Rect, app: &App, state: &GameState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(0)])
        .split(area);

    let mut picker = adventurer_picker(app, state);
    picker.spans.push(Span::styled(
        format!("   runs: {} [r]", app.runs()),
        Style::default().fg(Color::Yellow),
    ));
    frame.render_widget(
        Paragraph::new(picker).block(Block::default().borders(Borders::ALL).title("Party")),
        chunks[0],
    );

    let selected = state.adventurers.get(app.selected_adventurer);
    let items: Vec<ListItem> = DungeonId::ALL
        .iter()
        .map(|id| {
            let dungeon = catalog::dungeon(*id);
            let preview = match selected {
                Some(adv) if adv.level >= dungeon.required_level => {
                    let rate = catalog::success_rate(adv.total_attack(), dungeon.difficulty)
                        .clamp(0.0, 1.0);
                    let color = if rate >= 0.7 {
                        Color::Green
                    } else if rate >= 0.4 {
                        Color::Yellow
                    } else {
                        Color::Red
                    };
                    Span::styled(
                        format!("{:>3.0}% success", rate * 100.0),
                        Style::default().fg(color),
                    )
                }
                _ => Span::styled(
                    format!("requires Lv.{}", dungeon.required_level),
                    Style::default().fg(Color::DarkGray),
                ),
            };
            ListItem::new(Line::from(vec![
                Span::raw(format!(
                    "{} {:<15} {:>4}s diff {:<3} ",
                    dungeon.icon, dungeon.name, dungeon.duration_seconds, dungeon.difficulty
                )),
                preview,
            ]))
        })
        .collect();
    render_list(frame, chunks[1], "Dungeons [Enter] dispatch", items, app.selected_row);
}

fn status_line(adv: &Adventurer, now: i64) -> String {
    match adv.status {
        AdventurerStatus::Idle => "Idle".to_string(),
        AdventurerStatus::Adventuring => {
            let dungeon = adv
                .dungeon
                .map(|d| catalog::dungeon(d).name)
                .unwrap_or("?");
            let secs = adv.remaining_ms(now).unwrap_or(0).max(0) / 1000;
            format!(
                "{} run {}/{} ({}s left)",
                dungeon,
                adv.completed_runs + 1,
                adv.target_runs,
                secs
            )
        }
        AdventurerStatus::Returned => format!(
            "Returned with {} ({}g)",
            format_loot(&adv.loot),
            catalog::loot_value(&adv.loot)
        ),
    }
}

fn draw_adventurers(frame: &mut Frame, area: Rect, app: &App, state: &GameState, now: i64) {
    let items: Vec<ListItem> = state
        .adventurers
        .iter()
        .map(|adv| {
            let weapon = adv
                .weapon
                .map(|w| catalog::weapon(w).name)
                .unwrap_or("unarmed");
            let hp_color = if adv.hp.saturating_mul(2) >= adv.max_hp {
                Color::Green
            } else if adv.hp > 0 {
                Color::Yellow
            } else {
                Color::Red
            };
            ListItem::new(Line::from(vec![
                Span::styled(
                    format!("{:<10} Lv.{:<3}", adv.name, adv.level),
                    Style::default().fg(Color::Cyan),
                ),
                Span::styled(
                    format!(" HP {:>4}/{:<4}", adv.hp, adv.max_hp),
                    Style::default().fg(hp_color),
                ),
                Span::raw(format!(
                    " ATK {:<4} {:<14} {:>5}g  {}",
                    adv.total_attack(),
                    weapon,
                    adv.gold,
                    status_line(adv, now)
                )),
            ]))
        })
        .collect();
    let title = format!(
        "Roster {}/{} [Enter] settle [x] discard [c] continue [h] heal [n] hire ({}g)",
        state.adventurers.len(),
        crate::core::constants::MAX_ROSTER_SIZE,
        catalog::hire_cost(state.adventurers.len())
    );
    render_list(frame, area, &title, items, app.selected_row);
}

fn draw_stats(frame: &mut Frame, area: Rect, state: &GameState) {
    let label = Style::default().fg(Color::Yellow);
    let row = |name: &str, value: String| {
        Line::from(vec![
            Span::styled(format!("{:<26}", name), label),
            Span::raw(value),
        ])
    };
    let lines = vec![
        row("Shop level", state.player.level.to_string()),
        row("Gold", state.player.gold.to_string()),
        row("Weapons sold", state.total_weapons_sold.to_string()),
        row("Materials bought", state.total_materials_bought.to_string()),
        row("Materials in storage", state.inventory.total_materials().to_string()),
        row("Weapons in stock", state.inventory.total_weapons().to_string()),
        row("Adventurers", state.adventurers.len().to_string()),
        row(
            "Adventuring / returned",
            format!(
                "{} / {}",
                state.count_with_status(AdventurerStatus::Adventuring),
                state.count_with_status(AdventurerStatus::Returned)
            ),
        ),
        row(
            "Average adventurer level",
            format!("{:.1}", state.average_adventurer_level()),
        ),
    ];
    frame.render_widget(
        Paragraph::new(lines)
            .wrap(Wrap { trim: true })
            .block(Block::default().borders(Borders::ALL).title("Statistics")),
        area,
    );
}
