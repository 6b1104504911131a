//! Turns engine events into message log lines.

use crate::catalog::{self, MaterialId};
use crate::core::{GameEvent, GameState, OfflineReport, Rejection};
use std::collections::{BTreeMap, VecDeque};

const MAX_MESSAGES: usize = 50;

/// Kind of log line, used for coloring.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Info,
    Good,
    Bad,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub text: String,
    pub tone: Tone,
}

/// Newest-first message log.
#[derive(Debug, Default)]
pub struct MessageLog {
    entries: VecDeque<Message>,
}

impl MessageLog {
    pub fn push(&mut self, text: impl Into<String>, tone: Tone) {
        self.entries.push_front(Message {
            text: text.into(),
            tone,
        });
        self.entries.truncate(MAX_MESSAGES);
    }

    pub fn iter(&self) -> impl Iterator<Item = &Message> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn record_events(&mut self, events: &[GameEvent], state: &GameState) {
        for event in events {
            let (text, tone) = describe_event(event, state);
            self.push(text, tone);
        }
    }

    pub fn record_rejection(&mut self, rejection: &Rejection) {
        self.push(capitalize(&rejection.to_string()), Tone::Bad);
    }
}

fn adventurer_name(state: &GameState, id: &str) -> String {
    state
        .adventurer(id)
        .map(|a| a.name.clone())
        .unwrap_or_else(|| "Someone".to_string())
}

fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

pub fn format_loot(loot: &BTreeMap<MaterialId, u32>) -> String {
    if loot.is_empty() {
        return "nothing".to_string();
    }
    loot.iter()
        .map(|(id, amount)| format!("{} x{}", catalog::material(*id).name, amount))
        .collect::<Vec<_>>()
        .join(", ")
}

pub fn describe_offline(report: &OfflineReport) -> String {
    let hours = report.offline_seconds / 3600.0;
    let mut text = format!(
        "Welcome back! {:.1}h away: {} runs finished, {} adventurers returned",
        hours, report.cycles_resolved, report.adventurers_returned
    );
    if report.capped {
        text.push_str(" (catch-up capped)");
    }
    text
}

/// Log line and tone for one event.
pub fn describe_event(event: &GameEvent, state: &GameState) -> (String, Tone) {
    match event {
        GameEvent::WeaponCrafted { weapon } => (
            format!("Crafted a {}", catalog::weapon(*weapon).name),
            Tone::Good,
        ),
        GameEvent::WeaponSold {
            weapon,
            adventurer_id,
            price,
            exp_gained,
        } => (
            format!(
                "Sold {} to {} for {}g (+{} exp)",
                catalog::weapon(*weapon).name,
                adventurer_name(state, adventurer_id),
                price,
                exp_gained
            ),
            Tone::Good,
        ),
        GameEvent::WeaponSoldDirect { weapon, price } => (
            format!(
                "Sold {} off the rack for {}g",
                catalog::weapon(*weapon).name,
                price
            ),
            Tone::Info,
        ),
        GameEvent::ShopLeveledUp { new_level } => {
            (format!("Shop reached level {}!", new_level), Tone::Good)
        }
        GameEvent::Dispatched {
            adventurer_id,
            dungeon,
            runs,
            continuing,
        } => {
            let verb = if *continuing { "heads back into" } else { "enters" };
            (
                format!(
                    "{} {} {} ({} runs)",
                    adventurer_name(state, adventurer_id),
                    verb,
                    catalog::dungeon(*dungeon).name,
                    runs
                ),
                Tone::Info,
            )
        }
        GameEvent::RunResolved {
            adventurer_id,
            outcome,
        } => {
            let name = adventurer_name(state, adventurer_id);
            let dungeon = catalog::dungeon(outcome.dungeon).name;
            let mut text = if outcome.success {
                format!(
                    "{} cleared {} (-{} HP, found {})",
                    name,
                    dungeon,
                    outcome.damage,
                    format_loot(&outcome.loot)
                )
            } else {
                format!("{} failed in {} (-{} HP)", name, dungeon, outcome.damage)
            };
            if outcome.returned {
                text.push_str(", back in town");
            }
            let tone = if outcome.success { Tone::Info } else { Tone::Bad };
            (text, tone)
        }
        GameEvent::AdventurerLeveledUp {
            adventurer_id,
            new_level,
        } => (
            format!(
                "{} reached level {}",
                adventurer_name(state, adventurer_id),
                new_level
            ),
            Tone::Good,
        ),
        GameEvent::LootSettled {
            adventurer_id,
            cost,
            units,
        } => (
            format!(
                "Bought {} materials from {} for {}g",
                units,
                adventurer_name(state, adventurer_id),
                cost
            ),
            Tone::Info,
        ),
        GameEvent::LootDiscarded {
            adventurer_id,
            units,
        } => (
            format!(
                "{} threw away {} materials",
                adventurer_name(state, adventurer_id),
                units
            ),
            Tone::Info,
        ),
        GameEvent::AdventurerHired { name, cost, .. } => {
            (format!("Hired {} for {}g", name, cost), Tone::Good)
        }
        GameEvent::AdventurerHealed {
            adventurer_id,
            cost,
        } => (
            format!(
                "Healed {} for {}g",
                adventurer_name(state, adventurer_id),
                cost
            ),
            Tone::Info,
        ),
        GameEvent::OfflineProgress(report) => (describe_offline(report), Tone::Good),
        GameEvent::StateLoaded => ("Save loaded".to_string(), Tone::Info),
        GameEvent::GameReset => ("Started a new shop".to_string(), Tone::Info),
    }
}
