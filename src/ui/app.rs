//! Screen state and key handling.
//!
//! Kept free of terminal types so key handling can be tested against a
//! plain [`GameState`].

use super::messages::MessageLog;
use crate::adventurer::AdventurerStatus;
use crate::catalog::{DungeonId, WeaponId};
use crate::core::constants::RUN_OPTIONS;
use crate::core::{Action, GameState};
use crossterm::event::KeyCode;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Craft,
    Shop,
    Dungeon,
    Adventurers,
    Stats,
}

impl Tab {
    pub const ALL: [Tab; 5] = [
        Tab::Craft,
        Tab::Shop,
        Tab::Dungeon,
        Tab::Adventurers,
        Tab::Stats,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            Tab::Craft => "Craft",
            Tab::Shop => "Shop",
            Tab::Dungeon => "Dungeon",
            Tab::Adventurers => "Adventurers",
            Tab::Stats => "Stats",
        }
    }

    pub fn index(&self) -> usize {
        Tab::ALL.iter().position(|t| t == self).unwrap_or(0)
    }

    fn next(self) -> Tab {
        Tab::ALL[(self.index() + 1) % Tab::ALL.len()]
    }

    fn prev(self) -> Tab {
        Tab::ALL[(self.index() + Tab::ALL.len() - 1) % Tab::ALL.len()]
    }
}

/// What the main loop should do after a key press.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    None,
    Quit,
    Dispatch(Action),
}

pub struct App {
    pub tab: Tab,
    /// Row selected in the current tab's main list.
    pub selected_row: usize,
    /// Adventurer targeted by sales, dispatches and roster actions.
    pub selected_adventurer: usize,
    pub run_option: usize,
    pub confirm_reset: bool,
    pub show_welcome: bool,
    pub messages: MessageLog,
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl App {
    pub fn new() -> Self {
        Self {
            tab: Tab::Craft,
            selected_row: 0,
            selected_adventurer: 0,
            run_option: 0,
            confirm_reset: false,
            show_welcome: false,
            messages: MessageLog::default(),
        }
    }

    pub fn runs(&self) -> u32 {
        RUN_OPTIONS[self.run_option % RUN_OPTIONS.len()]
    }

    /// Keeps selections inside the current lists after the roster changes.
    pub fn clamp(&mut self, state: &GameState) {
        let roster = state.adventurers.len();
        if self.selected_adventurer >= roster {
            self.selected_adventurer = roster.saturating_sub(1);
        }
        let rows = self.row_count(state);
        if self.selected_row >= rows {
            self.selected_row = rows.saturating_sub(1);
        }
    }

    fn row_count(&self, state: &GameState) -> usize {
        match self.tab {
            Tab::Craft | Tab::Shop => WeaponId::ALL.len(),
            Tab::Dungeon => DungeonId::ALL.len(),
            Tab::Adventurers => state.adventurers.len(),
            Tab::Stats => 0,
        }
    }

    fn selected_adventurer_id(&self, state: &GameState) -> Option<String> {
        let index = if self.tab == Tab::Adventurers {
            self.selected_row
        } else {
            self.selected_adventurer
        };
        state.adventurers.get(index).map(|a| a.id.clone())
    }

    fn switch_tab(&mut self, tab: Tab) {
        if self.tab == Tab::Adventurers {
            self.selected_adventurer = self.selected_row;
        }
        self.tab = tab;
        self.selected_row = if tab == Tab::Adventurers {
            self.selected_adventurer
        } else {
            0
        };
    }

    pub fn handle_key(&mut self, code: KeyCode, state: &GameState) -> Command {
        if self.show_welcome {
            self.show_welcome = false;
            return Command::None;
        }
        if self.confirm_reset {
            self.confirm_reset = false;
            return match code {
                KeyCode::Char('y') | KeyCode::Char('Y') => Command::Dispatch(Action::ResetGame),
                _ => Command::None,
            };
        }

        let command = match code {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Command::Quit,
            KeyCode::Char('R') => {
                self.confirm_reset = true;
                Command::None
            }
            KeyCode::Tab => {
                self.switch_tab(self.tab.next());
                Command::None
            }
            KeyCode::BackTab => {
                self.switch_tab(self.tab.prev());
                Command::None
            }
            KeyCode::Char(c @ '1'..='5') => {
                let index = c as usize - '1' as usize;
                self.switch_tab(Tab::ALL[index]);
                Command::None
            }
            KeyCode::Up => {
                self.selected_row = self.selected_row.saturating_sub(1);
                Command::None
            }
            KeyCode::Down => {
                self.selected_row += 1;
                Command::None
            }
            KeyCode::Left => {
                self.selected_adventurer = self.selected_adventurer.saturating_sub(1);
                Command::None
            }
            KeyCode::Right => {
                self.selected_adventurer += 1;
                Command::None
            }
            KeyCode::Char('r') => {
                self.run_option = (self.run_option + 1) % RUN_OPTIONS.len();
                Command::None
            }
            KeyCode::Char('n') => Command::Dispatch(Action::HireAdventurer),
            other => self.tab_command(other, state),
        };
        self.clamp(state);
        command
    }

    fn tab_command(&mut self, code: KeyCode, state: &GameState) -> Command {
        let adventurer_id = self.selected_adventurer_id(state);
        let action = match (self.tab, code) {
            (Tab::Craft, KeyCode::Enter) => WeaponId::ALL
                .get(self.selected_row)
                .map(|weapon| Action::CraftWeapon { weapon: *weapon }),
            (Tab::Shop, KeyCode::Enter) => WeaponId::ALL.get(self.selected_row).and_then(|weapon| {
                adventurer_id.map(|adventurer_id| Action::SellWeapon {
                    weapon: *weapon,
                    adventurer_id,
                })
            }),
            (Tab::Shop, KeyCode::Char('d')) => WeaponId::ALL
                .get(self.selected_row)
                .map(|weapon| Action::SellWeaponDirect { weapon: *weapon }),
            (Tab::Dungeon, KeyCode::Enter) => {
                DungeonId::ALL.get(self.selected_row).and_then(|dungeon| {
                    adventurer_id.map(|adventurer_id| Action::DispatchToDungeon {
                        adventurer_id,
                        dungeon: *dungeon,
                        runs: Some(self.runs()),
                    })
                })
            }
            (Tab::Adventurers, KeyCode::Enter) | (Tab::Adventurers, KeyCode::Char('s')) => {
                adventurer_id.map(|adventurer_id| Action::SettleLoot { adventurer_id })
            }
            (Tab::Adventurers, KeyCode::Char('x')) => {
                adventurer_id.map(|adventurer_id| Action::DiscardLoot { adventurer_id })
            }
            (Tab::Adventurers, KeyCode::Char('h')) => {
                adventurer_id.map(|adventurer_id| Action::HealAdventurer { adventurer_id })
            }
            (Tab::Adventurers, KeyCode::Char('c')) => {
                self.continue_action(state, adventurer_id)
            }
            _ => None,
        };
        action.map(Command::Dispatch).unwrap_or(Command::None)
    }

    /// Sends a returned adventurer straight back to the dungeon they came
    /// from, keeping their loot.
    fn continue_action(&self, state: &GameState, adventurer_id: Option<String>) -> Option<Action> {
        let adventurer_id = adventurer_id?;
        let adventurer = state.adventurer(&adventurer_id)?;
        if adventurer.status != AdventurerStatus::Returned {
            return None;
        }
        let dungeon = adventurer.dungeon?;
        Some(Action::DispatchToDungeon {
            adventurer_id,
            dungeon,
            runs: Some(self.runs()),
        })
    }
}
