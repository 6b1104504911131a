//! Periodic tick: settles every dungeon cycle that has run its course.

use super::events::GameEvent;
use super::game_state::GameState;
use super::resolution::resolve_cycle;
use rand::Rng;
use tracing::info;

/// Resolves at most one elapsed cycle per adventurer.
///
/// Further cycles that fit in the same gap are left for the next tick (or
/// the offline catch-up). When nothing has elapsed the state is not touched
/// at all, `last_updated` included, so repeated ticks are idempotent.
pub fn game_tick(state: &mut GameState, now: i64, rng: &mut impl Rng) -> Vec<GameEvent> {
    let mut events = Vec::new();

    for adventurer in state.adventurers.iter_mut() {
        if !adventurer.cycle_elapsed(now) {
            continue;
        }
        let Some(outcome) = resolve_cycle(adventurer, now, rng) else {
            continue;
        };

        if outcome.returned {
            info!(
                adventurer = %adventurer.name,
                dungeon = %outcome.dungeon,
                runs = outcome.run_number,
                hp = adventurer.hp,
                "adventurer returned"
            );
        }
        if outcome.levels_gained > 0 {
            events.push(GameEvent::AdventurerLeveledUp {
                adventurer_id: adventurer.id.clone(),
                new_level: adventurer.level,
            });
        }
        events.push(GameEvent::RunResolved {
            adventurer_id: adventurer.id.clone(),
            outcome,
        });
    }

    if !events.is_empty() {
        state.touch(now);
    }
    events
}
