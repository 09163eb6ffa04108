#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Deterministic wave timeline generation.
//!
//! Builds the time-ordered enemy and obstacle spawn sequence for a level
//! from three inputs: the requested enemy wave count, the level duration,
//! and the level's position in the campaign (world rank plus level index).
//! Obstacle picks are seeded pseudo-random so regenerating a level always
//! reproduces the same timeline.

use starlane_content::Tier;
use starlane_core::{
    Drift, EnemyWave, ObstacleMarker, ObstacleTemplate, ObstacleWave, WaveEvent,
};

/// Seconds reserved before the first wave fires.
const LEAD_IN_SECONDS: f64 = 3.0;

/// Lead-in plus the implicit tail reserved at the end of a level.
const SCHEDULE_MARGIN_SECONDS: f64 = 6.0;

/// Hard upper bound on how long a single obstacle pattern stays active.
const OBSTACLE_DURATION_CAP: f64 = 15.0;

/// Enemy archetype emitted for every generated wave; remapped downstream by
/// the enemy-id batch utilities.
const ENEMY_PLACEHOLDER: &str = "scout_basic";

/// Seconds between individual enemy spawns within one wave.
const ENEMY_SPAWN_INTERVAL: f64 = 0.7;

/// Composes the obstacle pool a level samples from.
///
/// Early worlds bias toward gentle obstacles; the mix hardens both with the
/// world's campaign rank and with the level's position inside the world.
/// Duplicate entries are intentional: appending the hard pool a second time
/// raises its sampling weight without removing anything.
#[must_use]
pub fn compose_pool(world_rank: u32, level_index: u32) -> Vec<&'static ObstacleTemplate> {
    let mut pool: Vec<&'static ObstacleTemplate> = Vec::new();
    if world_rank <= 2 {
        pool.extend(Tier::Easy.pool());
        pool.extend(&Tier::Medium.pool()[..2]);
    } else if world_rank <= 5 {
        pool.extend(Tier::Easy.pool());
        pool.extend(Tier::Medium.pool());
        pool.extend(&Tier::Hard.pool()[..1]);
    } else {
        pool.extend(Tier::Medium.pool());
        pool.extend(Tier::Hard.pool());
    }

    if level_index >= 3 && world_rank >= 3 {
        pool.extend(Tier::Hard.pool());
    }

    pool
}

/// Deterministically picks the obstacle template for one obstacle slot.
///
/// Pure function of its three inputs: the generator is re-seeded from
/// `world_rank * 1000 + level_index * 100 + obstacle_slot` on every call,
/// so identical inputs always return the identical template.
#[must_use]
pub fn pick(world_rank: u32, level_index: u32, obstacle_slot: u32) -> &'static ObstacleTemplate {
    let seed =
        u64::from(world_rank) * 1000 + u64::from(level_index) * 100 + u64::from(obstacle_slot);
    let mut rng = SplitMix64::new(seed);
    let pool = compose_pool(world_rank, level_index);
    let index = (rng.next_u64() % pool.len() as u64) as usize;
    pool[index]
}

/// Builds the interleaved enemy and obstacle timeline for one level.
///
/// One obstacle wave is inserted after every third enemy wave, so the slot
/// sequence reads `E E E O E E E O ...` with the first three slots always
/// enemies. Slot times spread evenly across the level after a fixed
/// lead-in, and degenerate durations clamp the spacing to zero rather than
/// producing decreasing times.
#[must_use]
pub fn build_timeline(
    wave_count: u32,
    duration: f64,
    level_index: u32,
    world_rank: u32,
) -> Vec<WaveEvent> {
    let obstacle_count = wave_count.saturating_sub(1) / 3;
    let total_entries = wave_count + obstacle_count;
    let spacing =
        ((duration - SCHEDULE_MARGIN_SECONDS) / f64::from(total_entries.max(1))).max(0.0);

    let mut waves = Vec::with_capacity(total_entries as usize);
    let mut enemy_slots = 0_u32;
    let mut obstacle_slots = 0_u32;

    for slot in 0..total_entries {
        let time = round_tenth(LEAD_IN_SECONDS + f64::from(slot) * spacing);

        if slot > 0 && slot % 4 == 3 {
            let template = pick(world_rank, level_index, obstacle_slots);
            waves.push(WaveEvent::Obstacle(ObstacleWave {
                time,
                marker: ObstacleMarker::Obstacle,
                obstacle_kind: template.kind().to_owned(),
                motion_pattern: template.pattern(),
                duration: round_tenth((spacing * 2.5).min(OBSTACLE_DURATION_CAP)),
                speed: template.speed(),
                gap_width: template.gap_width(),
                spawn_interval: template.spawn_interval(),
                drift_speed: template.drift().as_ref().map(Drift::speed),
                drift_directions: template
                    .drift()
                    .map(|drift| drift.directions().to_vec()),
            }));
            obstacle_slots += 1;
        } else {
            waves.push(WaveEvent::Enemy(EnemyWave {
                time,
                enemy_kind: ENEMY_PLACEHOLDER.to_owned(),
                count: 3 + level_index + enemy_slots / 3,
                spawn_interval: ENEMY_SPAWN_INTERVAL,
                modifier_id: String::new(),
            }));
            enemy_slots += 1;
        }
    }

    waves
}

fn round_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[derive(Debug)]
struct SplitMix64 {
    state: u64,
}

impl SplitMix64 {
    fn new(seed: u64) -> Self {
        let seed = if seed == 0 { 0x9e3779b97f4a7c15 } else { seed };
        Self { state: seed }
    }

    fn next_u64(&mut self) -> u64 {
        self.state = self.state.wrapping_add(0x9e3779b97f4a7c15);
        let mut z = self.state;
        z = (z ^ (z >> 30)).wrapping_mul(0xbf58476d1ce4e5b9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94d049bb133111eb);
        z ^ (z >> 31)
    }
}
