#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! World assembly.
//!
//! Composes complete [`WorldDocument`] values from the authored campaign
//! table: per level it resolves background layers, invokes the timeline
//! builder with the shared (wave count, duration) schedule, and flags the
//! final level as the boss encounter.

use starlane_content::{WorldSpec, DURATIONS, WAVE_COUNTS};
use starlane_core::{
    Backgrounds, LayerSprite, LevelKind, LevelRecord, Theme, WorldDocument, BOSS_LEVEL_INDEX,
    LEVELS_PER_WORLD,
};
use starlane_system_wave_timeline::build_timeline;

const BACKGROUNDS_ROOT: &str = "res://assets/backgrounds/worlds";
const MUSIC_ROOT: &str = "res://assets/music";

/// Assembles every campaign world in difficulty order.
#[must_use]
pub fn assemble_all() -> Vec<WorldDocument> {
    starlane_content::world_table()
        .iter()
        .map(assemble_world)
        .collect()
}

/// Assembles one world document from its authored definition.
#[must_use]
pub fn assemble_world(spec: &WorldSpec) -> WorldDocument {
    let levels = (0..LEVELS_PER_WORLD as u32)
        .map(|level_index| assemble_level(spec, level_index))
        .collect();

    WorldDocument {
        id: spec.id().to_owned(),
        name: spec.name().to_owned(),
        description: spec.description().to_owned(),
        order: spec.order(),
        skin_overrides: None,
        multipliers: spec.multipliers(),
        theme: Theme {
            background: String::new(),
            music: format!("{MUSIC_ROOT}/{}", spec.music_file()),
            color_palette: spec.color().to_owned(),
        },
        levels,
        unlock_condition: spec.unlock().clone(),
    }
}

fn assemble_level(spec: &WorldSpec, level_index: u32) -> LevelRecord {
    let slot = level_index as usize;
    let wave_count = WAVE_COUNTS[slot];
    let duration = DURATIONS[slot];
    let is_boss = level_index == BOSS_LEVEL_INDEX;

    let base = format!("{BACKGROUNDS_ROOT}/{}/", spec.folder());
    let far_file = &spec.far_files()[slot];
    // Mid layers cycle when a world authors fewer files than levels.
    let mid_file = &spec.mid_files()[slot % spec.mid_files().len()];

    let waves = build_timeline(wave_count, f64::from(duration), level_index, spec.order());

    LevelRecord {
        index: level_index,
        id: format!("{}_lvl_{level_index}", spec.id()),
        name: spec.level_names()[slot].to_owned(),
        kind: if is_boss {
            LevelKind::Boss
        } else {
            LevelKind::Normal
        },
        duration_sec: duration,
        backgrounds: Backgrounds {
            card: format!("{base}{far_file}"),
            far_layer: format!("{base}{far_file}"),
            mid_layer: vec![vec![LayerSprite {
                asset: format!("{base}{mid_file}"),
                opacity: 1.0,
            }]],
            near_layer: Vec::new(),
        },
        waves,
        events: Vec::new(),
        boss_id: is_boss.then(|| format!("boss_{}_final", spec.folder())),
    }
}
