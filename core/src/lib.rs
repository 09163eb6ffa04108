#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Core contracts shared across the Starlane world generator.
//!
//! This crate defines the data model that connects the authored content
//! tables, the pure generation systems, and the document emitter. Catalog
//! entries ([`ObstacleTemplate`]) are `'static` constants, generation
//! produces [`WaveEvent`] and [`LevelRecord`] values, and the emitter
//! serializes whole [`WorldDocument`] values. Field declaration order on the
//! serializable types is load-bearing: it defines the canonical key order of
//! the on-disk schema.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Number of levels contained in every world: five normal levels followed by
/// one boss level.
pub const LEVELS_PER_WORLD: usize = 6;

/// Index of the boss level within a world's level sequence.
pub const BOSS_LEVEL_INDEX: u32 = 5;

/// Spawn and movement behavior class of an obstacle pattern.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MotionPattern {
    /// Obstacles fall in continuous rows from the top of the screen.
    Rain,
    /// Obstacles alternate sides, forcing weaving movement.
    Slalom,
    /// Obstacles form walls with a single traversable gap.
    Gates,
}

/// Compass heading used by drifting obstacles.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CompassDirection {
    /// Straight down the scroll axis.
    #[serde(rename = "S")]
    South,
    /// Down and toward the left edge.
    #[serde(rename = "SW")]
    SouthWest,
    /// Down and toward the right edge.
    #[serde(rename = "SE")]
    SouthEast,
}

/// Lateral drift applied to an obstacle while it scrolls.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Drift {
    speed: u32,
    directions: &'static [CompassDirection],
}

impl Drift {
    /// Creates a drift profile from a speed and an ordered heading sequence.
    #[must_use]
    pub const fn new(speed: u32, directions: &'static [CompassDirection]) -> Self {
        Self { speed, directions }
    }

    /// Drift speed in world units per second.
    #[must_use]
    pub const fn speed(&self) -> u32 {
        self.speed
    }

    /// Ordered headings the obstacle cycles through while drifting.
    #[must_use]
    pub const fn directions(&self) -> &'static [CompassDirection] {
        self.directions
    }
}

/// Immutable obstacle description drawn from the static catalog.
///
/// Templates never reach disk directly; the timeline builder copies their
/// fields into [`ObstacleWave`] events.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ObstacleTemplate {
    kind: &'static str,
    pattern: MotionPattern,
    speed: u32,
    gap_width: u32,
    spawn_interval: f64,
    drift: Option<Drift>,
}

impl ObstacleTemplate {
    /// Creates a new obstacle template.
    #[must_use]
    pub const fn new(
        kind: &'static str,
        pattern: MotionPattern,
        speed: u32,
        gap_width: u32,
        spawn_interval: f64,
        drift: Option<Drift>,
    ) -> Self {
        Self {
            kind,
            pattern,
            speed,
            gap_width,
            spawn_interval,
            drift,
        }
    }

    /// Catalog identifier of the obstacle, e.g. `asteroid_small`.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        self.kind
    }

    /// Motion pattern the obstacle spawns with.
    #[must_use]
    pub const fn pattern(&self) -> MotionPattern {
        self.pattern
    }

    /// Scroll speed in world units per second.
    #[must_use]
    pub const fn speed(&self) -> u32 {
        self.speed
    }

    /// Width of the traversable gap left between obstacles.
    #[must_use]
    pub const fn gap_width(&self) -> u32 {
        self.gap_width
    }

    /// Seconds between successive obstacle rows.
    #[must_use]
    pub const fn spawn_interval(&self) -> f64 {
        self.spawn_interval
    }

    /// Lateral drift profile, when the template defines one.
    #[must_use]
    pub const fn drift(&self) -> Option<Drift> {
        self.drift
    }
}

/// A scheduled enemy group spawn within a level timeline.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EnemyWave {
    /// Seconds from level start at which the wave begins spawning.
    pub time: f64,
    /// Identifier of the enemy archetype to spawn.
    #[serde(rename = "enemy_id")]
    pub enemy_kind: String,
    /// Number of enemies spawned by the wave.
    pub count: u32,
    /// Seconds between individual enemy spawns within the wave.
    #[serde(rename = "interval")]
    pub spawn_interval: f64,
    /// Behavior modifier applied to the whole wave; empty for none.
    #[serde(rename = "enemy_modifier_id")]
    pub modifier_id: String,
}

/// Wire tag distinguishing obstacle waves from enemy waves.
///
/// Enemy waves carry no tag on disk, so the union is untagged and obstacle
/// waves embed this single-variant marker as their `type` key.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ObstacleMarker {
    /// The only obstacle wave type in the schema.
    #[serde(rename = "obstacle")]
    Obstacle,
}

/// A scheduled obstacle pattern within a level timeline.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ObstacleWave {
    /// Seconds from level start at which the pattern activates.
    pub time: f64,
    /// Wire tag, always `"obstacle"`.
    #[serde(rename = "type")]
    pub marker: ObstacleMarker,
    /// Catalog identifier of the obstacle.
    #[serde(rename = "obstacle_id")]
    pub obstacle_kind: String,
    /// Motion pattern copied from the template.
    #[serde(rename = "pattern")]
    pub motion_pattern: MotionPattern,
    /// Seconds the pattern stays active once triggered.
    pub duration: f64,
    /// Scroll speed copied from the template.
    pub speed: u32,
    /// Traversable gap width copied from the template.
    pub gap_width: u32,
    /// Seconds between obstacle rows, copied from the template.
    #[serde(rename = "row_interval")]
    pub spawn_interval: f64,
    /// Drift speed, present only when the template drifts.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub drift_speed: Option<u32>,
    /// Ordered drift headings, present only when the template drifts.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub drift_directions: Option<Vec<CompassDirection>>,
}

/// A single entry in a level's time-ordered wave sequence.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum WaveEvent {
    /// An obstacle pattern activation.
    Obstacle(ObstacleWave),
    /// An enemy group spawn.
    Enemy(EnemyWave),
}

impl WaveEvent {
    /// Seconds from level start at which the event triggers.
    #[must_use]
    pub fn time(&self) -> f64 {
        match self {
            Self::Obstacle(wave) => wave.time,
            Self::Enemy(wave) => wave.time,
        }
    }

    /// Whether the event is an obstacle pattern activation.
    #[must_use]
    pub const fn is_obstacle(&self) -> bool {
        matches!(self, Self::Obstacle(_))
    }
}

/// A single sprite reference within a background layer stack.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LayerSprite {
    /// Resource path of the sprite asset.
    pub asset: String,
    /// Blend opacity applied to the sprite.
    pub opacity: f64,
}

/// Structured background layer references for a level.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Backgrounds {
    /// Asset shown on the level-select card.
    pub card: String,
    /// Slow-scrolling far background asset.
    pub far_layer: String,
    /// Mid-distance sprite stacks, outer list per parallax band.
    pub mid_layer: Vec<Vec<LayerSprite>>,
    /// Foreground sprite stack; empty in every authored world today.
    pub near_layer: Vec<LayerSprite>,
}

/// Distinguishes regular levels from the final boss level of a world.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LevelKind {
    /// A standard timed level.
    Normal,
    /// The world's closing boss encounter.
    Boss,
}

/// A fully generated level entry within a world document.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LevelRecord {
    /// Position of the level within its world, 0 through 5.
    pub index: u32,
    /// Stable identifier, `<world_id>_lvl_<index>`.
    pub id: String,
    /// Display name of the level.
    pub name: String,
    /// Whether the level is a normal run or the boss encounter.
    #[serde(rename = "type")]
    pub kind: LevelKind,
    /// Level length in seconds.
    pub duration_sec: u32,
    /// Background layer references.
    pub backgrounds: Backgrounds,
    /// Time-ordered enemy and obstacle spawn timeline.
    pub waves: Vec<WaveEvent>,
    /// Reserved scripted-event slot; the schema keeps it, generation leaves
    /// it empty.
    pub events: Vec<serde_json::Value>,
    /// Boss identifier, present exactly when `kind` is [`LevelKind::Boss`].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub boss_id: Option<String>,
}

/// Per-world stat multipliers applied to every enemy in the world.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Multipliers {
    /// Hit point multiplier.
    pub hp: f64,
    /// Damage multiplier.
    pub damage: f64,
    /// Movement speed multiplier.
    pub speed: f64,
}

/// Visual and audio theme shared by a world's levels.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Theme {
    /// Theme-wide background override; empty when levels supply their own.
    pub background: String,
    /// Resource path of the world's music track.
    pub music: String,
    /// Accent color of the world in the UI, as a hex string.
    pub color_palette: String,
}

/// Criterion gating player access to a world.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum UnlockCondition {
    /// Available from the start of the game.
    Initial,
    /// Unlocked by clearing a specific prior world.
    WorldClear {
        /// Identifier of the world that must be cleared.
        world_id: String,
    },
}

/// Per-world asset reskin table injected by the override migration.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SkinOverrides {
    /// Enemy role to resource path.
    pub enemies: BTreeMap<String, String>,
    /// Boss identifier to resource path.
    pub bosses: BTreeMap<String, String>,
    /// Obstacle shape class to candidate sprite paths.
    pub obstacles: BTreeMap<String, Vec<String>>,
}

/// A complete world document as written to disk.
///
/// Field order here is the canonical top-level key order of the schema.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct WorldDocument {
    /// Stable world identifier, `world_<order>`.
    pub id: String,
    /// Display name of the world.
    pub name: String,
    /// Flavor text shown on the world-select screen.
    pub description: String,
    /// 1-based rank defining the difficulty tier and unlock chain.
    pub order: u32,
    /// Reskin table; absent until the override migration injects it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skin_overrides: Option<SkinOverrides>,
    /// Enemy stat multipliers for the world.
    pub multipliers: Multipliers,
    /// Visual and audio theme.
    pub theme: Theme,
    /// Exactly six generated levels, boss last.
    pub levels: Vec<LevelRecord>,
    /// Criterion gating access to the world.
    pub unlock_condition: UnlockCondition,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enemy_wave_uses_wire_key_names() {
        let wave = WaveEvent::Enemy(EnemyWave {
            time: 3.0,
            enemy_kind: "scout_basic".to_owned(),
            count: 3,
            spawn_interval: 0.7,
            modifier_id: String::new(),
        });

        let value = serde_json::to_value(&wave).expect("enemy wave serializes");
        let object = value.as_object().expect("enemy wave is an object");
        assert!(object.contains_key("enemy_id"));
        assert!(object.contains_key("interval"));
        assert!(object.contains_key("enemy_modifier_id"));
        assert!(!object.contains_key("type"));
    }

    #[test]
    fn obstacle_wave_is_tagged_and_drops_absent_drift() {
        let wave = WaveEvent::Obstacle(ObstacleWave {
            time: 26.1,
            marker: ObstacleMarker::Obstacle,
            obstacle_kind: "metal_wall".to_owned(),
            motion_pattern: MotionPattern::Gates,
            duration: 15.0,
            speed: 180,
            gap_width: 160,
            spawn_interval: 1.5,
            drift_speed: None,
            drift_directions: None,
        });

        let value = serde_json::to_value(&wave).expect("obstacle wave serializes");
        let object = value.as_object().expect("obstacle wave is an object");
        assert_eq!(object.get("type"), Some(&serde_json::json!("obstacle")));
        assert_eq!(object.get("pattern"), Some(&serde_json::json!("gates")));
        assert!(!object.contains_key("drift_speed"));
        assert!(!object.contains_key("drift_directions"));
    }

    #[test]
    fn wave_union_round_trips_both_arms() {
        let waves = vec![
            WaveEvent::Enemy(EnemyWave {
                time: 3.0,
                enemy_kind: "scout_basic".to_owned(),
                count: 4,
                spawn_interval: 0.7,
                modifier_id: String::new(),
            }),
            WaveEvent::Obstacle(ObstacleWave {
                time: 10.7,
                marker: ObstacleMarker::Obstacle,
                obstacle_kind: "asteroid_small".to_owned(),
                motion_pattern: MotionPattern::Rain,
                duration: 12.5,
                speed: 180,
                gap_width: 160,
                spawn_interval: 1.0,
                drift_speed: Some(15),
                drift_directions: Some(vec![
                    CompassDirection::South,
                    CompassDirection::SouthWest,
                    CompassDirection::SouthEast,
                ]),
            }),
        ];

        let json = serde_json::to_string(&waves).expect("waves serialize");
        let decoded: Vec<WaveEvent> = serde_json::from_str(&json).expect("waves deserialize");
        assert_eq!(waves, decoded);
    }

    #[test]
    fn unlock_condition_wire_shape() {
        let initial = serde_json::to_value(UnlockCondition::Initial).expect("serializes");
        assert_eq!(initial, serde_json::json!({"type": "initial"}));

        let chained = serde_json::to_value(UnlockCondition::WorldClear {
            world_id: "world_1".to_owned(),
        })
        .expect("serializes");
        assert_eq!(
            chained,
            serde_json::json!({"type": "world_clear", "world_id": "world_1"})
        );
    }

    #[test]
    fn compass_directions_use_short_codes() {
        let encoded = serde_json::to_value([
            CompassDirection::SouthWest,
            CompassDirection::South,
            CompassDirection::SouthEast,
        ])
        .expect("directions serialize");
        assert_eq!(encoded, serde_json::json!(["SW", "S", "SE"]));
    }
}
