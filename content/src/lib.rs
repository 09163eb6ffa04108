#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Authored content tables for the Starlane world generator.
//!
//! Everything in this crate is hand-tuned game data: the tiered obstacle
//! catalog, the nine-world campaign table, per-world level names, and the
//! per-level wave schedule shared by every world. Content changes happen
//! here; the generation algorithms never need to be touched for them.

use std::{collections::BTreeMap, ops::Range};

use starlane_core::{
    CompassDirection, Drift, MotionPattern, Multipliers, ObstacleTemplate, SkinOverrides,
    UnlockCondition, LEVELS_PER_WORLD,
};

/// Enemy waves requested per level, indexed by level position.
pub const WAVE_COUNTS: [u32; LEVELS_PER_WORLD] = [6, 8, 10, 12, 14, 16];

/// Level length in seconds, indexed by level position.
pub const DURATIONS: [u32; LEVELS_PER_WORLD] = [60, 80, 100, 120, 140, 160];

const DRIFT_DOWNWARD: [CompassDirection; 3] = [
    CompassDirection::South,
    CompassDirection::SouthWest,
    CompassDirection::SouthEast,
];

const DRIFT_SIDELONG: [CompassDirection; 3] = [
    CompassDirection::SouthWest,
    CompassDirection::South,
    CompassDirection::SouthEast,
];

const EASY_POOL: [ObstacleTemplate; 3] = [
    ObstacleTemplate::new(
        "asteroid_small",
        MotionPattern::Rain,
        180,
        160,
        1.0,
        Some(Drift::new(15, &DRIFT_DOWNWARD)),
    ),
    ObstacleTemplate::new(
        "debris_small",
        MotionPattern::Rain,
        200,
        150,
        0.8,
        Some(Drift::new(20, &DRIFT_DOWNWARD)),
    ),
    ObstacleTemplate::new(
        "planet_small",
        MotionPattern::Slalom,
        110,
        220,
        2.0,
        Some(Drift::new(12, &DRIFT_DOWNWARD)),
    ),
];

const MEDIUM_POOL: [ObstacleTemplate; 5] = [
    ObstacleTemplate::new(
        "asteroid_medium",
        MotionPattern::Slalom,
        170,
        190,
        1.2,
        Some(Drift::new(10, &DRIFT_SIDELONG)),
    ),
    ObstacleTemplate::new("metal_wall", MotionPattern::Slalom, 150, 200, 1.5, None),
    ObstacleTemplate::new(
        "metal_wall_destructible",
        MotionPattern::Gates,
        160,
        180,
        1.8,
        None,
    ),
    ObstacleTemplate::new("energy_barrier", MotionPattern::Gates, 150, 200, 2.0, None),
    ObstacleTemplate::new("planet_medium", MotionPattern::Slalom, 90, 260, 2.5, None),
];

const HARD_POOL: [ObstacleTemplate; 4] = [
    ObstacleTemplate::new(
        "asteroid_large",
        MotionPattern::Rain,
        130,
        200,
        2.0,
        Some(Drift::new(8, &DRIFT_SIDELONG)),
    ),
    ObstacleTemplate::new(
        "planet_large",
        MotionPattern::Slalom,
        70,
        300,
        3.0,
        Some(Drift::new(5, &DRIFT_SIDELONG)),
    ),
    ObstacleTemplate::new(
        "asteroid_small",
        MotionPattern::Rain,
        250,
        130,
        0.6,
        Some(Drift::new(25, &DRIFT_SIDELONG)),
    ),
    ObstacleTemplate::new("metal_wall", MotionPattern::Gates, 180, 160, 1.5, None),
];

/// One of the three fixed obstacle difficulty groupings.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Tier {
    /// Gentle obstacles for early worlds.
    Easy,
    /// Mid-campaign obstacles.
    Medium,
    /// Late-campaign obstacles.
    Hard,
}

impl Tier {
    /// Returns the ordered template sequence of the tier.
    #[must_use]
    pub const fn pool(self) -> &'static [ObstacleTemplate] {
        match self {
            Self::Easy => &EASY_POOL,
            Self::Medium => &MEDIUM_POOL,
            Self::Hard => &HARD_POOL,
        }
    }
}

/// Authored definition of one campaign world.
///
/// Level records are generated from this at run time; the definition itself
/// is static input and never mutated.
#[derive(Clone, Debug, PartialEq)]
pub struct WorldSpec {
    id: String,
    order: u32,
    name: String,
    description: String,
    folder: String,
    far_files: Vec<String>,
    mid_files: Vec<String>,
    music_file: String,
    color: String,
    multipliers: Multipliers,
    unlock: UnlockCondition,
    level_names: [&'static str; LEVELS_PER_WORLD],
}

impl WorldSpec {
    /// Stable world identifier, `world_<order>`.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// 1-based campaign rank; doubles as the difficulty tier input.
    #[must_use]
    pub const fn order(&self) -> u32 {
        self.order
    }

    /// Display name of the world.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Flavor text for the world-select screen.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Asset folder the world's backgrounds live under.
    #[must_use]
    pub fn folder(&self) -> &str {
        &self.folder
    }

    /// Far-layer background file per level, exactly one entry per level.
    #[must_use]
    pub fn far_files(&self) -> &[String] {
        &self.far_files
    }

    /// Mid-layer background files, cycled across levels.
    #[must_use]
    pub fn mid_files(&self) -> &[String] {
        &self.mid_files
    }

    /// File name of the world's music track.
    #[must_use]
    pub fn music_file(&self) -> &str {
        &self.music_file
    }

    /// Accent color of the world as a hex string.
    #[must_use]
    pub fn color(&self) -> &str {
        &self.color
    }

    /// Enemy stat multipliers applied throughout the world.
    #[must_use]
    pub const fn multipliers(&self) -> Multipliers {
        self.multipliers
    }

    /// Criterion gating access to the world.
    #[must_use]
    pub fn unlock(&self) -> &UnlockCondition {
        &self.unlock
    }

    /// Display names of the world's six levels, boss level last.
    #[must_use]
    pub const fn level_names(&self) -> &[&'static str; LEVELS_PER_WORLD] {
        &self.level_names
    }
}

fn numbered(stem: &str, range: Range<usize>) -> Vec<String> {
    range.map(|index| format!("{stem}_{index}.png")).collect()
}

fn cleared(world_id: &str) -> UnlockCondition {
    UnlockCondition::WorldClear {
        world_id: world_id.to_owned(),
    }
}

struct WorldEntry {
    order: u32,
    name: &'static str,
    description: &'static str,
    folder: &'static str,
    far_files: Vec<String>,
    mid_files: Vec<String>,
    music_file: &'static str,
    color: &'static str,
    multipliers: Multipliers,
    level_names: [&'static str; LEVELS_PER_WORLD],
}

fn spec_from(entry: WorldEntry) -> WorldSpec {
    let unlock = if entry.order == 1 {
        UnlockCondition::Initial
    } else {
        cleared(&format!("world_{}", entry.order - 1))
    };
    WorldSpec {
        id: format!("world_{}", entry.order),
        order: entry.order,
        name: entry.name.to_owned(),
        description: entry.description.to_owned(),
        folder: entry.folder.to_owned(),
        far_files: entry.far_files,
        mid_files: entry.mid_files,
        music_file: entry.music_file.to_owned(),
        color: entry.color.to_owned(),
        multipliers: entry.multipliers,
        unlock,
        level_names: entry.level_names,
    }
}

/// Returns the nine campaign worlds in difficulty order.
#[must_use]
pub fn world_table() -> Vec<WorldSpec> {
    vec![
        spec_from(WorldEntry {
            order: 1,
            name: "Forêt Primordiale",
            description: "Une forêt ancienne aux canopées denses, où la lumière perce à peine à travers le feuillage.",
            folder: "forest",
            far_files: numbered("world_forest", 0..6),
            mid_files: numbered("layer_2_clouds", 0..6),
            music_file: "acceleration.ogg",
            color: "#2d5a27",
            multipliers: Multipliers { hp: 1.0, damage: 1.0, speed: 1.0 },
            level_names: [
                "Lisière",
                "Sous-bois",
                "Clairière",
                "Marécage",
                "Cœur de la Forêt",
                "Le Gardien Sylvestre",
            ],
        }),
        spec_from(WorldEntry {
            order: 2,
            name: "Atlantis",
            description: "Les profondeurs sous-marines où d'anciennes ruines dorment dans l'obscurité abyssale.",
            folder: "atlantis",
            far_files: numbered("world_water", 0..6),
            mid_files: numbered("layer_2_water", 1..5),
            music_file: "neon.ogg",
            color: "#1a5276",
            multipliers: Multipliers { hp: 1.5, damage: 1.3, speed: 1.1 },
            level_names: [
                "Récifs",
                "Grottes Marines",
                "Ruines Immergées",
                "Abysses",
                "Palais Englouti",
                "Le Léviathan",
            ],
        }),
        spec_from(WorldEntry {
            order: 3,
            name: "Complexe Industriel",
            description: "Une gigantesque station industrielle aux mécanismes encore actifs et aux corridors labyrinthiques.",
            folder: "industrial",
            far_files: numbered("world_industrial", 0..6),
            mid_files: {
                let mut files = numbered("layer_2_industrial", 3..7);
                files.push("layer_2_techno_1.png".to_owned());
                files
            },
            music_file: "starlight.ogg",
            color: "#5d5d5d",
            multipliers: Multipliers { hp: 2.5, damage: 2.0, speed: 1.2 },
            level_names: [
                "Dock d'Amarrage",
                "Couloirs de Maintenance",
                "Salle des Machines",
                "Réacteur Central",
                "Zone Interdite",
                "L'Automate",
            ],
        }),
        spec_from(WorldEntry {
            order: 4,
            name: "Fournaise",
            description: "Un monde volcanique en perpétuelle éruption où la lave coule sans fin entre les roches ardentes.",
            folder: "lava",
            far_files: numbered("world_lava", 0..6),
            mid_files: numbered("layer_2_lava", 2..6),
            music_file: "acceleration.ogg",
            color: "#8b2500",
            multipliers: Multipliers { hp: 4.0, damage: 3.0, speed: 1.3 },
            level_names: [
                "Coulée de Lave",
                "Cratère Fumant",
                "Cavernes Ardentes",
                "Forge Éternelle",
                "Cœur du Volcan",
                "L'Élémentaire",
            ],
        }),
        spec_from(WorldEntry {
            order: 5,
            name: "Mines Oubliées",
            description: "Des galeries abandonnées creusées dans la roche, parsemées de cristaux luminescents et de veines minérales.",
            folder: "mine",
            far_files: numbered("world_mine", 0..6),
            mid_files: {
                let mut files = numbered("layer_2_mine", 1..5);
                files.push("layer_2_crystals.png".to_owned());
                files
            },
            music_file: "neon.ogg",
            color: "#4a3728",
            multipliers: Multipliers { hp: 6.0, damage: 4.0, speed: 1.4 },
            level_names: [
                "Entrée de la Mine",
                "Galeries Effondrées",
                "Veine de Cristaux",
                "Lac Souterrain",
                "Noyau Minéral",
                "Le Golem",
            ],
        }),
        spec_from(WorldEntry {
            order: 6,
            name: "Nécropole",
            description: "Une cité morte hantée par les ombres d'un empire déchu, où les murs murmurent encore.",
            folder: "necropolis",
            far_files: numbered("world_necro", 0..6),
            mid_files: numbered("layer_2_necro", 0..4),
            music_file: "starlight.ogg",
            color: "#2c1e3f",
            multipliers: Multipliers { hp: 8.5, damage: 5.5, speed: 1.5 },
            level_names: [
                "Portail des Morts",
                "Catacombes",
                "Crypte Royale",
                "Salle du Trône",
                "Autel des Ombres",
                "Le Nécromancien",
            ],
        }),
        spec_from(WorldEntry {
            order: 7,
            name: "Domaine des Titans",
            description: "Les vestiges colossaux d'êtres titanesques flottent parmi les nuages cosmiques et la poussière d'étoiles.",
            folder: "titans",
            far_files: numbered("titan_world", 0..6),
            mid_files: {
                let mut files = numbered("layer_2_titans", 0..3);
                files.extend(numbered("layer_2_clouds", 3..6));
                // The second dust sheet is misspelled in the shipped assets.
                files.push("layer_2_cosmicdust_1.png".to_owned());
                files.push("layer_2_cosmisdust_2.png".to_owned());
                files
            },
            music_file: "acceleration.ogg",
            color: "#c0a060",
            multipliers: Multipliers { hp: 11.0, damage: 7.0, speed: 1.6 },
            level_names: [
                "Pieds des Colosses",
                "Épaules de Géants",
                "Passerelles Célestes",
                "Nuages d'Éther",
                "Sommet du Titan",
                "Le Colosse",
            ],
        }),
        spec_from(WorldEntry {
            order: 8,
            name: "Ruche Alien",
            description: "Un organisme vivant géant dont les parois pulsent d'une énergie biologique extraterrestre.",
            folder: "alien",
            far_files: numbered("world_bio", 0..6),
            mid_files: numbered("layer_2_alien", 1..5),
            music_file: "neon.ogg",
            color: "#1a4d1a",
            multipliers: Multipliers { hp: 15.0, damage: 10.0, speed: 1.8 },
            level_names: [
                "Membrane Externe",
                "Canaux Organiques",
                "Chambre d'Incubation",
                "Réseau Neural",
                "Noyau Vital",
                "La Reine",
            ],
        }),
        spec_from(WorldEntry {
            order: 9,
            name: "Royaume Magique",
            description: "Un plan dimensionnel éthéré où la magie pure façonne la réalité et défie les lois de la physique.",
            folder: "magical",
            far_files: vec!["magical_1.png".to_owned(); LEVELS_PER_WORLD],
            mid_files: vec![
                "layer_2_feathers_1.png".to_owned(),
                "layer_2_magical.png".to_owned(),
            ],
            music_file: "starlight.ogg",
            color: "#7b2d8e",
            multipliers: Multipliers { hp: 20.0, damage: 14.0, speed: 2.0 },
            level_names: [
                "Orée Enchantée",
                "Cascade de Mana",
                "Jardins Cristallins",
                "Bibliothèque Astrale",
                "Nexus de Pouvoir",
                "L'Archimage",
            ],
        }),
    ]
}

/// Full reskin table for the forest world, used by the override migration.
///
/// Worlds past the first ship empty override maps and fall back to the
/// default enemy and obstacle skins.
#[must_use]
pub fn forest_skin_overrides() -> SkinOverrides {
    fn resource_map(folder: &str, entries: &[(&str, &str)]) -> BTreeMap<String, String> {
        entries
            .iter()
            .map(|(key, file)| {
                (
                    (*key).to_owned(),
                    format!("res://assets/{folder}/{file}.tres"),
                )
            })
            .collect()
    }

    let enemies = resource_map(
        "enemies/forest",
        &[
            ("swarmer", "forest_swarmer"),
            ("fighter", "forest_fighter"),
            ("tank", "forest_tank"),
            ("artillery", "forest_artillery"),
            ("elite", "forest_elite"),
        ],
    );
    let bosses = resource_map("bosses/forest", &[("boss_forest_final", "forest_boss_final")]);

    let mut obstacles = BTreeMap::new();
    let _ = obstacles.insert(
        "circle".to_owned(),
        (1..=4)
            .map(|index| {
                format!("res://assets/obstacles/forest/forest_obstacle_circle_{index}.png")
            })
            .collect(),
    );
    let _ = obstacles.insert(
        "rectangle".to_owned(),
        (1..=3)
            .map(|index| {
                format!("res://assets/obstacles/forest/forest_obstacle_rectangle_{index}.png")
            })
            .collect(),
    );

    SkinOverrides {
        enemies,
        bosses,
        obstacles,
    }
}
