//! Skin-override batch migration.
//!
//! Walks the existing world files, attaches the per-world `skin_overrides`
//! table (the forest world carries a full reskin, later worlds ship empty
//! maps), strips the legacy `enemy_skin`/`sprite_path` wave keys, and
//! rewrites each file in the canonical key order. Wave sequences are never
//! reordered and wave times are never touched.
//!
//! A file that cannot be read, parsed or written is reported and skipped;
//! the batch continues and nothing partial is persisted for it.

use std::{fs, path::Path};

use serde_json::{Map, Value};
use starlane_content::forest_skin_overrides;
use starlane_core::SkinOverrides;
use thiserror::Error;

use crate::emit::to_canonical_json;

const ROOT_KEY_ORDER: [&str; 9] = [
    "id",
    "name",
    "description",
    "order",
    "skin_overrides",
    "multipliers",
    "theme",
    "levels",
    "unlock_condition",
];

/// Why one world file was skipped by the migration.
#[derive(Debug, Error)]
pub(crate) enum MigrationError {
    /// The file could not be read.
    #[error("could not read the file: {0}")]
    Read(#[source] std::io::Error),
    /// The file did not contain valid JSON.
    #[error("could not parse the file: {0}")]
    Parse(#[source] serde_json::Error),
    /// The document root was not a JSON object.
    #[error("the document root is not an object")]
    NotAnObject,
    /// The migrated document could not be written back.
    #[error("could not write the file: {0}")]
    Write(#[source] std::io::Error),
}

/// Migrates every campaign world file found in `worlds_dir`.
pub(crate) fn apply_overrides(worlds_dir: &Path) {
    let mut migrated = 0_usize;
    for world in starlane_content::world_table() {
        let path = worlds_dir.join(format!("{}.json", world.id()));
        let overrides = if world.order() == 1 {
            forest_skin_overrides()
        } else {
            SkinOverrides::default()
        };

        match migrate_file(&path, &overrides) {
            Ok(()) => {
                migrated += 1;
                println!("Updated {}", path.display());
            }
            Err(error) => eprintln!("Skipping {}: {error}", path.display()),
        }
    }
    println!("\n{migrated} world files updated in {}", worlds_dir.display());
}

fn migrate_file(path: &Path, overrides: &SkinOverrides) -> Result<(), MigrationError> {
    let raw = fs::read_to_string(path).map_err(MigrationError::Read)?;
    let mut document: Value = serde_json::from_str(&raw).map_err(MigrationError::Parse)?;
    let root = document.as_object_mut().ok_or(MigrationError::NotAnObject)?;

    let encoded = serde_json::to_value(overrides).map_err(MigrationError::Parse)?;
    let _ = root.insert("skin_overrides".to_owned(), encoded);
    strip_legacy_wave_keys(root);
    reorder_root(root);

    fs::write(path, to_canonical_json(&document)).map_err(MigrationError::Write)
}

/// Removes the placeholder keys the original generator emitted before skins
/// were resolved through the override table.
fn strip_legacy_wave_keys(root: &mut Map<String, Value>) {
    let Some(levels) = root.get_mut("levels").and_then(Value::as_array_mut) else {
        return;
    };
    for level in levels {
        let Some(waves) = level.get_mut("waves").and_then(Value::as_array_mut) else {
            continue;
        };
        for wave in waves {
            if let Some(object) = wave.as_object_mut() {
                let _ = object.remove("enemy_skin");
                let _ = object.remove("sprite_path");
            }
        }
    }
}

/// Rebuilds the root object in the canonical key order; keys outside the
/// canonical set are appended after it.
fn reorder_root(root: &mut Map<String, Value>) {
    let mut ordered = Map::new();
    for key in ROOT_KEY_ORDER {
        if let Some(value) = root.remove(key) {
            let _ = ordered.insert(key.to_owned(), value);
        }
    }
    for (key, value) in std::mem::take(root) {
        let _ = ordered.insert(key, value);
    }
    *root = ordered;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::emit::write_world;
    use starlane_system_assembly::assemble_all;
    use std::path::PathBuf;

    fn temp_worlds_dir(label: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("starlane-{label}-{}", std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).expect("create temp dir");
        dir
    }

    fn read_json(path: &Path) -> Value {
        let raw = fs::read_to_string(path).expect("read world file");
        serde_json::from_str(&raw).expect("parse world file")
    }

    #[test]
    fn overrides_are_attached_in_canonical_position() {
        let dir = temp_worlds_dir("overrides");
        let worlds = assemble_all();
        for world in &worlds {
            let _ = write_world(&dir, world).expect("seed world file");
        }

        apply_overrides(&dir);

        let forest = read_json(&dir.join("world_1.json"));
        let root = forest.as_object().expect("root object");
        let keys: Vec<&str> = root.keys().map(String::as_str).collect();
        assert_eq!(keys, ROOT_KEY_ORDER);
        assert_eq!(
            forest["skin_overrides"]["enemies"]["swarmer"],
            Value::from("res://assets/enemies/forest/forest_swarmer.tres")
        );

        let atlantis = read_json(&dir.join("world_2.json"));
        let enemies = atlantis["skin_overrides"]["enemies"]
            .as_object()
            .expect("override map");
        assert!(enemies.is_empty(), "later worlds get empty overrides");

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn legacy_keys_are_stripped_and_times_untouched() {
        let dir = temp_worlds_dir("legacy");
        let worlds = assemble_all();
        let world = &worlds[0];

        // Seed a file carrying the legacy placeholder keys.
        let mut seeded = serde_json::to_value(world).expect("encode world");
        let waves = seeded["levels"][0]["waves"]
            .as_array_mut()
            .expect("wave array");
        for wave in waves.iter_mut() {
            let object = wave.as_object_mut().expect("wave object");
            if object.contains_key("enemy_id") {
                let _ = object.insert("enemy_skin".to_owned(), Value::from(""));
            } else {
                let _ = object.insert("sprite_path".to_owned(), Value::from(""));
            }
        }
        let path = dir.join("world_1.json");
        fs::write(&path, to_canonical_json(&seeded)).expect("seed file");
        let times_before: Vec<Value> = seeded["levels"][0]["waves"]
            .as_array()
            .expect("waves")
            .iter()
            .map(|wave| wave["time"].clone())
            .collect();

        apply_overrides(&dir);

        let migrated = read_json(&path);
        let waves = migrated["levels"][0]["waves"].as_array().expect("waves");
        let times_after: Vec<Value> = waves.iter().map(|wave| wave["time"].clone()).collect();
        assert_eq!(times_before, times_after, "wave times must survive intact");
        for wave in waves {
            let object = wave.as_object().expect("wave object");
            assert!(!object.contains_key("enemy_skin"));
            assert!(!object.contains_key("sprite_path"));
        }

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn malformed_file_is_skipped_without_aborting_the_batch() {
        let dir = temp_worlds_dir("malformed");
        let worlds = assemble_all();
        fs::write(dir.join("world_1.json"), "{not json").expect("seed garbage");
        let _ = write_world(&dir, &worlds[1]).expect("seed world 2");

        apply_overrides(&dir);

        let raw = fs::read_to_string(dir.join("world_1.json")).expect("read garbage");
        assert_eq!(raw, "{not json", "skipped file is left untouched");

        let migrated = read_json(&dir.join("world_2.json"));
        assert!(
            migrated.get("skin_overrides").is_some(),
            "later files still migrate"
        );

        let _ = fs::remove_dir_all(&dir);
    }
}
