//! Canonical world-document serialization.
//!
//! The on-disk layout is tab-indented JSON with the key order fixed by the
//! field order of the [`starlane_core`] types, UTF-8 with non-ASCII text
//! preserved literally. One file per world, `world_<order>.json`, written
//! as a whole-file overwrite.

use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::Context;
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use starlane_core::WorldDocument;

/// Serializes a value into the canonical tab-indented layout.
pub(crate) fn to_canonical_json<T: Serialize>(value: &T) -> String {
    let mut buffer = Vec::new();
    let formatter = PrettyFormatter::with_indent(b"\t");
    let mut serializer = Serializer::with_formatter(&mut buffer, formatter);
    value
        .serialize(&mut serializer)
        .expect("world document serialization never fails");
    String::from_utf8(buffer).expect("serde_json emits valid UTF-8")
}

/// Writes a world document into `worlds_dir`, returning the file path.
pub(crate) fn write_world(worlds_dir: &Path, world: &WorldDocument) -> anyhow::Result<PathBuf> {
    let path = worlds_dir.join(format!("{}.json", world.id));
    fs::write(&path, to_canonical_json(world))
        .with_context(|| format!("writing {}", path.display()))?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use starlane_system_assembly::assemble_all;

    #[test]
    fn top_level_keys_follow_the_canonical_order() {
        let worlds = assemble_all();
        let json = to_canonical_json(&worlds[0]);

        let keys = [
            "\"id\"",
            "\"name\"",
            "\"description\"",
            "\"order\"",
            "\"multipliers\"",
            "\"theme\"",
            "\"levels\"",
            "\"unlock_condition\"",
        ];
        let mut last = 0;
        for key in keys {
            let marker = format!("\n\t{key}");
            let position = json.find(&marker).unwrap_or_else(|| {
                panic!("missing top-level key {key}");
            });
            assert!(position > last, "{key} out of order");
            last = position;
        }
    }

    #[test]
    fn output_is_tab_indented() {
        let worlds = assemble_all();
        let json = to_canonical_json(&worlds[0]);
        assert!(json.starts_with("{\n\t\"id\": \"world_1\""));
        assert!(json.contains("\n\t\t\"hp\": 1.0"), "nested keys use tab depth");
        assert!(!json.contains("\n    "), "no space indentation");
    }

    #[test]
    fn non_ascii_text_is_preserved_literally() {
        let worlds = assemble_all();
        let json = to_canonical_json(&worlds[0]);
        assert!(json.contains("Forêt Primordiale"));
        assert!(!json.contains("\\u00ea"), "no unicode escaping");
    }

    #[test]
    fn skin_overrides_are_omitted_when_absent() {
        let worlds = assemble_all();
        let json = to_canonical_json(&worlds[0]);
        assert!(!json.contains("skin_overrides"));
    }

    #[test]
    fn obstacle_waves_carry_their_wire_tag() {
        let worlds = assemble_all();
        let json = to_canonical_json(&worlds[0]);
        assert!(json.contains("\"type\": \"obstacle\""));
    }

    #[test]
    fn files_are_named_from_world_ids() {
        let dir = std::env::temp_dir().join(format!("starlane-emit-{}", std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).expect("create temp dir");

        let worlds = assemble_all();
        let path = write_world(&dir, &worlds[3]).expect("write world");
        assert!(path.ends_with("world_4.json"));

        let raw = fs::read_to_string(&path).expect("read back");
        let decoded: WorldDocument = serde_json::from_str(&raw).expect("round trip");
        assert_eq!(decoded, worlds[3]);

        let _ = fs::remove_dir_all(&dir);
    }
}
