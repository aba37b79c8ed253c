use serde::Deserialize;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{info, warn};

use super::index::{IngestSummary, World};
use super::model::RoomDescriptor;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read world file '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid world data: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Anything that can hand the world a batch of room descriptors.
///
/// Retrieval failures are the source's business: it reports them however it
/// likes and returns whatever it managed to read, possibly nothing.
pub trait DescriptorSource {
    fn fetch_room_descriptors(&self) -> Vec<RoomDescriptor>;
}

impl DescriptorSource for [RoomDescriptor] {
    fn fetch_room_descriptors(&self) -> Vec<RoomDescriptor> {
        self.to_vec()
    }
}

impl DescriptorSource for Vec<RoomDescriptor> {
    fn fetch_room_descriptors(&self) -> Vec<RoomDescriptor> {
        self.clone()
    }
}

////////////////////
/// TOML STRUCTS ///
////////////////////

#[derive(Deserialize)]
struct RawWorldFile {
    #[serde(default)]
    world: WorldHeader,
    #[serde(default)]
    room: Vec<RoomDescriptor>, // [[room]] blocks
}

#[derive(Deserialize, Default)]
struct WorldHeader {
    #[serde(default)]
    name: String,
    #[serde(default)]
    desc: String,
}

/// A parsed world file, ready to be validated or ingested.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorldFile {
    pub name: String,
    pub desc: String,
    pub rooms: Vec<RoomDescriptor>,
}

impl WorldFile {
    pub fn into_world(self) -> (World, IngestSummary) {
        let mut world = World::new();
        world.name = self.name;
        world.desc = self.desc;
        let summary = world.ingest(self.rooms);
        (world, summary)
    }
}

impl DescriptorSource for WorldFile {
    fn fetch_room_descriptors(&self) -> Vec<RoomDescriptor> {
        self.rooms.clone()
    }
}

/// Reads descriptors from a TOML world file each time it is asked.
#[derive(Debug, Clone)]
pub struct TomlFileSource {
    path: PathBuf,
}

impl TomlFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        TomlFileSource { path: path.into() }
    }
}

impl DescriptorSource for TomlFileSource {
    fn fetch_room_descriptors(&self) -> Vec<RoomDescriptor> {
        match load_world_from_file(&self.path) {
            Ok(file) => file.rooms,
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "no rooms read from world file");
                Vec::new()
            }
        }
    }
}

/////////////////////////////
/// TOML PARSER FUNCTIONS ///
/////////////////////////////

pub fn load_world_from_file(path: &Path) -> Result<WorldFile, LoadError> {
    let contents = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let file = load_world_from_str(&contents)?;
    info!(path = %path.display(), rooms = file.rooms.len(), "loaded world file");
    Ok(file)
}

pub fn load_world_from_str(toml_str: &str) -> Result<WorldFile, LoadError> {
    let raw: RawWorldFile = toml::from_str(toml_str)?;

    let rooms = raw
        .room
        .into_iter()
        .map(|mut r| {
            r.description = r.description.map(|d| normalize_multiline_desc(&d));
            r
        })
        .collect();

    Ok(WorldFile {
        name: raw.world.name,
        desc: normalize_multiline_desc(&raw.world.desc),
        rooms,
    })
}

/// Collapse authoring line breaks: a wrapped line joins with a space, one
/// blank line becomes a newline, two or more become a paragraph break.
fn normalize_multiline_desc(raw: &str) -> String {
    let mut result = String::new();
    let mut pending_blank_lines = 0usize;

    for line in raw.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            pending_blank_lines += 1;
            continue;
        }

        if !result.is_empty() {
            match pending_blank_lines {
                0 => result.push(' '),
                1 => result.push('\n'),
                _ => result.push_str("\n\n"),
            }
        }
        result.push_str(trimmed);
        pending_blank_lines = 0;
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::world::Position;
    use std::io::Write;

    const SAMPLE: &str = r#"
[world]
name = "Marlowe"
desc = "A small test house."

[[room]]
title = "The First Room."
description = """
You are in the
first room.
"""
exits = ["north", "west"]
position = [8, 0, 0]

[[room]]
title = "The Northern Room."
exits = ["south"]
position = [8, 1, 0]
"#;

    #[test]
    fn test_load_world_from_str() {
        let file = load_world_from_str(SAMPLE).expect("parse");
        assert_eq!(file.name, "Marlowe");
        assert_eq!(file.rooms.len(), 2);

        let first = &file.rooms[0];
        assert_eq!(first.position, Position::new(8, 0, 0));
        assert_eq!(first.description.as_deref(), Some("You are in the first room."));
        assert_eq!(first.exits, vec!["north", "west"]);

        assert_eq!(file.rooms[1].description, None);
    }

    #[test]
    fn test_empty_file_has_no_rooms() {
        let file = load_world_from_str("").expect("parse");
        assert!(file.rooms.is_empty());
        assert!(file.name.is_empty());
    }

    #[test]
    fn test_bad_position_is_a_parse_error() {
        let err = load_world_from_str("[[room]]\ntitle = \"x\"\nposition = [1, 2]\n");
        assert!(matches!(err, Err(LoadError::Parse(_))));
    }

    #[test]
    fn test_normalize_multiline_desc() {
        assert_eq!(normalize_multiline_desc("  a\n  b  "), "a b");
        assert_eq!(normalize_multiline_desc("a\n\nb"), "a\nb");
        assert_eq!(normalize_multiline_desc("\n\na\n\n\n\nb\n"), "a\n\nb");
    }

    #[test]
    fn test_file_source_reads_rooms() {
        let mut tmp = tempfile::NamedTempFile::new().expect("temp file");
        tmp.write_all(SAMPLE.as_bytes()).expect("write");

        let source = TomlFileSource::new(tmp.path());
        let mut world = World::new();
        let summary = world.ingest_from(&source);
        assert_eq!(summary.inserted, 2);
        assert!(world.get_room(8, 1, 0).is_some());
    }

    #[test]
    fn test_missing_file_yields_no_descriptors() {
        let dir = tempfile::tempdir().expect("temp dir");
        let source = TomlFileSource::new(dir.path().join("missing.toml"));
        assert!(source.fetch_room_descriptors().is_empty());
        assert!(matches!(
            load_world_from_file(&dir.path().join("missing.toml")),
            Err(LoadError::Io { .. })
        ));
    }

    #[test]
    fn test_into_world_keeps_header() {
        let (world, summary) = load_world_from_str(SAMPLE).expect("parse").into_world();
        assert_eq!(world.name, "Marlowe");
        assert_eq!(world.desc, "A small test house.");
        assert_eq!(summary.inserted, 2);
    }
}
