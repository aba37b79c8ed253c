use std::collections::{HashMap, HashSet};

use super::direction;
use super::model::{Position, RoomDescriptor};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    pub message: String,
}

impl ValidationError {
    fn new(msg: impl Into<String>) -> Self {
        ValidationError {
            message: msg.into(),
        }
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

/// Strict checks for content being authored. Ingest never calls this; it is
/// for tools that should refuse a broken world rather than play it.
pub fn validate_descriptors(rooms: &[RoomDescriptor]) -> Vec<ValidationError> {
    let mut errors: Vec<ValidationError> = Vec::new();

    if rooms.is_empty() {
        errors.push(ValidationError::new("world has no rooms"));
    }

    // Index helpers
    let mut by_position: HashMap<Position, &RoomDescriptor> = HashMap::new();
    for room in rooms {
        if let Some(prev) = by_position.insert(room.position, room) {
            errors.push(ValidationError::new(format!(
                "rooms '{}' and '{}' both occupy {}",
                label(prev),
                label(room),
                room.position
            )));
        }
    }

    for room in rooms {
        if is_blank(&room.title) {
            errors.push(ValidationError::new(format!(
                "room at {} has no title",
                room.position
            )));
        }
        if is_blank(&room.description) {
            errors.push(ValidationError::new(format!(
                "room '{}' at {} has no description",
                label(room),
                room.position
            )));
        }

        let mut seen: HashSet<&str> = HashSet::new();
        for exit in &room.exits {
            if !seen.insert(exit.as_str()) {
                errors.push(ValidationError::new(format!(
                    "room '{}' lists exit '{}' more than once",
                    label(room),
                    exit
                )));
                continue;
            }

            let Some(dir) = direction::resolve(exit) else {
                errors.push(ValidationError::new(format!(
                    "room '{}' has unknown exit '{}'",
                    label(room),
                    exit
                )));
                continue;
            };

            let target_pos = room.position.step(dir);
            match by_position.get(&target_pos) {
                None => errors.push(ValidationError::new(format!(
                    "room '{}' exit '{}' leads to empty space at {}",
                    label(room),
                    exit,
                    target_pos
                ))),
                Some(target) => {
                    let back = dir.opposite().name;
                    if !target.exits.iter().any(|e| e == back) {
                        errors.push(ValidationError::new(format!(
                            "room '{}' exit '{}' reaches '{}', which has no '{}' exit back",
                            label(room),
                            exit,
                            label(target),
                            back
                        )));
                    }
                }
            }
        }
    }

    errors
}

fn is_blank(value: &Option<String>) -> bool {
    value.as_deref().is_none_or(|v| v.trim().is_empty())
}

fn label(room: &RoomDescriptor) -> &str {
    room.title.as_deref().unwrap_or("<untitled>")
}
