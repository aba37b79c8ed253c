use serde::Deserialize;
use thiserror::Error;
use uuid::Uuid;

use super::direction::{self, Direction};

pub const UNDEFINED_ITEM_NAME: &str = "UNDEFINED ITEM NAME - This is a bug.";
pub const UNDEFINED_ITEM_DESCRIPTION: &str = "UNDEFINED ITEM DESCRIPTION - This is a bug.";
pub const UNDEFINED_ROOM_TITLE: &str = "UNDEFINED ROOM TITLE - This is a bug.";
pub const UNDEFINED_ROOM_DESCRIPTION: &str = "UNDEFINED ROOM DESCRIPTION - This is a bug.";

/// Raised by the authoring constructors when content is incomplete.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContentError {
    #[error("{entity} {field} may not be empty")]
    Blank {
        entity: &'static str,
        field: &'static str,
    },
}

//////////////////
/// COORDINATES ///
//////////////////

/// Integer coordinate triple. Deserializes from `[x, y, z]`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize)]
#[serde(from = "[i64; 3]")]
pub struct Position {
    pub x: i64,
    pub y: i64,
    pub z: i64,
}

impl Position {
    pub const ORIGIN: Position = Position { x: 0, y: 0, z: 0 };

    pub fn new(x: i64, y: i64, z: i64) -> Self {
        Position { x, y, z }
    }

    /// One step in `dir`. Saturates at the edges of `i64`.
    pub fn step(self, dir: Direction) -> Self {
        let (dx, dy, dz) = dir.delta;
        Position {
            x: self.x.saturating_add(dx),
            y: self.y.saturating_add(dy),
            z: self.z.saturating_add(dz),
        }
    }
}

impl From<[i64; 3]> for Position {
    fn from([x, y, z]: [i64; 3]) -> Self {
        Position { x, y, z }
    }
}

impl From<(i64, i64, i64)> for Position {
    fn from((x, y, z): (i64, i64, i64)) -> Self {
        Position { x, y, z }
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

/////////////
/// ITEMS ///
/////////////

/// Identity of a live item. Two items never share one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ItemId(Uuid);

impl ItemId {
    fn fresh() -> Self {
        ItemId(Uuid::new_v4())
    }
}

impl std::fmt::Display for ItemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Display::fmt(&self.0, f)
    }
}

/// An inert, carryable thing. Deliberately not `Clone`: moving an item
/// between a room and an inventory moves the value itself.
#[derive(Debug)]
pub struct Item {
    id: ItemId,
    name: String,
    description: String,
}

impl Item {
    /// Runtime constructor. Blank values fall back to the placeholder text.
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self::from_parts(Some(name.into()), Some(description.into()))
    }

    pub fn from_parts(name: Option<String>, description: Option<String>) -> Self {
        Item {
            id: ItemId::fresh(),
            name: or_placeholder(name, UNDEFINED_ITEM_NAME),
            description: or_placeholder(description, UNDEFINED_ITEM_DESCRIPTION),
        }
    }

    /// Authoring constructor: refuses blank content instead of patching it.
    pub fn try_new(
        name: impl Into<String>,
        description: impl Into<String>,
    ) -> Result<Self, ContentError> {
        let name = require("item", "name", name.into())?;
        let description = require("item", "description", description.into())?;
        Ok(Item {
            id: ItemId::fresh(),
            name,
            description,
        })
    }

    pub fn id(&self) -> ItemId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    // TODO: reject names already used by another item once the world keeps an item registry.
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = or_placeholder(Some(name.into()), UNDEFINED_ITEM_NAME);
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = or_placeholder(Some(description.into()), UNDEFINED_ITEM_DESCRIPTION);
    }

    pub fn is_placeholder(&self) -> bool {
        self.name == UNDEFINED_ITEM_NAME || self.description == UNDEFINED_ITEM_DESCRIPTION
    }
}

impl Default for Item {
    fn default() -> Self {
        Self::from_parts(None, None)
    }
}

/////////////
/// ROOMS ///
/////////////

#[derive(Debug)]
pub struct Room {
    title: String,
    description: String,
    exits: Vec<Direction>,
    items: Vec<Item>,
}

impl Room {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self::from_parts(Some(title.into()), Some(description.into()))
    }

    pub fn from_parts(title: Option<String>, description: Option<String>) -> Self {
        Room {
            title: or_placeholder(title, UNDEFINED_ROOM_TITLE),
            description: or_placeholder(description, UNDEFINED_ROOM_DESCRIPTION),
            exits: Vec::new(),
            items: Vec::new(),
        }
    }

    pub fn try_new(
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> Result<Self, ContentError> {
        let title = require("room", "title", title.into())?;
        let description = require("room", "description", description.into())?;
        Ok(Room {
            title,
            description,
            exits: Vec::new(),
            items: Vec::new(),
        })
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = or_placeholder(Some(title.into()), UNDEFINED_ROOM_TITLE);
    }

    pub fn describe(&self) -> &str {
        &self.description
    }

    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = or_placeholder(Some(description.into()), UNDEFINED_ROOM_DESCRIPTION);
    }

    pub fn exits(&self) -> &[Direction] {
        &self.exits
    }

    pub fn has_exit(&self, name: &str) -> bool {
        self.exits.iter().any(|d| d.name == name)
    }

    /// Adds `name` if it is a registered direction not already present.
    /// Returns whether the exit set changed.
    pub fn add_exit(&mut self, name: &str) -> bool {
        match direction::resolve(name) {
            Some(dir) if !self.has_exit(dir.name) => {
                self.exits.push(dir);
                true
            }
            _ => false,
        }
    }

    pub fn remove_exit(&mut self, name: &str) {
        self.exits.retain(|d| d.name != name);
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Case-insensitive lookup by name; first match wins.
    pub fn item_named(&self, name: &str) -> Option<&Item> {
        let query = name.trim();
        self.items
            .iter()
            .find(|i| i.name.eq_ignore_ascii_case(query))
    }

    pub fn add_item(&mut self, item: Item) {
        if self.items.iter().any(|i| i.id == item.id) {
            return;
        }
        self.items.push(item);
    }

    /// Takes the item out of the room, handing ownership to the caller.
    pub fn remove_item(&mut self, id: ItemId) -> Option<Item> {
        let idx = self.items.iter().position(|i| i.id == id)?;
        Some(self.items.remove(idx))
    }
}

impl Default for Room {
    fn default() -> Self {
        Self::from_parts(None, None)
    }
}

///////////////////
/// DESCRIPTORS ///
///////////////////

/// One room as supplied by a descriptor source.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RoomDescriptor {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub exits: Vec<String>,
    pub position: Position,
}

impl RoomDescriptor {
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        exits: &[&str],
        position: impl Into<Position>,
    ) -> Self {
        RoomDescriptor {
            title: Some(title.into()),
            description: Some(description.into()),
            exits: exits.iter().map(|e| e.to_string()).collect(),
            position: position.into(),
        }
    }

    /// Builds the room this descriptor describes. Unknown exits are dropped;
    /// the returned count says how many.
    pub fn build_room(&self) -> (Room, usize) {
        let mut room = Room::from_parts(self.title.clone(), self.description.clone());
        let mut dropped = 0;
        for exit in &self.exits {
            if direction::resolve(exit).is_none() {
                dropped += 1;
            }
            room.add_exit(exit);
        }
        (room, dropped)
    }
}

fn or_placeholder(value: Option<String>, placeholder: &str) -> String {
    match value {
        Some(v) if !v.trim().is_empty() => v,
        _ => placeholder.to_string(),
    }
}

fn require(
    entity: &'static str,
    field: &'static str,
    value: String,
) -> Result<String, ContentError> {
    if value.trim().is_empty() {
        Err(ContentError::Blank { entity, field })
    } else {
        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_accessors() {
        let mut item = Item::new("Test Item", "This is an item. You feel tested.");
        assert_eq!(item.name(), "Test Item");
        assert_eq!(item.description(), "This is an item. You feel tested.");

        item.set_name("New Test Item Name");
        item.set_description("Still tested.");
        assert_eq!(item.name(), "New Test Item Name");
        assert_eq!(item.description(), "Still tested.");
        assert!(!item.is_placeholder());
    }

    #[test]
    fn test_item_placeholders() {
        let empty = Item::default();
        assert_eq!(empty.name(), UNDEFINED_ITEM_NAME);
        assert_eq!(empty.description(), UNDEFINED_ITEM_DESCRIPTION);
        assert!(empty.is_placeholder());

        let no_desc = Item::from_parts(Some("Lamp".into()), None);
        assert_eq!(no_desc.name(), "Lamp");
        assert_eq!(no_desc.description(), UNDEFINED_ITEM_DESCRIPTION);

        let blank = Item::new("  ", "");
        assert_eq!(blank.name(), UNDEFINED_ITEM_NAME);
    }

    #[test]
    fn test_item_try_new_fails_fast() {
        assert_eq!(
            Item::try_new("", "desc").unwrap_err(),
            ContentError::Blank {
                entity: "item",
                field: "name"
            }
        );
        assert!(Item::try_new("Lamp", " ").is_err());
        assert!(Item::try_new("Lamp", "A brass lamp.").is_ok());
    }

    #[test]
    fn test_items_have_distinct_identity() {
        let a = Item::new("Coin", "A coin.");
        let b = Item::new("Coin", "A coin.");
        assert_ne!(a.id(), b.id());
    }

    #[test]
    fn test_room_placeholders() {
        let room = Room::default();
        assert_eq!(room.title(), UNDEFINED_ROOM_TITLE);
        assert_eq!(room.describe(), UNDEFINED_ROOM_DESCRIPTION);
        assert!(Room::try_new("", "x").is_err());
    }

    #[test]
    fn test_room_add_exit() {
        let mut room = Room::default();
        assert!(room.add_exit("north"));
        assert!(!room.add_exit("north"));
        assert_eq!(room.exits().len(), 1);
        assert!(room.has_exit("north"));
    }

    #[test]
    fn test_room_rejects_false_exit() {
        let mut room = Room::default();
        assert!(!room.add_exit("Blernsday"));
        assert!(room.exits().is_empty());
    }

    #[test]
    fn test_room_remove_exit() {
        let mut room = Room::default();
        room.add_exit("north");
        room.add_exit("south");
        room.remove_exit("north");
        let names: Vec<&str> = room.exits().iter().map(|d| d.name).collect();
        assert_eq!(names, vec!["south"]);

        room.remove_exit("north");
        room.remove_exit("down");
        assert_eq!(room.exits().len(), 1);
    }

    #[test]
    fn test_room_items() {
        let mut room = Room::default();
        let this = Item::new("This Item.", "");
        let that = Item::new("That Item.", "");
        let that_id = that.id();
        room.add_item(this);
        room.add_item(that);
        assert_eq!(room.items().len(), 2);

        let removed = room.remove_item(that_id).map(|i| i.name().to_string());
        assert_eq!(removed.as_deref(), Some("That Item."));
        assert_eq!(room.items().len(), 1);
        assert_eq!(room.items()[0].name(), "This Item.");

        assert!(room.remove_item(that_id).is_none());
        assert!(room.item_named("this item.").is_some());
    }

    #[test]
    fn test_position_step_and_parse() {
        let p = Position::ORIGIN.step(direction::NORTH).step(direction::WEST);
        assert_eq!(p, Position::new(-1, 1, 0));

        let edge = Position::new(i64::MAX, 0, 0).step(direction::EAST);
        assert_eq!(edge.x, i64::MAX);

        assert_eq!(Position::from([8, 0, 0]).to_string(), "(8, 0, 0)");
    }

    #[test]
    fn test_descriptor_build_room_drops_unknown_exits() {
        let desc = RoomDescriptor::new("Hall", "A hall.", &["north", "sideways", "north"], (0, 0, 0));
        let (room, dropped) = desc.build_room();
        assert_eq!(dropped, 1);
        assert_eq!(room.exits().len(), 1);
        assert_eq!(room.title(), "Hall");
    }
}
