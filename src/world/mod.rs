pub mod direction;
pub mod fixtures;
mod index;
mod loader;
mod model;
mod validator;

pub use direction::{Direction, resolve as resolve_direction};
pub use index::{IngestSummary, World};
pub use loader::{
    DescriptorSource, LoadError, TomlFileSource, WorldFile, load_world_from_file,
    load_world_from_str,
};
pub use model::{
    ContentError, Item, ItemId, Position, Room, RoomDescriptor, UNDEFINED_ITEM_DESCRIPTION,
    UNDEFINED_ITEM_NAME, UNDEFINED_ROOM_DESCRIPTION, UNDEFINED_ROOM_TITLE,
};
pub use validator::{ValidationError, validate_descriptors};
