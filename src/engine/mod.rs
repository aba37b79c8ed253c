mod error;
mod items;
mod movement;
mod player;

pub use error::GameError;
pub use items::{drop_item, inventory_listing, take_item};
pub use movement::travel;
pub use player::Player;
