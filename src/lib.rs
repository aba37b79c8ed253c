pub mod engine;
pub mod world;

use engine::{GameError, Player};
use world::{Room, World};

pub use world::{load_world_from_file, load_world_from_str};

/// One play session: the indexed world and the single player walking it.
pub struct GameState {
    pub world: World,
    pub player: Player,
}

impl GameState {
    pub fn new(world: World) -> Self {
        GameState {
            world,
            player: Player::new(),
        }
    }

    /// The room under the player, if that coordinate is indexed.
    pub fn current_room(&self) -> Option<&Room> {
        self.world.room_at(self.player.current_room())
    }

    pub fn travel(&mut self, direction: &str) -> Result<String, GameError> {
        engine::travel(&self.world, &mut self.player, direction)
    }

    pub fn take(&mut self, item_name: &str) -> Result<String, GameError> {
        engine::take_item(&mut self.world, &mut self.player, item_name)
    }

    pub fn drop(&mut self, item_name: &str) -> Result<String, GameError> {
        engine::drop_item(&mut self.world, &mut self.player, item_name)
    }

    pub fn inventory_listing(&self) -> String {
        engine::inventory_listing(&self.player)
    }
}
