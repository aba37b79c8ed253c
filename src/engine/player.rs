use crate::world::{self, Item, ItemId, Position};

/// Where the player stands and what they carry.
///
/// The player knows nothing about rooms. Standing on a coordinate with no
/// room is allowed, and moving never consults exits; that is the game
/// layer's job.
#[derive(Debug, Default)]
pub struct Player {
    position: Position,
    inventory: Vec<Item>,
}

impl Player {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn at(position: impl Into<Position>) -> Self {
        Player {
            position: position.into(),
            inventory: Vec::new(),
        }
    }

    /// Step one unit in the named direction. Unknown names leave the
    /// player where they are. Returns whether the position changed.
    pub fn move_to(&mut self, direction: &str) -> bool {
        match world::resolve_direction(direction) {
            Some(dir) => {
                self.position = self.position.step(dir);
                true
            }
            None => false,
        }
    }

    pub fn current_room(&self) -> Position {
        self.position
    }

    pub fn inventory(&self) -> &[Item] {
        &self.inventory
    }

    pub fn inventory_item(&self, id: ItemId) -> Option<&Item> {
        self.inventory.iter().find(|i| i.id() == id)
    }

    pub fn inventory_item_named(&self, name: &str) -> Option<&Item> {
        let query = name.trim();
        self.inventory
            .iter()
            .find(|i| i.name().eq_ignore_ascii_case(query))
    }

    // TODO: check that the item came from the current room once items track their container.
    pub fn pickup(&mut self, item: Item) -> String {
        let msg = format!("You picked up {}.", item.name());
        self.inventory.push(item);
        msg
    }

    /// Remove the item from the inventory and hand it back. The caller
    /// decides where it ends up.
    pub fn drop(&mut self, id: ItemId) -> Option<Item> {
        let idx = self.inventory.iter().position(|i| i.id() == id)?;
        Some(self.inventory.remove(idx))
    }
}
