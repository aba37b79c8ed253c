use tracing::debug;

use crate::engine::error::GameError;
use crate::engine::player::Player;
use crate::world;

/// Move a named item from the current room into the player's inventory.
pub fn take_item(
    world: &mut world::World,
    player: &mut Player,
    name: &str,
) -> Result<String, GameError> {
    let query = name.trim();
    let here = player.current_room();

    let item = world
        .room_at_mut(here)
        .and_then(|room| {
            let id = room.item_named(query)?.id();
            room.remove_item(id)
        })
        .ok_or_else(|| GameError::ItemNotHere(query.to_string()))?;

    debug!(item = %item.id(), position = %here, "item taken");
    Ok(player.pickup(item))
}

/// Move a named item from the inventory into the current room. With no room
/// underfoot the item stays in the inventory.
pub fn drop_item(
    world: &mut world::World,
    player: &mut Player,
    name: &str,
) -> Result<String, GameError> {
    let query = name.trim();
    let here = player.current_room();

    let id = player
        .inventory_item_named(query)
        .map(|i| i.id())
        .ok_or_else(|| GameError::NotCarrying(query.to_string()))?;

    let Some(room) = world.room_at_mut(here) else {
        return Err(GameError::NoRoomHere(here));
    };

    let item = player
        .drop(id)
        .ok_or_else(|| GameError::NotCarrying(query.to_string()))?;
    let msg = format!("You've dropped {}.", item.name());
    debug!(item = %item.id(), position = %here, "item dropped");
    room.add_item(item);
    Ok(msg)
}

pub fn inventory_listing(player: &Player) -> String {
    if player.inventory().is_empty() {
        return "You are carrying nothing.".to_string();
    }

    let names = player
        .inventory()
        .iter()
        .map(|i| i.name())
        .collect::<Vec<&str>>()
        .join(", ");
    format!("You are carrying: {}", names)
}
