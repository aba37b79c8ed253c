use tracing::debug;

use crate::engine::error::GameError;
use crate::engine::player::Player;
use crate::world;

/// Move the player through an exit of the room they stand in.
///
/// Unlike `Player::move_to`, this refuses to walk through walls: the room at
/// the player's position must list the exit. Where the exit leads is not
/// checked, so a badly authored world can still put the player in empty space.
pub fn travel(
    world: &world::World,
    player: &mut Player,
    direction: &str,
) -> Result<String, GameError> {
    let dir = direction.trim().to_lowercase();

    if world::resolve_direction(&dir).is_none() {
        return Err(GameError::UnknownDirection(direction.trim().to_string()));
    }

    let from = player.current_room();
    let has_exit = world
        .room_at(from)
        .is_some_and(|room| room.has_exit(&dir));
    if !has_exit {
        return Err(GameError::NoExit(dir));
    }

    player.move_to(&dir);
    debug!(%from, to = %player.current_room(), "player moved");
    Ok(format!("You go {}.", dir))
}
