use thiserror::Error;

use crate::world::Position;

/// Why a game-level command was refused. The message is what the player sees.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("'{0}' isn't a direction you can go.")]
    UnknownDirection(String),

    #[error("You can't go {0} from here.")]
    NoExit(String),

    #[error("You don't see {0} here.")]
    ItemNotHere(String),

    #[error("You aren't carrying {0}.")]
    NotCarrying(String),

    #[error("There's nowhere to put anything down at {0}.")]
    NoRoomHere(Position),
}
