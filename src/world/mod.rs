mod error;
mod loader;
mod model;
mod validator;

pub use error::WorldError;
pub use loader::load_world_from_str;

pub use model::{
    Exit, Item, ItemLocation, ItemName, Player, Room, RoomKind, RoomName, Usage, World,
};
pub use validator::{ValidationError, validate_world};
