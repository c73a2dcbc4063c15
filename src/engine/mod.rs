mod actions;
mod exits;
mod items;
mod movement;
mod parser;
mod render;

pub use actions::handle_use;
pub use exits::{EXITS_PREFIX, format_exits};
pub use items::{handle_take, handle_wear};
pub use movement::handle_go;
pub use parser::{Command, UNKNOWN_COMMAND, parse_command};
pub use render::{handle_look, render_room};

use crate::world::World;

/// Route a parsed command to its handler and return the response text.
pub fn dispatch(world: &mut World, command: Command<'_>) -> String {
    match command {
        Command::Look => handle_look(world),
        Command::Go { direction } => handle_go(world, direction),
        Command::Take { item } => handle_take(world, item),
        Command::Wear { item } => handle_wear(world, item),
        Command::Use { item, target } => handle_use(world, item, target),
        Command::Incomplete(prompt) => prompt.to_string(),
        Command::Unknown => UNKNOWN_COMMAND.to_string(),
    }
}
