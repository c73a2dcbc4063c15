pub mod engine;
pub mod world;

use engine::{dispatch, handle_look, parse_command};
use world::{World, WorldError};

pub use world::load_world_from_str;

/// One independent play-through. Commands are applied one at a time through
/// `&mut self`.
#[derive(Debug, Clone)]
pub struct GameState {
    world: World,
}

#[cfg(feature = "wasm")]
mod wasm_bindings {
    use super::*;
    use wasm_bindgen::prelude::*;

    #[wasm_bindgen]
    pub struct WasmGame {
        state: GameState,
    }

    #[wasm_bindgen]
    impl WasmGame {
        /// Start a new game in the fixed starting world.
        #[wasm_bindgen(constructor)]
        pub fn new() -> Result<WasmGame, JsValue> {
            let state = GameState::new().map_err(|e| JsValue::from_str(&e.to_string()))?;
            Ok(WasmGame { state })
        }

        /// Describe the starting room.
        #[wasm_bindgen]
        pub fn init(&self) -> String {
            self.state.initialize()
        }

        /// Process a player command and return the response.
        #[wasm_bindgen]
        pub fn step(&mut self, input: &str) -> String {
            self.state.handle_command(input)
        }
    }
}

impl GameState {
    /// Build the fixed starting world.
    pub fn new() -> Result<Self, WorldError> {
        Ok(Self::from_world(World::home()?))
    }

    pub fn from_world(world: World) -> Self {
        GameState { world }
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    /// The opening description shown before the first command.
    pub fn initialize(&self) -> String {
        handle_look(&self.world)
    }

    /// Process a single raw input line and return the response. Never fails:
    /// every rejected command has its own response and leaves the world as
    /// it was.
    pub fn handle_command(&mut self, line: &str) -> String {
        let command = parse_command(line);
        log::debug!(
            "{:?} in {}",
            command,
            self.world.player().current_room
        );
        dispatch(&mut self.world, command)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::UNKNOWN_COMMAND;
    use test_log::test;

    #[test]
    fn look_is_idempotent() {
        let mut game = GameState::new().unwrap();
        let first = game.handle_command("осмотреться");
        assert_eq!(first, game.handle_command("осмотреться"));
        assert_eq!(first, game.initialize());
    }

    #[test]
    fn missing_arguments_do_not_dispatch() {
        let mut game = GameState::new().unwrap();
        assert_eq!(game.handle_command("идти"), "куда идти?");
        assert_eq!(game.handle_command("взять"), "что взять?");
        assert_eq!(game.handle_command("надеть"), "что надеть?");
        assert_eq!(game.handle_command("применить"), "применить что и к чему?");
        assert_eq!(game.world().player().current_room.as_str(), "кухня");
    }

    #[test]
    fn games_do_not_share_state() {
        let mut a = GameState::new().unwrap();
        let b = GameState::new().unwrap();

        a.handle_command("идти коридор");
        assert_eq!(a.world().player().current_room.as_str(), "коридор");
        assert_eq!(b.world().player().current_room.as_str(), "кухня");
    }

    #[test]
    fn unknown_commands() {
        let mut game = GameState::new().unwrap();
        let before = game.handle_command("осмотреться");

        assert_eq!(game.handle_command(""), UNKNOWN_COMMAND);
        assert_eq!(game.handle_command("frobnicate"), UNKNOWN_COMMAND);
        assert_eq!(game.handle_command("надеть ключи"), UNKNOWN_COMMAND);
        assert_eq!(game.handle_command("осмотреться"), before);
    }
}
