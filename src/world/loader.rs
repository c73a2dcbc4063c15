use serde::Deserialize;
use std::collections::{HashMap, HashSet};

use super::error::WorldError;
use super::model::{
    Exit, Item, ItemLocation, ItemName, Player, Room, RoomKind, RoomName, Usage, World,
};
use super::validator::validate_world;

/// The one world this game ships with.
const HOME_WORLD: &str = include_str!("../../worlds/home.toml");

////////////////////
/// TOML STRUCTS ///
////////////////////

#[derive(Deserialize)]
struct WorldFile {
    world: WorldHeader,
    #[serde(default)]
    room: Vec<RoomConfig>, // [[room]] blocks
    #[serde(default)]
    item: Vec<ItemConfig>, // [[item]] blocks
    #[serde(default)]
    usage: Vec<UsageConfig>, // [[usage]] blocks
}

#[derive(Deserialize)]
struct WorldHeader {
    id: String,
    name: String,
    start_room: RoomName,
    #[serde(default)]
    desc: String,
}

#[derive(Deserialize)]
struct RoomConfig {
    name: RoomName,
    #[serde(default)]
    desc: String,

    #[serde(default)]
    look: LookConfig, // [room.look]
    #[serde(default)]
    exit: Vec<ExitConfig>, // [[room.exit]]
    #[serde(default)]
    exit_order: Option<Vec<String>>,

    #[serde(default)]
    locked: bool,
    #[serde(default)]
    lock_message: String,
}

#[derive(Deserialize, Default)]
#[serde(tag = "kind", rename_all = "lowercase")]
enum LookConfig {
    #[default]
    Plain,
    Kitchen {
        table: String,
        reminder_unpacked: String,
        reminder_packed: String,
    },
    Bedroom {
        table: Vec<ItemName>,
        chair: ItemName,
        empty: String,
    },
}

#[derive(Deserialize)]
struct ExitConfig {
    direction: String,
    target: RoomName,
}

#[derive(Deserialize)]
struct ItemConfig {
    name: ItemName,

    /// Where the item starts: "room:кухня" or "inventory".
    start_location: String,

    #[serde(default)]
    wearable: bool,
}

#[derive(Deserialize)]
struct UsageConfig {
    item: ItemName,
    target: String,
    room: RoomName,
    unlocks: RoomName,
    response: String,
}

/////////////////////////////
/// TOML PARSER FUNCTIONS ///
/////////////////////////////

impl World {
    /// Build the fixed starting world: four rooms, four items, one locked door.
    pub fn home() -> Result<World, WorldError> {
        load_world_from_str(HOME_WORLD)
    }
}

/// Parse and validate a world definition.
pub fn load_world_from_str(contents: &str) -> Result<World, WorldError> {
    let world_file: WorldFile = toml::from_str(contents)?;

    if world_file.world.id.trim().is_empty() {
        return Err(WorldError::EmptyField("world.id"));
    }

    let mut rooms: HashMap<RoomName, Room> = HashMap::new();
    for room_cfg in world_file.room {
        if rooms.contains_key(&room_cfg.name) {
            return Err(WorldError::DuplicateRoom(room_cfg.name.to_string()));
        }

        let exits = room_cfg
            .exit
            .into_iter()
            .map(|e| Exit {
                direction: e.direction,
                target: e.target,
            })
            .collect();

        let kind = match room_cfg.look {
            LookConfig::Plain => RoomKind::Plain,
            LookConfig::Kitchen {
                table,
                reminder_unpacked,
                reminder_packed,
            } => RoomKind::Kitchen {
                table,
                reminder_unpacked,
                reminder_packed,
            },
            LookConfig::Bedroom {
                table,
                chair,
                empty,
            } => RoomKind::Bedroom {
                table,
                chair,
                empty,
            },
        };

        rooms.insert(
            room_cfg.name.clone(),
            Room {
                name: room_cfg.name,
                desc: room_cfg.desc.trim().to_string(),
                kind,
                items: HashMap::new(),
                exits,
                exit_order: room_cfg.exit_order,
                locked: room_cfg.locked,
                lock_message: room_cfg.lock_message.trim().to_string(),
            },
        );
    }

    let mut inventory: HashMap<ItemName, Item> = HashMap::new();
    let mut seen_items: HashSet<ItemName> = HashSet::new();
    let mut wearables: HashSet<ItemName> = HashSet::new();

    for ic in world_file.item {
        if !seen_items.insert(ic.name.clone()) {
            return Err(WorldError::DuplicateItem(ic.name.to_string()));
        }

        if ic.wearable {
            wearables.insert(ic.name.clone());
        }

        let item = Item {
            name: ic.name.clone(),
        };

        match parse_item_location(&ic.start_location) {
            Some(ItemLocation::Room(room_name)) => match rooms.get_mut(&room_name) {
                Some(room) => {
                    room.items.insert(ic.name, item);
                }
                None => {
                    return Err(WorldError::BadLocation {
                        item: ic.name.to_string(),
                        location: ic.start_location,
                    });
                }
            },
            Some(ItemLocation::Inventory) => {
                inventory.insert(ic.name, item);
            }
            None => {
                return Err(WorldError::BadLocation {
                    item: ic.name.to_string(),
                    location: ic.start_location,
                });
            }
        }
    }

    let usages = world_file
        .usage
        .into_iter()
        .map(|u| Usage {
            item: u.item,
            target: u.target,
            room: u.room,
            unlocks: u.unlocks,
            response: u.response,
        })
        .collect();

    let world = World {
        id: world_file.world.id,
        name: world_file.world.name,
        desc: world_file.world.desc.trim().to_string(),
        rooms,
        player: Player {
            current_room: world_file.world.start_room,
            has_backpack: false,
            inventory,
        },
        usages,
        wearables,
    };

    let errors = validate_world(&world);
    if !errors.is_empty() {
        return Err(WorldError::Invalid(errors));
    }

    log::debug!(
        "loaded world '{}' with {} rooms, starting in {}",
        world.id,
        world.rooms.len(),
        world.player.current_room
    );

    Ok(world)
}

/// "room:<name>" or "inventory".
fn parse_item_location(raw: &str) -> Option<ItemLocation> {
    let raw = raw.trim();
    if raw == "inventory" {
        return Some(ItemLocation::Inventory);
    }

    raw.strip_prefix("room:")
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(|name| ItemLocation::Room(RoomName::new(name)))
}
