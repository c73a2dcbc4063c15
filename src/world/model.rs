use std::borrow::Borrow;
use std::collections::{HashMap, HashSet};
use std::fmt;

use serde::Deserialize;

//////////////////////////////
/// GAME STRUCTS AND ENUMS ///
//////////////////////////////

/// Unique room name. Used both as the lookup key and as the displayed label.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize)]
#[serde(transparent)]
pub struct RoomName(String);

/// Unique item name. An item is its own key; there is nothing else to it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize)]
#[serde(transparent)]
pub struct ItemName(String);

impl RoomName {
    pub fn new(name: impl Into<String>) -> Self {
        RoomName(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl ItemName {
    pub fn new(name: impl Into<String>) -> Self {
        ItemName(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for RoomName {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for ItemName {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RoomName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Display for ItemName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for RoomName {
    fn from(name: &str) -> Self {
        RoomName::new(name)
    }
}

impl From<&str> for ItemName {
    fn from(name: &str) -> Self {
        ItemName::new(name)
    }
}

/// Runtime world type used by the game loop.
#[derive(Debug, Clone)]
pub struct World {
    pub id: String,
    pub name: String,
    pub desc: String,
    pub(crate) rooms: HashMap<RoomName, Room>,
    pub(crate) player: Player,
    pub(crate) usages: Vec<Usage>,
    /// Wearable names, kept here because a worn item is in no container.
    pub(crate) wearables: HashSet<ItemName>,
}

#[derive(Debug, Clone)]
pub struct Room {
    pub name: RoomName,
    pub desc: String,
    pub kind: RoomKind,
    pub items: HashMap<ItemName, Item>,
    pub exits: Vec<Exit>,
    /// Fixed display order for the exit list; alphabetical when absent.
    pub exit_order: Option<Vec<String>>,
    pub locked: bool,
    pub lock_message: String,
}

/// How `look` renders a room.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoomKind {
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

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Exit {
    pub direction: String,
    pub target: RoomName,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    pub name: ItemName,
}

#[derive(Debug, Clone)]
pub struct Player {
    pub current_room: RoomName,
    pub has_backpack: bool,
    pub inventory: HashMap<ItemName, Item>,
}

/// `use <item> <target>` while standing in `room` clears the lock on `unlocks`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Usage {
    pub item: ItemName,
    pub target: String,
    pub room: RoomName,
    pub unlocks: RoomName,
    pub response: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ItemLocation {
    Room(RoomName),
    Inventory,
}

impl Room {
    pub fn exit(&self, direction: &str) -> Option<&Exit> {
        self.exits.iter().find(|e| e.direction == direction)
    }

    pub fn has_item(&self, name: &str) -> bool {
        self.items.contains_key(name)
    }
}

impl World {
    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn room(&self, name: &str) -> Option<&Room> {
        self.rooms.get(name)
    }

    pub fn rooms(&self) -> impl Iterator<Item = &Room> {
        self.rooms.values()
    }

    pub fn usages(&self) -> &[Usage] {
        &self.usages
    }

    /// The room the player stands in. The validator guarantees it exists.
    pub fn current_room(&self) -> &Room {
        &self.rooms[self.player.current_room.as_str()]
    }

    pub(crate) fn current_room_mut(&mut self) -> &mut Room {
        self.rooms
            .get_mut(self.player.current_room.as_str())
            .unwrap_or_else(|| unreachable!("player stands in a validated room"))
    }

    pub fn is_wearable(&self, name: &str) -> bool {
        self.wearables.contains(name)
    }

    /// Every container currently holding `name`.
    pub fn locate(&self, name: &str) -> Vec<ItemLocation> {
        let mut found: Vec<ItemLocation> = self
            .rooms
            .values()
            .filter(|r| r.has_item(name))
            .map(|r| ItemLocation::Room(r.name.clone()))
            .collect();

        if self.player.inventory.contains_key(name) {
            found.push(ItemLocation::Inventory);
        }

        found
    }
}
