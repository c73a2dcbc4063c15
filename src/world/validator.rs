use std::collections::HashSet;

use thiserror::Error;

use super::model::{RoomKind, World};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ValidationError {
    pub message: String,
}

impl ValidationError {
    fn new(msg: impl Into<String>) -> Self {
        ValidationError {
            message: msg.into(),
        }
    }
}

/// Check the structural invariants the engine relies on.
pub fn validate_world(world: &World) -> Vec<ValidationError> {
    let mut errors: Vec<ValidationError> = Vec::new();

    if world.rooms.is_empty() {
        errors.push(ValidationError::new("world has no rooms"));
    }

    if !world.rooms.contains_key(&world.player.current_room) {
        errors.push(ValidationError::new(format!(
            "start_room '{}' not found among rooms",
            world.player.current_room
        )));
    }

    let all_items: HashSet<&str> = world
        .rooms
        .values()
        .flat_map(|r| r.items.keys())
        .chain(world.player.inventory.keys())
        .map(|name| name.as_str())
        .collect();

    for (room_name, room) in &world.rooms {
        let mut labels: HashSet<&str> = HashSet::new();
        for exit in &room.exits {
            if !labels.insert(exit.direction.as_str()) {
                errors.push(ValidationError::new(format!(
                    "room '{}' has more than one exit labelled '{}'",
                    room_name, exit.direction
                )));
            }
            if !world.rooms.contains_key(&exit.target) {
                errors.push(ValidationError::new(format!(
                    "room '{}' exit '{}' targets missing room '{}'",
                    room_name, exit.direction, exit.target
                )));
            }
        }

        if let Some(order) = &room.exit_order {
            let listed: HashSet<&str> = order.iter().map(String::as_str).collect();
            if listed != labels || listed.len() != order.len() {
                errors.push(ValidationError::new(format!(
                    "room '{}' exit_order must list each exit label exactly once",
                    room_name
                )));
            }
        }

        if room.locked && room.lock_message.is_empty() {
            errors.push(ValidationError::new(format!(
                "locked room '{}' has no lock_message",
                room_name
            )));
        }

        match &room.kind {
            RoomKind::Plain => {}
            RoomKind::Kitchen { table, .. } => {
                if table.trim().is_empty() {
                    errors.push(ValidationError::new(format!(
                        "kitchen '{}' has an empty table text",
                        room_name
                    )));
                }
            }
            RoomKind::Bedroom { table, chair, .. } => {
                for name in table.iter().chain(std::iter::once(chair)) {
                    if !all_items.contains(name.as_str()) {
                        errors.push(ValidationError::new(format!(
                            "bedroom '{}' shows missing item '{}'",
                            room_name, name
                        )));
                    }
                }
            }
        }
    }

    for usage in &world.usages {
        if !all_items.contains(usage.item.as_str()) {
            errors.push(ValidationError::new(format!(
                "usage of '{}' on '{}' references a missing item",
                usage.item, usage.target
            )));
        }
        if !world.rooms.contains_key(&usage.room) {
            errors.push(ValidationError::new(format!(
                "usage of '{}' on '{}' happens in missing room '{}'",
                usage.item, usage.target, usage.room
            )));
        }
        if !world.rooms.contains_key(&usage.unlocks) {
            errors.push(ValidationError::new(format!(
                "usage of '{}' on '{}' unlocks missing room '{}'",
                usage.item, usage.target, usage.unlocks
            )));
        }
    }

    errors
}
