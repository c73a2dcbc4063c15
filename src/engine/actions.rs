use crate::world;

/// `use <item> <target>`: the item must be carried, and only the usages the
/// world defines for the current room do anything.
pub fn handle_use(world: &mut world::World, item_name: &str, target: &str) -> String {
    if !world.player.inventory.contains_key(item_name) {
        return format!("нет предмета в инвентаре - {item_name}");
    }

    let here = &world.player.current_room;
    let Some(usage) = world
        .usages
        .iter()
        .find(|u| u.item.as_str() == item_name && u.target == target && &u.room == here)
    else {
        return "не к чему применить".to_string();
    };

    let response = usage.response.clone();
    let unlocks = usage.unlocks.clone();

    match world.rooms.get_mut(unlocks.as_str()) {
        Some(room) => {
            room.locked = false;
            log::info!("{} unlocked with {}", room.name, item_name);
        }
        None => log::error!("usage of {} unlocks unknown room {}", item_name, unlocks),
    }

    response
}
