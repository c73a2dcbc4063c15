use crate::engine::parser::UNKNOWN_COMMAND;
use crate::world;

/// `take <item>`: move an item from the current room into the inventory.
/// Wearable items are worn instead, and nothing fits in the inventory until
/// the backpack is on.
pub fn handle_take(world: &mut world::World, item_name: &str) -> String {
    if world.is_wearable(item_name) {
        return handle_wear(world, item_name);
    }

    if !world.current_room().has_item(item_name) {
        return "нет такого".to_string();
    }

    if !world.player.has_backpack {
        return "некуда класть".to_string();
    }

    let Some(item) = world.current_room_mut().items.remove(item_name) else {
        return "нет такого".to_string();
    };

    log::debug!("{} moved into the inventory", item.name);
    world.player.inventory.insert(item.name.clone(), item);

    format!("предмет добавлен в инвентарь: {item_name}")
}

/// `wear <item>`: only wearable items are accepted; anything else is not a
/// command the game understands.
pub fn handle_wear(world: &mut world::World, item_name: &str) -> String {
    if !world.is_wearable(item_name) {
        return UNKNOWN_COMMAND.to_string();
    }

    match world.current_room_mut().items.remove(item_name) {
        Some(item) => {
            log::debug!("{} is now worn", item.name);
            world.player.has_backpack = true;
            format!("вы надели: {}", item.name)
        }
        None => "нет такого".to_string(),
    }
}
