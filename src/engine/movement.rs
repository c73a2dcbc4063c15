use crate::engine::exits::format_exits;
use crate::engine::render::{render_arrival_text, render_room};
use crate::world;

/// `go <direction>`: follow an exit of the current room unless the room
/// behind it is locked.
pub fn handle_go(world: &mut world::World, direction: &str) -> String {
    let current = world.current_room();

    let Some(exit) = current.exit(direction) else {
        return format!("нет пути в {direction}");
    };

    let Some(target) = world.room(exit.target.as_str()) else {
        log::error!(
            "exit '{}' of {} leads to unknown room {}",
            direction,
            current.name,
            exit.target
        );
        return format!("нет пути в {direction}");
    };

    if target.locked {
        log::debug!("{} is locked", target.name);
        return target.lock_message.clone();
    }

    let target_name = target.name.clone();
    log::info!("player moves {} -> {}", current.name, target_name);
    world.player.current_room = target_name;

    arrive(world)
}

/// Greeting for the room just entered.
fn arrive(world: &world::World) -> String {
    let room = world.current_room();
    if room.desc.is_empty() {
        return render_room(room, world.player());
    }
    render_arrival_text(room, &format_exits(room))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::world::{World, load_world_from_str};
    use test_log::test;

    #[test]
    fn walking_around_the_flat() {
        let mut world = World::home().unwrap();

        assert_eq!(
            handle_go(&mut world, "коридор"),
            "ничего интересного. можно пройти - кухня, комната, улица"
        );
        assert_eq!(
            handle_go(&mut world, "комната"),
            "ты в своей комнате. можно пройти - коридор"
        );
        handle_go(&mut world, "коридор");
        assert_eq!(
            handle_go(&mut world, "кухня"),
            "кухня, ничего интересного. можно пройти - коридор"
        );
        assert_eq!(world.player().current_room.as_str(), "кухня");
    }

    #[test]
    fn unknown_direction_keeps_player_in_place() {
        let mut world = World::home().unwrap();
        assert_eq!(handle_go(&mut world, "улица"), "нет пути в улица");
        assert_eq!(handle_go(&mut world, ""), "нет пути в ");
        assert_eq!(world.player().current_room.as_str(), "кухня");
    }

    #[test]
    fn locked_room_refuses_entry() {
        let mut world = World::home().unwrap();
        handle_go(&mut world, "коридор");

        assert_eq!(handle_go(&mut world, "улица"), "дверь закрыта");
        assert_eq!(world.player().current_room.as_str(), "коридор");

        world.rooms.get_mut("улица").unwrap().locked = false;
        assert_eq!(
            handle_go(&mut world, "улица"),
            "на улице весна. можно пройти - домой"
        );
        assert_eq!(
            handle_go(&mut world, "домой"),
            "ничего интересного. можно пройти - кухня, комната, улица"
        );
    }

    #[test]
    fn rooms_without_description_fall_back_to_look() {
        let mut world = load_world_from_str(
            r#"
            [world]
            id = "w"
            name = "w"
            start_room = "hall"

            [[room]]
            name = "hall"
            desc = "a hall."

            [[room.exit]]
            direction = "in"
            target = "den"

            [[room]]
            name = "den"

            [room.look]
            kind = "bedroom"
            table = ["pen"]
            chair = "coat"
            empty = "bare"

            [[room.exit]]
            direction = "out"
            target = "hall"

            [[item]]
            name = "pen"
            start_location = "room:den"

            [[item]]
            name = "coat"
            start_location = "room:den"
            wearable = true
            "#,
        )
        .unwrap();

        assert_eq!(
            handle_go(&mut world, "in"),
            "на столе: pen, на стуле: coat. можно пройти - out"
        );
    }
}
