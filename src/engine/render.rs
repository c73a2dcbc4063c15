use crate::engine::exits::{EXITS_PREFIX, format_exits};
use crate::world;

/// `look`: describe the room the player is standing in.
pub fn handle_look(world: &world::World) -> String {
    render_room(world.current_room(), world.player())
}

pub fn render_room(room: &world::Room, player: &world::Player) -> String {
    use world::RoomKind;

    let exits = format_exits(room);

    match &room.kind {
        RoomKind::Kitchen {
            table,
            reminder_unpacked,
            reminder_packed,
        } => {
            let reminder = if player.has_backpack {
                reminder_packed
            } else {
                reminder_unpacked
            };
            format!("{table}{reminder} {EXITS_PREFIX}{exits}")
        }
        RoomKind::Bedroom {
            table,
            chair,
            empty,
        } => {
            let on_table: Vec<&str> = table
                .iter()
                .filter(|name| room.has_item(name.as_str()))
                .map(|name| name.as_str())
                .collect();
            let on_chair = room.has_item(chair.as_str());

            let mut desc = String::new();
            if !on_table.is_empty() {
                desc.push_str("на столе: ");
                desc.push_str(&on_table.join(", "));
            }
            if on_chair {
                if !on_table.is_empty() {
                    desc.push_str(", ");
                }
                desc.push_str("на стуле: ");
                desc.push_str(chair.as_str());
            }
            // only when both the table and the chair are bare
            if on_table.is_empty() && !on_chair {
                desc.push_str(empty);
            }

            format!("{desc}. {EXITS_PREFIX}{exits}")
        }
        RoomKind::Plain => render_arrival_text(room, &exits),
    }
}

/// Static description followed by the exit list.
pub(crate) fn render_arrival_text(room: &world::Room, exits: &str) -> String {
    format!("{} {EXITS_PREFIX}{exits}", room.desc)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::world::World;
    use test_log::test;

    fn home() -> World {
        World::home().unwrap()
    }

    #[test]
    fn kitchen_reminds_to_pack() {
        let world = home();
        assert_eq!(
            handle_look(&world),
            "ты находишься на кухне, на столе: чай, надо собрать рюкзак и идти в универ. можно пройти - коридор"
        );
    }

    #[test]
    fn kitchen_after_packing() {
        let mut world = home();
        world.player.has_backpack = true;
        assert_eq!(
            handle_look(&world),
            "ты находишься на кухне, на столе: чай, надо идти в универ. можно пройти - коридор"
        );
    }

    #[test]
    fn bedroom_in_every_state() {
        let mut world = home();
        world.player.current_room = "комната".into();

        assert_eq!(
            handle_look(&world),
            "на столе: ключи, конспекты, на стуле: рюкзак. можно пройти - коридор"
        );

        world.current_room_mut().items.remove("ключи");
        assert_eq!(
            handle_look(&world),
            "на столе: конспекты, на стуле: рюкзак. можно пройти - коридор"
        );

        world.current_room_mut().items.remove("конспекты");
        assert_eq!(
            handle_look(&world),
            "на стуле: рюкзак. можно пройти - коридор"
        );

        world.current_room_mut().items.remove("рюкзак");
        assert_eq!(handle_look(&world), "пустая комната. можно пройти - коридор");
    }

    #[test]
    fn bedroom_without_backpack() {
        let mut world = home();
        world.player.current_room = "комната".into();
        world.current_room_mut().items.remove("рюкзак");

        assert_eq!(
            handle_look(&world),
            "на столе: ключи, конспекты. можно пройти - коридор"
        );
    }

    #[test]
    fn plain_rooms_use_their_description() {
        let mut world = home();
        world.player.current_room = "коридор".into();
        assert_eq!(
            handle_look(&world),
            "ничего интересного. можно пройти - кухня, комната, улица"
        );

        world.player.current_room = "улица".into();
        assert_eq!(handle_look(&world), "на улице весна. можно пройти - домой");
    }
}
