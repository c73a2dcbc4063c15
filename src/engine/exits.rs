use crate::world;

/// Lead-in before the exit list in every room description.
pub const EXITS_PREFIX: &str = "можно пройти - ";

/// Comma-joined exit labels of `room`: its fixed order when one is given,
/// otherwise alphabetical.
pub fn format_exits(room: &world::Room) -> String {
    if let Some(order) = &room.exit_order {
        return order.join(", ");
    }

    let mut labels: Vec<&str> = room.exits.iter().map(|e| e.direction.as_str()).collect();
    labels.sort_unstable();
    labels.join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::world::{World, load_world_from_str};
    use test_log::test;

    #[test]
    fn corridor_keeps_its_fixed_order() {
        let world = World::home().unwrap();
        let corridor = world.room("коридор").unwrap();
        for _ in 0..5 {
            assert_eq!(format_exits(corridor), "кухня, комната, улица");
        }
    }

    #[test]
    fn single_exit_rooms() {
        let world = World::home().unwrap();
        assert_eq!(format_exits(world.room("кухня").unwrap()), "коридор");
        assert_eq!(format_exits(world.room("комната").unwrap()), "коридор");
        assert_eq!(format_exits(world.room("улица").unwrap()), "домой");
    }

    #[test]
    fn unordered_rooms_sort_alphabetically() {
        let world = load_world_from_str(
            r#"
            [world]
            id = "w"
            name = "w"
            start_room = "hub"

            [[room]]
            name = "hub"

            [[room.exit]]
            direction = "west"
            target = "hub"

            [[room.exit]]
            direction = "east"
            target = "hub"

            [[room.exit]]
            direction = "north"
            target = "hub"
            "#,
        )
        .unwrap();

        assert_eq!(
            format_exits(world.room("hub").unwrap()),
            "east, north, west"
        );
    }
}
