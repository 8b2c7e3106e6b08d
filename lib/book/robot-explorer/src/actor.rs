/*
 * Copyright (C) 2023 Asim Ihsan
 * SPDX-License-Identifier: AGPL-3.0-only
 *
 * This program is free software: you can redistribute it and/or modify it under
 * the terms of the GNU Affero General Public License as published by the Free
 * Software Foundation, version 3.
 *
 * This program is distributed in the hope that it will be useful, but WITHOUT ANY
 * WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR A
 * PARTICULAR PURPOSE. See the GNU Affero General Public License for more details.
 *
 * You should have received a copy of the GNU Affero General Public License along
 * with this program. If not, see <https://www.gnu.org/licenses/>
 */

use crate::robot::Robot;
use crate::room::{describe, Room, RoomKey, Rooms};

/// The occupant of a room. Every room holds exactly one actor; when an actor changes (food gets
/// eaten) the room gets a new actor rather than the old one being mutated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Actor {
    /// Outside the maze proper. Blocks movement.
    Void,
    Wall,
    Empty,
    /// Eaten on entry, leaving an Empty room behind.
    Food,
    EndGame,
    /// Only appears while parsing; the stage replaces it once it knows where the robot starts.
    Robot,
    Teleport(Teleport),
}

/// One end of a teleport pair. Both ends share the same lowercase letter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Teleport {
    pub symbol: char,
    pub target: Option<RoomKey>,
}

impl Actor {
    pub fn kind(&self) -> ActorKind {
        match self {
            Actor::Void => ActorKind::Void,
            Actor::Wall => ActorKind::Wall,
            Actor::Empty => ActorKind::Empty,
            Actor::Food => ActorKind::Food,
            Actor::EndGame => ActorKind::EndGame,
            Actor::Robot => ActorKind::Robot,
            Actor::Teleport(_) => ActorKind::Teleport,
        }
    }

    pub fn symbol(&self) -> char {
        match self {
            Actor::Teleport(teleport) => teleport.symbol,
            _ => self.kind().symbol(),
        }
    }

    pub fn name(&self) -> &'static str {
        self.kind().name()
    }

    /// The room this actor belongs to, given the key of the room holding it. Void is shared by
    /// every cell outside the maze proper and belongs to no room.
    pub fn room_of(&self, holder: RoomKey) -> Option<RoomKey> {
        match self {
            Actor::Void => None,
            _ => Some(holder),
        }
    }
}

/// The variant of an actor without any per-room state. Used as a prototype when parsing maze text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActorKind {
    Void,
    Wall,
    Food,
    Empty,
    EndGame,
    Robot,
    Teleport,
}

impl ActorKind {
    /// Order in which each maze character is offered to the variants. The first match wins.
    pub const PROTOTYPES: [ActorKind; 7] = [
        ActorKind::Void,
        ActorKind::Wall,
        ActorKind::Food,
        ActorKind::Empty,
        ActorKind::EndGame,
        ActorKind::Robot,
        ActorKind::Teleport,
    ];

    /// Designated symbol. Teleports are really any lowercase letter, 'T' only stands in for them.
    pub fn symbol(self) -> char {
        match self {
            ActorKind::Void => '~',
            ActorKind::Wall => '#',
            ActorKind::Food => '.',
            ActorKind::Empty => '_',
            ActorKind::EndGame => '!',
            ActorKind::Robot => 'R',
            ActorKind::Teleport => 'T',
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            ActorKind::Void => "Void",
            ActorKind::Wall => "Wall",
            ActorKind::Food => "Food",
            ActorKind::Empty => "Empty",
            ActorKind::EndGame => "EndGame",
            ActorKind::Robot => "Robot",
            ActorKind::Teleport => "Teleport",
        }
    }

    pub fn matches(self, ch: char) -> bool {
        match self {
            ActorKind::Teleport => ch.is_ascii_lowercase(),
            _ => ch == self.symbol(),
        }
    }

    fn make_actor(self, ch: char) -> Actor {
        match self {
            ActorKind::Void => Actor::Void,
            ActorKind::Wall => Actor::Wall,
            ActorKind::Food => Actor::Food,
            ActorKind::Empty => Actor::Empty,
            ActorKind::EndGame => Actor::EndGame,
            ActorKind::Robot => Actor::Robot,
            // paired up later, once every teleport in the maze is known
            ActorKind::Teleport => Actor::Teleport(Teleport {
                symbol: ch,
                target: None,
            }),
        }
    }

    /// Match `ch` against this variant. On a match, returns a room at (row, col) occupied by a new
    /// actor of this variant.
    pub fn create(self, ch: char, row: i32, col: i32) -> Parsed {
        if self.matches(ch) {
            Parsed::Success(Room::new(row, col, self.make_actor(ch)))
        } else {
            Parsed::Fail
        }
    }
}

/// Outcome of offering a maze character to one actor variant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Parsed {
    Success(Room),
    Fail,
}

impl From<Parsed> for Option<Room> {
    fn from(parsed: Parsed) -> Self {
        match parsed {
            Parsed::Success(room) => Some(room),
            Parsed::Fail => None,
        }
    }
}

/// The robot tries to enter `entered`. The actor there decides which room the robot ends up in,
/// possibly changing itself or the robot along the way.
///
/// Panics if `entered` holds another robot: there is only ever one robot on a stage, and it never
/// stays behind as an occupant.
pub fn interact(rooms: &mut Rooms, entered: RoomKey, robot: &mut Robot) -> RoomKey {
    let actor = rooms[entered].actor;
    match actor {
        Actor::Void | Actor::Wall => robot.room,
        Actor::Empty => entered,
        Actor::Food => {
            robot.energy += 1;
            rooms[entered].actor = Actor::Empty;
            entered
        }
        // Absorbing: every entry produces a fresh terminal room with no doors out.
        Actor::EndGame => {
            let (row, col) = (rooms[entered].row, rooms[entered].col);
            rooms.insert(Room::new(row, col, Actor::EndGame))
        }
        Actor::Teleport(Teleport { target, .. }) => target.unwrap_or(robot.room),
        Actor::Robot => panic!(
            "robot cannot enter {}, it is occupied by another robot",
            describe(rooms, entered)
        ),
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;
    use crate::room::Doors;

    fn two_rooms(target: Actor) -> (Rooms, RoomKey, Robot) {
        let mut rooms = Rooms::with_key();
        let start = rooms.insert(Room::new(0, 0, Actor::Empty));
        let next = rooms.insert(Room::new(0, 1, target));
        (rooms, next, Robot::new(start))
    }

    #[test]
    fn test_create_wall() {
        assert_eq!(
            ActorKind::Wall.create('#', 2, 3),
            Parsed::Success(Room::new(2, 3, Actor::Wall))
        );
    }

    #[test]
    fn test_create_food() {
        assert_eq!(
            ActorKind::Food.create('.', 0, 4),
            Parsed::Success(Room::new(0, 4, Actor::Food))
        );
    }

    #[test]
    fn test_create_teleport_keeps_letter() {
        let parsed = ActorKind::Teleport.create('q', 1, 1);
        let room: Option<Room> = parsed.into();
        let room = room.expect("lowercase letter should parse as teleport");
        assert_eq!(
            room.actor,
            Actor::Teleport(Teleport {
                symbol: 'q',
                target: None
            })
        );
        assert_eq!(room.actor.symbol(), 'q');
    }

    #[test]
    fn test_teleport_does_not_match_uppercase() {
        assert_eq!(ActorKind::Teleport.create('T', 0, 0), Parsed::Fail);
        assert_eq!(ActorKind::Teleport.create('R', 0, 0), Parsed::Fail);
    }

    #[test]
    fn test_symbols_round_trip_through_create() {
        for kind in ActorKind::PROTOTYPES {
            if kind == ActorKind::Teleport {
                continue;
            }
            let parsed = kind.create(kind.symbol(), 0, 0);
            let room: Option<Room> = parsed.into();
            assert_eq!(room.map(|r| r.actor.kind()), Some(kind), "kind: {:?}", kind);
        }
    }

    #[test]
    fn test_void_belongs_to_no_room() {
        let mut rooms = Rooms::with_key();
        let key = rooms.insert(Room::new(0, 0, Actor::Void));
        assert_eq!(rooms[key].actor.room_of(key), None);
    }

    #[test]
    fn test_other_actors_belong_to_their_room() {
        let mut rooms = Rooms::with_key();
        let actors = [
            Actor::Wall,
            Actor::Empty,
            Actor::Food,
            Actor::EndGame,
            Actor::Robot,
            Actor::Teleport(Teleport {
                symbol: 'a',
                target: None,
            }),
        ];
        for actor in actors {
            let key = rooms.insert(Room::new(0, 0, actor));
            assert_eq!(actor.room_of(key), Some(key), "actor: {:?}", actor);
        }
    }

    #[test]
    fn test_wall_blocks() {
        let (mut rooms, wall, mut robot) = two_rooms(Actor::Wall);
        let start = robot.room;
        assert_eq!(interact(&mut rooms, wall, &mut robot), start);
        assert_eq!(rooms[wall].actor, Actor::Wall);
        assert_eq!(robot.energy, 0);
    }

    #[test]
    fn test_void_blocks() {
        let (mut rooms, void, mut robot) = two_rooms(Actor::Void);
        let start = robot.room;
        assert_eq!(interact(&mut rooms, void, &mut robot), start);
        assert_eq!(rooms[void].actor, Actor::Void);
    }

    #[test]
    fn test_empty_lets_robot_in() {
        let (mut rooms, empty, mut robot) = two_rooms(Actor::Empty);
        assert_eq!(interact(&mut rooms, empty, &mut robot), empty);
        assert_eq!(rooms[empty].actor, Actor::Empty);
    }

    #[test]
    fn test_food_is_eaten_once() {
        let (mut rooms, food, mut robot) = two_rooms(Actor::Food);
        assert_eq!(interact(&mut rooms, food, &mut robot), food);
        assert_eq!(robot.energy, 1);
        assert_eq!(rooms[food].actor, Actor::Empty);

        // coming back finds an empty room
        assert_eq!(interact(&mut rooms, food, &mut robot), food);
        assert_eq!(robot.energy, 1);
        assert_eq!(rooms[food].actor, Actor::Empty);
    }

    #[test]
    fn test_end_game_is_absorbing() {
        let (mut rooms, end, mut robot) = two_rooms(Actor::EndGame);
        let first = interact(&mut rooms, end, &mut robot);
        assert_ne!(first, end);
        assert_eq!(rooms[first].actor, Actor::EndGame);
        assert_eq!((rooms[first].row, rooms[first].col), (0, 1));
        assert_eq!(rooms[first].doors, Doors::default());

        robot.room = first;
        let second = interact(&mut rooms, first, &mut robot);
        assert_eq!(rooms[second].actor, Actor::EndGame);
        assert_eq!(rooms[end].actor, Actor::EndGame);
    }

    #[test]
    fn test_teleport_goes_to_target() {
        let mut rooms = Rooms::with_key();
        let start = rooms.insert(Room::new(0, 0, Actor::Empty));
        let far = rooms.insert(Room::new(5, 5, Actor::Empty));
        let teleport = rooms.insert(Room::new(
            0,
            1,
            Actor::Teleport(Teleport {
                symbol: 'a',
                target: Some(far),
            }),
        ));
        let mut robot = Robot::new(start);
        assert_eq!(interact(&mut rooms, teleport, &mut robot), far);
    }

    #[test]
    fn test_teleport_without_target_blocks() {
        let (mut rooms, teleport, mut robot) = two_rooms(Actor::Teleport(Teleport {
            symbol: 'z',
            target: None,
        }));
        let start = robot.room;
        assert_eq!(interact(&mut rooms, teleport, &mut robot), start);
    }

    #[test]
    #[should_panic(expected = "occupied by another robot")]
    fn test_robot_into_robot_panics() {
        let (mut rooms, other, mut robot) = two_rooms(Actor::Robot);
        interact(&mut rooms, other, &mut robot);
    }

    fn symbol_other_than(kind: ActorKind) -> impl Strategy<Value = char> {
        any::<char>().prop_filter("must not be the designated symbol", move |ch| {
            !kind.matches(*ch)
        })
    }

    proptest! {
        #[test]
        fn test_wall_fails_on_any_other_symbol(
            ch in symbol_other_than(ActorKind::Wall),
            row in -50..50i32,
            col in -50..50i32,
        ) {
            prop_assert_eq!(ActorKind::Wall.create(ch, row, col), Parsed::Fail);
        }

        #[test]
        fn test_food_fails_on_any_other_symbol(
            ch in symbol_other_than(ActorKind::Food),
            row in -50..50i32,
            col in -50..50i32,
        ) {
            prop_assert_eq!(ActorKind::Food.create(ch, row, col), Parsed::Fail);
        }

        #[test]
        fn test_every_lowercase_letter_is_a_teleport(ch in proptest::char::range('a', 'z')) {
            let room: Option<Room> = ActorKind::Teleport.create(ch, 0, 0).into();
            prop_assert!(room.is_some());
        }
    }
}
