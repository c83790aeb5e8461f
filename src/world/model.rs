use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use log::debug;
use thiserror::Error;

use super::error::GraphError;

///////////////////////////////
/// GRAPH STRUCTS AND ENUMS ///
///////////////////////////////

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    North,
    South,
    East,
    West,
    Up,
    Down,
}

impl Direction {
    pub const ALL: [Direction; 6] = [
        Direction::North,
        Direction::South,
        Direction::East,
        Direction::West,
        Direction::Up,
        Direction::Down,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Direction::North => "north",
            Direction::South => "south",
            Direction::East => "east",
            Direction::West => "west",
            Direction::Up => "up",
            Direction::Down => "down",
        }
    }

    pub fn opposite(self) -> Direction {
        match self {
            Direction::North => Direction::South,
            Direction::South => Direction::North,
            Direction::East => Direction::West,
            Direction::West => Direction::East,
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown direction: {0}")]
pub struct ParseDirectionError(pub String);

impl FromStr for Direction {
    type Err = ParseDirectionError;

    /// Accepts the full word or its first letter, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim();
        Direction::ALL
            .into_iter()
            .find(|d| {
                let word = d.as_str();
                token.eq_ignore_ascii_case(word)
                    || (token.len() == 1 && token.eq_ignore_ascii_case(&word[..1]))
            })
            .ok_or_else(|| ParseDirectionError(token.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Exit {
    pub direction: Direction,
    pub target: String,
}

#[derive(Debug, Clone)]
pub struct Room {
    pub name: String,
    pub desc: String,
    /// Kept in insertion order; at most one exit per direction.
    pub exits: Vec<Exit>,
}

impl Room {
    fn new(name: impl Into<String>, desc: impl Into<String>) -> Self {
        Room {
            name: name.into(),
            desc: desc.into(),
            exits: Vec::new(),
        }
    }

    pub fn exit(&self, direction: Direction) -> Option<&Exit> {
        self.exits.iter().find(|e| e.direction == direction)
    }
}

/// Directed graph of rooms. Owns every room; exits refer to their
/// destination by name.
#[derive(Debug, Clone, Default)]
pub struct WorldGraph {
    rooms: HashMap<String, Room>,
}

impl WorldGraph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_room(
        &mut self,
        name: impl Into<String>,
        desc: impl Into<String>,
    ) -> Result<(), GraphError> {
        let name = name.into();
        if self.rooms.contains_key(&name) {
            return Err(GraphError::DuplicateNode(name));
        }
        debug!("adding room '{}'", name);
        self.rooms.insert(name.clone(), Room::new(name, desc));
        Ok(())
    }

    /// Add a directed exit. Both endpoints are checked before anything is
    /// written. An existing exit in the same direction is retargeted in place.
    pub fn connect(
        &mut self,
        from: &str,
        direction: Direction,
        to: &str,
    ) -> Result<(), GraphError> {
        if !self.rooms.contains_key(to) {
            return Err(GraphError::UnknownNode(to.to_string()));
        }
        let room = self
            .rooms
            .get_mut(from)
            .ok_or_else(|| GraphError::UnknownNode(from.to_string()))?;

        debug!("connecting '{}' {} -> '{}'", from, direction, to);
        match room.exits.iter_mut().find(|e| e.direction == direction) {
            Some(existing) => existing.target = to.to_string(),
            None => room.exits.push(Exit {
                direction,
                target: to.to_string(),
            }),
        }
        Ok(())
    }

    /// `a -direction-> b` plus the opposite exit back; both or neither.
    pub fn connect_both(
        &mut self,
        a: &str,
        direction: Direction,
        b: &str,
    ) -> Result<(), GraphError> {
        self.room(a)?;
        self.room(b)?;
        self.connect(a, direction, b)?;
        self.connect(b, direction.opposite(), a)
    }

    pub fn room(&self, name: &str) -> Result<&Room, GraphError> {
        self.rooms
            .get(name)
            .ok_or_else(|| GraphError::UnknownNode(name.to_string()))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.rooms.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.rooms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }

    /// Room names in sorted order.
    pub fn room_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.rooms.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn exits(&self, name: &str) -> Result<&[Exit], GraphError> {
        self.room(name).map(|r| r.exits.as_slice())
    }

    pub fn exit_target(
        &self,
        name: &str,
        direction: Direction,
    ) -> Result<Option<&str>, GraphError> {
        Ok(self.room(name)?.exit(direction).map(|e| e.target.as_str()))
    }

    pub fn describe(&self, name: &str) -> Result<String, GraphError> {
        let room = self.room(name)?;

        let mut lines = vec![format!("You are in the {}.", room.name)];
        if !room.desc.trim().is_empty() {
            lines.push(room.desc.trim().to_string());
        }
        lines.push(format_exits(&room.exits));
        Ok(lines.join("\n"))
    }
}

pub(crate) fn format_exits(exits: &[Exit]) -> String {
    if exits.is_empty() {
        return "No exits from here.".to_string();
    }
    let list = exits
        .iter()
        .map(|e| format!("{} -> {}", e.direction, e.target))
        .collect::<Vec<_>>()
        .join(", ");
    format!("Exits: {}", list)
}

/// A graph together with the session parameters a world file supplies.
#[derive(Debug, Clone)]
pub struct World {
    pub name: String,
    pub desc: String,
    pub start_room: String,
    pub goal_room: String,
    pub graph: WorldGraph,
}
