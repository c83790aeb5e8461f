use super::error::GraphError;
use super::model::{Direction, World, WorldGraph};

pub const REFERENCE_START: &str = "Entrance";
pub const REFERENCE_GOAL: &str = "Treasure Room";

const ROOMS: [(&str, &str); 7] = [
    (
        "Entrance",
        "An old wooden door creaks behind you. The hall lies ahead.",
    ),
    ("Hall", "Portraits of knights watch silently."),
    (
        "Kitchen",
        "You smell something burnt. A rusty knife lies on the counter.",
    ),
    (
        "Library",
        "Dusty books line the shelves. Something glimmers between them.",
    ),
    ("Garden", "Overgrown vines cover the walls."),
    ("Tower", "A spiral staircase winds upward."),
    (
        "Treasure Room",
        "You found the treasure chest filled with gold!",
    ),
];

// Each pair also gets the opposite exit back.
const PASSAGES: [(&str, Direction, &str); 6] = [
    ("Entrance", Direction::North, "Hall"),
    ("Hall", Direction::East, "Kitchen"),
    ("Hall", Direction::West, "Library"),
    ("Hall", Direction::North, "Garden"),
    ("Garden", Direction::Up, "Tower"),
    ("Tower", Direction::North, "Treasure Room"),
];

/// The seven-room castle the game ships with.
pub fn reference_graph() -> Result<WorldGraph, GraphError> {
    let mut graph = WorldGraph::new();
    for (name, desc) in ROOMS {
        graph.add_room(name, desc)?;
    }
    for (from, direction, to) in PASSAGES {
        graph.connect_both(from, direction, to)?;
    }
    Ok(graph)
}

pub fn reference_world() -> Result<World, GraphError> {
    Ok(World {
        name: "the Castle".to_string(),
        desc: "Find your way to the treasure.".to_string(),
        start_room: REFERENCE_START.to_string(),
        goal_room: REFERENCE_GOAL.to_string(),
        graph: reference_graph()?,
    })
}
