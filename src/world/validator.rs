use std::fmt;

use super::model::World;
use crate::engine::shortest_path;

#[derive(Debug, Clone, PartialEq, Eq)]
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

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// Whole-world checks beyond what graph construction already enforces.
pub fn validate_world(world: &World) -> Vec<ValidationError> {
    let mut errors: Vec<ValidationError> = Vec::new();
    let graph = &world.graph;

    if graph.is_empty() {
        errors.push(ValidationError::new("world has no rooms"));
    }

    let start_ok = graph.contains(&world.start_room);
    if !start_ok {
        errors.push(ValidationError::new(format!(
            "start_room '{}' not found among rooms",
            world.start_room
        )));
    }

    let goal_ok = graph.contains(&world.goal_room);
    if !goal_ok {
        errors.push(ValidationError::new(format!(
            "goal_room '{}' not found among rooms",
            world.goal_room
        )));
    }

    if !(start_ok && goal_ok) {
        return errors;
    }

    if let Ok(None) = shortest_path(graph, &world.start_room, &world.goal_room) {
        errors.push(ValidationError::new(format!(
            "goal_room '{}' is unreachable from start_room '{}'",
            world.goal_room, world.start_room
        )));
    }

    // A room with no way out traps the player short of the goal.
    for name in graph.room_names() {
        if name == world.goal_room {
            continue;
        }
        let reachable = matches!(
            shortest_path(graph, &world.start_room, name),
            Ok(Some(_))
        );
        if reachable && graph.exits(name).is_ok_and(|e| e.is_empty()) {
            errors.push(ValidationError::new(format!(
                "room '{}' is a dead end (no exits)",
                name
            )));
        }
    }

    errors
}
