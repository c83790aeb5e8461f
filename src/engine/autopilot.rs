use log::info;

use crate::engine::output::Output;
use crate::engine::pathfind::{route_directions, shortest_path};
use crate::world::{GraphError, WorldGraph};

/// Find the shortest route to `goal`, narrate it and walk it.
///
/// Returns `true` once the player stands in the goal room, including when
/// they were already there. An unreachable goal leaves the player in place.
pub fn handle_auto(
    out: &mut Output,
    current_room_id: &mut String,
    graph: &WorldGraph,
    goal: &str,
) -> Result<bool, GraphError> {
    let Some(path) = shortest_path(graph, current_room_id, goal)? else {
        out.say(format!(
            "There is no path from the {} to the {}.",
            current_room_id, goal
        ));
        return Ok(false);
    };

    out.say(format!("Shortest path to the {}:", goal));
    out.say(path.join(" -> "));

    if path.len() == 1 {
        out.event(format!("You are already in the {}.", goal));
        return Ok(true);
    }

    out.say("Following the path automatically...");
    for (direction, room) in route_directions(graph, &path)? {
        out.event(format!("Moving {} to the {}...", direction, room));
    }
    info!(
        "auto: walked {} steps from '{}' to '{}'",
        path.len() - 1,
        current_room_id,
        goal
    );
    *current_room_id = goal.to_string();
    Ok(true)
}
