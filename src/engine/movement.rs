use log::debug;

use crate::engine::output::Output;
use crate::world::{Direction, GraphError, WorldGraph};

/// Follow the exit in `direction` from `current_room_id`, if there is one.
/// Returns whether the player moved.
pub fn try_handle_movement(
    out: &mut Output,
    current_room_id: &mut String,
    graph: &WorldGraph,
    direction: Direction,
) -> Result<bool, GraphError> {
    match graph.exit_target(current_room_id, direction)? {
        Some(target) => {
            debug!("move: '{}' {} -> '{}'", current_room_id, direction, target);
            out.say(format!("You go {}.", direction));
            *current_room_id = target.to_string();
            Ok(true)
        }
        None => {
            out.say(format!("You can't go {} from here.", direction));
            Ok(false)
        }
    }
}
