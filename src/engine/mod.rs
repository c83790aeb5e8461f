mod autopilot;
mod command;
mod movement;
mod output;
mod pathfind;
mod render;

pub use autopilot::handle_auto;
pub use command::Command;
pub use movement::try_handle_movement;
pub use output::{Output, OutputBlock};
pub use pathfind::{route_directions, shortest_path};
pub use render::render_room;
