mod error;
mod loader;
mod model;
mod reference;
mod validator;

pub use error::{GraphError, LoadError};
pub use loader::{load_world_from_file, load_world_from_str};
pub use model::{Direction, Exit, ParseDirectionError, Room, World, WorldGraph};
pub use reference::{REFERENCE_GOAL, REFERENCE_START, reference_graph, reference_world};
pub use validator::{ValidationError, validate_world};

pub(crate) use model::format_exits;
