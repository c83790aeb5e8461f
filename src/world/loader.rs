use log::{debug, info};
use serde::Deserialize;
use std::fs;
use std::path::Path;

use super::error::LoadError;
use super::model::{Direction, World, WorldGraph};

////////////////////
/// TOML STRUCTS ///
////////////////////

#[derive(Deserialize)]
struct WorldFile {
    world: WorldHeader,
    #[serde(default)]
    room: Vec<RoomConfig>, // [[room]] blocks
}

#[derive(Deserialize)]
struct WorldHeader {
    name: String,
    start_room: String,
    goal_room: String,
    #[serde(default)]
    desc: String,
}

#[derive(Deserialize)]
struct RoomConfig {
    name: String,
    #[serde(default)]
    desc: String,

    #[serde(default)]
    exit: Vec<ExitConfig>, // [[room.exit]]
}

#[derive(Deserialize)]
struct ExitConfig {
    direction: String,
    target: String,
}

/////////////////////////////
/// TOML PARSER FUNCTIONS ///
/////////////////////////////

/// Load a world from a .toml file on disk.
pub fn load_world_from_file(path: &Path) -> Result<World, LoadError> {
    let contents = fs::read_to_string(path)?;
    let world = load_world_from_str(&contents)?;
    info!(
        "loaded world '{}' from {} ({} rooms)",
        world.name,
        path.display(),
        world.graph.len()
    );
    Ok(world)
}

pub fn load_world_from_str(contents: &str) -> Result<World, LoadError> {
    let world_file: WorldFile = toml::from_str(contents)?;
    let header = world_file.world;

    if header.name.trim().is_empty() {
        return Err(LoadError::Invalid("world.name may not be empty".to_string()));
    }
    if header.start_room.trim().is_empty() {
        return Err(LoadError::Invalid(
            "world.start_room may not be empty".to_string(),
        ));
    }
    if header.goal_room.trim().is_empty() {
        return Err(LoadError::Invalid(
            "world.goal_room may not be empty".to_string(),
        ));
    }

    // Rooms first, so exits may point forward to rooms declared later.
    let mut graph = WorldGraph::new();
    for room_cfg in &world_file.room {
        if room_cfg.name.trim().is_empty() {
            return Err(LoadError::Invalid("room.name may not be empty".to_string()));
        }
        graph.add_room(room_cfg.name.trim(), normalize_multiline_desc(&room_cfg.desc))?;
    }

    for room_cfg in &world_file.room {
        for exit in &room_cfg.exit {
            let direction: Direction = exit.direction.parse().map_err(|e| {
                LoadError::Invalid(format!("room '{}': {}", room_cfg.name.trim(), e))
            })?;
            graph.connect(room_cfg.name.trim(), direction, exit.target.trim())?;
        }
    }

    for (label, room) in [("start_room", &header.start_room), ("goal_room", &header.goal_room)] {
        if !graph.contains(room) {
            return Err(LoadError::Invalid(format!(
                "{} '{}' not found among rooms",
                label, room
            )));
        }
    }

    debug!(
        "world '{}': start '{}', goal '{}'",
        header.name, header.start_room, header.goal_room
    );

    Ok(World {
        name: header.name,
        desc: normalize_multiline_desc(&header.desc),
        start_room: header.start_room,
        goal_room: header.goal_room,
        graph,
    })
}

fn normalize_multiline_desc(raw: &str) -> String {
    let mut result = String::new();
    let mut pending_blank_lines = 0usize;

    for line in raw.lines() {
        // Indentation in TOML should not reach the player.
        let trimmed = line.trim();

        if trimmed.is_empty() {
            pending_blank_lines += 1;
            continue;
        }

        if !result.is_empty() {
            match pending_blank_lines {
                0 => result.push(' '),
                1 => result.push('\n'),
                _ => result.push_str("\n\n"),
            }
        }
        result.push_str(trimmed);
        pending_blank_lines = 0;
    }

    result
}
