use crate::engine::output::Output;
use crate::world::{GraphError, WorldGraph, format_exits};

/// Push a room's title, description and exits onto `out`.
///
/// Same content as [`WorldGraph::describe`], split into display blocks.
pub fn render_room(out: &mut Output, graph: &WorldGraph, name: &str) -> Result<(), GraphError> {
    let room = graph.room(name)?;

    out.title(format!("You are in the {}.", room.name));
    out.say(room.desc.trim());
    out.set_exits(format_exits(&room.exits));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::OutputBlock;
    use crate::world::reference_graph;

    #[test]
    fn renders_the_entrance() {
        let g = reference_graph().unwrap();
        let mut out = Output::new();
        render_room(&mut out, &g, "Entrance").unwrap();
        assert_eq!(
            out.blocks,
            vec![
                OutputBlock::Title("You are in the Entrance.".to_string()),
                OutputBlock::Text(
                    "An old wooden door creaks behind you. The hall lies ahead.".to_string()
                ),
                OutputBlock::Exits("Exits: north -> Hall".to_string()),
            ]
        );
        assert_eq!(out.text(), g.describe("Entrance").unwrap());
    }

    #[test]
    fn unknown_room_renders_nothing() {
        let g = reference_graph().unwrap();
        let mut out = Output::new();
        assert!(render_room(&mut out, &g, "Dungeon").is_err());
        assert!(out.blocks.is_empty());
    }
}
