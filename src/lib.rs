pub mod engine;
pub mod world;

use log::{debug, info};

use engine::{Command, Output, handle_auto, render_room, try_handle_movement};
use world::{GraphError, World, WorldGraph};

pub use engine::shortest_path;
pub use world::{load_world_from_file, load_world_from_str, reference_world};

const HELP: &str = "Type a direction (north, south, east, west, up, down, or n/s/e/w/u/d) to move. \
Type 'auto' to find the shortest path to the goal, 'look' to look around, 'exit' to quit.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Playing,
    Exited,
    Won,
}

impl SessionState {
    pub fn is_over(self) -> bool {
        self != SessionState::Playing
    }
}

/// One play-through: the world plus where the player stands in it.
pub struct Session {
    graph: WorldGraph,
    current_room_id: String,
    goal_room_id: String,
    state: SessionState,
}

#[cfg(feature = "wasm")]
mod wasm_bindings {
    use super::*;
    use serde::Serialize;
    use serde_wasm_bindgen::to_value;
    use wasm_bindgen::prelude::*;

    #[derive(Serialize)]
    struct WasmStepResult {
        blocks: Vec<engine::OutputBlock>,
        quit: bool,
        won: bool,
    }

    impl WasmStepResult {
        fn new(out: Output, state: SessionState) -> Self {
            WasmStepResult {
                blocks: out.blocks,
                quit: state.is_over(),
                won: state == SessionState::Won,
            }
        }
    }

    fn to_js(e: impl std::fmt::Display) -> JsValue {
        JsValue::from_str(&e.to_string())
    }

    #[wasm_bindgen]
    pub struct WasmGame {
        session: Session,
        initialized: bool,
    }

    #[wasm_bindgen]
    impl WasmGame {
        /// Create a game from a TOML world string, or the built-in castle when empty.
        #[wasm_bindgen(constructor)]
        pub fn new(world_toml: &str) -> Result<WasmGame, JsValue> {
            let world = if world_toml.trim().is_empty() {
                reference_world().map_err(to_js)?
            } else {
                load_world_from_str(world_toml).map_err(to_js)?
            };
            Ok(WasmGame {
                session: Session::from_world(world).map_err(to_js)?,
                initialized: false,
            })
        }

        /// Return the initial render output.
        #[wasm_bindgen]
        pub fn init(&mut self) -> JsValue {
            self.initialized = true;
            let out = self.session.initialize();
            to_value(&WasmStepResult::new(out, self.session.state())).unwrap_or(JsValue::NULL)
        }

        /// Process a player command and return the resulting output blocks.
        #[wasm_bindgen]
        pub fn step(&mut self, input: &str) -> JsValue {
            if !self.initialized {
                let _ = self.init();
            }
            let out = self.session.step(input);
            to_value(&WasmStepResult::new(out, self.session.state())).unwrap_or(JsValue::NULL)
        }
    }
}

impl Session {
    pub fn new(
        graph: WorldGraph,
        start_room: impl Into<String>,
        goal_room: impl Into<String>,
    ) -> Result<Self, GraphError> {
        let start_room = start_room.into();
        let goal_room = goal_room.into();
        graph.room(&start_room)?;
        graph.room(&goal_room)?;

        Ok(Session {
            graph,
            current_room_id: start_room,
            goal_room_id: goal_room,
            state: SessionState::Playing,
        })
    }

    pub fn from_world(world: World) -> Result<Self, GraphError> {
        Session::new(world.graph, world.start_room, world.goal_room)
    }

    /// A session on the built-in castle map.
    pub fn reference() -> Result<Self, GraphError> {
        Session::from_world(reference_world()?)
    }

    pub fn graph(&self) -> &WorldGraph {
        &self.graph
    }

    pub fn current_room(&self) -> &str {
        &self.current_room_id
    }

    pub fn goal_room(&self) -> &str {
        &self.goal_room_id
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn help_text() -> &'static str {
        HELP
    }

    pub fn initialize(&mut self) -> Output {
        let mut out = Output::new();
        self.render_current(&mut out);
        out
    }

    /// Process a single line of player input.
    pub fn step(&mut self, input: &str) -> Output {
        let mut out = Output::new();

        if self.state.is_over() {
            out.say("The game is over.");
            return out;
        }

        let command = Command::parse(input);
        debug!("step in '{}': {:?}", self.current_room_id, command);

        match command {
            Command::Empty => {}
            Command::Exit => {
                out.say("Thanks for playing! Goodbye!");
                self.finish(SessionState::Exited);
            }
            Command::Look => self.render_current(&mut out),
            Command::Help => out.say(HELP),
            Command::Invalid(raw) => {
                out.say(format!(
                    "Invalid command '{}'. Try a direction, 'auto' or 'help'.",
                    raw
                ));
            }
            Command::Move(direction) => {
                match try_handle_movement(
                    &mut out,
                    &mut self.current_room_id,
                    &self.graph,
                    direction,
                ) {
                    Ok(true) => {
                        self.render_current(&mut out);
                        if self.current_room_id == self.goal_room_id {
                            out.event(format!(
                                "You found the {}! Game over!",
                                self.goal_room_id
                            ));
                            self.finish(SessionState::Won);
                        }
                    }
                    Ok(false) => {}
                    Err(e) => self.fail(&mut out, e),
                }
            }
            Command::Auto => {
                match handle_auto(
                    &mut out,
                    &mut self.current_room_id,
                    &self.graph,
                    &self.goal_room_id,
                ) {
                    Ok(true) => {
                        out.event(format!(
                            "Congratulations! You reached the {}!",
                            self.goal_room_id
                        ));
                        self.finish(SessionState::Won);
                    }
                    Ok(false) => {}
                    Err(e) => self.fail(&mut out, e),
                }
            }
        }

        out
    }

    fn render_current(&self, out: &mut Output) {
        // Session::new guarantees the start room exists and moves only follow exits.
        if let Err(e) = render_room(out, &self.graph, &self.current_room_id) {
            out.say(format!("Error: {}", e));
        }
    }

    fn fail(&mut self, out: &mut Output, e: GraphError) {
        out.say(format!("Error: {}", e));
        self.finish(SessionState::Exited);
    }

    fn finish(&mut self, state: SessionState) {
        info!("session over: {:?} in '{}'", state, self.current_room_id);
        self.state = state;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::OutputBlock;
    use crate::world::Direction;

    fn play(session: &mut Session, inputs: &[&str]) -> Vec<Output> {
        inputs.iter().map(|i| session.step(i)).collect()
    }

    #[test]
    fn starts_in_the_entrance() {
        let mut s = Session::reference().unwrap();
        let out = s.initialize();
        assert_eq!(s.current_room(), "Entrance");
        assert_eq!(
            out.blocks.first(),
            Some(&OutputBlock::Title("You are in the Entrance.".to_string()))
        );
        assert_eq!(s.state(), SessionState::Playing);
    }

    #[test]
    fn manual_walk_wins() {
        let mut s = Session::reference().unwrap();
        play(&mut s, &["north", "n", "up"]);
        assert_eq!(s.current_room(), "Tower");
        assert_eq!(s.state(), SessionState::Playing);

        let out = s.step("go north");
        assert_eq!(s.current_room(), "Treasure Room");
        assert_eq!(s.state(), SessionState::Won);
        assert!(out.text().contains("You found the Treasure Room!"));
    }

    #[test]
    fn auto_wins_from_the_start() {
        let mut s = Session::reference().unwrap();
        let out = s.step("auto");
        assert_eq!(s.state(), SessionState::Won);
        assert_eq!(s.current_room(), "Treasure Room");
        assert!(out.text().contains("Congratulations!"));
    }

    #[test]
    fn auto_in_the_goal_is_an_immediate_win() {
        let mut s = Session::new(
            world::reference_graph().unwrap(),
            "Treasure Room",
            "Treasure Room",
        )
        .unwrap();
        let out = s.step("auto");
        assert_eq!(s.state(), SessionState::Won);
        assert!(out.text().contains("Treasure Room\n"));
    }

    #[test]
    fn auto_without_a_route_keeps_playing() {
        let mut g = WorldGraph::new();
        g.add_room("Cell", "Bars everywhere.").unwrap();
        g.add_room("Yard", "Sunlight.").unwrap();
        g.connect("Yard", Direction::North, "Cell").unwrap();

        let mut s = Session::new(g, "Cell", "Yard").unwrap();
        let out = s.step("auto");
        assert_eq!(s.state(), SessionState::Playing);
        assert_eq!(s.current_room(), "Cell");
        assert!(out.text().contains("no path"));
    }

    #[test]
    fn blocked_and_invalid_moves_do_not_change_rooms() {
        let mut s = Session::reference().unwrap();
        let outs = play(&mut s, &["south", "dance"]);
        assert_eq!(s.current_room(), "Entrance");
        assert_eq!(outs[0].text(), "You can't go south from here.");
        assert!(outs[1].text().starts_with("Invalid command 'dance'"));
        assert!(s.step("").blocks.is_empty());
    }

    #[test]
    fn exit_ends_the_session() {
        let mut s = Session::reference().unwrap();
        s.step("exit");
        assert_eq!(s.state(), SessionState::Exited);

        let out = s.step("north");
        assert_eq!(s.current_room(), "Entrance");
        assert_eq!(out.text(), "The game is over.");
    }

    #[test]
    fn rejects_unknown_start_or_goal() {
        let g = world::reference_graph().unwrap();
        assert_eq!(
            Session::new(g.clone(), "Moat", "Hall").err(),
            Some(GraphError::UnknownNode("Moat".to_string()))
        );
        assert_eq!(
            Session::new(g, "Hall", "Vault").err(),
            Some(GraphError::UnknownNode("Vault".to_string()))
        );
    }
}
