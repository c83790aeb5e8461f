//! Breadth-first shortest paths over a [`WorldGraph`].
//!
//! Every exit has unit cost, so the first time BFS reaches the goal it has
//! done so along a path with the fewest possible exits. Exits are expanded
//! in the order the graph stores them (insertion order), which makes the
//! choice between equally short paths deterministic: the earlier-registered
//! exit wins.

use std::collections::{HashMap, HashSet, VecDeque};

use log::{debug, trace};

use crate::world::{Direction, GraphError, WorldGraph};

/// Shortest route from `start` to `goal`, both ends inclusive.
///
/// Returns `Ok(None)` when the goal cannot be reached; that is an ordinary
/// outcome, not an error. Unknown room names fail with
/// [`GraphError::UnknownNode`], the start being checked first.
pub fn shortest_path(
    graph: &WorldGraph,
    start: &str,
    goal: &str,
) -> Result<Option<Vec<String>>, GraphError> {
    graph.room(start)?;
    graph.room(goal)?;

    if start == goal {
        return Ok(Some(vec![start.to_string()]));
    }

    let mut frontier: VecDeque<&str> = VecDeque::from([start]);
    let mut visited: HashSet<&str> = HashSet::from([start]);
    let mut parent: HashMap<&str, &str> = HashMap::new();

    while let Some(current) = frontier.pop_front() {
        trace!("bfs: expanding '{}'", current);
        for exit in graph.exits(current)? {
            let next = exit.target.as_str();
            // Marked on enqueue so a room is never queued twice.
            if !visited.insert(next) {
                continue;
            }
            parent.insert(next, current);

            if next == goal {
                let path = rebuild(&parent, start, goal);
                debug!(
                    "bfs: '{}' -> '{}' in {} steps ({} rooms visited)",
                    start,
                    goal,
                    path.len() - 1,
                    visited.len()
                );
                return Ok(Some(path));
            }
            frontier.push_back(next);
        }
    }

    debug!(
        "bfs: '{}' unreachable from '{}' ({} rooms visited)",
        goal,
        start,
        visited.len()
    );
    Ok(None)
}

fn rebuild(parent: &HashMap<&str, &str>, start: &str, goal: &str) -> Vec<String> {
    let mut path = vec![goal.to_string()];
    let mut current = goal;
    while current != start {
        current = parent[current];
        path.push(current.to_string());
    }
    path.reverse();
    path
}

/// The exit taken at each step of `path`, paired with the room it leads to.
pub fn route_directions(
    graph: &WorldGraph,
    path: &[String],
) -> Result<Vec<(Direction, String)>, GraphError> {
    path.windows(2)
        .map(|pair| {
            let (from, to) = (&pair[0], &pair[1]);
            graph
                .exits(from)?
                .iter()
                .find(|e| &e.target == to)
                .map(|e| (e.direction, to.clone()))
                .ok_or_else(|| GraphError::UnknownNode(to.clone()))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::world::reference_graph;

    fn names(path: &[&str]) -> Vec<String> {
        path.iter().map(|s| s.to_string()).collect()
    }

    fn chain(rooms: &[&str]) -> WorldGraph {
        let mut g = WorldGraph::new();
        for r in rooms {
            g.add_room(*r, "").unwrap();
        }
        g
    }

    #[test]
    fn same_room_is_a_single_element_path() {
        let g = reference_graph().unwrap();
        for name in g.room_names() {
            assert_eq!(shortest_path(&g, name, name).unwrap(), Some(names(&[name])));
        }
    }

    #[test]
    fn finds_the_treasure() {
        let g = reference_graph().unwrap();
        let path = shortest_path(&g, "Entrance", "Treasure Room").unwrap().unwrap();
        assert_eq!(
            path,
            names(&["Entrance", "Hall", "Garden", "Tower", "Treasure Room"])
        );
    }

    #[test]
    fn unreachable_goal_is_none() {
        let mut g = chain(&["A", "B"]);
        g.connect("B", Direction::West, "A").unwrap();
        assert_eq!(shortest_path(&g, "A", "B").unwrap(), None);
        assert_eq!(shortest_path(&g, "B", "A").unwrap(), Some(names(&["B", "A"])));
    }

    #[test]
    fn unknown_rooms_are_errors() {
        let g = chain(&["A"]);
        assert_eq!(
            shortest_path(&g, "Z", "A"),
            Err(GraphError::UnknownNode("Z".to_string()))
        );
        assert_eq!(
            shortest_path(&g, "A", "Y"),
            Err(GraphError::UnknownNode("Y".to_string()))
        );
        assert_eq!(
            shortest_path(&g, "Z", "Y"),
            Err(GraphError::UnknownNode("Z".to_string()))
        );
    }

    #[test]
    fn ties_go_to_the_first_registered_exit() {
        // A -> B -> D and A -> C -> D are equally short.
        let mut g = chain(&["A", "B", "C", "D"]);
        g.connect("A", Direction::East, "C").unwrap();
        g.connect("A", Direction::North, "B").unwrap();
        g.connect("B", Direction::East, "D").unwrap();
        g.connect("C", Direction::North, "D").unwrap();
        assert_eq!(
            shortest_path(&g, "A", "D").unwrap(),
            Some(names(&["A", "C", "D"]))
        );
    }

    #[test]
    fn prefers_fewer_exits_over_earlier_ones() {
        let mut g = chain(&["A", "B", "C", "D"]);
        g.connect("A", Direction::North, "B").unwrap();
        g.connect("B", Direction::North, "C").unwrap();
        g.connect("C", Direction::North, "D").unwrap();
        g.connect("A", Direction::Up, "D").unwrap();
        assert_eq!(shortest_path(&g, "A", "D").unwrap(), Some(names(&["A", "D"])));
    }

    #[test]
    fn survives_cycles_and_self_loops() {
        let mut g = chain(&["A", "B", "C"]);
        g.connect("A", Direction::Down, "A").unwrap();
        g.connect("A", Direction::East, "B").unwrap();
        g.connect("B", Direction::West, "A").unwrap();
        g.connect("B", Direction::East, "C").unwrap();
        assert_eq!(
            shortest_path(&g, "A", "C").unwrap(),
            Some(names(&["A", "B", "C"]))
        );
    }

    #[test]
    fn directions_follow_the_path() {
        let g = reference_graph().unwrap();
        let path = shortest_path(&g, "Kitchen", "Tower").unwrap().unwrap();
        let steps = route_directions(&g, &path).unwrap();
        assert_eq!(
            steps,
            vec![
                (Direction::West, "Hall".to_string()),
                (Direction::North, "Garden".to_string()),
                (Direction::Up, "Tower".to_string()),
            ]
        );
    }

    #[test]
    fn directions_reject_broken_paths() {
        let g = reference_graph().unwrap();
        let path = names(&["Entrance", "Tower"]);
        assert_eq!(
            route_directions(&g, &path),
            Err(GraphError::UnknownNode("Tower".to_string()))
        );
        assert!(route_directions(&g, &names(&["Hall"])).unwrap().is_empty());
    }
}
