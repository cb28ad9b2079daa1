use crate::domain::target::Target;
use petgraph::graph::{DiGraph, NodeIndex};
use std::collections::{HashMap, HashSet, VecDeque};

/// Declared build graph — the core data structure.
///
/// Nodes are targets; edges are declared dependency relationships. The graph
/// is guaranteed acyclic once the loader has validated it. Declaration order
/// of deps lives on [`Target::deps`]; the petgraph edges exist for
/// reachability and cycle walks.
#[derive(Debug)]
pub struct BuildGraph {
    pub graph: DiGraph<Target, ()>,

    /// Mapping from target name to node index.
    pub name_to_node: HashMap<String, NodeIndex>,

    /// Mapping from owned file path (relative, `/`-separated) to the owning
    /// target. Populated by the loader; exactly one owner per file.
    pub file_owner: HashMap<String, NodeIndex>,
}

impl BuildGraph {
    pub fn new() -> Self {
        Self {
            graph: DiGraph::new(),
            name_to_node: HashMap::new(),
            file_owner: HashMap::new(),
        }
    }

    pub fn add_target(&mut self, target: Target) -> NodeIndex {
        let name = target.name.clone();
        let idx = self.graph.add_node(target);
        self.name_to_node.insert(name, idx);
        idx
    }

    pub fn add_edge(&mut self, from: NodeIndex, to: NodeIndex) {
        self.graph.add_edge(from, to, ());
    }

    pub fn get_target_by_name(&self, name: &str) -> Option<NodeIndex> {
        self.name_to_node.get(name).copied()
    }

    pub fn target(&self, idx: NodeIndex) -> &Target {
        &self.graph[idx]
    }

    /// Owning target for a scanned file path, if any target claims it.
    pub fn owner_of(&self, path: &str) -> Option<NodeIndex> {
        self.file_owner.get(path).copied()
    }

    /// True when `to` is reachable from `from` via declared edges (one or
    /// more hops).
    pub fn reaches(&self, from: NodeIndex, to: NodeIndex) -> bool {
        let mut visited: HashSet<NodeIndex> = HashSet::new();
        let mut queue = VecDeque::new();
        queue.push_back(from);
        while let Some(current) = queue.pop_front() {
            for neighbor in self
                .graph
                .neighbors_directed(current, petgraph::Direction::Outgoing)
            {
                if neighbor == to {
                    return true;
                }
                if visited.insert(neighbor) {
                    queue.push_back(neighbor);
                }
            }
        }
        false
    }
}

impl Default for BuildGraph {
    fn default() -> Self {
        Self::new()
    }
}
