use crate::domain::description::{AttributeRecord, BuildDescription};
use crate::domain::error::GraphError;
use crate::domain::graph::BuildGraph;
use crate::domain::policy::{DependencyPolicy, Suppression};
use crate::domain::source::normalize_path;
use crate::domain::target::Target;
use petgraph::graph::NodeIndex;
use std::collections::HashMap;

/// Builds the declared [`BuildGraph`] from a parsed build description.
///
/// Three-pass strategy: allocate target nodes (resolving attributes against
/// the description defaults), claim file ownership, then wire dependency
/// edges. A final depth-first walk with three-color marking rejects cyclic
/// declarations, so downstream consumers can assume an acyclic graph.
pub struct GraphLoader;

impl GraphLoader {
    pub fn load(description: BuildDescription) -> Result<BuildGraph, GraphError> {
        let mut graph = BuildGraph::new();

        // Pass 1: node allocation.
        for record in &description.targets {
            if graph.get_target_by_name(&record.name).is_some() {
                return Err(GraphError::DuplicateTarget {
                    name: record.name.clone(),
                });
            }
            let (force_link, policy) =
                resolve_attributes(&description.defaults, record.attributes.as_ref());
            let target = Target {
                name: record.name.clone(),
                files: record
                    .files
                    .iter()
                    .map(|f| normalize_path(f).unwrap_or_else(|| f.clone()))
                    .collect(),
                deps: record.deps.clone(),
                force_link,
                policy,
            };
            graph.add_target(target);
        }

        // Pass 2: file ownership. Exactly one owner per file.
        for idx in graph.graph.node_indices().collect::<Vec<_>>() {
            for file in graph.target(idx).files.clone() {
                if let Some(prior) = graph.file_owner.get(&file) {
                    return Err(GraphError::OwnershipConflict {
                        file,
                        first: graph.target(*prior).name.clone(),
                        second: graph.target(idx).name.clone(),
                    });
                }
                graph.file_owner.insert(file, idx);
            }
        }

        // Pass 3: edge wiring.
        for idx in graph.graph.node_indices().collect::<Vec<_>>() {
            for dep in graph.target(idx).deps.clone() {
                let Some(dep_idx) = graph.get_target_by_name(&dep) else {
                    return Err(GraphError::UnknownTarget {
                        from: graph.target(idx).name.clone(),
                        dep,
                    });
                };
                graph.add_edge(idx, dep_idx);
            }
        }

        detect_cycle(&graph)?;
        Ok(graph)
    }
}

fn resolve_attributes(
    defaults: &AttributeRecord,
    specific: Option<&AttributeRecord>,
) -> (bool, DependencyPolicy) {
    let pick = |field: fn(&AttributeRecord) -> Option<bool>| {
        specific
            .and_then(field)
            .or_else(|| field(defaults))
            .unwrap_or(false)
    };
    let suppressions = specific
        .and_then(|a| a.suppressions.clone())
        .or_else(|| defaults.suppressions.clone())
        .unwrap_or_default()
        .into_iter()
        .map(|s| Suppression {
            dep: s.dep,
            reason: s.reason,
        })
        .collect();
    (
        pick(|a| a.force_link),
        DependencyPolicy {
            allow_transitive: pick(|a| a.allow_transitive),
            suppressions,
        },
    )
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Color {
    White,
    Gray,
    Black,
}

/// Depth-first cycle detection with three-color marking. On detection the
/// error names the cycle, starting and ending at the revisited target.
fn detect_cycle(graph: &BuildGraph) -> Result<(), GraphError> {
    let mut colors: HashMap<NodeIndex, Color> = graph
        .graph
        .node_indices()
        .map(|idx| (idx, Color::White))
        .collect();

    // Deterministic root order keeps the reported cycle stable.
    let mut roots: Vec<NodeIndex> = graph.graph.node_indices().collect();
    roots.sort_by(|a, b| graph.target(*a).name.cmp(&graph.target(*b).name));

    for root in roots {
        if colors[&root] == Color::White {
            let mut path = Vec::new();
            visit(graph, root, &mut colors, &mut path)?;
        }
    }
    Ok(())
}

fn visit(
    graph: &BuildGraph,
    node: NodeIndex,
    colors: &mut HashMap<NodeIndex, Color>,
    path: &mut Vec<NodeIndex>,
) -> Result<(), GraphError> {
    colors.insert(node, Color::Gray);
    path.push(node);

    let mut neighbors: Vec<NodeIndex> = graph
        .graph
        .neighbors_directed(node, petgraph::Direction::Outgoing)
        .collect();
    neighbors.sort_by(|a, b| graph.target(*a).name.cmp(&graph.target(*b).name));

    for neighbor in neighbors {
        match colors[&neighbor] {
            Color::Gray => {
                let start = path
                    .iter()
                    .position(|&n| n == neighbor)
                    .unwrap_or(path.len() - 1);
                let mut cycle: Vec<String> = path[start..]
                    .iter()
                    .map(|&n| graph.target(n).name.clone())
                    .collect();
                cycle.push(graph.target(neighbor).name.clone());
                return Err(GraphError::CyclicDependency { cycle });
            }
            Color::White => visit(graph, neighbor, colors, path)?,
            Color::Black => {}
        }
    }

    path.pop();
    colors.insert(node, Color::Black);
    Ok(())
}
