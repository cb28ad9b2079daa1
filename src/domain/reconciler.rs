//! Dependency reconciliation: the algorithmic core.
//!
//! For every target, computes the dependency set implied by actual includes
//! and classifies discrepancies against the declared set. The whole pass is
//! a pure function over the assembled graph and scanned sources; findings
//! come out sorted by (target, kind, related) for diff-friendly output.

use crate::domain::finding::{Finding, FindingKind};
use crate::domain::graph::BuildGraph;
use crate::domain::source::{SourceFile, normalize_path};
use petgraph::graph::NodeIndex;
use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::path::Path;

/// Include edges from one target into one dependency, collapsed from the
/// per-file include edges.
struct ImpliedEdge {
    node: NodeIndex,
    /// Included header paths, deduplicated and ordered.
    headers: BTreeSet<String>,
    /// (including file, header) witness pairs for explanations.
    witnesses: BTreeSet<(String, String)>,
}

/// Run reconciliation over every target in the graph.
pub fn reconcile(graph: &BuildGraph, sources: &[SourceFile]) -> Vec<Finding> {
    let mut sources_by_owner: HashMap<NodeIndex, Vec<&SourceFile>> = HashMap::new();
    for source in sources {
        if let Some(owner) = graph.owner_of(&source.path) {
            sources_by_owner.entry(owner).or_default().push(source);
        }
    }

    let mut indices: Vec<NodeIndex> = graph.graph.node_indices().collect();
    indices.sort_by(|a, b| graph.target(*a).name.cmp(&graph.target(*b).name));

    let mut findings = Vec::new();
    for idx in indices {
        reconcile_target(graph, idx, &sources_by_owner, &mut findings);
    }
    findings.sort_by(|l, r| l.sort_key().cmp(&r.sort_key()));
    findings
}

fn reconcile_target(
    graph: &BuildGraph,
    idx: NodeIndex,
    sources_by_owner: &HashMap<NodeIndex, Vec<&SourceFile>>,
    findings: &mut Vec<Finding>,
) {
    let target = graph.target(idx);

    // Step 1: implied(T) — owners of files included by files owned by T,
    // excluding T itself. Includes that resolve to no owned file (system
    // headers) are skipped.
    let mut implied: BTreeMap<String, ImpliedEdge> = BTreeMap::new();
    for source in sources_by_owner.get(&idx).into_iter().flatten() {
        for directive in &source.includes {
            let Some(owner) = resolve_include_owner(graph, &source.path, &directive.path) else {
                continue;
            };
            if owner == idx {
                continue;
            }
            let dep_name = graph.target(owner).name.clone();
            let edge = implied.entry(dep_name).or_insert_with(|| ImpliedEdge {
                node: owner,
                headers: BTreeSet::new(),
                witnesses: BTreeSet::new(),
            });
            edge.headers.insert(directive.path.clone());
            edge.witnesses
                .insert((source.path.clone(), directive.path.clone()));
        }
    }

    // Step 2: declared(T), in declaration order.
    let declared: Vec<(&str, NodeIndex)> = target
        .deps
        .iter()
        .filter_map(|dep| graph.get_target_by_name(dep).map(|d| (dep.as_str(), d)))
        .collect();
    let declared_names: BTreeSet<&str> = declared.iter().map(|(name, _)| *name).collect();

    // Steps 3 and 4 produce suppressible candidates; suppressions are applied
    // before the candidates become findings.
    let mut candidates: BTreeMap<String, Finding> = BTreeMap::new();

    // Step 3: missing = implied \ declared.
    for (dep_name, edge) in &implied {
        if declared_names.contains(dep_name.as_str()) {
            continue;
        }
        let (via_file, via_header) = edge
            .witnesses
            .iter()
            .next()
            .expect("implied edge has at least one witness");
        if graph.reaches(idx, edge.node) && target.policy.allow_transitive {
            findings.push(Finding::new(
                &target.name,
                FindingKind::TransitiveOnly,
                dep_name,
                format!(
                    "'{}' includes \"{}\" from '{}' which is only reachable through a declared dependency chain",
                    via_file, via_header, dep_name
                ),
            ));
        } else {
            candidates.insert(
                dep_name.clone(),
                Finding::new(
                    &target.name,
                    FindingKind::MissingDependency,
                    dep_name,
                    format!(
                        "'{}' includes \"{}\" owned by '{}' but '{}' does not declare it",
                        via_file, via_header, dep_name, target.name
                    ),
                ),
            );
        }
    }

    // Step 4: redundant = declared \ implied, minus force-linked deps.
    for (dep_name, dep_idx) in &declared {
        if implied.contains_key(*dep_name) {
            continue;
        }
        if graph.target(*dep_idx).force_link {
            // Legitimately declared without textual inclusion.
            continue;
        }
        candidates.insert(
            (*dep_name).to_string(),
            Finding::new(
                &target.name,
                FindingKind::RedundantDependency,
                *dep_name,
                format!(
                    "'{}' declares '{}' but includes none of its headers",
                    target.name, dep_name
                ),
            ),
        );
    }

    // Step 6: suppressions. A matched candidate becomes an audit-trail
    // record; an unmatched suppression is itself a defect.
    for suppression in &target.policy.suppressions {
        if let Some(candidate) = candidates.remove(&suppression.dep) {
            findings.push(Finding::new(
                &target.name,
                FindingKind::SuppressedDeviation,
                &suppression.dep,
                format!(
                    "{} on '{}' acknowledged: {}",
                    candidate.kind, suppression.dep, suppression.reason
                ),
            ));
        } else {
            findings.push(Finding::new(
                &target.name,
                FindingKind::StaleSuppression,
                &suppression.dep,
                format!(
                    "suppression for '{}' ({}) matched no deviation; remove it",
                    suppression.dep, suppression.reason
                ),
            ));
        }
    }
    findings.extend(candidates.into_values());

    // Step 5: force-link heuristic. A dependency consumed exclusively through
    // registration-style headers carries no symbol reference the linker would
    // keep; it must be marked force_link.
    for (dep_name, edge) in &implied {
        if graph.target(edge.node).force_link {
            continue;
        }
        if edge.headers.iter().all(|h| is_registration_header(h)) {
            let header = edge
                .headers
                .iter()
                .next()
                .expect("implied edge has at least one header");
            findings.push(Finding::new(
                &target.name,
                FindingKind::MissingForceLink,
                dep_name,
                format!(
                    "'{}' references '{}' only through registration header \"{}\"; mark '{}' force_link",
                    target.name, dep_name, header, dep_name
                ),
            ));
        }
    }
}

/// Resolve an include directive to the owning target: exact relative-path
/// match first, then a lookup relative to the including file's directory.
fn resolve_include_owner(
    graph: &BuildGraph,
    from_file: &str,
    include_path: &str,
) -> Option<NodeIndex> {
    if let Some(normalized) = normalize_path(include_path)
        && let Some(owner) = graph.owner_of(&normalized)
    {
        return Some(owner);
    }
    let parent = Path::new(from_file).parent()?.to_string_lossy();
    let joined = if parent.is_empty() {
        include_path.to_string()
    } else {
        format!("{parent}/{include_path}")
    };
    graph.owner_of(&normalize_path(&joined)?)
}

/// Heuristic: a header whose stem names registration/plugin machinery. Such
/// headers are included for static self-registration side effects, not for
/// symbols the linker would resolve.
fn is_registration_header(path: &str) -> bool {
    let stem = Path::new(path)
        .file_stem()
        .map(|s| s.to_string_lossy().to_ascii_lowercase())
        .unwrap_or_default();
    stem.contains("regist") || stem.contains("plugin")
}
