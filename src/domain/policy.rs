/// An explicit, justified exception permitting a dependency deviation that
/// would otherwise be flagged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Suppression {
    /// Name of the dependency target the suppression covers.
    pub dep: String,
    /// Human-readable justification, echoed in the audit-trail finding.
    pub reason: String,
}

/// Policy bundle applied to one target during reconciliation.
///
/// Policies are pure configuration: the reconciler branches only on these
/// flags, never on the names of the scenarios that exercise them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DependencyPolicy {
    /// When true, an implied dependency satisfied through a chain of declared
    /// edges is informational (`TransitiveOnly`) instead of actionable.
    pub allow_transitive: bool,
    /// Acknowledged deviations for (this target, dep) pairs.
    pub suppressions: Vec<Suppression>,
}

impl DependencyPolicy {
    /// Strict default: every implied edge must be declared directly.
    pub fn strict() -> Self {
        Self::default()
    }

    /// Transitive-tolerant variant.
    pub fn transitive() -> Self {
        Self {
            allow_transitive: true,
            suppressions: Vec::new(),
        }
    }

    /// First suppression covering `dep`, if any.
    pub fn suppression_for(&self, dep: &str) -> Option<&Suppression> {
        self.suppressions.iter().find(|s| s.dep == dep)
    }
}
