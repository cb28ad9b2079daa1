use serde::Serialize;

/// Classification of one reconciliation discrepancy.
///
/// Variant order is the sort order within a target: actionable kinds first,
/// audit-trail kinds last.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FindingKind {
    /// An implied edge with no declared justification.
    MissingDependency,
    /// A declared edge no include justifies.
    RedundantDependency,
    /// A dependency consumed only through registration headers but not marked
    /// `force_link`.
    MissingForceLink,
    /// A suppression whose underlying deviation no longer exists.
    StaleSuppression,
    /// An implied edge satisfied through a declared chain, permitted by
    /// policy.
    TransitiveOnly,
    /// A suppression matched its deviation; recorded for audit visibility.
    SuppressedDeviation,
}

impl FindingKind {
    /// Actionable kinds drive a non-zero exit status; informational kinds
    /// never do.
    pub fn is_actionable(self) -> bool {
        matches!(
            self,
            Self::MissingDependency
                | Self::RedundantDependency
                | Self::MissingForceLink
                | Self::StaleSuppression
        )
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::MissingDependency => "missing_dependency",
            Self::RedundantDependency => "redundant_dependency",
            Self::MissingForceLink => "missing_force_link",
            Self::StaleSuppression => "stale_suppression",
            Self::TransitiveOnly => "transitive_only",
            Self::SuppressedDeviation => "suppressed_deviation",
        }
    }
}

impl std::fmt::Display for FindingKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One reconciliation diagnostic: (target, kind, related target, explanation).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Finding {
    pub target: String,
    pub kind: FindingKind,
    pub related: String,
    pub explanation: String,
}

impl Finding {
    pub fn new(
        target: impl Into<String>,
        kind: FindingKind,
        related: impl Into<String>,
        explanation: impl Into<String>,
    ) -> Self {
        Self {
            target: target.into(),
            kind,
            related: related.into(),
            explanation: explanation.into(),
        }
    }

    /// Deterministic, diff-friendly order: (target, kind, related).
    pub fn sort_key(&self) -> (&str, FindingKind, &str) {
        (&self.target, self.kind, &self.related)
    }
}
