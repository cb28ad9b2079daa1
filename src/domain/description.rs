//! Build-description records: the contract between the build-file adapter and
//! the graph loader.
//!
//! One record per target: name, owned files, declared deps, attributes. A
//! top-level `defaults` block supplies attribute defaults which per-target
//! attribute blocks override field-wise.

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BuildDescription {
    #[serde(default)]
    pub defaults: AttributeRecord,
    pub targets: Vec<TargetRecord>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TargetRecord {
    pub name: String,
    #[serde(default)]
    pub files: Vec<String>,
    #[serde(default)]
    pub deps: Vec<String>,
    #[serde(default)]
    pub attributes: Option<AttributeRecord>,
}

/// Attribute block; every field optional so target blocks can override the
/// defaults selectively.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AttributeRecord {
    pub force_link: Option<bool>,
    pub allow_transitive: Option<bool>,
    pub suppressions: Option<Vec<SuppressionRecord>>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SuppressionRecord {
    pub dep: String,
    pub reason: String,
}
