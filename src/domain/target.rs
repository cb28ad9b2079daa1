use crate::domain::policy::DependencyPolicy;

/// Target name as written in the build description.
pub type TargetName = String;

/// A named build unit: owns source files, declares dependencies on other
/// targets, and carries the attributes reconciliation branches on.
///
/// Created when the build description is parsed, mutated only during graph
/// construction, never during reconciliation.
#[derive(Debug, Clone)]
pub struct Target {
    pub name: TargetName,
    /// Owned files, relative to the source root, in declaration order.
    pub files: Vec<String>,
    /// Declared dependency names, in declaration order.
    pub deps: Vec<TargetName>,
    /// This target must be linked even when no symbol is referenced directly
    /// (static self-registration side effects). Dependents declaring it are
    /// exempt from redundancy classification.
    pub force_link: bool,
    pub policy: DependencyPolicy,
}

impl Target {
    pub fn new(name: impl Into<TargetName>) -> Self {
        Self {
            name: name.into(),
            files: Vec::new(),
            deps: Vec::new(),
            force_link: false,
            policy: DependencyPolicy::default(),
        }
    }
}
