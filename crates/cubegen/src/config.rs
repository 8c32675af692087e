use crate::attributes::AttributePolicy;
use crate::geometry::AtlasLayout;

pub const DEFAULT_MARKER_PREFIX: &str = "###";

#[derive(Debug, Clone, Default)]
pub struct GeneratorConfig {
    pub policy: AttributePolicy,
    pub atlas: AtlasLayout,
}

impl GeneratorConfig {
    pub fn with_policy(policy: AttributePolicy) -> Self {
        Self {
            policy,
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone)]
pub struct PatchOptions {
    /// Sentinel token that starts every section marker line.
    pub marker_prefix: String,
    /// Compute the new content without writing it back.
    pub dry_run: bool,
}

impl Default for PatchOptions {
    fn default() -> Self {
        Self {
            marker_prefix: DEFAULT_MARKER_PREFIX.to_string(),
            dry_run: false,
        }
    }
}
