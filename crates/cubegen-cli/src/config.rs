use std::path::PathBuf;

use cubegen::{AttributePolicy, GeneratorConfig, PatchOptions};

/// Asset patched when no target is given, relative to the workspace root.
pub const DEFAULT_TARGET: &str = "data/cube_vertices.txt";

pub fn default_target() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("../..")
        .join(DEFAULT_TARGET)
}

#[derive(Debug, Clone, Default)]
pub struct PrintConfig {
    pub generator: GeneratorConfig,
}

impl PrintConfig {
    pub fn new(policy: AttributePolicy) -> Self {
        Self {
            generator: GeneratorConfig::with_policy(policy),
        }
    }
}

#[derive(Debug, Clone)]
pub struct PatchConfig {
    pub target: PathBuf,
    pub generator: GeneratorConfig,
    pub options: PatchOptions,
}

impl Default for PatchConfig {
    fn default() -> Self {
        Self {
            target: default_target(),
            generator: GeneratorConfig::with_policy(AttributePolicy::WhiteSplit),
            options: PatchOptions::default(),
        }
    }
}

impl PatchConfig {
    pub fn new(
        target: Option<PathBuf>,
        marker_prefix: String,
        policy: AttributePolicy,
        dry_run: bool,
    ) -> Self {
        let defaults = Self::default();
        Self {
            target: target.unwrap_or(defaults.target),
            generator: GeneratorConfig::with_policy(policy),
            options: PatchOptions {
                marker_prefix,
                dry_run,
            },
        }
    }
}
