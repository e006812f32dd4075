//! Seed file loading

use anyhow::Context;
use press_registry::Seed;
use std::path::Path;

/// Read and parse a JSON seed file
pub fn load_seed(path: impl AsRef<Path>) -> anyhow::Result<Seed> {
    let path = path.as_ref();
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("reading seed file {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("parsing seed file {}", path.display()))
}
