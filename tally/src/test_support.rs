//! Test-only helpers for exercising the CLI against fixture configs.

use std::path::{Path, PathBuf};

use anyhow::Result;

use crate::config::{TallyConfig, write_config};

/// Write a `tally.toml` with the given knobs into `dir`; returns its path.
pub fn write_config_fixture(dir: &Path, initial: i64, input_limit_bytes: usize) -> Result<PathBuf> {
    let path = dir.join("tally.toml");
    let cfg = TallyConfig {
        initial,
        input_limit_bytes,
    };
    write_config(&path, &cfg)?;
    Ok(path)
}
