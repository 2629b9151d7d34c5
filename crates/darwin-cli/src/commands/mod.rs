//! CLI subcommands.

pub mod map;
pub mod play;

use std::path::Path;

use darwin_core::Island;
use miette::{IntoDiagnostic, WrapErr};

/// Load an island: a JSON definition from disk, or the built-in one.
fn load_island(world: Option<&Path>) -> miette::Result<Island> {
    match world {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .into_diagnostic()
                .wrap_err_with(|| format!("could not read island file {}", path.display()))?;
            serde_json::from_str(&text)
                .into_diagnostic()
                .wrap_err_with(|| format!("invalid island definition in {}", path.display()))
        }
        None => darwin_island::island()
            .into_diagnostic()
            .wrap_err("built-in island content failed validation"),
    }
}
