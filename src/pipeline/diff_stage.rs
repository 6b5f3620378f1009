//! Diff computation stage.

use crate::config::DiffConfig;
use crate::diff::{DiffEngine, DiffResult};
use crate::model::Row;
use anyhow::{Context, Result};

/// Run the diff between two row sets with the configured options.
pub fn compute_diff(config: &DiffConfig, left: &[Row], right: &[Row]) -> Result<DiffResult> {
    let quiet = config.app.behavior.quiet;
    let options = config.diff_options();

    if !quiet {
        tracing::info!("Computing diff...");
    }
    if !options.fuzzy_enabled() {
        tracing::debug!(
            threshold = options.similarity_threshold,
            "replace pairing disabled"
        );
    }

    let mut engine = DiffEngine::with_options(options);
    let result = engine
        .diff(left, right)
        .with_context(|| {
            format!(
                "Failed to diff {} against {}",
                config.paths.left.display(),
                config.paths.right.display()
            )
        })?;

    let stats = engine.cache_stats();
    tracing::debug!(
        lookups = stats.lookups,
        hits = stats.hits,
        evictions = stats.evictions,
        "similarity cache"
    );

    if !quiet {
        let s = &result.summary;
        tracing::info!(
            "Diff complete: {} equal, {} replace, {} delete, {} insert",
            s.equal,
            s.replace,
            s.delete,
            s.insert
        );
    }

    Ok(result)
}
