use crate::core::stripper::{
    compute_exclusion_set, filter_lines, join_lines, split_lines, validate_anchors,
};
use crate::core::{ConfigProvider, Storage, StripReport};
use crate::utils::error::Result;
use chrono::Utc;

pub struct StripEngine<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
    dry_run: bool,
}

impl<S: Storage, C: ConfigProvider> StripEngine<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self {
            storage,
            config,
            dry_run: false,
        }
    }

    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Load, validate anchors, filter, then save.
    ///
    /// Nothing is written unless every anchor matches.
    pub fn run(&self) -> Result<StripReport> {
        let path = self.config.target_path();
        tracing::info!("Loading {}", path.display());
        let content = self.storage.load(path)?;
        let lines = split_lines(&content);
        tracing::debug!("Loaded {} lines", lines.len());

        validate_anchors(&lines, self.config.anchors())?;
        tracing::info!("All {} anchor lines matched", self.config.anchors().len());

        for range in self.config.ranges() {
            if range.start > range.end {
                tracing::warn!("Range {} is reversed and removes nothing", range);
            } else if range.end > lines.len() {
                tracing::warn!(
                    "Range {} extends past the end of the file ({} lines)",
                    range,
                    lines.len()
                );
            }
        }

        let exclusions = compute_exclusion_set(self.config.ranges());
        let kept = filter_lines(&lines, &exclusions);
        let removed = lines.len() - kept.len();

        if self.dry_run {
            for range in self.config.ranges() {
                tracing::info!("Would remove {} ({} lines)", range, range.len());
            }
        } else {
            self.storage.save(path, &join_lines(&kept))?;
            tracing::info!("Removed {} lines from {}", removed, path.display());
        }

        Ok(StripReport {
            path: path.display().to_string(),
            total_lines: lines.len(),
            removed_lines: removed,
            remaining_lines: kept.len(),
            dry_run: self.dry_run,
            completed_at: Utc::now(),
        })
    }
}
