#[cfg(feature = "cli")]
pub mod cli;
pub mod storage;
pub mod toml_config;

use crate::core::ConfigProvider;
use crate::domain::model::{AnchorCheck, ExclusionRange};
use crate::utils::error::Result;
use crate::utils::validation::{
    validate_non_empty, validate_non_empty_string, validate_path, Validate,
};
use std::path::{Path, PathBuf};

pub const DEFAULT_TARGET_PATH: &str = "client/src/lib/i18n.tsx";

/// Everything one run needs: which file, what to check, what to drop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StripConfig {
    pub path: PathBuf,
    pub anchors: Vec<AnchorCheck>,
    pub ranges: Vec<ExclusionRange>,
}

impl StripConfig {
    pub fn new(
        path: impl Into<PathBuf>,
        anchors: Vec<AnchorCheck>,
        ranges: Vec<ExclusionRange>,
    ) -> Self {
        Self {
            path: path.into(),
            anchors,
            ranges,
        }
    }

    /// Drops the ru/de/fr, pt and ms/he translation blocks from the i18n table.
    pub fn i18n_preset(path: impl Into<PathBuf>) -> Self {
        Self::new(
            path,
            vec![
                AnchorCheck::new(190, "ru: {").with_label("ru"),
                AnchorCheck::new(752, "pt: {").with_label("pt"),
                AnchorCheck::new(942, "ms: {").with_label("ms"),
            ],
            vec![
                ExclusionRange::new(942, 1132).with_label("ms, he"),
                ExclusionRange::new(752, 847).with_label("pt"),
                ExclusionRange::new(190, 480).with_label("ru, de, fr"),
            ],
        )
    }

    pub fn with_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.path = path.into();
        self
    }
}

impl Default for StripConfig {
    fn default() -> Self {
        Self::i18n_preset(DEFAULT_TARGET_PATH)
    }
}

impl ConfigProvider for StripConfig {
    fn target_path(&self) -> &Path {
        &self.path
    }

    fn anchors(&self) -> &[AnchorCheck] {
        &self.anchors
    }

    fn ranges(&self) -> &[ExclusionRange] {
        &self.ranges
    }
}

impl Validate for StripConfig {
    fn validate(&self) -> Result<()> {
        validate_path("target.path", &self.path.to_string_lossy())?;
        validate_non_empty("anchors", &self.anchors)?;
        validate_non_empty("ranges", &self.ranges)?;

        for (i, anchor) in self.anchors.iter().enumerate() {
            validate_non_empty_string(&format!("anchors[{}].contains", i), &anchor.contains)?;
        }

        for range in self.ranges.iter().filter(|r| r.start > r.end) {
            tracing::warn!("Range {} has start after end and will remove nothing", range);
        }

        Ok(())
    }
}
