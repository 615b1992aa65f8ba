use crate::domain::model::{AnchorCheck, ExclusionRange};
use crate::utils::error::Result;
use std::path::Path;

pub trait Storage {
    /// Reads the whole file as UTF-8 text.
    fn load(&self, path: &Path) -> Result<String>;
    /// Replaces the file's contents.
    fn save(&self, path: &Path, contents: &str) -> Result<()>;
}

pub trait ConfigProvider {
    fn target_path(&self) -> &Path;
    fn anchors(&self) -> &[AnchorCheck];
    fn ranges(&self) -> &[ExclusionRange];
}
