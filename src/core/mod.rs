pub mod engine;
pub mod stripper;

pub use crate::domain::model::{AnchorCheck, ExclusionRange, ExclusionSet, StripReport};
pub use crate::domain::ports::{ConfigProvider, Storage};
pub use crate::utils::error::Result;
