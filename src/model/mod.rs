// src/model/mod.rs
//! Typed records the pipeline passes around: who the player is, which
//! categories exist, the per-season rows and the final wide table.

pub mod category;
pub mod identity;
pub mod record;
pub mod table;

pub use category::{Category, PerCategory};
pub use identity::{canonical_name, PlayerIdentity};
pub use record::{CategoryLinks, CategoryRow, CategoryRows, SeasonLink, SeasonRecord};
pub use table::{ColumnKey, ResultTable};
