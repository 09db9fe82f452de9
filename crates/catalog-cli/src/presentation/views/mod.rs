pub mod catalog;
pub mod tui;

pub use catalog::{AddResultView, CatalogView, ClearResultView, DeleteResultView, GuidanceView};
