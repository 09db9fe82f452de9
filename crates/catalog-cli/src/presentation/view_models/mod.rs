pub mod catalog;
pub mod common;
pub mod result;

use std::fmt;

pub use catalog::*;
pub use common::{Guidance, OutputFormat, StatusBadge, StatusLevel, ViewMode};
pub use result::CommandResultViewModel;

/// Bridges a view model to its text view.
pub trait CreateView {
    fn create_view<'a>(&'a self, mode: ViewMode) -> Box<dyn fmt::Display + 'a>;
}
