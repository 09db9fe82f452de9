//! Ratatui widgets for `catalog ui`.
//!
//! Each view borrows the `CatalogViewModel` (plus the few UI-only bits the
//! renderer owns, like the active input) and maps it to widgets.

pub mod cards;
pub mod form;
pub mod modal;
pub mod search;
pub mod status_bar;

pub use cards::CardListView;
pub use form::FormView;
pub use modal::ConfirmModalView;
pub use search::SearchView;
pub use status_bar::StatusBarView;

use crate::presentation::view_models::StatusLevel;
use ratatui::style::{Color, Modifier, Style};

/// Convert StatusLevel to Ratatui Color
pub(crate) fn status_level_to_color(level: StatusLevel) -> Color {
    match level {
        StatusLevel::Success => Color::Green,
        StatusLevel::Info => Color::Cyan,
        StatusLevel::Error => Color::Red,
    }
}

pub(crate) fn border_style(active: bool) -> Style {
    if active {
        Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    }
}
