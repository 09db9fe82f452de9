//! # Presentation Layer
//!
//! ```text
//! [ Handler ] --> [ Presenter ] --> [ ViewModel ] --> [ Renderer ] ==(JSON)==> serde_json --> stdout
//!                                                                  ==(Text)==> [ View ] --> stdout
//! ```
//!
//! - `view_models/` hold raw data (prices as numbers, images as data URIs).
//!   They must serialize; JSON output is the full view model regardless of
//!   `ViewMode`.
//! - `presenters/` are pure functions from application state to view models.
//! - `views/` implement `fmt::Display` (console) or ratatui `Widget` (TUI) and
//!   are the only place `formatters/` are used.
//! - `renderers/` drive output: console (JSON or text) and the interactive TUI.
//!
//! `ViewMode` is information density, not shape: Minimal prints ids only,
//! Compact one line per card, Standard a short block per card, Verbose adds
//! timestamps and image payload sizes.

pub mod formatters;
pub mod presenters;
pub mod renderers;
pub mod view_models;
pub mod views;

pub use renderers::{ConsoleRenderer, Renderer};
pub use view_models::{
    CommandResultViewModel, CreateView, Guidance, StatusBadge, StatusLevel,
    common::{OutputFormat, ViewMode},
};
