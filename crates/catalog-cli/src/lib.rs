// Layering
//
// catalog-types    Product, ProductId, DataUri, money rounding
// catalog-store    SQLite key-value mirror of the product list
// catalog-runtime  application state, validation, image reads, event handlers
// catalog (here)   argument parsing, presentation, terminal UI
//
// Every command runs the same controller the interactive UI drives, so
// `catalog add` and submitting the form in `catalog ui` share one code path.

mod args;
mod commands;
pub mod confirm;
mod handlers;
pub mod logging;
pub mod presentation;
pub mod types;

pub use args::{Cli, Commands, ViewModeArgs};
pub use commands::run;
