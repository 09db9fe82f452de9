pub mod add;
pub mod clear;
pub mod context;
pub mod delete;
pub mod guidance;
pub mod list;
pub mod ui;

pub use context::HandlerContext;
