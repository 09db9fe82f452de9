pub mod config;
pub mod confirm;
pub mod controller;
pub mod error;
pub mod ingest;
pub mod state;
pub mod validate;

pub use config::{Config, resolve_workspace_path};
pub use confirm::{AssumeNo, AssumeYes, Confirm, ConfirmRequest};
pub use controller::{CatalogController, ClearOutcome, DeleteOutcome, SubmitOutcome};
pub use error::{Error, Result};
pub use ingest::{PendingRead, SelectionToken, read_data_uri};
pub use state::{
    CatalogState, Field, FieldErrors, FormState, ImageSelection, Notice, NoticeLevel, PanelState,
};
pub use validate::{FormError, ValidInput, validate_form, validate_image, validate_name, validate_price};
