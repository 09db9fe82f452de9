use std::fmt;

/// A destructive action awaiting the user's go-ahead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfirmRequest {
    DeleteProduct { name: String },
    ClearAll { count: usize },
}

impl fmt::Display for ConfirmRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfirmRequest::DeleteProduct { name } => write!(f, "Delete \"{}\"?", name),
            ConfirmRequest::ClearAll { .. } => {
                write!(f, "Delete ALL products? This cannot be undone.")
            }
        }
    }
}

/// Asks the user to confirm a destructive action.
pub trait Confirm {
    fn confirm(&mut self, request: &ConfirmRequest) -> bool;
}

/// Approves everything (`--yes`).
#[derive(Debug, Clone, Copy, Default)]
pub struct AssumeYes;

impl Confirm for AssumeYes {
    fn confirm(&mut self, _request: &ConfirmRequest) -> bool {
        true
    }
}

/// Declines everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct AssumeNo;

impl Confirm for AssumeNo {
    fn confirm(&mut self, _request: &ConfirmRequest) -> bool {
        false
    }
}
