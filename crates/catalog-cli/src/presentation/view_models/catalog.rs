use serde::Serialize;
use std::fmt;

use super::{CreateView, StatusLevel, ViewMode};

// --------------------------------------------------------
// Catalog (list / interactive screen)
// --------------------------------------------------------

#[derive(Debug, Clone, Serialize)]
pub struct CatalogViewModel {
    pub query: String,
    /// Products in the catalog, ignoring the query
    pub total: usize,
    /// True when no card is shown
    pub empty_state: bool,
    pub cards: Vec<CardViewModel>,
    pub panel: PanelViewModel,
    pub form: FormViewModel,
    pub errors: Vec<FieldErrorViewModel>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notice: Option<NoticeViewModel>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CardViewModel {
    pub id: String,
    pub name: String,
    pub price: f64,
    pub created_at: i64,
    pub image: Option<ImageViewModel>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ImageViewModel {
    pub media_type: String,
    pub size_bytes: usize,
    pub data_uri: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct PanelViewModel {
    pub open: bool,
    pub toggle_label: String,
    pub aria_expanded: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct FormViewModel {
    pub name: String,
    pub price: String,
    pub focus: String,
    pub image_name: Option<String>,
    pub preview: PreviewViewModel,
}

#[derive(Debug, Clone, Serialize)]
pub struct PreviewViewModel {
    pub image: Option<ImageViewModel>,
    /// Placeholder shown when there is no image to preview
    pub caption: Option<String>,
    /// A file is selected but its bytes have not been read yet
    pub loading: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldErrorViewModel {
    pub field: String,
    pub message: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct NoticeViewModel {
    pub level: StatusLevel,
    pub message: String,
}

impl CreateView for CatalogViewModel {
    fn create_view<'a>(&'a self, mode: ViewMode) -> Box<dyn fmt::Display + 'a> {
        use crate::presentation::views::catalog::CatalogView;
        Box::new(CatalogView::new(self, mode))
    }
}

// --------------------------------------------------------
// Command results
// --------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AddStatus {
    Added,
    Rejected,
}

#[derive(Debug, Clone, Serialize)]
pub struct AddResultViewModel {
    pub status: AddStatus,
    pub product: Option<CardViewModel>,
    pub errors: Vec<FieldErrorViewModel>,
    pub persisted: bool,
    pub total: usize,
}

impl CreateView for AddResultViewModel {
    fn create_view<'a>(&'a self, mode: ViewMode) -> Box<dyn fmt::Display + 'a> {
        use crate::presentation::views::catalog::AddResultView;
        Box::new(AddResultView::new(self, mode))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RemovalStatus {
    Removed,
    Cancelled,
    AlreadyEmpty,
}

#[derive(Debug, Clone, Serialize)]
pub struct DeleteResultViewModel {
    pub status: RemovalStatus,
    pub id: String,
    pub name: String,
    pub persisted: bool,
    pub remaining: usize,
}

impl CreateView for DeleteResultViewModel {
    fn create_view<'a>(&'a self, mode: ViewMode) -> Box<dyn fmt::Display + 'a> {
        use crate::presentation::views::catalog::DeleteResultView;
        Box::new(DeleteResultView::new(self, mode))
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ClearResultViewModel {
    pub status: RemovalStatus,
    pub removed: usize,
    pub persisted: bool,
}

impl CreateView for ClearResultViewModel {
    fn create_view<'a>(&'a self, mode: ViewMode) -> Box<dyn fmt::Display + 'a> {
        use crate::presentation::views::catalog::ClearResultView;
        Box::new(ClearResultView::new(self, mode))
    }
}

// --------------------------------------------------------
// Guidance (no subcommand)
// --------------------------------------------------------

#[derive(Debug, Clone, Serialize)]
pub struct GuidanceViewModel {
    pub data_dir: String,
    pub database_exists: bool,
    pub product_count: usize,
}

impl CreateView for GuidanceViewModel {
    fn create_view<'a>(&'a self, mode: ViewMode) -> Box<dyn fmt::Display + 'a> {
        use crate::presentation::views::catalog::GuidanceView;
        Box::new(GuidanceView::new(self, mode))
    }
}
