//! Application state owned by the controller.
//!
//! Everything a view needs is here; rendering is a pure function of this
//! struct.

use catalog_store::list;
use catalog_types::{DataUri, ImageFile, Product};
use std::fmt;

use crate::ingest::SelectionToken;
use crate::validate::FormError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Field {
    Name,
    Price,
    Image,
}

impl Field {
    pub const ALL: [Field; 3] = [Field::Name, Field::Price, Field::Image];

    pub fn as_str(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Price => "price",
            Field::Image => "image",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One inline error slot per form field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    name: Option<FormError>,
    price: Option<FormError>,
    image: Option<FormError>,
}

impl FieldErrors {
    fn slot(&mut self, field: Field) -> &mut Option<FormError> {
        match field {
            Field::Name => &mut self.name,
            Field::Price => &mut self.price,
            Field::Image => &mut self.image,
        }
    }

    /// Store `error` in the slot of the field it belongs to.
    pub fn set(&mut self, error: FormError) {
        *self.slot(error.field()) = Some(error);
    }

    pub fn get(&self, field: Field) -> Option<FormError> {
        match field {
            Field::Name => self.name,
            Field::Price => self.price,
            Field::Image => self.image,
        }
    }

    pub fn clear(&mut self, field: Field) {
        *self.slot(field) = None;
    }

    pub fn clear_all(&mut self) {
        *self = Self::default();
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn len(&self) -> usize {
        self.iter().count()
    }

    /// Failing fields in form order.
    pub fn iter(&self) -> impl Iterator<Item = (Field, FormError)> + '_ {
        Field::ALL
            .into_iter()
            .filter_map(|field| self.get(field).map(|error| (field, error)))
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PanelState {
    #[default]
    Open,
    Closed,
}

impl PanelState {
    pub fn toggled(self) -> Self {
        match self {
            PanelState::Open => PanelState::Closed,
            PanelState::Closed => PanelState::Open,
        }
    }

    pub fn is_open(self) -> bool {
        self == PanelState::Open
    }

    /// Label of the control that toggles the panel.
    pub fn toggle_label(self) -> &'static str {
        match self {
            PanelState::Open => "Hide add product",
            PanelState::Closed => "Show add product",
        }
    }
}

/// The file currently chosen in the form, and its encoded bytes once read.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageSelection {
    pub token: SelectionToken,
    pub file: ImageFile,
    pub payload: Option<DataUri>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FormState {
    pub name: String,
    /// Raw price text, validated on submit
    pub price: String,
    pub image: Option<ImageSelection>,
    pub focus: Field,
}

impl Default for FormState {
    fn default() -> Self {
        Self {
            name: String::new(),
            price: String::new(),
            image: None,
            focus: Field::Name,
        }
    }
}

impl FormState {
    /// Encoded image to preview, once the selected file has been read.
    pub fn preview(&self) -> Option<&DataUri> {
        self.image.as_ref().and_then(|s| s.payload.as_ref())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Error,
}

/// Message not tied to a form field (e.g. a failed save).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Info,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CatalogState {
    /// Newest first; the single source of truth
    pub products: Vec<Product>,
    pub query: String,
    pub panel: PanelState,
    pub form: FormState,
    pub errors: FieldErrors,
    pub notice: Option<Notice>,
}

impl CatalogState {
    pub fn new(products: Vec<Product>) -> Self {
        Self {
            products,
            ..Self::default()
        }
    }

    /// Products matching the current search, in list order.
    pub fn visible_products(&self) -> Vec<&Product> {
        list::filter_by_name(&self.products, &self.query)
    }
}
