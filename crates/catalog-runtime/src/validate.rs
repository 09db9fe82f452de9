//! Form validation.
//!
//! Fields are checked independently and every failing field is reported;
//! within a field the first failing rule wins.

use catalog_types::{ImageFile, round_money};
use std::fmt;

use crate::state::{Field, FieldErrors};

/// A field-scoped input error. Always shown inline, never propagated further.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormError {
    EmptyName,
    InvalidPrice,
    NotAnImage,
    ImageTooLarge,
    ReadError,
}

impl FormError {
    pub fn field(self) -> Field {
        match self {
            FormError::EmptyName => Field::Name,
            FormError::InvalidPrice => Field::Price,
            FormError::NotAnImage | FormError::ImageTooLarge | FormError::ReadError => {
                Field::Image
            }
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            FormError::EmptyName => "Name is required.",
            FormError::InvalidPrice => "Enter a valid non-negative price.",
            FormError::NotAnImage => "Please choose an image file.",
            FormError::ImageTooLarge => "Image is too large. Max size is ~3 MB.",
            FormError::ReadError => "Could not read the selected image.",
        }
    }
}

impl fmt::Display for FormError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field(), self.message())
    }
}

impl std::error::Error for FormError {}

/// Name and price that passed validation. The price is already rounded.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidInput {
    pub name: String,
    pub price: f64,
}

pub fn validate_name(raw: &str) -> Result<String, FormError> {
    let name = raw.trim();
    if name.is_empty() {
        return Err(FormError::EmptyName);
    }
    Ok(name.to_string())
}

/// Parse a price, rejecting empty, non-numeric, non-finite and negative input.
pub fn validate_price(raw: &str) -> Result<f64, FormError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(FormError::InvalidPrice);
    }

    let value: f64 = raw.parse().map_err(|_| FormError::InvalidPrice)?;
    if !value.is_finite() || value < 0.0 {
        return Err(FormError::InvalidPrice);
    }
    Ok(round_money(value))
}

pub fn validate_image(file: &ImageFile, max_bytes: u64) -> Result<(), FormError> {
    if !file.is_image() {
        return Err(FormError::NotAnImage);
    }
    if file.size > max_bytes {
        return Err(FormError::ImageTooLarge);
    }
    Ok(())
}

/// Validate every field of the add-product form.
///
/// No image is always valid.
pub fn validate_form(
    name: &str,
    price: &str,
    image: Option<&ImageFile>,
    max_image_bytes: u64,
) -> Result<ValidInput, FieldErrors> {
    let mut errors = FieldErrors::default();

    let name = validate_name(name).map_err(|e| errors.set(e)).ok();
    let price = validate_price(price).map_err(|e| errors.set(e)).ok();
    if let Some(file) = image
        && let Err(e) = validate_image(file, max_image_bytes)
    {
        errors.set(e);
    }

    match (name, price) {
        (Some(name), Some(price)) if errors.is_empty() => Ok(ValidInput { name, price }),
        _ => Err(errors),
    }
}
