//! Assertions over `--format json` output.

use anyhow::{Context, Result};
use serde_json::Value;

fn cards(json: &Value) -> Result<&Vec<Value>> {
    json["content"]["cards"]
        .as_array()
        .context("Expected 'content.cards' array in JSON")
}

/// Assert that the rendered list shows `expected` cards.
pub fn assert_card_count(json: &Value, expected: usize) -> Result<()> {
    let cards = cards(json)?;
    if cards.len() != expected {
        anyhow::bail!("Expected {} cards, got {}", expected, cards.len());
    }
    Ok(())
}

/// Assert the card names, in display order.
pub fn assert_card_names(json: &Value, expected: &[&str]) -> Result<()> {
    let names: Vec<&str> = cards(json)?
        .iter()
        .map(|c| c["name"].as_str().unwrap_or_default())
        .collect();

    if names != expected {
        anyhow::bail!("Expected cards {:?}, got {:?}", expected, names);
    }
    Ok(())
}

pub fn assert_empty_state(json: &Value, expected: bool) -> Result<()> {
    let empty = json["content"]["empty_state"]
        .as_bool()
        .context("Expected 'content.empty_state' bool in JSON")?;

    if empty != expected {
        anyhow::bail!("Expected empty_state={}, got {}", expected, empty);
    }
    Ok(())
}

/// Assert a field error message in a rejected `add` result.
pub fn assert_field_error(json: &Value, field: &str, message: &str) -> Result<()> {
    let errors = json["content"]["errors"]
        .as_array()
        .context("Expected 'content.errors' array in JSON")?;

    let found = errors
        .iter()
        .any(|e| e["field"].as_str() == Some(field) && e["message"].as_str() == Some(message));

    if !found {
        anyhow::bail!("No error {:?} on field {} in {:?}", message, field, errors);
    }
    Ok(())
}
