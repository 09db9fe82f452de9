//! Sample files for image ingestion tests.

use anyhow::Result;
use catalog_types::Product;
use std::fs;
use std::path::{Path, PathBuf};

/// A 1x1 transparent PNG.
pub const TINY_PNG: &[u8] = &[
    0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A, 0x00, 0x00, 0x00, 0x0D, 0x49, 0x48, 0x44, 0x52,
    0x00, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00, 0x01, 0x08, 0x06, 0x00, 0x00, 0x00, 0x1F, 0x15, 0xC4,
    0x89, 0x00, 0x00, 0x00, 0x0D, 0x49, 0x44, 0x41, 0x54, 0x78, 0x9C, 0x63, 0x00, 0x01, 0x00, 0x00,
    0x05, 0x00, 0x01, 0x0D, 0x0A, 0x2D, 0xB4, 0x00, 0x00, 0x00, 0x00, 0x49, 0x45, 0x4E, 0x44, 0xAE,
    0x42, 0x60, 0x82,
];

/// Write the tiny PNG into `dir` and return its path.
pub fn write_png(dir: &Path, name: &str) -> Result<PathBuf> {
    let path = dir.join(name);
    fs::write(&path, TINY_PNG)?;
    Ok(path)
}

/// Write a file of exactly `size` bytes. The content is not a real image;
/// only the extension decides the media type.
pub fn write_sized_file(dir: &Path, name: &str, size: usize) -> Result<PathBuf> {
    let path = dir.join(name);
    fs::write(&path, vec![0u8; size])?;
    Ok(path)
}

pub fn write_text_file(dir: &Path, name: &str) -> Result<PathBuf> {
    let path = dir.join(name);
    fs::write(&path, "not an image\n")?;
    Ok(path)
}

/// Products with fixed ids and timestamps, newest first.
pub fn sample_products() -> Vec<Product> {
    let mut mug = Product::new("Mug", 9.5, None);
    mug.id = "11111111-aaaa-4000-8000-000000000001".into();
    mug.created_at = 1_700_000_002_000;

    let mut lamp = Product::new("Desk Lamp", 1234.5, None);
    lamp.id = "22222222-bbbb-4000-8000-000000000002".into();
    lamp.created_at = 1_700_000_001_000;

    let mut pie = Product::new("Apple Pie", 4.0, None);
    pie.id = "33333333-cccc-4000-8000-000000000003".into();
    pie.created_at = 1_700_000_000_000;

    vec![mug, lamp, pie]
}
