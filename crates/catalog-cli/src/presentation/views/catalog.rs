use std::fmt;

use crate::presentation::formatters::{
    format_bytes, format_timestamp, format_usd, short_id, truncate,
};
use crate::presentation::view_models::{
    AddResultViewModel, AddStatus, CardViewModel, CatalogViewModel, ClearResultViewModel,
    DeleteResultViewModel, GuidanceViewModel, ImageViewModel, RemovalStatus, ViewMode,
};

pub const NO_IMAGE: &str = "No image";

/// `image/png, 1.2 KB` or the placeholder.
pub fn image_summary(image: Option<&ImageViewModel>) -> String {
    match image {
        Some(image) => format!("{}, {}", image.media_type, format_bytes(image.size_bytes)),
        None => NO_IMAGE.to_string(),
    }
}

fn write_card(f: &mut fmt::Formatter, card: &CardViewModel, mode: ViewMode) -> fmt::Result {
    match mode {
        ViewMode::Minimal => writeln!(f, "{}", card.id),
        ViewMode::Compact => writeln!(
            f,
            "{:<8}  {:<24} {:>14}  {}",
            short_id(&card.id),
            truncate(&card.name, 24),
            format_usd(card.price),
            image_summary(card.image.as_ref())
        ),
        ViewMode::Standard | ViewMode::Verbose => {
            writeln!(f, "{}  {}", card.name, format_usd(card.price))?;
            writeln!(f, "  {}", image_summary(card.image.as_ref()))?;
            writeln!(f, "  id: {}", card.id)?;
            if mode == ViewMode::Verbose {
                writeln!(f, "  added: {}", format_timestamp(card.created_at))?;
            }
            Ok(())
        }
    }
}

// --------------------------------------------------------
// Catalog
// --------------------------------------------------------

pub struct CatalogView<'a> {
    data: &'a CatalogViewModel,
    mode: ViewMode,
}

impl<'a> CatalogView<'a> {
    pub fn new(data: &'a CatalogViewModel, mode: ViewMode) -> Self {
        Self { data, mode }
    }

    fn write_header(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let query = self.data.query.trim();
        if query.is_empty() {
            writeln!(f, "Products ({})", self.data.total)
        } else {
            writeln!(
                f,
                "Products matching \"{}\" ({} of {})",
                query,
                self.data.cards.len(),
                self.data.total
            )
        }
    }
}

impl<'a> fmt::Display for CatalogView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.mode == ViewMode::Minimal {
            for card in &self.data.cards {
                write_card(f, card, self.mode)?;
            }
            return Ok(());
        }

        self.write_header(f)?;
        writeln!(f)?;

        if self.data.empty_state {
            if self.data.total == 0 {
                writeln!(f, "No products yet.")?;
            } else {
                writeln!(f, "No products match \"{}\".", self.data.query.trim())?;
            }
        } else {
            for (i, card) in self.data.cards.iter().enumerate() {
                if i > 0 && self.mode != ViewMode::Compact {
                    writeln!(f)?;
                }
                write_card(f, card, self.mode)?;
            }
        }

        if let Some(notice) = &self.data.notice {
            writeln!(f)?;
            writeln!(f, "{}", notice.message)?;
        }

        Ok(())
    }
}

// --------------------------------------------------------
// Add
// --------------------------------------------------------

pub struct AddResultView<'a> {
    data: &'a AddResultViewModel,
    mode: ViewMode,
}

impl<'a> AddResultView<'a> {
    pub fn new(data: &'a AddResultViewModel, mode: ViewMode) -> Self {
        Self { data, mode }
    }
}

impl<'a> fmt::Display for AddResultView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.data.status {
            AddStatus::Added => {
                if let Some(card) = &self.data.product {
                    write_card(f, card, self.mode)?;
                }
            }
            AddStatus::Rejected => {
                for error in &self.data.errors {
                    writeln!(f, "  {}: {}", error.field, error.message)?;
                }
            }
        }
        Ok(())
    }
}

// --------------------------------------------------------
// Delete / Clear
// --------------------------------------------------------

pub struct DeleteResultView<'a> {
    data: &'a DeleteResultViewModel,
    mode: ViewMode,
}

impl<'a> DeleteResultView<'a> {
    pub fn new(data: &'a DeleteResultViewModel, mode: ViewMode) -> Self {
        Self { data, mode }
    }
}

impl<'a> fmt::Display for DeleteResultView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match (self.data.status, self.mode) {
            (RemovalStatus::Removed, ViewMode::Minimal) => writeln!(f, "{}", self.data.id),
            (RemovalStatus::Removed, _) => {
                writeln!(f, "Remaining products: {}", self.data.remaining)
            }
            _ => writeln!(f, "Nothing was deleted."),
        }
    }
}

pub struct ClearResultView<'a> {
    data: &'a ClearResultViewModel,
}

impl<'a> ClearResultView<'a> {
    pub fn new(data: &'a ClearResultViewModel, _mode: ViewMode) -> Self {
        Self { data }
    }
}

impl<'a> fmt::Display for ClearResultView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.data.status {
            RemovalStatus::Removed => writeln!(f, "Removed {} product(s).", self.data.removed),
            RemovalStatus::Cancelled => writeln!(f, "Nothing was deleted."),
            RemovalStatus::AlreadyEmpty => Ok(()),
        }
    }
}

// --------------------------------------------------------
// Guidance
// --------------------------------------------------------

pub struct GuidanceView<'a> {
    data: &'a GuidanceViewModel,
}

impl<'a> GuidanceView<'a> {
    pub fn new(data: &'a GuidanceViewModel, _mode: ViewMode) -> Self {
        Self { data }
    }
}

impl<'a> fmt::Display for GuidanceView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "catalog - local product catalog editor")?;
        writeln!(f)?;
        writeln!(f, "Data directory: {}", self.data.data_dir)?;
        if self.data.database_exists {
            writeln!(f, "Products: {}", self.data.product_count)?;
        } else {
            writeln!(f, "No catalog yet.")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presentation::presenters::present_catalog;
    use catalog_runtime::CatalogState;
    use catalog_types::{DataUri, Product};

    fn sample_state() -> CatalogState {
        let mut mug = Product::new("Mug", 9.5, None);
        mug.id = "11111111-aaaa-4000-8000-000000000001".into();
        mug.created_at = 1_700_000_002_000;

        let mut lamp = Product::new(
            "Desk Lamp",
            1234.5,
            Some(DataUri::encode("image/png", &[0u8; 1234])),
        );
        lamp.id = "22222222-bbbb-4000-8000-000000000002".into();
        lamp.created_at = 1_700_000_001_000;

        CatalogState::new(vec![mug, lamp])
    }

    #[test]
    fn test_catalog_standard_snapshot() {
        let vm = present_catalog(&sample_state());
        let text = CatalogView::new(&vm, ViewMode::Standard).to_string();

        insta::assert_snapshot!(text, @r"
        Products (2)

        Mug  $9.50
          No image
          id: 11111111-aaaa-4000-8000-000000000001

        Desk Lamp  $1,234.50
          image/png, 1.2 KB
          id: 22222222-bbbb-4000-8000-000000000002
        ");
    }

    #[test]
    fn test_catalog_minimal_prints_ids_only() {
        let vm = present_catalog(&sample_state());
        let text = CatalogView::new(&vm, ViewMode::Minimal).to_string();

        assert_eq!(
            text,
            "11111111-aaaa-4000-8000-000000000001\n22222222-bbbb-4000-8000-000000000002\n"
        );
    }

    #[test]
    fn test_catalog_compact_one_line_per_card() {
        let vm = present_catalog(&sample_state());
        let text = CatalogView::new(&vm, ViewMode::Compact).to_string();

        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 4);
        assert!(lines[2].starts_with("11111111  Mug"));
        assert!(lines[3].contains("$1,234.50"));
    }

    #[test]
    fn test_catalog_verbose_shows_timestamps() {
        let vm = present_catalog(&sample_state());
        let text = CatalogView::new(&vm, ViewMode::Verbose).to_string();

        assert!(text.contains("added: 2023-11-14 22:13:22 UTC"));
    }

    #[test]
    fn test_empty_states() {
        let vm = present_catalog(&CatalogState::default());
        let text = CatalogView::new(&vm, ViewMode::Standard).to_string();
        assert!(text.contains("No products yet."));

        let mut state = sample_state();
        state.query = "xyz".to_string();
        let vm = present_catalog(&state);
        let text = CatalogView::new(&vm, ViewMode::Standard).to_string();
        assert!(text.starts_with("Products matching \"xyz\" (0 of 2)"));
        assert!(text.contains("No products match \"xyz\"."));
    }
}
