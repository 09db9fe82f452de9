use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use crate::presentation::formatters::format_bytes;
use crate::presentation::view_models::{CatalogViewModel, FieldErrorViewModel};

use super::border_style;

/// Add-product panel: three inputs, their error slots, and the preview.
pub struct FormView<'a> {
    model: &'a CatalogViewModel,
    image_path: &'a str,
    /// Field name with keyboard focus, if the form is active
    active: Option<&'a str>,
}

impl<'a> FormView<'a> {
    pub fn new(model: &'a CatalogViewModel, image_path: &'a str, active: Option<&'a str>) -> Self {
        Self {
            model,
            image_path,
            active,
        }
    }

    fn error_for(&self, field: &str) -> Option<&FieldErrorViewModel> {
        self.model.errors.iter().find(|e| e.field == field)
    }

    fn render_input(&self, field: &str, label: &str, value: &str, area: Rect, buf: &mut Buffer) {
        let active = self.active == Some(field);
        let block = Block::default()
            .title(label.to_string())
            .borders(Borders::ALL)
            .border_style(border_style(active));

        let mut lines = vec![Line::from(if active {
            format!("{}_", value)
        } else {
            value.to_string()
        })];
        if let Some(error) = self.error_for(field) {
            lines.push(Line::from(Span::styled(
                error.message.clone(),
                Style::default().fg(Color::Red),
            )));
        }

        Paragraph::new(lines).block(block).render(area, buf);
    }
}

impl<'a> Widget for FormView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .title("Add product")
            .borders(Borders::ALL);
        let inner = block.inner(area);
        block.render(area, buf);

        let rows = Layout::vertical([
            Constraint::Length(4),
            Constraint::Length(4),
            Constraint::Length(4),
            Constraint::Min(3),
        ])
        .split(inner);

        let form = &self.model.form;
        self.render_input("name", "Name", &form.name, rows[0], buf);
        self.render_input("price", "Price", &form.price, rows[1], buf);
        self.render_input("image", "Image path (Enter to load)", self.image_path, rows[2], buf);

        let preview = &form.preview;
        let line = match (&preview.image, preview.loading) {
            (Some(image), _) => Line::from(vec![
                Span::styled(
                    form.image_name.clone().unwrap_or_default(),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
                Span::raw(format!(
                    "  {}, {}",
                    image.media_type,
                    format_bytes(image.size_bytes)
                )),
            ]),
            (None, true) => Line::from(Span::styled(
                "Reading image...",
                Style::default().fg(Color::Yellow),
            )),
            (None, false) => Line::from(Span::styled(
                preview.caption.clone().unwrap_or_default(),
                Style::default().add_modifier(Modifier::DIM),
            )),
        };

        Paragraph::new(line)
            .block(Block::default().title("Preview").borders(Borders::ALL))
            .render(rows[3], buf);
    }
}
