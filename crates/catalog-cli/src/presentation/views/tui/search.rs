use ratatui::{
    buffer::Buffer,
    layout::Rect,
    widgets::{Block, Borders, Paragraph, Widget},
};

use super::border_style;

pub struct SearchView<'a> {
    query: &'a str,
    active: bool,
}

impl<'a> SearchView<'a> {
    pub fn new(query: &'a str, active: bool) -> Self {
        Self { query, active }
    }
}

impl<'a> Widget for SearchView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .title("Search")
            .borders(Borders::ALL)
            .border_style(border_style(self.active));

        let text = if self.active {
            format!("{}_", self.query)
        } else {
            self.query.to_string()
        };

        Paragraph::new(text).block(block).render(area, buf);
    }
}
