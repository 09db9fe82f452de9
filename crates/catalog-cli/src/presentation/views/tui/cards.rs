use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
};

use crate::presentation::formatters::format_usd;
use crate::presentation::view_models::CatalogViewModel;
use crate::presentation::views::catalog::image_summary;

pub struct CardListView<'a> {
    model: &'a CatalogViewModel,
}

impl<'a> CardListView<'a> {
    pub fn new(model: &'a CatalogViewModel) -> Self {
        Self { model }
    }

    /// Build the list for stateful rendering with the renderer's `ListState`.
    pub fn build_list(self) -> List<'static> {
        let title = if self.model.query.trim().is_empty() {
            format!("Products ({})", self.model.total)
        } else {
            format!("Products ({}/{})", self.model.cards.len(), self.model.total)
        };
        let block = Block::default().title(title).borders(Borders::ALL);

        if self.model.empty_state {
            let message = if self.model.total == 0 {
                "No products yet."
            } else {
                "No products match your search."
            };
            let item = ListItem::new(Line::from(Span::styled(
                message,
                Style::default().add_modifier(Modifier::DIM),
            )));
            return List::new(vec![item]).block(block);
        }

        let items: Vec<ListItem<'static>> = self
            .model
            .cards
            .iter()
            .map(|card| {
                let image_style = if card.image.is_some() {
                    Style::default().fg(Color::Cyan)
                } else {
                    Style::default().add_modifier(Modifier::DIM)
                };

                ListItem::new(vec![
                    Line::from(vec![
                        Span::styled(
                            card.name.clone(),
                            Style::default().add_modifier(Modifier::BOLD),
                        ),
                        Span::raw("  "),
                        Span::styled(format_usd(card.price), Style::default().fg(Color::Green)),
                    ]),
                    Line::from(Span::styled(
                        format!("  {}", image_summary(card.image.as_ref())),
                        image_style,
                    )),
                ])
            })
            .collect();

        List::new(items)
            .block(block)
            .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
    }
}
