use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget, Wrap},
};

/// Centered yes/no dialog drawn over the screen.
pub struct ConfirmModalView<'a> {
    prompt: &'a str,
}

impl<'a> ConfirmModalView<'a> {
    pub fn new(prompt: &'a str) -> Self {
        Self { prompt }
    }
}

fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let [_, row, _] = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(height),
        Constraint::Fill(1),
    ])
    .areas(area);
    let [_, cell, _] = Layout::horizontal([
        Constraint::Fill(1),
        Constraint::Length(width),
        Constraint::Fill(1),
    ])
    .areas(row);
    cell
}

impl<'a> Widget for ConfirmModalView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let area = centered(area, 50.min(area.width), 6.min(area.height));
        Clear.render(area, buf);

        let lines = vec![
            Line::from(Span::styled(
                self.prompt.to_string(),
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(vec![
                Span::styled("[y]", Style::default().fg(Color::Yellow)),
                Span::raw("es  "),
                Span::styled("[n]", Style::default().fg(Color::Yellow)),
                Span::raw("o"),
            ]),
        ];

        Paragraph::new(lines)
            .wrap(Wrap { trim: true })
            .block(
                Block::default()
                    .title("Confirm")
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Red)),
            )
            .render(area, buf);
    }
}
