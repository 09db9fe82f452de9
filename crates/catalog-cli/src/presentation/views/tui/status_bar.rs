use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use crate::presentation::view_models::NoticeViewModel;

use super::status_level_to_color;

pub struct StatusBarView<'a> {
    notice: Option<&'a NoticeViewModel>,
    toggle_label: &'a str,
}

impl<'a> StatusBarView<'a> {
    pub fn new(notice: Option<&'a NoticeViewModel>, toggle_label: &'a str) -> Self {
        Self {
            notice,
            toggle_label,
        }
    }
}

fn key(label: &str) -> Span<'static> {
    Span::styled(label.to_string(), Style::default().fg(Color::Yellow))
}

impl<'a> Widget for StatusBarView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default().borders(Borders::ALL);
        let inner = block.inner(area);
        block.render(area, buf);

        let chunks = Layout::horizontal([Constraint::Percentage(40), Constraint::Percentage(60)])
            .split(inner);

        if let Some(notice) = self.notice {
            Paragraph::new(Span::styled(
                notice.message.clone(),
                Style::default().fg(status_level_to_color(notice.level)),
            ))
            .render(chunks[0], buf);
        }

        let help = Line::from(vec![
            key("[Tab]"),
            Span::raw(" field "),
            key("[Enter]"),
            Span::raw(" add "),
            key("[^T]"),
            Span::raw(format!(" {} ", self.toggle_label)),
            key("[^D]"),
            Span::raw(" delete "),
            key("[^X]"),
            Span::raw(" clear "),
            key("[Esc]"),
            Span::raw(" quit"),
        ]);
        Paragraph::new(help).render(chunks[1], buf);
    }
}
