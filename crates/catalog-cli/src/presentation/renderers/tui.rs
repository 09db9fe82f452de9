//! Interactive editor (`catalog ui`).
//!
//! The renderer owns the controller and all UI-only state (active pane, card
//! selection, the image path being typed, an open confirmation dialog). Every
//! frame is drawn from `present_catalog(controller.state())`.
//!
//! Image reads run on the tokio runtime. Results come back over a channel
//! tagged with their selection token and are applied on this thread, so the
//! controller is only ever touched from the event loop.

use std::io;
use std::sync::mpsc::{Receiver, Sender, channel};
use std::time::Duration;

use anyhow::Result;
use catalog_runtime::{
    AssumeNo, AssumeYes, CatalogController, ConfirmRequest, Field, PendingRead, SelectionToken,
    SubmitOutcome,
};
use catalog_store::ProductStorage;
use catalog_types::{DataUri, ImageFile, ProductId};
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::{Backend, CrosstermBackend},
    layout::{Constraint, Layout},
    widgets::ListState,
};
use tokio::runtime::Handle;
use tracing::{debug, warn};

use crate::presentation::presenters::present_catalog;
use crate::presentation::views::tui::{
    CardListView, ConfirmModalView, FormView, SearchView, StatusBarView,
};

type ReadResult = (SelectionToken, catalog_runtime::Result<DataUri>);

/// Where typed characters go.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pane {
    /// The form field is the controller's `form.focus`
    Form,
    Search,
    Cards,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum PendingAction {
    Delete(ProductId),
    ClearAll,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Modal {
    request: ConfirmRequest,
    action: PendingAction,
}

pub struct TuiRenderer<S: ProductStorage> {
    controller: CatalogController<S>,
    runtime: Handle,
    reads_tx: Sender<ReadResult>,
    reads_rx: Receiver<ReadResult>,

    pane: Pane,
    image_path: String,
    list_state: ListState,
    modal: Option<Modal>,
    should_quit: bool,
}

impl<S: ProductStorage> TuiRenderer<S> {
    pub fn new(controller: CatalogController<S>, runtime: Handle) -> Self {
        let (reads_tx, reads_rx) = channel();
        let mut list_state = ListState::default();
        if !controller.products().is_empty() {
            list_state.select(Some(0));
        }

        Self {
            controller,
            runtime,
            reads_tx,
            reads_rx,
            pane: Pane::Form,
            image_path: String::new(),
            list_state,
            modal: None,
            should_quit: false,
        }
    }

    pub fn controller(&self) -> &CatalogController<S> {
        &self.controller
    }

    /// Set up the terminal, run the event loop, and always restore the terminal.
    pub fn run(mut self) -> Result<CatalogController<S>> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        let result = self.event_loop(&mut terminal);

        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;

        result.map(|()| self.controller)
    }

    fn event_loop<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<()> {
        loop {
            self.drain_reads();
            terminal.draw(|f| self.render(f))?;

            if event::poll(Duration::from_millis(100))?
                && let Event::Key(key) = event::read()?
            {
                self.handle_key_event(key);
            }

            if self.should_quit {
                break;
            }
        }

        Ok(())
    }

    fn drain_reads(&mut self) {
        while let Ok((token, result)) = self.reads_rx.try_recv() {
            self.controller.finish_image_read(token, result);
        }
    }

    fn spawn_read(&self, pending: PendingRead) {
        let tx = self.reads_tx.clone();
        self.runtime.spawn(async move {
            let result = pending.run().await;
            // The receiver is gone only when the UI has exited.
            let _ = tx.send(result);
        });
    }

    pub fn handle_key_event(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }

        if self.modal.is_some() {
            match key.code {
                KeyCode::Char('y') | KeyCode::Char('Y') => self.resolve_modal(true),
                KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
                    self.resolve_modal(false)
                }
                _ => {}
            }
            return;
        }

        if key.modifiers.contains(KeyModifiers::CONTROL) {
            match key.code {
                KeyCode::Char('c') => self.should_quit = true,
                KeyCode::Char('t') => self.toggle_panel(),
                KeyCode::Char('d') => self.request_delete(),
                KeyCode::Char('x') => self.request_clear(),
                KeyCode::Char('r') => {
                    self.controller.reset_form();
                    self.image_path.clear();
                }
                _ => {}
            }
            return;
        }

        match key.code {
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Tab => self.cycle_focus(true),
            KeyCode::BackTab => self.cycle_focus(false),
            KeyCode::Up => self.move_selection(-1),
            KeyCode::Down => self.move_selection(1),
            KeyCode::Enter => self.handle_enter(),
            KeyCode::Backspace => self.edit(None),
            KeyCode::Char(c) => self.edit(Some(c)),
            _ => {}
        }
    }

    fn focus_order(&self) -> Vec<(Pane, Option<Field>)> {
        let mut order = Vec::new();
        if self.controller.state().panel.is_open() {
            order.extend(Field::ALL.iter().map(|f| (Pane::Form, Some(*f))));
        }
        order.push((Pane::Search, None));
        order.push((Pane::Cards, None));
        order
    }

    fn current_focus(&self) -> (Pane, Option<Field>) {
        match self.pane {
            Pane::Form => (Pane::Form, Some(self.controller.state().form.focus)),
            other => (other, None),
        }
    }

    fn cycle_focus(&mut self, forward: bool) {
        let order = self.focus_order();
        let current = self.current_focus();
        let idx = order.iter().position(|f| *f == current).unwrap_or(0);
        let next = if forward {
            (idx + 1) % order.len()
        } else {
            (idx + order.len() - 1) % order.len()
        };

        let (pane, field) = order[next];
        self.pane = pane;
        if let Some(field) = field {
            self.controller.focus(field);
        }
    }

    fn toggle_panel(&mut self) {
        let panel = self.controller.toggle_panel();
        if !panel.is_open() && self.pane == Pane::Form {
            self.pane = Pane::Search;
        }
    }

    fn edit(&mut self, ch: Option<char>) {
        fn apply(text: &str, ch: Option<char>) -> String {
            let mut text = text.to_string();
            match ch {
                Some(c) => text.push(c),
                None => {
                    text.pop();
                }
            }
            text
        }

        let state = self.controller.state();
        match self.current_focus() {
            (Pane::Form, Some(Field::Name)) => {
                let name = apply(&state.form.name, ch);
                self.controller.set_name(name);
            }
            (Pane::Form, Some(Field::Price)) => {
                let price = apply(&state.form.price, ch);
                self.controller.set_price(price);
            }
            (Pane::Form, _) => {
                self.image_path = apply(&self.image_path, ch);
            }
            (Pane::Search, _) => {
                let query = apply(&state.query, ch);
                self.controller.search(query);
                self.clamp_selection();
            }
            (Pane::Cards, _) => {}
        }
    }

    fn handle_enter(&mut self) {
        match self.current_focus() {
            (Pane::Form, Some(Field::Image)) => self.load_image(),
            (Pane::Form, _) => self.submit(),
            _ => {}
        }
    }

    fn load_image(&mut self) {
        let path = self.image_path.trim();
        if path.is_empty() {
            self.controller.select_image(None);
            return;
        }

        match ImageFile::from_path(path) {
            Ok(file) => {
                if let Some(pending) = self.controller.select_image(Some(file)) {
                    debug!(token = pending.token.value(), "starting image read");
                    self.spawn_read(pending);
                }
            }
            Err(err) => {
                warn!(path = %path, error = %err, "could not open image");
                self.controller.reject_unreadable_image();
            }
        }
    }

    fn submit(&mut self) {
        let outcome = self.runtime.block_on(self.controller.submit());
        if let SubmitOutcome::Added { .. } = outcome {
            self.image_path.clear();
            self.list_state.select(Some(0));
        }
    }

    fn selected_id(&self) -> Option<ProductId> {
        let index = self.list_state.selected()?;
        self.controller
            .visible_products()
            .get(index)
            .map(|p| p.id.clone())
    }

    fn request_delete(&mut self) {
        let Some(id) = self.selected_id() else {
            return;
        };
        let Some(product) = self.controller.products().iter().find(|p| p.id == id) else {
            return;
        };

        self.modal = Some(Modal {
            request: ConfirmRequest::DeleteProduct {
                name: product.name.clone(),
            },
            action: PendingAction::Delete(id),
        });
    }

    fn request_clear(&mut self) {
        let count = self.controller.products().len();
        if count == 0 {
            // Nothing to confirm; the controller reports AlreadyEmpty.
            self.controller.clear_all(&mut AssumeNo);
            return;
        }

        self.modal = Some(Modal {
            request: ConfirmRequest::ClearAll { count },
            action: PendingAction::ClearAll,
        });
    }

    fn resolve_modal(&mut self, approved: bool) {
        let Some(modal) = self.modal.take() else {
            return;
        };

        match (modal.action, approved) {
            (PendingAction::Delete(id), true) => {
                self.controller.delete(&id, &mut AssumeYes);
            }
            (PendingAction::Delete(id), false) => {
                self.controller.delete(&id, &mut AssumeNo);
            }
            (PendingAction::ClearAll, true) => {
                self.controller.clear_all(&mut AssumeYes);
            }
            (PendingAction::ClearAll, false) => {
                self.controller.clear_all(&mut AssumeNo);
            }
        }
        self.clamp_selection();
    }

    fn move_selection(&mut self, delta: isize) {
        let len = self.controller.visible_products().len();
        if len == 0 {
            self.list_state.select(None);
            return;
        }
        let current = self.list_state.selected().unwrap_or(0) as isize;
        let next = (current + delta).clamp(0, len as isize - 1);
        self.list_state.select(Some(next as usize));
    }

    fn clamp_selection(&mut self) {
        let len = self.controller.visible_products().len();
        match (len, self.list_state.selected()) {
            (0, _) => self.list_state.select(None),
            (_, None) => self.list_state.select(Some(0)),
            (len, Some(i)) if i >= len => self.list_state.select(Some(len - 1)),
            _ => {}
        }
    }

    pub fn render(&mut self, f: &mut Frame) {
        let model = present_catalog(self.controller.state());
        let area = f.area();

        let [search_area, main_area, status_area] = Layout::vertical([
            Constraint::Length(3),
            Constraint::Min(10),
            Constraint::Length(3),
        ])
        .areas(area);

        f.render_widget(
            SearchView::new(&model.query, self.pane == Pane::Search),
            search_area,
        );

        let cards_area = if model.panel.open {
            let [form_area, cards_area] =
                Layout::horizontal([Constraint::Percentage(40), Constraint::Percentage(60)])
                    .areas(main_area);
            let active = (self.pane == Pane::Form).then_some(model.form.focus.as_str());
            f.render_widget(FormView::new(&model, &self.image_path, active), form_area);
            cards_area
        } else {
            main_area
        };

        if model.cards.is_empty() {
            self.list_state.select(None);
        } else if let Some(i) = self.list_state.selected() {
            self.list_state.select(Some(i.min(model.cards.len() - 1)));
        }
        f.render_stateful_widget(
            CardListView::new(&model).build_list(),
            cards_area,
            &mut self.list_state,
        );

        f.render_widget(
            StatusBarView::new(model.notice.as_ref(), &model.panel.toggle_label),
            status_area,
        );

        if let Some(modal) = &self.modal {
            f.render_widget(ConfirmModalView::new(&modal.request.to_string()), area);
        }
    }
}
