//! Event handlers for the catalog editor.
//!
//! Each public method is one user action. Handlers run to completion against
//! `CatalogState`; the only suspension point is the image read inside
//! `submit`, and the controller is borrowed mutably across it, so no other
//! handler can interleave.

use catalog_store::{ProductStorage, list};
use catalog_types::{DataUri, ImageFile, Product, ProductId};
use tracing::{debug, error, info, warn};

use crate::config::Config;
use crate::confirm::{Confirm, ConfirmRequest};
use crate::ingest::{PendingRead, SelectionToken, read_data_uri};
use crate::state::{CatalogState, Field, FormState, ImageSelection, Notice, PanelState};
use crate::validate::{FormError, validate_form, validate_image};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Validation or image ingestion failed; see the field errors
    Rejected,
    Added { id: ProductId, persisted: bool },
}

#[derive(Debug, Clone, PartialEq)]
pub enum DeleteOutcome {
    NotFound,
    Cancelled,
    Deleted { product: Product, persisted: bool },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClearOutcome {
    AlreadyEmpty,
    Cancelled,
    Cleared { removed: usize, persisted: bool },
}

pub struct CatalogController<S: ProductStorage> {
    storage: S,
    state: CatalogState,
    max_image_bytes: u64,
    last_token: u64,
}

impl<S: ProductStorage> CatalogController<S> {
    /// Load the persisted catalog once and start in the idle state.
    pub fn new(storage: S, config: &Config) -> Self {
        let products = storage.load();
        info!(count = products.len(), "catalog loaded");

        Self {
            storage,
            state: CatalogState::new(products),
            max_image_bytes: config.max_image_bytes,
            last_token: 0,
        }
    }

    pub fn state(&self) -> &CatalogState {
        &self.state
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn products(&self) -> &[Product] {
        &self.state.products
    }

    pub fn visible_products(&self) -> Vec<&Product> {
        self.state.visible_products()
    }

    /// Resolve a full id or unique id prefix to a product id.
    pub fn resolve_id(&self, id_or_prefix: &str) -> Option<ProductId> {
        list::find_by_prefix(&self.state.products, id_or_prefix).map(|p| p.id.clone())
    }

    pub fn toggle_panel(&mut self) -> PanelState {
        self.state.panel = self.state.panel.toggled();
        debug!(open = self.state.panel.is_open(), "panel toggled");
        self.state.panel
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.state.form.name = name.into();
    }

    pub fn set_price(&mut self, price: impl Into<String>) {
        self.state.form.price = price.into();
    }

    pub fn focus(&mut self, field: Field) {
        self.state.form.focus = field;
    }

    /// Live search. Only changes what is shown, never the stored list.
    pub fn search(&mut self, query: impl Into<String>) {
        self.state.query = query.into();
    }

    /// Handle a change of the file input.
    ///
    /// Returns the read to perform when the file is acceptable. A rejected
    /// file clears the selection and the preview.
    pub fn select_image(&mut self, file: Option<ImageFile>) -> Option<PendingRead> {
        self.state.errors.clear(Field::Image);

        let Some(file) = file else {
            self.state.form.image = None;
            return None;
        };

        if let Err(err) = validate_image(&file, self.max_image_bytes) {
            debug!(file = %file.name, error = %err, "image rejected");
            self.state.errors.set(err);
            self.state.form.image = None;
            return None;
        }

        self.last_token += 1;
        let token = SelectionToken(self.last_token);
        self.state.form.image = Some(ImageSelection {
            token,
            file: file.clone(),
            payload: None,
        });

        Some(PendingRead { token, file })
    }

    /// The chosen file could not even be opened (e.g. a mistyped path).
    pub fn reject_unreadable_image(&mut self) {
        self.state.form.image = None;
        self.state.errors.set(FormError::ReadError);
    }

    /// Submit with a file that could not be opened.
    ///
    /// Name and price are still validated so their errors are reported
    /// alongside the image read error.
    pub fn submit_unreadable_image(&mut self) -> SubmitOutcome {
        self.state.errors.clear_all();
        self.state.notice = None;
        self.state.form.image = None;

        let form = &self.state.form;
        if let Err(errors) = validate_form(&form.name, &form.price, None, self.max_image_bytes) {
            self.state.errors = errors;
        }
        self.state.errors.set(FormError::ReadError);

        debug!(failed = self.state.errors.len(), "submission rejected");
        SubmitOutcome::Rejected
    }

    /// Apply a finished read. Returns false when a newer selection superseded it.
    pub fn finish_image_read(
        &mut self,
        token: SelectionToken,
        result: crate::Result<DataUri>,
    ) -> bool {
        let current = self.state.form.image.as_ref().map(|s| s.token);
        if current != Some(token) {
            debug!(token = token.value(), "discarding stale image read");
            return false;
        }

        match result {
            Ok(payload) => {
                if let Some(selection) = self.state.form.image.as_mut() {
                    selection.payload = Some(payload);
                }
            }
            Err(err) => {
                warn!(error = %err, "image read failed");
                self.state.form.image = None;
                self.state.errors.set(FormError::ReadError);
            }
        }
        true
    }

    /// Validate the form and, if everything passes, add the product.
    pub async fn submit(&mut self) -> SubmitOutcome {
        self.state.errors.clear_all();
        self.state.notice = None;

        let form = &self.state.form;
        let selected = form.image.as_ref().map(|s| &s.file);
        let input = match validate_form(&form.name, &form.price, selected, self.max_image_bytes) {
            Ok(input) => input,
            Err(errors) => {
                debug!(failed = errors.len(), "submission rejected");
                self.state.errors = errors;
                return SubmitOutcome::Rejected;
            }
        };

        let cached = form
            .image
            .as_ref()
            .map(|s| (s.payload.clone(), s.file.clone()));
        let image = match cached {
            None => None,
            Some((Some(payload), _)) => Some(payload),
            Some((None, file)) => match read_data_uri(&file).await {
                Ok(payload) => Some(payload),
                Err(err) => {
                    warn!(file = %file.name, error = %err, "image read failed during submit");
                    self.state.errors.set(FormError::ReadError);
                    return SubmitOutcome::Rejected;
                }
            },
        };

        let product = Product::new(input.name, input.price, image);
        let id = product.id.clone();
        info!(id = %id, name = %product.name, price = product.price, "product added");

        self.state.products = list::add(&self.state.products, product);
        let persisted = self.persist_products();

        self.state.query.clear();
        self.state.form = FormState::default();

        SubmitOutcome::Added { id, persisted }
    }

    /// Submit with a file chosen at the same moment, as a one-shot form post.
    ///
    /// The file is validated together with name and price instead of on
    /// selection, so every failing field is reported at once.
    pub async fn submit_with_file(&mut self, file: ImageFile) -> SubmitOutcome {
        self.last_token += 1;
        self.state.form.image = Some(ImageSelection {
            token: SelectionToken(self.last_token),
            file,
            payload: None,
        });

        let outcome = self.submit().await;
        if outcome == SubmitOutcome::Rejected && self.state.errors.get(Field::Image).is_some() {
            self.state.form.image = None;
        }
        outcome
    }

    /// Reset every form field, the preview, and all field errors.
    pub fn reset_form(&mut self) {
        self.state.form = FormState::default();
        self.state.errors.clear_all();
    }

    /// Remove one product after the user confirms.
    pub fn delete(&mut self, id: &ProductId, confirm: &mut dyn Confirm) -> DeleteOutcome {
        let Some(product) = list::find(&self.state.products, id).cloned() else {
            debug!(id = %id, "delete requested for unknown product");
            return DeleteOutcome::NotFound;
        };

        let request = ConfirmRequest::DeleteProduct {
            name: product.name.clone(),
        };
        self.state.notice = None;
        if !confirm.confirm(&request) {
            debug!(id = %id, "delete cancelled");
            self.state.notice = Some(Notice::info("Delete cancelled"));
            return DeleteOutcome::Cancelled;
        }

        self.state.products = list::remove(&self.state.products, id);
        let persisted = self.persist_products();
        self.state.query.clear();

        info!(id = %id, name = %product.name, "product deleted");
        DeleteOutcome::Deleted { product, persisted }
    }

    /// Remove every product after the user confirms. No-op on an empty list.
    pub fn clear_all(&mut self, confirm: &mut dyn Confirm) -> ClearOutcome {
        if self.state.products.is_empty() {
            return ClearOutcome::AlreadyEmpty;
        }

        let removed = self.state.products.len();
        self.state.notice = None;
        if !confirm.confirm(&ConfirmRequest::ClearAll { count: removed }) {
            debug!("clear all cancelled");
            self.state.notice = Some(Notice::info("Clear cancelled"));
            return ClearOutcome::Cancelled;
        }

        self.state.products = list::clear();
        let result = self.storage.clear();
        let persisted = self.record_write(result);
        self.state.query.clear();

        info!(removed, "all products cleared");
        ClearOutcome::Cleared { removed, persisted }
    }

    fn persist_products(&mut self) -> bool {
        let result = self.storage.save(&self.state.products);
        self.record_write(result)
    }

    // The in-memory list stays authoritative when a write fails; the failure
    // is surfaced as a notice instead.
    fn record_write(&mut self, result: catalog_store::Result<()>) -> bool {
        match result {
            Ok(()) => true,
            Err(err) => {
                error!(error = %err, "failed to save products");
                self.state.notice = Some(Notice::error(format!(
                    "Changes could not be saved: {}",
                    err
                )));
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_MAX_IMAGE_BYTES;
    use crate::confirm::{AssumeNo, AssumeYes};
    use crate::state::NoticeLevel;
    use catalog_store::MemoryStorage;
    use catalog_types::ImageSource;

    /// Answers with a fixed value and records every prompt.
    struct RecordingConfirm {
        answer: bool,
        asked: Vec<String>,
    }

    impl RecordingConfirm {
        fn answering(answer: bool) -> Self {
            Self {
                answer,
                asked: Vec::new(),
            }
        }
    }

    impl Confirm for RecordingConfirm {
        fn confirm(&mut self, request: &ConfirmRequest) -> bool {
            self.asked.push(request.to_string());
            self.answer
        }
    }

    fn controller() -> CatalogController<MemoryStorage> {
        CatalogController::new(MemoryStorage::new(), &Config::default())
    }

    fn png(size: usize) -> ImageFile {
        ImageFile::from_bytes("pic.png", "image/png", vec![0u8; size])
    }

    async fn add(ctl: &mut CatalogController<MemoryStorage>, name: &str, price: &str) -> ProductId {
        ctl.set_name(name);
        ctl.set_price(price);
        match ctl.submit().await {
            SubmitOutcome::Added { id, .. } => id,
            SubmitOutcome::Rejected => panic!("expected {} to be added", name),
        }
    }

    #[tokio::test]
    async fn test_submit_prepends_and_persists() {
        let mut ctl = controller();
        add(&mut ctl, "First", "1").await;

        ctl.set_name("  Mug  ");
        ctl.set_price("9.5");
        ctl.focus(Field::Price);
        let outcome = ctl.submit().await;

        let SubmitOutcome::Added { id, persisted } = outcome else {
            panic!("expected product to be added");
        };
        assert!(persisted);
        assert_eq!(ctl.products().len(), 2);
        assert_eq!(ctl.products()[0].id, id);
        assert_eq!(ctl.products()[0].name, "Mug");
        assert_eq!(ctl.products()[0].price, 9.5);

        let stored = ctl.storage().load();
        assert_eq!(stored, ctl.products());
    }

    #[tokio::test]
    async fn test_submit_resets_form_and_focus() {
        let mut ctl = controller();
        ctl.focus(Field::Price);
        ctl.search("zzz");
        add(&mut ctl, "Mug", "9.5").await;

        let state = ctl.state();
        assert_eq!(state.form, FormState::default());
        assert_eq!(state.form.focus, Field::Name);
        assert!(state.query.is_empty());
        assert_eq!(ctl.visible_products().len(), 1);
    }

    #[tokio::test]
    async fn test_submit_rounds_price() {
        let mut ctl = controller();
        add(&mut ctl, "A", "19.995").await;
        add(&mut ctl, "B", "9.999").await;

        assert_eq!(ctl.products()[1].price, 20.0);
        assert_eq!(ctl.products()[0].price, 10.0);
    }

    #[tokio::test]
    async fn test_invalid_price_leaves_list_unchanged() {
        let mut ctl = controller();
        add(&mut ctl, "Keep", "1").await;
        let writes = ctl.storage().writes();

        for raw in ["", "abc", "-3"] {
            ctl.set_name("Mug");
            ctl.set_price(raw);
            assert_eq!(ctl.submit().await, SubmitOutcome::Rejected);
            assert_eq!(
                ctl.state().errors.get(Field::Price),
                Some(FormError::InvalidPrice)
            );
        }

        assert_eq!(ctl.products().len(), 1);
        assert_eq!(ctl.storage().writes(), writes);
        assert_eq!(ctl.state().form.name, "Mug");
    }

    #[tokio::test]
    async fn test_errors_reflect_only_current_attempt() {
        let mut ctl = controller();

        ctl.set_price("oops");
        assert_eq!(ctl.submit().await, SubmitOutcome::Rejected);
        assert_eq!(ctl.state().errors.len(), 2);

        ctl.set_name("Mug");
        assert_eq!(ctl.submit().await, SubmitOutcome::Rejected);
        assert_eq!(ctl.state().errors.get(Field::Name), None);
        assert_eq!(
            ctl.state().errors.get(Field::Price),
            Some(FormError::InvalidPrice)
        );
    }

    #[tokio::test]
    async fn test_submit_uses_read_preview() {
        let mut ctl = controller();
        let pending = ctl.select_image(Some(png(4))).unwrap();
        let (token, result) = pending.run().await;
        assert!(ctl.finish_image_read(token, result));
        let preview = ctl.state().form.preview().cloned().unwrap();

        add(&mut ctl, "Poster", "12").await;

        assert_eq!(ctl.products()[0].image.as_ref(), Some(&preview));
        assert!(ctl.state().form.preview().is_none());
    }

    #[tokio::test]
    async fn test_submit_reads_image_not_yet_previewed() {
        let mut ctl = controller();
        ctl.select_image(Some(png(3))).unwrap();

        add(&mut ctl, "Poster", "12").await;

        let image = ctl.products()[0].image.clone().unwrap();
        assert_eq!(image.as_str(), "data:image/png;base64,AAAA");
    }

    #[tokio::test]
    async fn test_submit_with_unreadable_image_is_rejected() {
        let mut ctl = controller();
        ctl.select_image(Some(ImageFile {
            name: "gone.png".to_string(),
            media_type: "image/png".to_string(),
            size: 10,
            source: ImageSource::Path("/nonexistent/gone.png".into()),
        }));
        ctl.set_name("Poster");
        ctl.set_price("12");

        assert_eq!(ctl.submit().await, SubmitOutcome::Rejected);
        assert_eq!(
            ctl.state().errors.get(Field::Image),
            Some(FormError::ReadError)
        );
        assert!(ctl.products().is_empty());
    }

    #[tokio::test]
    async fn test_submit_with_file_reports_all_fields() {
        let mut ctl = controller();
        ctl.set_price("-1");

        let text = ImageFile::from_bytes("notes.txt", "text/plain", b"hi".to_vec());
        assert_eq!(ctl.submit_with_file(text).await, SubmitOutcome::Rejected);

        let errors = &ctl.state().errors;
        assert_eq!(errors.get(Field::Name), Some(FormError::EmptyName));
        assert_eq!(errors.get(Field::Price), Some(FormError::InvalidPrice));
        assert_eq!(errors.get(Field::Image), Some(FormError::NotAnImage));
        assert!(ctl.state().form.image.is_none());
    }

    #[tokio::test]
    async fn test_submit_with_file_embeds_image() {
        let mut ctl = controller();
        ctl.set_name("Poster");
        ctl.set_price("12");

        let outcome = ctl.submit_with_file(png(3)).await;

        assert!(matches!(outcome, SubmitOutcome::Added { .. }));
        assert!(ctl.products()[0].image.is_some());
    }

    #[test]
    fn test_select_rejects_non_image() {
        let mut ctl = controller();
        ctl.select_image(Some(png(1)));

        let pending = ctl.select_image(Some(ImageFile::from_bytes(
            "notes.txt",
            "text/plain",
            b"hi".to_vec(),
        )));

        assert!(pending.is_none());
        assert!(ctl.state().form.image.is_none());
        assert_eq!(
            ctl.state().errors.get(Field::Image),
            Some(FormError::NotAnImage)
        );
    }

    #[test]
    fn test_select_enforces_size_limit() {
        let mut ctl = controller();
        let limit = DEFAULT_MAX_IMAGE_BYTES as usize;

        assert!(ctl.select_image(Some(png(limit + 1))).is_none());
        assert_eq!(
            ctl.state().errors.get(Field::Image),
            Some(FormError::ImageTooLarge)
        );

        assert!(ctl.select_image(Some(png(limit))).is_some());
        assert_eq!(ctl.state().errors.get(Field::Image), None);
    }

    #[test]
    fn test_clearing_selection_clears_preview() {
        let mut ctl = controller();
        let pending = ctl.select_image(Some(png(1))).unwrap();
        ctl.finish_image_read(pending.token, Ok(DataUri::encode("image/png", &[0])));
        assert!(ctl.state().form.preview().is_some());

        assert!(ctl.select_image(None).is_none());
        assert!(ctl.state().form.preview().is_none());
    }

    #[test]
    fn test_stale_read_does_not_overwrite_newer_selection() {
        let mut ctl = controller();
        let first = ctl.select_image(Some(png(1))).unwrap();
        let second = ctl.select_image(Some(png(2))).unwrap();
        assert!(second.token > first.token);

        let newer = DataUri::encode("image/png", &[2, 2]);
        assert!(ctl.finish_image_read(second.token, Ok(newer.clone())));
        assert!(!ctl.finish_image_read(first.token, Ok(DataUri::encode("image/png", &[1]))));

        assert_eq!(ctl.state().form.preview(), Some(&newer));
    }

    #[test]
    fn test_failed_read_clears_selection() {
        let mut ctl = controller();
        let pending = ctl.select_image(Some(png(1))).unwrap();

        let failure = crate::Error::ImageRead(std::io::Error::other("disk gone"));
        assert!(ctl.finish_image_read(pending.token, Err(failure)));

        assert!(ctl.state().form.image.is_none());
        assert_eq!(
            ctl.state().errors.get(Field::Image),
            Some(FormError::ReadError)
        );
    }

    #[test]
    fn test_unreadable_image_sets_read_error() {
        let mut ctl = controller();
        ctl.select_image(Some(png(1)));

        ctl.reject_unreadable_image();

        assert!(ctl.state().form.image.is_none());
        assert_eq!(
            ctl.state().errors.get(Field::Image),
            Some(FormError::ReadError)
        );
    }

    #[test]
    fn test_unopenable_file_still_validates_other_fields() {
        let mut ctl = controller();
        ctl.set_name("  ");
        ctl.set_price("-1");

        assert_eq!(ctl.submit_unreadable_image(), SubmitOutcome::Rejected);

        let errors = &ctl.state().errors;
        assert_eq!(errors.len(), 3);
        assert_eq!(errors.get(Field::Name), Some(FormError::EmptyName));
        assert_eq!(errors.get(Field::Price), Some(FormError::InvalidPrice));
        assert_eq!(errors.get(Field::Image), Some(FormError::ReadError));
        assert!(ctl.products().is_empty());
        assert_eq!(ctl.storage().writes(), 0);
    }

    #[test]
    fn test_unopenable_file_with_valid_fields_reports_only_image() {
        let mut ctl = controller();
        ctl.set_name("Mug");
        ctl.set_price("9.5");

        assert_eq!(ctl.submit_unreadable_image(), SubmitOutcome::Rejected);

        let fields: Vec<Field> = ctl.state().errors.iter().map(|(f, _)| f).collect();
        assert_eq!(fields, vec![Field::Image]);
        assert!(ctl.products().is_empty());
    }

    #[test]
    fn test_reset_form_clears_fields_errors_and_preview() {
        let mut ctl = controller();
        ctl.set_name("Half typed");
        ctl.select_image(Some(ImageFile::from_bytes("a.txt", "text/plain", vec![])));
        ctl.select_image(Some(png(1)));
        ctl.focus(Field::Image);

        ctl.reset_form();

        assert_eq!(ctl.state().form, FormState::default());
        assert!(ctl.state().errors.is_empty());
    }

    #[tokio::test]
    async fn test_delete_requires_confirmation() {
        let mut ctl = controller();
        let id = add(&mut ctl, "Mug", "9.5").await;

        let mut confirm = RecordingConfirm::answering(false);
        assert_eq!(ctl.delete(&id, &mut confirm), DeleteOutcome::Cancelled);
        assert_eq!(confirm.asked, vec!["Delete \"Mug\"?".to_string()]);
        assert_eq!(ctl.products().len(), 1);
        assert_eq!(ctl.state().notice, Some(Notice::info("Delete cancelled")));

        let outcome = ctl.delete(&id, &mut AssumeYes);
        let DeleteOutcome::Deleted { product, persisted } = outcome else {
            panic!("expected delete");
        };
        assert_eq!(product.name, "Mug");
        assert!(persisted);
        assert!(ctl.products().is_empty());
        assert!(ctl.storage().load().is_empty());
    }

    #[tokio::test]
    async fn test_delete_unknown_id_does_not_prompt() {
        let mut ctl = controller();
        add(&mut ctl, "Mug", "9.5").await;

        let mut confirm = RecordingConfirm::answering(true);
        let outcome = ctl.delete(&ProductId::new("missing"), &mut confirm);

        assert_eq!(outcome, DeleteOutcome::NotFound);
        assert!(confirm.asked.is_empty());
        assert_eq!(ctl.products().len(), 1);
    }

    #[tokio::test]
    async fn test_delete_keeps_other_products() {
        let mut ctl = controller();
        let a = add(&mut ctl, "A", "1").await;
        let b = add(&mut ctl, "B", "2").await;
        let c = add(&mut ctl, "C", "3").await;

        ctl.delete(&b, &mut AssumeYes);

        let ids: Vec<&ProductId> = ctl.products().iter().map(|p| &p.id).collect();
        assert_eq!(ids, vec![&c, &a]);
    }

    #[test]
    fn test_clear_all_on_empty_list_is_noop() {
        let mut ctl = controller();
        let mut confirm = RecordingConfirm::answering(true);

        assert_eq!(ctl.clear_all(&mut confirm), ClearOutcome::AlreadyEmpty);
        assert!(confirm.asked.is_empty());
        assert_eq!(ctl.storage().writes(), 0);
    }

    #[tokio::test]
    async fn test_clear_all_requires_confirmation() {
        let mut ctl = controller();
        add(&mut ctl, "A", "1").await;
        add(&mut ctl, "B", "2").await;

        assert_eq!(ctl.clear_all(&mut AssumeNo), ClearOutcome::Cancelled);
        assert_eq!(ctl.products().len(), 2);
        let notice = ctl.state().notice.clone().unwrap();
        assert_eq!(notice.level, NoticeLevel::Info);
        assert_eq!(notice.message, "Clear cancelled");

        let mut confirm = RecordingConfirm::answering(true);
        assert_eq!(
            ctl.clear_all(&mut confirm),
            ClearOutcome::Cleared {
                removed: 2,
                persisted: true
            }
        );
        assert_eq!(
            confirm.asked,
            vec!["Delete ALL products? This cannot be undone.".to_string()]
        );
        assert!(ctl.products().is_empty());
        assert!(ctl.storage().load().is_empty());
    }

    #[tokio::test]
    async fn test_search_is_view_only() {
        let mut ctl = controller();
        add(&mut ctl, "apricot", "1").await;
        add(&mut ctl, "Apple Pie", "2").await;
        add(&mut ctl, "Bread", "3").await;
        let writes = ctl.storage().writes();

        ctl.search("AP");
        assert_eq!(ctl.visible_products().len(), 2);

        ctl.search("XYZ");
        assert!(ctl.visible_products().is_empty());

        ctl.search("");
        assert_eq!(ctl.visible_products().len(), 3);

        assert_eq!(ctl.products().len(), 3);
        assert_eq!(ctl.storage().writes(), writes);
    }

    #[tokio::test]
    async fn test_write_failure_is_surfaced() {
        let mut ctl = CatalogController::new(
            MemoryStorage::new().failing_writes(),
            &Config::default(),
        );

        ctl.set_name("Mug");
        ctl.set_price("9.5");
        let outcome = ctl.submit().await;

        assert!(matches!(
            outcome,
            SubmitOutcome::Added {
                persisted: false,
                ..
            }
        ));
        assert_eq!(ctl.products().len(), 1);
        let notice = ctl.state().notice.clone().unwrap();
        assert_eq!(notice.level, NoticeLevel::Error);
        assert!(notice.message.starts_with("Changes could not be saved"));

        let outcome = ctl.clear_all(&mut AssumeYes);
        assert_eq!(
            outcome,
            ClearOutcome::Cleared {
                removed: 1,
                persisted: false
            }
        );
    }

    #[test]
    fn test_loads_existing_products_on_start() {
        let raw = r#"[{"id":"abc-1","name":"Mug","price":9.5,"image":null,"createdAt":1}]"#;
        let ctl = CatalogController::new(MemoryStorage::with_raw(raw), &Config::default());

        assert_eq!(ctl.products().len(), 1);
        assert_eq!(ctl.resolve_id("abc"), Some(ProductId::new("abc-1")));
        assert_eq!(ctl.resolve_id("zzz"), None);
    }

    #[test]
    fn test_toggle_panel() {
        let mut ctl = controller();
        assert_eq!(ctl.toggle_panel(), PanelState::Closed);
        assert_eq!(ctl.state().panel.toggle_label(), "Show add product");
        assert_eq!(ctl.toggle_panel(), PanelState::Open);
    }
}
