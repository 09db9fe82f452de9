use catalog_runtime::{
    CatalogState, ClearOutcome, DeleteOutcome, FieldErrors, FormState, SubmitOutcome,
};
use catalog_types::{DataUri, Product};

use crate::presentation::view_models::{
    AddResultViewModel, AddStatus, CardViewModel, CatalogViewModel, ClearResultViewModel,
    CommandResultViewModel, DeleteResultViewModel, FieldErrorViewModel, FormViewModel, Guidance,
    GuidanceViewModel, ImageViewModel, NoticeViewModel, PanelViewModel, PreviewViewModel,
    RemovalStatus, StatusBadge,
};

pub const NO_IMAGE_SELECTED: &str = "No image selected";

/// Project the whole application state into what the screen shows.
pub fn present_catalog(state: &CatalogState) -> CatalogViewModel {
    let cards: Vec<CardViewModel> = state
        .visible_products()
        .into_iter()
        .map(present_card)
        .collect();

    CatalogViewModel {
        query: state.query.clone(),
        total: state.products.len(),
        empty_state: cards.is_empty(),
        cards,
        panel: PanelViewModel {
            open: state.panel.is_open(),
            toggle_label: state.panel.toggle_label().to_string(),
            aria_expanded: state.panel.is_open(),
        },
        form: present_form(&state.form),
        errors: present_errors(&state.errors),
        notice: state.notice.as_ref().map(|n| NoticeViewModel {
            level: n.level.into(),
            message: n.message.clone(),
        }),
    }
}

pub fn present_card(product: &Product) -> CardViewModel {
    CardViewModel {
        id: product.id.to_string(),
        name: product.name.clone(),
        price: product.price,
        created_at: product.created_at,
        image: product.image.as_ref().map(present_image),
    }
}

fn present_image(uri: &DataUri) -> ImageViewModel {
    ImageViewModel {
        media_type: uri
            .media_type()
            .unwrap_or("application/octet-stream")
            .to_string(),
        size_bytes: uri.payload_len(),
        data_uri: uri.as_str().to_string(),
    }
}

fn present_form(form: &FormState) -> FormViewModel {
    let preview = match &form.image {
        None => PreviewViewModel {
            image: None,
            caption: Some(NO_IMAGE_SELECTED.to_string()),
            loading: false,
        },
        Some(selection) => PreviewViewModel {
            image: selection.payload.as_ref().map(present_image),
            caption: None,
            loading: selection.payload.is_none(),
        },
    };

    FormViewModel {
        name: form.name.clone(),
        price: form.price.clone(),
        focus: form.focus.as_str().to_string(),
        image_name: form.image.as_ref().map(|s| s.file.name.clone()),
        preview,
    }
}

fn present_errors(errors: &FieldErrors) -> Vec<FieldErrorViewModel> {
    errors
        .iter()
        .map(|(field, error)| FieldErrorViewModel {
            field: field.as_str().to_string(),
            message: error.message().to_string(),
        })
        .collect()
}

pub fn present_list(state: &CatalogState) -> CommandResultViewModel<CatalogViewModel> {
    let content = present_catalog(state);
    let mut result = CommandResultViewModel::new(content);

    if state.products.is_empty() {
        result = result.with_suggestion(
            Guidance::new("Add your first product")
                .with_command("catalog add --name <NAME> --price <PRICE>"),
        );
    } else if !state.query.trim().is_empty() && result.content.empty_state {
        result = result.with_suggestion(
            Guidance::new("Show every product").with_command("catalog list"),
        );
    }

    result
}

pub fn present_add_result(
    outcome: &SubmitOutcome,
    state: &CatalogState,
) -> CommandResultViewModel<AddResultViewModel> {
    match outcome {
        SubmitOutcome::Added { id, persisted } => {
            let product = state.products.iter().find(|p| &p.id == id).map(present_card);
            let name = product.as_ref().map(|p| p.name.as_str()).unwrap_or_default();

            let badge = if *persisted {
                StatusBadge::success(format!("Added \"{}\"", name))
            } else {
                StatusBadge::error(notice_or(state, "Changes could not be saved"))
            };

            let content = AddResultViewModel {
                status: AddStatus::Added,
                product,
                errors: Vec::new(),
                persisted: *persisted,
                total: state.products.len(),
            };

            CommandResultViewModel::new(content)
                .with_badge(badge)
                .with_suggestion(Guidance::new("See the catalog").with_command("catalog list"))
        }
        SubmitOutcome::Rejected => {
            let content = AddResultViewModel {
                status: AddStatus::Rejected,
                product: None,
                errors: present_errors(&state.errors),
                persisted: false,
                total: state.products.len(),
            };

            CommandResultViewModel::new(content).with_badge(StatusBadge::error("Product not added"))
        }
    }
}

/// `target` is the product the user asked to delete; `NotFound` never gets here.
pub fn present_delete_result(
    outcome: &DeleteOutcome,
    target: &Product,
    state: &CatalogState,
) -> CommandResultViewModel<DeleteResultViewModel> {
    let (status, persisted, badge) = match outcome {
        DeleteOutcome::Deleted { persisted, .. } if *persisted => (
            RemovalStatus::Removed,
            true,
            StatusBadge::success(format!("Deleted \"{}\"", target.name)),
        ),
        DeleteOutcome::Deleted { .. } => (
            RemovalStatus::Removed,
            false,
            StatusBadge::error(notice_or(state, "Changes could not be saved")),
        ),
        DeleteOutcome::Cancelled | DeleteOutcome::NotFound => (
            RemovalStatus::Cancelled,
            true,
            StatusBadge::info("Delete cancelled"),
        ),
    };

    let content = DeleteResultViewModel {
        status,
        id: target.id.to_string(),
        name: target.name.clone(),
        persisted,
        remaining: state.products.len(),
    };

    CommandResultViewModel::new(content).with_badge(badge)
}

pub fn present_clear_result(
    outcome: &ClearOutcome,
    state: &CatalogState,
) -> CommandResultViewModel<ClearResultViewModel> {
    let (content, badge) = match *outcome {
        ClearOutcome::AlreadyEmpty => (
            ClearResultViewModel {
                status: RemovalStatus::AlreadyEmpty,
                removed: 0,
                persisted: true,
            },
            StatusBadge::info("Catalog is already empty"),
        ),
        ClearOutcome::Cancelled => (
            ClearResultViewModel {
                status: RemovalStatus::Cancelled,
                removed: 0,
                persisted: true,
            },
            StatusBadge::info("Clear cancelled"),
        ),
        ClearOutcome::Cleared { removed, persisted } => (
            ClearResultViewModel {
                status: RemovalStatus::Removed,
                removed,
                persisted,
            },
            if persisted {
                StatusBadge::success(format!("Deleted {} product(s)", removed))
            } else {
                StatusBadge::error(notice_or(state, "Changes could not be saved"))
            },
        ),
    };

    CommandResultViewModel::new(content).with_badge(badge)
}

pub fn present_guidance(
    data_dir: &str,
    database_exists: bool,
    product_count: usize,
) -> CommandResultViewModel<GuidanceViewModel> {
    let content = GuidanceViewModel {
        data_dir: data_dir.to_string(),
        database_exists,
        product_count,
    };

    let mut guides = vec![
        Guidance::new("Add a product")
            .with_command("catalog add --name <NAME> --price <PRICE> [--image <PATH>]"),
        Guidance::new("Open the interactive editor").with_command("catalog ui"),
    ];
    if product_count > 0 {
        guides.insert(0, Guidance::new("List products").with_command("catalog list"));
    }

    CommandResultViewModel::new(content).with_suggestions(guides)
}

fn notice_or(state: &CatalogState, fallback: &str) -> String {
    state
        .notice
        .as_ref()
        .map(|n| n.message.clone())
        .unwrap_or_else(|| fallback.to_string())
}
