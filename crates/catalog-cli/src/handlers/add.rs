use anyhow::Result;
use catalog_runtime::{CatalogController, SubmitOutcome};
use catalog_store::ProductStorage;
use catalog_types::ImageFile;
use tracing::warn;

use super::HandlerContext;
use crate::presentation::presenters::present_add_result;

pub fn handle<S: ProductStorage>(
    mut controller: CatalogController<S>,
    name: String,
    price: String,
    image: Option<String>,
    ctx: &HandlerContext,
) -> Result<()> {
    controller.set_name(name);
    controller.set_price(price);

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    let outcome = match image {
        None => runtime.block_on(controller.submit()),
        Some(path) => match ImageFile::from_path(&path) {
            Ok(file) => runtime.block_on(controller.submit_with_file(file)),
            Err(err) => {
                warn!(path = %path, error = %err, "could not open image");
                controller.submit_unreadable_image()
            }
        },
    };

    let state = controller.state();
    ctx.render(present_add_result(&outcome, state))?;

    match outcome {
        SubmitOutcome::Rejected => {
            anyhow::bail!("Product not added: {} field(s) invalid", state.errors.len())
        }
        SubmitOutcome::Added { persisted: false, .. } => {
            anyhow::bail!("Product added but changes could not be saved")
        }
        SubmitOutcome::Added { .. } => Ok(()),
    }
}
