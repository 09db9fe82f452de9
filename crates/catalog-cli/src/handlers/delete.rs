use anyhow::Result;
use catalog_runtime::{AssumeYes, CatalogController, Confirm, DeleteOutcome};
use catalog_store::ProductStorage;

use super::HandlerContext;
use crate::confirm::TerminalConfirm;
use crate::presentation::presenters::present_delete_result;

pub fn handle<S: ProductStorage>(
    mut controller: CatalogController<S>,
    id_or_prefix: &str,
    yes: bool,
    ctx: &HandlerContext,
) -> Result<()> {
    let Some(id) = controller.resolve_id(id_or_prefix) else {
        anyhow::bail!(
            "No product matches '{}' (or the prefix is ambiguous)",
            id_or_prefix
        );
    };

    let target = controller
        .products()
        .iter()
        .find(|p| p.id == id)
        .cloned()
        .ok_or_else(|| anyhow::anyhow!("Product {} disappeared", id))?;

    let mut confirm: Box<dyn Confirm> = if yes {
        Box::new(AssumeYes)
    } else {
        Box::new(TerminalConfirm::stdio())
    };
    let outcome = controller.delete(&id, confirm.as_mut());

    if outcome == DeleteOutcome::NotFound {
        anyhow::bail!("Product {} not found", id);
    }

    ctx.render(present_delete_result(&outcome, &target, controller.state()))?;

    if let DeleteOutcome::Deleted {
        persisted: false, ..
    } = outcome
    {
        anyhow::bail!("Product deleted but changes could not be saved");
    }
    Ok(())
}
