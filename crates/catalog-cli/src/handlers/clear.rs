use anyhow::Result;
use catalog_runtime::{AssumeYes, CatalogController, ClearOutcome, Confirm};
use catalog_store::ProductStorage;

use super::HandlerContext;
use crate::confirm::TerminalConfirm;
use crate::presentation::presenters::present_clear_result;

pub fn handle<S: ProductStorage>(
    mut controller: CatalogController<S>,
    yes: bool,
    ctx: &HandlerContext,
) -> Result<()> {
    let mut confirm: Box<dyn Confirm> = if yes {
        Box::new(AssumeYes)
    } else {
        Box::new(TerminalConfirm::stdio())
    };
    let outcome = controller.clear_all(confirm.as_mut());

    ctx.render(present_clear_result(&outcome, controller.state()))?;

    if let ClearOutcome::Cleared {
        persisted: false, ..
    } = outcome
    {
        anyhow::bail!("Products cleared but changes could not be saved");
    }
    Ok(())
}
