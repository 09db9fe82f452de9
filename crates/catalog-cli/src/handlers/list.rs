use anyhow::Result;
use catalog_runtime::CatalogController;
use catalog_store::ProductStorage;

use super::HandlerContext;
use crate::presentation::presenters::present_list;

pub fn handle<S: ProductStorage>(
    mut controller: CatalogController<S>,
    search: Option<String>,
    ctx: &HandlerContext,
) -> Result<()> {
    if let Some(query) = search {
        controller.search(query);
    }

    ctx.render(present_list(controller.state()))
}
