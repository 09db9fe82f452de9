use anyhow::Result;
use catalog_runtime::CatalogController;
use catalog_store::ProductStorage;
use is_terminal::IsTerminal;
use tracing::info;

use crate::presentation::renderers::tui::TuiRenderer;

pub fn handle<S: ProductStorage>(controller: CatalogController<S>) -> Result<()> {
    if !std::io::stdout().is_terminal() {
        anyhow::bail!("'catalog ui' needs an interactive terminal");
    }

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(1)
        .enable_all()
        .build()?;

    info!("starting interactive editor");
    let controller = TuiRenderer::new(controller, runtime.handle().clone()).run()?;
    info!(count = controller.products().len(), "interactive editor closed");

    Ok(())
}
