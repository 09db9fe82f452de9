use super::args::{Cli, Commands, ViewModeArgs};
use super::handlers::{self, HandlerContext};
use crate::logging;
use anyhow::Result;
use catalog_runtime::{CatalogController, Config, resolve_workspace_path};
use catalog_store::KvProductStorage;
use tracing::debug;

pub fn run(cli: Cli) -> Result<()> {
    let data_dir = resolve_workspace_path(cli.data_dir.as_deref())?;

    if matches!(cli.command, Some(Commands::Ui)) {
        logging::init_file(cli.log_level, &data_dir.join("catalog.log"))?;
    } else {
        logging::init_stderr(cli.log_level)?;
    }

    let config = Config::load_from(&Config::config_path(&data_dir))?;
    debug!(data_dir = %data_dir.display(), ?config, "configuration loaded");

    let Some(command) = cli.command else {
        let ctx = HandlerContext::new(cli.format, &ViewModeArgs::default());
        return handlers::guidance::handle(&data_dir, &config, &ctx);
    };

    let storage = KvProductStorage::open(&config.database_path(&data_dir), config.storage_key.clone())?;
    let controller = CatalogController::new(storage, &config);

    match command {
        Commands::Add { name, price, image } => {
            let ctx = HandlerContext::new(cli.format, &ViewModeArgs::default());
            handlers::add::handle(controller, name, price, image, &ctx)
        }

        Commands::List { search, view_mode } => {
            let ctx = HandlerContext::new(cli.format, &view_mode);
            handlers::list::handle(controller, search, &ctx)
        }

        Commands::Delete { id, yes } => {
            let ctx = HandlerContext::new(cli.format, &ViewModeArgs::default());
            handlers::delete::handle(controller, &id, yes, &ctx)
        }

        Commands::Clear { yes } => {
            let ctx = HandlerContext::new(cli.format, &ViewModeArgs::default());
            handlers::clear::handle(controller, yes, &ctx)
        }

        Commands::Ui => handlers::ui::handle(controller),
    }
}
