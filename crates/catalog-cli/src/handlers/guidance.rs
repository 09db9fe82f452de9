use anyhow::Result;
use catalog_runtime::Config;
use catalog_store::{KvProductStorage, ProductStorage};
use std::path::Path;

use super::HandlerContext;
use crate::presentation::presenters::present_guidance;

/// Shown when `catalog` runs without a subcommand. Never creates the database.
pub fn handle(data_dir: &Path, config: &Config, ctx: &HandlerContext) -> Result<()> {
    let db_path = config.database_path(data_dir);
    let database_exists = db_path.exists();

    let product_count = if database_exists {
        KvProductStorage::open(&db_path, config.storage_key.clone())?
            .load()
            .len()
    } else {
        0
    };

    ctx.render(present_guidance(
        &data_dir.display().to_string(),
        database_exists,
        product_count,
    ))
}
