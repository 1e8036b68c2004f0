//! Catalog command.

use serde_json::{Value, json};
use tracing::info;

use spotlight_app::{domain::products::models::ProductSummary, stores::JsonFileStore};

use crate::{commands::ProductArgs, errors::CliError};

pub(super) async fn upsert(store: &JsonFileStore, args: ProductArgs) -> Result<Value, CliError> {
    let ProductArgs {
        product,
        title,
        permalink,
        edit_link,
    } = args;

    store
        .insert_product(
            product,
            ProductSummary {
                title: title.clone(),
                permalink,
                edit_link,
            },
        )
        .await?;

    info!(%product, "registered catalog product");

    Ok(json!({ "product_id": product, "title": title }))
}
