//! Test Helpers

use spotlight::prelude::*;

use crate::{
    domain::promotions::{
        PromotionsService, PromotionsServiceError, data::ProductSaved, models::PromotionChange,
    },
    test::TestContext,
};

pub(crate) async fn promote(
    ctx: &TestContext,
    product: ProductId,
) -> Result<PromotionChange, PromotionsServiceError> {
    ctx.promotions
        .product_saved(ProductSaved::new(product).promoted())
        .await
}

pub(crate) async fn promote_until(
    ctx: &TestContext,
    product: ProductId,
    expires: &str,
) -> Result<PromotionChange, PromotionsServiceError> {
    ctx.promotions
        .product_saved(ProductSaved::new(product).promoted().expiring_at(expires))
        .await
}

pub(crate) async fn unpromote(
    ctx: &TestContext,
    product: ProductId,
) -> Result<PromotionChange, PromotionsServiceError> {
    ctx.promotions.product_saved(ProductSaved::new(product)).await
}

pub(crate) async fn head(ctx: &TestContext) -> Result<Option<ProductId>, PromotionsServiceError> {
    Ok(ctx
        .promotions
        .current_promotion()
        .await?
        .map(|record| record.product_id))
}
