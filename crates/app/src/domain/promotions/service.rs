//! Promotions Service

use async_trait::async_trait;
use mockall::automock;
use tracing::{Span, info, warn};

use spotlight::prelude::*;

use crate::{
    domain::{
        products::models::ProductMeta,
        promotions::{
            PromotionsServiceError,
            data::ProductSaved,
            models::{Banner, CurrentPromotion, MetaClearFailure, PromotionChange, SweepReport},
        },
    },
    sanitize,
    stores::Stores,
};

/// Promotions service backed by the storage collaborators.
///
/// Every operation reads the whole snapshot, applies one registry operation and writes it back.
/// Two saves racing each other can lose an update; the last writer wins.
#[derive(Debug, Clone)]
pub struct StorePromotionsService {
    stores: Stores,
}

impl StorePromotionsService {
    #[must_use]
    pub fn new(stores: Stores) -> Self {
        Self { stores }
    }

    async fn load_snapshot(&self) -> Result<Option<Snapshot>, PromotionsServiceError> {
        let snapshot = self.stores.snapshots.load().await?;

        for record in snapshot.iter().flat_map(Snapshot::records) {
            if let Some(raw) = record.expiration.unparsed() {
                warn!(
                    product_id = %record.product_id,
                    raw,
                    "unreadable promotion expiry, keeping it"
                );
            }
        }

        Ok(snapshot)
    }

    async fn load_registry(&self) -> Result<PromotionRegistry, PromotionsServiceError> {
        let snapshot = self.load_snapshot().await?;

        Ok(PromotionRegistry::from(snapshot.unwrap_or_default()))
    }

    async fn try_banner(&self) -> Result<Option<Banner>, PromotionsServiceError> {
        let registry = self.load_registry().await?;

        let Some(record) = registry.most_recent() else {
            return Ok(None);
        };

        let product_id = record.product_id;

        let Some(summary) = self.stores.catalog.product_summary(product_id).await? else {
            warn!(%product_id, "promoted product missing from catalog");

            return Ok(None);
        };

        let meta = self.stores.meta.get_meta(product_id).await?;
        let settings = self.stores.settings.load_display_settings().await?;

        let product_title = meta
            .display_title()
            .map_or(summary.title, ToString::to_string);

        Ok(Some(Banner {
            product_id,
            section_title: settings.section_title().to_string(),
            product_title,
            permalink: summary.permalink,
            background_color: settings.background_color,
            text_color: settings.text_color,
        }))
    }
}

#[async_trait]
impl PromotionsService for StorePromotionsService {
    #[tracing::instrument(
        name = "promotions.service.product_saved",
        skip(self, event),
        fields(
            product_id = %event.product_id,
            promote = event.promote,
            change = tracing::field::Empty
        ),
        err
    )]
    async fn product_saved(
        &self,
        event: ProductSaved,
    ) -> Result<PromotionChange, PromotionsServiceError> {
        let product_id = event.product_id;

        let meta = ProductMeta {
            promote_enabled: event.promote,
            custom_title: sanitize::optional_text_field(event.custom_title.as_deref()),
            expiration_enabled: event.expiration_enabled,
            expiration_at: sanitize::optional_text_field(event.expiration_at.as_deref()),
        };

        // Validate before touching storage so a rejected form leaves nothing half-written.
        let expiration = if meta.expiration_enabled {
            meta.expiration_at
                .as_deref()
                .unwrap_or_default()
                .parse()
                .map(Expiration::At)
                .map_err(|source| PromotionsServiceError::Validation { product_id, source })?
        } else {
            Expiration::Never
        };

        let mut registry = self.load_registry().await?;

        let change = if event.promote {
            if registry.upsert(product_id, expiration) {
                PromotionChange::Created
            } else {
                PromotionChange::Refreshed
            }
        } else if registry.remove(product_id).is_some() {
            PromotionChange::Removed
        } else {
            PromotionChange::Unchanged
        };

        Span::current().record("change", tracing::field::debug(change));

        // The registry may only hold products whose stored promote flag is on, so the flag is
        // raised before the snapshot write and lowered after it.
        match change {
            PromotionChange::Removed => {
                self.stores.snapshots.store(&registry.into_snapshot()).await?;
                self.stores.meta.set_meta(product_id, &meta).await?;
            }
            PromotionChange::Created | PromotionChange::Refreshed => {
                self.stores.meta.set_meta(product_id, &meta).await?;
                self.stores.snapshots.store(&registry.into_snapshot()).await?;
            }
            PromotionChange::Unchanged => {
                self.stores.meta.set_meta(product_id, &meta).await?;
            }
        }

        info!(%product_id, ?change, "saved product promotion");

        Ok(change)
    }

    #[tracing::instrument(
        name = "promotions.service.sweep_expired",
        skip(self),
        fields(now = %now, evicted = tracing::field::Empty),
        err
    )]
    async fn sweep_expired(&self, now: ExpiresAt) -> Result<SweepReport, PromotionsServiceError> {
        let Some(snapshot) = self.load_snapshot().await? else {
            return Ok(SweepReport::default());
        };

        let mut registry = PromotionRegistry::from_snapshot(snapshot);
        let evicted = registry.sweep_expired(now);

        Span::current().record("evicted", evicted.len());

        if evicted.is_empty() {
            return Ok(SweepReport::default());
        }

        self.stores.snapshots.store(&registry.into_snapshot()).await?;

        let mut report = SweepReport {
            evicted: evicted.to_vec(),
            failures: Vec::new(),
        };

        // Each product is reset independently; one failure must not block the rest.
        for product_id in evicted {
            match self.stores.meta.clear_meta(product_id).await {
                Ok(()) => info!(%product_id, "promotion expired"),
                Err(error) => {
                    warn!(%product_id, %error, "failed to clear expired promotion fields");

                    report.failures.push(MetaClearFailure {
                        product_id,
                        reason: error.to_string(),
                    });
                }
            }
        }

        Ok(report)
    }

    async fn current_promotion(&self) -> Result<Option<PromotionRecord>, PromotionsServiceError> {
        let registry = self.load_registry().await?;

        Ok(registry.most_recent().cloned())
    }

    #[tracing::instrument(name = "promotions.service.banner", skip(self))]
    async fn banner(&self) -> Option<Banner> {
        match self.try_banner().await {
            Ok(banner) => banner,
            Err(error) => {
                warn!(%error, "rendering without promotion banner");

                None
            }
        }
    }

    #[tracing::instrument(name = "promotions.service.settings_summary", skip(self), err)]
    async fn settings_summary(&self) -> Result<CurrentPromotion, PromotionsServiceError> {
        let registry = self.load_registry().await?;

        let Some(record) = registry.most_recent().cloned() else {
            return Ok(CurrentPromotion::None);
        };

        let PromotionRecord {
            product_id,
            expiration,
        } = record;

        let summary = self.stores.catalog.product_summary(product_id).await?;

        Ok(match summary {
            Some(summary) => CurrentPromotion::Product {
                product_id,
                title: summary.title,
                edit_link: Some(summary.edit_link),
                expiration,
            },
            None => CurrentPromotion::Product {
                product_id,
                title: format!("Product #{product_id}"),
                edit_link: None,
                expiration,
            },
        })
    }
}

#[automock]
#[async_trait]
pub trait PromotionsService: Send + Sync {
    /// Apply a product edit form submission: store its promotion fields and promote, refresh or
    /// un-promote the product.
    async fn product_saved(
        &self,
        event: ProductSaved,
    ) -> Result<PromotionChange, PromotionsServiceError>;

    /// Evict promotions that expired before `now` and reset their product fields.
    async fn sweep_expired(&self, now: ExpiresAt) -> Result<SweepReport, PromotionsServiceError>;

    /// The promotion currently on display.
    async fn current_promotion(&self) -> Result<Option<PromotionRecord>, PromotionsServiceError>;

    /// The storefront banner, or `None` when there is nothing to show or storage failed.
    async fn banner(&self) -> Option<Banner>;

    /// The settings page summary of the current promotion.
    async fn settings_summary(&self) -> Result<CurrentPromotion, PromotionsServiceError>;
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use testresult::TestResult;

    use crate::{
        domain::settings::models::DisplaySettings,
        stores::{
            DisplaySettingsStore, MemoryStore, MockDisplaySettingsStore, MockProductCatalog,
            MockProductMetaStore, MockSnapshotStore, ProductMetaStore, SnapshotStore, StoreError,
        },
        test::{TestContext, head, promote, promote_until, unpromote},
    };

    use super::*;

    fn at(raw: &str) -> Result<ExpiresAt, ExpiresAtError> {
        raw.parse()
    }

    fn offline() -> StoreError {
        StoreError::Unavailable("offline".to_string())
    }

    fn strict_stores() -> (
        MockSnapshotStore,
        MockProductMetaStore,
        MockProductCatalog,
        MockDisplaySettingsStore,
    ) {
        let mut snapshots = MockSnapshotStore::new();
        let mut meta = MockProductMetaStore::new();
        let mut catalog = MockProductCatalog::new();
        let mut settings = MockDisplaySettingsStore::new();

        snapshots.expect_store().never();
        meta.expect_set_meta().never();
        meta.expect_clear_meta().never();
        catalog.expect_product_summary().never();
        settings.expect_store_display_settings().never();

        (snapshots, meta, catalog, settings)
    }

    fn service_with(
        snapshots: MockSnapshotStore,
        meta: MockProductMetaStore,
        catalog: MockProductCatalog,
        settings: MockDisplaySettingsStore,
    ) -> StorePromotionsService {
        StorePromotionsService::new(Stores {
            snapshots: Arc::new(snapshots),
            meta: Arc::new(meta),
            catalog: Arc::new(catalog),
            settings: Arc::new(settings),
        })
    }

    #[tokio::test]
    async fn promoting_creates_then_refreshes() -> TestResult {
        let ctx = TestContext::new();
        let product = ctx.add_product(1).await;

        assert_eq!(promote(&ctx, product).await?, PromotionChange::Created);
        assert_eq!(promote(&ctx, product).await?, PromotionChange::Refreshed);
        assert_eq!(head(&ctx).await?, Some(product));

        Ok(())
    }

    #[tokio::test]
    async fn re_promoting_moves_product_to_the_head() -> TestResult {
        let ctx = TestContext::new();
        let a = ctx.add_product(1).await;
        let b = ctx.add_product(2).await;

        promote(&ctx, a).await?;
        promote(&ctx, b).await?;

        assert_eq!(head(&ctx).await?, Some(b));

        promote(&ctx, a).await?;

        assert_eq!(head(&ctx).await?, Some(a));

        Ok(())
    }

    #[tokio::test]
    async fn unpromoting_removes_and_exposes_previous() -> TestResult {
        let ctx = TestContext::new();
        let a = ctx.add_product(1).await;
        let b = ctx.add_product(2).await;

        promote(&ctx, a).await?;
        promote(&ctx, b).await?;

        assert_eq!(unpromote(&ctx, b).await?, PromotionChange::Removed);
        assert_eq!(head(&ctx).await?, Some(a));

        assert_eq!(unpromote(&ctx, a).await?, PromotionChange::Removed);
        assert_eq!(head(&ctx).await?, None);

        Ok(())
    }

    #[tokio::test]
    async fn unpromoting_an_unknown_product_is_a_no_op() -> TestResult {
        let ctx = TestContext::new();

        assert_eq!(
            unpromote(&ctx, ProductId::new(404)).await?,
            PromotionChange::Unchanged
        );
        assert_eq!(ctx.store.load().await?, None);

        Ok(())
    }

    #[tokio::test]
    async fn save_stores_sanitised_product_fields() -> TestResult {
        let ctx = TestContext::new();
        let product = ctx.add_product(7).await;

        ctx.promotions
            .product_saved(
                ProductSaved::new(product)
                    .promoted()
                    .with_title("  <b>Half</b>\nprice ")
                    .expiring_at("2099-01-01T00:00"),
            )
            .await?;

        let meta = ctx.store.get_meta(product).await?;

        assert_eq!(
            meta,
            ProductMeta {
                promote_enabled: true,
                custom_title: Some("Half price".to_string()),
                expiration_enabled: true,
                expiration_at: Some("2099-01-01T00:00".to_string()),
            }
        );

        let record = ctx.promotions.current_promotion().await?;

        assert_eq!(
            record.map(|record| record.expiration),
            Some(Expiration::At(at("2099-01-01T00:00")?))
        );

        Ok(())
    }

    #[tokio::test]
    async fn malformed_expiry_is_rejected_before_any_write() {
        let (mut snapshots, meta, catalog, settings) = strict_stores();

        snapshots.expect_load().never();

        let service = service_with(snapshots, meta, catalog, settings);

        for input in ["", "next tuesday", "2024-02-30T10:00"] {
            let result = service
                .product_saved(
                    ProductSaved::new(ProductId::new(1))
                        .promoted()
                        .expiring_at(input),
                )
                .await;

            assert!(
                matches!(result, Err(PromotionsServiceError::Validation { .. })),
                "expected Validation for {input:?}, got {result:?}"
            );
        }
    }

    #[tokio::test]
    async fn expiry_input_is_ignored_when_expiration_is_unchecked() -> TestResult {
        let ctx = TestContext::new();
        let product = ctx.add_product(1).await;

        let mut event = ProductSaved::new(product).promoted();

        event.expiration_at = Some("not a date".to_string());

        ctx.promotions.product_saved(event).await?;

        let record = ctx.promotions.current_promotion().await?;

        assert_eq!(record.map(|r| r.expiration), Some(Expiration::Never));

        Ok(())
    }

    #[tokio::test]
    async fn snapshot_load_failure_aborts_save() {
        let (mut snapshots, meta, catalog, settings) = strict_stores();

        snapshots.expect_load().once().returning(|| Err(offline()));

        let service = service_with(snapshots, meta, catalog, settings);

        let result = service
            .product_saved(ProductSaved::new(ProductId::new(1)).promoted())
            .await;

        assert!(
            matches!(result, Err(PromotionsServiceError::Storage(_))),
            "expected Storage, got {result:?}"
        );
    }

    #[tokio::test]
    async fn snapshot_store_failure_is_surfaced() {
        let mut snapshots = MockSnapshotStore::new();
        let mut meta = MockProductMetaStore::new();
        let (_, _, catalog, settings) = strict_stores();

        snapshots.expect_load().once().returning(|| Ok(None));
        snapshots.expect_store().once().returning(|_| Err(offline()));
        meta.expect_set_meta().once().returning(|_, _| Ok(()));

        let service = service_with(snapshots, meta, catalog, settings);

        let result = service
            .product_saved(ProductSaved::new(ProductId::new(1)).promoted())
            .await;

        assert!(
            matches!(result, Err(PromotionsServiceError::Storage(_))),
            "expected Storage, got {result:?}"
        );
    }

    #[tokio::test]
    async fn unpromote_keeps_flag_on_when_snapshot_write_fails() -> TestResult {
        let product = ProductId::new(1);
        let meta = Arc::new(MemoryStore::new());

        meta.set_meta(
            product,
            &ProductMeta {
                promote_enabled: true,
                ..ProductMeta::default()
            },
        )
        .await?;

        let mut snapshots = MockSnapshotStore::new();
        let (_, _, catalog, settings) = strict_stores();

        snapshots.expect_load().once().returning(move || {
            Ok(Some(Snapshot::new(vec![PromotionRecord::new(
                product,
                Expiration::Never,
            )])))
        });
        snapshots.expect_store().once().returning(|_| Err(offline()));

        let service = StorePromotionsService::new(Stores {
            snapshots: Arc::new(snapshots),
            meta: meta.clone(),
            catalog: Arc::new(catalog),
            settings: Arc::new(settings),
        });

        let result = service.product_saved(ProductSaved::new(product)).await;

        assert!(
            matches!(result, Err(PromotionsServiceError::Storage(_))),
            "expected Storage, got {result:?}"
        );
        assert!(
            meta.get_meta(product).await?.promote_enabled,
            "promote flag must stay on while the registry still holds the product"
        );

        Ok(())
    }

    #[tokio::test]
    async fn unpromote_writes_snapshot_before_fields() {
        let mut snapshots = MockSnapshotStore::new();
        let (_, meta, catalog, settings) = strict_stores();

        snapshots.expect_load().once().returning(|| {
            Ok(Some(Snapshot::new(vec![PromotionRecord::new(
                ProductId::new(1),
                Expiration::Never,
            )])))
        });
        snapshots.expect_store().once().returning(|_| Err(offline()));

        // `meta` expects no writes at all.
        let service = service_with(snapshots, meta, catalog, settings);

        let result = service
            .product_saved(ProductSaved::new(ProductId::new(1)))
            .await;

        assert!(
            matches!(result, Err(PromotionsServiceError::Storage(_))),
            "expected Storage, got {result:?}"
        );
    }

    #[tokio::test]
    async fn sweep_store_failure_leaves_fields_untouched() -> TestResult {
        let expired = at("2020-01-01T00:00")?;

        let snapshot = Snapshot::new(vec![
            PromotionRecord::new(ProductId::new(1), Expiration::At(expired)),
            PromotionRecord::new(ProductId::new(2), Expiration::At(expired)),
        ]);

        let mut snapshots = MockSnapshotStore::new();
        let (_, meta, catalog, settings) = strict_stores();

        snapshots
            .expect_load()
            .once()
            .return_once(move || Ok(Some(snapshot)));
        snapshots.expect_store().once().returning(|_| Err(offline()));

        let service = service_with(snapshots, meta, catalog, settings);

        let result = service.sweep_expired(at("2021-01-01T00:00")?).await;

        assert!(
            matches!(result, Err(PromotionsServiceError::Storage(_))),
            "expected Storage, got {result:?}"
        );

        Ok(())
    }

    #[tokio::test]
    async fn unreadable_stored_expiry_is_never_swept_and_can_be_unpromoted() -> TestResult {
        let ctx = TestContext::new();
        let permanent = ctx.add_product(1).await;
        let unreadable = ctx.add_product(2).await;

        promote(&ctx, permanent).await?;

        let stored: Snapshot = serde_json::from_str(
            r#"[{"product_id":2,"expiration":{"at":"2024-01-01 00:00"}},{"product_id":1}]"#,
        )?;

        ctx.store.store(&stored).await?;

        let report = ctx.promotions.sweep_expired(at("2100-01-01T00:00")?).await?;

        assert!(report.is_empty());
        assert_eq!(head(&ctx).await?, Some(unreadable));

        assert_eq!(unpromote(&ctx, unreadable).await?, PromotionChange::Removed);
        assert_eq!(head(&ctx).await?, Some(permanent));

        Ok(())
    }

    #[tokio::test]
    async fn sweep_evicts_expired_and_clears_fields() -> TestResult {
        let ctx = TestContext::new();
        let expiring = ctx.add_product(1).await;
        let permanent = ctx.add_product(2).await;

        promote(&ctx, permanent).await?;
        promote_until(&ctx, expiring, "2024-01-01T00:00").await?;

        let report = ctx.promotions.sweep_expired(at("2023-12-31T00:00")?).await?;

        assert!(report.is_empty());
        assert_eq!(head(&ctx).await?, Some(expiring));

        let report = ctx.promotions.sweep_expired(at("2024-01-02T00:00")?).await?;

        assert_eq!(report.evicted, vec![expiring]);
        assert!(report.failures.is_empty());
        assert_eq!(head(&ctx).await?, Some(permanent));
        assert!(ctx.store.get_meta(expiring).await?.is_cleared());
        assert!(ctx.store.get_meta(permanent).await?.promote_enabled);

        Ok(())
    }

    #[tokio::test]
    async fn sweep_with_no_snapshot_does_nothing() -> TestResult {
        let (mut snapshots, meta, catalog, settings) = strict_stores();

        snapshots.expect_load().once().returning(|| Ok(None));

        let service = service_with(snapshots, meta, catalog, settings);

        let report = service.sweep_expired(at("2100-01-01T00:00")?).await?;

        assert!(report.is_empty());

        Ok(())
    }

    #[tokio::test]
    async fn sweep_clear_failure_does_not_block_other_products() -> TestResult {
        let expired = at("2020-01-01T00:00")?;

        let snapshot = Snapshot::new(vec![
            PromotionRecord::new(ProductId::new(1), Expiration::At(expired)),
            PromotionRecord::new(ProductId::new(2), Expiration::At(expired)),
        ]);

        let mut snapshots = MockSnapshotStore::new();
        let mut meta = MockProductMetaStore::new();
        let (_, _, catalog, settings) = strict_stores();

        snapshots
            .expect_load()
            .once()
            .return_once(move || Ok(Some(snapshot)));

        snapshots
            .expect_store()
            .once()
            .withf(|snapshot| snapshot.is_empty())
            .returning(|_| Ok(()));

        meta.expect_clear_meta()
            .once()
            .withf(|product| *product == ProductId::new(1))
            .returning(|_| Err(offline()));

        meta.expect_clear_meta()
            .once()
            .withf(|product| *product == ProductId::new(2))
            .returning(|_| Ok(()));

        let service = service_with(snapshots, meta, catalog, settings);

        let report = service.sweep_expired(at("2021-01-01T00:00")?).await?;

        assert_eq!(report.evicted, vec![ProductId::new(1), ProductId::new(2)]);
        assert_eq!(report.failures.len(), 1);
        assert_eq!(
            report.failures.first().map(|f| f.product_id),
            Some(ProductId::new(1))
        );

        Ok(())
    }

    #[tokio::test]
    async fn promotion_lifecycle_through_the_service() -> TestResult {
        let ctx = TestContext::new();
        let product = ctx.add_product(42).await;

        promote_until(&ctx, product, "2099-01-01T00:00").await?;

        assert_eq!(head(&ctx).await?, Some(product));

        ctx.promotions.sweep_expired(at("2030-01-01T00:00")?).await?;

        assert_eq!(head(&ctx).await?, Some(product));

        let report = ctx.promotions.sweep_expired(at("2100-01-01T00:00")?).await?;

        assert_eq!(report.evicted, vec![product]);
        assert_eq!(head(&ctx).await?, None);

        Ok(())
    }

    #[tokio::test]
    async fn lost_snapshot_means_nothing_is_promoted() -> TestResult {
        let ctx = TestContext::new();
        let product = ctx.add_product(1).await;

        promote(&ctx, product).await?;
        ctx.store.evict_snapshot().await;

        assert_eq!(head(&ctx).await?, None);
        assert_eq!(ctx.promotions.banner().await, None);

        Ok(())
    }

    #[tokio::test]
    async fn banner_uses_custom_title_and_settings() -> TestResult {
        let ctx = TestContext::new();
        let product = ctx.add_product(5).await;

        ctx.store
            .store_display_settings(&DisplaySettings {
                section_title: Some("FLASH SALE".to_string()),
                background_color: Some("#000000".parse()?),
                text_color: None,
            })
            .await?;

        ctx.promotions
            .product_saved(ProductSaved::new(product).promoted().with_title("Mega Mug"))
            .await?;

        let banner = ctx.promotions.banner().await;

        assert_eq!(
            banner.as_ref().map(ToString::to_string).as_deref(),
            Some("📢 FLASH SALE: Mega Mug")
        );
        assert_eq!(
            banner.map(|b| b.permalink).as_deref(),
            Some("https://shop.test/products/5")
        );

        Ok(())
    }

    #[tokio::test]
    async fn banner_falls_back_to_catalog_title_and_default_section() -> TestResult {
        let ctx = TestContext::new();
        let product = ctx.add_product(5).await;

        promote(&ctx, product).await?;

        let banner = ctx.promotions.banner().await;

        assert_eq!(
            banner.as_ref().map(ToString::to_string).as_deref(),
            Some("📢 Promoted Product: Product 5")
        );

        Ok(())
    }

    #[tokio::test]
    async fn banner_fails_open_on_storage_error() {
        let (mut snapshots, meta, catalog, settings) = strict_stores();

        snapshots.expect_load().once().returning(|| Err(offline()));

        let service = service_with(snapshots, meta, catalog, settings);

        assert_eq!(service.banner().await, None);
    }

    #[tokio::test]
    async fn banner_is_hidden_when_product_left_the_catalog() -> TestResult {
        let ctx = TestContext::new();

        promote(&ctx, ProductId::new(99)).await?;

        assert_eq!(ctx.promotions.banner().await, None);

        Ok(())
    }

    #[tokio::test]
    async fn settings_summary_reports_current_product() -> TestResult {
        let ctx = TestContext::new();

        assert_eq!(
            ctx.promotions.settings_summary().await?,
            CurrentPromotion::None
        );

        let product = ctx.add_product(3).await;

        promote(&ctx, product).await?;

        assert_eq!(
            ctx.promotions.settings_summary().await?,
            CurrentPromotion::Product {
                product_id: product,
                title: "Product 3".to_string(),
                edit_link: Some("https://shop.test/admin/products/3/edit".to_string()),
                expiration: Expiration::Never,
            }
        );

        Ok(())
    }

    #[tokio::test]
    async fn settings_summary_surfaces_storage_errors() {
        let (mut snapshots, meta, catalog, settings) = strict_stores();

        snapshots.expect_load().once().returning(|| Err(offline()));

        let service = service_with(snapshots, meta, catalog, settings);

        let result = service.settings_summary().await;

        assert!(
            matches!(result, Err(PromotionsServiceError::Storage(_))),
            "expected Storage, got {result:?}"
        );
    }
}
