// Checks against a real scheduling API. Credentials come from the
// environment (a local `.env` works via dotenvy); the tests stay ignored so
// the default suite never needs network access.
//
// Run with: cargo test -- --ignored live_

use std::sync::Arc;

use crate::config::AppConfig;
use crate::modules::work_items::adapters::outbound::reference_loader::ReferenceLoader;
use crate::shared::core::primitives::DateRange;
use crate::shared::infrastructure::upstream::http::HttpUpstreamApi;
use crate::shared::infrastructure::upstream::{UpstreamApi, UpstreamEndpoint};

fn live_loader() -> (Arc<HttpUpstreamApi>, ReferenceLoader) {
    dotenvy::dotenv().ok();
    let config = AppConfig::from_env().expect("API_URL and API_TOKEN must be set");
    let api = Arc::new(HttpUpstreamApi::new(config.upstream).expect("client must build"));
    let loader = ReferenceLoader::new(api.clone());
    (api, loader)
}

#[tokio::test]
#[ignore = "requires live upstream credentials"]
async fn live_upstream_serves_the_reference_collections() {
    let (_, loader) = live_loader();

    let refs = loader
        .load(&DateRange::new("2024-03-01", "2024-03-02"))
        .await
        .expect("reference load failed");

    assert!(
        !refs.metrics.is_empty(),
        "expected at least one metric definition"
    );
    assert!(
        !refs.activity_definitions.is_empty(),
        "expected at least one activity definition"
    );
}

#[tokio::test]
#[ignore = "requires live upstream credentials"]
async fn live_upstream_serves_a_work_item_envelope() {
    let (api, _) = live_loader();

    let payload = api
        .get(
            UpstreamEndpoint::ShiftWorkItems,
            Some(&DateRange::new("2024-03-01", "2024-03-02")),
        )
        .await
        .expect("work item fetch failed");

    assert!(
        payload.get("WorkItems").is_some(),
        "expected a WorkItems envelope, got: {payload}"
    );
}
