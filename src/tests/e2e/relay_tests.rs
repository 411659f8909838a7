use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use std::sync::Arc;
use tower::ServiceExt;

use crate::shared::core::primitives::DateRange;
use crate::shared::infrastructure::upstream::in_memory::InMemoryUpstream;
use crate::shared::infrastructure::upstream::{UpstreamEndpoint, UpstreamError};
use crate::shell::http::router;
use crate::shell::state::AppState;
use crate::tests::fixtures::reference_data::seeded_upstream;
use crate::tests::fixtures::work_items::work_items_payload;

async fn read_json_body(response: axum::response::Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn serves_the_welcome_banner_at_the_root() {
    let upstream = Arc::new(InMemoryUpstream::new());

    let response = router(AppState::new(upstream))
        .oneshot(Request::get("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    assert_eq!(&bytes[..], b"Welcome to the Shiftboard API!");
}

#[tokio::test]
async fn serves_an_enriched_task_board_end_to_end() {
    let upstream = Arc::new(seeded_upstream().await);
    upstream
        .set_response(UpstreamEndpoint::ShiftWorkItems, Ok(work_items_payload()))
        .await;

    let response = router(AppState::new(upstream.clone()))
        .oneshot(
            Request::get("/tasks?StartDate=2024-03-01&EndDate=2024-03-02")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json_body(response).await;
    let tasks = body["WorkItems"].as_array().unwrap();

    assert_eq!(tasks.len(), 2);
    let day = &tasks[0];
    assert_eq!(day["Id"], "wi-0001");
    assert_eq!(day["ShiftId"], "shift-0001");
    assert_eq!(day["ShiftName"], "2024-03-01: Day Shift");
    assert_eq!(day["ActivityType"], "Development Drilling");
    assert_eq!(day["ActivityColor"], "#2E86C1");
    assert_eq!(day["Location"], "Stope 21 North");
    assert_eq!(day["Material"], "High Grade Ore");
    assert_eq!(day["StartDateTime"], "2024-03-01T07:00:00.000Z");
    assert_eq!(day["FinishDateTime"], "2024-03-01T19:00:00.000Z");
    assert_eq!(day["PlannedMetrics"][0]["Metric"], "Tonnes");
    assert_eq!(
        day["ActualProductionRecords"][0]["ActualMetrics"][0]["Value"],
        480.0
    );
    assert_eq!(
        day["ActualProductionRecords"][0]["ProductionRecordId"],
        "pr-0001"
    );
    assert_eq!(day["CurrentStatus"], "inprogress");
    assert_eq!(day["IsComplete"], false);
    assert_eq!(day["PrimaryResource"]["Name"], "Jumbo 07");

    let night = &tasks[1];
    assert_eq!(night["ShiftId"], "shift-0002");
    assert_eq!(night["ShiftName"], "2024-03-01: Night Shift");
    assert_eq!(night["StartDateTime"], "2024-03-01T19:00:00.000Z");
    assert_eq!(night["FinishDateTime"], "2024-03-02T07:00:00.000Z");

    // One work item call plus the five reference lookups, shift ones bounded.
    let calls = upstream.calls().await;
    assert_eq!(calls.len(), 6);
    let range = DateRange::new("2024-03-01", "2024-03-02");
    for call in &calls {
        match call.endpoint {
            UpstreamEndpoint::ShiftWorkItems | UpstreamEndpoint::Shifts => {
                assert_eq!(call.range.as_ref(), Some(&range));
            }
            _ => assert_eq!(call.range, None),
        }
    }
}

#[tokio::test]
async fn mirrors_an_upstream_failure_with_its_body() {
    let upstream = Arc::new(seeded_upstream().await);
    upstream
        .set_response(
            UpstreamEndpoint::ShiftWorkItems,
            Err(UpstreamError::Status {
                status: 401,
                body: json!({ "Message": "ApiToken rejected" }),
            }),
        )
        .await;

    let response = router(AppState::new(upstream))
        .oneshot(
            Request::get("/tasks?StartDate=2024-03-01&EndDate=2024-03-02")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let body = read_json_body(response).await;
    assert_eq!(body["message"], "An error occurred.");
    assert_eq!(body["error"], json!({ "Message": "ApiToken rejected" }));
}

#[tokio::test]
async fn fails_the_board_when_a_reference_lookup_fails() {
    let upstream = Arc::new(seeded_upstream().await);
    upstream
        .set_response(UpstreamEndpoint::ShiftWorkItems, Ok(work_items_payload()))
        .await;
    upstream
        .set_response(
            UpstreamEndpoint::Locations,
            Err(UpstreamError::NoResponse("connection reset".to_string())),
        )
        .await;

    let response = router(AppState::new(upstream))
        .oneshot(
            Request::get("/tasks?StartDate=2024-03-01&EndDate=2024-03-02")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = read_json_body(response).await;
    assert_eq!(body["message"], "No response received from the server.");
}

#[tokio::test]
async fn updates_then_finishes_a_task_against_the_same_router() {
    let upstream = Arc::new(InMemoryUpstream::new());
    upstream
        .set_response(
            UpstreamEndpoint::UpdateActualProductionRecords,
            Ok(json!({ "Success": true })),
        )
        .await;
    upstream
        .set_response(
            UpstreamEndpoint::FinishWorkItem,
            Ok(json!({ "Success": true })),
        )
        .await;
    let app = router(AppState::new(upstream.clone()));

    let update = app
        .clone()
        .oneshot(
            Request::post("/updateTask?taskId=wi-0001")
                .header("content-type", "application/json")
                .body(Body::from(
                    json!({
                        "Details": [{
                            "ActivityRecordExternalId": "ext-1",
                            "ActivityDistributionIndex": 0,
                            "ActualProductionRecords": [{ "Tonnes": 480 }]
                        }],
                        "CurrentStatus": "inprogress"
                    })
                    .to_string(),
                ))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(update.status(), StatusCode::OK);

    let finish = app
        .oneshot(
            Request::post("/finishTask")
                .header("content-type", "application/json")
                .body(Body::from(r#"{"WorkItemId":"wi-0001"}"#))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(finish.status(), StatusCode::OK);

    let calls = upstream.calls().await;
    assert_eq!(calls.len(), 2);
    assert_eq!(
        calls[0].endpoint,
        UpstreamEndpoint::UpdateActualProductionRecords
    );
    assert_eq!(
        calls[0].body.as_ref().unwrap()["Details"][0]["ActivityRecordId"],
        "wi-0001"
    );
    assert_eq!(calls[1].endpoint, UpstreamEndpoint::FinishWorkItem);
}

#[tokio::test]
async fn serves_reference_details_for_the_edit_modal() {
    let upstream = Arc::new(seeded_upstream().await);

    let response = router(AppState::new(upstream))
        .oneshot(
            Request::get("/details?StartDate=2024-03-01&EndDate=2024-03-02")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json_body(response).await;
    assert_eq!(body["Materials"]["mat-0001"]["Name"], "High Grade Ore");
    assert_eq!(body["Shifts"]["shift-0002"]["ShiftStartTime"], "19:00");
}
