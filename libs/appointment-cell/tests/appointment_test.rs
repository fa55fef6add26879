use std::sync::Arc;

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use chrono::{TimeZone, Utc};
use serde_json::{json, Value};
use tower::ServiceExt;
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use appointment_cell::{
    appointment_routes, Appointment, AppointmentPatch, AppointmentService, AppointmentStatus,
    AppointmentType,
};
use entity_cell::{EntityService, LocalEntityService, RemoteEntityService};
use shared_database::MemoryStorage;
use shared_utils::test_utils::{MockSupabaseResponses, TestConfig};

fn local_service() -> LocalEntityService<Appointment> {
    LocalEntityService::new(Arc::new(MemoryStorage::new()), None)
}

fn create_test_app() -> Router {
    let service: AppointmentService = Arc::new(local_service());
    Router::new().nest("/appointments", appointment_routes(service))
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json = if body.is_empty() { Value::Null } else { serde_json::from_slice(&body).unwrap() };
    (status, json)
}

#[tokio::test]
async fn test_status_is_advanced_by_caller_without_transition_rules() {
    let service = local_service();

    let started = service.update(1, AppointmentPatch::status(AppointmentStatus::InProgress)).await.unwrap();
    assert_eq!(started.status, AppointmentStatus::InProgress);

    let done = service.update(1, AppointmentPatch::status(AppointmentStatus::Completed)).await.unwrap();
    assert_eq!(done.status, AppointmentStatus::Completed);

    // Going backwards is the caller's call.
    let reopened = service.update(1, AppointmentPatch::status(AppointmentStatus::Scheduled)).await.unwrap();
    assert_eq!(reopened.status, AppointmentStatus::Scheduled);
    assert_eq!(reopened.video_room_url, done.video_room_url);
    assert_eq!(reopened.scheduled_time, done.scheduled_time);
}

#[tokio::test]
async fn test_null_video_room_in_patch_detaches_room() {
    let service = local_service();
    let before = service.get_by_id(4).await.unwrap().unwrap();
    assert!(before.is_video_consultation());

    let patch: AppointmentPatch = serde_json::from_value(json!({ "videoRoomUrl": null })).unwrap();
    assert_eq!(patch.video_room_url, Some(None));

    let updated = service.update(4, patch).await.unwrap();
    assert_eq!(updated.video_room_url, None);
    assert!(!updated.is_video_consultation());
    assert_eq!(updated.status, before.status);
    assert_eq!(service.get_by_id(4).await.unwrap().unwrap().video_room_url, None);
}

#[tokio::test]
async fn test_remote_update_sends_null_for_cleared_room() {
    let mock_server = MockServer::start().await;
    let mut cleared = MockSupabaseResponses::appointment_row(42, 7);
    cleared["video_room_url"] = Value::Null;

    Mock::given(method("PATCH"))
        .and(path("/rest/v1/appointments"))
        .and(query_param("id", "eq.42"))
        .and(body_json(json!({ "video_room_url": null })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([cleared])))
        .expect(1)
        .mount(&mock_server)
        .await;

    let config = TestConfig::with_supabase_url(mock_server.uri()).to_supabase_config();
    let service = RemoteEntityService::<Appointment>::new(&config);
    let patch = AppointmentPatch {
        video_room_url: Some(None),
        ..AppointmentPatch::default()
    };

    let updated = service.update(42, patch).await.unwrap();

    assert_eq!(updated.video_room_url, None);
    assert_eq!(updated.patient_id, 7);
}

#[test]
fn test_end_time_and_video_detection() {
    let appointment = Appointment {
        id: 9,
        patient_id: 2,
        provider_id: "dr-smith".to_string(),
        scheduled_time: Utc.with_ymd_and_hms(2024, 12, 20, 23, 40, 0).unwrap(),
        duration: 45,
        appointment_type: AppointmentType::FollowUp,
        status: AppointmentStatus::Scheduled,
        video_room_url: None,
    };

    assert_eq!(appointment.end_time(), Utc.with_ymd_and_hms(2024, 12, 21, 0, 25, 0).unwrap());
    assert!(!appointment.is_video_consultation());
    assert!(appointment.matches_search("FOLLOW"));
    assert!(!appointment.matches_search("emergency"));
}

#[test]
fn test_enums_use_hyphenated_names() {
    let value = serde_json::to_value(AppointmentPatch {
        appointment_type: Some(AppointmentType::FollowUp),
        status: Some(AppointmentStatus::InProgress),
        ..AppointmentPatch::default()
    })
    .unwrap();

    assert_eq!(value, json!({ "type": "follow-up", "status": "in-progress" }));
}

#[tokio::test]
async fn test_remote_rows_resolve_embedded_patient() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/rest/v1/appointments"))
        .and(query_param("id", "eq.42"))
        .and(query_param("select", "*,patient:patients(id)"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            MockSupabaseResponses::appointment_row(42, 7)
        ])))
        .mount(&mock_server)
        .await;

    let config = TestConfig::with_supabase_url(mock_server.uri()).to_supabase_config();
    let service = RemoteEntityService::<Appointment>::new(&config);

    let appointment = service.get_by_id(42).await.unwrap().unwrap();

    assert_eq!(appointment.id, 42);
    assert_eq!(appointment.patient_id, 7);
    assert_eq!(appointment.provider_id, "dr-chen");
    assert_eq!(appointment.appointment_type, AppointmentType::Consultation);
    assert_eq!(appointment.video_room_url.as_deref(), Some("https://meet.example.com/room-42"));
    assert_eq!(appointment.scheduled_time, Utc.with_ymd_and_hms(2024, 12, 25, 10, 0, 0).unwrap());
}

#[tokio::test]
async fn test_day_route_lists_appointments_in_time_order() {
    let app = create_test_app();
    let request = Request::builder().uri("/appointments/on/2024-12-16").body(Body::empty()).unwrap();

    let (status, body) = send(&app, request).await;

    assert_eq!(status, StatusCode::OK);
    let ids: Vec<i64> = body.as_array().unwrap().iter().map(|a| a["Id"].as_i64().unwrap()).collect();
    assert_eq!(ids, vec![1, 2, 3]);
}

#[tokio::test]
async fn test_consultations_route_filters_status() {
    let app = create_test_app();
    let request = Request::builder()
        .uri("/appointments/consultations?status=in-progress")
        .body(Body::empty())
        .unwrap();

    let (status, body) = send(&app, request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 1);
    assert_eq!(body[0]["Id"], 3);
}

#[tokio::test]
async fn test_create_route_assigns_next_id_and_validates_duration() {
    let app = create_test_app();
    let payload = json!({
        "patientId": 2,
        "providerId": "dr-smith",
        "scheduledTime": "2024-12-18T09:00:00Z",
        "duration": 30,
        "type": "consultation",
        "status": "scheduled"
    });

    let request = Request::builder()
        .method("POST")
        .uri("/appointments")
        .header("content-type", "application/json")
        .body(Body::from(payload.to_string()))
        .unwrap();
    let (status, body) = send(&app, request).await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["Id"], 7);
    assert!(body.get("videoRoomUrl").is_none());

    let mut invalid = payload.clone();
    invalid["duration"] = json!(0);
    let request = Request::builder()
        .method("POST")
        .uri("/appointments")
        .header("content-type", "application/json")
        .body(Body::from(invalid.to_string()))
        .unwrap();
    let (status, _) = send(&app, request).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}
