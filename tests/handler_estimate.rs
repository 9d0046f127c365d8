mod common;

use axum::{Router, routing::get};
use axum_test::TestServer;
use serde_json::json;
use target_price::api::handlers::{estimate_handler, estimate_query_handler};

fn server() -> TestServer {
    let app = Router::new()
        .route(
            "/api/estimate",
            get(estimate_query_handler).post(estimate_handler),
        )
        .with_state(common::create_test_state());

    TestServer::new(app).unwrap()
}

#[tokio::test]
async fn test_estimate_golden_center_apartment() {
    let server = server();

    let response = server
        .post("/api/estimate")
        .json(&json!({
            "location": "center",
            "size_sqm": 80,
            "floor": 3,
            "building_age": 5,
            "condition_factor": 1.0,
            "market_adjustment": 0
        }))
        .await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["location"], "center");
    assert_eq!(json["location_weight"], 1.5);
    assert_eq!(json["total_price"], 2328000.0);

    let components = json["components"].as_array().unwrap();
    assert_eq!(components.len(), 5);
    assert_eq!(components[0]["label"], "base");
    assert_eq!(components[0]["value"], 2400000.0);
    assert_eq!(components[1]["label"], "floor");
    assert_eq!(components[1]["value"], 48000.0);
    assert_eq!(components[2]["label"], "building_age");
    assert_eq!(components[2]["value"], -120000.0);
    assert_eq!(components[3]["value"], 0.0);
    assert_eq!(components[4]["value"], 0.0);
}

#[tokio::test]
async fn test_estimate_from_query_string() {
    let server = server();

    let response = server
        .get("/api/estimate")
        .add_query_param("location", "center")
        .add_query_param("size_sqm", "80")
        .add_query_param("floor", "3")
        .add_query_param("building_age", "5")
        .await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["total_price"], 2328000.0);
}

#[tokio::test]
async fn test_total_equals_sum_of_components() {
    let server = server();

    let response = server
        .post("/api/estimate")
        .json(&json!({
            "location": "Tel Aviv",
            "size_sqm": 64.5,
            "floor": 12,
            "building_age": 17,
            "condition_factor": 1.1,
            "market_adjustment": 0.04
        }))
        .await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["location"], "tel_aviv");

    let total = json["total_price"].as_f64().unwrap();
    let sum = common::sum_components(&json["components"]);
    assert!((total - sum).abs() < 1e-6, "total {total} != sum {sum}");
    assert!(total >= 0.0);
}

#[tokio::test]
async fn test_unknown_location_uses_fallback() {
    let server = server();

    let response = server
        .post("/api/estimate")
        .json(&json!({
            "location": "Mitzpe Ramon",
            "size_sqm": 100,
            "floor": 1,
            "building_age": 0
        }))
        .await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["location"], "other");
    assert_eq!(json["total_price"], 2000000.0);
}

#[tokio::test]
async fn test_repeated_requests_are_identical() {
    let server = server();
    let body = json!({
        "location": "haifa",
        "size_sqm": 93.3,
        "floor": 0,
        "building_age": 41,
        "condition_factor": 0.85,
        "market_adjustment": -0.1
    });

    let first = server.post("/api/estimate").json(&body).await.text();
    let second = server.post("/api/estimate").json(&body).await.text();

    assert_eq!(first, second);
}

#[tokio::test]
async fn test_missing_size_is_client_error() {
    let server = server();

    let response = server
        .post("/api/estimate")
        .json(&json!({
            "location": "center",
            "floor": 3,
            "building_age": 5
        }))
        .await;

    response.assert_status_bad_request();

    let json = response.json::<serde_json::Value>();
    assert!(json.get("total_price").is_none());
    assert_eq!(json["error"]["code"], "validation_error");
    assert_eq!(json["error"]["details"]["field"], "size_sqm");
}

#[tokio::test]
async fn test_missing_size_in_query_is_client_error() {
    let server = server();

    let response = server
        .get("/api/estimate")
        .add_query_param("location", "center")
        .add_query_param("floor", "3")
        .add_query_param("building_age", "5")
        .await;

    response.assert_status_bad_request();

    let json = response.json::<serde_json::Value>();
    assert!(json.get("total_price").is_none());
    assert_eq!(json["error"]["details"]["field"], "size_sqm");
}

#[tokio::test]
async fn test_non_positive_size_is_rejected() {
    let server = server();

    for size in [0, -20] {
        let response = server
            .post("/api/estimate")
            .json(&json!({
                "location": "center",
                "size_sqm": size,
                "floor": 3,
                "building_age": 5
            }))
            .await;

        response.assert_status_bad_request();

        let json = response.json::<serde_json::Value>();
        assert_eq!(json["error"]["details"]["field"], "size_sqm");
        assert!(
            json["error"]["message"]
                .as_str()
                .unwrap()
                .contains("size_sqm")
        );
    }
}

#[tokio::test]
async fn test_condition_out_of_range_is_rejected() {
    let server = server();

    let response = server
        .post("/api/estimate")
        .json(&json!({
            "location": "center",
            "size_sqm": 80,
            "floor": 3,
            "building_age": 5,
            "condition_factor": 2.0
        }))
        .await;

    response.assert_status_bad_request();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["details"]["field"], "condition_factor");
}

#[tokio::test]
async fn test_malformed_floor_is_rejected() {
    let server = server();

    let response = server
        .post("/api/estimate")
        .json(&json!({
            "location": "center",
            "size_sqm": 80,
            "floor": "third",
            "building_age": 5
        }))
        .await;

    response.assert_status_bad_request();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["details"]["field"], "floor");
}

#[tokio::test]
async fn test_empty_location_is_rejected() {
    let server = server();

    let response = server
        .post("/api/estimate")
        .json(&json!({
            "location": "",
            "size_sqm": 80,
            "floor": 3,
            "building_age": 5
        }))
        .await;

    response.assert_status_bad_request();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["details"]["field"], "location");
}

#[tokio::test]
async fn test_non_json_body_is_rejected() {
    let server = server();

    let response = server.post("/api/estimate").text("size_sqm=80").await;

    response.assert_status_bad_request();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "validation_error");
    assert!(json.get("total_price").is_none());
}
