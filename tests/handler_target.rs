mod common;

use axum::{Router, routing::post};
use axum_test::TestServer;
use rust_decimal_macros::dec;
use serde_json::json;
use target_price::api::handlers::target_price_handler;
use target_price::application::services::PricingService;
use target_price::domain::pricing::{PricingParams, TargetParams};

fn server_with(service: PricingService) -> TestServer {
    let app = Router::new()
        .route("/api/calculate", post(target_price_handler))
        .with_state(common::create_state_with(service));

    TestServer::new(app).unwrap()
}

#[tokio::test]
async fn test_target_price_capped_by_base_total() {
    let server = server_with(PricingService::default());

    let response = server
        .post("/api/calculate")
        .json(&json!({
            "apartment_area": 100,
            "balcony_area": 10,
            "garden_area": 0,
            "parking_spots": 1,
            "base_price_per_sqm": 20000,
            "current_price_per_sqm": 30000
        }))
        .await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["weighted_area"], 105.0);
    assert_eq!(json["base_total_price"], 2100000.0);
    assert_eq!(json["current_total_price"], 3150000.0);
    assert_eq!(json["discounted_price"], 1575000.0);
    assert_eq!(json["price_difference"], 1575000.0);
    assert_eq!(json["final_price"], 2100000.0);
    assert_eq!(json["savings"], 1050000.0);
    assert_eq!(json["max_difference_exceeded"], true);

    let areas = json["area_components"].as_array().unwrap();
    assert_eq!(areas.len(), 4);
    assert_eq!(areas[0]["label"], "apartment");
    assert_eq!(common::sum_components(&json["area_components"]), 105.0);
}

#[tokio::test]
async fn test_optional_areas_default_to_zero() {
    let server = server_with(PricingService::default());

    let response = server
        .post("/api/calculate")
        .json(&json!({
            "apartment_area": 80,
            "base_price_per_sqm": 30000,
            "current_price_per_sqm": 30000
        }))
        .await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["weighted_area"], 80.0);
    assert_eq!(json["final_price"], 1800000.0);
    assert_eq!(json["max_difference_exceeded"], false);
}

#[tokio::test]
async fn test_configured_parameters_are_used() {
    let target = TargetParams {
        discount_rate: dec!(0.10),
        ..TargetParams::default()
    };
    let server = server_with(PricingService::new(PricingParams::default(), target));

    let response = server
        .post("/api/calculate")
        .json(&json!({
            "apartment_area": 100,
            "base_price_per_sqm": 10000,
            "current_price_per_sqm": 10000
        }))
        .await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["final_price"], 900000.0);
}

#[tokio::test]
async fn test_missing_apartment_area_is_client_error() {
    let server = server_with(PricingService::default());

    let response = server
        .post("/api/calculate")
        .json(&json!({
            "base_price_per_sqm": 20000,
            "current_price_per_sqm": 30000
        }))
        .await;

    response.assert_status_bad_request();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["details"]["field"], "apartment_area");
    assert!(json.get("final_price").is_none());
}

#[tokio::test]
async fn test_negative_balcony_is_rejected() {
    let server = server_with(PricingService::default());

    let response = server
        .post("/api/calculate")
        .json(&json!({
            "apartment_area": 90,
            "balcony_area": -4,
            "base_price_per_sqm": 20000,
            "current_price_per_sqm": 30000
        }))
        .await;

    response.assert_status_bad_request();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["details"]["field"], "balcony_area");
}

#[tokio::test]
async fn test_too_many_parking_spots_fail_validation() {
    let server = server_with(PricingService::default());

    let response = server
        .post("/api/calculate")
        .json(&json!({
            "apartment_area": 90,
            "parking_spots": 51,
            "base_price_per_sqm": 20000,
            "current_price_per_sqm": 30000
        }))
        .await;

    response.assert_status_bad_request();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["details"]["field"], "parking_spots");
}
