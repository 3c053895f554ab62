// Integration tests for AI Match

use actix_web::{test as actix_test, App};
use ai_match::config::Settings;
use ai_match::core::{EvaluationEngine, MatchingEngine};
use ai_match::models::{
    DataSummary, DeliveryPath, DemandFeatures, DemandRecord, DemandStatus, EnterpriseStatus,
    EnterpriseType, Kpi, VendorFeatures,
};
use ai_match::routes::{configure_app, AppState};
use chrono::NaiveDate;
use serde_json::{json, Value};
use std::collections::HashMap;

fn create_demand() -> DemandFeatures {
    DemandFeatures {
        title: "Steel surface defect detection".to_string(),
        description: "x".repeat(150),
        industry_tags: vec!["制造业".to_string()],
        scenario_tags: vec!["图像识别".to_string()],
        kpis: vec![Kpi {
            name: "accuracy".to_string(),
            target: "98%".to_string(),
            metric: "accuracy".to_string(),
        }],
        budget_min: Some(150_000.0),
        budget_max: Some(300_000.0),
        timeline_start: NaiveDate::from_ymd_opt(2026, 11, 1),
        timeline_end: NaiveDate::from_ymd_opt(2027, 4, 30),
        data_summary: Some(DataSummary {
            types: vec!["image".to_string(), "video".to_string()],
            counts: HashMap::from([("image".to_string(), 20_000), ("video".to_string(), 300)]),
            labeled_ratio: 0.85,
            size_bytes: 8_000_000_000,
            health_score: None,
        }),
        ..Default::default()
    }
}

fn create_vendor(id: u64, credit_score: f64, address: &str) -> VendorFeatures {
    VendorFeatures {
        id,
        name: format!("Vendor {}", id),
        enterprise_type: EnterpriseType::Supply,
        status: EnterpriseStatus::Verified,
        industry_tags: vec!["制造业".to_string()],
        ai_capabilities: vec!["图像识别".to_string()],
        credit_score,
        address: address.to_string(),
        contact_email: None,
    }
}

fn app_state() -> AppState {
    let settings: Settings = toml::from_str("").unwrap();
    AppState::from_settings(&settings).unwrap()
}

#[test]
fn test_integration_data_rich_evaluation() {
    let result = EvaluationEngine::with_defaults().evaluate_demand(&create_demand());

    assert_eq!(result.data_health_score, 100.0);
    assert!((result.feasibility_score - 94.0).abs() < 1e-9);
    assert_eq!(result.readiness_score, 100.0);
    assert!((result.overall_score - 97.6).abs() < 1e-9);
    assert_eq!(result.recommended_path, DeliveryPath::Direct);
}

#[test]
fn test_integration_end_to_end_matching() {
    let engine = MatchingEngine::with_default_weights();
    let demand = create_demand();

    let mut unverified = create_vendor(4, 99.0, "重庆市");
    unverified.status = EnterpriseStatus::Rejected;

    let candidates = vec![
        create_vendor(1, 75.0, "成都市"),
        create_vendor(2, 96.0, "重庆市两江新区"),
        create_vendor(3, 88.0, "重庆市"),
        unverified,
    ];

    let matches = engine.match_vendors(&demand, &candidates, 5);

    let ids: Vec<u64> = matches.iter().map(|m| m.vendor_id).collect();
    assert_eq!(ids, vec![2, 3, 1]);
    assert!((matches[0].score.total_score - 98.6).abs() < 1e-9);
    assert!(matches.iter().all(|m| m.score.reasons.len() <= 3));

    // Storage feeds the demand back as a record for the reverse direction
    let record = DemandRecord {
        id: 42,
        enterprise_id: 9,
        status: DemandStatus::Evaluated,
        created_at: None,
        features: demand,
    };
    let recommendations =
        engine.match_demands_for_vendor(&candidates[1], std::slice::from_ref(&record), 10);
    assert_eq!(recommendations.len(), 1);
    assert_eq!(recommendations[0].demand_id, 42);
    assert_eq!(recommendations[0].score.total_score, matches[0].score.total_score);
    assert_eq!(recommendations[0].budget_range, "150000-300000");
}

#[actix_web::test]
async fn test_health_endpoint() {
    let app = actix_test::init_service(App::new().configure(configure_app(app_state()))).await;
    let req = actix_test::TestRequest::get().uri("/api/v1/health").to_request();
    let body: Value = actix_test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["status"], "healthy");
}

#[actix_web::test]
async fn test_evaluate_endpoint() {
    let app = actix_test::init_service(App::new().configure(configure_app(app_state()))).await;
    let req = actix_test::TestRequest::post()
        .uri("/api/v1/demands/evaluate")
        .set_json(json!({ "demand": create_demand() }))
        .to_request();

    let body: Value = actix_test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["evaluation"]["recommended_path"], "direct");
    assert_eq!(body["evaluation"]["risk_level"], "low");
    assert!(body["run_id"].is_string());
}

#[actix_web::test]
async fn test_match_endpoint_ranks_vendors() {
    let app = actix_test::init_service(App::new().configure(configure_app(app_state()))).await;
    let req = actix_test::TestRequest::post()
        .uri("/api/v1/demands/match")
        .set_json(json!({
            "demand": create_demand(),
            "candidates": [create_vendor(1, 70.0, "成都市"), create_vendor(2, 96.0, "重庆市")],
            "top_k": 1
        }))
        .to_request();

    let body: Value = actix_test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["total_candidates"], 2);
    let matches = body["matches"].as_array().unwrap();
    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0]["vendor_id"], 2);
    assert_eq!(matches[0]["score_breakdown"]["geo_proximity"], 100.0);
}

#[actix_web::test]
async fn test_match_endpoint_rejects_bad_top_k() {
    let app = actix_test::init_service(App::new().configure(configure_app(app_state()))).await;

    for top_k in [-1, 0, 51] {
        let req = actix_test::TestRequest::post()
            .uri("/api/v1/demands/match")
            .set_json(json!({ "demand": {}, "candidates": [], "top_k": top_k }))
            .to_request();
        let resp = actix_test::call_service(&app, req).await;
        assert_eq!(resp.status().as_u16(), 400, "top_k {} should be rejected", top_k);
    }
}

#[actix_web::test]
async fn test_match_endpoint_empty_pool() {
    let app = actix_test::init_service(App::new().configure(configure_app(app_state()))).await;
    let req = actix_test::TestRequest::post()
        .uri("/api/v1/demands/match")
        .set_json(json!({ "demand": {} }))
        .to_request();

    let body: Value = actix_test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["matches"], json!([]));
}

#[actix_web::test]
async fn test_recommended_demands_endpoint() {
    let app = actix_test::init_service(App::new().configure(configure_app(app_state()))).await;
    let req = actix_test::TestRequest::post()
        .uri("/api/v1/vendors/recommended-demands")
        .set_json(json!({
            "vendor": create_vendor(5, 90.0, "重庆市"),
            "candidates": [
                { "id": 1, "status": "draft", "title": "Draft demand" },
                { "id": 2, "status": "submitted", "title": "Open demand", "industry_tags": ["制造业"] },
                { "id": 3, "status": "closed", "title": "Closed demand" }
            ]
        }))
        .to_request();

    let body: Value = actix_test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["enterprise_id"], 5);
    assert_eq!(body["total"], 1);
    assert_eq!(body["recommendations"][0]["demand_id"], 2);
    assert_eq!(body["recommendations"][0]["budget_range"], "negotiable");
}

#[actix_web::test]
async fn test_recommended_demands_requires_supplier() {
    let app = actix_test::init_service(App::new().configure(configure_app(app_state()))).await;
    let mut buyer = create_vendor(6, 90.0, "重庆市");
    buyer.enterprise_type = EnterpriseType::Demand;

    let req = actix_test::TestRequest::post()
        .uri("/api/v1/vendors/recommended-demands")
        .set_json(json!({ "vendor": buyer, "candidates": [] }))
        .to_request();
    let resp = actix_test::call_service(&app, req).await;
    assert_eq!(resp.status().as_u16(), 400);
}

#[actix_web::test]
async fn test_malformed_json_returns_json_error() {
    let app = actix_test::init_service(App::new().configure(configure_app(app_state()))).await;
    let req = actix_test::TestRequest::post()
        .uri("/api/v1/demands/evaluate")
        .insert_header(("content-type", "application/json"))
        .set_payload("{ not json")
        .to_request();

    let resp = actix_test::call_service(&app, req).await;
    assert_eq!(resp.status().as_u16(), 400);
    let body: Value = actix_test::read_body_json(resp).await;
    assert_eq!(body["error"], "invalid_json");
}
