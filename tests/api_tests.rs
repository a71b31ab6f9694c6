/// Integration tests for the HTTP pricing API, driven through the router
use axum::{
    body::{to_bytes, Body},
    http::{Method, Request, StatusCode},
    Router,
};
use cloud_price_calculator::{config::Config, server};
use serde_json::{json, Value};
use tower::ServiceExt;

fn app() -> Router {
    let state = server::build_state(Config::default()).unwrap();
    server::create_router(state, None)
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    send(app, Request::get(uri).body(Body::empty()).unwrap()).await
}

async fn post_json(app: &Router, uri: &str, body: Value) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, request).await
}

#[tokio::test]
async fn test_root_banner() {
    let (status, body) = get(&app(), "/").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
    assert!(body["features"].as_array().unwrap().contains(&json!("caching")));
}

#[tokio::test]
async fn test_health_reports_cache_size() {
    let app = app();
    let (status, body) = get(&app, "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["cache_entries"], 0);
    assert_eq!(body["supported_providers"], json!(["aws", "gcp", "azure"]));

    post_json(&app, "/calculate", json!({"provider": "aws", "instance_type": "t3.micro", "hours_running": 1})).await;
    let (_, body) = get(&app, "/health").await;
    assert_eq!(body["cache_entries"], 1);
}

#[tokio::test]
async fn test_providers_lists_regions_and_cache_duration() {
    let (status, body) = get(&app(), "/providers").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["providers"], json!(["aws", "gcp", "azure"]));
    assert!(body["aws_regions"].as_array().unwrap().contains(&json!("us-east-1")));
    assert!(body["gcp_regions"].as_array().unwrap().contains(&json!("europe-west1")));
    assert!(body["azure_regions"].as_array().unwrap().contains(&json!("brazilsouth")));
    assert_eq!(body["cache_duration_minutes"], 60);
}

#[tokio::test]
async fn test_instances_and_regions() {
    let app = app();

    let (status, body) = get(&app, "/instances/AWS").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["provider"], "aws");
    assert!(body["instance_families"]["compute_optimized"]
        .as_array()
        .unwrap()
        .contains(&json!("c5.large")));
    assert_eq!(body["storage_types"][0], "gp3");

    let (status, body) = get(&app, "/regions/gcp").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["regions"][0]["code"], "us-central1");
    assert_eq!(body["regions"][0]["name"], "Iowa");
}

#[tokio::test]
async fn test_unknown_provider_is_bad_request() {
    let app = app();
    for uri in ["/instances/ibm", "/regions/oracle", "/pricing-trends/alibaba?instance_type=x"] {
        let (status, body) = get(&app, uri).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{}", uri);
        assert_eq!(body["error"]["type"], "unknown_provider");
    }
}

#[tokio::test]
async fn test_calculate_reference_price() {
    let (status, body) = post_json(
        &app(),
        "/calculate",
        json!({
            "provider": "aws",
            "instance_type": "t3.medium",
            "hours_running": 100,
            "storage_gb": 50,
            "region": "us-east-1",
            "storage_type": "gp3"
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["compute_cost"], 4.16);
    assert_eq!(body["storage_cost"], 0.5556);
    assert_eq!(body["total_cost"], 4.7156);
    assert_eq!(body["currency"], "USD");
    assert_eq!(body["price_source"], "api");
}

#[tokio::test]
async fn test_calculate_unknown_instance_uses_fallback() {
    let (status, body) = post_json(
        &app(),
        "/calculate",
        json!({"provider": "gcp", "instance_type": "a3-megagpu-8g", "hours_running": 10}),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["price_source"], "fallback");
    assert_eq!(body["compute_cost"], 0.3);
    assert_eq!(body["region"], "us-central1");
}

#[tokio::test]
async fn test_calculate_validation_errors() {
    let app = app();

    let (status, body) = post_json(
        &app,
        "/calculate",
        json!({"provider": "aws", "instance_type": "t3.medium", "hours_running": 0}),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["type"], "validation_error");

    let (status, _) = post_json(
        &app,
        "/calculate",
        json!({"provider": "aws", "instance_type": "t3.medium", "hours_running": 5, "storage_gb": -1}),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, body) = post_json(
        &app,
        "/calculate",
        json!({"provider": "digitalocean", "instance_type": "s-1vcpu", "hours_running": 5}),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["type"], "unknown_provider");

    // Missing required field
    let (status, body) = post_json(&app, "/calculate", json!({"provider": "aws"})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["type"], "validation_error");
}

#[tokio::test]
async fn test_compare_two_providers() {
    let (status, body) = get(
        &app(),
        "/compare?instance_aws=t3.medium&instance_gcp=e2-standard-2&hours=100",
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert!(body["comparison_timestamp"].is_string());
    assert_eq!(body["results"]["aws"]["total_cost"], 4.16);
    assert_eq!(body["results"]["gcp"]["total_cost"], 6.7);
    assert!(body["results"].get("azure").is_none());

    let comparison = &body["comparison"];
    assert_eq!(comparison["cheapest_provider"], "aws");
    assert_eq!(comparison["most_expensive_provider"], "gcp");
    assert!((comparison["max_savings"].as_f64().unwrap() - 2.54).abs() < 1e-9);
    assert!((comparison["percentage_savings"].as_f64().unwrap() - 37.91).abs() < 1e-9);
}

#[tokio::test]
async fn test_compare_requires_an_instance() {
    let (status, body) = get(&app(), "/compare?hours=10").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"]["message"]
        .as_str()
        .unwrap()
        .contains("At least one instance type"));
}

#[tokio::test]
async fn test_recommendations_sorted_and_budgeted() {
    let app = app();

    let (status, body) = get(&app, "/recommendations?workload_type=budget&hours=24").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["workload_type"], "budget");
    assert_eq!(body["performance_tier"], "standard");

    let costs: Vec<f64> = body["recommendations"]
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["total_cost"].as_f64().unwrap())
        .collect();
    assert_eq!(costs.len(), 7);
    assert!(costs.windows(2).all(|w| w[0] <= w[1]));

    let (_, body) = get(&app, "/recommendations?workload_type=budget&hours=24&budget_limit=0.5").await;
    for rec in body["recommendations"].as_array().unwrap() {
        assert!(rec["total_cost"].as_f64().unwrap() <= 0.5);
        assert_eq!(rec["fits_budget"], true);
    }

    let (_, body) = get(&app, "/recommendations?workload_type=quantum").await;
    assert_eq!(body["workload_type"], "general");

    let (status, _) = get(&app, "/recommendations?hours=0").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_pricing_trends_are_deterministic() {
    let app = app();
    let uri = "/pricing-trends/azure?instance_type=Standard_D2s_v3&days=10";

    let (status, first) = get(&app, uri).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(first["region"], "eastus");
    assert_eq!(first["period_days"], 10);
    assert_eq!(first["current_price"], 0.096);
    assert_eq!(first["trends"].as_array().unwrap().len(), 10);

    let (_, second) = get(&app, uri).await;
    assert_eq!(first["trends"], second["trends"]);
    assert_eq!(first["summary"], second["summary"]);

    let min = first["summary"]["min_price"].as_f64().unwrap();
    let max = first["summary"]["max_price"].as_f64().unwrap();
    assert!(min <= max);
    assert!(min >= 0.096 * 0.95 - 1e-6 && max <= 0.096 * 1.05 + 1e-6);
}

#[tokio::test]
async fn test_pricing_trends_day_bounds() {
    let app = app();
    let (status, _) = get(&app, "/pricing-trends/aws?instance_type=t3.micro&days=0").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = get(&app, "/pricing-trends/aws?instance_type=t3.micro&days=366").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = get(&app, "/pricing-trends/aws").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_cache_status_and_clear() {
    let app = app();

    post_json(&app, "/calculate", json!({"provider": "aws", "instance_type": "t3.medium", "hours_running": 1})).await;
    post_json(&app, "/calculate", json!({"provider": "aws", "instance_type": "t3.medium", "hours_running": 2})).await;
    post_json(&app, "/calculate", json!({"provider": "azure", "instance_type": "Standard_B1s", "hours_running": 1})).await;

    let (status, body) = get(&app, "/cache/status").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["cache_entries"], 2);
    assert_eq!(body["cache_duration_hours"], 1.0);
    let entry = &body["cache_details"]["aws_us-east-1_t3.medium_gp3"];
    assert_eq!(entry["is_valid"], true);
    assert!(entry["expires_in_minutes"].as_u64().unwrap() <= 60);

    let (status, body) = send(
        &app,
        Request::delete("/cache/clear").body(Body::empty()).unwrap(),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["cleared_entries"], 2);
    assert_eq!(body["message"], "Cache cleared successfully");

    let (_, body) = get(&app, "/cache/status").await;
    assert_eq!(body["cache_entries"], 0);
}

#[tokio::test]
async fn test_catalog_without_api_key() {
    let (status, body) = get(&app(), "/catalog/services").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"]["message"], "API key not configured");
}
