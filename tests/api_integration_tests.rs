// API Integration Tests
//
// Purpose: Exercise every endpoint against the bundled crop and disease catalogs
// Run with: cargo test --features api --test api_integration_tests

#[cfg(feature = "api")]
mod api_tests {
    use axum::{
        body::Body,
        http::{header, Method, Request, StatusCode},
    };
    use crop_advisor::{create_router, AppState, CropCatalog, DiseaseCatalog, ServerConfig};
    use serde_json::{json, Value};
    use tower::ServiceExt; // for oneshot

    // Helper: Create test app over the bundled catalogs
    fn create_test_app() -> axum::Router {
        let catalog_path = concat!(env!("CARGO_MANIFEST_DIR"), "/data/crops_database.json");
        let disease_path = concat!(env!("CARGO_MANIFEST_DIR"), "/data/diseases_database.json");
        let catalog = CropCatalog::load(catalog_path).expect("bundled catalog");
        let diseases = DiseaseCatalog::load(disease_path).expect("bundled disease catalog");
        let state = AppState::from_catalogs(catalog, diseases, &ServerConfig::default());
        create_router(state)
    }

    // Helper: Parse JSON response
    async fn json_response(response: axum::response::Response) -> Value {
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("Failed to read response body");
        serde_json::from_slice(&body).expect("Failed to parse JSON")
    }

    fn get(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    fn post_json(uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method(Method::POST)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    // =========================================================================
    // Section 1: Health Check
    // =========================================================================

    #[tokio::test]
    async fn test_health_check() {
        let response = create_test_app().oneshot(get("/api/health")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = json_response(response).await;
        assert_eq!(body["status"], "OK");
        assert!(body["time"].is_string());
    }

    // =========================================================================
    // Section 2: Catalog
    // =========================================================================

    #[tokio::test]
    async fn test_list_crops() {
        let response = create_test_app().oneshot(get("/api/crops")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = json_response(response).await;
        assert_eq!(body["success"], true);
        assert_eq!(body["total_crops"], 12);
        assert_eq!(body["crops"].as_array().unwrap().len(), 12);
    }

    #[tokio::test]
    async fn test_get_crop_case_insensitive() {
        let response = create_test_app().oneshot(get("/api/crops/wheat")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = json_response(response).await;
        assert_eq!(body["crop"]["name"], "Wheat");
        assert_eq!(body["crop"]["season"], "Rabi");
    }

    #[tokio::test]
    async fn test_get_crop_not_found() {
        let response = create_test_app().oneshot(get("/api/crops/Quinoa")).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let body = json_response(response).await;
        assert_eq!(body["success"], false);
        assert_eq!(body["message"], "Crop 'Quinoa' not found in database");
    }

    // =========================================================================
    // Section 3: Recommendations
    // =========================================================================

    #[tokio::test]
    async fn test_recommend_ranked_and_capped() {
        let request = post_json(
            "/api/crops/recommend",
            json!({ "temperature": 28, "humidity": 70, "area": "Guntur" }),
        );
        let response = create_test_app().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = json_response(response).await;
        assert_eq!(body["success"], true);
        assert_eq!(body["location"], "Guntur");
        assert_eq!(body["total_suitable_crops"], 7);
        assert_eq!(body["conditions"]["temperature"], "28°C");
        assert_eq!(body["conditions"]["rainfall"], "N/A");
        assert_eq!(body["conditions"]["season"], "All seasons");

        let recs = body["recommendations"].as_array().unwrap();
        assert_eq!(recs.len(), 5);
        assert_eq!(recs[0]["name"], "Rice");
        assert_eq!(recs[0]["suitability_score"], 83);
        assert_eq!(body["message"], "Crop recommendations generated successfully");
    }

    #[tokio::test]
    async fn test_recommend_no_matches_is_success() {
        let request = post_json("/api/crops/recommend", json!({ "temperature": 5, "humidity": 20 }));
        let response = create_test_app().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = json_response(response).await;
        assert_eq!(body["success"], true);
        assert_eq!(body["total_suitable_crops"], 0);
        assert!(body["recommendations"].as_array().unwrap().is_empty());
        assert_eq!(body["location"], Value::Null);
        assert_eq!(body["message"], "No suitable crops found for current conditions");
    }

    #[tokio::test]
    async fn test_recommend_missing_humidity_is_400() {
        let request = post_json("/api/crops/recommend", json!({ "temperature": 28, "rainfall": 800 }));
        let response = create_test_app().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = json_response(response).await;
        assert_eq!(body["success"], false);
        assert_eq!(body["message"], "Temperature and humidity are required");
    }

    #[tokio::test]
    async fn test_recommend_malformed_body_is_400() {
        let request = Request::builder()
            .method(Method::POST)
            .uri("/api/crops/recommend")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from("{not json"))
            .unwrap();
        let response = create_test_app().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = json_response(response).await;
        assert_eq!(body["success"], false);
    }

    #[tokio::test]
    async fn test_recommend_cached_response_identical() {
        let app = create_test_app();
        let body = json!({ "temperature": 22, "humidity": 55, "season": "Rabi" });

        let first = app
            .clone()
            .oneshot(post_json("/api/crops/recommend", body.clone()))
            .await
            .unwrap();
        let first = json_response(first).await;

        let second = app
            .oneshot(post_json("/api/crops/recommend", body))
            .await
            .unwrap();
        let second = json_response(second).await;

        assert_eq!(first, second);
        assert!(first["total_suitable_crops"].as_u64().unwrap() > 0);
    }

    // =========================================================================
    // Section 4: Climate
    // =========================================================================

    #[tokio::test]
    async fn test_classify_climate() {
        let request = post_json(
            "/api/climate/classify",
            json!({ "temperature": 30, "humidity": 85, "area": "Kochi" }),
        );
        let response = create_test_app().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = json_response(response).await;
        assert_eq!(body["success"], true);
        assert_eq!(body["location"], "Kochi");
        assert_eq!(body["climate_zone"]["name"], "Tropical");
        assert_eq!(body["climate_zone"]["type"], "Tropical Wet");
        assert_eq!(body["suitable_for_farming"], true);
        assert!(body["season"]["farming_season"].is_string());
    }

    #[tokio::test]
    async fn test_classify_climate_requires_readings() {
        let request = post_json("/api/climate/classify", json!({ "area": "Kochi" }));
        let response = create_test_app().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_climate_zones() {
        let response = create_test_app().oneshot(get("/api/climate/zones")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = json_response(response).await;
        assert_eq!(body["success"], true);
        let zones = body["zones"].as_array().unwrap();
        assert_eq!(zones.len(), 5);
        assert_eq!(zones[0]["type"], "Tropical Wet");
        assert_eq!(zones[4]["name"], "Cold");
        assert_eq!(zones[4]["suitable_for_farming"], false);
    }

    // =========================================================================
    // Section 5: Disease
    // =========================================================================

    #[tokio::test]
    async fn test_list_diseases() {
        let response = create_test_app().oneshot(get("/api/disease")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = json_response(response).await;
        assert_eq!(body["success"], true);
        assert_eq!(body["total_diseases"], 7);
        assert_eq!(body["diseases"].as_array().unwrap().len(), 7);
    }

    #[tokio::test]
    async fn test_get_disease_by_id() {
        let response = create_test_app().oneshot(get("/api/disease/1")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = json_response(response).await;
        assert_eq!(body["disease"]["name"], "Early Blight");
        assert_eq!(body["disease"]["crop"], "Tomato");
        // Extra catalog fields pass through
        assert_eq!(body["disease"]["pathogen"], "Alternaria solani");
    }

    #[tokio::test]
    async fn test_get_disease_unknown_or_malformed_id_is_404() {
        for uri in ["/api/disease/999", "/api/disease/abc", "/api/disease/-1"] {
            let response = create_test_app().oneshot(get(uri)).await.unwrap();
            assert_eq!(response.status(), StatusCode::NOT_FOUND, "{}", uri);

            let body = json_response(response).await;
            assert_eq!(body["success"], false);
            assert_eq!(body["message"], "Disease not found");
        }
    }

    #[tokio::test]
    async fn test_detect_disease_uses_catalog() {
        let response = create_test_app()
            .oneshot(post_json("/api/disease/detect", json!({ "crop_name": "Rice" })))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = json_response(response).await;
        assert_eq!(body["success"], true);
        assert_eq!(body["detection"]["disease_name"], "Brown Spot");
        assert_eq!(body["detection"]["crop"], "Rice");
        assert!(body["detection"]["detected_at"].is_string());
        assert_eq!(body["disease_info"]["id"], 4);
        assert_eq!(
            body["recommendations"]["immediate_action"],
            "Apply balanced fertilizer and remove infected stubble"
        );
        assert_eq!(
            body["recommendations"]["fertilizer_advice"]["recommendation"],
            "Balanced NPK fertilizer"
        );
    }

    #[tokio::test]
    async fn test_detect_disease_without_crop() {
        let response = create_test_app()
            .oneshot(post_json("/api/disease/detect", json!({})))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = json_response(response).await;
        assert_eq!(body["detection"]["crop"], "Unknown");
        assert_eq!(body["detection"]["disease_name"], "Early Blight");
        assert!(body["disease_info"].get("id").is_none());
        assert_eq!(body["recommendations"]["immediate_action"], "Remove infected parts");
    }

    // =========================================================================
    // Section 6: Fallback
    // =========================================================================

    #[tokio::test]
    async fn test_unknown_route_is_404() {
        let response = create_test_app().oneshot(get("/api/nope")).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let body = json_response(response).await;
        assert_eq!(body["message"], "Route not found");
    }
}
