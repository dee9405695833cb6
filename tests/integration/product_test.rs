//! Integration tests for the product endpoints.

mod helpers;

use http::StatusCode;
use serde_json::json;
use uuid::Uuid;

use helpers::{TestApp, product_body};

#[tokio::test]
async fn test_create_then_get() {
    let app = TestApp::new();

    let created = app
        .request(
            "POST",
            "/api/products",
            Some(json!({
                "name": "Rice",
                "quantity": 10,
                "costprice": 50,
                "unit": "kg",
                "shopname": "A1",
            })),
        )
        .await;
    assert_eq!(created.status, StatusCode::CREATED);
    assert_eq!(created.body["name"], "Rice");
    assert_eq!(created.body["quantity"], 10.0);
    assert_eq!(created.body["costprice"], 50.0);
    assert_eq!(created.body["unit"], "kg");
    assert_eq!(created.body["shopname"], "A1");
    assert!(created.body.get("createdAt").is_some());
    assert!(created.body.get("updatedAt").is_some());
    assert!(created.body.get("pricePerQuantity").is_none());

    let id = created.body["id"].as_str().expect("id");
    let fetched = app.request("GET", &format!("/api/products/{id}"), None).await;
    assert_eq!(fetched.status, StatusCode::OK);
    assert_eq!(fetched.body, created.body);
}

#[tokio::test]
async fn test_rice_lifecycle() {
    let app = TestApp::new();
    let id = app.create_product("Rice").await;
    let path = format!("/api/products/{id}");

    let fetched = app.request("GET", &path, None).await;
    assert_eq!(fetched.status, StatusCode::OK);
    assert_eq!(fetched.body["quantity"], 10.0);

    let deleted = app.request("DELETE", &path, None).await;
    assert_eq!(deleted.status, StatusCode::OK);
    assert_eq!(deleted.message(), "Product deleted successfully");

    let gone = app.request("GET", &path, None).await;
    assert_eq!(gone.status, StatusCode::NOT_FOUND);
    assert_eq!(gone.message(), "Product not found");
}

#[tokio::test]
async fn test_duplicate_name_rejected() {
    let app = TestApp::new();
    app.create_product("Sugar").await;

    let again = app
        .request("POST", "/api/products", Some(product_body("Sugar")))
        .await;
    assert_eq!(again.status, StatusCode::BAD_REQUEST);
    assert_eq!(again.message(), "Product with this name already exists");
    assert_eq!(app.store.len().await, 1);
}

#[tokio::test]
async fn test_names_trimmed_before_uniqueness_check() {
    let app = TestApp::new();
    app.create_product("Salt").await;

    let padded = app
        .request("POST", "/api/products", Some(product_body("  Salt  ")))
        .await;
    assert_eq!(padded.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_missing_fields_rejected() {
    let app = TestApp::new();

    for field in ["name", "quantity", "costprice", "unit", "shopname"] {
        let mut body = product_body("Flour");
        body.as_object_mut().expect("object").remove(field);

        let response = app.request("POST", "/api/products", Some(body)).await;
        assert_eq!(response.status, StatusCode::BAD_REQUEST, "{field}");
        assert_eq!(response.message(), "All fields are required", "{field}");
    }

    assert!(app.store.is_empty().await);
}

#[tokio::test]
async fn test_invalid_unit_rejected() {
    let app = TestApp::new();
    let mut body = product_body("Oil");
    body["unit"] = json!("gallon");

    let response = app.request("POST", "/api/products", Some(body)).await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.message(), "Invalid unit");
}

#[tokio::test]
async fn test_invalid_unit_rejected_on_update() {
    let app = TestApp::new();
    let id = app.create_product("Oil").await;
    let path = format!("/api/products/{id}");

    let mut body = product_body("Oil");
    body["unit"] = json!("ton");

    let response = app.request("PUT", &path, Some(body)).await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.message(), "Invalid unit");

    let fetched = app.request("GET", &path, None).await;
    assert_eq!(fetched.body["unit"], "kg");
}

#[tokio::test]
async fn test_collection_accepts_trailing_slash() {
    let app = TestApp::new();

    let created = app
        .request("POST", "/api/products/", Some(product_body("Barley")))
        .await;
    assert_eq!(created.status, StatusCode::CREATED);

    for path in ["/api/products", "/api/products/"] {
        let listed = app.request("GET", path, None).await;
        assert_eq!(listed.status, StatusCode::OK, "{path}");
        assert_eq!(listed.body.as_array().map(Vec::len), Some(1), "{path}");
    }
}

#[tokio::test]
async fn test_negative_numbers_rejected_on_create() {
    let app = TestApp::new();

    for field in ["quantity", "costprice"] {
        let mut body = product_body("Tea");
        body[field] = json!(-1);

        let response = app.request("POST", "/api/products", Some(body)).await;
        assert_eq!(response.status, StatusCode::BAD_REQUEST, "{field}");
    }
}

#[tokio::test]
async fn test_negative_numbers_rejected_on_update() {
    let app = TestApp::new();
    let id = app.create_product("Tea").await;

    for field in ["quantity", "costprice"] {
        let mut body = product_body("Tea");
        body[field] = json!(-2.5);

        let response = app
            .request("PUT", &format!("/api/products/{id}"), Some(body))
            .await;
        assert_eq!(response.status, StatusCode::BAD_REQUEST, "{field}");
    }
}

#[tokio::test]
async fn test_long_name_rejected() {
    let app = TestApp::new();

    let response = app
        .request("POST", "/api/products", Some(product_body(&"x".repeat(21))))
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(
        response.message(),
        "Product name must be at most 20 characters long"
    );
}

#[tokio::test]
async fn test_numeric_strings_accepted() {
    let app = TestApp::new();
    let mut body = product_body("Beans");
    body["quantity"] = json!("12");
    body["costprice"] = json!("7.5");

    let response = app.request("POST", "/api/products", Some(body)).await;
    assert_eq!(response.status, StatusCode::CREATED);
    assert_eq!(response.body["quantity"], 12.0);
    assert_eq!(response.body["costprice"], 7.5);
}

#[tokio::test]
async fn test_wrong_types_rejected() {
    let app = TestApp::new();
    let mut body = product_body("Corn");
    body["quantity"] = json!("lots");

    let response = app.request("POST", "/api/products", Some(body)).await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert!(!response.message().is_empty());
}

#[tokio::test]
async fn test_malformed_json_rejected() {
    let app = TestApp::new();

    let response = app
        .raw_request("POST", "/api/products", "{\"name\": ".to_string())
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert!(response.message().starts_with("Invalid JSON body"));
}

#[tokio::test]
async fn test_list_newest_first() {
    let app = TestApp::new();
    let names = ["Apples", "Bread", "Cheese", "Dates"];
    for name in names {
        app.create_product(name).await;
    }

    let response = app.request("GET", "/api/products", None).await;
    assert_eq!(response.status, StatusCode::OK);

    let listed: Vec<&str> = response
        .body
        .as_array()
        .expect("array")
        .iter()
        .filter_map(|p| p["name"].as_str())
        .collect();
    assert_eq!(listed, vec!["Dates", "Cheese", "Bread", "Apples"]);
}

#[tokio::test]
async fn test_list_empty() {
    let app = TestApp::new();
    let response = app.request("GET", "/api/products", None).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body, json!([]));
}

#[tokio::test]
async fn test_get_unknown_and_malformed_ids() {
    let app = TestApp::new();

    let unknown = app
        .request("GET", &format!("/api/products/{}", Uuid::new_v4()), None)
        .await;
    assert_eq!(unknown.status, StatusCode::NOT_FOUND);

    let malformed = app.request("GET", "/api/products/not-an-id", None).await;
    assert_eq!(malformed.status, StatusCode::NOT_FOUND);
    assert_eq!(malformed.message(), "Product not found");
}

#[tokio::test]
async fn test_update_replaces_fields() {
    let app = TestApp::new();
    let id = app.create_product("Milk").await;

    let response = app
        .request(
            "PUT",
            &format!("/api/products/{id}"),
            Some(json!({
                "name": "Oat Milk",
                "quantity": "3",
                "costprice": 12.5,
                "unit": "Lit",
                "shopname": "B2",
            })),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["id"], id.to_string());
    assert_eq!(response.body["name"], "Oat Milk");
    assert_eq!(response.body["quantity"], 3.0);
    assert_eq!(response.body["unit"], "Lit");
    assert_eq!(response.body["shopname"], "B2");

    let fetched = app.request("GET", &format!("/api/products/{id}"), None).await;
    assert_eq!(fetched.body, response.body);
}

#[tokio::test]
async fn test_update_keeping_own_name() {
    let app = TestApp::new();
    let id = app.create_product("Butter").await;

    let mut body = product_body("Butter");
    body["quantity"] = json!(99);

    let response = app
        .request("PUT", &format!("/api/products/{id}"), Some(body))
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["quantity"], 99.0);
}

#[tokio::test]
async fn test_update_to_another_products_name() {
    let app = TestApp::new();
    app.create_product("Eggs").await;
    let id = app.create_product("Ham").await;

    let response = app
        .request("PUT", &format!("/api/products/{id}"), Some(product_body("Eggs")))
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.message(), "Product with this name already exists");
}

#[tokio::test]
async fn test_update_unknown_id_is_404_regardless_of_payload() {
    let app = TestApp::new();
    let path = format!("/api/products/{}", Uuid::new_v4());

    let valid = app.request("PUT", &path, Some(product_body("Kale"))).await;
    assert_eq!(valid.status, StatusCode::NOT_FOUND);

    let invalid = app
        .request("PUT", &path, Some(json!({ "unit": "gallon" })))
        .await;
    assert_eq!(invalid.status, StatusCode::NOT_FOUND);

    let garbage = app.raw_request("PUT", &path, "not json".to_string()).await;
    assert_eq!(garbage.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_update_invalid_payload_leaves_record_untouched() {
    let app = TestApp::new();
    let id = app.create_product("Yeast").await;
    let path = format!("/api/products/{id}");
    let before = app.request("GET", &path, None).await;

    let response = app
        .request("PUT", &path, Some(json!({ "name": "Yeast" })))
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.message(), "All fields are required");

    let after = app.request("GET", &path, None).await;
    assert_eq!(after.body, before.body);
}

#[tokio::test]
async fn test_delete_twice() {
    let app = TestApp::new();
    let id = app.create_product("Honey").await;
    let path = format!("/api/products/{id}");

    let first = app.request("DELETE", &path, None).await;
    assert_eq!(first.status, StatusCode::OK);

    let second = app.request("DELETE", &path, None).await;
    assert_eq!(second.status, StatusCode::NOT_FOUND);
    assert_eq!(second.message(), "Product not found");
}

#[tokio::test]
async fn test_deleted_name_can_be_reused() {
    let app = TestApp::new();
    let id = app.create_product("Jam").await;
    app.request("DELETE", &format!("/api/products/{id}"), None)
        .await;

    let again = app
        .request("POST", "/api/products", Some(product_body("Jam")))
        .await;
    assert_eq!(again.status, StatusCode::CREATED);
}

#[tokio::test]
async fn test_store_failure_is_500() {
    let router = helpers::broken_router();

    let list = helpers::send(&router, "GET", "/api/products", String::new()).await;
    assert_eq!(list.status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(list.message(), "Store is down");

    let create = helpers::send(
        &router,
        "POST",
        "/api/products",
        product_body("Rice").to_string(),
    )
    .await;
    assert_eq!(create.status, StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn test_cors_allows_any_origin() {
    let app = TestApp::new();
    let req = http::Request::builder()
        .method("OPTIONS")
        .uri("/api/products")
        .header("Origin", "http://shop.example")
        .header("Access-Control-Request-Method", "POST")
        .body(axum::body::Body::empty())
        .expect("request");

    let response = tower::ServiceExt::oneshot(app.router.clone(), req)
        .await
        .expect("response");
    assert_eq!(
        response
            .headers()
            .get("access-control-allow-origin")
            .and_then(|v| v.to_str().ok()),
        Some("*")
    );
}
