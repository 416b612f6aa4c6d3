//! Integration tests for Swagger 2.0 document assembly

use swaggerwiz_common::{HttpMethod, Route};
use swaggerwiz_generator::SwaggerGenerator;

fn route(method: HttpMethod, path: &str) -> Route {
    Route {
        method,
        path: path.to_string(),
    }
}

#[test]
fn test_generate_from_url_list() {
    let routes = vec![route(HttpMethod::Get, "/api/v1/users")];
    let generator = SwaggerGenerator::new(routes, "T", "example.com", "https");

    let doc: serde_json::Value = serde_json::from_str(&generator.to_json().unwrap()).unwrap();

    assert_eq!(doc["swagger"], "2.0");
    assert_eq!(doc["host"], "example.com");
    assert_eq!(doc["info"]["title"], "T");
    assert_eq!(doc["info"]["version"], "v2");
    assert_eq!(doc["schemes"], serde_json::json!(["https"]));
    assert_eq!(doc["consumes"], serde_json::json!(["application/json"]));
    assert!(doc["paths"]["/api/v1/users"]["get"].is_object());
}

#[test]
fn test_output_is_a_single_line() {
    let routes = vec![
        route(HttpMethod::Get, "/a"),
        route(HttpMethod::Post, "/b"),
        route(HttpMethod::Delete, "/c"),
    ];

    let json = SwaggerGenerator::new(routes, "T", "h", "http").to_json().unwrap();
    assert!(!json.contains('\n'));
}

#[test]
fn test_every_operation_shares_the_constant_body() {
    let routes = vec![route(HttpMethod::Get, "/a"), route(HttpMethod::Put, "/b")];

    let doc: serde_json::Value = serde_json::from_str(
        &SwaggerGenerator::new(routes, "T", "h", "http").to_json().unwrap(),
    )
    .unwrap();

    let a = &doc["paths"]["/a"]["get"];
    let b = &doc["paths"]["/b"]["put"];
    assert_eq!(a, b);
    assert_eq!(a["responses"], serde_json::json!({}));
    assert_eq!(a["consumes"], serde_json::json!(["application/json"]));
    assert!(a["Description"].is_string());
}

#[test]
fn test_two_methods_on_one_path_both_survive() {
    let routes = vec![route(HttpMethod::Get, "/a"), route(HttpMethod::Post, "/a")];

    let doc = SwaggerGenerator::new(routes, "T", "h", "http").generate();
    assert_eq!(doc.paths.len(), 1);
    assert!(doc.paths["/a"].contains_key("get"));
    assert!(doc.paths["/a"].contains_key("post"));
}

#[test]
fn test_generation_is_deterministic() {
    let routes = vec![
        route(HttpMethod::Get, "/b"),
        route(HttpMethod::Get, "/a"),
        route(HttpMethod::Post, "/c"),
    ];

    let first = SwaggerGenerator::new(routes.clone(), "T", "h", "http")
        .to_json()
        .unwrap();
    let second = SwaggerGenerator::new(routes, "T", "h", "http")
        .to_json()
        .unwrap();
    assert_eq!(first, second);

    // Paths appear in input order, not sorted
    let b = first.find("\"/b\"").unwrap();
    let a = first.find("\"/a\"").unwrap();
    let c = first.find("\"/c\"").unwrap();
    assert!(b < a && a < c);
}
