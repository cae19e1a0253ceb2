use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode, header},
};
use domain_tailed_beasts::{
    CreateTailedBeast, InMemoryTailedBeastRepository, TailedBeast, TailedBeastService, handlers,
};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

const BIJU: [&str; 9] = [
    "Shukaku", "Matatabi", "Isobu", "Son Goku", "Kokuo", "Saiken", "Chomei", "Gyuki", "Kurama",
];

fn beast(name: &str, rank: &str) -> TailedBeast {
    TailedBeast::new(CreateTailedBeast {
        name: name.to_string(),
        rank: rank.to_string(),
        personality: "Unknown".to_string(),
        ..Default::default()
    })
}

fn app() -> Router {
    let beasts = BIJU
        .iter()
        .enumerate()
        .map(|(i, name)| beast(name, &format!("{}-Tails", i + 1)))
        .collect();
    let repository = InMemoryTailedBeastRepository::with_beasts(beasts);
    handlers::router(TailedBeastService::new(repository))
}

async fn call(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn with_json(method: &str, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

#[tokio::test]
async fn list_all() {
    let (status, body) = call(app(), get("/")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Success retrieved all data");
    assert_eq!(body["result"].as_array().unwrap().len(), 9);
}

#[tokio::test]
async fn list_last_page() {
    let (status, body) = call(app(), get("/?page=3&limit=4")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["result"].as_array().unwrap().len(), 1);
    assert_eq!(body["result"][0]["slug"], "kurama");
    assert_eq!(body["totalPages"], 3);
    assert_eq!(body["totalItems"], 9);
}

#[tokio::test]
async fn list_negative_limit_is_400() {
    let (status, body) = call(app(), get("/?page=1&limit=-4")).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Invalid limit number");
}

#[tokio::test]
async fn search_substring() {
    let (status, body) = call(app(), get("/search?name=ku")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Found tailed beasts");
    let names: Vec<&str> = body["result"]
        .as_array()
        .unwrap()
        .iter()
        .map(|b| b["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["Shukaku", "Son Goku", "Kokuo", "Kurama"]);
}

#[tokio::test]
async fn search_blank_name_is_400() {
    let (status, body) = call(app(), get("/search?name=%20")).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "BAD_REQUEST");
}

#[tokio::test]
async fn create_then_read() {
    let app = app();
    let (status, body) = call(
        app.clone(),
        with_json(
            "POST",
            "/",
            json!({ "name": "Ten-Tails", "abilities": ["Tailed Beast Ball"] }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["message"], "Tailed Beast created");
    assert_eq!(body["result"]["slug"], "ten-tails");

    let (status, body) = call(app, get("/ten-tails")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["result"]["abilities"][0], "Tailed Beast Ball");
}

#[tokio::test]
async fn create_malformed_json_is_400() {
    let request = Request::builder()
        .method("POST")
        .uri("/")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{ not json"))
        .unwrap();
    let (status, _) = call(app(), request).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn update_keeps_unset_fields() {
    let (status, body) = call(
        app(),
        with_json("PUT", "/kurama", json!({ "rank": "", "personality": "Loyal" })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Tailed Beast updated");
    assert_eq!(body["result"]["rank"], "9-Tails");
    assert_eq!(body["result"]["personality"], "Loyal");
}

#[tokio::test]
async fn rename_onto_existing_slug_is_409() {
    let (status, body) = call(
        app(),
        with_json("PUT", "/kurama", json!({ "name": "Gyuki" })),
    )
    .await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["message"], "Tailed beast with slug 'gyuki' already exists");
}

#[tokio::test]
async fn delete_missing_is_404() {
    let request = Request::builder()
        .method("DELETE")
        .uri("/jubi")
        .body(Body::empty())
        .unwrap();
    let (status, body) = call(app(), request).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Tailed beast 'jubi' not found");
}

#[tokio::test]
async fn get_missing_is_404_envelope() {
    let (status, body) = call(app(), get("/juubi")).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "NOT_FOUND");
    assert_eq!(body["message"], "Tailed beast 'juubi' not found");
}

#[tokio::test]
async fn create_with_reserved_slug_is_400() {
    let (status, body) = call(app(), with_json("POST", "/", json!({ "name": "Search" }))).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "name must not produce the reserved slug 'search'");
}
