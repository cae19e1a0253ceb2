//! JSON extractor with automatic validation using the validator crate.

use crate::errors::AppError;
use axum::extract::{FromRequest, Json, Request};
use serde::de::DeserializeOwned;
use validator::Validate;

/// JSON body that has passed `validator::Validate`.
///
/// Body rejections keep axum's status (400/415/422); failed validation
/// answers 400 with per-field details.
///
/// ```ignore
/// #[derive(Deserialize, Validate)]
/// struct LoginRequest {
///     #[validate(length(min = 1))]
///     username: String,
/// }
///
/// async fn login(ValidatedJson(body): ValidatedJson<LoginRequest>) { /* ... */ }
/// ```
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(data) = Json::<T>::from_request(req, state).await?;
        data.validate()?;
        Ok(ValidatedJson(data))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{Router, body::Body, http::Request, http::StatusCode, routing::post};
    use http_body_util::BodyExt;
    use serde::Deserialize;
    use tower::ServiceExt;

    #[derive(Deserialize, Validate)]
    struct NewBeast {
        #[validate(length(min = 1, max = 200))]
        name: String,
    }

    async fn create(ValidatedJson(body): ValidatedJson<NewBeast>) -> String {
        body.name
    }

    fn app() -> Router {
        Router::new().route("/", post(create))
    }

    fn json_request(body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/")
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn test_valid_body_passes_through() {
        let response = app()
            .oneshot(json_request(r#"{"name":"Shukaku"}"#))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        assert_eq!(&bytes[..], b"Shukaku");
    }

    #[tokio::test]
    async fn test_invalid_field_returns_validation_error() {
        let response = app().oneshot(json_request(r#"{"name":""}"#)).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(json["error"], "VALIDATION_ERROR");
        assert!(json["details"]["name"].is_array());
    }

    #[tokio::test]
    async fn test_malformed_json_is_rejected() {
        let response = app().oneshot(json_request("{not json")).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_missing_content_type_is_415() {
        let request = Request::builder()
            .method("POST")
            .uri("/")
            .body(Body::from(r#"{"name":"Shukaku"}"#))
            .unwrap();
        let response = app().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::UNSUPPORTED_MEDIA_TYPE);
    }
}
