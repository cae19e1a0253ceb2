use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use axum_helpers::{
    Pagination, PaginationParams, ValidatedJson,
    errors::responses::{
        BadRequestResponse, BadRequestValidationResponse, ConflictResponse,
        InternalServerErrorResponse, NotFoundResponse,
    },
};
use core_resource::{Envelope, PageMeta};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use utoipa::{IntoParams, OpenApi, ToSchema};

use crate::error::TailedBeastResult;
use crate::models::{CreateTailedBeast, TailedBeast, UpdateTailedBeast};
use crate::repository::TailedBeastRepository;
use crate::service::TailedBeastService;

/// OpenAPI documentation for the Tailed Beasts API
#[derive(OpenApi)]
#[openapi(
    paths(
        list_tailed_beasts,
        search_tailed_beasts,
        create_tailed_beast,
        get_tailed_beast,
        update_tailed_beast,
        delete_tailed_beast,
    ),
    components(
        schemas(
            TailedBeast,
            CreateTailedBeast,
            UpdateTailedBeast,
            TailedBeastResponse,
            TailedBeastListResponse,
            PageMeta
        ),
        responses(
            NotFoundResponse,
            BadRequestResponse,
            BadRequestValidationResponse,
            ConflictResponse,
            InternalServerErrorResponse
        )
    ),
    tags(
        (name = "Tailed Beasts", description = "Tailed beast management endpoints")
    )
)]
pub struct ApiDoc;

/// `{ message, result }` wrapping one tailed beast.
#[derive(Serialize, ToSchema)]
#[allow(dead_code)]
struct TailedBeastResponse {
    message: String,
    result: TailedBeast,
}

/// List body. Pagination fields are present only when both `page` and
/// `limit` were supplied.
#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
#[allow(dead_code)]
struct TailedBeastListResponse {
    message: String,
    result: Vec<TailedBeast>,
    page: Option<i64>,
    limit: Option<i64>,
    total_pages: Option<u64>,
    total_items: Option<u64>,
}

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct SearchParams {
    /// Case-insensitive substring of the tailed beast name
    pub name: Option<String>,
}

/// Create the tailed beasts router
pub fn router<R: TailedBeastRepository + 'static>(service: TailedBeastService<R>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/", get(list_tailed_beasts).post(create_tailed_beast))
        .route("/search", get(search_tailed_beasts))
        .route(
            "/{slug}",
            get(get_tailed_beast)
                .put(update_tailed_beast)
                .delete(delete_tailed_beast),
        )
        .with_state(shared_service)
}

/// List tailed beasts, paginated when `page` and `limit` are given
#[utoipa::path(
    get,
    path = "",
    tag = "Tailed Beasts",
    params(PaginationParams),
    responses(
        (status = 200, description = "Tailed beasts", body = TailedBeastListResponse),
        (status = 400, response = BadRequestResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn list_tailed_beasts<R: TailedBeastRepository>(
    State(service): State<Arc<TailedBeastService<R>>>,
    Pagination(request): Pagination,
) -> TailedBeastResult<Json<Envelope<Vec<TailedBeast>>>> {
    let page = service.list_paged(request).await?;
    Ok(Json(page.into_envelope()))
}

/// Search tailed beasts by name
#[utoipa::path(
    get,
    path = "/search",
    tag = "Tailed Beasts",
    params(SearchParams),
    responses(
        (status = 200, description = "Matching tailed beasts", body = TailedBeastListResponse),
        (status = 400, response = BadRequestResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn search_tailed_beasts<R: TailedBeastRepository>(
    State(service): State<Arc<TailedBeastService<R>>>,
    Query(params): Query<SearchParams>,
) -> TailedBeastResult<Json<Envelope<Vec<TailedBeast>>>> {
    let found = service
        .search_by_name(params.name.as_deref().unwrap_or_default())
        .await?;
    Ok(Json(Envelope::new("Found tailed beasts", found)))
}

/// Create a tailed beast
#[utoipa::path(
    post,
    path = "",
    tag = "Tailed Beasts",
    request_body = CreateTailedBeast,
    responses(
        (status = 201, description = "Tailed Beast created", body = TailedBeastResponse),
        (status = 400, response = BadRequestValidationResponse),
        (status = 409, response = ConflictResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn create_tailed_beast<R: TailedBeastRepository>(
    State(service): State<Arc<TailedBeastService<R>>>,
    ValidatedJson(input): ValidatedJson<CreateTailedBeast>,
) -> TailedBeastResult<impl IntoResponse> {
    let beast = service.create(input).await?;
    Ok((
        StatusCode::CREATED,
        Json(Envelope::new("Tailed Beast created", beast)),
    ))
}

/// Get a tailed beast by slug
#[utoipa::path(
    get,
    path = "/{slug}",
    tag = "Tailed Beasts",
    params(
        ("slug" = String, Path, description = "Tailed beast slug, e.g. `kurama`")
    ),
    responses(
        (status = 200, description = "Tailed beast found", body = TailedBeastResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn get_tailed_beast<R: TailedBeastRepository>(
    State(service): State<Arc<TailedBeastService<R>>>,
    Path(slug): Path<String>,
) -> TailedBeastResult<Json<Envelope<TailedBeast>>> {
    let beast = service.get_by_slug(&slug).await?;
    Ok(Json(Envelope::new("Success retrieved data", beast)))
}

/// Partially update a tailed beast
#[utoipa::path(
    put,
    path = "/{slug}",
    tag = "Tailed Beasts",
    params(
        ("slug" = String, Path, description = "Tailed beast slug")
    ),
    request_body = UpdateTailedBeast,
    responses(
        (status = 200, description = "Tailed Beast updated", body = TailedBeastResponse),
        (status = 400, response = BadRequestValidationResponse),
        (status = 404, response = NotFoundResponse),
        (status = 409, response = ConflictResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn update_tailed_beast<R: TailedBeastRepository>(
    State(service): State<Arc<TailedBeastService<R>>>,
    Path(slug): Path<String>,
    ValidatedJson(patch): ValidatedJson<UpdateTailedBeast>,
) -> TailedBeastResult<Json<Envelope<TailedBeast>>> {
    let beast = service.update(&slug, patch).await?;
    Ok(Json(Envelope::new("Tailed Beast updated", beast)))
}

/// Delete a tailed beast
#[utoipa::path(
    delete,
    path = "/{slug}",
    tag = "Tailed Beasts",
    params(
        ("slug" = String, Path, description = "Tailed beast slug")
    ),
    responses(
        (status = 204, description = "Tailed beast deleted"),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn delete_tailed_beast<R: TailedBeastRepository>(
    State(service): State<Arc<TailedBeastService<R>>>,
    Path(slug): Path<String>,
) -> TailedBeastResult<impl IntoResponse> {
    service.delete(&slug).await?;
    Ok(StatusCode::NO_CONTENT)
}
