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

use crate::error::CharacterResult;
use crate::models::{Character, CreateCharacter, Debut, Personal, Rank, UpdateCharacter};
use crate::repository::CharacterRepository;
use crate::service::CharacterService;

/// OpenAPI documentation for the Characters API
#[derive(OpenApi)]
#[openapi(
    paths(
        list_characters,
        search_characters,
        create_character,
        get_character,
        update_character,
        delete_character,
    ),
    components(
        schemas(
            Character,
            Personal,
            Rank,
            Debut,
            CreateCharacter,
            UpdateCharacter,
            CharacterResponse,
            CharacterListResponse,
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
        (name = "Characters", description = "Character management endpoints")
    )
)]
pub struct ApiDoc;

/// `{ message, result }` wrapping one character.
#[derive(Serialize, ToSchema)]
#[allow(dead_code)]
struct CharacterResponse {
    message: String,
    result: Character,
}

/// List body. Pagination fields are present only when both `page` and
/// `limit` were supplied.
#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
#[allow(dead_code)]
struct CharacterListResponse {
    message: String,
    result: Vec<Character>,
    page: Option<i64>,
    limit: Option<i64>,
    total_pages: Option<u64>,
    total_items: Option<u64>,
}

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct SearchParams {
    /// Case-insensitive substring of the character name
    pub name: Option<String>,
}

/// Create the characters router with all HTTP endpoints
pub fn router<R: CharacterRepository + 'static>(service: CharacterService<R>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/", get(list_characters).post(create_character))
        .route("/search", get(search_characters))
        .route(
            "/{slug}",
            get(get_character)
                .put(update_character)
                .delete(delete_character),
        )
        .with_state(shared_service)
}

/// List characters, paginated when `page` and `limit` are given
#[utoipa::path(
    get,
    path = "",
    tag = "Characters",
    params(PaginationParams),
    responses(
        (status = 200, description = "Characters", body = CharacterListResponse),
        (status = 400, response = BadRequestResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn list_characters<R: CharacterRepository>(
    State(service): State<Arc<CharacterService<R>>>,
    Pagination(request): Pagination,
) -> CharacterResult<Json<Envelope<Vec<Character>>>> {
    let page = service.list_paged(request).await?;
    Ok(Json(page.into_envelope()))
}

/// Search characters by name
#[utoipa::path(
    get,
    path = "/search",
    tag = "Characters",
    params(SearchParams),
    responses(
        (status = 200, description = "Matching characters", body = CharacterListResponse),
        (status = 400, response = BadRequestResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn search_characters<R: CharacterRepository>(
    State(service): State<Arc<CharacterService<R>>>,
    Query(params): Query<SearchParams>,
) -> CharacterResult<Json<Envelope<Vec<Character>>>> {
    let found = service
        .search_by_name(params.name.as_deref().unwrap_or_default())
        .await?;
    Ok(Json(Envelope::new("Found characters", found)))
}

/// Create a character
#[utoipa::path(
    post,
    path = "",
    tag = "Characters",
    request_body = CreateCharacter,
    responses(
        (status = 201, description = "Character created", body = CharacterResponse),
        (status = 400, response = BadRequestValidationResponse),
        (status = 409, response = ConflictResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn create_character<R: CharacterRepository>(
    State(service): State<Arc<CharacterService<R>>>,
    ValidatedJson(input): ValidatedJson<CreateCharacter>,
) -> CharacterResult<impl IntoResponse> {
    let character = service.create(input).await?;
    Ok((
        StatusCode::CREATED,
        Json(Envelope::new("Character created", character)),
    ))
}

/// Get a character by slug
#[utoipa::path(
    get,
    path = "/{slug}",
    tag = "Characters",
    params(
        ("slug" = String, Path, description = "Character slug, e.g. `uzumaki-naruto`")
    ),
    responses(
        (status = 200, description = "Character found", body = CharacterResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn get_character<R: CharacterRepository>(
    State(service): State<Arc<CharacterService<R>>>,
    Path(slug): Path<String>,
) -> CharacterResult<Json<Envelope<Character>>> {
    let character = service.get_by_slug(&slug).await?;
    Ok(Json(Envelope::new("Success retrieved data", character)))
}

/// Partially update a character
#[utoipa::path(
    put,
    path = "/{slug}",
    tag = "Characters",
    params(
        ("slug" = String, Path, description = "Character slug")
    ),
    request_body = UpdateCharacter,
    responses(
        (status = 200, description = "Character updated", body = CharacterResponse),
        (status = 400, response = BadRequestValidationResponse),
        (status = 404, response = NotFoundResponse),
        (status = 409, response = ConflictResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn update_character<R: CharacterRepository>(
    State(service): State<Arc<CharacterService<R>>>,
    Path(slug): Path<String>,
    ValidatedJson(patch): ValidatedJson<UpdateCharacter>,
) -> CharacterResult<Json<Envelope<Character>>> {
    let character = service.update(&slug, patch).await?;
    Ok(Json(Envelope::new("Character updated", character)))
}

/// Delete a character
#[utoipa::path(
    delete,
    path = "/{slug}",
    tag = "Characters",
    params(
        ("slug" = String, Path, description = "Character slug")
    ),
    responses(
        (status = 204, description = "Character deleted"),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn delete_character<R: CharacterRepository>(
    State(service): State<Arc<CharacterService<R>>>,
    Path(slug): Path<String>,
) -> CharacterResult<impl IntoResponse> {
    service.delete(&slug).await?;
    Ok(StatusCode::NO_CONTENT)
}
