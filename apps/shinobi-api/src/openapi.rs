//! OpenAPI documentation configuration

use utoipa::{
    Modify, OpenApi,
    openapi::security::{ApiKey, ApiKeyValue, HttpAuthScheme, HttpBuilder, SecurityScheme},
};

/// Combined OpenAPI documentation for all APIs
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Shinobi API",
        version = "0.1.0",
        description = "Characters and tailed beasts, looked up by slug"
    ),
    servers(
        (url = "http://localhost:8001", description = "Local development server")
    ),
    paths(crate::api::auth::login),
    components(schemas(crate::api::auth::LoginRequest, crate::api::auth::LoginResponse)),
    nest(
        (path = "/api/character", api = domain_characters::ApiDoc),
        (path = "/api/tailedbeast", api = domain_tailed_beasts::ApiDoc)
    ),
    modifiers(&SecurityAddon),
    security(
        ("api_key" = []),
        ("bearer_auth" = [])
    ),
    tags(
        (name = "Characters", description = "Character management endpoints"),
        (name = "Tailed Beasts", description = "Tailed beast management endpoints"),
        (name = "Auth", description = "Token issuance (AUTH_MODE=jwt)")
    )
)]
pub struct ApiDoc;

/// Registers both gate flavours; which one applies depends on `AUTH_MODE`.
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_default();
        components.add_security_scheme(
            "api_key",
            SecurityScheme::ApiKey(ApiKey::Header(ApiKeyValue::new("X-API-KEY"))),
        );
        components.add_security_scheme(
            "bearer_auth",
            SecurityScheme::Http(
                HttpBuilder::new()
                    .scheme(HttpAuthScheme::Bearer)
                    .bearer_format("JWT")
                    .build(),
            ),
        );
    }
}
