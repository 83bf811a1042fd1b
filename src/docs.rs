use portico_models::{Profile, User};
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::modules::me::controller::get_me,
        crate::modules::profiles::controller::list_profiles,
        crate::modules::profiles::controller::list_my_profiles,
        crate::modules::profiles::controller::create_profile,
        crate::modules::profiles::controller::delete_profile,
    ),
    components(schemas(User, Profile)),
    modifiers(&SecurityAddon),
    tags(
        (name = "Users", description = "The authenticated user"),
        (name = "Profiles", description = "Profiles owned by users")
    ),
    info(
        title = "Portico API",
        version = "0.1.0",
        description = "Bearer-token gated profile service built with Axum and PostgreSQL.",
        license(
            name = "MIT"
        )
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            )
        }
    }
}
