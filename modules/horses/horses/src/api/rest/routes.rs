use std::sync::Arc;

use axum::http::header;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Extension, Json, Router};
use stable_errors::{Problem, ValidationViolation};
use utoipa::OpenApi;

use super::{dto, handlers};
use crate::domain::service::AppServices;

#[derive(OpenApi)]
#[openapi(
    info(title = "Stable API", description = "Horse and owner records"),
    paths(
        handlers::list_horses,
        handlers::get_horse,
        handlers::create_horse,
        handlers::update_horse,
        handlers::delete_horse,
        handlers::search_owners,
        handlers::get_owner,
        handlers::create_owner,
        handlers::delete_owner,
    ),
    components(schemas(
        dto::SexDto,
        dto::OwnerDto,
        dto::HorseListDto,
        dto::HorseDetailDto,
        dto::HorseWriteRequest,
        dto::OwnerCreateRequest,
        Problem,
        ValidationViolation,
    )),
    tags(
        (name = "Horses", description = "Horse records"),
        (name = "Owners", description = "Horse owners"),
    )
)]
pub struct ApiDoc;

/// Routes of the horses module, with services injected as extensions.
pub fn register_routes(mut router: Router, services: &AppServices) -> Router {
    router = router
        .route(
            "/horses",
            get(handlers::list_horses).post(handlers::create_horse),
        )
        .route(
            "/horses/{id}",
            get(handlers::get_horse)
                .put(handlers::update_horse)
                .delete(handlers::delete_horse),
        )
        .route(
            "/owners",
            get(handlers::search_owners).post(handlers::create_owner),
        )
        .route(
            "/owners/{id}",
            get(handlers::get_owner).delete(handlers::delete_owner),
        );

    // Build once, serve as static JSON
    let doc = Arc::new(ApiDoc::openapi());
    router = router.route(
        "/openapi.json",
        get(move || {
            let doc = Arc::clone(&doc);
            async move {
                ([(header::CACHE_CONTROL, "no-store")], Json(doc.as_ref())).into_response()
            }
        }),
    );

    router
        .layer(Extension(Arc::clone(&services.horses)))
        .layer(Extension(Arc::clone(&services.owners)))
}
