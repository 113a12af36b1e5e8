// API layer - HTTP endpoints
pub mod health;
pub mod items;

pub use health::HealthApi;
pub use items::ItemsApi;

use std::sync::Arc;

use poem::middleware::{Cors, Tracing};
use poem::web::Json;
use poem::{Endpoint, EndpointExt, IntoResponse, Response, Route};
use poem_openapi::OpenApiService;

use crate::stores::ItemStore;
use crate::types::dto::common::ErrorResponse;

/// Compose the HTTP application
///
/// API endpoints are nested under `/api` and the Swagger UI under
/// `/swagger`. CORS accepts any origin. Requests rejected before reaching a
/// handler (unparseable body or path, wrong content type) are answered with
/// the `{ error }` envelope and their original status.
pub fn build_app(item_store: Arc<ItemStore>, server_url: String) -> impl Endpoint {
    let api_service = OpenApiService::new(
        (HealthApi, ItemsApi::new(item_store)),
        "Items API",
        env!("CARGO_PKG_VERSION"),
    )
    .server(format!("{}/api", server_url));

    let ui = api_service.swagger_ui();

    Route::new()
        .nest("/api", api_service)
        .nest("/swagger", ui)
        .catch_all_error(error_envelope)
        .with(Cors::new())
        .with(Tracing)
}

async fn error_envelope(err: poem::Error) -> Response {
    // Handler errors already carry their JSON body
    if err.is_from_response() {
        return err.into_response();
    }

    tracing::debug!("Rejected request: {}", err);

    let status = err.status();
    (
        status,
        Json(ErrorResponse {
            error: err.to_string(),
        }),
    )
        .into_response()
}
