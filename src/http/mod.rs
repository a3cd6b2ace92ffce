mod handlers;

use std::sync::Arc;

use axum::Router;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};

use crate::catalog::IngredientCatalog;
use crate::explain::ExplanationClient;
use crate::store::PlateStore;

/// Shared state handed to every request handler.
pub struct AppState {
    pub catalog: IngredientCatalog,
    pub store: PlateStore,
    pub explainer: Option<ExplanationClient>,
}

impl AppState {
    pub fn new(catalog: IngredientCatalog, explainer: Option<ExplanationClient>) -> Arc<Self> {
        Arc::new(Self {
            catalog,
            store: PlateStore::new(),
            explainer,
        })
    }
}

/// Build the application router with permissive CORS.
pub fn router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(handlers::health))
        .route("/ingredients", get(handlers::list_ingredients))
        .route("/ingredients/:id", get(handlers::get_ingredient))
        .route("/session/start", post(handlers::start_session))
        .route("/plate", get(handlers::read_plate))
        .route("/plate/add", post(handlers::add_item))
        .route("/plate/remove", post(handlers::remove_item))
        .route("/impact/summary", get(handlers::impact_summary))
        .route("/impact/explanation", get(handlers::impact_explanation))
        .layer(cors)
        .with_state(state)
}
