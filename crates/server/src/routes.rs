use axum::middleware;
use axum::routing::{get, post};
use axum::Router;
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

use models::{
    case_before_after, chemical_item, client_company, document, equipment_item, excluded_item,
    faq_item, price_item, requirement_item, work_condition_item, zone_item,
};

use crate::children::child_routes;
use crate::state::ServerState;
use crate::{admin, pages};

/// Build the full application router: public pages plus the
/// key-guarded admin API under `/admin`.
pub fn build_router(state: ServerState, cors: CorsLayer) -> Router {
    let public = Router::new()
        .route("/health", get(pages::health))
        .route("/", get(pages::home))
        .route("/category", get(pages::categories))
        .route("/category/:id", get(pages::category))
        .route("/service/:slug", get(pages::service_by_slug));

    let admin_api = Router::new()
        .route("/settings", get(admin::get_settings).put(admin::save_settings))
        .route("/banners", get(admin::list_banners).post(admin::create_banner))
        .route(
            "/banners/:id",
            get(admin::get_banner)
                .put(admin::update_banner)
                .delete(admin::delete_banner),
        )
        .route(
            "/categories",
            get(admin::list_categories).post(admin::create_category),
        )
        .route(
            "/categories/:id",
            get(admin::get_category)
                .put(admin::update_category)
                .delete(admin::delete_category),
        )
        .route(
            "/services",
            get(admin::list_services).post(admin::create_service),
        )
        .route(
            "/services/:id",
            get(admin::get_service)
                .put(admin::update_service)
                .delete(admin::delete_service),
        )
        .route("/services/:id/duplicate", post(admin::duplicate_service))
        .route("/services/duplicate", post(admin::duplicate_services))
        .merge(child_routes::<zone_item::Entity>("zone-items"))
        .merge(child_routes::<chemical_item::Entity>("chemical-items"))
        .merge(child_routes::<equipment_item::Entity>("equipment-items"))
        .merge(child_routes::<faq_item::Entity>("faq-items"))
        .merge(child_routes::<requirement_item::Entity>("requirement-items"))
        .merge(child_routes::<work_condition_item::Entity>("work-condition-items"))
        .merge(child_routes::<excluded_item::Entity>("excluded-items"))
        .merge(child_routes::<case_before_after::Entity>("cases"))
        .merge(child_routes::<client_company::Entity>("client-companies"))
        .merge(child_routes::<document::Entity>("documents"))
        .merge(child_routes::<price_item::Entity>("price-items"))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            admin::require_admin_key,
        ));

    Router::new()
        .merge(public)
        .nest("/admin", admin_api)
        .with_state(state)
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(
                    DefaultMakeSpan::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(
                    DefaultOnResponse::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}
