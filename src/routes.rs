// src/routes.rs

use axum::{
    Router,
    http::{HeaderValue, Method, header},
    middleware,
    routing::{delete, get, post},
};
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::{
    handlers::{admin, auth, join, quiz},
    state::AppState,
    utils::jwt::{admin_middleware, auth_middleware},
};

/// Assembles the main application router.
///
/// * Public: teacher login/sign-up, student join and submission.
/// * Teacher console: behind `auth_middleware`.
/// * Teacher management: behind `auth_middleware` and `admin_middleware`.
pub fn create_router(state: AppState) -> Router {
    let cors = match HeaderValue::from_str(state.config.public_base_url.trim_end_matches('/')) {
        Ok(origin) => CorsLayer::new().allow_origin(origin),
        Err(_) => {
            tracing::warn!("PUBLIC_BASE_URL is not a valid origin, CORS disabled");
            CorsLayer::new()
        }
    }
    .allow_methods([Method::GET, Method::POST, Method::DELETE])
    .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE]);

    let auth_routes = Router::new()
        .route("/register", post(auth::register))
        .route("/login", post(auth::login));

    let join_routes = Router::new()
        .route("/{code}", get(join::resolve_quiz))
        .route("/{code}/submissions", post(join::submit_answers));

    let quiz_routes = Router::new()
        .route("/", get(quiz::list_quizzes).post(quiz::create_quiz))
        .route("/{id}", delete(quiz::delete_quiz))
        .route("/{id}/join", get(quiz::join_info))
        .route("/{id}/results", get(quiz::get_results))
        .layer(middleware::from_fn_with_state(state.clone(), auth_middleware));

    let admin_routes = Router::new()
        .route("/teachers", get(admin::list_teachers).post(admin::create_teacher))
        .route("/teachers/{id}", delete(admin::delete_teacher))
        // Auth runs first (outermost), then the admin check
        .layer(middleware::from_fn(admin_middleware))
        .layer(middleware::from_fn_with_state(state.clone(), auth_middleware));

    Router::new()
        .nest("/api/auth", auth_routes)
        .nest("/api/join", join_routes)
        .nest("/api/quizzes", quiz_routes)
        .nest("/api/admin", admin_routes)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors),
        )
        .with_state(state)
}
