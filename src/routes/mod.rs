pub mod auth;
pub mod chat;
pub mod extract;
pub mod health;
pub mod like;
pub mod profile;
pub mod reference;
pub mod upload;
pub mod vacancy;

use axum::{
    extract::DefaultBodyLimit,
    middleware::{from_fn, from_fn_with_state},
    routing::{get, post},
    Router,
};
use tower_http::{services::ServeDir, trace::TraceLayer};

use crate::{
    config::Config,
    middleware::{
        auth::{require_auth, require_employer, require_job_seeker},
        cors::cors_layer,
    },
    AppState,
};

pub fn router(state: AppState, config: &Config) -> Router {
    let public_api = Router::new()
        .route("/health", get(health::health))
        .route("/api/auth/register", post(auth::register))
        .route("/api/auth/login", post(auth::login))
        .route("/api/professions", get(reference::list_professions))
        .route(
            "/api/professions/:id/positions",
            get(reference::list_positions),
        )
        .route("/api/professions/:id/skills", get(reference::list_skills));

    let job_seeker_api = Router::new()
        .route(
            "/api/profiles/jobSeeker",
            get(profile::get_job_seeker_profile).post(profile::upsert_job_seeker_profile),
        )
        .route("/api/jobseeker/vacancies", get(vacancy::list_for_job_seeker))
        .route(
            "/api/jobseeker/recommendations",
            get(vacancy::list_recommendations),
        )
        .route("/api/jobseeker/like", post(like::job_seeker_like))
        .route("/api/jobseeker/chats", get(chat::list_chats))
        .route("/api/upload/resume", post(upload::upload_resume))
        .route_layer(from_fn(require_job_seeker));

    let employer_api = Router::new()
        .route(
            "/api/profiles/employer",
            get(profile::get_employer_profile).post(profile::upsert_employer_profile),
        )
        .route(
            "/api/employer/vacancies",
            get(vacancy::list_vacancies).post(vacancy::create_vacancy),
        )
        .route(
            "/api/employer/vacancies/:id",
            get(vacancy::get_vacancy)
                .put(vacancy::update_vacancy)
                .delete(vacancy::delete_vacancy),
        )
        .route("/api/employer/candidates", get(profile::list_candidates))
        .route("/api/employer/like", post(like::employer_like))
        .route("/api/employer/chats", get(chat::list_chats))
        .route("/api/upload/photo", post(upload::upload_photo))
        .route_layer(from_fn(require_employer));

    let chat_api = Router::new().route(
        "/api/chats/:chat_id/messages",
        get(chat::list_messages).post(chat::post_message),
    );

    // role guards read the identity, so authentication wraps them
    let authed_api = job_seeker_api
        .merge(employer_api)
        .merge(chat_api)
        .route_layer(from_fn_with_state(state.clone(), require_auth));

    let uploads = Router::new()
        .nest_service("/uploads", ServeDir::new(state.upload_service.dir()))
        .route_layer(from_fn_with_state(state.clone(), require_auth));

    public_api
        .merge(authed_api)
        .merge(uploads)
        .with_state(state)
        .layer(cors_layer(config.cors_origin.as_deref()))
        .layer(TraceLayer::new_for_http())
        .layer(DefaultBodyLimit::max(config.max_upload_bytes()))
}
