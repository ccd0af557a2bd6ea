pub mod config;
pub mod database;
pub mod dto;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod utils;

use crate::config::Config;
use crate::services::{
    auth_service::AuthService, chat_service::ChatService, like_service::LikeService,
    profile_service::ProfileService, reference_service::ReferenceService,
    upload_service::UploadService, vacancy_service::VacancyService,
};
use crate::utils::token::JwtKeys;
use sqlx::PgPool;

#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    pub auth_service: AuthService,
    pub profile_service: ProfileService,
    pub vacancy_service: VacancyService,
    pub like_service: LikeService,
    pub chat_service: ChatService,
    pub reference_service: ReferenceService,
    pub upload_service: UploadService,
}

impl AppState {
    pub fn new(pool: PgPool, config: &Config) -> Self {
        let keys = JwtKeys::new(&config.jwt_secret, config.jwt_ttl_minutes);

        let auth_service = AuthService::new(pool.clone(), keys);
        let profile_service = ProfileService::new(pool.clone());
        let vacancy_service = VacancyService::new(pool.clone());
        let like_service = LikeService::new(pool.clone());
        let chat_service = ChatService::new(pool.clone());
        let reference_service = ReferenceService::new(pool.clone());
        let upload_service = UploadService::new(config.uploads_dir.clone());

        Self {
            pool,
            auth_service,
            profile_service,
            vacancy_service,
            like_service,
            chat_service,
            reference_service,
            upload_service,
        }
    }
}
