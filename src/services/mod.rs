pub mod auth_service;
pub mod chat_service;
pub mod like_service;
pub mod profile_service;
pub mod reference_service;
pub mod upload_service;
pub mod vacancy_service;
