pub mod blob;
pub mod chat;
pub mod like;
pub mod profile;
pub mod reference;
pub mod user;
pub mod vacancy;
