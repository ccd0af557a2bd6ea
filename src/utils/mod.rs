pub mod crypto;
pub mod form;
pub mod token;
pub mod validation;
