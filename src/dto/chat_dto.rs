use serde::Deserialize;
use validator::Validate;

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct PostMessagePayload {
    #[validate(
        length(max = 4000, message = "message is too long"),
        custom(function = "crate::utils::validation::not_blank")
    )]
    pub message: String,
}

impl PostMessagePayload {
    /// Surrounding whitespace is not stored, so it does not count toward the limit.
    pub fn normalized(self) -> Self {
        Self {
            message: self.message.trim().to_string(),
        }
    }
}
