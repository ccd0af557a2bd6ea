use axum::extract::Multipart;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::profile_dto::ensure_image;
use super::{read_file, read_text};
use crate::error::Result;
use crate::models::blob::Blob;
use crate::utils::form;

/// Multipart body of `POST /api/employer/vacancies`.
#[derive(Debug, Clone, Default, Validate)]
pub struct CreateVacancyForm {
    #[validate(length(min = 1, max = 255, message = "position_name is required"))]
    pub position_name: String,
    pub profession_id: Option<i32>,
    pub position_id: Option<i32>,
    pub salary: Option<Decimal>,
    pub description: Option<String>,
    pub requirements: Option<String>,
    pub photo: Option<Blob>,
}

impl CreateVacancyForm {
    pub async fn from_multipart(mut multipart: Multipart) -> Result<Self> {
        let mut form = Self::default();

        while let Some(field) = multipart.next_field().await? {
            let name = field.name().unwrap_or_default().to_string();
            match name.as_str() {
                "position_name" => {
                    form.position_name = read_text(field).await?.trim().to_string()
                }
                "profession_id" => {
                    form.profession_id =
                        form::optional_id("profession_id", &read_text(field).await?)?
                }
                "position_id" => {
                    form.position_id = form::optional_id("position_id", &read_text(field).await?)?
                }
                "salary" => form.salary = form::optional_decimal("salary", &read_text(field).await?)?,
                "description" => form.description = form::optional_text(&read_text(field).await?),
                "requirements" => {
                    form.requirements = form::optional_text(&read_text(field).await?)
                }
                "photo" => {
                    form.photo = read_file(field).await?;
                    ensure_image(form.photo.as_ref())?;
                }
                _ => {}
            }
        }

        Ok(form)
    }
}

/// JSON body of `PUT /api/employer/vacancies/:id`. Every field is written;
/// omitted optional fields are cleared.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct UpdateVacancyPayload {
    #[validate(
        length(max = 255),
        custom(function = "crate::utils::validation::not_blank")
    )]
    pub position_name: String,
    pub profession_id: Option<i32>,
    pub position_id: Option<i32>,
    pub salary: Option<Decimal>,
    pub description: Option<String>,
    pub requirements: Option<String>,
}
