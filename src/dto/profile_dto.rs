use axum::extract::Multipart;
use chrono::NaiveDate;
use validator::Validate;

use super::{read_file, read_text};
use crate::error::{Error, Result};
use crate::models::blob::Blob;
use crate::utils::form;

#[derive(Debug, Clone, Default)]
pub struct JobSeekerProfileForm {
    pub last_name: Option<String>,
    pub first_name: Option<String>,
    pub birth_date: Option<NaiveDate>,
    pub city: Option<String>,
    pub education: Option<String>,
    pub about: Option<String>,
    pub profession: Option<String>,
    pub job_position: Option<String>,
    pub skills: Vec<String>,
    pub experience: Option<String>,
    pub resume: Option<Blob>,
    pub photo: Option<Blob>,
}

impl JobSeekerProfileForm {
    pub async fn from_multipart(mut multipart: Multipart) -> Result<Self> {
        let mut form = Self::default();

        while let Some(field) = multipart.next_field().await? {
            let name = field.name().unwrap_or_default().to_string();
            match name.as_str() {
                "last_name" => form.last_name = form::optional_text(&read_text(field).await?),
                "first_name" => form.first_name = form::optional_text(&read_text(field).await?),
                "birth_date" => {
                    form.birth_date = form::optional_date("birth_date", &read_text(field).await?)?
                }
                "city" => form.city = form::optional_text(&read_text(field).await?),
                "education" => form.education = form::optional_text(&read_text(field).await?),
                "about" => form.about = form::optional_text(&read_text(field).await?),
                "profession" => form.profession = form::optional_text(&read_text(field).await?),
                "job_position" => {
                    form.job_position = form::optional_text(&read_text(field).await?)
                }
                "skills" | "skills[]" => {
                    for skill in form::skill_list(&read_text(field).await?) {
                        if !form.skills.iter().any(|s| s.eq_ignore_ascii_case(&skill)) {
                            form.skills.push(skill);
                        }
                    }
                }
                "experience" => form.experience = form::optional_text(&read_text(field).await?),
                "photo" => {
                    form.photo = read_file(field).await?;
                    ensure_image(form.photo.as_ref())?;
                }
                "resume" => {
                    form.resume = read_file(field).await?;
                    ensure_document(form.resume.as_ref())?;
                }
                _ => {}
            }
        }

        Ok(form)
    }
}

#[derive(Debug, Clone, Default, Validate)]
pub struct EmployerProfileForm {
    /// Trimmed on read, so an all-whitespace name arrives here empty.
    #[validate(length(min = 1, message = "Company name is required"))]
    pub company_name: String,
    pub website: Option<String>,
    pub photo: Option<Blob>,
}

impl EmployerProfileForm {
    pub async fn from_multipart(mut multipart: Multipart) -> Result<Self> {
        let mut form = Self::default();

        while let Some(field) = multipart.next_field().await? {
            let name = field.name().unwrap_or_default().to_string();
            match name.as_str() {
                "company_name" => {
                    form.company_name = read_text(field).await?.trim().to_string()
                }
                "website" => form.website = form::optional_text(&read_text(field).await?),
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

pub(crate) fn ensure_image(blob: Option<&Blob>) -> Result<()> {
    match blob {
        Some(b) if !b.is_image() => Err(Error::BadRequest(format!(
            "Photo must be a JPEG, PNG, GIF or WebP image (got {})",
            b.mime_type()
        ))),
        _ => Ok(()),
    }
}

pub(crate) fn ensure_document(blob: Option<&Blob>) -> Result<()> {
    match blob {
        Some(b) if !b.is_document() => Err(Error::BadRequest(format!(
            "Resume must be a PDF, DOC, DOCX, RTF or text file (got {})",
            b.mime_type()
        ))),
        _ => Ok(()),
    }
}
