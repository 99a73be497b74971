//! Catalog DTOs, as served by the content backend.
//!
//! Field names follow the backend's camelCase JSON. Conversion into domain
//! records validates ids and question text; presentation fields are copied
//! across without interpretation (an unknown `fillType` degrades to solid).

use deeper_domain::{
    Category, CategoryId, CategoryStyle, DomainError, FillType, Question, QuestionId,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryDto {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub icon: String,
    pub color_primary: String,
    #[serde(default)]
    pub color_secondary: String,
    #[serde(default)]
    pub order: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fill_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gradient_from: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gradient_to: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gradient_angle: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border_width: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

impl TryFrom<CategoryDto> for Category {
    type Error = DomainError;

    fn try_from(dto: CategoryDto) -> Result<Self, Self::Error> {
        let id = CategoryId::parse_positive(dto.id)?;
        let fill_type = match dto.fill_type.as_deref() {
            None => FillType::default(),
            Some(raw) => raw.parse().unwrap_or_else(|err: DomainError| {
                tracing::warn!(category_id = %id, error = %err, "Unknown fill type, using solid");
                FillType::default()
            }),
        };

        let style = CategoryStyle {
            color_primary: dto.color_primary,
            color_secondary: dto.color_secondary,
            fill_type,
            gradient_from: dto.gradient_from,
            gradient_to: dto.gradient_to,
            gradient_angle: dto.gradient_angle,
            text_color: dto.text_color,
            border_color: dto.border_color,
            border_width: dto.border_width,
            image_url: dto.image_url,
        };

        Ok(Category::new(id, dto.name, dto.icon, dto.order, style))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionDto {
    pub id: i64,
    pub question_text: String,
    pub category_id: i64,
    #[serde(default)]
    pub is_premium: bool,
}

impl TryFrom<QuestionDto> for Question {
    type Error = DomainError;

    fn try_from(dto: QuestionDto) -> Result<Self, Self::Error> {
        let id = QuestionId::parse_positive(dto.id)?;
        // Category ids are not validated against the category list here:
        // orphaned questions are legal input and simply never get shown.
        let question = Question::new(id, dto.question_text, CategoryId::new(dto.category_id))?;
        Ok(question.with_premium(dto.is_premium))
    }
}

/// A full catalog document: `{ "categories": [...], "questions": [...] }`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogDto {
    pub categories: Vec<CategoryDto>,
    pub questions: Vec<QuestionDto>,
}

/// Domain records decoded from a catalog, plus how many records were dropped.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CatalogRecords {
    pub categories: Vec<Category>,
    pub questions: Vec<Question>,
    pub rejected: usize,
}

impl CatalogDto {
    /// Convert every record, skipping (and logging) the invalid ones.
    pub fn into_records(self) -> CatalogRecords {
        let mut records = CatalogRecords::default();

        for dto in self.categories {
            let raw_id = dto.id;
            match Category::try_from(dto) {
                Ok(category) => records.categories.push(category),
                Err(err) => {
                    tracing::warn!(category_id = raw_id, error = %err, "Skipping invalid category");
                    records.rejected += 1;
                }
            }
        }

        for dto in self.questions {
            let raw_id = dto.id;
            match Question::try_from(dto) {
                Ok(question) => records.questions.push(question),
                Err(err) => {
                    tracing::warn!(question_id = raw_id, error = %err, "Skipping invalid question");
                    records.rejected += 1;
                }
            }
        }

        records
    }
}
