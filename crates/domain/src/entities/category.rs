//! Category entity - thematic grouping of questions
//!
//! Categories are created and edited by the content backend and are immutable
//! from the swipe engine's point of view. Only `id` and `order` take part in
//! any rule; everything under [`CategoryStyle`] is carried through untouched
//! for whoever draws the cards.

use std::fmt;
use std::str::FromStr;

use crate::{CategoryId, DomainError};

pub const DEFAULT_TEXT_COLOR: &str = "#FFFFFF";
pub const DEFAULT_BORDER_COLOR: &str = "#FFFFFF";
pub const DEFAULT_BORDER_WIDTH: u32 = 8;
pub const DEFAULT_GRADIENT_ANGLE: i32 = 180;

/// A thematic grouping of questions.
#[derive(Debug, Clone, PartialEq)]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
    /// Icon key (e.g. "heart", "brain"); resolved by the front end
    pub icon: String,
    /// Display order; ties are broken by `id`
    pub order: i32,
    pub style: CategoryStyle,
}

impl Category {
    pub fn new(
        id: CategoryId,
        name: impl Into<String>,
        icon: impl Into<String>,
        order: i32,
        style: CategoryStyle,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            icon: icon.into(),
            order,
            style,
        }
    }
}

/// Sort categories into display order: `order` ascending, then `id` ascending.
pub fn sort_categories(categories: &mut [Category]) {
    categories.sort_by(|a, b| a.order.cmp(&b.order).then(a.id.cmp(&b.id)));
}

/// How a card's background is filled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FillType {
    #[default]
    Solid,
    Gradient,
    Image,
}

impl FillType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Solid => "solid",
            Self::Gradient => "gradient",
            Self::Image => "image",
        }
    }
}

impl fmt::Display for FillType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FillType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "solid" => Ok(Self::Solid),
            "gradient" => Ok(Self::Gradient),
            "image" => Ok(Self::Image),
            other => Err(DomainError::parse(format!("Unknown fill type: {other}"))),
        }
    }
}

/// Presentation attributes of a category.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CategoryStyle {
    pub color_primary: String,
    pub color_secondary: String,
    pub fill_type: FillType,
    pub gradient_from: Option<String>,
    pub gradient_to: Option<String>,
    pub gradient_angle: Option<i32>,
    pub text_color: Option<String>,
    pub border_color: Option<String>,
    pub border_width: Option<u32>,
    pub image_url: Option<String>,
}

/// Resolved card background.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Fill {
    Solid(String),
    Gradient { from: String, to: String, angle: i32 },
    Image(String),
}

impl CategoryStyle {
    pub fn solid(primary: impl Into<String>, secondary: impl Into<String>) -> Self {
        Self {
            color_primary: primary.into(),
            color_secondary: secondary.into(),
            ..Self::default()
        }
    }

    pub fn with_gradient(mut self, from: impl Into<String>, to: impl Into<String>) -> Self {
        self.fill_type = FillType::Gradient;
        self.gradient_from = Some(from.into());
        self.gradient_to = Some(to.into());
        self
    }

    pub fn with_image(mut self, url: impl Into<String>) -> Self {
        self.fill_type = FillType::Image;
        self.image_url = Some(url.into());
        self
    }

    /// Resolve the card background, falling back to the solid primary colour
    /// when a gradient or image fill is missing its parameters.
    pub fn fill(&self) -> Fill {
        match (self.fill_type, &self.gradient_from, &self.gradient_to, &self.image_url) {
            (FillType::Gradient, Some(from), Some(to), _) => Fill::Gradient {
                from: from.clone(),
                to: to.clone(),
                angle: self.gradient_angle.unwrap_or(DEFAULT_GRADIENT_ANGLE),
            },
            (FillType::Image, _, _, Some(url)) => Fill::Image(url.clone()),
            _ => Fill::Solid(self.color_primary.clone()),
        }
    }

    pub fn text_color(&self) -> &str {
        self.text_color.as_deref().unwrap_or(DEFAULT_TEXT_COLOR)
    }

    pub fn border_color(&self) -> &str {
        self.border_color.as_deref().unwrap_or(DEFAULT_BORDER_COLOR)
    }

    pub fn border_width(&self) -> u32 {
        self.border_width.unwrap_or(DEFAULT_BORDER_WIDTH)
    }
}
