//! Category records and their patch type.

use super::RecordId;
use serde::{Deserialize, Serialize};

/// Item grouping shown on the dashboard grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: RecordId,
    pub title: String,
    /// Image URL.
    pub image: String,
    /// Creation display date, assigned by the store.
    pub date: String,
    /// View counter, starts at zero.
    pub views: u64,
    pub slug: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub is_active: bool,
}

/// Caller-supplied fields for a new category.
///
/// `id`, `date` and `views` are assigned by the store.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewCategory {
    pub title: String,
    pub image: String,
    pub slug: String,
    pub description: Option<String>,
    pub is_active: bool,
}

impl NewCategory {
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            is_active: true,
            ..Self::default()
        }
    }
}

/// Partial update for a category. `None` leaves a field untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryPatch {
    pub title: Option<String>,
    pub image: Option<String>,
    pub views: Option<u64>,
    pub slug: Option<String>,
    /// `Some(None)` clears the description.
    pub description: Option<Option<String>>,
    pub is_active: Option<bool>,
}

impl CategoryPatch {
    /// Merges every set field into `category`.
    pub fn apply_to(&self, category: &mut Category) {
        if let Some(title) = &self.title {
            category.title = title.clone();
        }
        if let Some(image) = &self.image {
            category.image = image.clone();
        }
        if let Some(views) = self.views {
            category.views = views;
        }
        if let Some(slug) = &self.slug {
            category.slug = slug.clone();
        }
        if let Some(description) = &self.description {
            category.description = description.clone();
        }
        if let Some(is_active) = self.is_active {
            category.is_active = is_active;
        }
    }
}

impl Category {
    pub(crate) fn from_new(id: RecordId, date: String, data: NewCategory) -> Self {
        Self {
            id,
            title: data.title,
            image: data.image,
            date,
            views: 0,
            slug: data.slug,
            description: data.description,
            is_active: data.is_active,
        }
    }
}
