//! Gallery Filter
//!
//! One selected category (wildcard by default) and at most one selected
//! image for the modal. Filtering preserves the original list order.

use crate::models::errors::{AppError, AppResult};
use crate::models::types::GalleryImage;
use crate::utils::constants::WILDCARD_CATEGORY;

/// Active category filter
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(String),
}

impl CategoryFilter {
    pub fn as_str(&self) -> &str {
        match self {
            CategoryFilter::All => WILDCARD_CATEGORY,
            CategoryFilter::Only(category) => category,
        }
    }

    pub fn matches(&self, image: &GalleryImage) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(category) => image.category == category.as_str(),
        }
    }
}

/// Gallery view state over a fixed image list
#[derive(Debug, Clone)]
pub struct GalleryState<'a> {
    images: &'a [GalleryImage],
    filter: CategoryFilter,
    selected: Option<&'a GalleryImage>,
}

impl<'a> GalleryState<'a> {
    pub fn new(images: &'a [GalleryImage]) -> Self {
        Self {
            images,
            filter: CategoryFilter::All,
            selected: None,
        }
    }

    /// Wildcard first, then every distinct category in first-seen order
    pub fn categories(&self) -> Vec<&'a str> {
        let mut categories = vec![WILDCARD_CATEGORY];
        for image in self.images {
            if !categories.contains(&image.category) {
                categories.push(image.category);
            }
        }
        categories
    }

    pub fn filter(&self) -> &CategoryFilter {
        &self.filter
    }

    pub fn is_active(&self, category: &str) -> bool {
        self.filter.as_str() == category
    }

    /// Replace the selection. The value must be the wildcard or a category
    /// present in the list; otherwise the selection is left unchanged.
    pub fn set_category(&mut self, category: &str) -> AppResult<()> {
        if category == WILDCARD_CATEGORY {
            self.filter = CategoryFilter::All;
            return Ok(());
        }
        if self.images.iter().any(|image| image.category == category) {
            self.filter = CategoryFilter::Only(category.to_string());
            Ok(())
        } else {
            Err(AppError::bad_request(format!(
                "Unknown gallery category: {}",
                category
            )))
        }
    }

    /// Images for the current filter, original order
    pub fn visible(&self) -> Vec<&'a GalleryImage> {
        self.images
            .iter()
            .filter(|image| self.filter.matches(image))
            .collect()
    }

    /// Open the modal for `id`, replacing any image already open. Only
    /// images the current filter shows can be opened.
    pub fn select(&mut self, id: u32) -> AppResult<&'a GalleryImage> {
        let image = self
            .images
            .iter()
            .filter(|image| self.filter.matches(image))
            .find(|image| image.id == id)
            .ok_or_else(|| {
                AppError::not_found(format!(
                    "No gallery image with id {} in {}",
                    id,
                    self.filter.as_str()
                ))
            })?;
        self.selected = Some(image);
        Ok(image)
    }

    /// Close the modal
    pub fn dismiss(&mut self) {
        self.selected = None;
    }

    pub fn selected(&self) -> Option<&'a GalleryImage> {
        self.selected
    }
}
