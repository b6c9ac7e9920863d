use serde::{Deserialize, Serialize};

use crate::core::{CategoryInfo, EventGroup};
use crate::error::{ViewerError, ViewerResult};
use crate::render::Color;

/// Default category colors (`#FF0000`, `#009933`, `#FFFF00`).
#[must_use]
pub fn default_palette() -> Vec<Color> {
    vec![
        Color::rgb(1.0, 0.0, 0.0),
        Color::rgb(0.0, 0.6, 0.2),
        Color::rgb(1.0, 1.0, 0.0),
    ]
}

/// Ordinal category-to-color mapping.
///
/// A declared category takes the palette entry at its declaration index,
/// cycling when there are more categories than colors. Lookups never mutate
/// the palette, so the same id always yields the same color.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryPalette {
    ids: Vec<String>,
    colors: Vec<Color>,
}

impl CategoryPalette {
    pub fn new(categories: &[CategoryInfo], colors: Vec<Color>) -> ViewerResult<Self> {
        if colors.is_empty() {
            return Err(ViewerError::InvalidData(
                "palette must contain at least one color".to_owned(),
            ));
        }
        for color in &colors {
            color.validate()?;
        }

        Ok(Self {
            ids: categories.iter().map(|category| category.id.clone()).collect(),
            colors,
        })
    }

    /// Color of a declared category, `None` for unknown ids.
    #[must_use]
    pub fn color_for(&self, category_id: &str) -> Option<Color> {
        self.ids
            .iter()
            .position(|id| id == category_id)
            .map(|index| self.color_at(index))
    }

    /// Color used for spatial event dots.
    ///
    /// Groups that share an id with a declared category reuse its color;
    /// otherwise they take the slots after the declared categories.
    #[must_use]
    pub fn color_for_group(&self, group: EventGroup) -> Color {
        self.color_for(group.id())
            .unwrap_or_else(|| self.color_at(self.ids.len() + group.ordinal()))
    }

    #[must_use]
    pub fn color_at(&self, index: usize) -> Color {
        self.colors[index % self.colors.len()]
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }
}
