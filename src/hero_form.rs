//! Edit form for the homepage Hero.
//!
//! The store accepts any Hero it is given. The category rules live here:
//! blank slots are dropped, duplicates removed keeping the first occurrence,
//! at most three categories are kept, and the first one is required.

use crate::app_response::AppResponse;
use crate::content_model::Hero;
use crate::content_store::ContentStore;

pub const MAX_SELECTED_CATEGORIES: usize = 3;

/// Cleans raw category input: trims, drops blanks and duplicates, keeps the
/// first [`MAX_SELECTED_CATEGORIES`] in order.
pub fn normalize_selected_categories<S: AsRef<str>>(input: &[S]) -> Vec<String> {
    let mut selected: Vec<String> = Vec::with_capacity(MAX_SELECTED_CATEGORIES);
    for raw in input {
        let id = raw.as_ref().trim();
        if id.is_empty() || selected.iter().any(|existing| existing == id) {
            continue;
        }
        selected.push(id.to_string());
        if selected.len() == MAX_SELECTED_CATEGORIES {
            break;
        }
    }
    selected
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeroForm {
    pub title: String,
    pub subtitle: String,
    pub description: String,
    pub category_slots: Vec<String>,
}

impl HeroForm {
    /// Prefills the form from the current Hero.
    pub fn from_hero(hero: &Hero) -> Self {
        Self {
            title: hero.title.clone(),
            subtitle: hero.subtitle.clone(),
            description: hero.description.clone(),
            category_slots: hero.selected_categories.clone(),
        }
    }

    /// Builds the Hero to save. `current` supplies the featured product
    /// cache, which the form does not edit.
    pub fn build(&self, current: &Hero) -> Result<Hero, AppResponse> {
        let first_slot_filled = self
            .category_slots
            .first()
            .is_some_and(|slot| !slot.trim().is_empty());
        if !first_slot_filled {
            return Err(AppResponse::ValidationError(
                "The first category is required".to_string(),
            ));
        }

        Ok(Hero {
            title: self.title.clone(),
            subtitle: self.subtitle.clone(),
            description: self.description.clone(),
            selected_categories: normalize_selected_categories(&self.category_slots),
            featured_products: current.featured_products.clone(),
        })
    }

    pub fn submit(&self, store: &mut ContentStore) -> Result<(), AppResponse> {
        let hero = self.build(&store.document().hero)?;
        store.set_hero(hero);
        Ok(())
    }
}
