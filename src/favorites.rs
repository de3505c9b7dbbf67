use log::debug;

use crate::model::Recipe;

/// Session-lifetime set of recipes the user marked, keyed by `uri`.
///
/// Insertion order is kept so the favourites view lists recipes in the order
/// they were marked.
#[derive(Debug, Clone, Default)]
pub struct Favorites {
    recipes: Vec<Recipe>,
}

impl Favorites {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add the recipe if no favourite shares its uri, remove it otherwise.
    /// Returns whether the recipe is a favourite afterwards.
    pub fn toggle(&mut self, recipe: &Recipe) -> bool {
        if let Some(pos) = self.position(&recipe.uri) {
            self.recipes.remove(pos);
            debug!("Removed {} from favourites", recipe.uri);
            false
        } else {
            self.recipes.push(recipe.clone());
            debug!("Added {} to favourites", recipe.uri);
            true
        }
    }

    pub fn contains(&self, recipe: &Recipe) -> bool {
        self.position(&recipe.uri).is_some()
    }

    pub fn as_slice(&self) -> &[Recipe] {
        &self.recipes
    }

    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }

    fn position(&self, uri: &str) -> Option<usize> {
        self.recipes.iter().position(|fav| fav.uri == uri)
    }
}
