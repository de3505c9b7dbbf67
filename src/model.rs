use std::collections::HashSet;

use log::warn;
use serde::{Deserialize, Serialize};

/// One recipe as returned by the recipe API.
///
/// `uri` is the identity of a recipe: favourites and result lists are keyed by it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    pub uri: String,
    pub label: String,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub ingredient_lines: Vec<String>,
    #[serde(default)]
    pub ingredients: Vec<Ingredient>,
    #[serde(default)]
    pub url: String,
}

/// Structured ingredient record; only the text is kept.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ingredient {
    pub text: String,
}

impl Recipe {
    /// Ingredient lines as a single comma separated summary
    pub fn ingredient_summary(&self) -> String {
        self.ingredient_lines.join(", ")
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct SearchResponse {
    pub hits: Vec<Hit>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct Hit {
    pub recipe: Recipe,
}

impl SearchResponse {
    /// Flatten hits into a recipe list, keeping the first occurrence of each uri.
    pub fn into_recipes(self) -> Vec<Recipe> {
        let mut seen = HashSet::new();
        let mut recipes = Vec::with_capacity(self.hits.len());
        for hit in self.hits {
            if seen.insert(hit.recipe.uri.clone()) {
                recipes.push(hit.recipe);
            } else {
                warn!("Dropping duplicate recipe {} from response", hit.recipe.uri);
            }
        }
        recipes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_recipe_camel_case() {
        let json = r#"{
            "uri": "http://www.edamam.com/ontologies/edamam.owl#recipe_1",
            "label": "Chicken Vesuvio",
            "image": "https://example.com/chicken.jpg",
            "ingredientLines": ["1/2 cup olive oil", "5 cloves garlic"],
            "ingredients": [{"text": "1/2 cup olive oil", "weight": 108.0}],
            "url": "https://example.com/chicken-vesuvio",
            "calories": 4228.0
        }"#;

        let recipe: Recipe = serde_json::from_str(json).unwrap();
        assert_eq!(recipe.label, "Chicken Vesuvio");
        assert_eq!(recipe.ingredient_lines.len(), 2);
        assert_eq!(recipe.ingredients[0].text, "1/2 cup olive oil");
        assert_eq!(
            recipe.ingredient_summary(),
            "1/2 cup olive oil, 5 cloves garlic"
        );
    }

    #[test]
    fn test_optional_fields_default_to_empty() {
        let recipe: Recipe = serde_json::from_str(r#"{"uri": "r1", "label": "Toast"}"#).unwrap();
        assert!(recipe.image.is_empty());
        assert!(recipe.url.is_empty());
        assert!(recipe.ingredient_lines.is_empty());
        assert!(recipe.ingredients.is_empty());
    }

    #[test]
    fn test_missing_hits_is_an_error() {
        let result: Result<SearchResponse, _> = serde_json::from_str(r#"{"count": 0}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_into_recipes_drops_duplicate_uris() {
        let response: SearchResponse = serde_json::from_str(
            r#"{"hits": [
                {"recipe": {"uri": "r1", "label": "First"}},
                {"recipe": {"uri": "r2", "label": "Second"}},
                {"recipe": {"uri": "r1", "label": "Again"}}
            ]}"#,
        )
        .unwrap();

        let recipes = response.into_recipes();
        assert_eq!(recipes.len(), 2);
        assert_eq!(recipes[0].label, "First");
        assert_eq!(recipes[1].uri, "r2");
    }
}
