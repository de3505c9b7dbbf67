use crate::model::Recipe;

/// What the renderer should show, derived fresh from session flags on every pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View<'a> {
    /// A fetch is in flight
    Loading,
    /// A search finished (or failed) with nothing to show
    EmptySearchResult,
    /// The favourites view is selected but nothing is marked
    EmptyFavorites,
    /// The current result list (possibly empty if nothing was fetched yet)
    ShowingSearchResults(&'a [Recipe]),
    /// The favourites list, independent of the result list
    ShowingFavorites(&'a [Recipe]),
}

/// Inputs of the view selection
#[derive(Debug, Clone, Copy)]
pub struct ViewInputs<'a> {
    pub loading: bool,
    pub searched: bool,
    pub show_favourites: bool,
    pub recipes: &'a [Recipe],
    pub favourites: &'a [Recipe],
}

impl<'a> View<'a> {
    /// Precedence: loading, empty favourites, favourites, empty search, results.
    pub fn select(inputs: ViewInputs<'a>) -> Self {
        if inputs.loading {
            View::Loading
        } else if inputs.show_favourites && inputs.favourites.is_empty() {
            View::EmptyFavorites
        } else if inputs.show_favourites {
            View::ShowingFavorites(inputs.favourites)
        } else if inputs.searched && inputs.recipes.is_empty() {
            View::EmptySearchResult
        } else {
            View::ShowingSearchResults(inputs.recipes)
        }
    }

    /// Recipe cards on screen, empty for the message-only states
    pub fn cards(&self) -> &'a [Recipe] {
        match *self {
            View::ShowingSearchResults(recipes) | View::ShowingFavorites(recipes) => recipes,
            View::Loading | View::EmptySearchResult | View::EmptyFavorites => &[],
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            View::Loading => "loading",
            View::EmptySearchResult => "empty-search-result",
            View::EmptyFavorites => "empty-favorites",
            View::ShowingSearchResults(_) => "search-results",
            View::ShowingFavorites(_) => "favorites",
        }
    }
}
