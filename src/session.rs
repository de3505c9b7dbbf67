//! Per-user browsing state: query, current results, favourites and page window.
//!
//! A [`Session`] never talks to the network. Fetches are split into
//! [`Session::begin_search`] / [`Session::begin_random_page`], which return a
//! [`FetchRequest`] tagged with a generation, and [`Session::finish`], which
//! applies a result only if it belongs to the most recent request.

use std::fmt;

use log::{error, info, warn};

use crate::error::FetchError;
use crate::favorites::Favorites;
use crate::model::Recipe;
use crate::pagination::PageWindow;
use crate::view::{View, ViewInputs};

/// What a fetch asks the recipe API for
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchKind {
    /// Free-text search
    Search { query: String },
    /// A page of the random listing
    RandomPage(PageWindow),
}

impl fmt::Display for FetchKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchKind::Search { query } => write!(f, "search '{}'", query),
            FetchKind::RandomPage(window) => {
                write!(f, "random page [{}, {})", window.from(), window.to())
            }
        }
    }
}

/// Ticket for an in-flight fetch
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchRequest {
    generation: u64,
    kind: FetchKind,
}

impl FetchRequest {
    pub fn kind(&self) -> &FetchKind {
        &self.kind
    }
}

/// Outcome of a pagination step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageChange {
    /// The control was disabled; nothing changed
    Blocked,
    /// The window moved; a new random page should be fetched
    Changed { scroll_to_top: bool },
}

impl PageChange {
    pub fn is_changed(&self) -> bool {
        matches!(self, PageChange::Changed { .. })
    }
}

#[derive(Debug, Default)]
pub struct Session {
    query: String,
    recipes: Vec<Recipe>,
    loading: bool,
    searched: bool,
    page: PageWindow,
    favourites: Favorites,
    show_favourites: bool,
    generation: u64,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn has_searched(&self) -> bool {
        self.searched
    }

    pub fn page(&self) -> PageWindow {
        self.page
    }

    pub fn favourites(&self) -> &Favorites {
        &self.favourites
    }

    pub fn is_showing_favourites(&self) -> bool {
        self.show_favourites
    }

    /// Pagination controls are hidden while the favourites view is selected
    pub fn pagination_visible(&self) -> bool {
        !self.show_favourites
    }

    /// Start a free-text search for the current query. Pagination is untouched.
    pub fn begin_search(&mut self) -> FetchRequest {
        let query = self.query.clone();
        self.begin(FetchKind::Search { query })
    }

    /// Start fetching the random listing for the current page window.
    pub fn begin_random_page(&mut self) -> FetchRequest {
        let window = self.page;
        self.begin(FetchKind::RandomPage(window))
    }

    fn begin(&mut self, kind: FetchKind) -> FetchRequest {
        self.generation += 1;
        self.loading = true;
        self.searched = true;
        self.recipes.clear();
        FetchRequest {
            generation: self.generation,
            kind,
        }
    }

    /// Apply the outcome of `request`.
    ///
    /// Results of superseded requests are dropped and `false` is returned. A
    /// failure is logged and leaves an empty result list, which renders as
    /// "no recipes found".
    pub fn finish(
        &mut self,
        request: &FetchRequest,
        result: Result<Vec<Recipe>, FetchError>,
    ) -> bool {
        if request.generation != self.generation {
            warn!(
                "Discarding stale response for {} (generation {}, latest {})",
                request.kind, request.generation, self.generation
            );
            return false;
        }

        match result {
            Ok(recipes) => {
                info!("Loaded {} recipes for {}", recipes.len(), request.kind);
                self.recipes = recipes;
            }
            Err(e) => {
                match request.kind {
                    FetchKind::Search { .. } => error!("Error fetching recipes: {}", e),
                    FetchKind::RandomPage(_) => error!("Error fetching random recipes: {}", e),
                }
                self.recipes.clear();
            }
        }
        self.loading = false;
        true
    }

    pub fn next_page(&mut self) -> PageChange {
        if self.page.advance() {
            PageChange::Changed {
                scroll_to_top: true,
            }
        } else {
            PageChange::Blocked
        }
    }

    pub fn previous_page(&mut self) -> PageChange {
        if self.page.retreat() {
            PageChange::Changed {
                scroll_to_top: false,
            }
        } else {
            PageChange::Blocked
        }
    }

    /// Returns whether the recipe is a favourite afterwards
    pub fn toggle_favorite(&mut self, recipe: &Recipe) -> bool {
        self.favourites.toggle(recipe)
    }

    pub fn is_favorite(&self, recipe: &Recipe) -> bool {
        self.favourites.contains(recipe)
    }

    pub fn toggle_favorites_view(&mut self) {
        self.show_favourites = !self.show_favourites;
    }

    pub fn show_search_results(&mut self) {
        self.show_favourites = false;
    }

    pub fn view(&self) -> View<'_> {
        View::select(ViewInputs {
            loading: self.loading,
            searched: self.searched,
            show_favourites: self.show_favourites,
            recipes: &self.recipes,
            favourites: self.favourites.as_slice(),
        })
    }
}
