//! Async front end that wires a [`Session`] to a [`RecipeSource`].
//!
//! The session sits behind a mutex that is never held across a network call,
//! so several operations may be in flight at once; request generations make
//! sure only the newest one lands in the result list.

use std::sync::Arc;

use log::debug;
use tokio::sync::Mutex;

use crate::client::RecipeSource;
use crate::model::Recipe;
use crate::render;
use crate::session::{FetchKind, FetchRequest, PageChange, Session};

#[derive(Clone)]
pub struct Browser {
    session: Arc<Mutex<Session>>,
    source: Arc<dyn RecipeSource>,
}

impl Browser {
    /// Start a fresh session against `source`
    pub fn new(source: Arc<dyn RecipeSource>) -> Self {
        Self {
            session: Arc::new(Mutex::new(Session::new())),
            source,
        }
    }

    /// Populate the default random listing. Returns whether the result was applied.
    pub async fn mount(&self) -> bool {
        debug!("Mounting browser on {}", self.source.source_name());
        self.fetch_random_page().await
    }

    pub async fn set_query(&self, query: impl Into<String>) {
        self.session.lock().await.set_query(query);
    }

    /// Search for the current query
    pub async fn search(&self) -> bool {
        let request = self.begin_search().await;
        self.complete(request).await
    }

    /// Fetch the random listing for the current page window
    pub async fn fetch_random_page(&self) -> bool {
        let request = self.begin_random_page().await;
        self.complete(request).await
    }

    /// Advance one page and refetch if the window moved
    pub async fn next_page(&self) -> PageChange {
        let (change, request) = self.begin_next_page().await;
        if let Some(request) = request {
            self.complete(request).await;
        }
        change
    }

    /// Go back one page and refetch if the window moved
    pub async fn previous_page(&self) -> PageChange {
        let (change, request) = self.begin_previous_page().await;
        if let Some(request) = request {
            self.complete(request).await;
        }
        change
    }

    /// Leave the favourites view and reload the current random page
    pub async fn go_home(&self) -> bool {
        let request = self.begin_home().await;
        self.complete(request).await
    }

    // The begin_* half updates the session immediately (loading, cleared
    // results, moved window); `complete` performs the request and applies it.

    pub async fn begin_search(&self) -> FetchRequest {
        self.session.lock().await.begin_search()
    }

    pub async fn begin_random_page(&self) -> FetchRequest {
        self.session.lock().await.begin_random_page()
    }

    pub async fn begin_next_page(&self) -> (PageChange, Option<FetchRequest>) {
        let mut session = self.session.lock().await;
        let change = session.next_page();
        let request = change.is_changed().then(|| session.begin_random_page());
        (change, request)
    }

    pub async fn begin_previous_page(&self) -> (PageChange, Option<FetchRequest>) {
        let mut session = self.session.lock().await;
        let change = session.previous_page();
        let request = change.is_changed().then(|| session.begin_random_page());
        (change, request)
    }

    pub async fn begin_home(&self) -> FetchRequest {
        let mut session = self.session.lock().await;
        session.show_search_results();
        session.begin_random_page()
    }

    /// Run `request` against the source and apply the result if it is still current
    pub async fn complete(&self, request: FetchRequest) -> bool {
        let result = match request.kind() {
            FetchKind::Search { query } => self.source.search(query).await,
            FetchKind::RandomPage(window) => self.source.random_page(*window).await,
        };
        self.session.lock().await.finish(&request, result)
    }

    pub async fn toggle_favorite(&self, recipe: &Recipe) -> bool {
        self.session.lock().await.toggle_favorite(recipe)
    }

    /// Toggle the favourite mark of the `index`-th card currently on screen.
    /// Returns `None` when there is no such card.
    pub async fn toggle_favorite_at(&self, index: usize) -> Option<bool> {
        let mut session = self.session.lock().await;
        let recipe = session.view().cards().get(index).cloned()?;
        Some(session.toggle_favorite(&recipe))
    }

    pub async fn is_favorite(&self, recipe: &Recipe) -> bool {
        self.session.lock().await.is_favorite(recipe)
    }

    pub async fn toggle_favorites_view(&self) {
        self.session.lock().await.toggle_favorites_view();
    }

    /// Run `f` against the current session state
    pub async fn read<R>(&self, f: impl FnOnce(&Session) -> R) -> R {
        let session = self.session.lock().await;
        f(&session)
    }

    pub async fn render(&self) -> String {
        let session = self.session.lock().await;
        render::render(&session)
    }
}
