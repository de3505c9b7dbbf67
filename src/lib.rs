//! Cookify: browse a paginated random recipe listing, search the recipe API
//! and keep a session-scoped list of favourites.
//!
//! ```no_run
//! use std::sync::Arc;
//! use cookify::{Browser, BrowserConfig, EdamamClient};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = BrowserConfig::load()?;
//! let browser = Browser::new(Arc::new(EdamamClient::from_config(&config)?));
//! browser.mount().await;
//! browser.set_query("chicken").await;
//! browser.search().await;
//! println!("{}", browser.render().await);
//! # Ok(())
//! # }
//! ```

pub mod browser;
pub mod client;
pub mod commands;
pub mod config;
pub mod error;
pub mod favorites;
pub mod model;
pub mod pagination;
pub mod render;
pub mod session;
pub mod view;

pub use browser::Browser;
pub use client::{EdamamClient, RecipeSource};
pub use config::{ApiConfig, BrowserConfig};
pub use error::{BrowserError, FetchError};
pub use favorites::Favorites;
pub use model::{Ingredient, Recipe};
pub use pagination::{PageWindow, MAX_PAGE_FROM, PAGE_SIZE};
pub use session::{FetchKind, FetchRequest, PageChange, Session};
pub use view::View;
