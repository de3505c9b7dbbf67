use std::fmt::Write;

use crate::model::Recipe;
use crate::pagination::{MAX_PAGE_FROM, PAGE_SIZE};
use crate::session::Session;
use crate::view::View;

/// ANSI sequence that clears the terminal and homes the cursor
pub const SCROLL_TO_TOP: &str = "\x1B[2J\x1B[H";

pub const LOADING_MESSAGE: &str = "Loading recipes, please wait...";
pub const NO_RECIPES_MESSAGE: &str = "No recipes found, Try searching with different ingredients.";
pub const NO_FAVOURITES_MESSAGE: &str = "No favourite recipes found.";

const FILLED_HEART: char = '♥';
const EMPTY_HEART: char = '♡';

/// Render the whole screen for the current session state
pub fn render(session: &Session) -> String {
    let mut out = String::new();
    let mode = if session.is_showing_favourites() {
        "favourites"
    } else {
        "recipes"
    };
    let _ = writeln!(
        out,
        "Cookify [{}] favourites: {}",
        mode,
        session.favourites().len()
    );
    out.push('\n');

    match session.view() {
        View::Loading => push_line(&mut out, LOADING_MESSAGE),
        View::EmptySearchResult => push_line(&mut out, NO_RECIPES_MESSAGE),
        View::EmptyFavorites => push_line(&mut out, NO_FAVOURITES_MESSAGE),
        View::ShowingSearchResults(cards) | View::ShowingFavorites(cards) => {
            for (i, recipe) in cards.iter().enumerate() {
                out.push_str(&render_card(i + 1, recipe, session.is_favorite(recipe)));
            }
        }
    }

    if session.pagination_visible() {
        out.push('\n');
        push_line(&mut out, &render_pagination(session));
    }
    out
}

/// One numbered recipe card
pub fn render_card(number: usize, recipe: &Recipe, favourite: bool) -> String {
    let heart = if favourite { FILLED_HEART } else { EMPTY_HEART };
    let mut card = format!("{:>2}. {} {}\n", number, heart, recipe.label);
    if !recipe.ingredient_lines.is_empty() {
        let _ = writeln!(card, "    {}", recipe.ingredient_summary());
    }
    if !recipe.url.is_empty() {
        let _ = writeln!(card, "    {}", recipe.url);
    }
    card
}

fn render_pagination(session: &Session) -> String {
    let page = session.page();
    let previous = if page.has_previous() { "< prev" } else { "  ----" };
    let next = if page.has_next() { "next >" } else { "----  " };
    format!(
        "{}  page {}/{}  {}",
        previous,
        page.page_number(),
        MAX_PAGE_FROM / PAGE_SIZE + 1,
        next
    )
}

fn push_line(out: &mut String, line: &str) {
    out.push_str(line);
    out.push('\n');
}
