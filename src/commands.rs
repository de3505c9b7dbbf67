use crate::error::BrowserError;

/// A line typed at the `cookify` prompt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Search(String),
    NextPage,
    PreviousPage,
    /// 1-based card number as shown on screen
    ToggleFavorite(usize),
    ToggleFavoritesView,
    Home,
    Help,
    Quit,
}

pub const HELP: &str = "\
Commands:
  search <text>, s <text>   search recipes
  next, n                   next page of the random listing
  prev, p                   previous page
  fav <n>, f <n>            mark or unmark card n as favourite
  favs, v                   switch between recipes and favourites
  home, h                   back to the random listing
  help                      show this help
  quit, q                   exit";

impl Command {
    /// Parse one input line. Blank lines yield `Ok(None)`.
    pub fn parse(line: &str) -> Result<Option<Command>, BrowserError> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(None);
        }
        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (line, ""),
        };

        let command = match word.to_lowercase().as_str() {
            "search" | "s" if !rest.is_empty() => Command::Search(rest.to_string()),
            "next" | "n" => Command::NextPage,
            "prev" | "p" => Command::PreviousPage,
            "fav" | "f" => match rest.parse::<usize>() {
                Ok(n) if n > 0 => Command::ToggleFavorite(n),
                _ => return Err(BrowserError::UnknownCommand(line.to_string())),
            },
            "favs" | "v" => Command::ToggleFavoritesView,
            "home" | "h" => Command::Home,
            "help" | "?" => Command::Help,
            "quit" | "q" | "exit" => Command::Quit,
            _ => return Err(BrowserError::UnknownCommand(line.to_string())),
        };
        Ok(Some(command))
    }
}
