use std::env;
use std::sync::Arc;

use log::{error, info};
use tokio::io::{stdin, AsyncBufReadExt, BufReader};

use cookify::commands::{Command, HELP};
use cookify::render::SCROLL_TO_TOP;
use cookify::{Browser, BrowserConfig, BrowserError, EdamamClient, FetchRequest, PageChange};

#[tokio::main]
async fn main() -> Result<(), BrowserError> {
    env_logger::init();

    let config = BrowserConfig::load()?;
    if config.api.app_id.is_none() || config.api.app_key.is_none() {
        error!("EDAMAM_APP_ID / EDAMAM_APP_KEY are not set; every fetch will come back empty");
    }
    let client = EdamamClient::from_config(&config)?;
    let browser = Browser::new(Arc::new(client));

    // An optional initial query replaces the default random listing
    let initial_query: Vec<String> = env::args().skip(1).collect();
    let request = if initial_query.is_empty() {
        browser.begin_random_page().await
    } else {
        browser.set_query(initial_query.join(" ")).await;
        browser.begin_search().await
    };
    show_fetch(&browser, request).await;

    let mut lines = BufReader::new(stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let command = match Command::parse(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(e) => {
                println!("{}\n{}", e, HELP);
                continue;
            }
        };

        match command {
            Command::Quit => break,
            Command::Help => println!("{}", HELP),
            Command::Search(query) => {
                browser.set_query(query).await;
                let request = browser.begin_search().await;
                show_fetch(&browser, request).await;
            }
            Command::NextPage => {
                if !browser.read(|s| s.pagination_visible()).await {
                    continue;
                }
                match browser.begin_next_page().await {
                    (PageChange::Changed { scroll_to_top }, Some(request)) => {
                        if scroll_to_top {
                            print!("{}", SCROLL_TO_TOP);
                        }
                        show_fetch(&browser, request).await;
                    }
                    _ => info!("Next page is not available"),
                }
            }
            Command::PreviousPage => {
                if !browser.read(|s| s.pagination_visible()).await {
                    continue;
                }
                match browser.begin_previous_page().await {
                    (PageChange::Changed { scroll_to_top }, Some(request)) => {
                        if scroll_to_top {
                            print!("{}", SCROLL_TO_TOP);
                        }
                        show_fetch(&browser, request).await;
                    }
                    _ => info!("Previous page is not available"),
                }
            }
            Command::ToggleFavorite(number) => {
                if browser.toggle_favorite_at(number - 1).await.is_none() {
                    println!("No card number {}", number);
                    continue;
                }
                println!("{}", browser.render().await);
            }
            Command::ToggleFavoritesView => {
                browser.toggle_favorites_view().await;
                println!("{}", browser.render().await);
            }
            Command::Home => {
                let request = browser.begin_home().await;
                show_fetch(&browser, request).await;
            }
        }
    }

    Ok(())
}

/// Show the loading screen for a begun request, then the result once it lands
async fn show_fetch(browser: &Browser, request: FetchRequest) {
    println!("{}", browser.render().await);
    browser.complete(request).await;
    println!("{}", browser.render().await);
}
