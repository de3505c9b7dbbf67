use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use cookify::{Browser, FetchError, PageWindow, Recipe, RecipeSource};
use tokio::sync::oneshot;

/// Source whose responses are released by the test, one gate per page start
struct GatedSource {
    gates: Mutex<HashMap<u32, oneshot::Receiver<Vec<Recipe>>>>,
}

impl GatedSource {
    fn new(pages: &[u32]) -> (Arc<Self>, HashMap<u32, oneshot::Sender<Vec<Recipe>>>) {
        let mut senders = HashMap::new();
        let mut gates = HashMap::new();
        for &from in pages {
            let (tx, rx) = oneshot::channel();
            senders.insert(from, tx);
            gates.insert(from, rx);
        }
        (
            Arc::new(Self {
                gates: Mutex::new(gates),
            }),
            senders,
        )
    }
}

#[async_trait]
impl RecipeSource for GatedSource {
    fn source_name(&self) -> &str {
        "gated"
    }

    async fn search(&self, _query: &str) -> Result<Vec<Recipe>, FetchError> {
        Ok(vec![])
    }

    async fn random_page(&self, window: PageWindow) -> Result<Vec<Recipe>, FetchError> {
        let gate = self.gates.lock().unwrap().remove(&window.from());
        match gate {
            Some(rx) => rx.await.map_err(|_| FetchError::Status(499)),
            None => Ok(vec![]),
        }
    }
}

fn recipe(uri: &str) -> Recipe {
    Recipe {
        uri: uri.to_string(),
        label: uri.to_string(),
        image: String::new(),
        ingredient_lines: vec![],
        ingredients: vec![],
        url: String::new(),
    }
}

#[tokio::test]
async fn test_slow_older_page_does_not_overwrite_newer_page() {
    let (source, mut senders) = GatedSource::new(&[0, 12]);
    let browser = Browser::new(source);
    let first_gate = senders.remove(&0).unwrap();
    let second_gate = senders.remove(&12).unwrap();

    let (mounted, change, ()) = tokio::join!(
        browser.mount(),
        browser.next_page(),
        async {
            // both requests are in flight by the time this runs
            second_gate.send(vec![recipe("page-2")]).unwrap();
            tokio::task::yield_now().await;
            first_gate.send(vec![recipe("page-1")]).unwrap();
        }
    );

    assert!(!mounted, "stale first page must be discarded");
    assert!(change.is_changed());

    let (loading, uris) = browser
        .read(|s| {
            (
                s.is_loading(),
                s.recipes().iter().map(|r| r.uri.clone()).collect::<Vec<_>>(),
            )
        })
        .await;
    assert!(!loading);
    assert_eq!(uris, vec!["page-2".to_string()]);
}

#[tokio::test]
async fn test_loading_stays_on_until_latest_request_finishes() {
    let (source, mut senders) = GatedSource::new(&[0, 12]);
    let browser = Browser::new(source);
    let first_gate = senders.remove(&0).unwrap();
    let second_gate = senders.remove(&12).unwrap();

    let observer = browser.clone();
    let (_, _, ()) = tokio::join!(browser.mount(), browser.next_page(), async {
        first_gate.send(vec![recipe("page-1")]).unwrap();
        tokio::task::yield_now().await;
        tokio::task::yield_now().await;
        // the old response has landed but the newest request is still pending
        assert!(observer.read(|s| s.is_loading()).await);
        assert!(observer.read(|s| s.recipes().is_empty()).await);
        second_gate.send(vec![recipe("page-2")]).unwrap();
    });

    assert!(!browser.read(|s| s.is_loading()).await);
    assert_eq!(browser.read(|s| s.recipes()[0].uri.clone()).await, "page-2");
}
