use super::*;
use crate::view_models::filter_categories;
use std::sync::mpsc::{self, TryRecvError};
#[cfg(not(target_arch = "wasm32"))]
use crate::trivia::TriviaSource;

impl TriviaApp {
    /// Fetches the category list the first time the settings screen asks.
    pub fn ensure_categories(&mut self) {
        if self.categories == CategoryState::NotLoaded {
            self.load_categories();
        }
    }

    pub fn load_categories(&mut self) {
        let Some(source) = self.source.clone() else {
            self.categories = CategoryState::Failed("the HTTP client is not available".into());
            return;
        };
        log::info!("loading trivia categories");
        self.categories = CategoryState::Loading;
        self.category_rx = Some(spawn_category_fetch(source, self.repaint.clone()));
    }

    pub(super) fn poll_categories(&mut self) {
        let Some(rx) = self.category_rx.as_ref() else {
            return;
        };
        let result = match rx.try_recv() {
            Ok(result) => result,
            Err(TryRecvError::Empty) => return,
            Err(TryRecvError::Disconnected) => Err(crate::error::TriviaError::Network(
                "the category fetch stopped before answering".into(),
            )),
        };
        self.category_rx = None;

        self.categories = match result {
            Ok(mut list) => {
                log::info!("{} categories available", list.len());
                list.sort_by(|a, b| a.name.cmp(&b.name));
                if let CategoryChoice::Id(id) = self.form.category {
                    if !list.iter().any(|c| c.id == id) {
                        log::warn!("remembered category {id} no longer exists");
                        self.form.category = CategoryChoice::Any;
                    }
                }
                CategoryState::Loaded(list)
            }
            Err(err) => {
                log::warn!("categories failed to load: {err}");
                CategoryState::Failed(err.to_string())
            }
        };
    }

    /// Categories matching the search box.
    pub fn visible_categories(&self) -> Vec<&Category> {
        match &self.categories {
            CategoryState::Loaded(list) => filter_categories(list, &self.form.category_search),
            _ => Vec::new(),
        }
    }

    pub fn category_label(&self, choice: CategoryChoice) -> String {
        match choice {
            CategoryChoice::Any => "Any category".to_owned(),
            CategoryChoice::Id(id) => match &self.categories {
                CategoryState::Loaded(list) => list
                    .iter()
                    .find(|c| c.id == id)
                    .map(|c| c.name.clone())
                    .unwrap_or_else(|| format!("Category {id}")),
                _ => format!("Category {id}"),
            },
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn spawn_category_fetch(
    source: SharedSource,
    repaint: Option<egui::Context>,
) -> Receiver<TriviaResult<Vec<Category>>> {
    let (tx, rx) = mpsc::channel();
    std::thread::spawn(move || {
        let _ = tx.send(source.fetch_categories());
        if let Some(ctx) = repaint {
            ctx.request_repaint();
        }
    });
    rx
}

#[cfg(target_arch = "wasm32")]
fn spawn_category_fetch(
    source: SharedSource,
    repaint: Option<egui::Context>,
) -> Receiver<TriviaResult<Vec<Category>>> {
    let (tx, rx) = mpsc::channel();
    wasm_bindgen_futures::spawn_local(async move {
        let _ = tx.send(source.fetch_categories_async().await);
        if let Some(ctx) = repaint {
            ctx.request_repaint();
        }
    });
    rx
}
