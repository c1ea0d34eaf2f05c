use std::sync::Arc;

use kochchef_menu::MenuStore;
use kochchef_shared::{DefaultSource, FileStorage, Storage};
use kochchef_weekly::WeeklyStore;
use tokio::sync::Mutex;

use crate::{Config, defaults::default_source};

/// Stores shared by all request handlers, built once at startup.
#[derive(Clone)]
pub struct AppState {
    pub menu: Arc<Mutex<MenuStore>>,
    pub weekly: Arc<Mutex<WeeklyStore>>,
}

impl AppState {
    pub fn new(storage: Arc<dyn Storage>, defaults: Arc<dyn DefaultSource>) -> Self {
        Self {
            menu: Arc::new(Mutex::new(MenuStore::new(storage.clone(), defaults.clone()))),
            weekly: Arc::new(Mutex::new(WeeklyStore::new(storage, defaults))),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(
            Arc::new(FileStorage::new(&config.storage.dir)),
            default_source(&config.data),
        )
    }

    /// Loads both documents. A failed load is logged and leaves that store unset.
    pub async fn load(&self) {
        if let Err(e) = self.menu.lock().await.load() {
            tracing::error!(error = %e, "Menu could not be loaded");
        }

        if let Err(e) = self.weekly.lock().await.load() {
            tracing::error!(error = %e, "Weekly menu could not be loaded");
        }
    }
}
