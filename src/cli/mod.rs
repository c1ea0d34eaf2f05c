mod menu;
mod server;
mod week;

pub use menu::*;
pub use server::*;
pub use week::*;

use std::sync::Arc;

use kochchef_menu::MenuStore;
use kochchef_shared::FileStorage;
use kochchef_weekly::WeeklyStore;

use crate::{Config, defaults::default_source};

/// Opens and loads the persisted menu named by `config`.
pub fn open_menu(config: &Config) -> anyhow::Result<MenuStore> {
    let mut store = MenuStore::new(
        Arc::new(FileStorage::new(&config.storage.dir)),
        default_source(&config.data),
    );
    store.load()?;

    Ok(store)
}

/// Opens and loads the persisted weekly plan named by `config`.
pub fn open_weekly(config: &Config) -> anyhow::Result<WeeklyStore> {
    let mut store = WeeklyStore::new(
        Arc::new(FileStorage::new(&config.storage.dir)),
        default_source(&config.data),
    );
    store.load()?;

    Ok(store)
}
