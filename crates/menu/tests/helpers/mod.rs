use std::sync::Arc;

use kochchef_menu::MenuStore;
use kochchef_shared::{DirectoryDefaults, FileStorage, Storage};
use temp_dir::TempDir;

pub const DEFAULT_MENU: &str = r#"{
  "categories": [
    {
      "id": "vorspeisen",
      "name": "Vorspeisen",
      "icon": "🥗",
      "dishes": [
        { "id": 1, "name": "Tomatensuppe", "price": 5.5, "ingredients": "Tomaten, Basilikum, Sahne", "vegetarian": true, "spicy": false },
        { "id": 2, "name": "Gulaschsuppe", "price": 6.9, "ingredients": "Rind, Paprika, Chili", "vegetarian": false, "spicy": true }
      ]
    },
    {
      "id": "hauptgerichte",
      "name": "Hauptgerichte",
      "icon": "🍖",
      "dishes": [
        { "id": 1, "name": "Wiener Schnitzel", "price": 16.5, "ingredients": "Kalb, Panade, Zitrone", "vegetarian": false, "spicy": false }
      ]
    },
    {
      "id": "desserts",
      "name": "Desserts",
      "icon": "🍰",
      "dishes": []
    }
  ],
  "lastUpdated": "2025-01-01"
}"#;

pub struct TestStore {
    pub _dir: TempDir,
    pub storage: Arc<FileStorage>,
    pub store: MenuStore,
}

pub fn setup() -> anyhow::Result<TestStore> {
    let dir = TempDir::new()?;
    let data = dir.child("data");
    std::fs::create_dir_all(&data)?;
    std::fs::write(data.join("menu.json"), DEFAULT_MENU)?;

    let storage = Arc::new(FileStorage::new(dir.child("storage")));
    let store = MenuStore::new(storage.clone(), Arc::new(DirectoryDefaults::new(data)));

    Ok(TestStore {
        _dir: dir,
        storage,
        store,
    })
}

pub fn persisted(storage: &dyn Storage) -> anyhow::Result<Option<serde_json::Value>> {
    Ok(match storage.get(kochchef_shared::storage::MENU_KEY)? {
        Some(text) => Some(serde_json::from_str(&text)?),
        None => None,
    })
}
