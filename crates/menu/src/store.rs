use std::sync::Arc;

use kochchef_shared::{
    DefaultSource, Error, MENU_DEFAULTS, Result, Storage, date_stamp, invalid, not_found,
    storage::MENU_KEY, timestamp_millis, today,
};
use serde_json::Value;
use validator::Validate;

use crate::{
    Category, CategoryInput, DEFAULT_CATEGORY_ICON, Dish, DishInput, Menu, MenuStats,
    category_slug,
};

/// Source of truth for the menu, persisted under [`MENU_KEY`].
///
/// Every successful mutation is written back to storage immediately. Calling a
/// mutator before [`MenuStore::load`] succeeded returns [`Error::NotLoaded`].
pub struct MenuStore {
    storage: Arc<dyn Storage>,
    defaults: Arc<dyn DefaultSource>,
    menu: Option<Menu>,
}

impl MenuStore {
    pub fn new(storage: Arc<dyn Storage>, defaults: Arc<dyn DefaultSource>) -> Self {
        Self {
            storage,
            defaults,
            menu: None,
        }
    }

    /// Loads the persisted menu, falling back to the bundled default.
    pub fn load(&mut self) -> Result<&Menu> {
        let persisted = match self.storage.get(MENU_KEY) {
            Ok(value) => value,
            Err(e) => {
                tracing::warn!(error = %e, "failed to read persisted menu");
                None
            }
        };

        if let Some(text) = persisted {
            match parse_menu(&text) {
                Ok(menu) => {
                    tracing::info!(categories = menu.categories.len(), "menu loaded from storage");
                    return Ok(self.menu.insert(menu));
                }
                Err(e) => tracing::warn!(error = %e, "persisted menu is unreadable, using defaults"),
            }
        }

        let menu = self.fetch_default().inspect_err(|e| {
            tracing::warn!(error = %e, "menu could not be loaded");
        })?;

        tracing::info!(categories = menu.categories.len(), "menu loaded from defaults");

        Ok(self.menu.insert(menu))
    }

    pub fn is_loaded(&self) -> bool {
        self.menu.is_some()
    }

    pub fn menu(&self) -> Result<&Menu> {
        self.menu.as_ref().ok_or(Error::NotLoaded)
    }

    pub fn stats(&self) -> Result<MenuStats> {
        Ok(MenuStats::of(self.menu()?))
    }

    /// Stamps `lastUpdated` with today's date and persists the menu.
    pub fn save(&mut self) -> Result<()> {
        let storage = self.storage.clone();
        let menu = self.menu_mut()?;
        menu.last_updated = date_stamp(today())?;

        storage.set(MENU_KEY, &serde_json::to_string(menu)?)?;

        tracing::info!(last_updated = %menu.last_updated, "menu saved");

        Ok(())
    }

    /// Appends a new dish to a category, minting a timestamp id.
    pub fn add_dish(&mut self, category_id: &str, mut input: DishInput) -> Result<Dish> {
        input.name = input.name.trim().to_owned();
        input.validate()?;

        let Some(category) = self.menu_mut()?.category_mut(category_id) else {
            not_found!("category '{category_id}'");
        };

        let mut id = timestamp_millis();
        while category.dish(id).is_some() {
            id += 1;
        }

        let dish = input.into_dish(id);
        category.dishes.push(dish.clone());

        self.save()?;

        Ok(dish)
    }

    /// Replaces the dish with the same id.
    ///
    /// Returns `false` without validating `dish` when the category or dish is unknown.
    pub fn update_dish(&mut self, category_id: &str, mut dish: Dish) -> Result<bool> {
        let dish_id = dish.id;
        let Some(current) = self
            .menu_mut()?
            .category_mut(category_id)
            .and_then(|category| category.dish_mut(dish_id))
        else {
            tracing::debug!(category_id, dish_id, "update_dish: nothing to update");
            return Ok(false);
        };

        dish.name = dish.name.trim().to_owned();
        dish.validate()?;
        *current = dish;

        self.save()?;

        Ok(true)
    }

    /// Moves a dish to another category, keeping its id.
    ///
    /// The dish is removed from `from` (if present there) and appended to `to`
    /// with the given field values. Moving within one category is an update.
    /// Only when `to` already holds a dish with the same id is a fresh id minted.
    pub fn move_dish(&mut self, from: &str, to: &str, mut dish: Dish) -> Result<Dish> {
        dish.name = dish.name.trim().to_owned();

        if from == to {
            self.update_dish(from, dish.clone())?;
            return Ok(dish);
        }

        dish.validate()?;

        let menu = self.menu_mut()?;

        if menu.category(from).is_none() {
            not_found!("category '{from}'");
        }

        if menu.category(to).is_none() {
            not_found!("category '{to}'");
        }

        if let Some(source) = menu.category_mut(from) {
            source.take_dish(dish.id);
        }

        if let Some(target) = menu.category_mut(to) {
            if target.dish(dish.id).is_some() {
                let mut id = timestamp_millis();
                while target.dish(id).is_some() {
                    id += 1;
                }
                tracing::debug!(from, to, old_id = dish.id, new_id = id, "move_dish: id taken in target");
                dish.id = id;
            }
            target.dishes.push(dish.clone());
        }

        self.save()?;

        Ok(dish)
    }

    /// Removes a dish. Returns `false` when the category or dish is unknown.
    pub fn delete_dish(&mut self, category_id: &str, dish_id: i64) -> Result<bool> {
        let removed = self
            .menu_mut()?
            .category_mut(category_id)
            .and_then(|category| category.take_dish(dish_id))
            .is_some();

        if !removed {
            tracing::debug!(category_id, dish_id, "delete_dish: nothing to delete");
            return Ok(false);
        }

        self.save()?;

        Ok(true)
    }

    pub fn add_category(&mut self, mut input: CategoryInput) -> Result<Category> {
        input.name = input.name.trim().to_owned();
        input.validate()?;

        let id = category_slug(&input.name);
        let menu = self.menu_mut()?;

        if menu.category(&id).is_some() {
            invalid!("category '{id}' already exists");
        }

        let category = Category {
            id,
            name: input.name,
            icon: icon_or_default(&input.icon),
            dishes: vec![],
        };

        menu.categories.push(category.clone());

        self.save()?;

        Ok(category)
    }

    /// Renames a category and changes its icon. The id never changes.
    ///
    /// Returns `false` without validating `input` when the category is unknown.
    pub fn update_category(&mut self, id: &str, mut input: CategoryInput) -> Result<bool> {
        let Some(category) = self.menu_mut()?.category_mut(id) else {
            tracing::debug!(id, "update_category: nothing to update");
            return Ok(false);
        };

        input.name = input.name.trim().to_owned();
        input.validate()?;

        category.name = input.name;
        category.icon = icon_or_default(&input.icon);

        self.save()?;

        Ok(true)
    }

    /// Deletes an empty category.
    ///
    /// Fails with [`Error::CategoryNotEmpty`] while the category still holds dishes.
    pub fn delete_category(&mut self, id: &str) -> Result<bool> {
        let menu = self.menu_mut()?;

        let Some(position) = menu.categories.iter().position(|c| c.id == id) else {
            tracing::debug!(id, "delete_category: nothing to delete");
            return Ok(false);
        };

        let count = menu.categories[position].dishes.len();
        if count > 0 {
            return Err(Error::CategoryNotEmpty {
                id: id.to_owned(),
                count,
            });
        }

        menu.categories.remove(position);

        self.save()?;

        Ok(true)
    }

    /// Pretty-printed snapshot of the whole menu.
    pub fn export_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self.menu()?)?)
    }

    pub fn export_file_name(&self) -> Result<String> {
        Ok(format!("kochchef-menu-{}.json", self.menu()?.last_updated))
    }

    /// Replaces the whole menu with the given document and persists it.
    pub fn import_json(&mut self, text: &str) -> Result<&Menu> {
        let menu = parse_menu(text)?;

        tracing::info!(categories = menu.categories.len(), "menu imported");

        self.menu = Some(menu);
        self.save()?;

        self.menu()
    }

    /// Drops the persisted menu and reloads the bundled default.
    pub fn reset_to_default(&mut self) -> Result<&Menu> {
        self.storage.remove(MENU_KEY)?;

        let menu = self.fetch_default()?;

        tracing::info!("menu reset to defaults");

        Ok(self.menu.insert(menu))
    }

    fn fetch_default(&self) -> Result<Menu> {
        let text = self.defaults.fetch(MENU_DEFAULTS)?;

        parse_menu(&text).map_err(|e| Error::LoadFailure(format!("{MENU_DEFAULTS}: {e}")))
    }

    fn menu_mut(&mut self) -> Result<&mut Menu> {
        self.menu.as_mut().ok_or(Error::NotLoaded)
    }
}

/// Parses a menu document; it must carry a `categories` array.
pub fn parse_menu(text: &str) -> Result<Menu> {
    let value: Value =
        serde_json::from_str(text).map_err(|e| Error::InvalidFormat(e.to_string()))?;

    if !value.get("categories").is_some_and(Value::is_array) {
        invalid!("missing 'categories' array");
    }

    let menu: Menu =
        serde_json::from_value(value).map_err(|e| Error::InvalidFormat(e.to_string()))?;

    for (i, category) in menu.categories.iter().enumerate() {
        if menu.categories[..i].iter().any(|c| c.id == category.id) {
            invalid!("duplicate category id '{}'", category.id);
        }
    }

    Ok(menu)
}

fn icon_or_default(icon: &str) -> String {
    match icon.trim() {
        "" => DEFAULT_CATEGORY_ICON.to_owned(),
        icon => icon.to_owned(),
    }
}
