use kochchef_menu::{Dish, Menu};
use kochchef_shared::{Error, Result};
use serde::Serialize;

use crate::{DayKey, DaySnapshotDish, Week};

#[derive(Serialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SelectionEntry {
    pub category_id: String,
    pub category_name: String,
    #[serde(flatten)]
    pub dish: Dish,
}

/// Scratch list of dishes picked for one day of the plan, in pick order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DishSelectionSet {
    entries: Vec<SelectionEntry>,
}

impl DishSelectionSet {
    pub fn new() -> Self {
        Self::default()
    }

    fn position(&self, category_id: &str, dish_id: i64) -> Option<usize> {
        self.entries
            .iter()
            .position(|e| e.category_id == category_id && e.dish.id == dish_id)
    }

    /// Deselects the dish if selected, otherwise selects a snapshot of it
    /// from `menu`. Dishes missing from `menu` are ignored.
    ///
    /// Returns whether the dish is selected afterwards.
    pub fn toggle(&mut self, category_id: &str, dish_id: i64, menu: &Menu) -> bool {
        if let Some(pos) = self.position(category_id, dish_id) {
            self.entries.remove(pos);
            return false;
        }

        let Some(category) = menu.category(category_id) else {
            return false;
        };

        let Some(dish) = category.dish(dish_id) else {
            return false;
        };

        self.entries.push(SelectionEntry {
            category_id: category.id.to_owned(),
            category_name: category.name.to_owned(),
            dish: dish.clone(),
        });

        true
    }

    pub fn is_selected(&self, category_id: &str, dish_id: i64) -> bool {
        self.position(category_id, dish_id).is_some()
    }

    pub fn count(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[SelectionEntry] {
        &self.entries
    }

    /// Appends every selected dish to `week`'s `day`, then empties the set.
    ///
    /// Returns the number of dishes added.
    pub fn commit(&mut self, week: &mut Week, day: DayKey) -> Result<usize> {
        if self.entries.is_empty() {
            return Err(Error::EmptySelection);
        }

        let dishes = week.days.entry(day).or_default();
        let added = self.entries.len();

        dishes.extend(self.entries.drain(..).map(|e| DaySnapshotDish::from(&e.dish)));

        Ok(added)
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
