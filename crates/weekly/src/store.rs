use std::sync::Arc;

use kochchef_shared::{
    DefaultSource, Error, Result, Storage, WEEKLY_MENU_DEFAULTS, date_stamp, invalid, not_found,
    storage::WEEKLY_MENU_KEY, today,
};
use serde_json::Value;
use time::Date;

use crate::{DayKey, DishSelectionSet, Week, WeeklyMenu, new_week};

/// Source of truth for the weekly plan, persisted under [`WEEKLY_MENU_KEY`].
pub struct WeeklyStore {
    storage: Arc<dyn Storage>,
    defaults: Arc<dyn DefaultSource>,
    weekly: Option<WeeklyMenu>,
}

impl WeeklyStore {
    pub fn new(storage: Arc<dyn Storage>, defaults: Arc<dyn DefaultSource>) -> Self {
        Self {
            storage,
            defaults,
            weekly: None,
        }
    }

    pub fn load(&mut self) -> Result<&WeeklyMenu> {
        let persisted = match self.storage.get(WEEKLY_MENU_KEY) {
            Ok(value) => value,
            Err(e) => {
                tracing::warn!(error = %e, "failed to read persisted weekly menu");
                None
            }
        };

        if let Some(text) = persisted {
            match parse_weekly_menu(&text) {
                Ok(weekly) => {
                    tracing::info!(weeks = weekly.weeks.len(), "weekly menu loaded from storage");
                    return Ok(self.weekly.insert(weekly));
                }
                Err(e) => {
                    tracing::warn!(error = %e, "persisted weekly menu is unreadable, using defaults")
                }
            }
        }

        let weekly = self.fetch_default().inspect_err(|e| {
            tracing::warn!(error = %e, "weekly menu could not be loaded");
        })?;

        tracing::info!(weeks = weekly.weeks.len(), "weekly menu loaded from defaults");

        Ok(self.weekly.insert(weekly))
    }

    pub fn is_loaded(&self) -> bool {
        self.weekly.is_some()
    }

    pub fn weekly(&self) -> Result<&WeeklyMenu> {
        self.weekly.as_ref().ok_or(Error::NotLoaded)
    }

    pub fn weeks(&self) -> Result<&[Week]> {
        Ok(&self.weekly()?.weeks)
    }

    pub fn save(&mut self) -> Result<()> {
        let storage = self.storage.clone();
        let weekly = self.weekly_mut()?;
        weekly.last_updated = date_stamp(today())?;

        storage.set(WEEKLY_MENU_KEY, &serde_json::to_string(weekly)?)?;

        tracing::info!(last_updated = %weekly.last_updated, "weekly menu saved");

        Ok(())
    }

    /// Appends an empty Monday-to-Friday week starting at `start`.
    pub fn add_week(&mut self, start: Date) -> Result<Week> {
        let weekly = self.weekly_mut()?;
        let week = new_week(&weekly.weeks, start);

        weekly.weeks.push(week.clone());

        self.save()?;

        Ok(week)
    }

    /// Commits `selection` into `day` of the given week.
    pub fn assign(
        &mut self,
        week_id: &str,
        day: DayKey,
        selection: &mut DishSelectionSet,
    ) -> Result<usize> {
        let Some(week) = self.weekly_mut()?.week_mut(week_id) else {
            not_found!("week '{week_id}'");
        };

        let added = selection.commit(week, day)?;

        self.save()?;

        tracing::info!(week_id, %day, added, "dishes assigned to day");

        Ok(added)
    }

    /// Removes the dish at `index` from a day. Returns `false` when nothing matched.
    pub fn remove_day_dish(&mut self, week_id: &str, day: DayKey, index: usize) -> Result<bool> {
        let removed = self
            .weekly_mut()?
            .week_mut(week_id)
            .and_then(|week| week.days.get_mut(&day))
            .filter(|dishes| index < dishes.len())
            .map(|dishes| dishes.remove(index))
            .is_some();

        if !removed {
            tracing::debug!(week_id, %day, index, "remove_day_dish: nothing to remove");
            return Ok(false);
        }

        self.save()?;

        Ok(true)
    }

    /// Pretty-printed snapshot of the whole plan.
    pub fn export_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self.weekly()?)?)
    }

    pub fn export_file_name(&self) -> Result<String> {
        Ok(format!(
            "kochchef-weekly-menu-{}.json",
            self.weekly()?.last_updated
        ))
    }

    pub fn import_json(&mut self, text: &str) -> Result<&WeeklyMenu> {
        let weekly = parse_weekly_menu(text)?;

        tracing::info!(weeks = weekly.weeks.len(), "weekly menu imported");

        self.weekly = Some(weekly);
        self.save()?;

        self.weekly()
    }

    pub fn reset_to_default(&mut self) -> Result<&WeeklyMenu> {
        self.storage.remove(WEEKLY_MENU_KEY)?;

        let weekly = self.fetch_default()?;

        tracing::info!("weekly menu reset to defaults");

        Ok(self.weekly.insert(weekly))
    }

    fn fetch_default(&self) -> Result<WeeklyMenu> {
        let text = self.defaults.fetch(WEEKLY_MENU_DEFAULTS)?;

        parse_weekly_menu(&text)
            .map_err(|e| Error::LoadFailure(format!("{WEEKLY_MENU_DEFAULTS}: {e}")))
    }

    fn weekly_mut(&mut self) -> Result<&mut WeeklyMenu> {
        self.weekly.as_mut().ok_or(Error::NotLoaded)
    }
}

/// Parses a weekly plan document; it must carry a `weeks` array.
pub fn parse_weekly_menu(text: &str) -> Result<WeeklyMenu> {
    let value: Value =
        serde_json::from_str(text).map_err(|e| Error::InvalidFormat(e.to_string()))?;

    if !value.get("weeks").is_some_and(Value::is_array) {
        invalid!("missing 'weeks' array");
    }

    serde_json::from_value(value).map_err(|e| Error::InvalidFormat(e.to_string()))
}
