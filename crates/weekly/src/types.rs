use std::collections::BTreeMap;

use kochchef_menu::Dish;
use kochchef_shared::iso_date;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString, VariantArray};
use time::{Date, Weekday};

#[derive(
    Serialize,
    Deserialize,
    EnumString,
    Display,
    VariantArray,
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum DayKey {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
}

impl DayKey {
    /// Days since the Monday that starts the week.
    pub fn offset(self) -> i64 {
        match self {
            DayKey::Monday => 0,
            DayKey::Tuesday => 1,
            DayKey::Wednesday => 2,
            DayKey::Thursday => 3,
            DayKey::Friday => 4,
        }
    }

    /// `None` for Saturday and Sunday.
    pub fn from_weekday(weekday: Weekday) -> Option<Self> {
        match weekday {
            Weekday::Monday => Some(DayKey::Monday),
            Weekday::Tuesday => Some(DayKey::Tuesday),
            Weekday::Wednesday => Some(DayKey::Wednesday),
            Weekday::Thursday => Some(DayKey::Thursday),
            Weekday::Friday => Some(DayKey::Friday),
            Weekday::Saturday | Weekday::Sunday => None,
        }
    }

    pub fn german_name(self) -> &'static str {
        match self {
            DayKey::Monday => "Montag",
            DayKey::Tuesday => "Dienstag",
            DayKey::Wednesday => "Mittwoch",
            DayKey::Thursday => "Donnerstag",
            DayKey::Friday => "Freitag",
        }
    }

    pub fn short_name(self) -> &'static str {
        match self {
            DayKey::Monday => "Mo",
            DayKey::Tuesday => "Di",
            DayKey::Wednesday => "Mi",
            DayKey::Thursday => "Do",
            DayKey::Friday => "Fr",
        }
    }
}

/// Copy of a dish taken when it was put on a day's plan.
///
/// Later edits to the menu dish are not reflected here.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct DaySnapshotDish {
    pub id: i64,
    pub name: String,
    #[serde(serialize_with = "kochchef_shared::js_number::serialize")]
    pub price: f64,
    #[serde(default)]
    pub ingredients: String,
    #[serde(default)]
    pub vegetarian: bool,
    #[serde(default)]
    pub spicy: bool,
}

impl From<&Dish> for DaySnapshotDish {
    fn from(value: &Dish) -> Self {
        DaySnapshotDish {
            id: value.id,
            name: value.name.to_owned(),
            price: value.price,
            ingredients: value.ingredients.to_owned(),
            vegetarian: value.vegetarian,
            spicy: value.spicy,
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Week {
    pub id: String,
    #[serde(with = "iso_date")]
    pub start_date: Date,
    #[serde(with = "iso_date")]
    pub end_date: Date,
    #[serde(default)]
    pub days: BTreeMap<DayKey, Vec<DaySnapshotDish>>,
}

impl Week {
    /// Whether `date` lies within `[start_date, end_date]`.
    pub fn contains(&self, date: Date) -> bool {
        self.start_date <= date && date <= self.end_date
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WeeklyMenu {
    pub weeks: Vec<Week>,
    #[serde(default)]
    pub last_updated: String,
}

impl WeeklyMenu {
    pub fn week(&self, id: &str) -> Option<&Week> {
        self.weeks.iter().find(|w| w.id == id)
    }

    pub fn week_mut(&mut self, id: &str) -> Option<&mut Week> {
        self.weeks.iter_mut().find(|w| w.id == id)
    }
}
