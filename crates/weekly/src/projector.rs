use serde::Serialize;
use strum::VariantArray;
use time::{Date, Duration, Month};

use crate::{DayKey, DaySnapshotDish, Week};

/// The week whose date range contains `today`, else the first week.
pub fn current_week(weeks: &[Week], today: Date) -> Option<&Week> {
    weeks
        .iter()
        .find(|week| week.contains(today))
        .or_else(|| weeks.first())
}

/// Day preselected when the plan is opened; weekends fall back to Monday.
pub fn default_selected_day(today: Date) -> DayKey {
    DayKey::from_weekday(today.weekday()).unwrap_or(DayKey::Monday)
}

pub fn date_for_day(week: &Week, day: DayKey) -> Date {
    week.start_date.saturating_add(Duration::days(day.offset()))
}

/// `DD.MM.` label of a weekday slot.
pub fn date_label_for_day(week: &Week, day: DayKey) -> String {
    let date = date_for_day(week, day);

    format!("{:02}.{:02}.", date.day(), u8::from(date.month()))
}

pub fn is_today(week: &Week, day: DayKey, today: Date) -> bool {
    date_for_day(week, day) == today
}

pub fn dishes_for_day(week: &Week, day: DayKey) -> &[DaySnapshotDish] {
    week.days.get(&day).map(Vec::as_slice).unwrap_or_default()
}

/// Builds the week that follows `weeks`, spanning Monday to Friday of `start`.
///
/// `start` is expected to be a Monday; this is not checked.
pub fn new_week(weeks: &[Week], start: Date) -> Week {
    let mut position = weeks.len() + 1;
    while weeks.iter().any(|w| w.id == week_id(position)) {
        position += 1;
    }

    Week {
        id: week_id(position),
        start_date: start,
        end_date: start.saturating_add(Duration::days(4)),
        days: DayKey::VARIANTS.iter().map(|day| (*day, vec![])).collect(),
    }
}

fn week_id(position: usize) -> String {
    format!("week-{position}")
}

/// German range label, e.g. `13. - 17. Januar 2025`.
pub fn week_range_label(week: &Week) -> String {
    format!(
        "{}. - {}. {} {}",
        week.start_date.day(),
        week.end_date.day(),
        german_month(week.start_date.month()),
        week.start_date.year()
    )
}

fn german_month(month: Month) -> &'static str {
    match month {
        Month::January => "Januar",
        Month::February => "Februar",
        Month::March => "März",
        Month::April => "April",
        Month::May => "Mai",
        Month::June => "Juni",
        Month::July => "Juli",
        Month::August => "August",
        Month::September => "September",
        Month::October => "Oktober",
        Month::November => "November",
        Month::December => "Dezember",
    }
}

/// Which week and weekday the plan view is showing.
///
/// Kept apart from the persisted [`crate::WeeklyMenu`]; transitions return a new state.
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ViewState {
    pub week_id: Option<String>,
    pub selected_day: DayKey,
}

impl ViewState {
    pub fn initial(weeks: &[Week], today: Date) -> Self {
        Self {
            week_id: current_week(weeks, today).map(|w| w.id.to_owned()),
            selected_day: default_selected_day(today),
        }
    }

    pub fn select_day(self, day: DayKey) -> Self {
        Self {
            selected_day: day,
            ..self
        }
    }

    pub fn select_week(self, week_id: impl Into<String>) -> Self {
        Self {
            week_id: Some(week_id.into()),
            ..self
        }
    }

    pub fn week<'a>(&self, weeks: &'a [Week]) -> Option<&'a Week> {
        let id = self.week_id.as_deref()?;
        weeks.iter().find(|w| w.id == id)
    }
}

#[derive(Serialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DayTab {
    pub key: DayKey,
    pub name: &'static str,
    pub short_name: &'static str,
    pub date_label: String,
    pub is_today: bool,
    pub selected: bool,
}

/// Display-ready projection of one week of the plan.
#[derive(Serialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WeekView<'a> {
    pub week_id: &'a str,
    pub range: String,
    pub selected_day: DayKey,
    pub days: Vec<DayTab>,
    pub dishes: &'a [DaySnapshotDish],
}

pub fn project<'a>(weeks: &'a [Week], state: &ViewState, today: Date) -> Option<WeekView<'a>> {
    let week = state.week(weeks)?;

    let days = DayKey::VARIANTS
        .iter()
        .map(|&day| DayTab {
            key: day,
            name: day.german_name(),
            short_name: day.short_name(),
            date_label: date_label_for_day(week, day),
            is_today: is_today(week, day, today),
            selected: day == state.selected_day,
        })
        .collect();

    Some(WeekView {
        week_id: &week.id,
        range: week_range_label(week),
        selected_day: state.selected_day,
        days,
        dishes: dishes_for_day(week, state.selected_day),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;
    use time::macros::date;

    fn week(id: &str, start: Date) -> Week {
        Week {
            id: id.to_owned(),
            start_date: start,
            end_date: start + Duration::days(4),
            days: BTreeMap::new(),
        }
    }

    fn snapshot(name: &str) -> DaySnapshotDish {
        DaySnapshotDish {
            id: 1,
            name: name.to_owned(),
            price: 7.9,
            ingredients: String::new(),
            vegetarian: false,
            spicy: false,
        }
    }

    #[test]
    fn test_current_week_contains_today() {
        let weeks = vec![
            week("week-1", date!(2025 - 01 - 06)),
            week("week-2", date!(2025 - 01 - 13)),
        ];

        let current = current_week(&weeks, date!(2025 - 01 - 15)).unwrap();
        assert_eq!(current.id, "week-2");
    }

    #[test]
    fn test_current_week_falls_back_to_first() {
        let weeks = vec![
            week("week-1", date!(2025 - 01 - 06)),
            week("week-2", date!(2025 - 01 - 13)),
        ];

        // Saturday after week-2 is outside both ranges.
        let current = current_week(&weeks, date!(2025 - 01 - 18)).unwrap();
        assert_eq!(current.id, "week-1");
        assert!(current_week(&[], date!(2025 - 01 - 15)).is_none());
    }

    #[test]
    fn test_current_week_picks_first_overlapping() {
        let weeks = vec![
            week("week-a", date!(2025 - 01 - 13)),
            week("week-b", date!(2025 - 01 - 13)),
        ];

        assert_eq!(
            current_week(&weeks, date!(2025 - 01 - 14)).unwrap().id,
            "week-a"
        );
    }

    #[test]
    fn test_default_selected_day() {
        assert_eq!(default_selected_day(date!(2025 - 01 - 13)), DayKey::Monday);
        assert_eq!(default_selected_day(date!(2025 - 01 - 15)), DayKey::Wednesday);
        assert_eq!(default_selected_day(date!(2025 - 01 - 17)), DayKey::Friday);
        assert_eq!(default_selected_day(date!(2025 - 01 - 18)), DayKey::Monday);
        assert_eq!(default_selected_day(date!(2025 - 01 - 19)), DayKey::Monday);
    }

    #[test]
    fn test_date_labels() {
        let w = week("week-1", date!(2025 - 01 - 13));

        assert_eq!(date_label_for_day(&w, DayKey::Monday), "13.01.");
        assert_eq!(date_label_for_day(&w, DayKey::Wednesday), "15.01.");
        assert_eq!(date_label_for_day(&w, DayKey::Friday), "17.01.");

        let across = week("week-2", date!(2025 - 01 - 30));
        assert_eq!(date_label_for_day(&across, DayKey::Tuesday), "31.01.");
        assert_eq!(date_label_for_day(&across, DayKey::Wednesday), "01.02.");
    }

    #[test]
    fn test_is_today() {
        let w = week("week-1", date!(2025 - 01 - 13));

        assert!(is_today(&w, DayKey::Wednesday, date!(2025 - 01 - 15)));
        assert!(!is_today(&w, DayKey::Thursday, date!(2025 - 01 - 15)));
    }

    #[test]
    fn test_dishes_for_missing_day_is_empty() {
        let mut w = week("week-1", date!(2025 - 01 - 13));
        w.days.insert(DayKey::Monday, vec![snapshot("Gulasch")]);

        assert_eq!(dishes_for_day(&w, DayKey::Monday).len(), 1);
        assert!(dishes_for_day(&w, DayKey::Tuesday).is_empty());
    }

    #[test]
    fn test_new_week_spans_five_days() {
        let existing = vec![week("week-1", date!(2025 - 01 - 06))];
        let w = new_week(&existing, date!(2025 - 01 - 13));

        assert_eq!(w.id, "week-2");
        assert_eq!(w.end_date, date!(2025 - 01 - 17));
        assert_eq!(w.days.len(), 5);
        assert!(w.days.values().all(Vec::is_empty));
    }

    #[test]
    fn test_new_week_id_skips_taken_positions() {
        let existing = vec![week("week-2", date!(2025 - 01 - 06))];

        assert_eq!(new_week(&existing, date!(2025 - 01 - 13)).id, "week-3");
    }

    #[test]
    fn test_week_range_label() {
        let w = week("week-1", date!(2025 - 01 - 13));

        assert_eq!(week_range_label(&w), "13. - 17. Januar 2025");
    }

    #[test]
    fn test_view_state_transitions() {
        let weeks = vec![
            week("week-1", date!(2025 - 01 - 06)),
            week("week-2", date!(2025 - 01 - 13)),
        ];
        let today = date!(2025 - 01 - 15);

        let state = ViewState::initial(&weeks, today);
        assert_eq!(state.week_id.as_deref(), Some("week-2"));
        assert_eq!(state.selected_day, DayKey::Wednesday);

        let state = state.select_day(DayKey::Friday);
        assert_eq!(state.selected_day, DayKey::Friday);
        assert_eq!(state.week(&weeks).unwrap().id, "week-2");

        let state = state.select_week("week-1");
        assert_eq!(state.week(&weeks).unwrap().id, "week-1");
        assert_eq!(state.selected_day, DayKey::Friday);
    }

    #[test]
    fn test_project_marks_today_and_selection() {
        let mut w = week("week-1", date!(2025 - 01 - 13));
        w.days.insert(DayKey::Wednesday, vec![snapshot("Käsespätzle")]);
        let weeks = vec![w];
        let today = date!(2025 - 01 - 15);

        let state = ViewState::initial(&weeks, today);
        let view = project(&weeks, &state, today).unwrap();

        assert_eq!(view.range, "13. - 17. Januar 2025");
        assert_eq!(view.dishes.len(), 1);
        assert_eq!(view.days.len(), 5);
        assert!(view.days[2].is_today && view.days[2].selected);
        assert_eq!(view.days[2].date_label, "15.01.");
        assert_eq!(view.days[2].short_name, "Mi");
        assert!(view.days.iter().filter(|d| d.selected).count() == 1);

        let empty = project(&weeks, &state.select_day(DayKey::Monday), today).unwrap();
        assert!(empty.dishes.is_empty());
    }
}
