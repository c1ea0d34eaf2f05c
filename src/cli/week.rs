use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::Subcommand;
use kochchef_shared::{parse_date, today};
use kochchef_weekly::{DayKey, DishSelectionSet, ViewState, project};

use super::{open_menu, open_weekly};
use crate::Config;

#[derive(Subcommand)]
pub enum WeekCommand {
    /// Print one day of the current or given week
    Show {
        /// Week id, defaults to the week containing today
        #[arg(long)]
        week: Option<String>,
        /// Day to print, defaults to today's weekday
        #[arg(long)]
        day: Option<DayKey>,
        /// Pretend today is this date (YYYY-MM-DD)
        #[arg(long)]
        today: Option<String>,
    },
    /// Append an empty week starting on the given Monday
    Add {
        /// Start date (YYYY-MM-DD)
        start: String,
    },
    /// Add menu dishes to a day, given as CATEGORY:DISH_ID
    Assign {
        week: String,
        day: DayKey,
        #[arg(required = true)]
        dishes: Vec<String>,
    },
    /// Remove the dish at a zero-based position from a day
    Remove {
        week: String,
        day: DayKey,
        index: usize,
    },
    /// Write the weekly plan as pretty JSON
    Export {
        /// Target file, defaults to kochchef-weekly-menu-<lastUpdated>.json
        #[arg(long, short)]
        output: Option<PathBuf>,
        /// Print to stdout instead of writing a file
        #[arg(long, conflicts_with = "output")]
        stdout: bool,
    },
    /// Replace the weekly plan with the contents of a JSON file
    Import { file: PathBuf },
    /// Discard local changes and restore the default plan
    Reset,
}

fn parse_dish_ref(value: &str) -> Result<(&str, i64)> {
    let Some((category, id)) = value.split_once(':') else {
        bail!("expected CATEGORY:DISH_ID, got '{value}'");
    };

    let id = id
        .parse()
        .with_context(|| format!("invalid dish id in '{value}'"))?;

    Ok((category, id))
}

pub fn run_week(config: &Config, command: WeekCommand) -> Result<()> {
    let mut store = open_weekly(config)?;

    match command {
        WeekCommand::Show { week, day, today: at } => {
            let today = match at {
                Some(value) => parse_date(&value)?,
                None => today(),
            };

            let weeks = store.weeks()?;
            let mut state = ViewState::initial(weeks, today);
            if let Some(week) = week {
                state = state.select_week(week);
            }
            if let Some(day) = day {
                state = state.select_day(day);
            }

            let Some(view) = project(weeks, &state, today) else {
                println!("Kein Wochenmenü für diesen Zeitraum.");
                return Ok(());
            };

            println!("{} ({})", view.range, view.week_id);
            for tab in &view.days {
                let marker = if tab.selected { ">" } else { " " };
                let today_mark = if tab.is_today { " (heute)" } else { "" };
                println!("{marker} {} {}{today_mark}", tab.short_name, tab.date_label);
            }
            println!();
            if view.dishes.is_empty() {
                println!("Keine Gerichte für diesen Tag.");
            }
            for (index, dish) in view.dishes.iter().enumerate() {
                println!("  {index}. {:<32} {:>7.2} €", dish.name, dish.price);
            }
        }
        WeekCommand::Add { start } => {
            let week = store.add_week(parse_date(&start)?)?;
            tracing::info!(id = %week.id, "Week added");
        }
        WeekCommand::Assign { week, day, dishes } => {
            let menu_store = open_menu(config)?;
            let menu = menu_store.menu()?;

            let mut selection = DishSelectionSet::new();
            for value in &dishes {
                let (category, id) = parse_dish_ref(value)?;
                if menu.dish(category, id).is_none() {
                    bail!("dish {id} not found in '{category}'");
                }
                if !selection.is_selected(category, id) {
                    selection.toggle(category, id, menu);
                }
            }

            let added = store.assign(&week, day, &mut selection)?;
            tracing::info!(%week, %day, added, "Dishes assigned");
        }
        WeekCommand::Remove { week, day, index } => {
            if !store.remove_day_dish(&week, day, index)? {
                bail!("no dish at position {index} on {day} of {week}");
            }
            tracing::info!(%week, %day, index, "Dish removed");
        }
        WeekCommand::Export { output, stdout } => {
            let json = store.export_json()?;
            if stdout {
                println!("{json}");
                return Ok(());
            }

            let path = match output {
                Some(path) => path,
                None => PathBuf::from(store.export_file_name()?),
            };
            std::fs::write(&path, json)?;
            tracing::info!(path = %path.display(), "Weekly menu exported");
        }
        WeekCommand::Import { file } => {
            let text = std::fs::read_to_string(&file)?;
            let weekly = store.import_json(&text)?;
            tracing::info!(weeks = weekly.weeks.len(), path = %file.display(), "Weekly menu imported");
        }
        WeekCommand::Reset => {
            store.reset_to_default()?;
            tracing::info!("Weekly menu reset to defaults");
        }
    }

    Ok(())
}
