use std::path::PathBuf;

use anyhow::{Result, bail};
use clap::{Args, Subcommand};
use kochchef_menu::{CategoryFilter, CategoryInput, DishInput, MenuFilter, visible_dishes};

use super::open_menu;
use crate::Config;

#[derive(Subcommand)]
pub enum MenuCommand {
    /// Print the dishes matching the given filters
    Show {
        /// Category id, or "all"
        #[arg(long, default_value = "all")]
        category: CategoryFilter,
        /// Search dish names and ingredients
        #[arg(long, short)]
        query: Option<String>,
        /// Only vegetarian dishes
        #[arg(long)]
        veg: bool,
        /// Only spicy dishes
        #[arg(long)]
        spicy: bool,
    },
    /// Print dish and category counts
    Stats,
    /// Write the menu as pretty JSON
    Export {
        /// Target file, defaults to kochchef-menu-<lastUpdated>.json
        #[arg(long, short)]
        output: Option<PathBuf>,
        /// Print to stdout instead of writing a file
        #[arg(long, conflicts_with = "output")]
        stdout: bool,
    },
    /// Replace the menu with the contents of a JSON file
    Import { file: PathBuf },
    /// Discard local changes and restore the default menu
    Reset,
}

#[derive(Subcommand)]
pub enum CategoryCommand {
    Add {
        name: String,
        #[arg(long, default_value = "")]
        icon: String,
    },
    Update {
        id: String,
        name: String,
        #[arg(long, default_value = "")]
        icon: String,
    },
    /// Delete an empty category
    Delete { id: String },
}

#[derive(Args)]
pub struct DishFields {
    #[arg(long)]
    pub name: Option<String>,
    #[arg(long, value_parser = parse_price)]
    pub price: Option<f64>,
    #[arg(long)]
    pub ingredients: Option<String>,
    #[arg(long)]
    pub vegetarian: Option<bool>,
    #[arg(long)]
    pub spicy: Option<bool>,
}

fn parse_price(value: &str) -> Result<f64, String> {
    let price: f64 = value.parse().map_err(|e| format!("{e}"))?;
    if !price.is_finite() {
        return Err(format!("'{value}' is not a finite number"));
    }
    Ok(price)
}

impl DishFields {
    fn apply(self, mut input: DishInput) -> DishInput {
        if let Some(name) = self.name {
            input.name = name;
        }
        if let Some(price) = self.price {
            input.price = price;
        }
        if let Some(ingredients) = self.ingredients {
            input.ingredients = ingredients;
        }
        if let Some(vegetarian) = self.vegetarian {
            input.vegetarian = vegetarian;
        }
        if let Some(spicy) = self.spicy {
            input.spicy = spicy;
        }
        input
    }
}

#[derive(Subcommand)]
pub enum DishCommand {
    Add {
        category: String,
        #[command(flatten)]
        fields: DishFields,
    },
    /// Change the given fields of a dish
    Update {
        category: String,
        id: i64,
        #[command(flatten)]
        fields: DishFields,
    },
    /// Move a dish to another category, optionally changing fields
    Move {
        from: String,
        to: String,
        id: i64,
        #[command(flatten)]
        fields: DishFields,
    },
    Delete { category: String, id: i64 },
}

pub fn run_menu(config: &Config, command: MenuCommand) -> Result<()> {
    let mut store = open_menu(config)?;

    match command {
        MenuCommand::Show {
            category,
            query,
            veg,
            spicy,
        } => {
            let filter = MenuFilter {
                category,
                query: query.unwrap_or_default(),
                vegetarian_only: veg,
                spicy_only: spicy,
            };

            for group in visible_dishes(store.menu()?, &filter) {
                println!("{} {}", group.icon, group.name);
                for dish in group.dishes {
                    let mut marks = String::new();
                    if dish.vegetarian {
                        marks.push_str(" [veg]");
                    }
                    if dish.spicy {
                        marks.push_str(" [scharf]");
                    }
                    println!("  #{:<14} {:<32} {:>7.2} €{marks}", dish.id, dish.name, dish.price);
                }
            }
        }
        MenuCommand::Stats => {
            let stats = store.stats()?;
            println!("Gerichte:     {}", stats.total_dishes);
            println!("Kategorien:   {}", stats.categories);
            println!("Vegetarisch:  {}", stats.vegetarian);
            println!("Scharf:       {}", stats.spicy);
        }
        MenuCommand::Export { output, stdout } => {
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
            tracing::info!(path = %path.display(), "Menu exported");
        }
        MenuCommand::Import { file } => {
            let text = std::fs::read_to_string(&file)?;
            let menu = store.import_json(&text)?;
            tracing::info!(
                categories = menu.categories.len(),
                path = %file.display(),
                "Menu imported"
            );
        }
        MenuCommand::Reset => {
            store.reset_to_default()?;
            tracing::info!("Menu reset to defaults");
        }
    }

    Ok(())
}

pub fn run_category(config: &Config, command: CategoryCommand) -> Result<()> {
    let mut store = open_menu(config)?;

    match command {
        CategoryCommand::Add { name, icon } => {
            let category = store.add_category(CategoryInput::new(name, icon))?;
            tracing::info!(id = %category.id, "Category added");
        }
        CategoryCommand::Update { id, name, icon } => {
            if !store.update_category(&id, CategoryInput::new(name, icon))? {
                bail!("category '{id}' not found");
            }
            tracing::info!(%id, "Category updated");
        }
        CategoryCommand::Delete { id } => {
            if !store.delete_category(&id)? {
                bail!("category '{id}' not found");
            }
            tracing::info!(%id, "Category deleted");
        }
    }

    Ok(())
}

pub fn run_dish(config: &Config, command: DishCommand) -> Result<()> {
    let mut store = open_menu(config)?;

    match command {
        DishCommand::Add { category, fields } => {
            let dish = store.add_dish(&category, fields.apply(DishInput::default()))?;
            tracing::info!(id = dish.id, %category, "Dish added");
        }
        DishCommand::Update {
            category,
            id,
            fields,
        } => {
            let Some(current) = store.menu()?.dish(&category, id) else {
                bail!("dish {id} not found in '{category}'");
            };
            let dish = fields.apply(current.clone().into()).into_dish(id);
            store.update_dish(&category, dish)?;
            tracing::info!(id, %category, "Dish updated");
        }
        DishCommand::Move {
            from,
            to,
            id,
            fields,
        } => {
            let Some(current) = store.menu()?.dish(&from, id) else {
                bail!("dish {id} not found in '{from}'");
            };
            let dish = fields.apply(current.clone().into()).into_dish(id);
            let moved = store.move_dish(&from, &to, dish)?;
            tracing::info!(id = moved.id, %from, %to, "Dish moved");
        }
        DishCommand::Delete { category, id } => {
            if !store.delete_dish(&category, id)? {
                bail!("dish {id} not found in '{category}'");
            }
            tracing::info!(id, %category, "Dish deleted");
        }
    }

    Ok(())
}
