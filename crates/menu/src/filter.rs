use std::{convert::Infallible, str::FromStr};

use serde::Serialize;

use crate::{Category, Dish, Menu};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(String),
}

impl FromStr for CategoryFilter {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "" | "all" => CategoryFilter::All,
            id => CategoryFilter::Only(id.to_owned()),
        })
    }
}

impl CategoryFilter {
    fn accepts(&self, category: &Category) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(id) => &category.id == id,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MenuFilter {
    pub category: CategoryFilter,
    pub query: String,
    pub vegetarian_only: bool,
    pub spicy_only: bool,
}

impl MenuFilter {
    pub fn matches(&self, dish: &Dish) -> bool {
        if self.vegetarian_only && !dish.vegetarian {
            return false;
        }

        if self.spicy_only && !dish.spicy {
            return false;
        }

        if self.query.is_empty() {
            return true;
        }

        let query = self.query.to_lowercase();

        dish.name.to_lowercase().contains(&query) || dish.ingredients.to_lowercase().contains(&query)
    }
}

/// A category together with its dishes that passed a [`MenuFilter`].
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct VisibleCategory<'a> {
    pub id: &'a str,
    pub name: &'a str,
    pub icon: &'a str,
    pub dishes: Vec<&'a Dish>,
}

/// Dishes of `menu` matching `filter`, grouped by category in menu order.
///
/// Categories without a single matching dish are left out.
pub fn visible_dishes<'a>(menu: &'a Menu, filter: &MenuFilter) -> Vec<VisibleCategory<'a>> {
    menu.categories
        .iter()
        .filter(|category| filter.category.accepts(category))
        .filter_map(|category| {
            let dishes = category
                .dishes
                .iter()
                .filter(|dish| filter.matches(dish))
                .collect::<Vec<_>>();

            if dishes.is_empty() {
                return None;
            }

            Some(VisibleCategory {
                id: &category.id,
                name: &category.name,
                icon: &category.icon,
                dishes,
            })
        })
        .collect()
}

/// Flattened `(category, dish)` view of [`visible_dishes`].
pub fn visible_pairs<'a>(menu: &'a Menu, filter: &MenuFilter) -> Vec<(&'a Category, &'a Dish)> {
    menu.categories
        .iter()
        .filter(|category| filter.category.accepts(category))
        .flat_map(|category| {
            category
                .dishes
                .iter()
                .filter(|dish| filter.matches(dish))
                .map(move |dish| (category, dish))
        })
        .collect()
}
