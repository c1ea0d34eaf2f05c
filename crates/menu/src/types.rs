use serde::{Deserialize, Serialize};
use validator::Validate;

pub const DEFAULT_CATEGORY_ICON: &str = "🍽️";

#[derive(Serialize, Deserialize, Validate, Clone, Debug, PartialEq)]
pub struct Dish {
    pub id: i64,
    #[validate(length(min = 1))]
    pub name: String,
    #[validate(range(min = 0.0))]
    #[serde(serialize_with = "kochchef_shared::js_number::serialize")]
    pub price: f64,
    #[serde(default)]
    pub ingredients: String,
    #[serde(default)]
    pub vegetarian: bool,
    #[serde(default)]
    pub spicy: bool,
}

/// Editable dish fields, without an id.
#[derive(Serialize, Deserialize, Validate, Clone, Debug, Default, PartialEq)]
pub struct DishInput {
    #[validate(length(min = 1))]
    pub name: String,
    #[validate(range(min = 0.0))]
    #[serde(serialize_with = "kochchef_shared::js_number::serialize")]
    pub price: f64,
    #[serde(default)]
    pub ingredients: String,
    #[serde(default)]
    pub vegetarian: bool,
    #[serde(default)]
    pub spicy: bool,
}

impl DishInput {
    pub fn into_dish(self, id: i64) -> Dish {
        Dish {
            id,
            name: self.name,
            price: self.price,
            ingredients: self.ingredients,
            vegetarian: self.vegetarian,
            spicy: self.spicy,
        }
    }
}

impl From<Dish> for DishInput {
    fn from(dish: Dish) -> Self {
        Self {
            name: dish.name,
            price: dish.price,
            ingredients: dish.ingredients,
            vegetarian: dish.vegetarian,
            spicy: dish.spicy,
        }
    }
}

/// Editable category fields. An empty icon falls back to [`DEFAULT_CATEGORY_ICON`].
#[derive(Serialize, Deserialize, Validate, Clone, Debug, Default, PartialEq)]
pub struct CategoryInput {
    #[validate(length(min = 1))]
    pub name: String,
    #[serde(default)]
    pub icon: String,
}

impl CategoryInput {
    pub fn new(name: impl Into<String>, icon: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            icon: icon.into(),
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Category {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub icon: String,
    #[serde(default)]
    pub dishes: Vec<Dish>,
}

impl Category {
    pub fn dish(&self, id: i64) -> Option<&Dish> {
        self.dishes.iter().find(|d| d.id == id)
    }

    fn dish_position(&self, id: i64) -> Option<usize> {
        self.dishes.iter().position(|d| d.id == id)
    }

    pub(crate) fn take_dish(&mut self, id: i64) -> Option<Dish> {
        self.dish_position(id).map(|pos| self.dishes.remove(pos))
    }

    pub(crate) fn dish_mut(&mut self, id: i64) -> Option<&mut Dish> {
        self.dishes.iter_mut().find(|d| d.id == id)
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Menu {
    pub categories: Vec<Category>,
    #[serde(default)]
    pub last_updated: String,
}

impl Menu {
    pub fn category(&self, id: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.id == id)
    }

    pub fn category_mut(&mut self, id: &str) -> Option<&mut Category> {
        self.categories.iter_mut().find(|c| c.id == id)
    }

    pub fn dish(&self, category_id: &str, dish_id: i64) -> Option<&Dish> {
        self.category(category_id).and_then(|c| c.dish(dish_id))
    }
}
