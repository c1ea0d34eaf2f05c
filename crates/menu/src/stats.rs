use serde::Serialize;

use crate::Menu;

#[derive(Serialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct MenuStats {
    pub total_dishes: usize,
    pub categories: usize,
    pub vegetarian: usize,
    pub spicy: usize,
}

impl MenuStats {
    pub fn of(menu: &Menu) -> Self {
        let dishes = menu.categories.iter().flat_map(|c| c.dishes.iter());

        let mut stats = MenuStats {
            categories: menu.categories.len(),
            ..Default::default()
        };

        for dish in dishes {
            stats.total_dishes += 1;
            stats.vegetarian += usize::from(dish.vegetarian);
            stats.spicy += usize::from(dish.spicy);
        }

        stats
    }
}
