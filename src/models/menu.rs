use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct MenuSection {
    pub name: &'static str,
    pub items: &'static [&'static str],
}

pub const MENU: &[MenuSection] = &[
    MenuSection {
        name: "Starter",
        items: &["Soup", "Salad"],
    },
    MenuSection {
        name: "Main Course",
        items: &["Pasta", "Steak", "Vegetarian Dish"],
    },
    MenuSection {
        name: "Dessert",
        items: &["Ice Cream", "Cake"],
    },
    MenuSection {
        name: "Beverages",
        items: &["Coffee", "Tea", "Soft Drinks"],
    },
];
