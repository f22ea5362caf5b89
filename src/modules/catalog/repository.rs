//! Fixed catalog of restaurants and the foods they sell.
//!
//! The catalog is compiled into the binary and never persisted. Orders refer
//! to it by id only.

use serde::Serialize;

#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct Restaurant {
    pub id: i32,
    pub name: &'static str,
    pub address: &'static str,
    pub cuisine: &'static str,
}

#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct Food {
    pub id: i32,
    pub name: &'static str,
    pub price: f64,
    pub restaurant_id: i32,
    pub category: &'static str,
}

static RESTAURANTS: [Restaurant; 5] = [
    Restaurant {
        id: 1,
        name: "Pizza Palace",
        address: "123 Main St",
        cuisine: "Italian",
    },
    Restaurant {
        id: 2,
        name: "Sushi World",
        address: "456 Oak Ave",
        cuisine: "Japanese",
    },
    Restaurant {
        id: 3,
        name: "Burger House",
        address: "789 Elm St",
        cuisine: "American",
    },
    Restaurant {
        id: 4,
        name: "Pasta Paradise",
        address: "321 Pine Rd",
        cuisine: "Italian",
    },
    Restaurant {
        id: 5,
        name: "Taco Town",
        address: "654 Maple Dr",
        cuisine: "Mexican",
    },
];

static FOODS: [Food; 10] = [
    Food {
        id: 1,
        name: "Margherita Pizza",
        price: 12.99,
        restaurant_id: 1,
        category: "Pizza",
    },
    Food {
        id: 2,
        name: "Pepperoni Pizza",
        price: 14.99,
        restaurant_id: 1,
        category: "Pizza",
    },
    Food {
        id: 3,
        name: "California Roll",
        price: 8.99,
        restaurant_id: 2,
        category: "Sushi",
    },
    Food {
        id: 4,
        name: "Salmon Nigiri",
        price: 10.99,
        restaurant_id: 2,
        category: "Sushi",
    },
    Food {
        id: 5,
        name: "Classic Burger",
        price: 9.99,
        restaurant_id: 3,
        category: "Burger",
    },
    Food {
        id: 6,
        name: "Cheese Burger",
        price: 10.99,
        restaurant_id: 3,
        category: "Burger",
    },
    Food {
        id: 7,
        name: "Spaghetti Carbonara",
        price: 13.99,
        restaurant_id: 4,
        category: "Pasta",
    },
    Food {
        id: 8,
        name: "Fettuccine Alfredo",
        price: 12.99,
        restaurant_id: 4,
        category: "Pasta",
    },
    Food {
        id: 9,
        name: "Beef Tacos",
        price: 7.99,
        restaurant_id: 5,
        category: "Tacos",
    },
    Food {
        id: 10,
        name: "Chicken Quesadilla",
        price: 9.99,
        restaurant_id: 5,
        category: "Mexican",
    },
];

pub fn list_restaurants() -> &'static [Restaurant] {
    &RESTAURANTS
}

pub fn find_restaurant_by_id(id: i32) -> Option<&'static Restaurant> {
    RESTAURANTS.iter().find(|restaurant| restaurant.id == id)
}

pub fn list_foods() -> &'static [Food] {
    &FOODS
}

pub fn find_food_by_id(id: i32) -> Option<&'static Food> {
    FOODS.iter().find(|food| food.id == id)
}

/// Empty when the restaurant sells nothing or does not exist.
pub fn list_foods_by_restaurant_id(restaurant_id: i32) -> Vec<&'static Food> {
    FOODS
        .iter()
        .filter(|food| food.restaurant_id == restaurant_id)
        .collect()
}
