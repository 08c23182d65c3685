//! Catalog fixtures

use rust_decimal::Decimal;
use rusty_money::{Money, iso::USD};

use crate::catalog::{Catalog, Category, ImageRef, Product};

#[derive(Clone, Copy)]
struct Entry {
    id: &'static str,
    name: &'static str,
    price_minor: i64,
    unit: &'static str,
    image_key: &'static str,
    rating_tenths: i64,
    description: &'static str,
}

/// Seven products per category, priced in USD cents with ratings in
/// tenths of a star.
const ENTRIES: [(Category, [Entry; 7]); 7] = [
    (
        Category::Fruits,
        [
            entry("fr1", "Banana", 250, "kg", "banana", 45, "Fresh organic bananas rich in potassium"),
            entry("fr2", "Fresh Orange", 150, "kg", "orange", 42, "Sweet and juicy oranges packed with vitamin C"),
            entry("fr3", "Apple", 320, "kg", "apple", 48, "Crispy red apples with perfect sweetness"),
            entry("fr4", "Strawberry", 450, "box", "strawberry", 47, "Sweet organic strawberries, freshly picked"),
            entry("fr5", "Mango", 520, "kg", "mango", 49, "Tropical mangoes with rich flavor and aroma"),
            entry("fr6", "Grapes", 420, "kg", "apple", 44, "Seedless grapes, sweet and refreshing"),
            entry("fr7", "Fruit Mix", 650, "box", "strawberry", 46, "Assorted seasonal fruits"),
        ],
    ),
    (
        Category::Vegetables,
        [
            entry("vg1", "Spinach", 220, "bunch", "spinach", 44, "Fresh green spinach leaves"),
            entry("vg2", "Potatoes", 180, "kg", "potatoes", 43, "Starchy and versatile potatoes"),
            entry("vg3", "Leafy Greens", 200, "bunch", "spinach", 41, "Healthy leafy green veggies"),
            entry("vg4", "Baby Potatoes", 240, "kg", "potatoes", 42, "Small, tender potatoes"),
            entry("vg5", "Green Mix", 310, "box", "spinach", 40, "Mixed green vegetables"),
            entry("vg6", "Golden Potatoes", 200, "kg", "potatoes", 41, "Golden skin potatoes"),
            entry("vg7", "Spinach Bundle", 230, "bunch", "spinach", 42, "Bundle of fresh spinach"),
        ],
    ),
    (
        Category::Dairy,
        [
            entry("dr1", "Eggs (12 pack)", 360, "tray", "eggs", 47, "Farm fresh eggs"),
            entry("dr2", "Fresh Milk", 290, "liter", "milk", 46, "Creamy full-cream milk"),
            entry("dr3", "Skim Milk", 270, "liter", "milk", 43, "Low-fat skim milk"),
            entry("dr4", "Cage-free Eggs", 390, "tray", "eggs", 48, "Cage-free large eggs"),
            entry("dr5", "Milk 500ml", 160, "500ml", "milk", 42, "Half-liter milk"),
            entry("dr6", "Jumbo Eggs", 420, "tray", "eggs", 45, "Jumbo sized eggs"),
            entry("dr7", "Organic Milk", 330, "liter", "milk", 44, "Organic dairy milk"),
        ],
    ),
    (
        Category::Bakery,
        [
            entry("bk1", "White Bread", 180, "loaf", "bread", 45, "Soft and fresh white bread"),
            entry("bk2", "Sliced Bread", 190, "loaf", "bread", 44, "Convenient sliced loaf"),
            entry("bk3", "Toast Bread", 200, "loaf", "bread", 43, "Perfect for toast"),
            entry("bk4", "Family Bread", 220, "loaf", "bread", 42, "Large family loaf"),
            entry("bk5", "Sandwich Bread", 210, "loaf", "bread", 41, "Great for sandwiches"),
            entry("bk6", "Daily Bread", 170, "loaf", "bread", 40, "Everyday bakery loaf"),
            entry("bk7", "Classic Bread", 180, "loaf", "bread", 42, "Classic soft bread"),
        ],
    ),
    (
        Category::Meat,
        [
            entry("mt1", "Beef Cuts", 850, "kg", "cooking_oil", 41, "Premium beef cuts"),
            entry("mt2", "Chicken Breast", 620, "kg", "eggs", 43, "Lean chicken breast"),
            entry("mt3", "Pork Chops", 740, "kg", "milk", 40, "Juicy pork chops"),
            entry("mt4", "Lamb Ribs", 990, "kg", "almonds", 42, "Tender lamb ribs"),
            entry("mt5", "Mince Meat", 680, "kg", "noodles", 41, "Freshly minced"),
            entry("mt6", "Chicken Wings", 590, "kg", "doritos", 43, "Party favorite"),
            entry("mt7", "Sausages", 490, "pack", "tomato_sauce", 40, "Breakfast sausages"),
        ],
    ),
    (
        Category::Beverages,
        [
            entry("bv1", "Milo", 320, "tin", "milo", 46, "Chocolate malt drink"),
            entry("bv2", "Fresh Milk", 290, "liter", "milk", 45, "Creamy fresh milk"),
            entry("bv3", "Cocoa Drink", 300, "tin", "milo", 44, "Delicious cocoa beverage"),
            entry("bv4", "Dairy Drink", 250, "500ml", "milk", 43, "Refreshing dairy drink"),
            entry("bv5", "Chocolate Mix", 340, "tin", "milo", 42, "Chocolate drink mix"),
            entry("bv6", "Milk 250ml", 120, "250ml", "milk", 41, "Small pack milk"),
            entry("bv7", "Malt Drink", 310, "tin", "milo", 42, "Malt-based beverage"),
        ],
    ),
    (
        Category::Snacks,
        [
            entry("sn1", "Doritos", 210, "pack", "doritos", 45, "Corn chips snack"),
            entry("sn2", "Instant Noodles", 120, "pack", "noodles", 43, "Quick instant noodles"),
            entry("sn3", "Almonds", 490, "pack", "almonds", 47, "Roasted almonds"),
            entry("sn4", "Snack Noodles", 110, "pack", "noodles", 41, "Crunchy noodles snack"),
            entry("sn5", "Nut Mix", 520, "pack", "almonds", 46, "Assorted nuts"),
            entry("sn6", "Cheese Chips", 220, "pack", "doritos", 42, "Cheesy corn chips"),
            entry("sn7", "Tomato Crisps", 200, "pack", "tomato_sauce", 40, "Tomato flavored crisps"),
        ],
    ),
];

const fn entry(
    id: &'static str,
    name: &'static str,
    price_minor: i64,
    unit: &'static str,
    image_key: &'static str,
    rating_tenths: i64,
    description: &'static str,
) -> Entry {
    Entry {
        id,
        name,
        price_minor,
        unit,
        image_key,
        rating_tenths,
        description,
    }
}

/// The standard storefront catalog: seven products in each of the seven
/// categories.
#[must_use]
pub fn standard_catalog() -> Catalog {
    let products = ENTRIES
        .iter()
        .flat_map(|(category, entries)| {
            entries.iter().map(move |entry| Product {
                id: entry.id,
                name: entry.name,
                price: Money::from_minor(entry.price_minor, USD),
                unit: entry.unit,
                image: ImageRef::Asset(entry.image_key),
                rating: Decimal::new(entry.rating_tenths, 1),
                description: entry.description,
                category: *category,
            })
        })
        .collect();

    Catalog::new(products)
}
