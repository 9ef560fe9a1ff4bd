//! Mock data the storefront starts with on every boot.

use chrono::{DateTime, Duration, Utc};
use serde::Serialize;
use utoipa::ToSchema;

use crate::models::{MenuItem, Order, OrderLine, OrderStatus, Restaurant};

const UNSPLASH: &str = "https://images.unsplash.com";

fn photo(id: &str) -> String {
    format!("{UNSPLASH}/{id}?auto=format&fit=crop&q=80&w=1920")
}

fn item(id: i64, name: &str, description: &str, price: i64, category: &str, image: &str) -> MenuItem {
    MenuItem {
        id,
        name: name.to_string(),
        description: description.to_string(),
        price,
        category: category.to_string(),
        image: photo(image),
    }
}

#[allow(clippy::too_many_arguments)]
fn restaurant(
    id: i64,
    name: &str,
    cuisine: &str,
    rating: f32,
    delivery_time: &str,
    min_order: i64,
    image: &str,
    description: &str,
) -> Restaurant {
    Restaurant {
        id,
        name: name.to_string(),
        cuisine: cuisine.to_string(),
        rating,
        delivery_time: delivery_time.to_string(),
        min_order,
        description: description.to_string(),
        image: photo(image),
        featured: id <= 4,
        categories: Vec::new(),
        menu: Vec::new(),
    }
}

pub fn restaurants() -> Vec<Restaurant> {
    let mut burger_haven = restaurant(
        1,
        "Burger Haven",
        "American",
        4.8,
        "20-30 min",
        1000,
        "photo-1568901346375-23c9450c58cd",
        "Serving the juiciest burgers in town since 2010. We use only premium quality beef and the freshest ingredients.",
    );
    burger_haven.categories = vec!["Burgers".into(), "Sides".into(), "Drinks".into()];
    burger_haven.menu = vec![
        item(101, "Classic Cheeseburger", "Beef patty, cheddar cheese, lettuce, tomato, and our special sauce", 899, "Burgers", "photo-1550317138-10000687a72b"),
        item(102, "Double Bacon Burger", "Two beef patties, crispy bacon, American cheese, caramelized onions, and BBQ sauce", 1299, "Burgers", "photo-1553979459-d2229ba7433b"),
        item(103, "Veggie Burger", "Plant-based patty, avocado, lettuce, tomato, and vegan mayo", 999, "Burgers", "photo-1520072959219-c595dc870360"),
        item(104, "French Fries", "Crispy golden fries with our special seasoning", 399, "Sides", "photo-1585109649139-366815a0d713"),
        item(105, "Onion Rings", "Crispy battered onion rings with dipping sauce", 499, "Sides", "photo-1621447504864-d8686e12698c"),
        item(106, "Soft Drink", "Your choice of soda (Cola, Lemon-lime, Orange)", 249, "Drinks", "photo-1622483767028-3f66f32aef97"),
    ];

    let mut pasta_paradise = restaurant(
        2,
        "Pasta Paradise",
        "Italian",
        4.7,
        "25-40 min",
        1500,
        "photo-1473093295043-cdd812d0e601",
        "Fresh pasta rolled every morning and sauces simmered for hours.",
    );
    pasta_paradise.categories = vec!["Pasta".into(), "Starters".into(), "Desserts".into()];
    pasta_paradise.menu = vec![
        item(201, "Spaghetti Carbonara", "Guanciale, egg yolk, pecorino and black pepper", 1399, "Pasta", "photo-1612874742237-6526221588e3"),
        item(202, "Penne Arrabbiata", "Tomato, garlic and chili", 1199, "Pasta", "photo-1563379926898-05f4575a45d8"),
        item(203, "Garlic Bread", "Toasted ciabatta with garlic butter", 499, "Starters", "photo-1619535860434-ba1d8fa12536"),
        item(204, "Tiramisu", "Espresso-soaked ladyfingers and mascarpone", 699, "Desserts", "photo-1571877227200-a0d98ea607e9"),
    ];

    vec![
        burger_haven,
        pasta_paradise,
        restaurant(3, "Sushi Sensation", "Japanese", 4.9, "30-45 min", 2000, "photo-1579871494447-9811cf80d66c", "Nigiri, maki and sashimi from the daily catch."),
        restaurant(4, "Taco Town", "Mexican", 4.6, "15-25 min", 800, "photo-1565299585323-38d6b0865b47", "Street-style tacos with handmade tortillas."),
        restaurant(5, "Pizza Place", "Italian", 4.5, "20-35 min", 1200, "photo-1565299624946-b28f40a0ae38", "Wood-fired Neapolitan pizza."),
        restaurant(6, "Noodle House", "Asian", 4.6, "25-35 min", 1500, "photo-1569718212165-3a8278d5f624", "Hand-pulled noodles and rich broths."),
        restaurant(7, "Falafel Factory", "Middle Eastern", 4.7, "20-30 min", 1000, "photo-1604909052743-94e838986d24", "Crispy falafel, hummus and fresh pita."),
        restaurant(8, "Curry Corner", "Indian", 4.8, "30-45 min", 1800, "photo-1585937421612-70a008356fbe", "Slow-cooked curries and tandoori breads."),
    ]
}

/// Restaurant card shown at the top of the owner dashboard.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct OwnerProfile {
    pub id: i64,
    pub name: String,
    pub logo: String,
    pub address: String,
    pub opening_hours: String,
    pub rating: f32,
    pub lifetime_orders: i64,
    /// Lifetime revenue in cents.
    pub lifetime_revenue: i64,
}

pub fn owner_profile(restaurant: &Restaurant) -> OwnerProfile {
    OwnerProfile {
        id: restaurant.id,
        name: restaurant.name.clone(),
        logo: restaurant.image.clone(),
        address: "123 Main St, Anytown USA".to_string(),
        opening_hours: "9:00 AM - 10:00 PM".to_string(),
        rating: restaurant.rating,
        lifetime_orders: 254,
        lifetime_revenue: 684_250,
    }
}

fn line(name: &str, quantity: u32, price: i64) -> OrderLine {
    OrderLine {
        name: name.to_string(),
        quantity,
        price,
    }
}

/// Dashboard orders for Burger Haven, aged relative to `now`.
pub fn orders(now: DateTime<Utc>) -> Vec<Order> {
    let order = |id: i64,
                 customer: &str,
                 items: Vec<OrderLine>,
                 status: OrderStatus,
                 minutes_ago: i64,
                 address: &str,
                 payment: &str| {
        let total: i64 = items.iter().map(|l| l.price * i64::from(l.quantity)).sum();
        Order {
            id,
            restaurant_id: 1,
            customer_name: customer.to_string(),
            items,
            total,
            status,
            placed_at: now - Duration::minutes(minutes_ago),
            address: address.to_string(),
            payment: payment.to_string(),
        }
    };

    vec![
        order(
            1001,
            "John Doe",
            vec![line("Classic Cheeseburger", 2, 899), line("French Fries", 1, 399), line("Soft Drink", 2, 249)],
            OrderStatus::New,
            10,
            "456 Oak St, Anytown, USA",
            "Credit Card",
        ),
        order(
            1002,
            "Sarah Johnson",
            vec![line("Double Bacon Burger", 1, 1299), line("Onion Rings", 1, 499)],
            OrderStatus::Preparing,
            25,
            "789 Maple Ave, Anytown, USA",
            "PayPal",
        ),
        order(
            1003,
            "Mike Williams",
            vec![line("Veggie Burger", 1, 999), line("French Fries", 1, 399), line("Soft Drink", 1, 249)],
            OrderStatus::Ready,
            40,
            "321 Pine Rd, Anytown, USA",
            "Debit Card",
        ),
        order(
            1004,
            "Emily Davis",
            vec![line("Classic Cheeseburger", 3, 899), line("French Fries", 2, 399), line("Soft Drink", 3, 249)],
            OrderStatus::Delivered,
            60,
            "654 Cedar Blvd, Anytown, USA",
            "Apple Pay",
        ),
        order(
            1005,
            "Robert Wilson",
            vec![line("Double Bacon Burger", 2, 1299), line("Onion Rings", 2, 499), line("Soft Drink", 2, 249)],
            OrderStatus::Delivered,
            120,
            "987 Birch St, Anytown, USA",
            "Google Pay",
        ),
    ]
}
