//! Random sample data for the catalog.

use rand::{Rng, RngExt};

use crate::product::NewProduct;

/// Number of rows `setup` inserts when no count is given.
pub const DEFAULT_SEED_COUNT: usize = 1500;

/// Lowest generated price.
pub const MIN_PRICE: f64 = 10.0;

/// Upper bound (exclusive) of generated prices.
pub const MAX_PRICE: f64 = 2000.0;

const CATEGORIES: &[&str] = &[
    "Electronics",
    "Home Goods",
    "Apparel",
    "Books",
    "Sports",
    "Toys",
];

const ADJECTIVES: &[&str] = &[
    "Awesome",
    "Fantastic",
    "Incredible",
    "Stylish",
    "Durable",
    "Portable",
    "Smart",
    "Efficient",
    "Elegant",
    "Modern",
];

const NOUNS: &[&str] = &[
    "Gadget",
    "Device",
    "Item",
    "Product",
    "Tool",
    "Accessory",
    "Equipment",
    "Appliance",
    "Gear",
    "Supply",
];

const USAGES: &[&str] = &["home", "office", "travel", "gaming", "work"];

const FEATURES: &[&str] = &[
    "high performance",
    "long battery life",
    "easy to use",
    "lightweight design",
    "advanced technology",
];

fn pick<'a, R: Rng + ?Sized>(rng: &mut R, words: &[&'a str]) -> &'a str {
    words[rng.random_range(0..words.len())]
}

/// Generates one product.
///
/// The name is `"{adjective} {category} {noun}"`. The description draws its
/// own adjective, so it can disagree with the name.
pub fn generate_product<R: Rng + ?Sized>(rng: &mut R) -> NewProduct {
    let category = pick(rng, CATEGORIES);
    let adjective = pick(rng, ADJECTIVES);
    let noun = pick(rng, NOUNS);
    let name = format!("{adjective} {category} {noun}");

    let description = format!(
        "{} {category} {noun} for {} use. Features include: {}",
        pick(rng, ADJECTIVES),
        pick(rng, USAGES),
        pick(rng, FEATURES),
    );

    let price = (rng.random_range(MIN_PRICE..MAX_PRICE) * 100.0).round() / 100.0;

    NewProduct::new(name, description, price)
}

/// Generates `count` products.
pub fn generate_products<R: Rng + ?Sized>(rng: &mut R, count: usize) -> Vec<NewProduct> {
    (0..count).map(|_| generate_product(rng)).collect()
}
