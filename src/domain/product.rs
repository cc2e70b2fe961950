use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct Product {
    pub id: u32,
    pub name: String,
    pub price: Decimal,
    /// Image reference resolved by the storefront, not a URL.
    pub image: String,
    pub sizes: Vec<String>,
}

impl Product {
    fn new(id: u32, name: &str, price: Decimal, image: &str, sizes: &[&str]) -> Self {
        Self {
            id,
            name: name.to_string(),
            price,
            image: image.to_string(),
            sizes: sizes.iter().map(|s| s.to_string()).collect(),
        }
    }
}

/// The read-only set of purchasable products, seeded once at startup.
#[derive(Debug, Clone)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    pub fn new(products: Vec<Product>) -> Self {
        Self { products }
    }

    /// The storefront's T-shirt line.
    pub fn seeded() -> Self {
        Self::new(vec![
            Product::new(
                1,
                "Om LeosTrend T-Shirt",
                dec!(24.99),
                "om-tshirt.jpg",
                &["S", "M", "L", "XL"],
            ),
            Product::new(
                2,
                "Sri LeosTrend T-Shirt",
                dec!(29.99),
                "sri-yantra.jpg",
                &["S", "M", "L", "XL"],
            ),
            Product::new(
                3,
                "Ganesh LeosTrend T-Shirt",
                dec!(27.99),
                "ganesh-yantra.jpg",
                &["S", "M", "L"],
            ),
        ])
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::seeded()
    }
}
