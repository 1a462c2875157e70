//! Static demo catalog, loaded once at startup.

use hygge_commerce::catalog::{Catalog, Product};
use hygge_commerce::money::{Currency, Money};

/// Build the demo catalog.
pub fn demo_catalog() -> Catalog {
    let c = Currency::USD;
    Catalog::new(vec![
        Product::new(
            "chair-spindle",
            "Spindle Oak Chair",
            "Chairs",
            Money::new(12900, c),
            "/img/chair-spindle.jpg",
        )
        .with_gallery(vec![
            "/img/chair-spindle-side.jpg".to_string(),
            "/img/chair-spindle-back.jpg".to_string(),
        ]),
        Product::new(
            "lamp-paper",
            "Paper Pendant Lamp",
            "Lighting",
            Money::new(4900, c),
            "/img/lamp-paper.jpg",
        ),
        Product::new(
            "throw-wool",
            "Lambswool Throw",
            "Textiles",
            Money::new(7500, c),
            "/img/throw-wool.jpg",
        ),
        Product::new(
            "table-side",
            "Ash Side Table",
            "Tables",
            Money::new(18500, c),
            "/img/table-side.jpg",
        ),
        Product::new(
            "mug-stoneware",
            "Stoneware Mug",
            "Kitchen",
            Money::new(1800, c),
            "/img/mug-stoneware.jpg",
        ),
        Product::new(
            "candle-pillar",
            "Beeswax Pillar Candle",
            "Decor",
            Money::new(2200, c),
            "/img/candle-pillar.jpg",
        ),
    ])
}
