//! # Default Catalog
//!
//! The catalog the widget ships with when no catalog file is configured:
//! three blanks, five colors, five artwork options, four neck labels and
//! five lead-time rules.

use quote_core::{
    AddOn, CallToAction, ColorOption, LeadTimeRule, Money, PriceTier, Product, QuantityLimits,
    QuoteConfig, QuoteOptions,
};

fn product(id: &str, name: &str, description: &str, image: &str, breaks: [i64; 4]) -> Product {
    Product {
        id: id.to_string(),
        name: name.to_string(),
        description: Some(description.to_string()),
        image: Some(image.to_string()),
        price_tiers: [1, 25, 50, 100]
            .into_iter()
            .zip(breaks)
            .map(|(min_qty, cents)| PriceTier::new(min_qty, Money::from_cents(cents)))
            .collect(),
        base_dev_cost: Money::zero(),
    }
}

fn color(id: &str, label: &str, add_cents: i64) -> ColorOption {
    ColorOption {
        id: id.to_string(),
        label: label.to_string(),
        per_unit_cost: Money::from_cents(add_cents),
    }
}

fn add_on(id: &str, label: &str, per_unit_cents: i64, dev_cents: i64) -> AddOn {
    AddOn {
        id: id.to_string(),
        label: label.to_string(),
        per_unit_cost: Money::from_cents(per_unit_cents),
        one_time_dev_cost: Money::from_cents(dev_cents),
    }
}

/// Returns the built-in catalog.
pub fn default_catalog() -> QuoteConfig {
    QuoteConfig {
        currency: "USD".to_string(),
        products: vec![
            product(
                "tech-hoodie",
                "Tech Hoodie",
                "A technical evolution of the traditional hoodie featuring a distinctive anorak hood and hidden side pockets.",
                "https://images.unsplash.com/photo-1556821840-3a63f95609a7?w=400&h=400&fit=crop&crop=center",
                [2990, 2650, 2490, 2290],
            ),
            product(
                "baseball-cap",
                "Baseball Cap",
                "Classic 6-panel structured cap with adjustable strap. Perfect for embroidery and everyday wear.",
                "https://images.unsplash.com/photo-1588850561407-ed78c282e89b?w=400&h=400&fit=crop&crop=center",
                [1290, 1150, 1090, 990],
            ),
            product(
                "premium-tshirt",
                "Premium T-Shirt",
                "High-quality cotton blend tee with reinforced seams. Ideal for screen printing and promotional events.",
                "https://images.unsplash.com/photo-1521572163474-6864f9cf17ab?w=400&h=400&fit=crop&crop=center",
                [1690, 1450, 1320, 1190],
            ),
        ],
        options: QuoteOptions {
            colors: vec![
                color("black", "Black", 0),
                color("white", "White", 0),
                color("navy", "Navy Blue", 50),
                color("red", "Red", 50),
                color("forest", "Forest Green", 75),
            ],
            artwork: vec![
                add_on("none", "No artwork", 0, 0),
                add_on("front-1c", "Front 1-color print", 85, 3500),
                add_on("front-2c", "Front 2-color print", 125, 5500),
                add_on("front-back-1c", "Front + Back 1-color", 150, 6500),
                add_on("full-color", "Full-color print", 290, 8500),
            ],
            neck_label: vec![
                add_on("none", "No label", 0, 0),
                add_on("woven", "Woven label", 45, 2500),
                add_on("printed", "Printed label", 25, 1500),
                add_on("heat-transfer", "Heat transfer label", 35, 2000),
            ],
        },
        lead_time_rules: vec![
            LeadTimeRule::new(1, 5),
            LeadTimeRule::new(25, 8),
            LeadTimeRule::new(50, 12),
            LeadTimeRule::new(100, 15),
            LeadTimeRule::new(250, 18),
        ],
        limits: QuantityLimits {
            min_qty: 1,
            max_qty: 1000,
            qty_step: Some(1),
        },
        cta: CallToAction {
            start_design_url: Some("/studio".to_string()),
            email_subject: Some("Quote request – {{productName}}".to_string()),
            email_to: Some("quotes@bioblanks.com".to_string()),
        },
    }
}
