//! # Quote Preview
//!
//! Prints the quote for a selection taken from the environment. Useful for
//! checking a catalog file before it goes live.
//!
//! ```text
//! QUOTE_CONFIG_PATH=catalog.toml QUOTE_PRODUCT=baseball-cap QUOTE_QUANTITY=48 \
//!     RUST_LOG=debug quote-preview
//! ```

use std::sync::Arc;

use anyhow::{bail, Context, Result};
use quote_widget::{config, Clock, QuoteSession};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    init_tracing();

    let catalog = config::load(None).context("loading catalog")?;
    let mut session = QuoteSession::new(Arc::new(catalog), Clock::System);

    if let Some(product) = env("QUOTE_PRODUCT") {
        if session.config().product(&product).is_none() {
            bail!("unknown product '{}'", product);
        }
        session.select_product(product);
    }
    if let Some(color) = env("QUOTE_COLOR") {
        session.select_color(color);
    }
    if let Some(artwork) = env("QUOTE_ARTWORK") {
        session.select_artwork(artwork);
    }
    if let Some(neck_label) = env("QUOTE_NECK_LABEL") {
        session.select_neck_label(neck_label);
    }
    if let Some(quantity) = env("QUOTE_QUANTITY") {
        let quantity: i64 = quantity
            .trim()
            .parse()
            .with_context(|| format!("QUOTE_QUANTITY must be a whole number, got '{}'", quantity))?;
        let stored = session.set_quantity(quantity);
        if i64::from(stored) != quantity {
            info!(requested = quantity, stored, "Quantity clamped to catalog limits");
        }
    }

    let readouts = session.readouts();
    println!("Product:        {}", session.state().selected_product_id);
    println!("Quantity:       {}", readouts.quantity);
    println!("Unit cost:      {}", readouts.unit_cost);
    println!("Subtotal:       {}", readouts.subtotal);
    println!("Lead time:      {}", readouts.lead_time);
    println!("Delivery date:  {}", readouts.delivery_date);
    if let Some(subject) = session.email_subject() {
        println!("Email subject:  {}", subject);
    }

    if let Some(payload) = session.payload() {
        println!();
        println!("{}", serde_json::to_string_pretty(&payload)?);
    }

    Ok(())
}

fn env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,quote_widget=info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
