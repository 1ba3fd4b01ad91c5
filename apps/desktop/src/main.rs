use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use client_core::{ClientConfig, Storefront, DEFAULT_API_BASE_URL};
use shared::domain::ProductId;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
struct Args {
    #[arg(long, default_value = DEFAULT_API_BASE_URL)]
    api_url: String,
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the whole storefront page.
    Show,
    /// Add the given products to a fresh cart and submit it as one order.
    Order {
        #[arg(required = true)]
        product_ids: Vec<i64>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with_writer(std::io::stderr)
        .init();
    let args = Args::parse();

    let config = ClientConfig::from_base_url(&args.api_url)?;
    let storefront = Storefront::connect(&config);
    storefront.catalog().load_products().await;
    storefront.orders().fetch_orders().await;

    if let Some(Command::Order { product_ids }) = args.command {
        for id in product_ids {
            let Some(product) = storefront.catalog().find(ProductId(id)) else {
                bail!("product {id} is not in the catalog");
            };
            storefront.cart().add_to_cart(product);
        }
        let outcome = storefront.orders().submit_order().await;
        if let Some(notice) = outcome.notice() {
            println!("{notice}");
        }
    }

    for line in storefront.snapshot().render_lines() {
        println!("{line}");
    }
    Ok(())
}
