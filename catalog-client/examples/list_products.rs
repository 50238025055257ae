// catalog-client/examples/list_products.rs
// Lists one page of products and the reference dropdowns against a live backend.
//
// CATALOG_API_URL=https://pos.example/api CATALOG_API_V2_URL=https://pos.example/api/v2 \
//     cargo run --example list_products -- aktif kopi

use catalog_client::{CatalogClient, ClientConfig, QueryParams};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("catalog_client=debug")),
        )
        .init();

    let args: Vec<String> = std::env::args().collect();
    let tab = args.get(1).cloned().unwrap_or_default();
    let keyword = args.get(2).cloned().unwrap_or_default();

    let config = ClientConfig::from_env()?;
    let client = CatalogClient::new(&config)?;

    let params = QueryParams {
        tab,
        keyword,
        ..Default::default()
    };
    let listing = client.service().list(&params).await?;
    tracing::info!(
        all = listing.totals.count_all,
        active = listing.totals.count_active,
        inactive = listing.totals.count_non_active,
        "Product counts"
    );
    for product in &listing.items {
        println!(
            "{:>6}  {:<32} {:>12}  {}",
            product.id,
            product.name,
            product.price,
            product.category.name.as_deref().unwrap_or("-")
        );
    }

    let reference = client.reference();
    let categories = reference.fetch_categories().await?;
    let addons = reference.fetch_addons().await?;
    tracing::info!(categories = categories.len(), addons = addons.len(), "Reference data loaded");

    Ok(())
}
