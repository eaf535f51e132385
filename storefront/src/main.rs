// storefront/src/main.rs

//! Scripted walk through the storefront: sign in, stock a product, shop it.
//! Configure with `STOREFRONT_*` variables (see `StoreConfig::from_env`).

use storefront::models::{ImageSource, ProductDraft, ProductStatus};
use storefront::views::CatalogView;
use storefront::{GateDecision, StoreConfig, Storefront};
use tracing::Level;
use tracing_subscriber::fmt::format::FmtSpan;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
  tracing_subscriber::fmt()
    .with_max_level(Level::INFO)
    .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
    .with_span_events(FmtSpan::CLOSE)
    .init();

  tracing::info!("Starting storefront demo...");

  let config = match StoreConfig::from_env() {
    Ok(cfg) => cfg,
    Err(e) => {
      tracing::error!(error = %e, "Failed to load store configuration.");
      return Err(e.into());
    }
  };
  let store = Storefront::open(config)?;

  let mut catalog = store.live_catalog();
  let mut cart_panel = store.live_cart_panel();

  if store.auth().console_gate()? == GateDecision::Proceed {
    tracing::info!("Already signed in; skipping login.");
  } else {
    let email = store.config().admin_email.clone();
    let password = store.config().admin_password.clone();
    store.auth().login(&email, &password, true).await?;
  }

  let draft = ProductDraft::new("Kitenge Maxi Dress", 3500, "Dresses")
    .with_description("Hand-printed cotton, floor length")
    .with_status(ProductStatus::InStock)
    .with_image(ImageSource::Bytes {
      mime: "image/png".to_string(),
      data: vec![0x89, b'P', b'N', b'G'],
    });
  let product = store.products().add(draft).await?;

  if let Some(CatalogView::Cards(cards)) = catalog.next_frame().await {
    for card in &cards {
      tracing::info!(name = %card.name, price = %card.price_label, badge = card.badge.label(), "Catalog card.");
    }
  }

  store.cart().add_item(&product.id, &product.name, product.price).await?;
  if let Some(frame) = cart_panel.next_frame().await {
    tracing::info!(
      items = frame.badge.count,
      subtotal = %frame.sidebar.subtotal_label,
      "Cart updated."
    );
  }

  let stats = store.products().stats()?;
  tracing::info!(
    total_products = stats.total_products,
    total_orders = stats.total_orders,
    "Dashboard."
  );
  for notice in store.notices().active() {
    tracing::info!(kind = ?notice.kind, channel = ?notice.channel, message = %notice.message, "Notice.");
  }

  store.auth().logout()?;
  tracing::info!("Storefront demo finished.");
  Ok(())
}
