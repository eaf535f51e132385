// tests/persistence_tests.rs
mod common;

use common::*;
use serial_test::serial;
use std::collections::BTreeMap;
use std::sync::Arc;
use storefront::models::{SignupForm, Theme};
use storefront::storage::MemoryStorage;
use storefront::views::CatalogView;
use storefront::{StoreConfig, StoreEvent, Storefront};

fn raw_entries(path: &std::path::Path) -> BTreeMap<String, String> {
  serde_json::from_str(&std::fs::read_to_string(path).unwrap()).unwrap()
}

#[tokio::test]
#[serial]
async fn everything_survives_reopening_the_file() {
  let dir = tempfile::tempdir().unwrap();
  let path = dir.path().join("storefront.json");

  let (product, user) = {
    let store = file_store(&path);
    login_admin(&store).await;
    let product = store.products().add(dress("Kitenge Dress", 2500)).await.unwrap();
    store.cart().add_item(&product.id, &product.name, product.price).await.unwrap();
    let user = store
      .auth()
      .signup(SignupForm::new("Wanjiku", "wanjiku@example.com", "Secret123"))
      .await
      .unwrap();
    store.theme().set(Theme::Dark).unwrap();
    (product, user)
  };

  let reopened = file_store(&path);
  assert_eq!(reopened.products().list().unwrap(), vec![product]);
  assert_eq!(reopened.cart().total_item_count().unwrap(), 1);
  assert_eq!(reopened.auth().users().unwrap(), vec![user]);
  assert_eq!(reopened.auth().current().unwrap().unwrap().name, "Store Admin");
  assert_eq!(reopened.theme().get().unwrap(), Theme::Dark);
}

#[tokio::test]
#[serial]
async fn product_order_survives_a_reload() {
  let dir = tempfile::tempdir().unwrap();
  let path = dir.path().join("storefront.json");
  let store = file_store(&path);
  for (name, price) in [("Kitenge Dress", 2500), ("Ankara Top", 1800), ("Head Wrap", 400)] {
    store.products().add(dress(name, price)).await.unwrap();
  }
  let before = store.products().list().unwrap();

  let after = file_store(&path).products().list().unwrap();
  assert_eq!(after, before);
  assert_eq!(
    after.iter().map(|p| p.name.as_str()).collect::<Vec<_>>(),
    vec!["Head Wrap", "Ankara Top", "Kitenge Dress"]
  );
}

#[tokio::test]
#[serial]
async fn stored_keys_and_records_keep_the_browser_schema() {
  let dir = tempfile::tempdir().unwrap();
  let path = dir.path().join("storefront.json");
  let store = file_store(&path);
  store.auth().login("admin@elssyboutique.com", "admin123", true).await.unwrap();
  let product = store.products().add(dress("Kitenge Dress", 2500)).await.unwrap();
  store.cart().add_item(&product.id, &product.name, product.price).await.unwrap();
  store.theme().toggle().unwrap();

  let entries = raw_entries(&path);
  let keys: Vec<_> = entries.keys().map(String::as_str).collect();
  assert_eq!(
    keys,
    vec!["elssyCart", "elssyCurrentUser", "elssyProducts", "elssyRememberMe", "theme"]
  );
  assert_eq!(entries["elssyRememberMe"], "true");
  assert_eq!(entries["theme"], "dark");

  let products: serde_json::Value = serde_json::from_str(&entries["elssyProducts"]).unwrap();
  let record = &products[0];
  assert_eq!(record["name"], "Kitenge Dress");
  assert_eq!(record["price"], 2500);
  assert_eq!(record["status"], "in-stock");
  assert_eq!(record["createdBy"], "Store Admin");
  assert!(record["createdAt"].is_string());

  let cart: serde_json::Value = serde_json::from_str(&entries["elssyCart"]).unwrap();
  assert_eq!(cart[0]["quantity"], 1);
  assert_eq!(cart[0]["id"], product.id.as_str());
}

#[tokio::test]
#[serial]
async fn records_written_by_the_browser_are_readable() {
  let dir = tempfile::tempdir().unwrap();
  let path = dir.path().join("storefront.json");
  let products = r#"[{"id":"1715000000000","name":"Ankara Top","price":1800,"description":"","category":"Tops","status":"out-of-stock","image":null,"createdAt":"2024-05-06T12:00:00.000Z","createdBy":"Store Admin"}]"#;
  let seeded: BTreeMap<&str, &str> = [("elssyProducts", products), ("theme", "dark")].into_iter().collect();
  std::fs::write(&path, serde_json::to_string(&seeded).unwrap()).unwrap();

  let store = file_store(&path);
  let listed = store.products().list().unwrap();
  assert_eq!(listed.len(), 1);
  assert_eq!(listed[0].id, "1715000000000");
  assert!(!listed[0].status.is_available());
  assert_eq!(store.theme().get().unwrap(), Theme::Dark);

  let catalog = CatalogView::render(&listed);
  assert_eq!(catalog.cards()[0].description, "Premium quality product");
}

#[tokio::test]
#[serial]
async fn oversized_stored_cart_totals_saturate() {
  let dir = tempfile::tempdir().unwrap();
  let path = dir.path().join("storefront.json");
  let cart = r#"[{"id":"p1","name":"Kitenge Dress","price":2500,"quantity":4294967295},{"id":"p2","name":"Ankara Top","price":1800,"quantity":2}]"#;
  let seeded: BTreeMap<&str, &str> = [("elssyCart", cart)].into_iter().collect();
  std::fs::write(&path, serde_json::to_string(&seeded).unwrap()).unwrap();

  let store = file_store(&path);
  assert_eq!(store.cart().total_item_count().unwrap(), u32::MAX);
  assert_eq!(store.cart().subtotal().unwrap(), 2500 * u64::from(u32::MAX) + 3600);
}

#[tokio::test]
#[serial]
async fn corrupt_storage_file_fails_to_open() {
  let dir = tempfile::tempdir().unwrap();
  let path = dir.path().join("storefront.json");
  std::fs::write(&path, "{ not json").unwrap();
  assert!(Storefront::open(file_config(&path)).is_err());
}

#[tokio::test]
#[serial]
async fn theme_toggles_and_unknown_values_read_as_light() {
  let store = memory_store();
  let mut events = store.subscribe();
  assert_eq!(store.theme().get().unwrap(), Theme::Light);
  assert_eq!(store.theme().toggle().unwrap(), Theme::Dark);
  assert_eq!(store.theme().toggle().unwrap(), Theme::Light);
  assert_eq!(drain(&mut events), vec![StoreEvent::ThemeChanged, StoreEvent::ThemeChanged]);

  store
    .state()
    .storage
    .save_raw(storefront::storage::StorageKey::Theme, "sepia")
    .unwrap();
  assert_eq!(store.theme().get().unwrap(), Theme::Light);
}

#[tokio::test]
#[serial]
async fn storefronts_sharing_a_backend_see_each_others_writes() {
  setup_tracing();
  let backend = Arc::new(MemoryStorage::new());
  let admin_tab = Storefront::with_backend(StoreConfig::in_memory(), backend.clone());
  let shop_tab = Storefront::with_backend(StoreConfig::in_memory(), backend);

  let product = admin_tab.products().add(dress("Kitenge Dress", 2500)).await.unwrap();
  assert_eq!(shop_tab.products().list().unwrap(), vec![product]);
}
