// tests/product_store_tests.rs
mod common;

use common::*;
use serial_test::serial;
use storefront::models::{ImageSource, ProductDraft, ProductPatch, ProductStatus};
use storefront::notices::{NoticeChannel, NoticeKind};
use storefront::stores::RemoveOutcome;
use storefront::{StoreError, StoreEvent};

#[tokio::test]
#[serial]
async fn added_products_get_fresh_ids_and_newest_comes_first() {
  let store = memory_store();
  let first = store.products().add(dress("Kitenge Dress", 2500)).await.unwrap();
  let second = store.products().add(dress("Ankara Top", 1800)).await.unwrap();

  assert_ne!(first.id, second.id);
  let listed = store.products().list().unwrap();
  assert_eq!(listed[0].id, second.id);
  assert_eq!(listed.iter().map(|p| p.name.as_str()).collect::<Vec<_>>(), vec!["Ankara Top", "Kitenge Dress"]);
}

#[tokio::test]
#[serial]
async fn creator_is_the_session_name_or_admin() {
  let store = memory_store();
  let anonymous = store.products().add(dress("Wrap Skirt", 900)).await.unwrap();
  assert_eq!(anonymous.created_by, "Admin");

  login_admin(&store).await;
  let signed = store.products().add(dress("Head Wrap", 400)).await.unwrap();
  assert_eq!(signed.created_by, "Store Admin");
}

#[tokio::test]
#[serial]
async fn negative_price_is_rejected_and_nothing_is_stored() {
  let store = memory_store();
  let mut events = store.subscribe();

  let err = store.products().add(dress("Kitenge Dress", -5)).await.unwrap_err();

  match err {
    StoreError::Validation { field, ref message } => {
      assert_eq!(field, "price");
      assert_eq!(message, "Price cannot be negative");
    }
    other => panic!("unexpected error: {:?}", other),
  }
  assert!(store.products().list().unwrap().is_empty());
  assert!(drain(&mut events).is_empty());

  let banner = store.notices().active().pop().unwrap();
  assert_eq!(banner.kind, NoticeKind::Error);
  assert_eq!(banner.message, "Price cannot be negative");
}

#[tokio::test]
#[serial]
async fn missing_required_fields_are_reported() {
  let store = memory_store();
  let no_price = ProductDraft {
    price: ProductDraft::parse_price(""),
    ..dress("Kitenge Dress", 0)
  };
  let no_category = ProductDraft::new("Kitenge Dress", 100, "");

  for draft in [dress("", 100), no_price, no_category] {
    let err = store.products().add(draft).await.unwrap_err();
    assert_eq!(err.to_string(), "Please fill in all required fields");
  }
  assert!(store.products().list().unwrap().is_empty());
}

#[tokio::test]
#[serial]
async fn zero_price_is_a_valid_price() {
  let store = memory_store();
  let freebie = store.products().add(ProductDraft::new("Gift Bag", 0, "Gifts")).await.unwrap();
  assert_eq!(freebie.price, 0);
}

#[tokio::test]
#[serial]
async fn add_posts_a_success_banner_and_announces_the_change() {
  let store = memory_store();
  let mut events = store.subscribe();

  store.products().add(dress("Kitenge Dress", 2500)).await.unwrap();

  assert_eq!(drain(&mut events), vec![StoreEvent::ProductsChanged]);
  let active = store.notices().active();
  assert_eq!(active.len(), 1);
  assert_eq!(active[0].channel, NoticeChannel::Banner);
  assert_eq!(active[0].message, "Product added successfully!");
}

#[tokio::test]
#[serial]
async fn blank_description_is_stored_as_absent() {
  let store = memory_store();
  let product = store
    .products()
    .add(dress("Kitenge Dress", 2500).with_description("   "))
    .await
    .unwrap();
  assert_eq!(product.description, None);
}

#[tokio::test]
#[serial]
async fn image_bytes_become_a_data_url() {
  let store = memory_store();
  let draft = dress("Kitenge Dress", 2500).with_image(ImageSource::Bytes {
    mime: "image/png".to_string(),
    data: vec![1, 2, 3],
  });
  let product = store.products().add(draft).await.unwrap();
  let image = product.image.expect("image attached");
  assert_eq!(image.as_str(), "data:image/png;base64,AQID");
}

#[tokio::test]
#[serial]
async fn failed_upload_still_saves_the_product() {
  let store = memory_store();
  let draft = dress("Kitenge Dress", 2500).with_image(ImageSource::Bytes {
    mime: "text/plain".to_string(),
    data: b"not an image".to_vec(),
  });
  let product = store.products().add(draft).await.unwrap();
  assert_eq!(product.image, None);
  assert_eq!(store.products().list().unwrap().len(), 1);
}

#[tokio::test]
#[serial]
async fn confirmed_remove_deletes_the_product() {
  let store = memory_store();
  let keep = store.products().add(dress("Keep", 100)).await.unwrap();
  let doomed = store.products().add(dress("Doomed", 200)).await.unwrap();
  let mut events = store.subscribe();

  let outcome = store.products().remove(&doomed.id, |_: &str| true).await.unwrap();

  assert_eq!(outcome, RemoveOutcome::Removed(doomed));
  assert_eq!(store.products().list().unwrap(), vec![keep]);
  assert_eq!(drain(&mut events), vec![StoreEvent::ProductsChanged]);
  assert_eq!(store.notices().active()[0].message, "Product deleted successfully");
}

#[tokio::test]
#[serial]
async fn remove_asks_before_deleting_and_declining_changes_nothing() {
  let store = memory_store();
  let product = store.products().add(dress("Kitenge Dress", 2500)).await.unwrap();
  store.notices().clear();
  let mut events = store.subscribe();

  let asked = std::sync::Arc::new(parking_lot::Mutex::new(Vec::<String>::new()));
  let seen = asked.clone();
  let outcome = store
    .products()
    .remove(&product.id, move |prompt: &str| {
      seen.lock().push(prompt.to_string());
      false
    })
    .await
    .unwrap();

  assert_eq!(outcome, RemoveOutcome::Declined);
  assert_eq!(
    asked.lock().as_slice(),
    ["Are you sure you want to delete this product? This action cannot be undone."]
  );
  assert_eq!(store.products().list().unwrap().len(), 1);
  assert!(drain(&mut events).is_empty());
  assert!(store.notices().active().is_empty());
}

#[tokio::test]
#[serial]
async fn removing_an_unknown_id_is_a_quiet_no_op() {
  let store = memory_store();
  store.products().add(dress("Kitenge Dress", 2500)).await.unwrap();
  store.notices().clear();
  let mut events = store.subscribe();

  let outcome = store.products().remove("no-such-id", |_: &str| true).await.unwrap();

  assert_eq!(outcome, RemoveOutcome::NotFound);
  assert_eq!(store.products().list().unwrap().len(), 1);
  assert!(drain(&mut events).is_empty());
  assert!(store.notices().active().is_empty());
}

#[tokio::test]
#[serial]
async fn editing_through_the_form_adds_a_new_product() {
  let store = memory_store();
  let original = store
    .products()
    .add(dress("Kitenge Dress", 2500).with_description("Cotton"))
    .await
    .unwrap();

  let mut draft = store.products().edit_draft(&original.id).unwrap().expect("draft");
  assert_eq!(draft.name, "Kitenge Dress");
  assert_eq!(draft.price, Some(2500));
  assert_eq!(draft.description, "Cotton");
  assert!(store.notices().active()[0].message.starts_with("Editing: Kitenge Dress"));

  draft.price = Some(2800);
  let edited = store.products().add(draft).await.unwrap();

  let listed = store.products().list().unwrap();
  assert_eq!(listed.len(), 2);
  assert_ne!(edited.id, original.id);
  assert!(listed.contains(&original));
  assert_eq!(listed[0].price, 2800);
}

#[tokio::test]
#[serial]
async fn edit_draft_for_unknown_id_is_none() {
  let store = memory_store();
  assert!(store.products().edit_draft("missing").unwrap().is_none());
}

#[tokio::test]
#[serial]
async fn update_changes_fields_in_place() {
  let store = memory_store();
  let product = store.products().add(dress("Kitenge Dress", 2500)).await.unwrap();

  let patch = ProductPatch {
    price: Some(3000),
    status: Some(ProductStatus::OutOfStock),
    ..Default::default()
  };
  let updated = store.products().update(&product.id, patch).await.unwrap().expect("updated");

  assert_eq!(updated.id, product.id);
  assert_eq!(updated.created_at, product.created_at);
  assert_eq!(updated.price, 3000);
  assert_eq!(updated.status, ProductStatus::OutOfStock);
  assert_eq!(store.products().list().unwrap(), vec![updated]);
}

#[tokio::test]
#[serial]
async fn update_of_unknown_id_is_none_and_rejects_bad_input() {
  let store = memory_store();
  let product = store.products().add(dress("Kitenge Dress", 2500)).await.unwrap();

  let missing = store.products().update("missing", ProductPatch::default()).await.unwrap();
  assert!(missing.is_none());

  let bad = ProductPatch {
    price: Some(-1),
    ..Default::default()
  };
  assert!(matches!(
    store.products().update(&product.id, bad).await,
    Err(StoreError::Validation { field: "price", .. })
  ));
  assert_eq!(store.products().get(&product.id).unwrap().unwrap().price, 2500);
}

#[tokio::test]
#[serial]
async fn stats_follow_the_product_count() {
  let store = memory_store();
  for i in 0..3 {
    store.products().add(dress(&format!("Dress {}", i), 1000)).await.unwrap();
  }
  let stats = store.products().stats().unwrap();
  assert_eq!(stats.total_products, 3);
  assert_eq!(stats.total_orders, 7);
}
