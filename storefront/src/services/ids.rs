// storefront/src/services/ids.rs

use uuid::Uuid;

/// A new record id. UUIDv7 is time-ordered and unique even for records
/// created within the same millisecond.
pub fn next_id() -> String {
  Uuid::now_v7().to_string()
}
