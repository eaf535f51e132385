// storefront/src/services/image_service.rs

//! Turns a picked image into an inline payload. There is no image host: the
//! "upload" is an encode followed by a configurable delay.

use crate::models::{ImagePayload, ImageSource};
use anyhow::{bail, Context};
use std::path::Path;
use std::time::Duration;
use tracing::{debug, instrument};

/// Media type for an image file, judged by its extension.
pub fn image_mime_for(path: &Path) -> Option<&'static str> {
  let ext = path.extension()?.to_str()?.to_ascii_lowercase();
  let mime = match ext.as_str() {
    "png" => "image/png",
    "jpg" | "jpeg" => "image/jpeg",
    "gif" => "image/gif",
    "webp" => "image/webp",
    "svg" => "image/svg+xml",
    "bmp" => "image/bmp",
    "avif" => "image/avif",
    _ => return None,
  };
  Some(mime)
}

/// Reads and encodes `source`, then waits out the simulated upload latency.
///
/// Non-image content is refused. Dropping the returned future abandons the
/// upload without side effects.
#[instrument(name = "image_service::upload", skip(source), fields(latency_ms = latency.as_millis() as u64), err(Display))]
pub async fn upload(source: &ImageSource, latency: Duration) -> anyhow::Result<ImagePayload> {
  let payload = match source {
    ImageSource::File(path) => {
      let Some(mime) = image_mime_for(path) else {
        bail!("{} is not an image file", path.display());
      };
      let bytes = tokio::fs::read(path)
        .await
        .with_context(|| format!("reading image {}", path.display()))?;
      ImagePayload::encode(mime, &bytes)
    }
    ImageSource::Bytes { mime, data } => {
      if !mime.starts_with("image/") {
        bail!("content type {} is not an image", mime);
      }
      ImagePayload::encode(mime, data)
    }
  };

  if !latency.is_zero() {
    tokio::time::sleep(latency).await;
  }
  debug!(bytes = payload.as_str().len(), "Image encoded.");
  Ok(payload)
}
