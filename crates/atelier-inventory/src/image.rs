//! Storage keys for imported diamond images.
//!
//! Supplier rows link to images on the supplier's host. On import the image is
//! copied into the order's document storage under
//! `{order_id}/productos/{unique}.{ext}`. Fetching and uploading happen
//! elsewhere; this module only validates requests and derives the key.

use serde::{Deserialize, Serialize};

use crate::error::{ImportError, Result};

const DEFAULT_EXTENSION: &str = "jpg";

/// A request to copy one image into an order's storage.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageImportRequest {
    #[serde(default)]
    pub image_url: String,
    #[serde(default)]
    pub order_id: String,
}

impl ImageImportRequest {
    pub fn new(image_url: impl Into<String>, order_id: impl Into<String>) -> Self {
        Self {
            image_url: image_url.into(),
            order_id: order_id.into(),
        }
    }

    /// Fails when either field is empty.
    pub fn validate(&self) -> Result<()> {
        if self.image_url.trim().is_empty() {
            return Err(ImportError::MissingField("imageUrl"));
        }
        if self.order_id.trim().is_empty() {
            return Err(ImportError::MissingField("orderId"));
        }
        Ok(())
    }

    /// Validates the request and derives its storage key.
    pub fn object_key(&self, unique: &str) -> Result<String> {
        self.validate()?;
        Ok(image_object_key(&self.order_id, &self.image_url, unique))
    }
}

/// File extension taken from an image URL.
///
/// The text after the last `.` with any query string removed. URLs without
/// a dot, or whose last dot sits in the host or a directory name, fall back
/// to `jpg`.
pub fn image_extension(image_url: &str) -> &str {
    let Some((_, last)) = image_url.rsplit_once('.') else {
        return DEFAULT_EXTENSION;
    };
    let ext = last.split(['?', '#']).next().unwrap_or_default();
    if ext.is_empty() || ext.contains('/') {
        DEFAULT_EXTENSION
    } else {
        ext
    }
}

/// Storage key for an order's product image.
pub fn image_object_key(order_id: &str, image_url: &str, unique: &str) -> String {
    format!(
        "{}/productos/{}.{}",
        order_id,
        unique,
        image_extension(image_url)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_strips_query_string() {
        assert_eq!(
            image_object_key("o1", "http://x/a.png?x=1", "u"),
            "o1/productos/u.png"
        );
    }

    #[test]
    fn extension_defaults_to_jpg() {
        assert_eq!(image_extension("imagefile"), "jpg");
        assert_eq!(image_extension("http://cdn.example/img/12345"), "jpg");
        assert_eq!(image_extension("http://x/a."), "jpg");
    }

    #[test]
    fn extension_keeps_case() {
        assert_eq!(image_extension("https://x/photo.JPEG"), "JPEG");
    }

    #[test]
    fn request_reads_camel_case() {
        let req: ImageImportRequest =
            serde_json::from_str(r#"{"imageUrl":"http://x/a.webp","orderId":"42"}"#).unwrap();
        assert_eq!(req, ImageImportRequest::new("http://x/a.webp", "42"));
        assert_eq!(req.object_key("k").unwrap(), "42/productos/k.webp");
    }

    #[test]
    fn request_requires_both_fields() {
        let req: ImageImportRequest = serde_json::from_str(r#"{"orderId":"42"}"#).unwrap();
        assert!(matches!(
            req.validate(),
            Err(ImportError::MissingField("imageUrl"))
        ));

        let req = ImageImportRequest::new("http://x/a.png", " ");
        assert!(matches!(
            req.object_key("k"),
            Err(ImportError::MissingField("orderId"))
        ));
    }
}
