use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request to analyze the personal color of a product image
///
/// `image_url` is optional at the deserialization layer so that a missing
/// field reaches the handler and gets the service's own 400 response.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct AnalyzeColorRequest {
    #[validate(length(min = 1))]
    #[serde(default, alias = "imageUrl")]
    pub image_url: Option<String>,
}

impl AnalyzeColorRequest {
    /// The image URL as sent, if present and not blank
    pub fn image_url(&self) -> Option<&str> {
        self.image_url
            .as_deref()
            .filter(|url| !url.trim().is_empty())
    }
}
