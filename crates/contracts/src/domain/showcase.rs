use serde::{Deserialize, Serialize};

/// Slide of the product showcase carousel on the home page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CarouselItem {
    pub image_ref: String,
    pub caption: String,
    pub description: String,
}
