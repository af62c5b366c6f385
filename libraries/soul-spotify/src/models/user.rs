use super::{Image, ProductType};
use serde::{Deserialize, Serialize};

/// Public profile of any user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BaseUserProfile {
    #[serde(rename = "id")]
    pub user_id: String,
    pub display_name: Option<String>,
    pub images: Vec<Image>,
    #[serde(rename = "type")]
    pub object_type: String,
    pub uri: String,
}

/// Private profile of the authenticated user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    #[serde(rename = "id")]
    pub user_id: String,
    pub display_name: Option<String>,
    pub images: Vec<Image>,
    #[serde(rename = "type")]
    pub object_type: String,
    pub uri: String,
    pub product: ProductType,
    /// Only present with the `user-read-email` scope
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}
