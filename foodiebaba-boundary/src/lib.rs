use serde::{Deserialize, Serialize};

mod conv;

pub use self::conv::*;

pub type RestaurantId = u64;

#[rustfmt::skip]
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq, Eq))]
pub struct Identity {
    pub username : String,
    pub role     : UserRole,
    pub token    : String,
}

#[derive(Serialize, Deserialize, Default)]
#[cfg_attr(
    feature = "extra-derive",
    derive(Debug, Clone, Copy, PartialEq, Eq, Hash)
)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    #[default]
    User,
    Admin,
}

#[derive(Serialize, Deserialize, Default)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq, Eq))]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

#[derive(Serialize, Deserialize, Default)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq, Eq))]
pub struct NewUser {
    pub username: String,
    pub email: String,
    pub password: String,
}

#[rustfmt::skip]
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq, Eq))]
pub struct Restaurant {
    pub id          : RestaurantId,
    pub name        : String,
    pub category    : String,
    pub address     : String,
    #[serde(default)]
    pub description : String,
    #[serde(default, rename = "status", alias = "approvalStatus", alias = "approval_status")]
    pub status      : ApprovalStatus,
    #[serde(default, deserialize_with = "conv::null_as_default")]
    pub photos      : Vec<Photo>,
    #[serde(default, deserialize_with = "conv::null_as_default")]
    pub reviews     : Vec<Review>,
}

#[derive(Serialize, Deserialize, Default)]
#[cfg_attr(
    feature = "extra-derive",
    derive(Debug, Clone, Copy, PartialEq, Eq, Hash)
)]
#[serde(rename_all = "lowercase")]
pub enum ApprovalStatus {
    #[default]
    Pending,
    Approved,
    Rejected,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq, Eq))]
pub struct Photo {
    pub id: u64,
    pub url: String,
}

#[rustfmt::skip]
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq, Eq))]
pub struct Review {
    pub id      : u64,
    pub rating  : u8,
    pub comment : String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id : Option<u64>,
    #[serde(default, rename = "user", alias = "User", skip_serializing_if = "Option::is_none")]
    pub author  : Option<ReviewAuthor>,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq, Eq))]
pub struct ReviewAuthor {
    #[serde(alias = "Username")]
    pub username: String,
}

/// A restaurant submission; the backend stores it as `pending`.
#[derive(Serialize, Deserialize, Default)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq, Eq))]
pub struct NewRestaurant {
    pub name: String,
    pub category: String,
    pub address: String,
    pub description: String,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq, Eq))]
pub struct NewReview {
    pub rating: u8,
    pub comment: String,
    pub restaurant_id: RestaurantId,
}

/// Response of `GET /restaurants`.
///
/// The endpoint returns a bare array (`null` if nothing matched),
/// but a paged envelope is accepted as well.
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq, Eq))]
#[serde(untagged)]
pub enum RestaurantPage {
    List(#[serde(deserialize_with = "conv::null_as_default")] Vec<Restaurant>),
    Paged {
        #[serde(alias = "data", deserialize_with = "conv::null_as_default")]
        restaurants: Vec<Restaurant>,
        #[serde(
            default,
            rename = "totalPages",
            alias = "total_pages",
            skip_serializing_if = "Option::is_none"
        )]
        total_pages: Option<u32>,
    },
}

/// Error payload of a non-2xx response.
#[derive(Serialize, Deserialize, Default)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq, Eq))]
pub struct ErrorResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}
