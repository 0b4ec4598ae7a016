use std::{fmt, str::FromStr};

use serde::{Deserialize, Deserializer};
use thiserror::Error;

use super::*;

/// Treats an explicit `null` like a missing value.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown {kind}: {value}")]
pub struct ParseError {
    kind: &'static str,
    value: String,
}

impl UserRole {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Admin => "admin",
        }
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UserRole {
    type Err = ParseError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "user" => Ok(Self::User),
            "admin" => Ok(Self::Admin),
            _ => Err(ParseError {
                kind: "role",
                value: s.to_string(),
            }),
        }
    }
}

impl ApprovalStatus {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Approved => "approved",
            Self::Rejected => "rejected",
        }
    }
}

impl fmt::Display for ApprovalStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ApprovalStatus {
    type Err = ParseError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(Self::Pending),
            "approved" => Ok(Self::Approved),
            "rejected" => Ok(Self::Rejected),
            _ => Err(ParseError {
                kind: "approval status",
                value: s.to_string(),
            }),
        }
    }
}

impl Identity {
    #[must_use]
    pub fn is_admin(&self) -> bool {
        matches!(self.role, UserRole::Admin)
    }
}

impl ErrorResponse {
    /// The server supplied message, if any.
    ///
    /// `message` takes precedence over `error`; blank strings count as absent.
    #[must_use]
    pub fn into_message(self) -> Option<String> {
        let Self { message, error } = self;
        message
            .filter(|m| !m.trim().is_empty())
            .or_else(|| error.filter(|e| !e.trim().is_empty()))
    }
}

impl RestaurantPage {
    #[must_use]
    pub fn into_parts(self) -> (Vec<Restaurant>, Option<u32>) {
        match self {
            Self::List(restaurants) => (restaurants, None),
            Self::Paged {
                restaurants,
                total_pages,
            } => (restaurants, total_pages),
        }
    }
}

impl From<Vec<Restaurant>> for RestaurantPage {
    fn from(from: Vec<Restaurant>) -> Self {
        Self::List(from)
    }
}

impl From<NewUser> for Credentials {
    fn from(from: NewUser) -> Self {
        let NewUser {
            email, password, ..
        } = from;
        Self { email, password }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_roles() {
        assert_eq!("admin".parse::<UserRole>().unwrap(), UserRole::Admin);
        assert_eq!("user".parse::<UserRole>().unwrap(), UserRole::User);
        assert!("scout".parse::<UserRole>().is_err());
        assert_eq!(UserRole::Admin.to_string(), "admin");
    }

    #[test]
    fn deserialize_identity() {
        let json = r#"{"username":"a","role":"admin","token":"t"}"#;
        let identity: Identity = serde_json::from_str(json).unwrap();
        assert_eq!(identity.username, "a");
        assert!(identity.is_admin());
        assert_eq!(identity.token, "t");
    }

    #[test]
    fn deserialize_restaurant_from_backend_shape() {
        let json = r#"{
            "id": 7,
            "created_at": "2024-01-01T00:00:00Z",
            "name": "Curry House",
            "address": "Main St 1",
            "category": "Indian",
            "description": "Spicy",
            "status": "approved",
            "photos": [{"id": 1, "url": "https://img/1.jpg", "restaurant_id": 7}],
            "reviews": [
              {"id": 3, "rating": 4, "comment": "Nice", "user_id": 2, "User": {"Username": "bob"}}
            ]
        }"#;
        let r: Restaurant = serde_json::from_str(json).unwrap();
        assert_eq!(r.id, 7);
        assert_eq!(r.status, ApprovalStatus::Approved);
        assert_eq!(r.photos[0].url, "https://img/1.jpg");
        assert_eq!(r.reviews[0].author.as_ref().unwrap().username, "bob");
        assert_eq!(r.reviews[0].user_id, Some(2));
    }

    #[test]
    fn restaurant_without_photos_and_reviews() {
        let json = r#"{"id":1,"name":"A","category":"B","address":"C"}"#;
        let r: Restaurant = serde_json::from_str(json).unwrap();
        assert!(r.photos.is_empty());
        assert!(r.reviews.is_empty());
        assert_eq!(r.status, ApprovalStatus::Pending);
        assert!(r.description.is_empty());
    }

    #[test]
    fn restaurant_with_null_photos_and_reviews() {
        let json = r#"{
            "id": 7,
            "name": "Curry House",
            "address": "Main St 1",
            "category": "Indian",
            "description": "Spicy",
            "status": "pending",
            "photos": null,
            "reviews": null,
            "created_by": 1
        }"#;
        let r: Restaurant = serde_json::from_str(json).unwrap();
        assert!(r.photos.is_empty());
        assert!(r.reviews.is_empty());
        assert_eq!(r.status, ApprovalStatus::Pending);
    }

    #[test]
    fn null_restaurant_list_is_empty() {
        let page: RestaurantPage = serde_json::from_str("null").unwrap();
        assert_eq!(page.into_parts(), (vec![], None));

        let page: RestaurantPage =
            serde_json::from_str(r#"{"restaurants":null,"totalPages":0}"#).unwrap();
        assert_eq!(page.into_parts(), (vec![], Some(0)));
    }

    #[test]
    fn restaurant_page_shapes() {
        let list: RestaurantPage =
            serde_json::from_str(r#"[{"id":1,"name":"A","category":"B","address":"C"}]"#)
                .unwrap();
        let (items, total) = list.into_parts();
        assert_eq!(items.len(), 1);
        assert_eq!(total, None);

        let paged: RestaurantPage = serde_json::from_str(
            r#"{"data":[{"id":1,"name":"A","category":"B","address":"C"}],"totalPages":3}"#,
        )
        .unwrap();
        let (items, total) = paged.into_parts();
        assert_eq!(items.len(), 1);
        assert_eq!(total, Some(3));
    }

    #[test]
    fn error_response_message() {
        let res: ErrorResponse = serde_json::from_str(r#"{"message":"bad input"}"#).unwrap();
        assert_eq!(res.into_message().as_deref(), Some("bad input"));

        let res: ErrorResponse =
            serde_json::from_str(r#"{"error":"Invalid credentials"}"#).unwrap();
        assert_eq!(res.into_message().as_deref(), Some("Invalid credentials"));

        let res: ErrorResponse = serde_json::from_str(r#"{"message":"  "}"#).unwrap();
        assert_eq!(res.into_message(), None);

        let res: ErrorResponse = serde_json::from_str("{}").unwrap();
        assert_eq!(res.into_message(), None);
    }

    #[test]
    fn serialize_new_review() {
        let review = NewReview {
            rating: 5,
            comment: "Great".into(),
            restaurant_id: 9,
        };
        let json = serde_json::to_value(&review).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"rating": 5, "comment": "Great", "restaurant_id": 9})
        );
    }
}
