//! Client side form validation.
//!
//! Every form is checked before anything is sent to the backend.
//! A failed check yields the messages per field.

use std::{collections::BTreeMap, fmt};

use foodiebaba_boundary::{Credentials, NewRestaurant, NewReview, NewUser, RestaurantId};
use foodiebaba_frontend_api::FileUpload;

pub use fast_chemail::is_valid_email;

pub const REQUIRED: &str = "Required";
pub const INVALID_EMAIL: &str = "Invalid email";
pub const PASSWORD_TOO_SHORT: &str = "Minimum 6 characters";
pub const RATING_OUT_OF_RANGE: &str = "Rating must be between 1 and 5";
pub const NO_PHOTOS: &str = "Please select at least one photo";

pub const MIN_PASSWORD_LEN: usize = 6;

pub trait Validate {
    type Error;
    fn validate(&self) -> Result<(), Self::Error>;
}

/// Validation messages by field name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<&'static str, &'static str>);

impl FieldErrors {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Only the first message of a field is kept.
    pub fn add(&mut self, field: &'static str, message: &'static str) {
        self.0.entry(field).or_insert(message);
    }

    #[must_use]
    pub fn get(&self, field: &str) -> Option<&'static str> {
        self.0.get(field).copied()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &'static str)> + '_ {
        self.0.iter().map(|(f, m)| (*f, *m))
    }

    fn into_result(self) -> Result<(), Self> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (field, message) in self.iter() {
            if !first {
                f.write_str(", ")?;
            }
            write!(f, "{field}: {message}")?;
            first = false;
        }
        Ok(())
    }
}

impl std::error::Error for FieldErrors {}

fn is_blank(s: &str) -> bool {
    s.trim().is_empty()
}

fn required(errors: &mut FieldErrors, field: &'static str, value: &str) {
    if is_blank(value) {
        errors.add(field, REQUIRED);
    }
}

fn email(errors: &mut FieldErrors, field: &'static str, value: &str) {
    if is_blank(value) {
        errors.add(field, REQUIRED);
    } else if !is_valid_email(value.trim()) {
        errors.add(field, INVALID_EMAIL);
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

impl Validate for LoginForm {
    type Error = FieldErrors;
    fn validate(&self) -> Result<(), Self::Error> {
        let mut errors = FieldErrors::new();
        email(&mut errors, "email", &self.email);
        required(&mut errors, "password", &self.password);
        errors.into_result()
    }
}

impl LoginForm {
    #[must_use]
    pub fn to_credentials(&self) -> Credentials {
        Credentials {
            email: self.email.trim().to_string(),
            password: self.password.clone(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegisterForm {
    pub username: String,
    pub email: String,
    pub password: String,
}

impl Validate for RegisterForm {
    type Error = FieldErrors;
    fn validate(&self) -> Result<(), Self::Error> {
        let mut errors = FieldErrors::new();
        required(&mut errors, "username", &self.username);
        email(&mut errors, "email", &self.email);
        if self.password.is_empty() {
            errors.add("password", REQUIRED);
        } else if self.password.chars().count() < MIN_PASSWORD_LEN {
            errors.add("password", PASSWORD_TOO_SHORT);
        }
        errors.into_result()
    }
}

impl RegisterForm {
    #[must_use]
    pub fn to_new_user(&self) -> NewUser {
        NewUser {
            username: self.username.trim().to_string(),
            email: self.email.trim().to_string(),
            password: self.password.clone(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RestaurantForm {
    pub name: String,
    pub category: String,
    pub address: String,
    pub description: String,
}

impl Validate for RestaurantForm {
    type Error = FieldErrors;
    fn validate(&self) -> Result<(), Self::Error> {
        let mut errors = FieldErrors::new();
        required(&mut errors, "name", &self.name);
        required(&mut errors, "category", &self.category);
        required(&mut errors, "address", &self.address);
        required(&mut errors, "description", &self.description);
        errors.into_result()
    }
}

impl RestaurantForm {
    #[must_use]
    pub fn to_new_restaurant(&self) -> NewRestaurant {
        NewRestaurant {
            name: self.name.trim().to_string(),
            category: self.category.trim().to_string(),
            address: self.address.trim().to_string(),
            description: self.description.trim().to_string(),
        }
    }
}

/// A rating of `0` means "not selected".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReviewForm {
    pub rating: u8,
    pub comment: String,
}

impl Validate for ReviewForm {
    type Error = FieldErrors;
    fn validate(&self) -> Result<(), Self::Error> {
        let mut errors = FieldErrors::new();
        if !(1..=5).contains(&self.rating) {
            errors.add("rating", RATING_OUT_OF_RANGE);
        }
        required(&mut errors, "comment", &self.comment);
        errors.into_result()
    }
}

impl ReviewForm {
    #[must_use]
    pub fn to_new_review(&self, restaurant_id: RestaurantId) -> NewReview {
        NewReview {
            rating: self.rating,
            comment: self.comment.trim().to_string(),
            restaurant_id,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PhotoSelection {
    pub files: Vec<FileUpload>,
}

impl Validate for PhotoSelection {
    type Error = FieldErrors;
    fn validate(&self) -> Result<(), Self::Error> {
        let mut errors = FieldErrors::new();
        if self.files.is_empty() {
            errors.add("photos", NO_PHOTOS);
        }
        errors.into_result()
    }
}
