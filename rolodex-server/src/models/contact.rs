//! Contact record
//!
//! Phone numbers are digits only. JSON field names follow the wire format
//! used by existing clients (`ID`, `FirstName`, ...).

use serde::{Deserialize, Serialize};

use super::ValidationError;

/// A person record
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Contact {
    #[serde(rename = "ID")]
    pub id: String,
    #[serde(rename = "FirstName")]
    pub first_name: String,
    #[serde(rename = "LastName")]
    pub last_name: String,
    #[serde(rename = "MiddleName")]
    pub middle_name: String,
    #[serde(rename = "Phone")]
    pub phone: String,
}

impl Contact {
    /// Create a contact, validating the phone number.
    ///
    /// # Example
    /// ```
    /// use rolodex_server::models::Contact;
    ///
    /// assert!(Contact::new("1", "Jane", "Doe", "", "5551234").is_ok());
    /// assert!(Contact::new("1", "Jane", "Doe", "", "555-1234").is_err());
    /// ```
    pub fn new(
        id: impl Into<String>,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        middle_name: impl Into<String>,
        phone: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let contact = Self {
            id: id.into(),
            first_name: first_name.into(),
            last_name: last_name.into(),
            middle_name: middle_name.into(),
            phone: phone.into(),
        };
        contact.validate()?;
        Ok(contact)
    }

    /// Re-check invariants on a value that did not go through `new`
    /// (e.g. decoded from a request body).
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !self.phone.chars().all(|c| c.is_ascii_digit()) {
            return Err(ValidationError::InvalidPhone);
        }
        Ok(())
    }

    /// First, middle and last name joined by single spaces.
    ///
    /// Empty parts are kept as empty segments.
    pub fn full_name(&self) -> String {
        format!("{} {} {}", self.first_name, self.middle_name, self.last_name)
    }
}
