//! Group record

use serde::{Deserialize, Serialize};

use super::{Contact, ValidationError};

/// Maximum length for group names, in characters
pub const MAX_GROUP_NAME_LEN: usize = 250;

/// A named collection of contacts
///
/// `contacts` is only populated by reads that join the membership table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Group {
    #[serde(rename = "ID")]
    pub id: String,
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Contacts")]
    pub contacts: Vec<Contact>,
}

impl Group {
    /// Create a group, validating the name length.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        contacts: Vec<Contact>,
    ) -> Result<Self, ValidationError> {
        let group = Self {
            id: id.into(),
            name: name.into(),
            contacts,
        };
        group.validate()?;
        Ok(group)
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.chars().count() > MAX_GROUP_NAME_LEN {
            return Err(ValidationError::NameTooLong {
                max: MAX_GROUP_NAME_LEN,
            });
        }
        Ok(())
    }
}
