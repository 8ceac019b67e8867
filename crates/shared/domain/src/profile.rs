use crate::constants::DEFAULT_USERNAME;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// The value record collected by the profile form.
///
/// Keys are camelCase on the wire; the form controller addresses them with dotted
/// paths such as `social.twitter`, `phoneNumbers.0` or `phNumbers.2.number`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileValues {
    pub username: String,
    pub email: String,
    pub channel: String,
    pub social: Social,
    /// Primary and secondary number.
    pub phone_numbers: [String; 2],
    /// User-extensible list, never empty.
    pub ph_numbers: Vec<PhoneEntry>,
    pub age: f64,
    pub dob: NaiveDate,
}

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Social {
    pub twitter: String,
    pub facebook: String,
}

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhoneEntry {
    pub number: String,
}

impl ProfileValues {
    /// Mount-time defaults with an explicit date of birth.
    #[must_use]
    pub fn with_dob(dob: NaiveDate) -> Self {
        Self {
            username: DEFAULT_USERNAME.to_owned(),
            email: String::new(),
            channel: String::new(),
            social: Social::default(),
            phone_numbers: [String::new(), String::new()],
            ph_numbers: vec![PhoneEntry::default()],
            age: 0.0,
            dob,
        }
    }
}

impl Default for ProfileValues {
    /// Date of birth defaults to today's local date.
    fn default() -> Self {
        Self::with_dob(chrono::Local::now().date_naive())
    }
}
