//! # Domain Model: Person Records
//!
//! This module defines the single entity tracked by roster, [`Person`], along with
//! the input types used to create and edit it.
//!
//! ## Keys
//!
//! Every record carries a `key`: an opaque string assigned by the
//! [`RecordStore`](crate::store::record_store::RecordStore) at creation and never
//! changed afterwards. Callers never choose keys, which is why creation takes a
//! [`PersonFields`] (every field *except* `key`) rather than a `Person`.
//!
//! ## Editing
//!
//! Edits are expressed as a [`PersonPatch`]. Fields left as `None` are preserved;
//! converting a full [`PersonFields`] into a patch replaces every field.
//!
//! ## Wire Shape
//!
//! Records serialize to camelCase JSON, matching the snapshot format:
//!
//! ```text
//! {
//!   "key": "6f0c…",
//!   "title": "Mr.",
//!   "firstname": "Somchai",
//!   "lastname": "Jaidee",
//!   "birthday": "1990-04-01",
//!   "nationality": "Thai",
//!   "citizenId": "1234567890123",
//!   "gender": "Male",
//!   "mobilePhone": "0812345678",
//!   "passportNo": "AA1234567",
//!   "expectedSalary": 35000.0
//! }
//! ```
//!
//! `citizenId` and `passportNo` are omitted when absent.
//!
//! ## Validation
//!
//! The core rejects records that would break the data model (see
//! [`PersonFields::validate`]). Presentation-level checks such as required
//! inputs are the caller's concern.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Result, RosterError};

/// Maximum number of digits in a citizen id.
pub const CITIZEN_ID_LEN: usize = 13;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
    Unisex,
}

impl Gender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
            Gender::Unisex => "Unisex",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Gender {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "male" | "m" => Ok(Gender::Male),
            "female" | "f" => Ok(Gender::Female),
            "unisex" | "u" => Ok(Gender::Unisex),
            other => Err(format!(
                "Unknown gender '{}' (expected Male, Female or Unisex)",
                other
            )),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Person {
    pub key: String,
    pub title: String,
    pub firstname: String,
    pub lastname: String,
    pub birthday: NaiveDate,
    pub nationality: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub citizen_id: Option<String>,
    pub gender: Gender,
    pub mobile_phone: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub passport_no: Option<String>,
    pub expected_salary: f64,
}

impl Person {
    pub fn from_fields(key: String, fields: PersonFields) -> Self {
        Self {
            key,
            title: fields.title,
            firstname: fields.firstname,
            lastname: fields.lastname,
            birthday: fields.birthday,
            nationality: fields.nationality,
            citizen_id: fields.citizen_id,
            gender: fields.gender,
            mobile_phone: fields.mobile_phone,
            passport_no: fields.passport_no,
            expected_salary: fields.expected_salary,
        }
    }

    /// "Firstname Lastname", as shown in the name column.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.firstname, self.lastname)
    }

    /// Applies every `Some` field of the patch. The key is never touched.
    pub fn apply(&mut self, patch: &PersonPatch) {
        if let Some(title) = &patch.title {
            self.title = title.clone();
        }
        if let Some(firstname) = &patch.firstname {
            self.firstname = firstname.clone();
        }
        if let Some(lastname) = &patch.lastname {
            self.lastname = lastname.clone();
        }
        if let Some(birthday) = patch.birthday {
            self.birthday = birthday;
        }
        if let Some(nationality) = &patch.nationality {
            self.nationality = nationality.clone();
        }
        if let Some(citizen_id) = &patch.citizen_id {
            self.citizen_id = citizen_id.clone();
        }
        if let Some(gender) = patch.gender {
            self.gender = gender;
        }
        if let Some(mobile_phone) = &patch.mobile_phone {
            self.mobile_phone = mobile_phone.clone();
        }
        if let Some(passport_no) = &patch.passport_no {
            self.passport_no = passport_no.clone();
        }
        if let Some(expected_salary) = patch.expected_salary {
            self.expected_salary = expected_salary;
        }
    }

    pub fn validate(&self) -> Result<()> {
        validate_salary(self.expected_salary)?;
        validate_citizen_id(self.citizen_id.as_deref())
    }
}

/// All the fields of a [`Person`] except its key.
#[derive(Debug, Clone, PartialEq)]
pub struct PersonFields {
    pub title: String,
    pub firstname: String,
    pub lastname: String,
    pub birthday: NaiveDate,
    pub nationality: String,
    pub citizen_id: Option<String>,
    pub gender: Gender,
    pub mobile_phone: String,
    pub passport_no: Option<String>,
    pub expected_salary: f64,
}

impl PersonFields {
    /// Rejects values the data model cannot hold.
    ///
    /// - `expected_salary` must be finite and non-negative.
    /// - `citizen_id`, when non-empty, must be at most 13 ASCII digits.
    pub fn validate(&self) -> Result<()> {
        validate_salary(self.expected_salary)?;
        validate_citizen_id(self.citizen_id.as_deref())
    }
}

/// A partial edit. `None` leaves the field as it is.
///
/// The optional fields use `Option<Option<_>>` so an edit can clear them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PersonPatch {
    pub title: Option<String>,
    pub firstname: Option<String>,
    pub lastname: Option<String>,
    pub birthday: Option<NaiveDate>,
    pub nationality: Option<String>,
    pub citizen_id: Option<Option<String>>,
    pub gender: Option<Gender>,
    pub mobile_phone: Option<String>,
    pub passport_no: Option<Option<String>>,
    pub expected_salary: Option<f64>,
}

impl PersonPatch {
    pub fn is_empty(&self) -> bool {
        *self == PersonPatch::default()
    }
}

impl From<PersonFields> for PersonPatch {
    fn from(fields: PersonFields) -> Self {
        Self {
            title: Some(fields.title),
            firstname: Some(fields.firstname),
            lastname: Some(fields.lastname),
            birthday: Some(fields.birthday),
            nationality: Some(fields.nationality),
            citizen_id: Some(fields.citizen_id),
            gender: Some(fields.gender),
            mobile_phone: Some(fields.mobile_phone),
            passport_no: Some(fields.passport_no),
            expected_salary: Some(fields.expected_salary),
        }
    }
}

fn validate_salary(salary: f64) -> Result<()> {
    if !salary.is_finite() || salary < 0.0 {
        return Err(RosterError::InvalidRecord(format!(
            "expected salary must be a non-negative number, got {}",
            salary
        )));
    }
    Ok(())
}

fn validate_citizen_id(citizen_id: Option<&str>) -> Result<()> {
    let Some(id) = citizen_id else {
        return Ok(());
    };
    if id.len() > CITIZEN_ID_LEN || !id.chars().all(|c| c.is_ascii_digit()) {
        return Err(RosterError::InvalidRecord(format!(
            "citizen id must be at most {} digits, got '{}'",
            CITIZEN_ID_LEN, id
        )));
    }
    Ok(())
}
