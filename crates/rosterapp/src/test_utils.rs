//! Shared fixtures for tests.

use crate::model::{Gender, Person, PersonFields};
use chrono::NaiveDate;

/// A valid set of fields with the given first name.
pub fn sample_fields(firstname: &str) -> PersonFields {
    PersonFields {
        title: "Mr.".to_string(),
        firstname: firstname.to_string(),
        lastname: "Tester".to_string(),
        birthday: NaiveDate::from_ymd_opt(1990, 1, 15).unwrap_or_default(),
        nationality: "Thai".to_string(),
        citizen_id: Some("1234567890123".to_string()),
        gender: Gender::Male,
        mobile_phone: "0812345678".to_string(),
        passport_no: None,
        expected_salary: 30000.0,
    }
}

/// A record with an explicit key, as if loaded from a snapshot.
pub fn person_with_key(key: &str, firstname: &str) -> Person {
    Person::from_fields(key.to_string(), sample_fields(firstname))
}
