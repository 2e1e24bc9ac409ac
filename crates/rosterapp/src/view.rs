//! # Derived Views: Sorting and Pagination
//!
//! A [`PageView`] is a recomputed projection of the store for display. It is
//! never a source of truth and carries no state between calls: identical inputs
//! always give an identical page.
//!
//! ## Sorting
//!
//! - **Stable**: records that compare equal keep their store order, in both
//!   directions. Descending reverses the comparison, not the sequence.
//! - **Typed**: each [`SortField`] compares by its semantic type. Strings compare
//!   lexicographically, `birthday` as a date, `expectedSalary` numerically,
//!   `gender` by its name.
//! - **Missing values**: absent optional fields (`citizenId`, `passportNo`)
//!   compare as the empty string, so they lead an ascending sort.
//!
//! ## Pagination
//!
//! Pages are 1-based. Page `0` is read as page `1` and a page size of `0` as `1`.
//! A page past the end is empty rather than an error; callers clamp using
//! `total_pages`.
//!
//! ```text
//! 23 records, page_size 10  →  total_pages 3  →  page 3 has 3 rows
//! ```

use crate::model::Person;
use serde::Serialize;
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum SortField {
    Key,
    Title,
    /// First name, then last name.
    Name,
    Firstname,
    Lastname,
    Birthday,
    Nationality,
    CitizenId,
    Gender,
    MobilePhone,
    PassportNo,
    ExpectedSalary,
}

impl SortField {
    pub const ALL: [SortField; 12] = [
        SortField::Key,
        SortField::Title,
        SortField::Name,
        SortField::Firstname,
        SortField::Lastname,
        SortField::Birthday,
        SortField::Nationality,
        SortField::CitizenId,
        SortField::Gender,
        SortField::MobilePhone,
        SortField::PassportNo,
        SortField::ExpectedSalary,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SortField::Key => "key",
            SortField::Title => "title",
            SortField::Name => "name",
            SortField::Firstname => "firstname",
            SortField::Lastname => "lastname",
            SortField::Birthday => "birthday",
            SortField::Nationality => "nationality",
            SortField::CitizenId => "citizenId",
            SortField::Gender => "gender",
            SortField::MobilePhone => "mobilePhone",
            SortField::PassportNo => "passportNo",
            SortField::ExpectedSalary => "expectedSalary",
        }
    }

    fn compare(&self, a: &Person, b: &Person) -> Ordering {
        match self {
            SortField::Key => a.key.cmp(&b.key),
            SortField::Title => a.title.cmp(&b.title),
            SortField::Name => a
                .firstname
                .cmp(&b.firstname)
                .then_with(|| a.lastname.cmp(&b.lastname)),
            SortField::Firstname => a.firstname.cmp(&b.firstname),
            SortField::Lastname => a.lastname.cmp(&b.lastname),
            SortField::Birthday => a.birthday.cmp(&b.birthday),
            SortField::Nationality => a.nationality.cmp(&b.nationality),
            SortField::CitizenId => or_empty(&a.citizen_id).cmp(or_empty(&b.citizen_id)),
            SortField::Gender => a.gender.as_str().cmp(b.gender.as_str()),
            SortField::MobilePhone => a.mobile_phone.cmp(&b.mobile_phone),
            SortField::PassportNo => or_empty(&a.passport_no).cmp(or_empty(&b.passport_no)),
            SortField::ExpectedSalary => a.expected_salary.total_cmp(&b.expected_salary),
        }
    }
}

fn or_empty(value: &Option<String>) -> &str {
    value.as_deref().unwrap_or("")
}

impl fmt::Display for SortField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortField {
    type Err = String;

    /// Accepts the JSON field name in any case, with or without `-`/`_`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted: String = s
            .chars()
            .filter(|c| *c != '-' && *c != '_')
            .collect::<String>()
            .to_ascii_lowercase();
        SortField::ALL
            .iter()
            .find(|f| f.as_str().to_ascii_lowercase() == wanted)
            .copied()
            .ok_or_else(|| format!("Unknown sort field: '{}'", s))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Ascending,
    Descending,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct SortSpec {
    pub field: SortField,
    pub direction: SortDirection,
}

impl SortSpec {
    pub fn ascending(field: SortField) -> Self {
        Self {
            field,
            direction: SortDirection::Ascending,
        }
    }

    pub fn descending(field: SortField) -> Self {
        Self {
            field,
            direction: SortDirection::Descending,
        }
    }

    fn compare(&self, a: &Person, b: &Person) -> Ordering {
        match self.direction {
            SortDirection::Ascending => self.field.compare(a, b),
            SortDirection::Descending => self.field.compare(b, a),
        }
    }
}

/// One page of records plus what navigation controls need.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PageView {
    pub rows: Vec<Person>,
    pub page: usize,
    pub page_size: usize,
    pub total: usize,
    pub total_pages: usize,
    pub sort: Option<SortSpec>,
}

impl PageView {
    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }

    pub fn has_prev(&self) -> bool {
        self.page > 1 && self.total_pages > 0
    }
}

/// Number of pages needed for `total` records.
pub fn page_count(total: usize, page_size: usize) -> usize {
    total.div_ceil(page_size.max(1))
}

/// Sorts (stably, when asked) and slices out one page.
pub fn build_view(
    records: &[Person],
    sort: Option<SortSpec>,
    page: usize,
    page_size: usize,
) -> PageView {
    let page_size = page_size.max(1);
    let page = page.max(1);
    let total = records.len();

    let mut ordered: Vec<&Person> = records.iter().collect();
    if let Some(spec) = sort {
        ordered.sort_by(|a, b| spec.compare(a, b));
    }

    let start = (page - 1).saturating_mul(page_size);
    let rows = ordered
        .into_iter()
        .skip(start)
        .take(page_size)
        .cloned()
        .collect();

    PageView {
        rows,
        page,
        page_size,
        total,
        total_pages: page_count(total, page_size),
        sort,
    }
}
