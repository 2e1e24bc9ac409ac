//! Citizen id composition.
//!
//! Forms collect a citizen id as five positional groups (1, 4, 5, 2 and 1
//! digits, e.g. `1-2345-67890-12-3`). The core only ever stores the
//! concatenated string; these helpers convert between the two shapes at the
//! presentation boundary.

/// Lengths of the positional groups, in order.
pub const GROUP_LENGTHS: [usize; 5] = [1, 4, 5, 2, 1];

/// Joins the groups into one id. Empty groups are skipped.
///
/// Returns `None` when every group is empty.
pub fn compose<S: AsRef<str>>(parts: &[S]) -> Option<String> {
    let joined: String = parts
        .iter()
        .map(|p| p.as_ref().trim())
        .filter(|p| !p.is_empty())
        .collect();
    if joined.is_empty() {
        None
    } else {
        Some(joined)
    }
}

/// Parses the dashed form (`1-2345-67890-12-3`). A value without dashes is
/// taken as already concatenated.
pub fn parse(input: &str) -> Option<String> {
    let parts: Vec<&str> = input.split('-').collect();
    compose(&parts)
}

/// Splits a stored id back into its positional groups. Groups past the end
/// of a short id are empty.
pub fn split(id: &str) -> [String; 5] {
    let chars: Vec<char> = id.chars().collect();
    let mut groups: [String; 5] = Default::default();
    let mut start = 0;
    for (group, len) in groups.iter_mut().zip(GROUP_LENGTHS) {
        let end = (start + len).min(chars.len());
        if start < end {
            *group = chars[start..end].iter().collect();
        }
        start = end;
    }
    groups
}

/// Renders a stored id in the dashed form, dropping trailing empty groups.
pub fn format(id: &str) -> String {
    split(id)
        .iter()
        .filter(|g| !g.is_empty())
        .cloned()
        .collect::<Vec<_>>()
        .join("-")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compose_concatenates_groups() {
        let parts = ["1", "2345", "67890", "12", "3"];
        assert_eq!(compose(&parts).as_deref(), Some("1234567890123"));
    }

    #[test]
    fn test_compose_skips_empty_groups() {
        let parts = ["1", "", "67890", " ", "3"];
        assert_eq!(compose(&parts).as_deref(), Some("1678903"));
        assert_eq!(compose(&["", "", "", "", ""]), None);
    }

    #[test]
    fn test_parse_dashed_and_plain() {
        assert_eq!(parse("1-2345-67890-12-3").as_deref(), Some("1234567890123"));
        assert_eq!(parse("1234567890123").as_deref(), Some("1234567890123"));
        assert_eq!(parse(""), None);
    }

    #[test]
    fn test_split_full_id() {
        let groups = split("1234567890123");
        assert_eq!(groups, ["1", "2345", "67890", "12", "3"].map(String::from));
    }

    #[test]
    fn test_split_short_id() {
        let groups = split("123456");
        assert_eq!(groups, ["1", "2345", "6", "", ""].map(String::from));
    }

    #[test]
    fn test_format() {
        assert_eq!(format("1234567890123"), "1-2345-67890-12-3");
        assert_eq!(format("12"), "1-2");
        assert_eq!(format(""), "");
    }
}
