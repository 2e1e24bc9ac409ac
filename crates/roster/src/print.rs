use colored::Colorize;
use rosterapp::api::{CmdMessage, MessageLevel};
use rosterapp::citizen_id;
use rosterapp::model::Person;
use rosterapp::view::{PageView, SortDirection};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const KEY_WIDTH: usize = 8;
const NAME_WIDTH: usize = 32;
const GENDER_WIDTH: usize = 8;
const PHONE_WIDTH: usize = 14;
const NATIONALITY_WIDTH: usize = 16;
const GAP: &str = "  ";

pub(crate) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
        }
    }
}

pub(crate) fn print_page(view: &PageView) {
    if view.total == 0 {
        println!("No records found.");
        return;
    }

    let header = [
        pad_to("KEY", KEY_WIDTH),
        pad_to("NAME", NAME_WIDTH),
        pad_to("GENDER", GENDER_WIDTH),
        pad_to("MOBILE", PHONE_WIDTH),
        pad_to("NATIONALITY", NATIONALITY_WIDTH),
    ]
    .join(GAP);
    println!("{}", header.trim_end().bold());

    for person in &view.rows {
        let key: String = person.key.chars().take(KEY_WIDTH).collect();
        let name = format!("{} {}", person.title, person.full_name());
        let line = [
            pad_to(&key, KEY_WIDTH).yellow().to_string(),
            pad_to(&name, NAME_WIDTH),
            pad_to(person.gender.as_str(), GENDER_WIDTH),
            pad_to(&person.mobile_phone, PHONE_WIDTH),
            pad_to(&person.nationality, NATIONALITY_WIDTH),
        ]
        .join(GAP);
        println!("{}", line.trim_end());
    }

    println!();
    println!("{}", page_footer(view).dimmed());
}

pub(crate) fn print_full_records(records: &[Person]) {
    for (i, person) in records.iter().enumerate() {
        if i > 0 {
            println!("\n================================\n");
        }
        println!(
            "{} {} {}",
            person.key.yellow(),
            person.title,
            person.full_name().bold()
        );
        println!("--------------------------------");
        print_field("Birthday", &person.birthday.format("%Y-%m-%d").to_string());
        print_field("Nationality", &person.nationality);
        let citizen = person
            .citizen_id
            .as_deref()
            .map(citizen_id::format)
            .unwrap_or_default();
        print_field("Citizen ID", &citizen);
        print_field("Gender", person.gender.as_str());
        print_field("Mobile", &person.mobile_phone);
        print_field(
            "Passport",
            person.passport_no.as_deref().unwrap_or_default(),
        );
        print_field(
            "Expected salary",
            &format!("{:.2}", person.expected_salary),
        );
    }
}

fn print_field(label: &str, value: &str) {
    println!("{} {}", pad_to(&format!("{}:", label), 17).dimmed(), value);
}

fn page_footer(view: &PageView) -> String {
    let sort = match view.sort {
        Some(spec) => {
            let direction = match spec.direction {
                SortDirection::Ascending => "asc",
                SortDirection::Descending => "desc",
            };
            format!(", sorted by {} {}", spec.field, direction)
        }
        None => String::new(),
    };
    let mut nav = Vec::new();
    if view.has_prev() {
        nav.push(format!("prev: --page {}", view.page - 1));
    }
    if view.has_next() {
        nav.push(format!("next: --page {}", view.page + 1));
    }
    let nav = if nav.is_empty() {
        String::new()
    } else {
        format!(" ({})", nav.join(", "))
    };
    format!(
        "Page {}/{} of {} records{}{}",
        view.page, view.total_pages, view.total, sort, nav
    )
}

/// Truncates to `width` columns, then pads with spaces to exactly `width`.
fn pad_to(s: &str, width: usize) -> String {
    let cell = truncate_to_width(s, width);
    let padding = width.saturating_sub(cell.width());
    format!("{}{}", cell, " ".repeat(padding))
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    let mut result = String::new();
    let mut current_width = 0;

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use rosterapp::test_utils::person_with_key;
    use rosterapp::view::{build_view, SortField, SortSpec};

    #[test]
    fn test_pad_to_counts_display_columns() {
        assert_eq!(pad_to("ab", 4), "ab  ");
        let thai = pad_to("สมชาย", 8);
        assert_eq!(thai.width(), 8);
    }

    #[test]
    fn test_truncate_marks_cut() {
        assert_eq!(truncate_to_width("abcdef", 4), "abc…");
        assert_eq!(truncate_to_width("abc", 4), "abc");
    }

    #[test]
    fn test_footer_shows_navigation_and_sort() {
        let records: Vec<Person> = (0..25)
            .map(|i| person_with_key(&i.to_string(), &format!("P{:02}", i)))
            .collect();
        let view = build_view(
            &records,
            Some(SortSpec::descending(SortField::Firstname)),
            2,
            10,
        );
        let footer = page_footer(&view);
        assert!(footer.starts_with("Page 2/3 of 25 records"));
        assert!(footer.contains("desc"));
        assert!(footer.contains("prev: --page 1"));
        assert!(footer.contains("next: --page 3"));
    }

    #[test]
    fn test_footer_single_page_has_no_navigation() {
        let records = vec![person_with_key("1", "Only")];
        let view = build_view(&records, None, 1, 10);
        assert_eq!(page_footer(&view), "Page 1/1 of 1 records");
    }
}
