use chrono::{Datelike, NaiveDate};

/// Get current date in YYYY-MM-DD format.
pub fn current_date() -> String {
    use js_sys::Date;
    let now = Date::new_0();
    let year = now.get_full_year();
    let month = now.get_month() + 1; // JavaScript months are 0-indexed
    let day = now.get_date();

    format!("{:04}-{:02}-{:02}", year as u32, month as u32, day as u32)
}

/// The (month, year) a YYYY-MM-DD date string falls in, or `None` when it
/// does not parse as a calendar date.
pub fn month_and_year(date_str: &str) -> Option<(u32, i32)> {
    let date = NaiveDate::parse_from_str(date_str, "%Y-%m-%d").ok()?;
    Some((date.month(), date.year()))
}

pub fn month_name(month: u32) -> &'static str {
    match month {
        1 => "January",
        2 => "February",
        3 => "March",
        4 => "April",
        5 => "May",
        6 => "June",
        7 => "July",
        8 => "August",
        9 => "September",
        10 => "October",
        11 => "November",
        12 => "December",
        _ => "January",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn month_and_year_parses_iso_dates() {
        assert_eq!(month_and_year("2025-03-09"), Some((3, 2025)));
        assert_eq!(month_and_year("1999-12-31"), Some((12, 1999)));
    }

    #[test]
    fn month_and_year_rejects_garbage() {
        assert_eq!(month_and_year(""), None);
        assert_eq!(month_and_year("03/09/2025"), None);
        assert_eq!(month_and_year("2025-13-01"), None);
    }

    #[test]
    fn month_names() {
        assert_eq!(month_name(1), "January");
        assert_eq!(month_name(12), "December");
    }
}
