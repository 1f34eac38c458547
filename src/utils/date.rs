use chrono::{Months, NaiveDate};

pub const DATE_FMT: &str = "%Y-%m-%d";

// Calendar month addition; when the day does not exist in the target
// month the date is clamped to that month's last valid day.
pub fn plus_months(date: NaiveDate, months: u32) -> NaiveDate {
    date + Months::new(months)
}

pub mod serializer {
    use chrono::NaiveDate;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use serde::de::Error;
    use crate::utils::date::DATE_FMT;

    pub fn serialize<S: Serializer>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error> {
        date.format(DATE_FMT).to_string().serialize(serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDate, D::Error> {
        let str_date: String = Deserialize::deserialize(deserializer)?;
        NaiveDate::parse_from_str(&str_date, DATE_FMT).map_err(D::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use crate::utils::date::plus_months;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_should_add_plain_month() {
        assert_eq!(date(2026, 2, 15), plus_months(date(2026, 1, 15), 1));
    }

    #[test]
    fn test_should_clamp_to_last_day_of_shorter_month() {
        assert_eq!(date(2026, 2, 28), plus_months(date(2026, 1, 30), 1));
        assert_eq!(date(2026, 2, 28), plus_months(date(2026, 1, 31), 1));
    }

    #[test]
    fn test_should_clamp_to_leap_day() {
        assert_eq!(date(2024, 2, 29), plus_months(date(2024, 1, 31), 1));
    }

    #[test]
    fn test_should_roll_over_year() {
        assert_eq!(date(2027, 1, 15), plus_months(date(2026, 12, 15), 1));
    }
}
