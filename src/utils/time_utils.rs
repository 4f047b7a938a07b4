use chrono::{NaiveDate, NaiveDateTime};

pub struct TimeUtils;

impl TimeUtils {
    pub const STANDARD_TIME_FORMAT: &str = "%Y-%m-%d";

    /// Layouts the service is known to emit for dates
    const DATETIME_FORMATS: [&str; 2] = ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"];

    /// Parse a service date string into a calendar date.
    ///
    /// Historical dates arrive as timestamps ("2024-01-03 00:00:00"), forecast
    /// dates as plain dates ("2024-01-04").
    pub fn parse_service_date(raw: &str) -> Option<NaiveDate> {
        let raw = raw.trim();
        if let Ok(date) = NaiveDate::parse_from_str(raw, Self::STANDARD_TIME_FORMAT) {
            return Some(date);
        }
        Self::DATETIME_FORMATS
            .iter()
            .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
            .map(|dt| dt.date())
    }

    /// Axis/tooltip label: the calendar date when parseable, the raw text otherwise.
    pub fn short_date_label(raw: &str) -> String {
        Self::parse_service_date(raw)
            .map(|d| d.format(Self::STANDARD_TIME_FORMAT).to_string())
            .unwrap_or_else(|| raw.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timestamps_are_shortened_to_dates() {
        assert_eq!(TimeUtils::short_date_label("2024-01-03 00:00:00"), "2024-01-03");
        assert_eq!(TimeUtils::short_date_label("2024-01-03T00:00:00"), "2024-01-03");
        assert_eq!(TimeUtils::short_date_label("2024-01-04"), "2024-01-04");
    }

    #[test]
    fn unknown_layouts_pass_through() {
        assert_eq!(TimeUtils::short_date_label("03/01/2024"), "03/01/2024");
        assert_eq!(TimeUtils::parse_service_date("tomorrow"), None);
    }
}
