// ABOUTME: Bucket label formatting for chart axes
// ABOUTME: Renders a calendar day as weekday, month-day, or month-year text
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use vitals_core::models::{CalendarDay, LabelFormat};

/// Format the label for a bucket whose last day is `day`
#[must_use]
pub fn format_label(day: CalendarDay, format: LabelFormat) -> String {
    day.format(format.pattern()).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_label_formats() {
        let day = NaiveDate::from_ymd_opt(2024, 3, 4).unwrap();
        assert_eq!(format_label(day, LabelFormat::DayOfWeek), "Mon");
        assert_eq!(format_label(day, LabelFormat::MonthDay), "Mar 4");
        assert_eq!(format_label(day, LabelFormat::MonthYear), "Mar 2024");
    }
}
