//! Month-level date arithmetic: the displayed grid of a month, and the records attached to its cells

pub mod grid;
pub mod month_view;

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};
use chrono::{Datelike, Months, NaiveDate};

pub use grid::CalendarGrid;
pub use month_view::{DayCell, MonthView};


/// Errors returned when building or indexing calendar grids
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum CalendarError {
    /// `(year, month)` is not a month that can be represented
    #[error("invalid month: {year}-{month}")]
    InvalidMonth { year: i32, month: u32 },
    /// A `(week, day)` cell lies outside of the grid
    #[error("week and day should point inside the grid, but got week {week}, day {day}")]
    OutOfRange { week: i32, day: i32 },
}


/// A calendar month of a given year
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct YearMonth {
    year: i32,
    month: u32,
}

impl YearMonth {
    /// Returns an error in case `month` is not in `1..=12`
    pub fn new(year: i32, month: u32) -> Result<Self, CalendarError> {
        if (1..=12).contains(&month) == false {
            return Err(CalendarError::InvalidMonth { year, month });
        }
        Ok(Self { year, month })
    }

    pub fn from_date(date: NaiveDate) -> Self {
        Self { year: date.year(), month: date.month() }
    }

    pub fn year(&self) -> i32  { self.year  }
    pub fn month(&self) -> u32 { self.month }

    /// The first day of this month, or `None` if `chrono` cannot represent it
    pub fn first_day(&self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month, 1)
    }

    /// The last day of this month, i.e. the day before the first day of the next month
    pub fn last_day(&self) -> Option<NaiveDate> {
        self.first_day()?
            .checked_add_months(Months::new(1))?
            .pred_opt()
    }

    pub fn next(&self) -> Self {
        match self.month {
            12 => Self { year: self.year + 1, month: 1 },
            m => Self { year: self.year, month: m + 1 },
        }
    }

    pub fn prev(&self) -> Self {
        match self.month {
            1 => Self { year: self.year - 1, month: 12 },
            m => Self { year: self.year, month: m - 1 },
        }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year && date.month() == self.month
    }
}

impl Display for YearMonth {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn year_month_bounds() {
        assert!(YearMonth::new(2022, 1).is_ok());
        assert!(YearMonth::new(2022, 12).is_ok());
        assert_eq!(YearMonth::new(2022, 13), Err(CalendarError::InvalidMonth { year: 2022, month: 13 }));
        assert_eq!(YearMonth::new(2022, 0), Err(CalendarError::InvalidMonth { year: 2022, month: 0 }));
    }

    #[test]
    fn year_month_navigation() {
        let dec = YearMonth::new(2022, 12).unwrap();
        assert_eq!(dec.next(), YearMonth::new(2023, 1).unwrap());
        assert_eq!(dec.next().prev(), dec);
        assert_eq!(YearMonth::new(2023, 1).unwrap().prev(), dec);
        assert!(dec < dec.next());
    }

    #[test]
    fn year_month_days() {
        let feb = YearMonth::new(2024, 2).unwrap();
        assert_eq!(feb.first_day(), NaiveDate::from_ymd_opt(2024, 2, 1));
        assert_eq!(feb.last_day(), NaiveDate::from_ymd_opt(2024, 2, 29));
        assert!(feb.contains(NaiveDate::from_ymd_opt(2024, 2, 29).unwrap()));
        assert!(feb.contains(NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()) == false);
        assert_eq!(feb.to_string(), "2024-02");
    }

    #[test]
    fn error_messages() {
        assert_eq!(CalendarError::InvalidMonth { year: 2023, month: 13 }.to_string(), "invalid month: 2023-13");
        assert_eq!(
            CalendarError::OutOfRange { week: 6, day: 1 }.to_string(),
            "week and day should point inside the grid, but got week 6, day 1"
        );
    }
}
