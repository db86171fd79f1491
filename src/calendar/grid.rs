//! The dates shown by a month view, laid out as full Sunday-to-Saturday weeks

use chrono::{Datelike, Days, NaiveDate, Weekday};

use super::{CalendarError, YearMonth};

/// A grid always has at least 5 rows
const MIN_WEEKS: i64 = 5;

/// The dates to display for one month.
///
/// The grid always starts on a Sunday and ends on a Saturday, and contains 5 or 6 full weeks.
/// Days of the previous and the next month are included to complete the first and last weeks.
/// A month that fits in exactly 4 weeks gets an extra trailing week from the next month.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CalendarGrid {
    year_month: YearMonth,
    dates: Vec<NaiveDate>,
}

impl CalendarGrid {
    /// Compute the grid of a given month.
    ///
    /// Returns [`CalendarError::InvalidMonth`] if `(year, month)` is not a real month
    /// (or if the grid would reach dates that `chrono` cannot represent).
    pub fn build(year: i32, month: u32) -> Result<Self, CalendarError> {
        let invalid = || CalendarError::InvalidMonth { year, month };
        let year_month = YearMonth::new(year, month)?;

        let mut start = year_month.first_day().ok_or_else(invalid)?;
        while start.weekday() != Weekday::Sun {
            start = start.pred_opt().ok_or_else(invalid)?;
        }

        let mut end = year_month.last_day().ok_or_else(invalid)?;
        while end.weekday() != Weekday::Sat {
            end = end.succ_opt().ok_or_else(invalid)?;
        }
        // A non-leap February starting on a Sunday only spans 4 weeks
        if (end - start).num_days() + 1 < MIN_WEEKS * 7 {
            end = end.checked_add_days(Days::new(7)).ok_or_else(invalid)?;
        }

        let mut dates = Vec::with_capacity(42);
        let mut current = start;
        loop {
            dates.push(current);
            if current == end {
                break;
            }
            current = current.succ_opt().ok_or_else(invalid)?;
        }

        log::trace!("Built a {}-week grid for {} ({} to {})", dates.len() / 7, year_month, start, end);
        Ok(Self { year_month, dates })
    }

    /// Returns the date of a grid cell.
    ///
    /// Both parameters are **1-indexed**: `week` 1 is the first row, `day` 1 is Sunday and 7 is Saturday.
    /// Only the resulting position in the grid is checked, so `week` 6 fails for 5-week months.
    pub fn get(&self, week: i32, day: i32) -> Result<NaiveDate, CalendarError> {
        self.flat_index(week, day).map(|index| self.dates[index])
    }

    /// Converts a 1-indexed `(week, day)` cell into a position in [`Self::dates`]
    pub(crate) fn flat_index(&self, week: i32, day: i32) -> Result<usize, CalendarError> {
        let index = (i64::from(week) - 1) * 7 + (i64::from(day) - 1);
        if index < 0 || index >= self.dates.len() as i64 {
            return Err(CalendarError::OutOfRange { week, day });
        }
        Ok(index as usize)
    }

    /// Returns the 1-indexed `(week, day)` cell that holds `date`, if it is displayed in this grid
    pub fn position(&self, date: NaiveDate) -> Option<(i32, i32)> {
        let index = self.dates.binary_search(&date).ok()?;
        Some(((index / 7) as i32 + 1, (index % 7) as i32 + 1))
    }

    /// The number of weeks (rows) in this grid, either 5 or 6
    pub fn week_count(&self) -> usize {
        self.dates.len() / 7
    }

    pub fn len(&self) -> usize              { self.dates.len() }
    pub fn is_empty(&self) -> bool          { self.dates.is_empty() }
    pub fn dates(&self) -> &[NaiveDate]     { &self.dates }
    pub fn year_month(&self) -> YearMonth   { self.year_month }

    /// The first displayed date, always a Sunday
    pub fn first(&self) -> NaiveDate {
        self.dates[0]
    }

    /// The last displayed date, always a Saturday
    pub fn last(&self) -> NaiveDate {
        self.dates[self.dates.len() - 1]
    }

    /// Iterates over the rows of the grid, from Sunday to Saturday
    pub fn weeks(&self) -> impl Iterator<Item = &[NaiveDate]> {
        self.dates.chunks(7)
    }

    /// Whether `date` belongs to the month this grid was built for (i.e. it is not a spillover day)
    pub fn is_in_month(&self, date: NaiveDate) -> bool {
        self.year_month.contains(date)
    }

    /// The distinct months that have at least one date in this grid, in chronological order
    pub fn months(&self) -> Vec<YearMonth> {
        let mut months: Vec<YearMonth> = Vec::with_capacity(3);
        for date in &self.dates {
            let ym = YearMonth::from_date(*date);
            if months.last() != Some(&ym) {
                months.push(ym);
            }
        }
        months
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn february_2023_has_five_weeks() {
        let grid = CalendarGrid::build(2023, 2).unwrap();
        assert_eq!(grid.len(), 35);
        assert_eq!(grid.week_count(), 5);
        assert_eq!(grid.first(), ymd(2023, 1, 29));
        assert_eq!(grid.last(), ymd(2023, 3, 4));
        assert_eq!(grid.get(1, 1).unwrap(), ymd(2023, 1, 29));
        assert_eq!(grid.get(5, 7).unwrap(), ymd(2023, 3, 4));
        assert_eq!(grid.get(6, 1), Err(CalendarError::OutOfRange { week: 6, day: 1 }));
    }

    #[test]
    fn october_2022_has_six_weeks() {
        let grid = CalendarGrid::build(2022, 10).unwrap();
        assert_eq!(grid.len(), 42);
        assert_eq!(grid.first(), ymd(2022, 9, 25));
        assert_eq!(grid.last(), ymd(2022, 11, 5));
        assert_eq!(grid.get(1, 1).unwrap(), ymd(2022, 9, 25));
        assert_eq!(grid.get(6, 7).unwrap(), ymd(2022, 11, 5));
    }

    #[test]
    fn month_starting_on_sunday_has_no_leading_spillover() {
        // 2023-01-01 is a Sunday
        let grid = CalendarGrid::build(2023, 1).unwrap();
        assert_eq!(grid.first(), ymd(2023, 1, 1));
        assert_eq!(grid.last(), ymd(2023, 2, 4));
    }

    #[test]
    fn four_week_february_gets_a_trailing_week() {
        // 2015-02-01 is a Sunday and 2015-02-28 a Saturday
        let grid = CalendarGrid::build(2015, 2).unwrap();
        assert_eq!(grid.first(), ymd(2015, 2, 1));
        assert_eq!(grid.last(), ymd(2015, 3, 7));
        assert_eq!(grid.len(), 35);
        assert_eq!(grid.get(4, 7).unwrap(), ymd(2015, 2, 28));
        assert_eq!(grid.get(5, 1).unwrap(), ymd(2015, 3, 1));
    }

    #[test]
    fn invalid_months() {
        assert_eq!(CalendarGrid::build(2023, 13), Err(CalendarError::InvalidMonth { year: 2023, month: 13 }));
        assert_eq!(CalendarGrid::build(2023, 0), Err(CalendarError::InvalidMonth { year: 2023, month: 0 }));
    }

    #[test]
    fn unrepresentable_year() {
        assert!(matches!(CalendarGrid::build(i32::MAX, 1), Err(CalendarError::InvalidMonth { .. })));
    }

    #[test]
    fn non_positive_indices() {
        let grid = CalendarGrid::build(2023, 2).unwrap();
        assert_eq!(grid.get(0, 1), Err(CalendarError::OutOfRange { week: 0, day: 1 }));
        assert_eq!(grid.get(1, 0), Err(CalendarError::OutOfRange { week: 1, day: 0 }));
        assert_eq!(grid.get(i32::MIN, i32::MIN), Err(CalendarError::OutOfRange { week: i32::MIN, day: i32::MIN }));
    }

    #[test]
    fn only_the_flat_index_is_checked() {
        let grid = CalendarGrid::build(2023, 2).unwrap();
        assert_eq!(grid.get(1, 8).unwrap(), grid.get(2, 1).unwrap());
    }

    #[test]
    fn position_is_the_inverse_of_get() {
        let grid = CalendarGrid::build(2022, 10).unwrap();
        assert_eq!(grid.position(ymd(2022, 9, 25)), Some((1, 1)));
        assert_eq!(grid.position(ymd(2022, 10, 31)), Some((6, 2)));
        assert_eq!(grid.position(ymd(2022, 11, 6)), None);
    }

    #[test]
    fn months_touched() {
        let grid = CalendarGrid::build(2023, 2).unwrap();
        let months: Vec<String> = grid.months().iter().map(|ym| ym.to_string()).collect();
        assert_eq!(months, vec!["2023-01", "2023-02", "2023-03"]);
        assert!(grid.is_in_month(ymd(2023, 2, 14)));
        assert!(grid.is_in_month(ymd(2023, 1, 31)) == false);
    }
}
