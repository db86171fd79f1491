//! A month grid whose cells carry the meals and schedules of their date

use chrono::NaiveDate;

use crate::Meal;
use crate::Schedule;
use super::{CalendarError, CalendarGrid};

/// A cell of a [`MonthView`]
#[derive(Clone, Debug, PartialEq)]
pub struct DayCell {
    date: NaiveDate,
    in_month: bool,
    meal: Option<Meal>,
    schedules: Vec<Schedule>,
}

impl DayCell {
    pub fn date(&self) -> NaiveDate         { self.date       }
    pub fn meal(&self) -> Option<&Meal>     { self.meal.as_ref() }
    pub fn schedules(&self) -> &[Schedule]  { &self.schedules }

    /// Whether this date belongs to the displayed month (and is not a spillover day from an adjacent month)
    pub fn is_in_month(&self) -> bool {
        self.in_month
    }

    pub fn is_empty(&self) -> bool {
        self.meal.is_none() && self.schedules.is_empty()
    }
}

/// What a calendar screen displays for a month: every cell of its [`CalendarGrid`], along with the records of that day
#[derive(Clone, Debug, PartialEq)]
pub struct MonthView {
    grid: CalendarGrid,
    cells: Vec<DayCell>,
}

impl MonthView {
    /// Attach meals and schedules to the cells of a grid.
    ///
    /// Records that are dated outside of the grid are ignored.
    /// In case several meals share the same date, the last one wins.
    pub fn new(grid: CalendarGrid, meals: Vec<Meal>, schedules: Vec<Schedule>) -> Self {
        let mut cells: Vec<DayCell> = grid.dates().iter()
            .map(|date| DayCell {
                date: *date,
                in_month: grid.is_in_month(*date),
                meal: None,
                schedules: Vec::new(),
            })
            .collect();

        for meal in meals {
            match grid.position(meal.date()) {
                None => log::trace!("Ignoring meal of {}, which is not displayed in {}", meal.date(), grid.year_month()),
                Some((week, day)) => {
                    let index = cell_index(week, day);
                    cells[index].meal = Some(meal);
                },
            }
        }
        for schedule in schedules {
            match grid.position(schedule.date()) {
                None => log::trace!("Ignoring schedule {} of {}, which is not displayed in {}", schedule.id(), schedule.date(), grid.year_month()),
                Some((week, day)) => {
                    let index = cell_index(week, day);
                    cells[index].schedules.push(schedule);
                },
            }
        }

        Self { grid, cells }
    }

    pub fn grid(&self) -> &CalendarGrid { &self.grid  }
    pub fn cells(&self) -> &[DayCell]   { &self.cells }

    /// Returns a cell, using the same 1-indexed `(week, day)` convention as [`CalendarGrid::get`]
    pub fn cell(&self, week: i32, day: i32) -> Result<&DayCell, CalendarError> {
        let index = self.grid.flat_index(week, day)?;
        Ok(&self.cells[index])
    }

    /// Returns the cell of a given date, if it is displayed
    pub fn cell_for(&self, date: NaiveDate) -> Option<&DayCell> {
        let (week, day) = self.grid.position(date)?;
        self.cells.get(cell_index(week, day))
    }

    /// Iterates over the rows of the view, from Sunday to Saturday
    pub fn weeks(&self) -> impl Iterator<Item = &[DayCell]> {
        self.cells.chunks(7)
    }

    /// The displayed dates that have at least one schedule
    pub fn schedule_dates(&self) -> Vec<NaiveDate> {
        self.cells.iter()
            .filter(|cell| cell.schedules.is_empty() == false)
            .map(|cell| cell.date)
            .collect()
    }
}

fn cell_index(week: i32, day: i32) -> usize {
    ((week - 1) * 7 + (day - 1)) as usize
}


#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn meal(date: NaiveDate) -> Meal {
        Meal::new(7010578, date, Vec::new(), Vec::new(), Vec::new())
    }

    fn schedule(id: i32, date: NaiveDate) -> Schedule {
        Schedule::new(7010578, id, date, format!("event {}", id), String::new())
    }

    #[test]
    fn records_land_in_their_cells() {
        let grid = CalendarGrid::build(2023, 2).unwrap();
        let view = MonthView::new(
            grid,
            vec![meal(ymd(2023, 2, 1)), meal(ymd(2023, 1, 30)), meal(ymd(2023, 5, 1))],
            vec![schedule(1, ymd(2023, 2, 1)), schedule(2, ymd(2023, 2, 1)), schedule(3, ymd(2023, 3, 4))],
        );

        // 2023-02-01 is a Wednesday of the first week
        let cell = view.cell(1, 4).unwrap();
        assert_eq!(cell.date(), ymd(2023, 2, 1));
        assert!(cell.is_in_month());
        assert!(cell.meal().is_some());
        assert_eq!(cell.schedules().len(), 2);

        let spillover = view.cell(1, 2).unwrap();
        assert_eq!(spillover.date(), ymd(2023, 1, 30));
        assert!(spillover.is_in_month() == false);
        assert!(spillover.meal().is_some());

        assert_eq!(view.cell(5, 7).unwrap().schedules()[0].id(), 3);
        assert!(view.cell(3, 3).unwrap().is_empty());
        assert_eq!(view.schedule_dates(), vec![ymd(2023, 2, 1), ymd(2023, 3, 4)]);
    }

    #[test]
    fn cells_follow_grid_bounds() {
        let view = MonthView::new(CalendarGrid::build(2023, 2).unwrap(), Vec::new(), Vec::new());
        assert_eq!(view.cells().len(), 35);
        assert_eq!(view.weeks().count(), 5);
        assert_eq!(view.cell(6, 1), Err(CalendarError::OutOfRange { week: 6, day: 1 }));
        assert!(view.cell_for(ymd(2023, 3, 5)).is_none());
        assert_eq!(view.cell_for(ymd(2023, 2, 14)).unwrap().date(), ymd(2023, 2, 14));
    }
}
