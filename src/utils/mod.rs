//! Some utility functions

use chrono::Datelike;

use crate::calendar::MonthView;
use crate::Meal;

/// Weekday headers of a grid row, from Sunday to Saturday
pub const WEEKDAY_HEADERS: [&str; 7] = ["일", "월", "화", "수", "목", "금", "토"];

/// A debug utility that pretty-prints a month view as a table
pub fn print_month_view(view: &MonthView) {
    println!("{}", view.grid().year_month());
    println!("{}", WEEKDAY_HEADERS.join("    "));
    for week in view.weeks() {
        let row: Vec<String> = week.iter()
            .map(|cell| {
                let marker = match (cell.meal().is_some(), cell.schedules().is_empty() == false) {
                    (true, true) => "*",
                    (true, false) => "m",
                    (false, true) => "s",
                    (false, false) => " ",
                };
                if cell.is_in_month() {
                    format!("{:>2}{}", cell.date().day(), marker)
                } else {
                    format!("({:>2})", cell.date().day())
                }
            })
            .collect();
        println!("{}", row.join("  "));
    }

    for cell in view.cells().iter().filter(|cell| cell.is_in_month()) {
        if let Some(meal) = cell.meal() {
            print_meal(meal);
        }
        for schedule in cell.schedules() {
            println!("    {} [{}] {}", schedule.date(), schedule.event_name(), schedule.event_content());
        }
    }
}

/// A debug utility that pretty-prints a meal
pub fn print_meal(meal: &Meal) {
    let menus: Vec<&str> = meal.menus().iter().map(|menu| menu.name()).collect();
    println!("    {} {} ({} kcal)", meal.date(), menus.join(", "), meal.calorie());
}
