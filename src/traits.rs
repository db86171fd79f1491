//! The seams between the calendar and the places its records come from
use std::error::Error;

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::api::{MealResponse, ScheduleResponse};
use crate::calendar::YearMonth;
use crate::Meal;
use crate::Schedule;

/// A local store of meals
#[async_trait]
pub trait MealSource {
    /// Returns the meals of a school for a given month, sorted by date
    async fn get_meals(&self, school_code: i32, month: YearMonth) -> Result<Vec<Meal>, Box<dyn Error>>;
    /// Add meals. A meal replaces any existing meal of the same school and date
    async fn insert_meals(&mut self, meals: Vec<Meal>) -> Result<(), Box<dyn Error>>;
    /// Remove the given meals. Meals that are not stored are ignored
    async fn delete_meals(&mut self, meals: &[Meal]) -> Result<(), Box<dyn Error>>;
    /// Remove every meal of a school for a given month
    async fn delete_month_meals(&mut self, school_code: i32, month: YearMonth) -> Result<(), Box<dyn Error>>;
    async fn clear_meals(&mut self) -> Result<(), Box<dyn Error>>;
}

/// A local store of schedules
#[async_trait]
pub trait ScheduleSource {
    /// Returns the schedules of a school for a given month, sorted by date
    async fn get_schedules(&self, school_code: i32, month: YearMonth) -> Result<Vec<Schedule>, Box<dyn Error>>;
    /// Add schedules. A schedule replaces any existing schedule of the same school and ID
    async fn insert_schedules(&mut self, schedules: Vec<Schedule>) -> Result<(), Box<dyn Error>>;
    /// Remove the given schedules. Schedules that are not stored are ignored
    async fn delete_schedules(&mut self, schedules: &[Schedule]) -> Result<(), Box<dyn Error>>;
    /// Remove every schedule of a school for a given month
    async fn delete_month_schedules(&mut self, school_code: i32, month: YearMonth) -> Result<(), Box<dyn Error>>;
    async fn clear_schedules(&mut self) -> Result<(), Box<dyn Error>>;
}

/// A remote source of meals (usually the nutrition API)
#[async_trait]
pub trait RemoteMealSource {
    /// Fetch the meals of a month.
    /// This may be a long process, and it can fail.
    async fn fetch_meals(&self, month: YearMonth) -> Result<MealResponse, Box<dyn Error>>;
}

/// A remote source of academic schedules
#[async_trait]
pub trait RemoteScheduleSource {
    /// Fetch the schedules of a month.
    /// This may be a long process, and it can fail.
    async fn fetch_schedules(&self, month: YearMonth) -> Result<ScheduleResponse, Box<dyn Error>>;
}

pub trait SyncSlave {
    /// Returns the last time this source successfully synced from a master source (e.g. from a server)
    /// (or None in case it has never been synchronized)
    fn get_last_sync(&self) -> Option<DateTime<Utc>>;
    /// Update the last sync timestamp to now, or to a custom time in case `timepoint` is `Some`
    fn update_last_sync(&mut self, timepoint: Option<DateTime<Utc>>);
}
