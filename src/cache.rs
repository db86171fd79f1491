//! This module provides a local cache for meals and schedules

use std::collections::BTreeMap;
use std::error::Error;

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};

use crate::calendar::YearMonth;
use crate::traits::{MealSource, ScheduleSource, SyncSlave};
use crate::Meal;
use crate::Schedule;


/// A local source that keeps its records in memory
#[derive(Debug, Default, PartialEq)]
pub struct Cache {
    data: CachedData,
}

#[derive(Default, Debug, PartialEq)]
struct CachedData {
    meals: BTreeMap<(i32, NaiveDate), Meal>,
    schedules: BTreeMap<(i32, i32), Schedule>,
    last_sync: Option<DateTime<Utc>>,
}

impl Cache {
    /// Initialize an empty cache
    pub fn new() -> Self {
        Self::default()
    }

    pub fn meal_count(&self) -> usize     { self.data.meals.len()     }
    pub fn schedule_count(&self) -> usize { self.data.schedules.len() }

    /// Compares two Caches to check they have the same records
    ///
    /// This is not a complete equality test: last sync dates may differ
    pub fn has_same_contents_than(&self, other: &Self) -> bool {
        self.data.meals == other.data.meals
            && self.data.schedules == other.data.schedules
    }
}

#[async_trait]
impl MealSource for Cache {
    async fn get_meals(&self, school_code: i32, month: YearMonth) -> Result<Vec<Meal>, Box<dyn Error>> {
        Ok(self.data.meals.values()
            .filter(|meal| meal.school_code() == school_code && month.contains(meal.date()))
            .cloned()
            .collect()
        )
    }

    async fn insert_meals(&mut self, meals: Vec<Meal>) -> Result<(), Box<dyn Error>> {
        for meal in meals {
            self.data.meals.insert((meal.school_code(), meal.date()), meal);
        }
        Ok(())
    }

    async fn delete_meals(&mut self, meals: &[Meal]) -> Result<(), Box<dyn Error>> {
        for meal in meals {
            let key = (meal.school_code(), meal.date());
            if self.data.meals.get(&key) == Some(meal) {
                self.data.meals.remove(&key);
            }
        }
        Ok(())
    }

    async fn delete_month_meals(&mut self, school_code: i32, month: YearMonth) -> Result<(), Box<dyn Error>> {
        self.data.meals.retain(|(code, date), _| !(*code == school_code && month.contains(*date)));
        Ok(())
    }

    async fn clear_meals(&mut self) -> Result<(), Box<dyn Error>> {
        self.data.meals.clear();
        Ok(())
    }
}

#[async_trait]
impl ScheduleSource for Cache {
    async fn get_schedules(&self, school_code: i32, month: YearMonth) -> Result<Vec<Schedule>, Box<dyn Error>> {
        let mut schedules: Vec<Schedule> = self.data.schedules.values()
            .filter(|s| s.school_code() == school_code && month.contains(s.date()))
            .cloned()
            .collect();
        schedules.sort_by_key(|s| (s.date(), s.id()));
        Ok(schedules)
    }

    async fn insert_schedules(&mut self, schedules: Vec<Schedule>) -> Result<(), Box<dyn Error>> {
        for schedule in schedules {
            self.data.schedules.insert((schedule.school_code(), schedule.id()), schedule);
        }
        Ok(())
    }

    async fn delete_schedules(&mut self, schedules: &[Schedule]) -> Result<(), Box<dyn Error>> {
        for schedule in schedules {
            let key = (schedule.school_code(), schedule.id());
            if self.data.schedules.get(&key) == Some(schedule) {
                self.data.schedules.remove(&key);
            }
        }
        Ok(())
    }

    async fn delete_month_schedules(&mut self, school_code: i32, month: YearMonth) -> Result<(), Box<dyn Error>> {
        self.data.schedules.retain(|_, s| !(s.school_code() == school_code && month.contains(s.date())));
        Ok(())
    }

    async fn clear_schedules(&mut self) -> Result<(), Box<dyn Error>> {
        self.data.schedules.clear();
        Ok(())
    }
}

impl SyncSlave for Cache {
    fn get_last_sync(&self) -> Option<DateTime<Utc>> {
        self.data.last_sync
    }

    fn update_last_sync(&mut self, timepoint: Option<DateTime<Utc>>) {
        self.data.last_sync = Some(timepoint.unwrap_or_else(|| Utc::now()));
    }
}
