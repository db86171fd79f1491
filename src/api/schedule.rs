use std::error::Error;

use serde::{Deserialize, Serialize};
use chrono::{Duration, TimeZone, Utc};

use super::ApiError;
use crate::schedule::Schedule;

/// Schedule timestamps are midnight in Korea Standard Time, sent as UTC milliseconds
pub const KST_OFFSET_HOURS: i64 = 9;

/// The body returned when asking for the schedules of a month
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ScheduleResponse {
    #[serde(default)]
    pub schedules: Vec<ScheduleModel>,
}

impl ScheduleResponse {
    pub fn from_json(body: &str) -> Result<Self, Box<dyn Error>> {
        Ok(serde_json::from_str(body)?)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ScheduleModel {
    pub id: i32,
    /// Milliseconds since the Unix epoch
    pub date: i64,
    pub title: String,
    #[serde(default)]
    pub contents: String,
}

impl ScheduleModel {
    /// Convert into a [`Schedule`] of a given school
    pub fn to_schedule(&self, school_code: i32) -> Result<Schedule, ApiError> {
        let timestamp = Utc.timestamp_millis_opt(self.date)
            .single()
            .ok_or(ApiError::InvalidTimestamp(self.date))?;
        let local = timestamp.checked_add_signed(Duration::hours(KST_OFFSET_HOURS))
            .ok_or(ApiError::InvalidTimestamp(self.date))?;

        Ok(Schedule::new(
            school_code,
            self.id,
            local.date_naive(),
            self.title.clone(),
            self.contents.clone(),
        ))
    }
}
