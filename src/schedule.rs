//! Academic schedule events

use serde::{Deserialize, Serialize};
use chrono::NaiveDate;

/// An event of the academic calendar of a school (exams, holidays, field trips...)
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Schedule {
    school_code: i32,
    /// Identifier given by the remote API. It is unique for a given school
    id: i32,
    date: NaiveDate,
    event_name: String,
    event_content: String,
}

impl Schedule {
    pub fn new(school_code: i32, id: i32, date: NaiveDate, event_name: String, event_content: String) -> Self {
        Self { school_code, id, date, event_name, event_content }
    }

    pub fn school_code(&self) -> i32    { self.school_code    }
    pub fn id(&self) -> i32             { self.id             }
    pub fn date(&self) -> NaiveDate     { self.date           }
    pub fn event_name(&self) -> &str    { &self.event_name    }
    pub fn event_content(&self) -> &str { &self.event_content }
}
