//! The JSON records served by the remote nutrition/schedule API, and their conversion into domain types
//!
//! Only the shape of the bodies is described here. Fetching them is up to a [`RemoteMealSource`](crate::traits::RemoteMealSource)
//! or a [`RemoteScheduleSource`](crate::traits::RemoteScheduleSource).

mod meal;
mod schedule;

pub use meal::{MealModel, MealResponse, MenuModel, NutrientModel, OriginModel};
pub use schedule::{ScheduleModel, ScheduleResponse, KST_OFFSET_HOURS};


/// Errors that happen when a remote record cannot be turned into a domain type
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum ApiError {
    /// A `ymd` field that is not a valid `YYYYMMDD` date
    #[error("invalid date: {0:?}")]
    InvalidDate(String),
    /// A nutrient amount that is not a number
    #[error("invalid amount for nutrient {nutrient}: {amount:?}")]
    InvalidAmount { nutrient: String, amount: String },
    /// A timestamp (in milliseconds) that does not fit in a date
    #[error("invalid timestamp: {0}")]
    InvalidTimestamp(i64),
}
