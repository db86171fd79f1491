//! This crate provides the calendar of a school: its meals and its academic schedule, laid out as month grids.
//!
//! The [`calendar`] module computes which dates a month view displays ([`CalendarGrid`](calendar::CalendarGrid)),
//! and attaches records to each cell ([`MonthView`](calendar::MonthView)).
//!
//! Records come from a remote nutrition/schedule API, whose JSON bodies are described in the [`api`] module. \
//! Because the API may be slow or unreachable, a user-friendly app displays cached records instead, from the [`cache`] module. \
//! A [`Provider`](provider::Provider) ties these two sources together, refreshes the cache from the remote source,
//! and serves month views from the cache.

pub mod traits;

pub mod calendar;
mod meal;
pub use meal::{Meal, Menu, Nutrient, Origin};
mod schedule;
pub use schedule::Schedule;
pub mod provider;
pub use provider::Provider;

pub mod api;
pub mod cache;
pub mod remote;
pub mod mock_behaviour;

pub mod config;
pub mod utils;
