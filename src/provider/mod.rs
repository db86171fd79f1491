//! This modules ties a remote source and a local cache together
//!
//! It is responsible for refreshing the local cache from the remote source, and for serving month views from the local cache.

use std::error::Error;

use chrono::{Datelike, Local, NaiveDate};

use crate::calendar::{CalendarGrid, MonthView, YearMonth};
use crate::traits::{MealSource, RemoteMealSource, RemoteScheduleSource, ScheduleSource, SyncSlave};
use crate::config;

pub mod sync_progress;
use sync_progress::SyncProgress;
use sync_progress::{FeedbackSender, SyncEvent};


/// Returns the months refreshed by a full sync happening on `today`.
///
/// These are every month of the current year and of the [`SYNC_PAST_YEARS`](config::SYNC_PAST_YEARS) previous years.
/// Within a year, months are listed starting at the current month number and wrapping around to the previous ones.
pub fn sync_plan(today: NaiveDate) -> Vec<YearMonth> {
    let current_year = today.year();
    let current_month = today.month();

    let mut plan = Vec::with_capacity(12 * (config::SYNC_PAST_YEARS as usize + 1));
    for year in (current_year - config::SYNC_PAST_YEARS..=current_year).rev() {
        for offset in 0..12 {
            let month = (current_month + offset - 1) % 12 + 1;
            match YearMonth::new(year, month) {
                Ok(ym) => plan.push(ym),
                Err(err) => log::error!("Unable to plan the sync of {}-{}: {}", year, month, err),
            }
        }
    }
    plan
}


/// A data source that combines a remote source with a local cache, and is able to refresh the cache.
///
/// The remote source is usually the school nutrition API, the local one is usually a [`Cache`](crate::cache::Cache).
/// A [`MockRemote`](crate::remote::MockRemote) can stand in for the API in tests.
#[derive(Debug)]
pub struct Provider<L, R>
where
    L: MealSource + ScheduleSource + SyncSlave + Send + Sync,
    R: RemoteMealSource + RemoteScheduleSource + Send + Sync,
{
    /// The remote source (usually a server)
    remote: R,
    /// The local cache
    local: L,
    /// The school whose records are synced
    school_code: i32,
}

impl<L, R> Provider<L, R>
where
    L: MealSource + ScheduleSource + SyncSlave + Send + Sync,
    R: RemoteMealSource + RemoteScheduleSource + Send + Sync,
{
    /// Create a provider for the school configured in [`config::SCHOOL_CODE`]
    pub fn new(remote: R, local: L) -> Self {
        Self { remote, local, school_code: config::school_code() }
    }

    /// Use another school than the configured one
    pub fn with_school_code(mut self, school_code: i32) -> Self {
        self.school_code = school_code;
        self
    }

    pub fn school_code(&self) -> i32 { self.school_code }

    /// Returns the data source described as `local`
    pub fn local(&self)  -> &L { &self.local }
    /// Returns the data source described as `local`
    pub fn local_mut(&mut self)  -> &mut L { &mut self.local }
    /// Returns the data source described as `remote`.
    ///
    /// Apart from tests, there are very few (if any) reasons to access `remote` directly.
    /// Usually, you should rather use the `local` source, which is a much faster local cache.
    pub fn remote(&self) -> &R { &self.remote }

    /// Refreshes every month of the [`sync_plan`] of today, and provide feeedback to the user about the progress.
    ///
    /// It returns whether the sync was totally successful (details about errors are logged using the `log::*` macros).
    /// In case errors happened, the months that failed keep their previous local records.
    /// Simply run this function again to retry them.
    pub async fn sync_with_feedback(&mut self, feedback_sender: FeedbackSender) -> bool {
        let plan = sync_plan(Local::now().date_naive());
        self.sync_months_with_feedback(&plan, feedback_sender).await
    }

    /// Refreshes every month of the [`sync_plan`] of today, without giving any feedback.
    ///
    /// See [`Self::sync_with_feedback`]
    pub async fn sync(&mut self) -> bool {
        let plan = sync_plan(Local::now().date_naive());
        self.sync_months(&plan).await
    }

    /// Refreshes the given months (e.g. when the user explicitly asks to reload the displayed month)
    pub async fn sync_months(&mut self, months: &[YearMonth]) -> bool {
        let mut progress = SyncProgress::new();
        self.run_sync(months, &mut progress).await
    }

    /// See [`Self::sync_months`] and [`Self::sync_with_feedback`]
    pub async fn sync_months_with_feedback(&mut self, months: &[YearMonth], feedback_sender: FeedbackSender) -> bool {
        let mut progress = SyncProgress::new_with_feedback_channel(feedback_sender);
        self.run_sync(months, &mut progress).await
    }

    async fn run_sync(&mut self, months: &[YearMonth], progress: &mut SyncProgress) -> bool {
        progress.info(&format!("Starting a sync of {} months for school {}.", months.len(), self.school_code));
        progress.feedback(SyncEvent::Started);
        progress.reset_counter();

        for month in months {
            progress.feedback(SyncEvent::InProgress{
                month: *month,
                months_done_already: progress.counter(),
                details: "meals".to_string(),
            });
            if let Err(err) = self.sync_month_meals(*month, progress).await {
                progress.warn(&format!("Unable to sync meals of {}: {}, skipping this time.", month, err));
            }

            progress.feedback(SyncEvent::InProgress{
                month: *month,
                months_done_already: progress.counter(),
                details: "schedules".to_string(),
            });
            if let Err(err) = self.sync_month_schedules(*month, progress).await {
                progress.warn(&format!("Unable to sync schedules of {}: {}, skipping this time.", month, err));
            }

            progress.increment_counter(1);
        }

        if progress.is_success() {
            self.local.update_last_sync(None);
            progress.info("Sync ended");
        } else {
            progress.info(&format!("Sync ended with {} errors", progress.n_errors()));
        }
        progress.feedback(SyncEvent::Finished{ success: progress.is_success() });
        progress.is_success()
    }

    /// Replaces the local meals of a month with the remote ones.
    ///
    /// The local month is left untouched if anything fails before it is replaced.
    async fn sync_month_meals(&mut self, month: YearMonth, progress: &mut SyncProgress) -> Result<(), Box<dyn Error>> {
        let response = self.remote.fetch_meals(month).await?;
        let meals = response.response.iter()
            .map(|model| model.to_meal(self.school_code))
            .collect::<Result<Vec<_>, _>>()?;
        progress.debug(&format!("> {} remote meals for {}", meals.len(), month));

        self.local.delete_month_meals(self.school_code, month).await?;
        self.local.insert_meals(meals).await?;
        Ok(())
    }

    /// Replaces the local schedules of a month with the remote ones.
    ///
    /// The local month is left untouched if anything fails before it is replaced.
    async fn sync_month_schedules(&mut self, month: YearMonth, progress: &mut SyncProgress) -> Result<(), Box<dyn Error>> {
        let response = self.remote.fetch_schedules(month).await?;
        let schedules = response.schedules.iter()
            .map(|model| model.to_schedule(self.school_code))
            .collect::<Result<Vec<_>, _>>()?;
        progress.debug(&format!("> {} remote schedules for {}", schedules.len(), month));

        self.local.delete_month_schedules(self.school_code, month).await?;
        self.local.insert_schedules(schedules).await?;
        Ok(())
    }

    /// Builds the view of a month from the local records.
    ///
    /// Spillover days from the adjacent months also get their records.
    pub async fn month_view(&self, year: i32, month: u32) -> Result<MonthView, Box<dyn Error>> {
        let grid = CalendarGrid::build(year, month)?;

        let mut meals = Vec::new();
        let mut schedules = Vec::new();
        for ym in grid.months() {
            meals.extend(self.local.get_meals(self.school_code, ym).await?);
            schedules.extend(self.local.get_schedules(self.school_code, ym).await?);
        }
        log::debug!("Month view of {}: {} meals, {} schedules", grid.year_month(), meals.len(), schedules.len());

        Ok(MonthView::new(grid, meals, schedules))
    }
}
