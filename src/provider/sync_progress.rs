//! Utilities to track the progression of a sync

use std::fmt::{Display, Error, Formatter};

use crate::calendar::YearMonth;

/// An event that happens during a sync
#[derive(Clone, Debug, PartialEq)]
pub enum SyncEvent {
    /// Sync has not started
    NotStarted,
    /// Sync has just started but no month is handled yet
    Started,
    /// Sync is in progress.
    InProgress{ month: YearMonth, months_done_already: usize, details: String},
    /// Sync is finished
    Finished{ success: bool },
}

impl Display for SyncEvent {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), Error> {
        match self {
            SyncEvent::NotStarted => write!(f, "Not started"),
            SyncEvent::Started => write!(f, "Sync has started..."),
            SyncEvent::InProgress{month, months_done_already, details} => write!(f, "[{}] {} ({} months done already)...", month, details, months_done_already),
            SyncEvent::Finished{success} => match success {
                true => write!(f, "Sync successfully finished"),
                false => write!(f, "Sync finished with errors"),
            }
        }
    }
}

impl Default for SyncEvent {
    fn default() -> Self {
        Self::NotStarted
    }
}



/// See [`feedback_channel`]
pub type FeedbackSender = tokio::sync::watch::Sender<SyncEvent>;
/// See [`feedback_channel`]
pub type FeedbackReceiver = tokio::sync::watch::Receiver<SyncEvent>;

/// Create a feeback channel, that can be used to retrieve the current progress of a sync operation
pub fn feedback_channel() -> (FeedbackSender, FeedbackReceiver) {
    tokio::sync::watch::channel(SyncEvent::default())
}




/// A structure that tracks the progression and the errors that happen during a sync
pub struct SyncProgress {
    n_errors: u32,
    feedback_channel: Option<FeedbackSender>,
    counter: usize,
}
impl SyncProgress {
    pub fn new() -> Self {
        Self { n_errors: 0, feedback_channel: None, counter: 0 }
    }
    pub fn new_with_feedback_channel(channel: FeedbackSender) -> Self {
        Self { n_errors: 0, feedback_channel: Some(channel), counter: 0 }
    }

    /// Reset the user-info counter
    pub fn reset_counter(&mut self) {
        self.counter = 0;
    }
    /// Increments the user-info counter.
    pub fn increment_counter(&mut self, increment: usize) {
        self.counter += increment;
    }
    /// Retrieves the current user-info counter.
    /// This counts "arbitrary things", that's provided as a convenience but it is not used internally
    /// (e.g. that can be used to keep track of the months handled for the current sync)
    pub fn counter(&self) -> usize {
        self.counter
    }

    pub fn is_success(&self) -> bool {
        self.n_errors == 0
    }
    pub fn n_errors(&self) -> u32 {
        self.n_errors
    }

    /// Log an error
    pub fn error(&mut self, text: &str) {
        log::error!("{}", text);
        self.n_errors += 1;
    }
    /// Log a warning
    pub fn warn(&mut self, text: &str) {
        log::warn!("{}", text);
        self.n_errors += 1;
    }
    /// Log an info
    pub fn info(&mut self, text: &str) {
        log::info!("{}", text);
    }
    /// Log a debug message
    pub fn debug(&mut self, text: &str) {
        log::debug!("{}", text);
    }
    /// Log a trace message
    pub fn trace(&mut self, text: &str) {
        log::trace!("{}", text);
    }
    /// Send an event as a feedback to the listener (if any).
    pub fn feedback(&mut self, event: SyncEvent) {
        if let Some(sender) = self.feedback_channel.as_ref() {
            // Nobody listening anymore is not an error
            let _ = sender.send(event);
        }
    }
}

impl Default for SyncProgress {
    fn default() -> Self {
        Self::new()
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn errors_and_warnings_are_counted() {
        let mut progress = SyncProgress::new();
        progress.info("info");
        progress.debug("debug");
        assert!(progress.is_success());
        progress.warn("warn");
        progress.error("error");
        assert_eq!(progress.n_errors(), 2);
        assert!(progress.is_success() == false);
    }

    #[test]
    fn feedback_reaches_the_receiver() {
        let (sender, receiver) = feedback_channel();
        assert_eq!(*receiver.borrow(), SyncEvent::NotStarted);

        let mut progress = SyncProgress::new_with_feedback_channel(sender);
        progress.feedback(SyncEvent::Started);
        assert_eq!(*receiver.borrow(), SyncEvent::Started);

        progress.feedback(SyncEvent::Finished{ success: true });
        assert_eq!(receiver.borrow().to_string(), "Sync successfully finished");
    }

    #[test]
    fn display_in_progress() {
        let event = SyncEvent::InProgress{
            month: YearMonth::new(2022, 3).unwrap(),
            months_done_already: 4,
            details: "meals".to_string(),
        };
        assert_eq!(event.to_string(), "[2022-03] meals (4 months done already)...");
    }
}
