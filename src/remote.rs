//! A remote source that serves canned records, for tests and demos

use std::collections::BTreeMap;
use std::error::Error;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::api::{MealModel, MealResponse, ScheduleModel, ScheduleResponse, ApiError};
use crate::calendar::YearMonth;
use crate::mock_behaviour::MockBehaviour;
use crate::traits::{RemoteMealSource, RemoteScheduleSource};

/// A mocked nutrition/schedule API
#[derive(Debug, Default)]
pub struct MockRemote {
    meals: BTreeMap<YearMonth, Vec<MealModel>>,
    schedules: BTreeMap<YearMonth, Vec<ScheduleModel>>,

    mock_behaviour: Option<Arc<Mutex<MockBehaviour>>>,
}

impl MockRemote {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make fetches fail according to a shared [`MockBehaviour`]
    pub fn set_mock_behaviour(&mut self, behaviour: Arc<Mutex<MockBehaviour>>) {
        self.mock_behaviour = Some(behaviour);
    }

    /// Serve a meal in the month of its `ymd` date
    pub fn add_meal(&mut self, model: MealModel) -> Result<(), ApiError> {
        let month = YearMonth::from_date(model.date()?);
        self.meals.entry(month).or_default().push(model);
        Ok(())
    }

    /// Serve a schedule for a given month
    pub fn add_schedule(&mut self, month: YearMonth, model: ScheduleModel) {
        self.schedules.entry(month).or_default().push(model);
    }

    fn check_behaviour<F>(&self, check: F) -> Result<(), Box<dyn Error>>
    where
        F: FnOnce(&mut MockBehaviour) -> Result<(), Box<dyn Error>>,
    {
        match &self.mock_behaviour {
            None => Ok(()),
            Some(behaviour) => {
                let mut behaviour = behaviour.lock()
                    .map_err(|_| "mock behaviour lock is poisoned")?;
                check(&mut *behaviour)
            },
        }
    }
}

#[async_trait]
impl RemoteMealSource for MockRemote {
    async fn fetch_meals(&self, month: YearMonth) -> Result<MealResponse, Box<dyn Error>> {
        self.check_behaviour(MockBehaviour::can_fetch_meals)?;
        Ok(MealResponse {
            response: self.meals.get(&month).cloned().unwrap_or_default(),
        })
    }
}

#[async_trait]
impl RemoteScheduleSource for MockRemote {
    async fn fetch_schedules(&self, month: YearMonth) -> Result<ScheduleResponse, Box<dyn Error>> {
        self.check_behaviour(MockBehaviour::can_fetch_schedules)?;
        Ok(ScheduleResponse {
            schedules: self.schedules.get(&month).cloned().unwrap_or_default(),
        })
    }
}
