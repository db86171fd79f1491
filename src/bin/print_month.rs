use chrono::{Datelike, Duration, Local};

use blindar::api::{MealModel, MenuModel, NutrientModel, ScheduleModel, KST_OFFSET_HOURS};
use blindar::cache::Cache;
use blindar::calendar::YearMonth;
use blindar::remote::MockRemote;
use blindar::Provider;

/// Fills a mocked API with a meal for every weekday of the month, and a schedule on its first Monday
fn populate_remote(month: YearMonth) -> MockRemote {
    let mut remote = MockRemote::new();

    let mut date = match month.first_day() {
        Some(date) => date,
        None => return remote,
    };
    let mut first_monday = None;
    while month.contains(date) {
        let weekday = date.weekday().num_days_from_sunday();
        if (1..=5).contains(&weekday) {
            let model = MealModel {
                ymd: date.format("%Y%m%d").to_string(),
                dishes: vec![
                    MenuModel { menu: "잡곡밥".to_string(), allergies: vec![] },
                    MenuModel { menu: "미역국".to_string(), allergies: vec![5, 6] },
                ],
                origins: vec![],
                nutrients: vec![
                    NutrientModel { nutrient: "열량".to_string(), unit: "kcal".to_string(), amount: format!("{}", 700 + weekday * 10) },
                ],
            };
            if let Err(err) = remote.add_meal(model) {
                log::warn!("Unable to add a meal: {}", err);
            }
            if weekday == 1 && first_monday.is_none() {
                first_monday = Some(date);
            }
        }
        date = date + Duration::days(1);
    }

    if let Some(monday) = first_monday {
        // Schedules are sent as UTC timestamps of midnight in Korea
        let timestamp = monday.and_hms_opt(0, 0, 0)
            .map(|midnight| midnight.and_utc().timestamp_millis() - KST_OFFSET_HOURS * 3600 * 1000);
        if let Some(timestamp) = timestamp {
            remote.add_schedule(month, ScheduleModel {
                id: 1,
                date: timestamp,
                title: "개학식".to_string(),
                contents: "강당".to_string(),
            });
        }
    }

    remote
}

#[tokio::main]
async fn main() {
    env_logger::init();

    let today = Local::now().date_naive();
    let month = YearMonth::from_date(today);

    let mut provider = Provider::new(populate_remote(month), Cache::new());

    println!("Depending on your RUST_LOG value, you may see more or less details about the progress.");
    if provider.sync_months(&[month]).await == false {
        log::warn!("Sync did not complete, see the previous log lines for more info. You can safely start a new sync.");
    }

    match provider.month_view(month.year(), month.month()).await {
        Err(err) => log::error!("Unable to build the view of {}: {}", month, err),
        Ok(view) => blindar::utils::print_month_view(&view),
    }
}
