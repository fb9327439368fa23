use std::sync::Arc;
use tokio_cron_scheduler::{Job, JobScheduler};

use crate::subscribers::SubscriberRegistry;
use crate::timetable::TimetableStore;
use crate::transport::{fan_out, Transport};
use crate::utils::datetime::today_weekday_name;
use crate::utils::logging::log_system_event;

/// Fire once per day at 08:00.
const DAILY_CRON: &str = "0 0 8 * * *";

/// Pushes the current day's timetable to every subscriber once per day.
///
/// A fire on a day with no timetable rows sends nothing. Missed fires are
/// not caught up and no delivery record is kept between runs.
pub struct NotifierService {
    transport: Arc<dyn Transport>,
    store: Arc<TimetableStore>,
    registry: SubscriberRegistry,
    scheduler: JobScheduler,
}

impl NotifierService {
    pub async fn new(
        transport: Arc<dyn Transport>,
        store: Arc<TimetableStore>,
        registry: SubscriberRegistry,
    ) -> Result<Self, Box<dyn std::error::Error + Send + Sync>> {
        let scheduler = JobScheduler::new().await?;

        Ok(Self {
            transport,
            store,
            registry,
            scheduler,
        })
    }

    pub async fn start(&mut self) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let transport = self.transport.clone();
        let store = self.store.clone();
        let registry = self.registry.clone();

        let daily_job = Job::new_async(DAILY_CRON, move |_uuid, _l| {
            let transport = transport.clone();
            let store = store.clone();
            let registry = registry.clone();
            Box::pin(async move {
                let today = today_weekday_name();
                let sent =
                    send_daily_timetable(transport.as_ref(), &store, &registry, &today).await;
                log_system_event(
                    "Daily notifier fired",
                    Some(&format!("{}: {} successful sends", today, sent)),
                );
            })
        })?;

        self.scheduler.add(daily_job).await?;
        self.scheduler.start().await?;

        tracing::info!("Daily notifier started - sending timetables at 8:00 AM every day");
        Ok(())
    }

    pub async fn stop(&mut self) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        self.scheduler.shutdown().await?;
        Ok(())
    }

    // Manual trigger for testing
    pub async fn notify_now(&self) -> usize {
        let today = today_weekday_name();
        send_daily_timetable(self.transport.as_ref(), &self.store, &self.registry, &today).await
    }
}

/// Send the timetable for `today` to every subscriber, returning the number
/// of successful sends. A day with no rows sends nothing and is not an error.
pub async fn send_daily_timetable(
    transport: &dyn Transport,
    store: &TimetableStore,
    registry: &SubscriberRegistry,
    today: &str,
) -> usize {
    if store.rows_for_day(today).is_empty() {
        return 0;
    }

    let message = format!(
        "⏰ Good morning! Here is your timetable for {}:\n{}",
        today,
        store.format_day_block(today)
    );
    fan_out(transport, &registry.snapshot(), &message).await
}
