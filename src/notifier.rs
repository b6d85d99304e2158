use crate::config::{APP_NAME, NOTIFICATION_TITLE, NOTIFY_CHECK_INTERVAL};
use crate::error::{AppError, AppResult};
use crate::prayer::{Event, Prayer};
use crate::resolver::should_notify;
use crate::schedule::Schedule;
use crate::AppState;
use chrono::{Local, NaiveDate, NaiveDateTime};
use std::sync::Arc;
use std::thread;

/// Delivers "prayer time has begun" alerts.
pub trait Notifier: Send {
    fn notify(&self, event: &Event) -> AppResult<()>;
}

/// Native desktop notification via the platform notification service.
pub struct DesktopNotifier;

impl Notifier for DesktopNotifier {
    fn notify(&self, event: &Event) -> AppResult<()> {
        notify_rust::Notification::new()
            .summary(NOTIFICATION_TITLE)
            .body(&notification_body(event))
            .appname(APP_NAME)
            .show()
            .map(|_| ())
            .map_err(|e| AppError::notification(e.to_string()))
    }
}

pub fn notification_body(event: &Event) -> String {
    format!("{} vakti girdi.", event.display_name())
}

/// Lets each prayer through at most once per day, however many checks land
/// inside its minute.
#[derive(Debug, Default)]
pub struct NotificationGate {
    last: Option<(NaiveDate, Prayer)>,
}

impl NotificationGate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn check(&mut self, schedule: &Schedule, now: NaiveDateTime) -> Option<Event> {
        let event = should_notify(schedule, now)?;
        let key = (now.date(), event.prayer);
        if self.last == Some(key) {
            return None;
        }
        self.last = Some(key);
        Some(event)
    }
}

/// Background check for prayer times, every `NOTIFY_CHECK_INTERVAL`.
pub fn start_notification_scheduler(
    state: Arc<AppState>,
    notifier: Box<dyn Notifier>,
) -> thread::JoinHandle<()> {
    thread::spawn(move || {
        let mut gate = NotificationGate::new();
        loop {
            thread::sleep(NOTIFY_CHECK_INTERVAL);

            if !state.notifications_enabled() {
                continue;
            }
            let Some(schedule) = state.current_schedule() else {
                continue;
            };

            let now = Local::now().naive_local();
            if let Some(event) = gate.check(&schedule, now) {
                log::info!("Prayer time reached: {} at {}", event.name(), event.time);
                if let Err(e) = notifier.notify(&event) {
                    log::warn!("Failed to show notification: {}", e);
                }
            }
        }
    })
}
