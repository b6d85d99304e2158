pub mod calendar;
pub mod cli;
pub mod config;
pub mod error;
pub mod notifier;
pub mod prayer;
pub mod presenter;
pub mod provider;
pub mod resolver;
pub mod schedule;
pub mod settings;

use std::io::Write;
use std::sync::{Arc, Mutex, MutexGuard};
use std::thread;

use chrono::{Local, NaiveDate, NaiveDateTime};
use clap::Parser;

use cli::Cli;
use config::{ROLLOVER_CHECK_INTERVAL, TICK_INTERVAL};
use error::{AppError, AppResult};
use notifier::{start_notification_scheduler, DesktopNotifier};
use presenter::Dashboard;
use provider::{AladhanClient, Geolocator, IpApiLocator, LocationQuery, TimingsProvider};
use schedule::Schedule;
use settings::SettingsStore;

/// Status shown when the timings could not be fetched
pub const FETCH_FAILED_TEXT: &str = "Veri alınamadı!";
/// Status shown when the city could not be located
pub const LOCATE_FAILED_TEXT: &str = "Konum Hatası!";

/// State shared between the display tick, the refresh worker and the
/// notification scheduler.
///
/// The schedule slot is only ever swapped for a new `Arc`, never edited, so a
/// reader holding a clone always sees one consistent day.
pub struct AppState {
    schedule: Mutex<Option<Arc<Schedule>>>,
    status: Mutex<Option<String>>,
    notifications: bool,
}

impl AppState {
    pub fn new(notifications: bool) -> Self {
        Self {
            schedule: Mutex::new(None),
            status: Mutex::new(None),
            notifications,
        }
    }

    /// Lock the schedule slot, recovering from poison if needed
    fn lock_schedule(&self) -> MutexGuard<'_, Option<Arc<Schedule>>> {
        self.schedule.lock().unwrap_or_else(|e| e.into_inner())
    }

    fn lock_status(&self) -> MutexGuard<'_, Option<String>> {
        self.status.lock().unwrap_or_else(|e| e.into_inner())
    }

    pub fn current_schedule(&self) -> Option<Arc<Schedule>> {
        self.lock_schedule().clone()
    }

    pub fn replace_schedule(&self, schedule: Schedule) {
        *self.lock_schedule() = Some(Arc::new(schedule));
        *self.lock_status() = None;
    }

    pub fn set_status(&self, status: impl Into<String>) {
        *self.lock_status() = Some(status.into());
    }

    pub fn status(&self) -> Option<String> {
        self.lock_status().clone()
    }

    pub fn notifications_enabled(&self) -> bool {
        self.notifications
    }

    pub fn snapshot(&self, now: NaiveDateTime) -> Dashboard {
        Dashboard {
            now,
            schedule: self.current_schedule(),
            status: self.status(),
        }
    }
}

/// Fetch timings for `query` and publish them. On failure the previous
/// schedule, if any, stays in place and the status line reports the error.
pub fn refresh(
    state: &AppState,
    provider: &dyn TimingsProvider,
    query: &LocationQuery,
) -> AppResult<()> {
    let result = if query.city.trim().is_empty() {
        Err(AppError::validation("No city configured"))
    } else {
        provider.fetch(query)
    };

    match result {
        Ok(schedule) => {
            log::info!(
                "Loaded timings for {} on {}",
                schedule.city(),
                schedule.date()
            );
            state.replace_schedule(schedule);
            Ok(())
        }
        Err(e) => {
            log::warn!("Failed to fetch timings for {:?}: {}", query.city, e);
            state.set_status(FETCH_FAILED_TEXT);
            Err(e)
        }
    }
}

/// True when no refresh has succeeded yet, or the last success was on an
/// earlier local day.
fn needs_refresh(loaded_on: Option<NaiveDate>, today: NaiveDate) -> bool {
    loaded_on != Some(today)
}

/// Refresh when due. `loaded_on` only advances on success, so a failed fetch
/// is tried again on the next check.
fn refresh_if_due(
    state: &AppState,
    provider: &dyn TimingsProvider,
    query: &LocationQuery,
    loaded_on: &mut Option<NaiveDate>,
    today: NaiveDate,
) -> bool {
    if !needs_refresh(*loaded_on, today) {
        return false;
    }
    if refresh(state, provider, query).is_ok() {
        *loaded_on = Some(today);
    }
    true
}

/// Fetch on start, then again each time the local date moves past the day of
/// the last successful fetch. Failures are retried every check interval.
pub fn start_refresh_worker(
    state: Arc<AppState>,
    provider: Arc<dyn TimingsProvider>,
    query: LocationQuery,
) -> thread::JoinHandle<()> {
    thread::spawn(move || {
        let mut loaded_on: Option<NaiveDate> = None;
        loop {
            let today = Local::now().date_naive();
            refresh_if_due(&state, provider.as_ref(), &query, &mut loaded_on, today);
            thread::sleep(ROLLOVER_CHECK_INTERVAL);
        }
    })
}

fn local_now() -> NaiveDateTime {
    Local::now().naive_local()
}

pub fn run() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    if let Err(e) = run_with(cli) {
        log::error!("{}", e);
        eprintln!("{}", e);
        std::process::exit(1);
    }
}

fn run_with(cli: Cli) -> AppResult<()> {
    let store = match SettingsStore::new() {
        Ok(store) => Some(store),
        Err(e) => {
            log::warn!("Settings will not be saved: {}", e);
            None
        }
    };

    let mut settings = store.as_ref().map(|s| s.load()).unwrap_or_default();
    let mut changed = cli.apply_to(&mut settings);
    let mut locate_failed = false;

    if cli.locate || settings.city.trim().is_empty() {
        match IpApiLocator::new().locate() {
            Ok(city) => {
                changed |= settings.city != city;
                settings.city = city;
            }
            Err(e) => {
                log::warn!("Failed to locate city: {}", e);
                locate_failed = true;
            }
        }
    }

    if changed {
        if let Some(store) = &store {
            if let Err(e) = store.save(&settings) {
                log::warn!("Failed to save settings: {}", e);
            }
        }
    }

    let state = Arc::new(AppState::new(settings.notifications));
    if locate_failed {
        state.set_status(LOCATE_FAILED_TEXT);
    }

    let provider: Arc<dyn TimingsProvider> = Arc::new(AladhanClient::new());
    let query = LocationQuery::new(settings.city, settings.country, settings.method);
    let presenter = cli.style.presenter();

    if cli.once {
        let result = refresh(&state, provider.as_ref(), &query);
        println!("{}", presenter.render(&state.snapshot(local_now())));
        return result;
    }

    start_refresh_worker(Arc::clone(&state), provider, query);
    if settings.notifications {
        start_notification_scheduler(Arc::clone(&state), Box::new(DesktopNotifier));
    }

    let mut stdout = std::io::stdout();
    loop {
        let frame = presenter.render(&state.snapshot(local_now()));
        let written = if presenter.redraws() {
            // Clear screen, cursor home
            write!(stdout, "\x1B[2J\x1B[H{}", frame)
        } else {
            writeln!(stdout, "{}", frame)
        };
        if written.and_then(|_| stdout.flush()).is_err() {
            // stdout closed, e.g. the reading end of a pipe went away
            return Ok(());
        }
        thread::sleep(TICK_INTERVAL);
    }
}
