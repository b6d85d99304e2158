//! Presentation adapters.
//!
//! Each adapter turns the same [`Dashboard`] snapshot into text. They share the
//! resolver and differ only in layout.

use crate::calendar::{format_gregorian_tr, format_hijri_tr};
use crate::resolver::{resolve, Resolution};
use crate::schedule::Schedule;
use chrono::NaiveDateTime;
use std::fmt::Write as _;
use std::sync::Arc;

/// Shown before the first schedule arrives
pub const LOADING_TEXT: &str = "Yükleniyor...";

/// Everything a frame needs, captured at one instant.
#[derive(Debug, Clone)]
pub struct Dashboard {
    pub now: NaiveDateTime,
    pub schedule: Option<Arc<Schedule>>,
    /// Last refresh failure, if any
    pub status: Option<String>,
}

impl Dashboard {
    pub fn resolution(&self) -> Option<Resolution> {
        self.schedule.as_deref().map(|s| resolve(s, self.now))
    }

    fn status_text(&self) -> &str {
        self.status.as_deref().unwrap_or(LOADING_TEXT)
    }
}

pub trait Presenter {
    fn render(&self, dashboard: &Dashboard) -> String;

    /// Whether each frame replaces the previous one on screen
    fn redraws(&self) -> bool {
        true
    }
}

/// Full view: clock, countdown, the six prayers with the active one marked,
/// Gregorian and Hijri dates.
pub struct CardPresenter;

impl Presenter for CardPresenter {
    fn render(&self, d: &Dashboard) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "{}", d.now.format("%H:%M:%S"));

        match (d.schedule.as_deref(), d.resolution()) {
            (Some(schedule), Some(r)) => {
                let c = r.countdown();
                let _ = writeln!(out, "{} vaktine kalan", r.next.display_name());
                let _ = writeln!(out, "{:02}:{:02}:{:02}", c.hours, c.minutes, c.seconds);
                let _ = writeln!(out);
                let _ = writeln!(out, "{}", schedule.city());
                for event in schedule.events() {
                    let marker = if event.prayer == r.active.prayer { '>' } else { ' ' };
                    let _ = writeln!(out, " {} {:<8} {}", marker, event.display_name(), event.time);
                }
                let _ = writeln!(out);
                let _ = writeln!(out, "Miladi: {}", format_gregorian_tr(d.now.date()));
                if let Some(hijri) = schedule.hijri() {
                    let _ = writeln!(out, "Hicri: {}", format_hijri_tr(hijri));
                }
                if let Some(status) = &d.status {
                    let _ = writeln!(out, "({})", status);
                }
            }
            _ => {
                let _ = writeln!(out, "{}", d.status_text());
                let _ = writeln!(out, "Miladi: {}", format_gregorian_tr(d.now.date()));
            }
        }
        out
    }
}

/// One line: "İkindi vaktine 3s 30dk kaldı".
pub struct CompactPresenter;

impl Presenter for CompactPresenter {
    fn render(&self, d: &Dashboard) -> String {
        match d.resolution() {
            Some(r) => {
                let c = r.countdown();
                format!(
                    "{} vaktine {}s {}dk kaldı",
                    r.next.display_name(),
                    c.hours,
                    c.minutes
                )
            }
            None => d.status_text().to_string(),
        }
    }

    fn redraws(&self) -> bool {
        false
    }
}

/// Machine-readable snapshot for scripts and status bars.
pub struct JsonPresenter;

impl Presenter for JsonPresenter {
    fn render(&self, d: &Dashboard) -> String {
        let value = match (d.schedule.as_deref(), d.resolution()) {
            (Some(schedule), Some(r)) => serde_json::json!({
                "now": d.now.format("%Y-%m-%dT%H:%M:%S").to_string(),
                "schedule": schedule,
                "active": r.active,
                "next": r.next,
                "next_at": r.next_at.format("%Y-%m-%dT%H:%M:%S").to_string(),
                "remaining_seconds": r.remaining.num_seconds(),
                "next_is_tomorrow": r.next_is_tomorrow,
                "status": d.status,
            }),
            _ => serde_json::json!({
                "now": d.now.format("%Y-%m-%dT%H:%M:%S").to_string(),
                "schedule": null,
                "status": d.status_text(),
            }),
        };
        value.to_string()
    }

    fn redraws(&self) -> bool {
        false
    }
}
