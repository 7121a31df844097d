//! Past/upcoming classification of shows relative to a reference instant.
//!
//! Classification is pure. Callers capture `now` once per request and pass
//! the same value to every partition they build, so a show is never counted
//! on both sides of a moving clock.

use chrono::Utc;
use sea_orm::prelude::DateTime;

use crate::db::{entities::show, enums::Tense};

const ISO_8601: &str = "%Y-%m-%dT%H:%M:%S%.f";

/// Anything that happens at a single point in time.
pub trait Scheduled {
    fn start_time(&self) -> DateTime;
}

impl Scheduled for show::Model {
    fn start_time(&self) -> DateTime {
        self.start_time
    }
}

/// A show paired with whatever was loaded alongside it.
impl<T: Scheduled, C> Scheduled for (T, C) {
    fn start_time(&self) -> DateTime {
        self.0.start_time()
    }
}

/// Returns `None` for a show starting exactly at `now`: it is neither past
/// nor upcoming.
pub fn classify(start: DateTime, now: DateTime) -> Option<Tense> {
    if start > now {
        Some(Tense::Future)
    } else if start < now {
        Some(Tense::Past)
    } else {
        None
    }
}

pub fn select<'a, T: Scheduled>(
    items: &'a [T],
    tense: Tense,
    now: DateTime,
) -> impl Iterator<Item = &'a T> + 'a {
    items
        .iter()
        .filter(move |item| classify(item.start_time(), now) == Some(tense))
}

pub fn count<T: Scheduled>(items: &[T], tense: Tense, now: DateTime) -> usize {
    select(items, tense, now).count()
}

/// The reference instant for one request.
pub fn now() -> DateTime {
    Utc::now().naive_utc()
}

pub fn iso8601(ts: DateTime) -> String {
    ts.format(ISO_8601).to_string()
}
