//! Court availability checks
//!
//! Availability is a boolean-per-window query against existing
//! reservations. Results always preserve catalog order; there is no
//! ranking.

use std::sync::Arc;

use chrono::{Duration, NaiveDate, NaiveTime};

use courtvoice_config::BookingConfig;
use courtvoice_core::{AvailableSlot, Court, CourtType};

use crate::repository::{BookingRepository, CourtFilter, CourtRepository};
use crate::RepositoryError;

/// Computes a requested window's end, `None` when it would cross midnight
pub(crate) fn window_end(start: NaiveTime, duration_minutes: u32) -> Option<NaiveTime> {
    let (end, wrapped) = start.overflowing_add_signed(Duration::minutes(duration_minutes as i64));
    if wrapped != 0 {
        None
    } else {
        Some(end)
    }
}

/// Availability scanner over the court catalog
pub struct AvailabilityChecker {
    courts: Arc<dyn CourtRepository>,
    bookings: Arc<dyn BookingRepository>,
    config: BookingConfig,
}

impl AvailabilityChecker {
    pub fn new(
        courts: Arc<dyn CourtRepository>,
        bookings: Arc<dyn BookingRepository>,
        config: BookingConfig,
    ) -> Self {
        Self {
            courts,
            bookings,
            config,
        }
    }

    /// First court in catalog order free for the window
    pub async fn first_free(
        &self,
        courts: &[Court],
        date: NaiveDate,
        start_time: NaiveTime,
        end_time: NaiveTime,
    ) -> Result<Option<Court>, RepositoryError> {
        for court in courts {
            if self
                .bookings
                .is_court_available(&court.id, date, start_time, end_time)
                .await?
            {
                return Ok(Some(court.clone()));
            }
        }
        Ok(None)
    }

    /// Availability report for a day.
    ///
    /// With a concrete `time`, one entry per matching court flags whether
    /// that single window is free. Without one, the scan walks fixed
    /// hourly start slots across the configured operating hours (windows
    /// of `duration_minutes` that still end before closing) and reports
    /// only the free ones; that is this implementation's reading of
    /// "check the whole day".
    pub async fn scan(
        &self,
        date: NaiveDate,
        time: Option<NaiveTime>,
        duration_minutes: u32,
        court_type: Option<CourtType>,
    ) -> Result<Vec<AvailableSlot>, RepositoryError> {
        let courts = self.courts.find_many(&CourtFilter { court_type }).await?;
        let mut slots = Vec::new();

        match time {
            Some(start_time) => {
                let Some(end_time) = window_end(start_time, duration_minutes) else {
                    return Ok(slots);
                };
                for court in &courts {
                    let is_available = self
                        .bookings
                        .is_court_available(&court.id, date, start_time, end_time)
                        .await?;
                    slots.push(AvailableSlot {
                        court_id: court.id.clone(),
                        court_name: court.name.clone(),
                        date,
                        start_time,
                        end_time,
                        is_available,
                    });
                }
            }
            None => {
                let closing = closing_time(self.config.closing_hour);
                for court in &courts {
                    for hour in self.config.opening_hour..self.config.closing_hour {
                        let Some(start_time) = NaiveTime::from_hms_opt(hour, 0, 0) else {
                            continue;
                        };
                        let Some(end_time) = window_end(start_time, duration_minutes) else {
                            continue;
                        };
                        if end_time > closing || end_time <= start_time {
                            continue;
                        }
                        if self
                            .bookings
                            .is_court_available(&court.id, date, start_time, end_time)
                            .await?
                        {
                            slots.push(AvailableSlot {
                                court_id: court.id.clone(),
                                court_name: court.name.clone(),
                                date,
                                start_time,
                                end_time,
                                is_available: true,
                            });
                        }
                    }
                }
            }
        }

        Ok(slots)
    }
}

/// Closing hour as a clock time; hour 24 clamps to the last second of the
/// day
fn closing_time(closing_hour: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(closing_hour, 0, 0)
        .unwrap_or_else(|| NaiveTime::from_hms_opt(23, 59, 59).expect("valid clock time"))
}
