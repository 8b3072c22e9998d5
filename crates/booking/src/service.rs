//! Voice booking orchestration
//!
//! [`VoiceBookingService`] drives one request through its states: resolve
//! the user, resolve candidate courts, check availability, create or
//! cancel, respond. Steps run strictly sequentially and the first failed
//! guard terminates the flow; there are no internal retries. Retrying is
//! the caller's call, and `book_court` is not idempotent: a blind retry
//! can double-book.

use std::sync::Arc;

use chrono::{NaiveDate, NaiveTime};

use courtvoice_config::BookingConfig;
use courtvoice_core::{
    BookingResult, BookingStatus, CourtType, Language, User, VoiceCommand,
};

use crate::availability::{window_end, AvailabilityChecker};
use crate::messages;
use crate::repository::{
    BookingFilter, BookingPatch, BookingRepository, CourtFilter, CourtRepository, NewBooking,
    UserRepository,
};
use crate::RepositoryError;

/// Orchestrates one voice request against the repository ports.
///
/// Holds only injected, stateless collaborators, so a single instance is
/// safe to share across all concurrent requests. Construct it once at the
/// composition root and pass it around explicitly.
pub struct VoiceBookingService {
    users: Arc<dyn UserRepository>,
    courts: Arc<dyn CourtRepository>,
    bookings: Arc<dyn BookingRepository>,
    checker: AvailabilityChecker,
    config: BookingConfig,
}

impl VoiceBookingService {
    pub fn new(
        users: Arc<dyn UserRepository>,
        courts: Arc<dyn CourtRepository>,
        bookings: Arc<dyn BookingRepository>,
        config: BookingConfig,
    ) -> Self {
        let checker = AvailabilityChecker::new(courts.clone(), bookings.clone(), config.clone());
        Self {
            users,
            courts,
            bookings,
            checker,
            config,
        }
    }

    /// Process one recognized command for the given user.
    ///
    /// Never returns an error: business-rule failures become ordinary
    /// `success: false` results, and any repository fault is caught here,
    /// logged with detail and collapsed into a generic localized
    /// processing-error result.
    pub async fn process_voice_booking(
        &self,
        command: &VoiceCommand,
        user_id: &str,
        language: Language,
    ) -> BookingResult {
        match self.process_inner(command, user_id, language).await {
            Ok(result) => result,
            Err(error) => {
                tracing::error!(
                    user_id,
                    command = command.kind(),
                    %error,
                    "voice booking failed on a backend error"
                );
                BookingResult::failure(messages::processing_error(language))
            }
        }
    }

    async fn process_inner(
        &self,
        command: &VoiceCommand,
        user_id: &str,
        language: Language,
    ) -> Result<BookingResult, RepositoryError> {
        // Guard clause, not an exception: unknown user ids are expected
        // input, and nothing else may be fetched for them.
        let Some(user) = self.users.get_by_id(user_id).await? else {
            return Ok(BookingResult::failure(messages::user_not_found(language)));
        };

        match command {
            VoiceCommand::BookCourt {
                date,
                time,
                duration_minutes,
                court_type,
            } => {
                self.book_court(&user, *date, *time, *duration_minutes, *court_type, language)
                    .await
            }
            VoiceCommand::CheckAvailability {
                date,
                time,
                court_type,
            } => self.check_availability(*date, *time, *court_type, language).await,
            VoiceCommand::CancelBooking { date } => {
                self.cancel_booking(&user, *date, language).await
            }
        }
    }

    async fn book_court(
        &self,
        user: &User,
        date: NaiveDate,
        time: Option<NaiveTime>,
        duration_minutes: Option<u32>,
        court_type: Option<CourtType>,
        language: Language,
    ) -> Result<BookingResult, RepositoryError> {
        let Some(start_time) = time else {
            return Ok(BookingResult::failure(messages::time_required(language)));
        };

        let duration = duration_minutes.unwrap_or(self.config.default_duration_minutes);
        let Some(end_time) = window_end(start_time, duration) else {
            return Ok(BookingResult::failure(messages::invalid_time_window(language)));
        };

        let courts = self.courts.find_many(&CourtFilter { court_type }).await?;
        if courts.is_empty() {
            return Ok(BookingResult::failure(messages::no_courts(language)));
        }

        let Some(court) = self
            .checker
            .first_free(&courts, date, start_time, end_time)
            .await?
        else {
            return Ok(BookingResult::failure(messages::no_free_courts(language)));
        };

        let total_amount = self.config.price_per_hour * duration as f64 / 60.0;

        let booking = self
            .bookings
            .create(NewBooking {
                court_id: court.id.clone(),
                date,
                start_time,
                end_time,
                booked_by: user.id.clone(),
                status: BookingStatus::Confirmed,
                total_amount,
                currency: self.config.currency.clone(),
                purpose: self.config.default_purpose.clone(),
            })
            .await?;

        tracing::info!(
            booking_id = %booking.id,
            court_id = %court.id,
            user_id = %user.id,
            "booking created"
        );

        Ok(
            BookingResult::ok(messages::booking_confirmed(language, &court.name, date, start_time))
                .with_booking_id(booking.id)
                .with_next_steps(messages::booking_next_steps(language)),
        )
    }

    async fn check_availability(
        &self,
        date: NaiveDate,
        time: Option<NaiveTime>,
        court_type: Option<CourtType>,
        language: Language,
    ) -> Result<BookingResult, RepositoryError> {
        let slots = self
            .checker
            .scan(date, time, self.config.default_duration_minutes, court_type)
            .await?;

        let free_slots = slots.iter().filter(|s| s.is_available).count();

        // Short of a backend fault this branch always succeeds; zero free
        // slots is still a successful report.
        Ok(
            BookingResult::ok(messages::availability_summary(language, free_slots))
                .with_slots(slots)
                .with_next_steps(messages::availability_next_steps(language)),
        )
    }

    async fn cancel_booking(
        &self,
        user: &User,
        date: NaiveDate,
        language: Language,
    ) -> Result<BookingResult, RepositoryError> {
        let mut confirmed = self
            .bookings
            .find_many(&BookingFilter {
                user_id: Some(user.id.clone()),
                status: Some(BookingStatus::Confirmed),
                date: None,
            })
            .await?;

        if confirmed.is_empty() {
            return Ok(BookingResult::failure(messages::no_active_bookings(language)));
        }

        confirmed.sort_by_key(|b| (b.date, b.start_time));

        // Prefer the booking on the named date, then the soonest booking
        // on or after it, then the soonest overall.
        let target = confirmed
            .iter()
            .find(|b| b.date == date)
            .or_else(|| confirmed.iter().find(|b| b.date >= date))
            .unwrap_or(&confirmed[0])
            .clone();

        let cancelled = self
            .bookings
            .update(
                &target.id,
                BookingPatch {
                    status: Some(BookingStatus::Cancelled),
                },
            )
            .await?;

        tracing::info!(booking_id = %cancelled.id, user_id = %user.id, "booking cancelled");

        Ok(
            BookingResult::ok(messages::booking_cancelled(language, cancelled.date))
                .with_next_steps(messages::cancel_next_steps(language)),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use async_trait::async_trait;

    use courtvoice_core::Court;

    use crate::memory::{
        InMemoryBookingRepository, InMemoryCourtRepository, InMemoryUserRepository,
    };

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 12, 28).unwrap()
    }

    fn time(hour: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(hour, 0, 0).unwrap()
    }

    fn user() -> User {
        User {
            id: "user-123".to_string(),
            name: "Ivan".to_string(),
        }
    }

    fn courts() -> Vec<Court> {
        vec![
            Court {
                id: "c1".to_string(),
                name: "Center".to_string(),
                court_type: CourtType::Indoor,
            },
            Court {
                id: "c2".to_string(),
                name: "Garden".to_string(),
                court_type: CourtType::Outdoor,
            },
        ]
    }

    struct Fixture {
        bookings: Arc<InMemoryBookingRepository>,
        service: VoiceBookingService,
    }

    fn fixture(court_list: Vec<Court>) -> Fixture {
        let users = Arc::new(InMemoryUserRepository::with_users(vec![user()]));
        let courts = Arc::new(InMemoryCourtRepository::with_courts(court_list));
        let bookings = Arc::new(InMemoryBookingRepository::new());
        let service = VoiceBookingService::new(
            users,
            courts,
            bookings.clone(),
            BookingConfig::default(),
        );
        Fixture { bookings, service }
    }

    fn book_command(hour: Option<u32>) -> VoiceCommand {
        VoiceCommand::BookCourt {
            date: date(),
            time: hour.map(time),
            duration_minutes: None,
            court_type: None,
        }
    }

    #[tokio::test]
    async fn successful_booking_creates_confirmed_booking() {
        let fx = fixture(courts());

        let result = fx
            .service
            .process_voice_booking(&book_command(Some(14)), "user-123", Language::English)
            .await;

        assert!(result.success);
        let booking_id = result.booking_id.expect("booking id on success");
        assert!(result.next_steps.is_some());
        assert!(result.message.contains("Center"));

        let stored = fx.bookings.all();
        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0].id, booking_id);
        assert_eq!(stored[0].status, BookingStatus::Confirmed);
        assert_eq!(stored[0].court_id, "c1");
        assert_eq!(stored[0].end_time, time(15));
        // 60 minutes at the flat default rate
        assert!((stored[0].total_amount - 1200.0).abs() < f64::EPSILON);
    }

    #[tokio::test]
    async fn booking_without_time_asks_for_it() {
        let fx = fixture(courts());

        let result = fx
            .service
            .process_voice_booking(&book_command(None), "user-123", Language::Russian)
            .await;

        assert!(!result.success);
        assert_eq!(result.message, "Укажите дату и время бронирования");
        assert!(fx.bookings.all().is_empty());
    }

    #[tokio::test]
    async fn no_courts_means_failure_and_no_create() {
        let fx = fixture(Vec::new());

        let result = fx
            .service
            .process_voice_booking(&book_command(Some(14)), "user-123", Language::English)
            .await;

        assert!(!result.success);
        assert!(fx.bookings.all().is_empty());
    }

    #[tokio::test]
    async fn busy_catalog_falls_through_to_next_court() {
        let fx = fixture(courts());
        // Take c1 for the window; booking should land on c2.
        fx.service
            .process_voice_booking(&book_command(Some(14)), "user-123", Language::English)
            .await;

        let result = fx
            .service
            .process_voice_booking(&book_command(Some(14)), "user-123", Language::English)
            .await;

        assert!(result.success);
        let stored = fx.bookings.all();
        assert_eq!(stored.len(), 2);
        assert_eq!(stored[1].court_id, "c2");
    }

    #[tokio::test]
    async fn fully_booked_window_fails() {
        let fx = fixture(courts());
        for _ in 0..2 {
            let result = fx
                .service
                .process_voice_booking(&book_command(Some(14)), "user-123", Language::English)
                .await;
            assert!(result.success);
        }

        let result = fx
            .service
            .process_voice_booking(&book_command(Some(14)), "user-123", Language::English)
            .await;

        assert!(!result.success);
        assert_eq!(result.message, "No courts are available for that time");
        assert_eq!(fx.bookings.all().len(), 2);
    }

    #[tokio::test]
    async fn unknown_user_short_circuits() {
        let counting_courts = Arc::new(CountingCourtRepository::default());
        let bookings = Arc::new(InMemoryBookingRepository::new());
        let service = VoiceBookingService::new(
            Arc::new(InMemoryUserRepository::new()),
            counting_courts.clone(),
            bookings.clone(),
            BookingConfig::default(),
        );

        let result = service
            .process_voice_booking(&book_command(Some(14)), "ghost", Language::Russian)
            .await;

        assert!(!result.success);
        assert_eq!(result.message, "Пользователь не найден");
        assert_eq!(counting_courts.calls.load(Ordering::SeqCst), 0);
        assert!(bookings.all().is_empty());
    }

    #[tokio::test]
    async fn availability_reports_slots_in_catalog_order() {
        let fx = fixture(courts());
        fx.service
            .process_voice_booking(&book_command(Some(14)), "user-123", Language::English)
            .await;

        let command = VoiceCommand::CheckAvailability {
            date: date(),
            time: Some(time(14)),
            court_type: None,
        };
        let result = fx
            .service
            .process_voice_booking(&command, "user-123", Language::English)
            .await;

        assert!(result.success);
        let slots = result.available_slots.expect("slots on availability check");
        assert_eq!(slots.len(), 2);
        assert_eq!(slots[0].court_id, "c1");
        assert!(!slots[0].is_available);
        assert!(slots[1].is_available);
        assert!(result.message.contains('1'));
    }

    #[tokio::test]
    async fn availability_with_type_filter_scans_whole_day() {
        let fx = fixture(courts());

        let command = VoiceCommand::CheckAvailability {
            date: date(),
            time: None,
            court_type: Some(CourtType::Outdoor),
        };
        let result = fx
            .service
            .process_voice_booking(&command, "user-123", Language::English)
            .await;

        assert!(result.success);
        let slots = result.available_slots.unwrap();
        assert!(!slots.is_empty());
        assert!(slots.iter().all(|s| s.court_id == "c2"));
    }

    #[tokio::test]
    async fn cancel_without_bookings_fails_and_updates_nothing() {
        let fx = fixture(courts());

        let command = VoiceCommand::CancelBooking { date: date() };
        let result = fx
            .service
            .process_voice_booking(&command, "user-123", Language::Russian)
            .await;

        assert!(!result.success);
        assert!(result.message.contains("нет активных бронирований"));
        assert!(fx.bookings.all().is_empty());
    }

    #[tokio::test]
    async fn cancel_prefers_booking_on_named_date() {
        let fx = fixture(courts());
        for (days_ahead, hour) in [(1, 10), (0, 12)] {
            let result = fx
                .service
                .process_voice_booking(
                    &VoiceCommand::BookCourt {
                        date: date() + chrono::Duration::days(days_ahead),
                        time: Some(time(hour)),
                        duration_minutes: None,
                        court_type: None,
                    },
                    "user-123",
                    Language::English,
                )
                .await;
            assert!(result.success);
        }

        let command = VoiceCommand::CancelBooking { date: date() };
        let result = fx
            .service
            .process_voice_booking(&command, "user-123", Language::English)
            .await;

        assert!(result.success);
        let stored = fx.bookings.all();
        let cancelled: Vec<_> = stored
            .iter()
            .filter(|b| b.status == BookingStatus::Cancelled)
            .collect();
        assert_eq!(cancelled.len(), 1);
        assert_eq!(cancelled[0].date, date());
    }

    #[tokio::test]
    async fn repository_fault_becomes_processing_error() {
        let service = VoiceBookingService::new(
            Arc::new(InMemoryUserRepository::with_users(vec![user()])),
            Arc::new(FailingCourtRepository),
            Arc::new(InMemoryBookingRepository::new()),
            BookingConfig::default(),
        );

        let result = service
            .process_voice_booking(&book_command(Some(14)), "user-123", Language::English)
            .await;

        assert!(!result.success);
        assert_eq!(result.message, "Processing error, please try again later");
    }

    #[derive(Default)]
    struct CountingCourtRepository {
        calls: AtomicUsize,
    }

    #[async_trait]
    impl CourtRepository for CountingCourtRepository {
        async fn find_many(&self, _filter: &CourtFilter) -> Result<Vec<Court>, RepositoryError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(Vec::new())
        }
    }

    struct FailingCourtRepository;

    #[async_trait]
    impl CourtRepository for FailingCourtRepository {
        async fn find_many(&self, _filter: &CourtFilter) -> Result<Vec<Court>, RepositoryError> {
            Err(RepositoryError::Backend("database unreachable".to_string()))
        }
    }
}
