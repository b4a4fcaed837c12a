//! SM-2 spaced repetition scheduler, percentage-based (Anki-style) variant.
//!
//! Ease is tracked as a fraction (2.5) but adjusted in percentage points (250):
//! - Repetition number 0 is the learning phase: fixed short steps, ease untouched
//! - Later repetitions are the review phase: the interval grows by the ease factor,
//!   "hard" and "again" cost ease, "perfect" earns ease and an easy bonus
//! - "again" is a lapse: the repetition number resets and the card returns in minutes
//! - Ease never falls below 1.3 and intervals never exceed the configured maximum

use super::{PriorReview, ResponseQuality, ReviewOutcome, SchedulingState};
use crate::clock::{Clock, SystemClock};
use crate::config::SchedulerConfig;
use crate::error::SchedulerError;
use chrono::{DateTime, Duration, Utc};

/// Validated scheduling inputs.
struct Current {
    ease: f64,
    interval: i64,
    repetition: u32,
}

fn validate(prior: &PriorReview, config: &SchedulerConfig) -> Result<Current, SchedulerError> {
    let ease = prior.ease_factor.unwrap_or(config.starting_ease);
    if !ease.is_finite() {
        return Err(SchedulerError::NonFiniteEase(ease));
    }
    // tolerate float noise from a persisted 1.3
    if ease < config.minimum_ease - 1e-9 {
        return Err(SchedulerError::EaseBelowMinimum {
            ease,
            minimum: config.minimum_ease,
        });
    }

    let interval = prior.interval.unwrap_or(0);
    if interval < 0 {
        return Err(SchedulerError::NegativeInterval(interval));
    }

    let raw_repetition = prior.repetition_number.unwrap_or(0);
    if raw_repetition < 0 {
        return Err(SchedulerError::NegativeRepetition(raw_repetition));
    }
    let repetition = u32::try_from(raw_repetition)
        .map_err(|_| SchedulerError::RepetitionOutOfRange(raw_repetition))?;

    Ok(Current {
        ease,
        interval,
        repetition,
    })
}

/// Calculates the next review for one response.
///
/// `now` is the moment the response was recorded; the result never depends on
/// anything but the arguments.
pub fn compute_next_review(
    quality: ResponseQuality,
    prior: &PriorReview,
    now: DateTime<Utc>,
    config: &SchedulerConfig,
) -> Result<ReviewOutcome, SchedulerError> {
    let current = validate(prior, config).inspect_err(|err| {
        log::warn!("Rejected scheduler input {:?}: {}", prior, err);
    })?;

    let step = if current.repetition == 0 {
        learning_step
    } else {
        review_step
    };
    let outcome = step(quality, &current, now, config)
        .inspect_err(|err| log::warn!("Cannot schedule {:?} at {}: {}", prior, now, err))?;

    log::debug!(
        "{} at rep {} (ease {:.2}, interval {}d) -> ease {:.2}, interval {}d, rep {}, due {}",
        quality,
        current.repetition,
        current.ease,
        current.interval,
        outcome.ease_factor,
        outcome.interval,
        outcome.repetition_number,
        outcome.next_review
    );

    Ok(outcome)
}

fn learning_step(
    quality: ResponseQuality,
    current: &Current,
    now: DateTime<Utc>,
    config: &SchedulerConfig,
) -> Result<ReviewOutcome, SchedulerError> {
    let ease_factor = current.ease.max(config.minimum_ease);

    let (next_review, interval, repetition_number) = match quality {
        ResponseQuality::Again => (offset(now, config.again_delay())?, 0, 0),
        ResponseQuality::Hard => (offset(now, config.hard_delay())?, 0, 0),
        ResponseQuality::Good => {
            let interval = config.good_interval.min(config.max_interval);
            (offset(now, days(interval))?, interval, 1)
        }
        ResponseQuality::Perfect => {
            let interval = config.perfect_interval.min(config.max_interval);
            (offset(now, days(interval))?, interval, config.perfect_repetition)
        }
    };

    Ok(ReviewOutcome {
        next_review,
        ease_factor,
        interval,
        repetition_number,
    })
}

fn review_step(
    quality: ResponseQuality,
    current: &Current,
    now: DateTime<Utc>,
    config: &SchedulerConfig,
) -> Result<ReviewOutcome, SchedulerError> {
    let minimum = config.minimum_ease_percentage();
    let mut ease_percentage = current.ease * 100.0;
    let at_least_one_more = current.interval.saturating_add(1);

    let raw_interval = match quality {
        ResponseQuality::Again => {
            ease_percentage = (ease_percentage + config.again_ease_delta).max(minimum);
            scale(current.interval, config.lapse_interval_factor).max(1)
        }
        ResponseQuality::Hard => {
            ease_percentage = (ease_percentage + config.hard_ease_delta).max(minimum);
            scale(current.interval, config.hard_interval_factor).max(at_least_one_more)
        }
        ResponseQuality::Good => {
            scale(current.interval, ease_percentage / 100.0).max(at_least_one_more)
        }
        ResponseQuality::Perfect => {
            ease_percentage += config.perfect_ease_delta;
            scale(current.interval, ease_percentage / 100.0 * config.easy_bonus)
                .max(at_least_one_more)
        }
    };

    let interval = clamp_interval(raw_interval, config.max_interval);

    let (next_review, repetition_number) = match quality {
        // relearn in minutes, the reduced interval applies once it is passed again
        ResponseQuality::Again => (offset(now, config.again_delay())?, 0),
        _ => (offset(now, days(interval))?, current.repetition.saturating_add(1)),
    };

    Ok(ReviewOutcome {
        next_review,
        ease_factor: ease_percentage / 100.0,
        interval,
        repetition_number,
    })
}

/// `floor(interval * factor)`, saturating.
fn scale(interval: i64, factor: f64) -> i64 {
    (interval as f64 * factor).floor() as i64
}

fn clamp_interval(interval: i64, max_interval: u32) -> u32 {
    u32::try_from(interval.clamp(0, i64::from(max_interval))).unwrap_or(max_interval)
}

fn days(interval: u32) -> Option<Duration> {
    Duration::try_days(i64::from(interval))
}

fn offset(now: DateTime<Utc>, delay: Option<Duration>) -> Result<DateTime<Utc>, SchedulerError> {
    delay
        .and_then(|delay| now.checked_add_signed(delay))
        .ok_or(SchedulerError::ReviewOutOfRange)
}

/// Outcomes for again, hard, good and perfect, in that order.
/// Used to label answer buttons with the interval each one would give.
pub fn preview(
    prior: &PriorReview,
    now: DateTime<Utc>,
    config: &SchedulerConfig,
) -> Result<[ReviewOutcome; 4], SchedulerError> {
    let [again, hard, good, perfect] = ResponseQuality::ALL;
    Ok([
        compute_next_review(again, prior, now, config)?,
        compute_next_review(hard, prior, now, config)?,
        compute_next_review(good, prior, now, config)?,
        compute_next_review(perfect, prior, now, config)?,
    ])
}

/// Formats a delay until the next review as a short human-readable string
pub fn format_interval(delay: Duration) -> String {
    let minutes = delay.num_minutes();
    if minutes <= 0 {
        return "now".to_string();
    }
    if minutes < 60 {
        return format!("{}m", minutes);
    }
    let hours = delay.num_hours();
    if hours < 24 {
        return format!("{}h", hours);
    }

    let days = delay.num_days();
    if days < 7 {
        format!("{}d", days)
    } else if days < 30 {
        format!("{}w", days / 7)
    } else if days < 365 {
        format!("{}mo", days / 30)
    } else {
        format!("{}y", days / 365)
    }
}

/// Scheduler bound to a config and a clock.
#[derive(Debug, Clone, Default)]
pub struct Scheduler<C = SystemClock> {
    config: SchedulerConfig,
    clock: C,
}

impl<C: Clock> Scheduler<C> {
    pub fn new(config: SchedulerConfig, clock: C) -> Self {
        Self { config, clock }
    }

    pub fn config(&self) -> &SchedulerConfig {
        &self.config
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    pub fn now(&self) -> DateTime<Utc> {
        self.clock.now()
    }

    pub fn compute_next_review(
        &self,
        quality: ResponseQuality,
        prior: &PriorReview,
    ) -> Result<ReviewOutcome, SchedulerError> {
        compute_next_review(quality, prior, self.clock.now(), &self.config)
    }

    /// Schedules a card from its persisted state.
    pub fn review(
        &self,
        state: &SchedulingState,
        quality: ResponseQuality,
    ) -> Result<ReviewOutcome, SchedulerError> {
        self.compute_next_review(quality, &PriorReview::from(state))
    }

    pub fn preview(&self, state: &SchedulingState) -> Result<[ReviewOutcome; 4], SchedulerError> {
        preview(&PriorReview::from(state), self.clock.now(), &self.config)
    }
}
