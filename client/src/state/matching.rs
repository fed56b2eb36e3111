//! Swipe matching state machine.
//!
//! DESIGN
//! ======
//! The queue is the static profile list minus existing matches. Every swipe,
//! left or right, spends one unit of a per-day quota kept under
//! `dailySwipes`; the quota resets when the local date key changes. A right
//! swipe on a profile that already likes the user produces a match, kept
//! under `userMatches`.
//!
//! Functions that depend on "today" take the date key as an argument so the
//! midnight reset is testable without a clock.

#[cfg(test)]
#[path = "matching_test.rs"]
mod matching_test;

use serde::{Deserialize, Serialize};

use crate::data::types::MatchProfile;
use crate::util::storage;

/// Swipes allowed per local calendar day.
pub const DAILY_SWIPE_LIMIT: u32 = 20;
/// Horizontal drag distance (px) that commits a swipe on release.
pub const SWIPE_COMMIT_THRESHOLD_PX: f64 = 100.0;
/// Drag distance (px) per degree of card tilt.
const PX_PER_DEGREE: f64 = 20.0;
const MAX_TILT_DEG: f64 = 15.0;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SwipeError {
    #[error("You've used all {limit} swipes for today. Come back after midnight!")]
    LimitReached { limit: u32 },
    #[error("No more profiles to show right now")]
    QueueEmpty,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SwipeDirection {
    /// Pass.
    Left,
    /// Like.
    Right,
}

/// Result of a committed swipe.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SwipeOutcome {
    Passed { profile_id: u32 },
    Liked { profile_id: u32 },
    /// The liked profile already liked the user.
    Matched { profile_id: u32, name: String },
}

/// Per-day swipe counter persisted as `{ "date": "YYYY-MM-DD", "count": n }`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailySwipes {
    pub date: String,
    pub count: u32,
}

impl DailySwipes {
    /// Counter as it applies on `today`: a stale date means a fresh day.
    #[must_use]
    pub fn for_day(self, today: &str) -> Self {
        if self.date == today { self } else { Self { date: today.to_owned(), count: 0 } }
    }

    /// Swipes still available on `today`.
    pub fn remaining(&self, today: &str) -> u32 {
        let used = if self.date == today { self.count } else { 0 };
        DAILY_SWIPE_LIMIT.saturating_sub(used)
    }

    /// Spend one swipe on `today`, returning the new count.
    ///
    /// # Errors
    ///
    /// Returns [`SwipeError::LimitReached`] once the day's quota is used up.
    pub fn record(&mut self, today: &str) -> Result<u32, SwipeError> {
        if self.remaining(today) == 0 {
            return Err(SwipeError::LimitReached { limit: DAILY_SWIPE_LIMIT });
        }
        *self = std::mem::take(self).for_day(today);
        self.count += 1;
        Ok(self.count)
    }
}

/// Visual hint overlaid on the card while dragging.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SwipeHint {
    None,
    Like,
    Nope,
}

/// Direction a released drag commits to, if it went far enough.
pub fn classify_drag(offset_px: f64) -> Option<SwipeDirection> {
    if offset_px >= SWIPE_COMMIT_THRESHOLD_PX {
        Some(SwipeDirection::Right)
    } else if offset_px <= -SWIPE_COMMIT_THRESHOLD_PX {
        Some(SwipeDirection::Left)
    } else {
        None
    }
}

/// Card tilt for a drag offset, clamped to ±15°.
pub fn card_rotation_deg(offset_px: f64) -> f64 {
    (offset_px / PX_PER_DEGREE).clamp(-MAX_TILT_DEG, MAX_TILT_DEG)
}

/// Overlay hint; appears halfway to the commit threshold.
pub fn swipe_hint(offset_px: f64) -> SwipeHint {
    let half = SWIPE_COMMIT_THRESHOLD_PX / 2.0;
    if offset_px >= half {
        SwipeHint::Like
    } else if offset_px <= -half {
        SwipeHint::Nope
    } else {
        SwipeHint::None
    }
}

/// Full matching page state.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MatchingState {
    pub queue: Vec<MatchProfile>,
    pub position: usize,
    pub swipes: DailySwipes,
    /// Matched profile ids, oldest first.
    pub matches: Vec<u32>,
    pub drag_offset: f64,
    pub dragging: bool,
    pub last_outcome: Option<SwipeOutcome>,
}

impl MatchingState {
    /// Build the queue from `profiles`, skipping anyone already matched.
    pub fn new(profiles: Vec<MatchProfile>, swipes: DailySwipes, matches: Vec<u32>, today: &str) -> Self {
        let queue = profiles.into_iter().filter(|p| !matches.contains(&p.id)).collect();
        Self {
            queue,
            position: 0,
            swipes: swipes.for_day(today),
            matches,
            drag_offset: 0.0,
            dragging: false,
            last_outcome: None,
        }
    }

    /// State seeded from the static profiles and stored counters.
    pub fn load(today: &str) -> Self {
        let swipes = storage::load_json::<DailySwipes>(storage::DAILY_SWIPES_KEY).unwrap_or_default();
        let matches = storage::load_json::<Vec<u32>>(storage::USER_MATCHES_KEY).unwrap_or_default();
        Self::new(crate::data::profiles(), swipes, matches, today)
    }

    /// Write the counter and matches back to storage.
    pub fn persist(&self) {
        storage::save_json(storage::DAILY_SWIPES_KEY, &self.swipes);
        storage::save_json(storage::USER_MATCHES_KEY, &self.matches);
    }

    pub fn current(&self) -> Option<&MatchProfile> {
        self.queue.get(self.position)
    }

    /// The card shown behind the current one.
    pub fn upcoming(&self) -> Option<&MatchProfile> {
        self.queue.get(self.position + 1)
    }

    pub fn is_exhausted(&self) -> bool {
        self.position >= self.queue.len()
    }

    pub fn remaining_today(&self, today: &str) -> u32 {
        self.swipes.remaining(today)
    }

    pub fn can_swipe(&self, today: &str) -> bool {
        !self.is_exhausted() && self.remaining_today(today) > 0
    }

    /// Commit a swipe on the current card.
    ///
    /// # Errors
    ///
    /// [`SwipeError::QueueEmpty`] when no card is showing, and
    /// [`SwipeError::LimitReached`] when today's quota is spent.
    pub fn swipe(&mut self, direction: SwipeDirection, today: &str) -> Result<SwipeOutcome, SwipeError> {
        let profile = self.current().cloned().ok_or(SwipeError::QueueEmpty)?;
        self.swipes.record(today)?;
        self.position += 1;
        self.drag_offset = 0.0;
        self.dragging = false;

        let outcome = match direction {
            SwipeDirection::Left => SwipeOutcome::Passed { profile_id: profile.id },
            SwipeDirection::Right if profile.likes_you => {
                if !self.matches.contains(&profile.id) {
                    self.matches.push(profile.id);
                }
                SwipeOutcome::Matched { profile_id: profile.id, name: profile.name }
            }
            SwipeDirection::Right => SwipeOutcome::Liked { profile_id: profile.id },
        };
        self.last_outcome = Some(outcome.clone());
        Ok(outcome)
    }

    pub fn begin_drag(&mut self) {
        self.dragging = true;
        self.drag_offset = 0.0;
    }

    pub fn drag_to(&mut self, offset_px: f64) {
        if self.dragging {
            self.drag_offset = offset_px;
        }
    }

    /// Release the card: commit past the threshold, snap back otherwise.
    ///
    /// Returns `Ok(None)` when the card snaps back.
    ///
    /// # Errors
    ///
    /// Propagates [`MatchingState::swipe`] errors; the card snaps back first.
    pub fn end_drag(&mut self, today: &str) -> Result<Option<SwipeOutcome>, SwipeError> {
        let offset = self.drag_offset;
        self.dragging = false;
        self.drag_offset = 0.0;
        match classify_drag(offset) {
            Some(direction) => self.swipe(direction, today).map(Some),
            None => Ok(None),
        }
    }

    /// Rewind an exhausted queue. The daily counter is unaffected.
    pub fn restart(&mut self) {
        self.queue.retain(|p| !self.matches.contains(&p.id));
        self.position = 0;
        self.last_outcome = None;
    }

    /// Matched profiles, newest first.
    pub fn matched_profiles(&self) -> Vec<MatchProfile> {
        let all = crate::data::profiles();
        self.matches
            .iter()
            .rev()
            .filter_map(|id| all.iter().find(|p| p.id == *id).cloned())
            .collect()
    }
}
