//! Onboarding choices: the user's path and living plan.
//!
//! SYSTEM CONTEXT
//! ==============
//! Both choices are scalar flags in `localStorage` (`userPath`,
//! `livingPlan`). Route guards read them to decide which page comes next.

#[cfg(test)]
#[path = "onboarding_test.rs"]
mod onboarding_test;

use crate::util::storage;

/// What the user came to do.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UserPath {
    /// Find people to live with (swipe matching).
    Roommate,
    /// Find a room or apartment.
    Seeker,
    /// List a property.
    Host,
}

impl UserPath {
    pub const ALL: [UserPath; 3] = [UserPath::Roommate, UserPath::Seeker, UserPath::Host];

    /// Value stored under `userPath`.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Roommate => "roommate",
            Self::Seeker => "seeker",
            Self::Host => "host",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.as_str() == raw.trim())
    }

    pub fn title(self) -> &'static str {
        match self {
            Self::Roommate => "Find a roommate",
            Self::Seeker => "Find a place",
            Self::Host => "List a property",
        }
    }

    pub fn blurb(self) -> &'static str {
        match self {
            Self::Roommate => "Swipe through compatible people and match with your next roommate.",
            Self::Seeker => "Browse rooms and apartments that fit your budget.",
            Self::Host => "Have a spare room? Reach renters looking for a home like yours.",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Self::Roommate => "👥",
            Self::Seeker => "🔑",
            Self::Host => "🏠",
        }
    }

    /// Only roommate seekers pick a living plan.
    pub fn needs_living_plan(self) -> bool {
        matches!(self, Self::Roommate)
    }
}

/// Pricing tier chosen on the living-plan page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LivingPlan {
    Basic,
    Comfort,
    Elite,
}

impl LivingPlan {
    pub const ALL: [LivingPlan; 3] = [LivingPlan::Basic, LivingPlan::Comfort, LivingPlan::Elite];

    /// Value stored under `livingPlan`.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Basic => "basic",
            Self::Comfort => "comfort",
            Self::Elite => "elite",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.as_str() == raw.trim())
    }

    pub fn title(self) -> &'static str {
        match self {
            Self::Basic => "Basic",
            Self::Comfort => "Comfort",
            Self::Elite => "Elite",
        }
    }

    /// Monthly price in whole currency units.
    pub fn monthly_price(self) -> u32 {
        match self {
            Self::Basic => 0,
            Self::Comfort => 15,
            Self::Elite => 29,
        }
    }

    pub fn features(self) -> &'static [&'static str] {
        match self {
            Self::Basic => &["20 swipes per day", "Basic profile", "Message your matches"],
            Self::Comfort => &[
                "Everything in Basic",
                "See who liked you",
                "Priority listing placement",
                "Verified badge",
            ],
            Self::Elite => &[
                "Everything in Comfort",
                "Background-checked matches",
                "Dedicated move-in concierge",
                "Lease review support",
            ],
        }
    }

    /// Highlighted tier on pricing cards.
    pub fn is_popular(self) -> bool {
        matches!(self, Self::Comfort)
    }
}

/// Persisted onboarding choices.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct OnboardingState {
    pub user_path: Option<UserPath>,
    pub living_plan: Option<LivingPlan>,
}

impl OnboardingState {
    /// Build state from raw stored values; unknown values read as unset.
    pub fn from_stored(user_path: Option<&str>, living_plan: Option<&str>) -> Self {
        Self {
            user_path: user_path.and_then(UserPath::parse),
            living_plan: living_plan.and_then(LivingPlan::parse),
        }
    }

    pub fn load() -> Self {
        Self::from_stored(
            storage::load_string(storage::USER_PATH_KEY).as_deref(),
            storage::load_string(storage::LIVING_PLAN_KEY).as_deref(),
        )
    }

    /// Record a path choice and persist it.
    pub fn choose_path(&mut self, path: UserPath) {
        self.user_path = Some(path);
        storage::save_string(storage::USER_PATH_KEY, path.as_str());
    }

    /// Record a plan choice and persist it.
    pub fn choose_plan(&mut self, plan: LivingPlan) {
        self.living_plan = Some(plan);
        storage::save_string(storage::LIVING_PLAN_KEY, plan.as_str());
    }

    /// Onboarding is done once a path is chosen, plus a plan when the path needs one.
    pub fn is_complete(&self) -> bool {
        match self.user_path {
            None => false,
            Some(path) => !path.needs_living_plan() || self.living_plan.is_some(),
        }
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
