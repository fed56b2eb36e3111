//! Route table and navigation guards.
//!
//! DESIGN
//! ======
//! Guards are plain functions over a [`Flags`] snapshot so the redirect rules
//! can be tested without a router. `util::auth` wires them into effects.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

use crate::state::auth::AuthState;
use crate::state::onboarding::OnboardingState;

/// Every page the router knows about.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AppRoute {
    Home,
    About,
    Pricing,
    Contact,
    Properties,
    PropertyDetail,
    Login,
    Register,
    ChoosePath,
    LivingPlan,
    Dashboard,
    Matching,
    Messages,
    Settings,
}

/// Who may see a route.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Access {
    /// Anyone.
    Public,
    /// Signed-out visitors only (login/register).
    Guest,
    /// Signed in; onboarding may be incomplete.
    Onboarding,
    /// Signed in with onboarding complete.
    Member,
}

impl AppRoute {
    /// Path the router mounts the page at. `PropertyDetail` is the listing prefix.
    pub fn path(self) -> &'static str {
        match self {
            Self::Home => "/",
            Self::About => "/about",
            Self::Pricing => "/pricing",
            Self::Contact => "/contact",
            Self::Properties | Self::PropertyDetail => "/properties",
            Self::Login => "/login",
            Self::Register => "/register",
            Self::ChoosePath => "/choose-path",
            Self::LivingPlan => "/living-plan",
            Self::Dashboard => "/dashboard",
            Self::Matching => "/matching",
            Self::Messages => "/messages",
            Self::Settings => "/settings",
        }
    }

    pub fn access(self) -> Access {
        match self {
            Self::Home | Self::About | Self::Pricing | Self::Contact | Self::Properties | Self::PropertyDetail => {
                Access::Public
            }
            Self::Login | Self::Register => Access::Guest,
            Self::ChoosePath | Self::LivingPlan => Access::Onboarding,
            Self::Dashboard | Self::Matching | Self::Messages | Self::Settings => Access::Member,
        }
    }
}

/// Link to a single listing.
pub fn property_href(id: u32) -> String {
    format!("{}/{id}", AppRoute::PropertyDetail.path())
}

/// Snapshot of the storage flags guards depend on.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Flags {
    pub signed_in: bool,
    pub onboarding: OnboardingState,
}

impl Flags {
    pub fn new(auth: &AuthState, onboarding: OnboardingState) -> Self {
        Self { signed_in: auth.is_signed_in(), onboarding }
    }
}

/// Where a user with these flags should land next.
pub fn next_step(flags: Flags) -> AppRoute {
    if !flags.signed_in {
        return AppRoute::Login;
    }
    match flags.onboarding.user_path {
        None => AppRoute::ChoosePath,
        Some(_) if !flags.onboarding.is_complete() => AppRoute::LivingPlan,
        Some(_) => AppRoute::Dashboard,
    }
}

/// Redirect target for visiting `route` with `flags`, or `None` to stay.
pub fn guard_redirect(route: AppRoute, flags: Flags) -> Option<AppRoute> {
    match route.access() {
        Access::Public => None,
        Access::Guest => flags.signed_in.then(|| next_step(flags)),
        Access::Onboarding => {
            if !flags.signed_in {
                Some(AppRoute::Login)
            } else if route == AppRoute::LivingPlan && flags.onboarding.user_path.is_none() {
                Some(AppRoute::ChoosePath)
            } else {
                None
            }
        }
        Access::Member => match next_step(flags) {
            AppRoute::Dashboard => None,
            step => Some(step),
        },
    }
}
