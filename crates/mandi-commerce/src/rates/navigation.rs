//! Drill-down navigation state machine for mandi rates.

use crate::error::CommerceError;
use crate::rates::directory::{cities_in, mandis_in, MandiInfo, INDIAN_STATES};
use serde::{Deserialize, Serialize};

/// Levels of the drill-down.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum View {
    /// State list (initial).
    #[default]
    States,
    /// City list for the selected state.
    Cities,
    /// Mandi list for the selected city.
    Mandis,
    /// Product rates for the selected mandi (leaf).
    Products,
}

impl View {
    pub fn as_str(&self) -> &'static str {
        match self {
            View::States => "states",
            View::Cities => "cities",
            View::Mandis => "mandis",
            View::Products => "products",
        }
    }
}

/// Token tying an in-flight listing fetch to the navigation state that
/// issued it. Results whose ticket no longer matches are stale and must
/// be discarded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FetchTicket(u64);

/// Result of a back step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackStep {
    /// Moved up one level.
    Moved(View),
    /// Backed out of the root; the caller should leave the screen.
    ExitScreen,
}

/// Four-level drill-down: states → cities → mandis → products.
///
/// Strictly linear with no skip-ahead; back navigation is the exact
/// inverse of forward navigation and clears the selection of the level
/// being left. The system back gesture maps to [`RateNavigator::back`]
/// so the drill-down cannot be short-circuited.
#[derive(Debug, Clone)]
pub struct RateNavigator {
    view: View,
    selected_state: Option<String>,
    selected_city: Option<String>,
    selected_mandi: Option<MandiInfo>,
    fetch_epoch: u64,
}

impl Default for RateNavigator {
    fn default() -> Self {
        Self::new()
    }
}

impl RateNavigator {
    /// Start at the state list with nothing selected.
    pub fn new() -> Self {
        Self {
            view: View::States,
            selected_state: None,
            selected_city: None,
            selected_mandi: None,
            fetch_epoch: 0,
        }
    }

    pub fn view(&self) -> View {
        self.view
    }

    pub fn selected_state(&self) -> Option<&str> {
        self.selected_state.as_deref()
    }

    pub fn selected_city(&self) -> Option<&str> {
        self.selected_city.as_deref()
    }

    pub fn selected_mandi(&self) -> Option<&MandiInfo> {
        self.selected_mandi.as_ref()
    }

    /// Entries for the current list view. Empty in `Products`.
    pub fn current_entries(&self) -> Vec<String> {
        match self.view {
            View::States => INDIAN_STATES.iter().map(|s| s.to_string()).collect(),
            View::Cities => self
                .selected_state
                .as_deref()
                .map(cities_in)
                .unwrap_or(&[])
                .iter()
                .map(|c| c.to_string())
                .collect(),
            View::Mandis => self
                .selected_city
                .as_deref()
                .map(mandis_in)
                .unwrap_or_default()
                .into_iter()
                .map(|m| m.name)
                .collect(),
            View::Products => Vec::new(),
        }
    }

    /// Select a state. Valid only in the `States` view.
    pub fn select_state(&mut self, state: impl Into<String>) -> Result<(), CommerceError> {
        if self.view != View::States {
            return Err(self.invalid_transition(View::Cities));
        }
        self.selected_state = Some(state.into());
        self.view = View::Cities;
        Ok(())
    }

    /// Select a city. Valid only in the `Cities` view.
    pub fn select_city(&mut self, city: impl Into<String>) -> Result<(), CommerceError> {
        if self.view != View::Cities {
            return Err(self.invalid_transition(View::Mandis));
        }
        self.selected_city = Some(city.into());
        self.view = View::Mandis;
        Ok(())
    }

    /// Select a mandi by name. Valid only in the `Mandis` view; enters the
    /// leaf `Products` view and issues exactly one fetch ticket for it.
    pub fn select_mandi(&mut self, name: &str) -> Result<FetchTicket, CommerceError> {
        if self.view != View::Mandis {
            return Err(self.invalid_transition(View::Products));
        }
        let city = self.selected_city.as_deref().unwrap_or_default();
        let info = mandis_in(city)
            .into_iter()
            .find(|m| m.name == name)
            .unwrap_or(MandiInfo {
                name: name.to_string(),
                market_code: None,
            });
        self.selected_mandi = Some(info);
        self.view = View::Products;
        Ok(self.issue_ticket())
    }

    /// Step back one level, clearing the selection being left. From the
    /// root this exits the screen.
    pub fn back(&mut self) -> BackStep {
        match self.view {
            View::Products => {
                self.selected_mandi = None;
                self.view = View::Mandis;
                // Invalidate any fetch still in flight for the left view.
                self.fetch_epoch += 1;
                BackStep::Moved(View::Mandis)
            }
            View::Mandis => {
                self.selected_city = None;
                self.view = View::Cities;
                BackStep::Moved(View::Cities)
            }
            View::Cities => {
                self.selected_state = None;
                self.view = View::States;
                BackStep::Moved(View::States)
            }
            View::States => BackStep::ExitScreen,
        }
    }

    /// Pull-to-refresh: re-issue the products fetch. No-op outside the
    /// `Products` view.
    pub fn refresh(&mut self) -> Option<FetchTicket> {
        if self.view == View::Products {
            Some(self.issue_ticket())
        } else {
            None
        }
    }

    /// Whether a fetch result may be applied. Stale tickets (issued before
    /// a later navigation or refresh) and results arriving outside the
    /// `Products` view are rejected.
    pub fn accept(&self, ticket: FetchTicket) -> bool {
        self.view == View::Products && ticket.0 == self.fetch_epoch
    }

    /// Whether the leaf view should show the "coming soon" empty state
    /// instead of a product grid.
    pub fn coming_soon(&self) -> bool {
        self.view == View::Products
            && self
                .selected_mandi
                .as_ref()
                .is_some_and(|m| !m.has_live_data())
    }

    /// Header title for the current view.
    pub fn header_title(&self) -> String {
        match self.view {
            View::States => "Select State".to_string(),
            View::Cities => format!(
                "Cities in {}",
                self.selected_state.as_deref().unwrap_or_default()
            ),
            View::Mandis => format!(
                "Mandis in {}",
                self.selected_city.as_deref().unwrap_or_default()
            ),
            View::Products => self
                .selected_mandi
                .as_ref()
                .map(|m| m.name.clone())
                .unwrap_or_else(|| "Mandi Rates".to_string()),
        }
    }

    /// Breadcrumb of the selections made so far.
    pub fn breadcrumb(&self) -> String {
        let mut parts = Vec::new();
        if let Some(state) = &self.selected_state {
            parts.push(state.as_str());
        }
        if let Some(city) = &self.selected_city {
            parts.push(city.as_str());
        }
        if let Some(mandi) = &self.selected_mandi {
            parts.push(mandi.name.as_str());
        }
        parts.join(" \u{203a} ")
    }

    fn issue_ticket(&mut self) -> FetchTicket {
        self.fetch_epoch += 1;
        FetchTicket(self.fetch_epoch)
    }

    fn invalid_transition(&self, to: View) -> CommerceError {
        CommerceError::InvalidNavigation {
            from: self.view.as_str().to_string(),
            to: to.as_str().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drilled_down() -> (RateNavigator, FetchTicket) {
        let mut nav = RateNavigator::new();
        nav.select_state("Punjab").unwrap();
        nav.select_city("Amritsar").unwrap();
        let ticket = nav.select_mandi("Amritsar Main Mandi").unwrap();
        (nav, ticket)
    }

    #[test]
    fn test_initial_state() {
        let nav = RateNavigator::new();
        assert_eq!(nav.view(), View::States);
        assert_eq!(nav.selected_state(), None);
        assert_eq!(nav.current_entries().len(), 16);
    }

    #[test]
    fn test_forward_drill_down() {
        let mut nav = RateNavigator::new();
        nav.select_state("Punjab").unwrap();
        assert_eq!(nav.view(), View::Cities);
        assert_eq!(nav.selected_state(), Some("Punjab"));

        nav.select_city("Amritsar").unwrap();
        assert_eq!(nav.view(), View::Mandis);
        assert_eq!(nav.selected_city(), Some("Amritsar"));

        let ticket = nav.select_mandi("Amritsar Main Mandi").unwrap();
        assert_eq!(nav.view(), View::Products);
        assert_eq!(nav.selected_mandi().unwrap().name, "Amritsar Main Mandi");
        assert!(nav.accept(ticket));
    }

    #[test]
    fn test_no_skip_ahead() {
        let mut nav = RateNavigator::new();
        assert!(nav.select_city("Amritsar").is_err());
        assert!(nav.select_mandi("Amritsar Main Mandi").is_err());
        assert_eq!(nav.view(), View::States);
    }

    #[test]
    fn test_back_is_strict_inverse() {
        let (mut nav, _) = drilled_down();

        assert_eq!(nav.back(), BackStep::Moved(View::Mandis));
        assert_eq!(nav.selected_mandi(), None);
        assert_eq!(nav.selected_city(), Some("Amritsar"));
        assert_eq!(nav.selected_state(), Some("Punjab"));

        assert_eq!(nav.back(), BackStep::Moved(View::Cities));
        assert_eq!(nav.selected_city(), None);

        assert_eq!(nav.back(), BackStep::Moved(View::States));
        assert_eq!(nav.selected_state(), None);

        assert_eq!(nav.back(), BackStep::ExitScreen);
    }

    #[test]
    fn test_four_backs_from_products_exit() {
        let (mut nav, _) = drilled_down();
        let mut steps = Vec::new();
        for _ in 0..4 {
            steps.push(nav.back());
        }
        assert_eq!(steps[3], BackStep::ExitScreen);
    }

    #[test]
    fn test_unknown_state_yields_empty_city_list() {
        let mut nav = RateNavigator::new();
        nav.select_state("Narnia").unwrap();
        assert!(nav.current_entries().is_empty());
    }

    #[test]
    fn test_refresh_only_in_products() {
        let mut nav = RateNavigator::new();
        assert_eq!(nav.refresh(), None);
        nav.select_state("Punjab").unwrap();
        assert_eq!(nav.refresh(), None);
        nav.select_city("Amritsar").unwrap();
        assert_eq!(nav.refresh(), None);
        nav.select_mandi("Amritsar Main Mandi").unwrap();
        assert!(nav.refresh().is_some());
    }

    #[test]
    fn test_stale_ticket_after_refresh_rejected() {
        let (mut nav, first) = drilled_down();
        let second = nav.refresh().unwrap();
        assert!(!nav.accept(first));
        assert!(nav.accept(second));
    }

    #[test]
    fn test_stale_ticket_after_navigation_rejected() {
        let (mut nav, ticket) = drilled_down();
        nav.back();
        // Late resolution of the old fetch must not be applied.
        assert!(!nav.accept(ticket));
    }

    #[test]
    fn test_coming_soon_for_uncurated_city() {
        let mut nav = RateNavigator::new();
        nav.select_state("Punjab").unwrap();
        nav.select_city("Patiala").unwrap();
        nav.select_mandi("Patiala Main Mandi").unwrap();
        assert!(nav.coming_soon());

        let (nav, _) = drilled_down();
        assert!(!nav.coming_soon());
    }

    #[test]
    fn test_header_and_breadcrumb() {
        let (nav, _) = drilled_down();
        assert_eq!(nav.header_title(), "Amritsar Main Mandi");
        assert_eq!(
            nav.breadcrumb(),
            "Punjab \u{203a} Amritsar \u{203a} Amritsar Main Mandi"
        );
    }
}
