use itertools::Itertools;
use maraudes::data::{ActionStatus, OutreachAction};
use merchants::data::{Merchant, MerchantCategory};
use shared_kernel::day_of_week::{DayOfWeek, ALL_DAYS};
use std::collections::BTreeSet;

/// What the visitor currently wants to see on the map.
///
/// An empty day set means "no day filter": every action passes regardless
/// of schedule.
#[derive(Clone, Debug, PartialEq)]
pub struct FilterState {
    pub show_maraudes: bool,
    pub show_merchants: bool,
    pub maraude_status: Option<ActionStatus>,
    pub merchant_category: Option<MerchantCategory>,
    pub radius_km: f64,
    pub selected_days: BTreeSet<DayOfWeek>,
}

impl Default for FilterState {
    /// The panel opens with everything visible and today preselected.
    fn default() -> Self {
        FilterState {
            show_maraudes: true,
            show_merchants: true,
            maraude_status: None,
            merchant_category: None,
            radius_km: 10.0,
            selected_days: BTreeSet::from([DayOfWeek::today()]),
        }
    }
}

impl FilterState {
    /// Status equality plus the day predicate.
    pub fn action_passes(&self, action: &OutreachAction) -> bool {
        if let Some(status) = self.maraude_status {
            if action.status != status {
                return false;
            }
        }
        self.day_filter_passes(action)
    }

    /// A recurring action matches on its fixed weekday, a one-off on the
    /// weekday of its date. An action whose schedule resolves to neither
    /// is excluded whenever a day filter is active.
    fn day_filter_passes(&self, action: &OutreachAction) -> bool {
        if self.selected_days.is_empty() {
            return true;
        }
        match action.schedule().day() {
            Some(day) => self.selected_days.contains(&day),
            None => false,
        }
    }

    /// Inactive merchants never show; a category filter must match exactly.
    pub fn merchant_passes(&self, merchant: &Merchant) -> bool {
        if !merchant.is_active {
            return false;
        }
        match self.merchant_category {
            Some(category) => merchant.category == category,
            None => true,
        }
    }
}

type Observer = Box<dyn FnMut(&FilterState) + Send>;

/// Owns the filter state and an explicit observer list. Every mutation
/// notifies observers synchronously, in registration order, with a
/// snapshot of the new state.
#[derive(Default)]
pub struct FilterPanel {
    state: FilterState,
    observers: Vec<Observer>,
}

impl FilterPanel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_state(state: FilterState) -> Self {
        FilterPanel {
            state,
            observers: Vec::new(),
        }
    }

    pub fn state(&self) -> &FilterState {
        &self.state
    }

    pub fn on_change(&mut self, observer: impl FnMut(&FilterState) + Send + 'static) {
        self.observers.push(Box::new(observer));
    }

    pub fn toggle_day(&mut self, day: DayOfWeek) {
        if !self.state.selected_days.remove(&day) {
            self.state.selected_days.insert(day);
        }
        self.notify();
    }

    pub fn select_all_days(&mut self) {
        self.state.selected_days = ALL_DAYS.into_iter().collect();
        self.notify();
    }

    /// Clearing the selection means "no day filter".
    pub fn clear_days(&mut self) {
        self.state.selected_days.clear();
        self.notify();
    }

    pub fn select_today(&mut self) {
        self.state.selected_days = BTreeSet::from([DayOfWeek::today()]);
        self.notify();
    }

    pub fn set_status_filter(&mut self, status: Option<ActionStatus>) {
        self.state.maraude_status = status;
        self.notify();
    }

    pub fn set_category_filter(&mut self, category: Option<MerchantCategory>) {
        self.state.merchant_category = category;
        self.notify();
    }

    pub fn set_show_maraudes(&mut self, show: bool) {
        self.state.show_maraudes = show;
        self.notify();
    }

    pub fn set_show_merchants(&mut self, show: bool) {
        self.state.show_merchants = show;
        self.notify();
    }

    pub fn set_radius_km(&mut self, radius_km: f64) {
        self.state.radius_km = radius_km;
        self.notify();
    }

    pub fn selected_days_label(&self) -> String {
        if self.state.selected_days.is_empty() {
            return "Tous les jours".to_string();
        }
        self.state
            .selected_days
            .iter()
            .map(|day| day.french_name())
            .join(", ")
    }

    fn notify(&mut self) {
        let snapshot = self.state.clone();
        for observer in &mut self.observers {
            observer(&snapshot);
        }
    }
}
