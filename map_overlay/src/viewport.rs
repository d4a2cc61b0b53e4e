use crate::filters::FilterState;
use crate::overlay::MapOverlay;
use maraudes::data::OutreachAction;
use merchants::data::Merchant;
use shared_kernel::geo::GeoPoint;

/// Bordeaux city center, where the public map opens.
pub const DEFAULT_CENTER: GeoPoint = GeoPoint {
    latitude: 44.8378,
    longitude: -0.5792,
};
pub const DEFAULT_ZOOM: u8 = 12;
const FOCUS_ZOOM: u8 = 15;

/// State of the public map page.
///
/// Today's actions, the full action list and the merchant list arrive from
/// independent fetches; whichever lands re-applies the filters and
/// rebuilds the overlay. A late response repeats the rebuild with more
/// data, never with stale layers.
pub struct MapViewport {
    center: GeoPoint,
    zoom: u8,
    today_actions: Vec<OutreachAction>,
    all_actions: Vec<OutreachAction>,
    merchants: Vec<Merchant>,
    filters: FilterState,
    overlay: MapOverlay,
}

impl Default for MapViewport {
    fn default() -> Self {
        MapViewport {
            center: DEFAULT_CENTER,
            zoom: DEFAULT_ZOOM,
            today_actions: Vec::new(),
            all_actions: Vec::new(),
            merchants: Vec::new(),
            filters: FilterState::default(),
            overlay: MapOverlay::new(),
        }
    }
}

impl MapViewport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn center(&self) -> GeoPoint {
        self.center
    }

    pub fn zoom(&self) -> u8 {
        self.zoom
    }

    pub fn overlay(&self) -> &MapOverlay {
        &self.overlay
    }

    pub fn filters(&self) -> &FilterState {
        &self.filters
    }

    pub fn today_actions(&self) -> &[OutreachAction] {
        &self.today_actions
    }

    pub fn active_today_count(&self) -> usize {
        self.today_actions.len()
    }

    /// Sidebar list: the fetched actions that pass the current filters.
    pub fn filtered_actions(&self) -> Vec<&OutreachAction> {
        self.all_actions
            .iter()
            .filter(|action| self.filters.action_passes(action))
            .collect()
    }

    pub fn filtered_merchants(&self) -> Vec<&Merchant> {
        self.merchants
            .iter()
            .filter(|merchant| self.filters.merchant_passes(merchant))
            .collect()
    }

    pub fn set_today_actions(&mut self, actions: Vec<OutreachAction>) {
        self.today_actions = actions;
        self.rebuild();
    }

    pub fn set_actions(&mut self, actions: Vec<OutreachAction>) {
        self.all_actions = actions;
        self.rebuild();
    }

    pub fn set_merchants(&mut self, merchants: Vec<Merchant>) {
        self.merchants = merchants;
        self.rebuild();
    }

    pub fn set_filters(&mut self, filters: FilterState) {
        self.filters = filters;
        self.rebuild();
    }

    /// Jumps to a location, e.g. when a card in the sidebar is clicked.
    pub fn center_on(&mut self, point: GeoPoint, zoom: Option<u8>) {
        self.center = point;
        self.zoom = zoom.unwrap_or(FOCUS_ZOOM);
    }

    fn rebuild(&mut self) {
        self.overlay
            .rebuild(&self.all_actions, &self.merchants, &self.filters);
    }
}
