use crate::filters::FilterState;
use crate::markers::{self, MaraudeMarker, MerchantMarker};
use maraudes::data::{OutreachAction, Waypoint};
use maraudes::route::RoutePlan;
use merchants::data::Merchant;
use shared_kernel::geo::GeoPoint;

/// Coverage quadrilateral ready for the widget's polygon layer.
#[derive(Clone, Debug, PartialEq)]
pub struct PolygonOverlay {
    pub corners: Vec<GeoPoint>,
}

/// Walking path polyline: start point, then each stop in order.
#[derive(Clone, Debug, PartialEq)]
pub struct RouteLine {
    pub points: Vec<GeoPoint>,
}

/// The widget-facing layer groups. On every data or filter change the
/// whole thing is cleared and rebuilt from the current records; there is
/// no incremental diffing.
#[derive(Debug, Default)]
pub struct MapOverlay {
    maraude_markers: Vec<MaraudeMarker>,
    merchant_markers: Vec<MerchantMarker>,
    coverage_zones: Vec<PolygonOverlay>,
    route_lines: Vec<RouteLine>,
}

impl MapOverlay {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn maraude_markers(&self) -> &[MaraudeMarker] {
        &self.maraude_markers
    }

    pub fn merchant_markers(&self) -> &[MerchantMarker] {
        &self.merchant_markers
    }

    pub fn coverage_zones(&self) -> &[PolygonOverlay] {
        &self.coverage_zones
    }

    pub fn route_lines(&self) -> &[RouteLine] {
        &self.route_lines
    }

    pub fn clear(&mut self) {
        self.maraude_markers.clear();
        self.merchant_markers.clear();
        self.coverage_zones.clear();
        self.route_lines.clear();
    }

    #[tracing::instrument(skip_all, level = "debug")]
    pub fn rebuild(
        &mut self,
        actions: &[OutreachAction],
        merchants: &[Merchant],
        filters: &FilterState,
    ) {
        self.clear();

        if filters.show_maraudes {
            for action in actions.iter().filter(|action| filters.action_passes(action)) {
                self.maraude_markers.push(markers::maraude_marker(action));
                self.add_route_layers(action);
            }
        }

        if filters.show_merchants {
            for merchant in merchants
                .iter()
                .filter(|merchant| filters.merchant_passes(merchant))
            {
                self.merchant_markers.push(markers::merchant_marker(merchant));
            }
        }
    }

    fn add_route_layers(&mut self, action: &OutreachAction) {
        let waypoints: &[Waypoint] = action.waypoints.as_deref().unwrap_or_default();
        if waypoints.is_empty() {
            return;
        }
        let plan = RoutePlan::with_waypoints(action.start_point(), waypoints.to_vec());
        self.route_lines.push(RouteLine { points: plan.path() });
        self.coverage_zones.extend(
            plan.coverage_zones()
                .into_iter()
                .map(|zone| PolygonOverlay {
                    corners: zone.corners.to_vec(),
                }),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    fn action_with_waypoints() -> OutreachAction {
        serde_json::from_value(serde_json::json!({
            "id": "action-1",
            "title": "Maraude Saint-Michel",
            "latitude": 44.8378,
            "longitude": -0.5792,
            "isRecurring": true,
            "isActive": true,
            "dayOfWeek": 3,
            "startTime": "19:00",
            "status": "planned",
            "participantsCount": 4,
            "beneficiariesHelped": 0,
            "createdBy": "user-1",
            "associationId": "assoc-1",
            "waypoints": [
                {"id": "1f0b2c64-0000-0000-0000-000000000001", "latitude": 44.8400, "longitude": -0.5800, "order": 0},
                {"id": "1f0b2c64-0000-0000-0000-000000000002", "latitude": 44.8452, "longitude": -0.5736, "order": 1}
            ]
        }))
        .unwrap()
    }

    fn merchant(active: bool) -> Merchant {
        serde_json::from_value(serde_json::json!({
            "id": "merchant-1",
            "name": "Café du Marché",
            "category": "cafe",
            "services": [],
            "latitude": 44.8412,
            "longitude": -0.5721,
            "address": "12 rue Sainte-Catherine, Bordeaux",
            "isVerified": false,
            "isActive": active
        }))
        .unwrap()
    }

    fn no_day_filter() -> FilterState {
        FilterState {
            selected_days: BTreeSet::new(),
            ..Default::default()
        }
    }

    #[test]
    fn rebuild_populates_all_layer_groups() {
        let mut overlay = MapOverlay::new();
        overlay.rebuild(
            &[action_with_waypoints()],
            &[merchant(true)],
            &no_day_filter(),
        );

        assert_eq!(overlay.maraude_markers().len(), 1);
        assert_eq!(overlay.merchant_markers().len(), 1);
        // start → wp1 → wp2 gives two segments, one zone each.
        assert_eq!(overlay.coverage_zones().len(), 2);
        assert_eq!(overlay.route_lines().len(), 1);
        assert_eq!(overlay.route_lines()[0].points.len(), 3);
    }

    #[test]
    fn rebuild_starts_from_scratch_every_time() {
        let mut overlay = MapOverlay::new();
        let actions = [action_with_waypoints()];
        let merchants = [merchant(true)];
        let filters = no_day_filter();

        overlay.rebuild(&actions, &merchants, &filters);
        overlay.rebuild(&actions, &merchants, &filters);

        assert_eq!(overlay.maraude_markers().len(), 1);
        assert_eq!(overlay.merchant_markers().len(), 1);
        assert_eq!(overlay.coverage_zones().len(), 2);
    }

    #[test]
    fn hidden_layers_stay_empty() {
        let mut overlay = MapOverlay::new();
        let mut filters = no_day_filter();
        filters.show_maraudes = false;
        filters.show_merchants = false;

        overlay.rebuild(&[action_with_waypoints()], &[merchant(true)], &filters);

        assert!(overlay.maraude_markers().is_empty());
        assert!(overlay.merchant_markers().is_empty());
        assert!(overlay.coverage_zones().is_empty());
        assert!(overlay.route_lines().is_empty());
    }

    #[test]
    fn inactive_merchants_are_filtered_out() {
        let mut overlay = MapOverlay::new();
        overlay.rebuild(&[], &[merchant(false)], &no_day_filter());
        assert!(overlay.merchant_markers().is_empty());
    }

    #[test]
    fn action_without_waypoints_draws_no_route_layers() {
        let mut action = action_with_waypoints();
        action.waypoints = None;
        let mut overlay = MapOverlay::new();
        overlay.rebuild(&[action], &[], &no_day_filter());

        assert_eq!(overlay.maraude_markers().len(), 1);
        assert!(overlay.route_lines().is_empty());
        assert!(overlay.coverage_zones().is_empty());
    }
}
