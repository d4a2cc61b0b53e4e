//! Route drafting for an outreach action: an ordered waypoint list with
//! distance/duration estimates and the coverage polygons drawn on the map.

use crate::data::Waypoint;
use itertools::Itertools;
use shared_kernel::entity_ids::WaypointId;
use shared_kernel::geo::{self, GeoPoint};
use std::f64::consts::FRAC_PI_2;

/// Half-width of the corridor drawn around each route segment.
pub const COVERAGE_RADIUS_M: f64 = 150.0;

/// Walking pace heuristic: 12 minutes per kilometer, about 5 km/h.
const WALKING_MINUTES_PER_KM: f64 = 12.0;

/// Quadrilateral flanking one route segment, corners in draw order.
///
/// This is deliberately coarse: no union across segments and no handling
/// of self-intersection at sharp turns. It reads as a "zone of operation"
/// overlay, not an exact coverage computation.
#[derive(Clone, Debug, PartialEq)]
pub struct CoverageZone {
    pub corners: [GeoPoint; 4],
}

/// The walking route of one action: a start point plus ordered stops.
///
/// Mutations keep `order` a dense `0..n` sequence, so the list can be sent
/// to the backend as-is.
#[derive(Clone, Debug)]
pub struct RoutePlan {
    start: GeoPoint,
    waypoints: Vec<Waypoint>,
}

impl RoutePlan {
    pub fn new(start: GeoPoint) -> Self {
        RoutePlan {
            start,
            waypoints: Vec::new(),
        }
    }

    /// Adopts waypoints as stored by the backend: sorted by their `order`
    /// field, then renumbered densely in case the stored sequence has gaps.
    pub fn with_waypoints(start: GeoPoint, mut waypoints: Vec<Waypoint>) -> Self {
        waypoints.sort_by_key(|waypoint| waypoint.order);
        let mut plan = RoutePlan { start, waypoints };
        plan.renumber();
        plan
    }

    pub fn start(&self) -> GeoPoint {
        self.start
    }

    pub fn waypoints(&self) -> &[Waypoint] {
        &self.waypoints
    }

    pub fn into_waypoints(self) -> Vec<Waypoint> {
        self.waypoints
    }

    pub fn add_stop(
        &mut self,
        point: GeoPoint,
        name: Option<String>,
        address: Option<String>,
    ) -> WaypointId {
        let id = WaypointId::new();
        self.waypoints.push(Waypoint {
            id,
            latitude: point.latitude,
            longitude: point.longitude,
            address,
            name,
            order: self.waypoints.len() as u32,
        });
        id
    }

    /// Removes a stop and closes the gap in the numbering.
    pub fn remove_stop(&mut self, id: WaypointId) -> bool {
        let before = self.waypoints.len();
        self.waypoints.retain(|waypoint| waypoint.id != id);
        let removed = self.waypoints.len() != before;
        if removed {
            self.renumber();
        }
        removed
    }

    /// Swaps the stop with its predecessor. No-op on the first stop.
    pub fn move_up(&mut self, id: WaypointId) -> bool {
        match self.position_of(id) {
            Some(index) if index > 0 => {
                self.waypoints.swap(index - 1, index);
                self.renumber();
                true
            }
            _ => false,
        }
    }

    /// Swaps the stop with its successor. No-op on the last stop.
    pub fn move_down(&mut self, id: WaypointId) -> bool {
        match self.position_of(id) {
            Some(index) if index + 1 < self.waypoints.len() => {
                self.waypoints.swap(index, index + 1);
                self.renumber();
                true
            }
            _ => false,
        }
    }

    /// Start point followed by every stop, in walking order.
    pub fn path(&self) -> Vec<GeoPoint> {
        std::iter::once(self.start)
            .chain(self.waypoints.iter().map(Waypoint::point))
            .collect()
    }

    /// Cumulative great-circle distance over the walking path. Zero stops
    /// means exactly zero.
    pub fn total_distance_km(&self) -> f64 {
        self.path()
            .into_iter()
            .tuple_windows()
            .map(|(from, to)| geo::haversine_km(from, to))
            .sum()
    }

    /// Walking-pace estimate, rounded to whole minutes.
    pub fn estimated_duration_minutes(&self) -> u32 {
        (self.total_distance_km() * WALKING_MINUTES_PER_KM).round() as u32
    }

    /// One quadrilateral per consecutive point pair, offset perpendicular
    /// to the segment bearing by the coverage radius.
    pub fn coverage_zones(&self) -> Vec<CoverageZone> {
        self.path()
            .into_iter()
            .tuple_windows()
            .map(|(from, to)| {
                let bearing = geo::initial_bearing(from, to);
                let left = bearing - FRAC_PI_2;
                let right = bearing + FRAC_PI_2;
                CoverageZone {
                    corners: [
                        geo::offset_by(from, left, COVERAGE_RADIUS_M),
                        geo::offset_by(to, left, COVERAGE_RADIUS_M),
                        geo::offset_by(to, right, COVERAGE_RADIUS_M),
                        geo::offset_by(from, right, COVERAGE_RADIUS_M),
                    ],
                }
            })
            .collect()
    }

    fn position_of(&self, id: WaypointId) -> Option<usize> {
        self.waypoints.iter().position(|waypoint| waypoint.id == id)
    }

    fn renumber(&mut self) {
        for (index, waypoint) in self.waypoints.iter_mut().enumerate() {
            waypoint.order = index as u32;
        }
    }
}
