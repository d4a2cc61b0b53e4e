//! Reverse geocoding against a Nominatim instance, used to backfill the
//! address of a picked start point or waypoint.

pub mod config;
pub mod reverse;

pub use reverse::ReverseGeocoder;
