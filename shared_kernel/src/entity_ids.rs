//! Identifier newtypes shared across subsystems.
//!
//! Backend-issued ids travel as opaque strings; waypoint ids are minted
//! client-side when a stop is added to a route draft, before the action
//! is ever saved.

use crate::string_key;
use crate::uuid_key;

string_key!(ActionId);
string_key!(AssociationId);
string_key!(DistributionTypeId);
string_key!(MerchantId);
string_key!(ReportId);
string_key!(UserId);

uuid_key!(WaypointId);
