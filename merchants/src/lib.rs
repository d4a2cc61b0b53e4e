//! Partner merchants: businesses offering a service (free coffee,
//! restroom, ...) to people in need, browsed on the public map.

pub mod contracts;
pub mod data;

pub use contracts::MerchantSubsystem;
