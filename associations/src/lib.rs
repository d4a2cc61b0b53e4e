//! Associations operating outreach actions: admin-facing CRUD and the
//! aggregate stats screen, with client-side contact-field validation.

pub mod contracts;
pub mod data;
pub mod fields;

pub use contracts::AssociationSubsystem;
