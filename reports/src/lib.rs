//! Post-outreach reports: beneficiaries helped, supplies distributed,
//! incidents raised, and the draft → submitted → validated workflow.

pub mod contracts;
pub mod data;

pub use contracts::ReportSubsystem;
