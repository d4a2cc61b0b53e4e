pub mod configuration;
pub mod day_of_week;
pub mod entity_ids;
pub mod geo;
pub mod http_client;
pub mod ids;
pub mod non_empty_string;
pub mod pagination;
pub mod tracing;
