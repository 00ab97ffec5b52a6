//! Entity generators for test data.
//!
//! - [`CampaignGenerator`]: Generate campaigns with catch-phrase names,
//!   random counters, and a seed palette color

pub mod campaign;

pub use campaign::CampaignGenerator;
