//! Shared read-only fixture data and form model for the Havenly UI.
//!
//! Every "result" the app shows comes from here: the plan finder's canned
//! matches, the chart series, the dashboard metrics, and the home-page
//! counter targets. Keeping them in one crate stops the views from growing
//! private copies, and lets the validation and animation logic be tested
//! natively without a browser.

pub mod charts;
pub mod criteria;
pub mod dashboard;
pub mod plans;
pub mod stats;

pub use criteria::SearchCriteria;
pub use plans::{sample_results, MetalTier, PlanRecord};
