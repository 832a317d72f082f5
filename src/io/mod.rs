pub mod chart;
pub mod demand;
pub mod reporting;
