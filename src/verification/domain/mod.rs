pub mod chart;
pub mod chart_index;
pub mod outcome;
pub mod report;

pub use chart::ChartName;
pub use chart_index::ChartIndex;
pub use outcome::ChartOutcome;
pub use report::VerificationReport;
