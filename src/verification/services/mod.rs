mod chart_filter;

pub use chart_filter::ChartFilter;
