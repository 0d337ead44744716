mod dashboard;
mod locality_option;
mod product_analysis;

pub use dashboard::DashboardView;
pub use locality_option::LocalityOption;
pub use product_analysis::ProductAnalysis;
