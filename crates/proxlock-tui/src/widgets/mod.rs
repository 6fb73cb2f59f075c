mod features_table;
mod header;
mod home;
mod pricing;
mod status_bar;

pub use features_table::FeaturesTableWidget;
pub use header::HeaderWidget;
pub use home::HomeWidget;
pub use pricing::PricingWidget;
pub use status_bar::StatusBarWidget;
