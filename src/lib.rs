pub mod domain;
pub mod frameworks;
pub mod interface_adapters;
pub mod use_cases;

pub use frameworks::app::run;
pub use frameworks::config::WidgetConfig;
pub use interface_adapters::controller::BookingWidget;
