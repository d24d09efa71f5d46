pub mod shipment_form;
pub mod widget;

pub use shipment_form::ShipmentForm;
pub use widget::DashboardWidget;
