pub(crate) mod odometer;
pub mod total_order;
