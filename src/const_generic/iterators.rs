pub mod total_order;
