/// Device drivers.
pub mod keyboard;
