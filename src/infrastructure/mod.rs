pub mod flow;
pub mod mock;
pub mod paypal;
