pub mod draft;
pub mod forms;
pub mod notification;
pub mod payment;
pub mod ports;
pub mod validate;
