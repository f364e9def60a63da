pub mod confirmation;
pub mod csv;
