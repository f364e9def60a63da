pub mod registration_reader;
