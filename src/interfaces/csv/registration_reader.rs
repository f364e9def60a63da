use crate::domain::draft::RegistrationDraft;
use crate::error::{RegistrationError, Result};
use std::io::Read;

/// Reads registration drafts from a CSV source whose headers are the form
/// field names (`firstName`, `lastName`, …).
///
/// Wraps `csv::Reader` with whitespace trimming and flexible record
/// lengths, yielding an iterator of `Result<RegistrationDraft>`.
pub struct RegistrationReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> RegistrationReader<R> {
    /// Creates a reader from any `Read` source (e.g., File, Stdin).
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(source);
        Self { reader }
    }

    /// Lazily deserializes drafts, so large batches stream without being
    /// loaded wholesale.
    pub fn drafts(self) -> impl Iterator<Item = Result<RegistrationDraft>> {
        self.reader
            .into_deserialize()
            .map(|result| result.map_err(RegistrationError::from))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reader_valid_stream() {
        let data = "firstName, lastName, email, phone, date, timeSlot, agreeTerms, agreeCancel\n\
                    Jane, Doe, jane@example.com, , 2024-06-01, 10-12, true, true\n\
                    John, Smith, , 555-0100, 2024-06-08, 1-3, true, true";
        let reader = RegistrationReader::new(data.as_bytes());
        let results: Vec<Result<RegistrationDraft>> = reader.drafts().collect();

        assert_eq!(results.len(), 2);
        let first = results[0].as_ref().unwrap();
        assert_eq!(first.first_name, "Jane");
        assert_eq!(first.time_slot, "10-12");
        let second = results[1].as_ref().unwrap();
        assert_eq!(second.phone, "555-0100");
    }

    #[test]
    fn test_reader_malformed_boolean() {
        let data = "firstName, lastName, email, date, timeSlot, agreeTerms, agreeCancel\n\
                    Jane, Doe, jane@example.com, 2024-06-01, 10-12, yes please, true";
        let reader = RegistrationReader::new(data.as_bytes());
        let results: Vec<Result<RegistrationDraft>> = reader.drafts().collect();

        assert!(results[0].is_err());
    }
}
