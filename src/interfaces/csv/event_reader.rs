use crate::domain::event::SessionEvent;
use crate::error::{OrderError, Result};
use std::io::Read;

/// Reads session events from a CSV source.
///
/// This reader wraps `csv::Reader` and provides an iterator over
/// `Result<SessionEvent>`, so one malformed row can be reported without
/// abandoning the rest of the script. Whitespace trimming and flexible
/// record lengths are handled automatically.
pub struct EventReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> EventReader<R> {
    /// Creates a new `EventReader` from any `Read` source (e.g., File, Stdin).
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(source);
        Self { reader }
    }

    /// Returns an iterator that lazily reads and deserializes events.
    pub fn events(self) -> impl Iterator<Item = Result<SessionEvent>> {
        self.reader
            .into_deserialize()
            .map(|result| result.map_err(OrderError::from))
    }
}
