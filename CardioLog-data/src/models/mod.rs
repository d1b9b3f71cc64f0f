pub mod blood_pressure;

pub use blood_pressure::{JournalDocument, StoredReading, DEFAULT_USER_NAME};
