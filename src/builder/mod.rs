//! Builder API for configuring a gradebook.
//!
//! The builder controls which date formats `add` accepts, which clock
//! stamps history entries, and which records the gradebook starts with.

pub mod error;

pub use error::BuildError;

use crate::core::{is_valid_format, Clock, DateFormats, Grade, SystemClock, ISO_DATE_FORMAT};
use crate::Gradebook;
use tracing::debug;

/// A record to add when the gradebook is built.
struct SeedRecord {
    name: String,
    faculty_number: String,
    subject: String,
    grade: Grade,
    raw_date: String,
}

/// Builder for constructing a gradebook with a fluent API.
///
/// # Example
///
/// ```rust
/// use gradebook::GradebookBuilder;
///
/// let book = GradebookBuilder::new()
///     .accept_date_format("%d.%m.%Y")
///     .seed("John Doe", "1 23456", "Math", "A", "01.05.2023")
///     .select_last_seed()
///     .build()
///     .unwrap();
///
/// assert_eq!(book.records().len(), 1);
/// assert_eq!(book.selected().unwrap().name, "John Doe");
/// assert_eq!(book.history().len(), 1);
/// ```
pub struct GradebookBuilder {
    date_formats: Vec<String>,
    clock: Option<Box<dyn Clock>>,
    seeds: Vec<SeedRecord>,
    select_last_seed: bool,
}

impl GradebookBuilder {
    /// Create a new builder accepting ISO dates and using the system clock.
    pub fn new() -> Self {
        Self {
            date_formats: vec![ISO_DATE_FORMAT.to_string()],
            clock: None,
            seeds: Vec::new(),
            select_last_seed: false,
        }
    }

    /// Replace the accepted date formats.
    pub fn date_formats<I, F>(mut self, formats: I) -> Self
    where
        I: IntoIterator<Item = F>,
        F: Into<String>,
    {
        self.date_formats = formats.into_iter().map(Into::into).collect();
        self
    }

    /// Accept one more date format, tried after the existing ones.
    pub fn accept_date_format(mut self, format: impl Into<String>) -> Self {
        self.date_formats.push(format.into());
        self
    }

    /// Set the clock used for history timestamps.
    pub fn clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Some(Box::new(clock));
        self
    }

    /// Add a record when the gradebook is built.
    ///
    /// Seeds go through the regular `add` path, so they receive the first
    /// identifiers and appear in history.
    pub fn seed(
        mut self,
        name: impl Into<String>,
        faculty_number: impl Into<String>,
        subject: impl Into<String>,
        grade: impl Into<Grade>,
        raw_date: impl Into<String>,
    ) -> Self {
        self.seeds.push(SeedRecord {
            name: name.into(),
            faculty_number: faculty_number.into(),
            subject: subject.into(),
            grade: grade.into(),
            raw_date: raw_date.into(),
        });
        self
    }

    /// Select the last seeded record after building.
    pub fn select_last_seed(mut self) -> Self {
        self.select_last_seed = true;
        self
    }

    /// Build the gradebook.
    /// Returns an error if the date formats are unusable or a seed is rejected.
    pub fn build(self) -> Result<Gradebook, BuildError> {
        if self.date_formats.is_empty() {
            return Err(BuildError::NoDateFormats);
        }
        if let Some(format) = self.date_formats.iter().find(|f| !is_valid_format(f)) {
            return Err(BuildError::InvalidDateFormat {
                format: format.clone(),
            });
        }

        let clock: Box<dyn Clock> = match self.clock {
            Some(clock) => clock,
            None => Box::new(SystemClock),
        };
        let mut book =
            Gradebook::from_parts(DateFormats::from_validated(self.date_formats), clock);

        let mut last_seed = None;
        for (index, seed) in self.seeds.into_iter().enumerate() {
            let record = book
                .add(
                    seed.name,
                    seed.faculty_number,
                    seed.subject,
                    seed.grade,
                    &seed.raw_date,
                )
                .map_err(|source| BuildError::InvalidSeed { index, source })?;
            last_seed = Some((index, record.id));
        }

        if let (true, Some((index, id))) = (self.select_last_seed, last_seed) {
            book.select(id)
                .map_err(|source| BuildError::InvalidSeed { index, source })?;
        }

        debug!(records = book.records().len(), "gradebook built");
        Ok(book)
    }
}

impl Default for GradebookBuilder {
    fn default() -> Self {
        Self::new()
    }
}
