use crate::error::{PayoffError, Result};
use serde::Deserialize;
use std::io::Read;

/// One row of a batch input file.
///
/// `epsilon` may be left blank, in which case the configured tolerance applies.
#[derive(Debug, Deserialize, PartialEq, Clone)]
pub struct Scenario {
    pub principal: f64,
    pub annual_rate: f64,
    #[serde(default)]
    pub epsilon: Option<f64>,
}

/// Reads payoff scenarios from a CSV source.
///
/// Whitespace is trimmed and short rows are accepted, so the `epsilon` column
/// can be dropped entirely.
pub struct ScenarioReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> ScenarioReader<R> {
    /// Creates a new `ScenarioReader` from any `Read` source (e.g., File, Stdin).
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(source);
        Self { reader }
    }

    /// Lazily deserializes scenarios, one `Result` per row.
    pub fn scenarios(self) -> impl Iterator<Item = Result<Scenario>> {
        self.reader
            .into_deserialize()
            .map(|result| result.map_err(PayoffError::from))
    }
}
