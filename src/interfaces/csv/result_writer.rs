use crate::domain::loan::Money;
use crate::error::{PayoffError, Result};
use serde::Serialize;
use std::io::Write;

/// One row of batch output.
#[derive(Debug, Serialize, PartialEq, Clone)]
pub struct PaymentRecord {
    pub principal: f64,
    pub annual_rate: f64,
    pub epsilon: f64,
    pub lowest_payment: Money,
    pub iterations: usize,
}

/// Writes solved scenarios as CSV, header first.
pub struct ResultWriter<W: Write> {
    writer: csv::Writer<W>,
}

impl<W: Write> ResultWriter<W> {
    pub fn new(sink: W) -> Self {
        Self {
            writer: csv::Writer::from_writer(sink),
        }
    }

    pub fn write_record(&mut self, record: &PaymentRecord) -> Result<()> {
        self.writer.serialize(record)?;
        Ok(())
    }

    /// Flushes buffered rows and hands back the sink.
    pub fn finish(self) -> Result<W> {
        self.writer
            .into_inner()
            .map_err(|e| PayoffError::from(e.into_error()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_writes_header_and_rows() {
        let mut writer = ResultWriter::new(Vec::new());
        writer
            .write_record(&PaymentRecord {
                principal: 320000.0,
                annual_rate: 0.2,
                epsilon: 0.08,
                lowest_payment: Money::from_f64(29157.085418701172).unwrap(),
                iterations: 24,
            })
            .unwrap();

        let out = String::from_utf8(writer.finish().unwrap()).unwrap();
        let mut lines = out.lines();
        assert_eq!(
            lines.next(),
            Some("principal,annual_rate,epsilon,lowest_payment,iterations")
        );
        assert_eq!(lines.next(), Some("320000.0,0.2,0.08,29157.09,24"));
    }

    #[test]
    fn test_header_only_written_with_first_row() {
        let writer = ResultWriter::new(Vec::new());
        let out = writer.finish().unwrap();
        assert!(out.is_empty());
    }
}
