use std::fs::File;
use std::io::Error;
use std::path::Path;

/// Writes a batch input file with one scenario per principal in `principals`.
pub fn generate_scenarios(path: &Path, principals: &[f64], annual_rate: f64) -> Result<(), Error> {
    let file = File::create(path)?;
    let mut wtr = csv::WriterBuilder::new().from_writer(file);

    wtr.write_record(["principal", "annual_rate", "epsilon"])?;

    for principal in principals {
        wtr.write_record([
            principal.to_string(),
            annual_rate.to_string(),
            "0.08".to_string(),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}
