use crate::domain::model::Coder;
use crate::utils::error::Result;
use std::io::Read;
use std::path::Path;

/// Reads coders from CSV with a `height,weight` header row. Columns are
/// matched by header name, so their order does not matter.
pub fn read_coders<R: Read>(reader: R) -> Result<Vec<Coder>> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut coders = Vec::new();
    for row in csv_reader.deserialize() {
        let coder: Coder = row?;
        coders.push(coder);
    }

    tracing::debug!("Parsed {} coders from CSV", coders.len());
    Ok(coders)
}

pub fn read_coders_from_path<P: AsRef<Path>>(path: P) -> Result<Vec<Coder>> {
    let file = std::fs::File::open(path.as_ref())?;
    let coders = read_coders(file)?;
    tracing::info!(
        "Loaded {} coders from {}",
        coders.len(),
        path.as_ref().display()
    );
    Ok(coders)
}
