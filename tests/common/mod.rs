use std::fs::File;
use std::io::Error;
use std::path::Path;

pub fn write_script(path: &Path, rows: &[(&str, &str)]) -> Result<(), Error> {
    let file = File::create(path)?;
    let mut wtr = csv::WriterBuilder::new().from_writer(file);

    wtr.write_record(["action", "value"])?;
    for (action, value) in rows {
        wtr.write_record([*action, *value])?;
    }

    wtr.flush()?;
    Ok(())
}
