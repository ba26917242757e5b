use super::{ATTRIBUTES_INDEX, ParseRecordError};
use crate::features::Record;

// The GTF attribute column is free text, e.g. `gene_id "g0"; gene_name
// "A1B";`. Only the first key/value pair is retained, reformatted as
// `key=value` with the value token untouched.
pub(super) fn parse_record(fields: &[&str]) -> Result<Record, ParseRecordError> {
    let attributes = reformat_attributes(fields[ATTRIBUTES_INDEX])?;

    super::parse_record(fields, attributes)
}

fn reformat_attributes(s: &str) -> Result<String, ParseRecordError> {
    const DELIMITER: char = ' ';

    let mut tokens = s.split(DELIMITER);

    // SAFETY: `Split` always yields at least one token.
    let key = tokens.next().unwrap();
    let value = tokens.next().ok_or(ParseRecordError::MissingAttribute)?;

    Ok(format!("{key}={value}"))
}
