use super::{ATTRIBUTES_INDEX, ParseRecordError};
use crate::features::Record;

// GFF attribute columns are already `key=value` pairs and pass through
// verbatim.
pub(super) fn parse_record(fields: &[&str]) -> Result<Record, ParseRecordError> {
    const DELIMITER: &str = "\t";

    let attributes = fields[ATTRIBUTES_INDEX..].join(DELIMITER);

    super::parse_record(fields, attributes)
}
