use noodles::core::Position;

use super::Strand;

/// A normalized annotation record.
///
/// Coordinates are 1-based and inclusive. The attributes column is opaque:
/// it is carried along and echoed on output, never interpreted.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Record {
    pub chromosome: String,
    pub source: String,
    pub ty: String,
    pub start: Position,
    pub end: Position,
    pub score: String,
    pub strand: Strand,
    pub frame: String,
    pub attributes: String,
}
