use noodles::core::Position;

use super::{Record, Strand};
use crate::chromosomes::{ChromosomeSizes, UnknownChromosomeError};

/// A 1-based, inclusive interval.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Interval {
    pub start: Position,
    pub end: Position,
}

impl Interval {
    pub fn new(start: Position, end: Position) -> Self {
        Self { start, end }
    }
}

/// The intervals derived from a single feature record.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct FlankingRegions {
    /// The feature body, passed through unmodified.
    pub gene: Interval,
    pub promoter: Interval,
    pub upstream: Interval,
    pub downstream: Interval,
}

/// Derives the promoter, upstream, and downstream intervals of a feature.
///
/// The promoter is a symmetric window around the transcription start site,
/// and the upstream/downstream flanks immediately precede/follow the feature
/// body, with all anchors strand-aware: on the reverse strand, the 5' end is
/// at the higher coordinate, so the anchors swap.
///
/// Each derived coordinate is clamped to `[1, chromosome_length]`
/// independently. Clamping can invert an interval (`start > end`), e.g. an
/// upstream flank with `distance = 0`; inverted intervals are returned
/// as computed.
pub fn flanking_regions(
    record: &Record,
    distance: i64,
    chromosome_sizes: &ChromosomeSizes,
) -> Result<FlankingRegions, UnknownChromosomeError> {
    let length = chromosome_sizes
        .get(&record.chromosome)
        .ok_or_else(|| UnknownChromosomeError(record.chromosome.clone()))?;

    let start = usize::from(record.start) as i64;
    let end = usize::from(record.end) as i64;

    let (promoter, upstream, downstream) = match record.strand {
        Strand::Forward => (
            (start - distance, start + distance),
            (start - distance, start - 1),
            (end + 1, end + distance),
        ),
        Strand::Reverse => (
            (end - distance, end + distance),
            (end + 1, end + distance),
            (start - distance, start - 1),
        ),
    };

    Ok(FlankingRegions {
        gene: Interval::new(record.start, record.end),
        promoter: clamp(promoter, length),
        upstream: clamp(upstream, length),
        downstream: clamp(downstream, length),
    })
}

fn clamp((start, end): (i64, i64), length: usize) -> Interval {
    Interval::new(clamp_coordinate(start, length), clamp_coordinate(end, length))
}

fn clamp_coordinate(coordinate: i64, length: usize) -> Position {
    let n = coordinate.clamp(1, length as i64) as usize;
    // SAFETY: `n >= 1`.
    Position::new(n).unwrap()
}
