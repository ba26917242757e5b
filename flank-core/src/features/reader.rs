mod format;
mod gff;
mod gtf;

use std::io::{self, BufRead};

use noodles::core::Position;
use thiserror::Error;

pub use self::format::{DetectFormatError, Format};
use super::{ParseStrandError, Record};
use crate::read_line;

const COMMENT_PREFIX: char = '#';
const DELIMITER: char = '\t';

const CHROMOSOME_PREFIX: &str = "chr";

const FIELD_COUNT: usize = 9;

const REFERENCE_SEQUENCE_NAME_INDEX: usize = 0;
const SOURCE_INDEX: usize = 1;
const TYPE_INDEX: usize = 2;
const START_INDEX: usize = 3;
const END_INDEX: usize = 4;
const SCORE_INDEX: usize = 5;
const STRAND_INDEX: usize = 6;
const FRAME_INDEX: usize = 7;
const ATTRIBUTES_INDEX: usize = 8;

#[derive(Debug, Error, Eq, PartialEq)]
pub enum ParseRecordError {
    #[error("unexpected field count: {0}")]
    UnexpectedFieldCount(usize),
    #[error("invalid start: {0}")]
    InvalidStart(String),
    #[error("invalid end: {0}")]
    InvalidEnd(String),
    #[error(transparent)]
    InvalidStrand(#[from] ParseStrandError),
    #[error("missing attribute value")]
    MissingAttribute,
}

#[derive(Debug, Error)]
pub enum ReadRecordError {
    #[error("I/O error")]
    Io(#[from] io::Error),
    #[error("line {line_no}: invalid record")]
    InvalidRecord {
        line_no: u64,
        source: ParseRecordError,
    },
}

/// An annotation record reader.
///
/// The dialect is decided once, from the input path, and dispatched per
/// record; comment lines never change it.
pub struct Reader<R> {
    inner: R,
    format: Format,
    buf: String,
    line_no: u64,
}

impl<R> Reader<R>
where
    R: BufRead,
{
    pub fn new(inner: R, format: Format) -> Self {
        Self {
            inner,
            format,
            buf: String::new(),
            line_no: 0,
        }
    }

    /// Reads the next record whose type column matches `feature_type`.
    ///
    /// Comment and blank lines are skipped. Returns `Ok(None)` at EOF.
    pub fn read_record(&mut self, feature_type: &str) -> Result<Option<Record>, ReadRecordError> {
        loop {
            self.buf.clear();

            if read_line(&mut self.inner, &mut self.buf)? == 0 {
                return Ok(None);
            }

            self.line_no += 1;

            if self.buf.is_empty() || self.buf.starts_with(COMMENT_PREFIX) {
                continue;
            }

            let fields: Vec<_> = self.buf.split(DELIMITER).collect();

            if fields.len() < FIELD_COUNT {
                return Err(self.invalid(ParseRecordError::UnexpectedFieldCount(fields.len())));
            }

            if fields[TYPE_INDEX] != feature_type {
                continue;
            }

            let result = match self.format {
                Format::Gff => gff::parse_record(&fields),
                Format::Gtf => gtf::parse_record(&fields),
            };

            return match result {
                Ok(record) => Ok(Some(record)),
                Err(e) => Err(self.invalid(e)),
            };
        }
    }

    fn invalid(&self, source: ParseRecordError) -> ReadRecordError {
        ReadRecordError::InvalidRecord {
            line_no: self.line_no,
            source,
        }
    }
}

fn parse_record(fields: &[&str], attributes: String) -> Result<Record, ParseRecordError> {
    let start = parse_position(fields[START_INDEX])
        .ok_or_else(|| ParseRecordError::InvalidStart(fields[START_INDEX].into()))?;

    let end = parse_position(fields[END_INDEX])
        .ok_or_else(|| ParseRecordError::InvalidEnd(fields[END_INDEX].into()))?;

    let strand = fields[STRAND_INDEX].parse()?;

    Ok(Record {
        chromosome: format!(
            "{CHROMOSOME_PREFIX}{}",
            fields[REFERENCE_SEQUENCE_NAME_INDEX]
        ),
        source: fields[SOURCE_INDEX].into(),
        ty: fields[TYPE_INDEX].into(),
        start,
        end,
        score: fields[SCORE_INDEX].into(),
        strand,
        frame: fields[FRAME_INDEX].into(),
        attributes,
    })
}

fn parse_position(s: &str) -> Option<Position> {
    s.parse().ok().and_then(Position::new)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::Strand;

    #[test]
    fn test_read_record_with_gff() -> Result<(), ReadRecordError> {
        const DATA: &[u8] = b"\
##gff-version 3
1\thavana\tgene\t5000\t6000\t.\t+\t.\tID=gene0;Name=A1B
1\thavana\texon\t5000\t5100\t.\t+\t.\tID=exon0;Parent=gene0
1\thavana\tgene\t8000\t9000\t.\t-\t.\tID=gene1
";

        let mut reader = Reader::new(DATA, Format::Gff);

        let actual = reader.read_record("gene")?;

        let expected = Record {
            chromosome: String::from("chr1"),
            source: String::from("havana"),
            ty: String::from("gene"),
            start: Position::new(5000).unwrap(),
            end: Position::new(6000).unwrap(),
            score: String::from("."),
            strand: Strand::Forward,
            frame: String::from("."),
            attributes: String::from("ID=gene0;Name=A1B"),
        };

        assert_eq!(actual, Some(expected));

        let actual = reader.read_record("gene")?;
        assert_eq!(actual.map(|record| record.attributes), Some(String::from("ID=gene1")));

        assert!(reader.read_record("gene")?.is_none());

        Ok(())
    }

    #[test]
    fn test_read_record_with_gtf() -> Result<(), ReadRecordError> {
        const DATA: &[u8] = b"\
#!genome-build GRCh38
1\tensembl\tgene\t5000\t6000\t.\t+\t.\tgene_id \"ENSG00000000001\"; gene_name \"A1B\";
1\tensembl\ttranscript\t5000\t6000\t.\t+\t.\tgene_id \"ENSG00000000001\";
";

        let mut reader = Reader::new(DATA, Format::Gtf);

        let actual = reader.read_record("gene")?;

        let expected = Record {
            chromosome: String::from("chr1"),
            source: String::from("ensembl"),
            ty: String::from("gene"),
            start: Position::new(5000).unwrap(),
            end: Position::new(6000).unwrap(),
            score: String::from("."),
            strand: Strand::Forward,
            frame: String::from("."),
            attributes: String::from("gene_id=\"ENSG00000000001\";"),
        };

        assert_eq!(actual, Some(expected));

        assert!(reader.read_record("gene")?.is_none());

        Ok(())
    }

    #[test]
    fn test_read_record_with_invalid_start() {
        const DATA: &[u8] = b"\
##gff-version 3
1\thavana\tgene\tNA\t6000\t.\t+\t.\tID=gene0
";

        let mut reader = Reader::new(DATA, Format::Gff);

        assert!(matches!(
            reader.read_record("gene"),
            Err(ReadRecordError::InvalidRecord {
                line_no: 2,
                source: ParseRecordError::InvalidStart(_),
            })
        ));
    }

    #[test]
    fn test_read_record_with_missing_fields() {
        const DATA: &[u8] = b"1\thavana\tgene\t5000\t6000\n";

        let mut reader = Reader::new(DATA, Format::Gff);

        assert!(matches!(
            reader.read_record("gene"),
            Err(ReadRecordError::InvalidRecord {
                line_no: 1,
                source: ParseRecordError::UnexpectedFieldCount(5),
            })
        ));
    }

    #[test]
    fn test_read_record_with_invalid_strand() {
        const DATA: &[u8] = b"1\thavana\tgene\t5000\t6000\t.\t.\t.\tID=gene0\n";

        let mut reader = Reader::new(DATA, Format::Gff);

        assert!(matches!(
            reader.read_record("gene"),
            Err(ReadRecordError::InvalidRecord {
                line_no: 1,
                source: ParseRecordError::InvalidStrand(_),
            })
        ));
    }
}
