use std::io::{self, BufRead};

use indexmap::IndexMap;
use thiserror::Error;

use crate::read_line;

/// A read-only mapping of chromosome name to length.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct ChromosomeSizes {
    lengths: IndexMap<String, usize>,
}

impl ChromosomeSizes {
    pub fn get(&self, name: &str) -> Option<usize> {
        self.lengths.get(name).copied()
    }

    pub fn len(&self) -> usize {
        self.lengths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lengths.is_empty()
    }
}

impl FromIterator<(String, usize)> for ChromosomeSizes {
    fn from_iter<T>(iter: T) -> Self
    where
        T: IntoIterator<Item = (String, usize)>,
    {
        Self {
            lengths: iter.into_iter().collect(),
        }
    }
}

/// An error returned when a chromosome is absent from the sizes table.
#[derive(Debug, Error, Eq, PartialEq)]
#[error("unknown chromosome: {0}")]
pub struct UnknownChromosomeError(pub String);

#[derive(Debug, Error)]
pub enum ReadChromosomeSizesError {
    #[error("I/O error")]
    Io(#[from] io::Error),
    #[error("line {line_no}: missing length")]
    MissingLength { line_no: u64 },
    #[error("line {line_no}: invalid length: {value}")]
    InvalidLength { line_no: u64, value: String },
}

/// Reads a UCSC-style chromosome sizes table (`name\tlength`, no header).
///
/// Duplicate names overwrite previous entries.
pub fn read<R>(reader: &mut R) -> Result<ChromosomeSizes, ReadChromosomeSizesError>
where
    R: BufRead,
{
    const DELIMITER: char = '\t';

    let mut lengths = IndexMap::new();

    let mut line = String::new();
    let mut line_no = 0;

    loop {
        line.clear();

        if read_line(reader, &mut line)? == 0 {
            break;
        }

        line_no += 1;

        if line.is_empty() {
            continue;
        }

        let (name, raw_length) = line
            .split_once(DELIMITER)
            .ok_or(ReadChromosomeSizesError::MissingLength { line_no })?;

        let length = raw_length
            .trim_end()
            .parse()
            .ok()
            .filter(|n| *n > 0)
            .ok_or_else(|| ReadChromosomeSizesError::InvalidLength {
                line_no,
                value: raw_length.into(),
            })?;

        lengths.insert(name.into(), length);
    }

    Ok(ChromosomeSizes { lengths })
}
