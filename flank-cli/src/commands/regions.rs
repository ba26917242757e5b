mod writer;

use std::{
    fs,
    io::{self, BufReader},
    path::Path,
};

use flank_core::{
    chromosomes::{self, ChromosomeSizes, ReadChromosomeSizesError, UnknownChromosomeError},
    features::{
        flanks::flanking_regions,
        reader::{DetectFormatError, Format, ReadRecordError, Reader},
    },
};
use thiserror::Error;
use tracing::info;

use self::writer::RegionWriters;
use crate::cli::regions;

pub fn regions(args: regions::Args) -> Result<(), RegionsError> {
    let annotations_src = &args.annotations;

    let format = Format::detect(annotations_src)?;

    info!(src = ?annotations_src, ?format, "detected annotation format");

    let sizes = read_chromosome_sizes(&args.sizes)?;

    info!(chromosome_count = sizes.len(), "read chromosome sizes");

    fs::create_dir_all(&args.out_dir)?;

    let mut writers = RegionWriters::create(&args.out_dir)?;

    let mut reader = crate::fs::open(annotations_src)
        .map(BufReader::new)
        .map(|inner| Reader::new(inner, format))?;

    let feature_type = &args.feature_type;
    let distance = args.distance;

    info!(feature_type, distance, "deriving regions");

    let mut record_count: u64 = 0;

    while let Some(record) = reader.read_record(feature_type)? {
        let flanking = flanking_regions(&record, distance, &sizes)?;

        writers.write_record(&record, &flanking)?;

        record_count += 1;
    }

    writers.finish()?;

    info!(record_count, "wrote regions");

    Ok(())
}

#[derive(Debug, Error)]
pub enum RegionsError {
    #[error("I/O error")]
    Io(#[from] io::Error),
    #[error("invalid annotations format")]
    DetectFormat(#[from] DetectFormatError),
    #[error("invalid chromosome sizes")]
    InvalidChromosomeSizes(#[from] ReadChromosomeSizesError),
    #[error("invalid record")]
    InvalidRecord(#[from] ReadRecordError),
    #[error(transparent)]
    UnknownChromosome(#[from] UnknownChromosomeError),
}

fn read_chromosome_sizes<P>(src: P) -> Result<ChromosomeSizes, RegionsError>
where
    P: AsRef<Path>,
{
    let mut reader = crate::fs::open(src).map(BufReader::new)?;
    let sizes = chromosomes::read(&mut reader)?;
    Ok(sizes)
}
