use std::{
    fs::File,
    io::{self, BufWriter, Write},
    path::Path,
};

use flank_core::features::{
    Record,
    flanks::{FlankingRegions, Interval},
};

const DELIMITER: char = '\t';

const GENES_DST: &str = "genes.gff";
const PROMOTERS_DST: &str = "promoters.gff";
const UPSTREAM_DST: &str = "upstream.gff";
const DOWNSTREAM_DST: &str = "downstream.gff";

/// The four output streams.
///
/// Each writer is owned, opened once, and flushed on `finish`; dropping on an
/// error path still closes the underlying files.
pub struct RegionWriters<W> {
    genes: W,
    promoters: W,
    upstream: W,
    downstream: W,
}

impl RegionWriters<BufWriter<File>> {
    pub fn create<P>(dst: P) -> io::Result<Self>
    where
        P: AsRef<Path>,
    {
        let dst = dst.as_ref();

        Ok(Self {
            genes: create(dst.join(GENES_DST))?,
            promoters: create(dst.join(PROMOTERS_DST))?,
            upstream: create(dst.join(UPSTREAM_DST))?,
            downstream: create(dst.join(DOWNSTREAM_DST))?,
        })
    }
}

impl<W> RegionWriters<W>
where
    W: Write,
{
    /// Appends one line per stream for the given record.
    pub fn write_record(&mut self, record: &Record, regions: &FlankingRegions) -> io::Result<()> {
        write_interval(&mut self.genes, record, regions.gene)?;
        write_interval(&mut self.promoters, record, regions.promoter)?;
        write_interval(&mut self.upstream, record, regions.upstream)?;
        write_interval(&mut self.downstream, record, regions.downstream)?;
        Ok(())
    }

    pub fn finish(mut self) -> io::Result<()> {
        self.genes.flush()?;
        self.promoters.flush()?;
        self.upstream.flush()?;
        self.downstream.flush()?;
        Ok(())
    }
}

fn create<P>(dst: P) -> io::Result<BufWriter<File>>
where
    P: AsRef<Path>,
{
    File::create(dst).map(BufWriter::new)
}

fn write_interval<W>(writer: &mut W, record: &Record, interval: Interval) -> io::Result<()>
where
    W: Write,
{
    let Interval { start, end } = interval;

    writeln!(
        writer,
        "{chromosome}{DELIMITER}{source}{DELIMITER}{ty}{DELIMITER}{start}{DELIMITER}{end}{DELIMITER}{score}{DELIMITER}{strand}{DELIMITER}{frame}{DELIMITER}{attributes}",
        chromosome = record.chromosome,
        source = record.source,
        ty = record.ty,
        score = record.score,
        strand = record.strand,
        frame = record.frame,
        attributes = record.attributes,
    )
}
