use std::path::PathBuf;

use clap::Parser;

#[derive(Parser)]
pub struct Args {
    /// Chromosome sizes file (`name\tlength`, no header).
    #[arg(long)]
    pub sizes: PathBuf,

    /// Input annotations file (GFF3 or GTF).
    #[arg(long)]
    pub annotations: PathBuf,

    /// Feature type to select, e.g. "gene" or "transcript".
    #[arg(long, default_value = "gene")]
    pub feature_type: String,

    /// Distance (bp) from the transcription start/end site.
    #[arg(long, default_value_t = 2000)]
    pub distance: i64,

    /// Output directory.
    #[arg(long, default_value = "annotation")]
    pub out_dir: PathBuf,
}
