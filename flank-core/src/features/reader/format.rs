use std::path::{Path, PathBuf};

use thiserror::Error;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Format {
    /// GFF3.
    Gff,
    /// GTF.
    Gtf,
}

#[derive(Debug, Error, Eq, PartialEq)]
#[error("unsupported file extension: {0:?}")]
pub struct DetectFormatError(pub PathBuf);

impl Format {
    /// Detects the annotation format from the file extension.
    ///
    /// A trailing `.gz` extension is stripped first.
    pub fn detect<P>(src: P) -> Result<Self, DetectFormatError>
    where
        P: AsRef<Path>,
    {
        const GZIP_EXTENSION: &str = "gz";

        let src = src.as_ref();

        let path = if src.extension().is_some_and(|ext| ext == GZIP_EXTENSION) {
            src.with_extension("")
        } else {
            src.to_path_buf()
        };

        match path.extension().and_then(|ext| ext.to_str()) {
            Some("gff" | "gff3") => Ok(Self::Gff),
            Some("gtf") => Ok(Self::Gtf),
            _ => Err(DetectFormatError(src.into())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect() {
        assert_eq!(Format::detect("in.gff"), Ok(Format::Gff));
        assert_eq!(Format::detect("in.gff3"), Ok(Format::Gff));
        assert_eq!(Format::detect("in.gtf"), Ok(Format::Gtf));
        assert_eq!(Format::detect("in.gtf.gz"), Ok(Format::Gtf));
        assert_eq!(Format::detect("in.gff3.gz"), Ok(Format::Gff));

        assert!(Format::detect("in.bed").is_err());
        assert!(Format::detect("in.gz").is_err());
        assert!(Format::detect("in").is_err());
    }
}
