pub mod chromosomes;
pub mod features;
mod line;

pub(crate) use self::line::read_line;
