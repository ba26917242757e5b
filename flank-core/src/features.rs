pub mod flanks;
pub mod reader;
mod record;
mod strand;

pub use self::{
    record::Record,
    strand::{ParseStrandError, Strand},
};
