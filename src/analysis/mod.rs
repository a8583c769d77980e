mod types;
mod sequence;
mod fasta;
mod composition;
mod motifs;
mod stability;
mod mutation;
mod crispr;
mod pipeline;

pub use types::*;
pub use sequence::*;
pub use fasta::*;
#[allow(unused_imports)]
pub use composition::*;
#[allow(unused_imports)]
pub use motifs::*;
#[allow(unused_imports)]
pub use stability::*;
#[allow(unused_imports)]
pub use mutation::*;
#[allow(unused_imports)]
pub use crispr::*;
pub use pipeline::*;
