pub mod normalize;
pub mod table;

pub use normalize::{derive_ticker, normalize};
pub use table::{extract_table, ExtractedTable};
