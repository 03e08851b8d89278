/// CSV rendering and parsing of sample grids.
pub mod csv;

pub use csv::{parse_csv, to_csv};
