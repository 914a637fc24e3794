pub mod numeric;

pub use numeric::{or_zero, parse_lenient_number, positive_minimum};
