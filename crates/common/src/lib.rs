pub mod error;
pub mod float_bits;
pub mod types;
