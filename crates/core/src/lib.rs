pub mod log_domain;
pub mod norms;
pub mod power;
pub mod traits;
pub mod trig;

pub use log_domain::{LogSumExpAccumulator, log_multiply_abs, log_sum_exp};
pub use norms::{norm_max, norm1, norm2};
pub use power::pow;
pub use trig::{acospi, asinpi, atanpi, cosm1, cosm1pi, cospi, sinc, sincpi, sinpi, tanpi};
