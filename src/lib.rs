pub mod batch;
pub mod bit_address;
pub mod cidr_format;
pub mod cli;
pub mod commands;
pub mod common;
pub mod constants;
pub mod convert;
pub mod error;
pub mod output;
pub mod output_common;
pub mod range_split;

pub use convert::{convert_ip_range_to_cidrs, convert_ip_range_to_nets};
pub use error::AppError;
