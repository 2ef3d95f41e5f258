pub mod handle_batch;
pub mod handle_convert;
