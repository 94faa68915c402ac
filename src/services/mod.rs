pub mod dither_service;

pub use dither_service::{DitherReport, DitherService, DitherSettings};
