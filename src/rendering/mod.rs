pub mod patterns;
pub mod png_codec;

pub use patterns::DemoPattern;
pub use png_codec::{decode_png, encode_png, optimize_png};
