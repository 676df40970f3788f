pub(crate) mod health;
pub mod meta;
pub mod ocr;

pub use health::health_check;
