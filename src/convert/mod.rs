mod converter;
mod error;
mod token;

pub use converter::convert;
pub use error::ConvertError;
