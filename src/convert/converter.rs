use std::fs;
use std::path::Path;
use log::{debug, info, trace};

use super::error::ConvertError;
use super::token::parse_token;
use crate::functions::write_atomic;

/// Token separators: Unicode whitespace plus the ASCII file, group, record and
/// unit separators (U+001C..=U+001F).
fn is_separator(c: char) -> bool {
	c.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&c)
}

/// Decodes whitespace-separated hex tokens into bytes, one byte per token.
///
/// Any run of separators splits tokens, so tabs, newlines and repeated spaces
/// are all equivalent. Blank input decodes to an empty buffer.
///
/// # Returns
///
/// - `Ok(Vec<u8>)` with one byte per token, in token order.
/// - `Err(ConvertError::Parse)` or `Err(ConvertError::Range)` for the first bad
///   token, carrying its 1-based position.
pub fn parse_tokens(text: &str) -> Result<Vec<u8>, ConvertError> {
	text.split(is_separator)
		.filter(|token| !token.is_empty())
		.enumerate()
		.map(|(i, token)| parse_token(token).map_err(|e| ConvertError::token(i + 1, token, e)))
		.collect()
}

/// Converts the hex text in `input` into raw bytes written to `output`.
///
/// The whole input is read and decoded before `output` is touched, and the
/// output is replaced in one step, so a failed run never leaves a partial or
/// modified output file behind.
///
/// # Parameters
///
/// - `input`: UTF-8 text file of hex byte tokens.
/// - `output`: Binary file to create or overwrite.
///
/// # Returns
///
/// - `Ok(usize)` with the number of bytes written.
/// - `Err(ConvertError)` if reading, decoding or writing fails.
pub fn convert(input: &Path, output: &Path) -> Result<usize, ConvertError> {
	info!("Converting {:?} into {:?}", input, output);

	let text = fs::read_to_string(input)
		.map_err(|e| ConvertError::io(input, e))?;

	let bytes = parse_tokens(&text)?;
	debug!("Decoded {} tokens from {:?}", bytes.len(), input);
	trace!("Bytes: {}", hex::encode(&bytes));

	write_atomic(output, &bytes)
		.map_err(|e| ConvertError::io(output, e))?;

	info!("Wrote {} bytes to {:?}", bytes.len(), output);
	Ok(bytes.len())
}
