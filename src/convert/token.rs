use thiserror::Error;

/// Why a single token could not be turned into a byte.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TokenError {
	#[error("no hex digits")]
	Empty,
	#[error("invalid hex digit {0:?}")]
	InvalidDigit(char),
	#[error("misplaced underscore")]
	MisplacedUnderscore,
	#[error("value is outside 0..=255")]
	OutOfRange,
}

/// Parses one token as a base-16 byte.
///
/// Accepts an optional `+`/`-` sign, an optional `0x`/`0X` prefix, and single
/// underscores between digits (a leading one only directly after the prefix).
/// Tokens of any length are accepted as long as the value ends up in `0..=255`,
/// so `000000ff` is `0xFF` and `-0` is `0`.
///
/// # Parameters
///
/// - `token`: A single whitespace-free token, e.g. `"DE"` or `"0x0a"`.
///
/// # Returns
///
/// - `Ok(u8)` with the decoded byte.
/// - `Err(TokenError::OutOfRange)` if the token is well formed but negative or above 255.
/// - Any other `TokenError` if the token is not valid base-16.
pub fn parse_token(token: &str) -> Result<u8, TokenError> {
	let (negative, rest) = match token.as_bytes().first() {
		Some(b'-') => (true, &token[1..]),
		Some(b'+') => (false, &token[1..]),
		_ => (false, token),
	};

	let (prefixed, digits) = match rest.get(..2) {
		Some("0x") | Some("0X") => (true, &rest[2..]),
		_ => (false, rest),
	};

	// Saturates at the first value above u8::MAX; the rest of the token is still validated.
	let mut value: u16 = 0;
	let mut out_of_range = false;
	let mut seen_digit = false;
	let mut after_underscore = false;

	for (i, c) in digits.chars().enumerate() {
		if c == '_' {
			let leading_after_prefix = i == 0 && prefixed;
			if after_underscore || (!seen_digit && !leading_after_prefix) {
				return Err(TokenError::MisplacedUnderscore);
			}
			after_underscore = true;
			continue;
		}

		let digit = c.to_digit(16).ok_or(TokenError::InvalidDigit(c))?;
		seen_digit = true;
		after_underscore = false;

		if !out_of_range {
			value = value * 16 + digit as u16;
			out_of_range = value > u8::MAX as u16;
		}
	}

	if after_underscore {
		return Err(TokenError::MisplacedUnderscore);
	}
	if !seen_digit {
		return Err(TokenError::Empty);
	}
	if out_of_range || (negative && value != 0) {
		return Err(TokenError::OutOfRange);
	}

	u8::try_from(value).map_err(|_| TokenError::OutOfRange)
}
