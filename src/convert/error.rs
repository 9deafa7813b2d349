use std::io;
use std::path::PathBuf;
use thiserror::Error;

use super::token::TokenError;

/// Everything that can abort a conversion. None of these are recovered from.
#[derive(Error, Debug)]
pub enum ConvertError {
	#[error("I/O error on {path:?}")]
	Io {
		path: PathBuf,
		#[source]
		source: io::Error,
	},
	#[error("token #{index} `{token}` is not a valid hex byte")]
	Parse {
		index: usize,
		token: String,
		#[source]
		source: TokenError,
	},
	#[error("token #{index} `{token}` does not fit in a byte (0..=255)")]
	Range {
		index: usize,
		token: String,
	},
}

impl ConvertError {
	pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
		Self::Io { path: path.into(), source }
	}

	/// Classifies a token failure, keeping the token's 1-based position.
	pub(crate) fn token(index: usize, token: &str, source: TokenError) -> Self {
		match source {
			TokenError::OutOfRange => Self::Range { index, token: token.to_string() },
			source => Self::Parse { index, token: token.to_string(), source },
		}
	}
}
