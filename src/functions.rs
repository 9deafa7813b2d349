use std::fs::{self, File, Permissions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use log::debug;
use tempfile::NamedTempFile;

/// Where a write to `path` has to land.
enum Destination {
	/// Regular file (or not there yet): stage next to it and swap it in.
	Replace { path: PathBuf, permissions: Option<Permissions> },
	/// Device, fifo or dangling symlink: write through the path directly.
	Direct,
}

fn destination(path: &Path) -> io::Result<Destination> {
	match fs::metadata(path) {
		Ok(meta) if meta.is_file() => Ok(Destination::Replace {
			// Follow symlinks so the file they point at gets the new contents.
			path: fs::canonicalize(path)?,
			permissions: Some(meta.permissions()),
		}),
		Ok(_) => Ok(Destination::Direct),
		Err(e) if e.kind() == io::ErrorKind::NotFound => {
			if fs::symlink_metadata(path).is_ok() {
				Ok(Destination::Direct)
			} else {
				Ok(Destination::Replace { path: path.to_path_buf(), permissions: None })
			}
		}
		Err(e) => Err(e),
	}
}

/// Writes `bytes` to `path`, replacing any existing contents in a single step.
///
/// For regular files the data is written and synced to a temporary file in the
/// same directory as the resolved destination, given the old file's permissions,
/// and then persisted over it. Symlinks are followed. If anything fails the
/// temporary file is dropped and `path` is left exactly as it was.
///
/// Anything that is not a regular file (a device such as `/dev/null`, a fifo, a
/// dangling symlink) is opened and written in place, the same as `File::create`.
///
/// # Parameters
///
/// - `path`: Destination file. Its parent directory must already exist.
/// - `bytes`: The complete file contents.
///
/// # Returns
///
/// - `Ok(())` once `path` holds exactly `bytes`.
/// - `Err(io::Error)` if the file cannot be staged, written or persisted.
pub fn write_atomic(path: &Path, bytes: &[u8]) -> io::Result<()> {
	let (target, permissions) = match destination(path)? {
		Destination::Replace { path, permissions } => (path, permissions),
		Destination::Direct => {
			debug!("Writing {} bytes directly to {:?}", bytes.len(), path);
			let mut file = File::create(path)?;
			return file.write_all(bytes);
		}
	};

	let dir = match target.parent() {
		Some(parent) if !parent.as_os_str().is_empty() => parent,
		_ => Path::new("."),
	};

	let mut staged = NamedTempFile::new_in(dir)?;
	debug!("Staging {} bytes in {:?}", bytes.len(), staged.path());

	staged.write_all(bytes)?;
	if let Some(permissions) = permissions {
		staged.as_file().set_permissions(permissions)?;
	}
	staged.as_file().sync_all()?;
	staged.persist(&target).map_err(|e| e.error)?;

	Ok(())
}
