use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::fs;

use crate::error::ConfigError;
use crate::model::configuration::ConfigSnapshot;

/// Reads a whole text file into memory.
pub(crate) fn read_file<P: AsRef<Path>>(filename: P) -> std::io::Result<String> {
	let mut contents = String::new();
	File::open(filename)?.read_to_string(&mut contents)?;
	Ok(contents)
}

/// Loads a snapshot from a JSON file.
///
/// Missing fields take their built-in default.
///
/// # Errors
/// Returns an error if the file cannot be read or is not valid JSON.
pub fn read_snapshot<P: AsRef<Path>>(filename: P) -> Result<ConfigSnapshot, ConfigError> {
	let contents = read_file(&filename)?;
	let snapshot = ConfigSnapshot::from_json(&contents)?;
	log::info!("Loaded snapshot from {}", filename.as_ref().display());
	Ok(snapshot)
}

/// Loads a snapshot if a path is given, the built-in one otherwise.
pub fn read_snapshot_or_default<P: AsRef<Path>>(filename: Option<P>) -> Result<ConfigSnapshot, ConfigError> {
	match filename {
		Some(path) => read_snapshot(path),
		None => Ok(ConfigSnapshot::default()),
	}
}

/// Writes a snapshot as pretty JSON, creating parent folders if needed.
pub fn write_snapshot<P: AsRef<Path>>(filename: P, snapshot: &ConfigSnapshot) -> Result<(), ConfigError> {
	let path = filename.as_ref();
	if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
		fs::create_dir_all(parent)?;
	}
	fs::write(path, snapshot.to_json()?)?;
	Ok(())
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::model::size::UnitType;

	#[test]
	fn snapshot_survives_a_file_round_trip() {
		let dir = tempfile::tempdir().unwrap();
		let path = dir.path().join("nested").join("lorem.json");

		let mut snapshot = ConfigSnapshot::default();
		snapshot.defaults.unit_type = UnitType::Word;
		snapshot.defaults.unit_count = 12;

		write_snapshot(&path, &snapshot).unwrap();
		assert_eq!(read_snapshot(&path).unwrap(), snapshot);
	}

	#[test]
	fn missing_file_is_an_io_error() {
		let result = read_snapshot("/definitely/not/here/lorem.json");
		assert!(matches!(result, Err(ConfigError::Io(_))));
	}

	#[test]
	fn no_path_means_defaults() {
		assert_eq!(read_snapshot_or_default(None::<&str>).unwrap(), ConfigSnapshot::default());
	}
}
