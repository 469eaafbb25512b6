//! Shared repository utilities.
//!
//! - **Reference files**: [`read_yaml_file`] loads the YAML registries (doctors, patients)
//! - **Sharded records**: [`create_uuid_and_shard_dir`] allocates a fresh record directory and
//!   [`sharded_record_dirs`] walks every record directory under a root

use crate::error::{VaidyaError, VaidyaResult};
use crate::uuid::ShardableUuid;
use serde::de::DeserializeOwned;
use std::{
    fs,
    io::{self, ErrorKind},
    path::{Path, PathBuf},
};

/// Reads and deserialises a YAML file.
///
/// # Errors
///
/// Returns [`VaidyaError::MissingDataFile`] if the file does not exist,
/// [`VaidyaError::FileRead`] if it cannot be read, and [`VaidyaError::YamlDeserialization`] if it
/// does not match `T`.
pub(crate) fn read_yaml_file<T: DeserializeOwned>(path: &Path) -> VaidyaResult<T> {
    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            return Err(VaidyaError::MissingDataFile {
                path: path.to_path_buf(),
            })
        }
        Err(e) => return Err(VaidyaError::FileRead(e)),
    };
    serde_yaml::from_str(&contents).map_err(VaidyaError::YamlDeserialization)
}

/// Creates a unique sharded directory within `base_dir`.
///
/// UUIDs come from `uuid_source`; a candidate whose directory already exists is skipped, up to
/// 5 attempts.
///
/// # Errors
///
/// Returns [`VaidyaError::StorageDirCreation`] if directory creation fails or no free directory
/// was found after 5 attempts.
pub(crate) fn create_uuid_and_shard_dir(
    base_dir: &Path,
    mut uuid_source: impl FnMut() -> ShardableUuid,
) -> VaidyaResult<(ShardableUuid, PathBuf)> {
    for _attempt in 0..5 {
        let uuid = uuid_source();
        let candidate = uuid.sharded_dir(base_dir);

        if candidate.exists() {
            continue;
        }

        if let Some(parent) = candidate.parent() {
            fs::create_dir_all(parent).map_err(VaidyaError::StorageDirCreation)?;
        }

        match fs::create_dir(&candidate) {
            Ok(()) => return Ok((uuid, candidate)),
            Err(e) if e.kind() == ErrorKind::AlreadyExists => continue,
            Err(e) => return Err(VaidyaError::StorageDirCreation(e)),
        }
    }

    Err(VaidyaError::StorageDirCreation(io::Error::new(
        ErrorKind::AlreadyExists,
        "failed to allocate a unique record directory after 5 attempts",
    )))
}

/// Lists every `<root>/<s1>/<s2>/<uuid>/` directory.
///
/// A missing root yields an empty list. Unreadable shard directories and stray files are skipped.
pub(crate) fn sharded_record_dirs(root: &Path) -> Vec<PathBuf> {
    let mut dirs = Vec::new();

    let s1_iter = match fs::read_dir(root) {
        Ok(it) => it,
        Err(_) => return dirs,
    };
    for s1 in s1_iter.flatten() {
        let s1_path = s1.path();
        if !s1_path.is_dir() {
            continue;
        }

        let s2_iter = match fs::read_dir(&s1_path) {
            Ok(it) => it,
            Err(_) => continue,
        };

        for s2 in s2_iter.flatten() {
            let s2_path = s2.path();
            if !s2_path.is_dir() {
                continue;
            }

            let id_iter = match fs::read_dir(&s2_path) {
                Ok(it) => it,
                Err(_) => continue,
            };

            dirs.extend(
                id_iter
                    .flatten()
                    .map(|entry| entry.path())
                    .filter(|path| path.is_dir()),
            );
        }
    }

    dirs
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_create_uuid_and_shard_dir_skips_existing_directories() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let taken = ShardableUuid::parse("00112233445566778899aabbccddeeff").unwrap();
        let free = ShardableUuid::parse("aabbccddeeff00112233445566778899").unwrap();
        fs::create_dir_all(taken.sharded_dir(temp_dir.path())).unwrap();

        let mut candidates = vec![free.clone(), taken.clone()];
        let (uuid, dir) =
            create_uuid_and_shard_dir(temp_dir.path(), || candidates.pop().unwrap())
                .expect("second candidate should be allocated");

        assert_eq!(uuid, free);
        assert_eq!(dir, free.sharded_dir(temp_dir.path()));
        assert!(dir.is_dir());
    }

    #[test]
    fn test_create_uuid_and_shard_dir_gives_up_after_five_attempts() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let taken = ShardableUuid::parse("00112233445566778899aabbccddeeff").unwrap();
        fs::create_dir_all(taken.sharded_dir(temp_dir.path())).unwrap();

        let err = create_uuid_and_shard_dir(temp_dir.path(), || taken.clone())
            .expect_err("every candidate is taken");
        assert!(matches!(err, VaidyaError::StorageDirCreation(_)));
    }

    #[test]
    fn test_sharded_record_dirs_finds_leaves_and_ignores_files() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let a = ShardableUuid::new();
        let b = ShardableUuid::new();
        fs::create_dir_all(a.sharded_dir(temp_dir.path())).unwrap();
        fs::create_dir_all(b.sharded_dir(temp_dir.path())).unwrap();
        fs::write(temp_dir.path().join("stray.txt"), "x").unwrap();

        let mut found = sharded_record_dirs(temp_dir.path());
        found.sort();
        let mut expected = vec![
            a.sharded_dir(temp_dir.path()),
            b.sharded_dir(temp_dir.path()),
        ];
        expected.sort();

        assert_eq!(found, expected);
        assert!(sharded_record_dirs(&temp_dir.path().join("missing")).is_empty());
    }

    #[test]
    fn test_read_yaml_file_reports_missing_file() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let err = read_yaml_file::<serde_yaml::Value>(&temp_dir.path().join("absent.yaml"))
            .expect_err("missing file");

        assert!(matches!(err, VaidyaError::MissingDataFile { .. }));
    }
}
