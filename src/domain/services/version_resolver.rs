//! Version resolution from a build descriptor
//!
//! Scans `pom.xml` line by line and takes the first `<version>...</version>`.
//! No XML parsing: a `<parent>` block above the project version wins.

use std::path::Path;

use crate::domain::ports::{FileSystem, FsError};
use crate::domain::value_objects::ReleaseVersion;
use crate::error::{StageError, StageResult};

const OPEN_TAG: &str = "<version>";
const CLOSE_TAG: &str = "</version>";

/// Extract the version from a single line.
///
/// Matches greedily: text between the first `<version>` and the last
/// `</version>` that follows it.
pub fn extract_version(line: &str) -> Option<&str> {
    let start = line.find(OPEN_TAG)? + OPEN_TAG.len();
    let end = line[start..].rfind(CLOSE_TAG)? + start;
    Some(&line[start..end])
}

/// Read `descriptor` and return the first version found, top to bottom.
pub fn resolve_version<FS: FileSystem + ?Sized>(
    fs: &FS,
    descriptor: &Path,
) -> StageResult<ReleaseVersion> {
    if !fs.is_file(descriptor) {
        return Err(StageError::VersionDescriptorMissing {
            path: descriptor.to_path_buf(),
        });
    }

    let content = fs.read_to_string(descriptor).map_err(|source| match source {
        FsError::NotFound(_) => StageError::VersionDescriptorMissing {
            path: descriptor.to_path_buf(),
        },
        source => StageError::DescriptorUnreadable {
            path: descriptor.to_path_buf(),
            source,
        },
    })?;

    content
        .lines()
        .find_map(extract_version)
        .map(ReleaseVersion::new)
        .ok_or_else(|| StageError::VersionNotFound {
            path: descriptor.to_path_buf(),
        })
}
