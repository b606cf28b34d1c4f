//! Filesystem collaborators.
//!
//! Pure data providers for the dialog: directory listings, drive letters,
//! and well-known locations. The rendering core never touches the
//! filesystem itself. Paths travel as segment vectors, joined with `/`.

use std::io;
use std::path::{Component, Path};

/// List a directory split into directories and files, each sorted by name.
pub fn list_directory(path: &Path) -> io::Result<(Vec<String>, Vec<String>)> {
    let mut directories = Vec::new();
    let mut files = Vec::new();

    for entry in std::fs::read_dir(path)? {
        let entry = entry?;
        let name = entry.file_name().to_string_lossy().into_owned();
        if entry.file_type()?.is_dir() {
            directories.push(name);
        } else {
            files.push(name);
        }
    }

    directories.sort();
    files.sort();
    Ok((directories, files))
}

/// Volume labels of all available drives, in letter order.
///
/// Empty on platforms without drive letters.
pub fn enumerate_drives() -> Vec<String> {
    #[cfg(windows)]
    {
        let bitmask = unsafe { windows_sys::Win32::Storage::FileSystem::GetLogicalDrives() };
        drives_from_bitmask(bitmask)
    }
    #[cfg(not(windows))]
    {
        Vec::new()
    }
}

/// Decode a drive-presence bitmask (bit 0 = `A:`) into volume labels.
pub fn drives_from_bitmask(bitmask: u32) -> Vec<String> {
    (0..26)
        .filter(|bit| bitmask & (1 << bit) != 0)
        .map(|bit| format!("{}:", (b'A' + bit) as char))
        .collect()
}

/// The user's home directory as path segments. Empty if unknown.
pub fn home_directory() -> Vec<String> {
    dirs::home_dir()
        .map(|path| path_segments(&path))
        .unwrap_or_default()
}

/// The process working directory as path segments.
pub fn current_directory() -> io::Result<Vec<String>> {
    Ok(path_segments(&std::env::current_dir()?))
}

/// Split a path into segments such that [`join_segments`] reproduces it.
pub fn path_segments(path: &Path) -> Vec<String> {
    let mut segments = Vec::new();
    for component in path.components() {
        match component {
            Component::Prefix(prefix) => {
                segments.push(prefix.as_os_str().to_string_lossy().into_owned());
            }
            Component::RootDir => {
                if segments.is_empty() {
                    segments.push(String::new());
                }
            }
            Component::Normal(name) => {
                segments.push(name.to_string_lossy().into_owned());
            }
            Component::CurDir | Component::ParentDir => {}
        }
    }
    segments
}

/// Join path segments back into a path string.
pub fn join_segments(segments: &[String]) -> String {
    // A bare drive prefix would be drive-relative; anchor it at the root.
    if segments.len() == 1 && segments[0].ends_with(':') {
        return format!("{}/", segments[0]);
    }
    let joined = segments.join("/");
    if joined.is_empty() {
        "/".to_string()
    } else {
        joined
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drives_from_bitmask() {
        assert_eq!(drives_from_bitmask(0), Vec::<String>::new());
        assert_eq!(drives_from_bitmask(0b0000_0101), vec!["A:", "C:"]);
        assert_eq!(drives_from_bitmask(0b1100), vec!["C:", "D:"]);
    }

    #[test]
    fn test_segments_round_trip_unix_style() {
        let segments = path_segments(Path::new("/home/me/src"));
        assert_eq!(segments, vec!["", "home", "me", "src"]);
        assert_eq!(join_segments(&segments), "/home/me/src");
    }

    #[test]
    fn test_join_bare_drive_is_anchored() {
        let segments = vec!["C:".to_string()];
        assert_eq!(join_segments(&segments), "C:/");
    }

    #[test]
    fn test_join_empty_is_root() {
        assert_eq!(join_segments(&[String::new()]), "/");
    }

    #[test]
    fn test_list_directory_splits_and_sorts() {
        let root = std::env::temp_dir().join(format!("filepick-fs-{}", std::process::id()));
        let _ = std::fs::remove_dir_all(&root);
        std::fs::create_dir_all(root.join("beta")).unwrap();
        std::fs::create_dir_all(root.join("alpha")).unwrap();
        std::fs::write(root.join("zz.txt"), b"z").unwrap();
        std::fs::write(root.join("aa.txt"), b"a").unwrap();

        let (directories, files) = list_directory(&root).unwrap();
        assert_eq!(directories, vec!["alpha", "beta"]);
        assert_eq!(files, vec!["aa.txt", "zz.txt"]);

        let _ = std::fs::remove_dir_all(&root);
    }

    #[test]
    fn test_list_missing_directory_fails() {
        assert!(list_directory(Path::new("/definitely/not/a/real/dir")).is_err());
    }
}
