//! Platform to launcher lookup.

use std::env;
use std::ffi::OsStr;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    /// Linux and the BSDs, opened through freedesktop `xdg-open`.
    UnixDesktop,
    Windows,
    Darwin,
    Unsupported,
}

/// A program that opens a file with its associated application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Launcher {
    pub program: &'static str,
    /// Arguments placed before the file path.
    pub args: &'static [&'static str],
}

const LAUNCHERS: &[(Platform, Launcher)] = &[
    (
        Platform::UnixDesktop,
        Launcher {
            program: "xdg-open",
            args: &[],
        },
    ),
    (
        // The empty string is the window title `start` expects before a quoted path.
        Platform::Windows,
        Launcher {
            program: "cmd.exe",
            args: &["/C", "start", ""],
        },
    ),
    (
        Platform::Darwin,
        Launcher {
            program: "open",
            args: &[],
        },
    ),
];

impl Platform {
    pub fn current() -> Self {
        Self::from_os(env::consts::OS)
    }

    /// Map a `std::env::consts::OS` value to a platform family.
    pub fn from_os(os: &str) -> Self {
        match os {
            "linux" | "freebsd" | "openbsd" | "netbsd" | "dragonfly" => Self::UnixDesktop,
            "windows" => Self::Windows,
            "macos" => Self::Darwin,
            _ => Self::Unsupported,
        }
    }

    pub fn launcher(self) -> Option<Launcher> {
        LAUNCHERS
            .iter()
            .find(|(platform, _)| *platform == self)
            .map(|(_, launcher)| *launcher)
    }
}

/// Locate `program` on the `PATH` search path.
pub fn find_in_path(program: &str) -> Option<PathBuf> {
    let paths = env::var_os("PATH")?;
    find_in_dirs(program, &paths)
}

/// Locate `program` in a `PATH`-style list of directories.
pub fn find_in_dirs(program: &str, paths: &OsStr) -> Option<PathBuf> {
    env::split_paths(paths)
        .map(|dir| dir.join(program))
        .find(|candidate| is_executable(candidate))
}

#[cfg(unix)]
fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;

    path.metadata()
        .is_ok_and(|meta| meta.is_file() && meta.permissions().mode() & 0o111 != 0)
}

#[cfg(not(unix))]
fn is_executable(path: &Path) -> bool {
    path.is_file()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::OsString;
    use tempfile::tempdir;

    #[test]
    fn test_from_os_maps_known_platforms() {
        assert_eq!(Platform::from_os("linux"), Platform::UnixDesktop);
        assert_eq!(Platform::from_os("freebsd"), Platform::UnixDesktop);
        assert_eq!(Platform::from_os("windows"), Platform::Windows);
        assert_eq!(Platform::from_os("macos"), Platform::Darwin);
        assert_eq!(Platform::from_os("haiku"), Platform::Unsupported);
    }

    #[test]
    fn test_launcher_table() {
        let unix = Platform::UnixDesktop.launcher().unwrap();
        assert_eq!(unix.program, "xdg-open");
        assert!(unix.args.is_empty());

        let windows = Platform::Windows.launcher().unwrap();
        assert_eq!(windows.program, "cmd.exe");
        assert_eq!(windows.args, &["/C", "start", ""]);

        assert_eq!(Platform::Darwin.launcher().unwrap().program, "open");
        assert_eq!(Platform::Unsupported.launcher(), None);
    }

    fn write_program(path: &Path) {
        std::fs::write(path, "#!/bin/sh\n").unwrap();
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            std::fs::set_permissions(path, std::fs::Permissions::from_mode(0o755)).unwrap();
        }
    }

    #[test]
    fn test_find_in_dirs_returns_first_match() {
        let first = tempdir().unwrap();
        let second = tempdir().unwrap();
        write_program(&second.path().join("xdg-open"));

        let paths = env::join_paths([first.path(), second.path()]).unwrap();
        assert_eq!(
            find_in_dirs("xdg-open", &paths),
            Some(second.path().join("xdg-open"))
        );
    }

    #[test]
    fn test_find_in_dirs_ignores_directories_and_missing() {
        let dir = tempdir().unwrap();
        std::fs::create_dir(dir.path().join("open")).unwrap();

        let paths = OsString::from(dir.path());
        assert_eq!(find_in_dirs("open", &paths), None);
        assert_eq!(find_in_dirs("xdg-open", &paths), None);
    }

    #[cfg(unix)]
    #[test]
    fn test_find_in_dirs_skips_non_executable_files() {
        use std::os::unix::fs::PermissionsExt;

        let first = tempdir().unwrap();
        let second = tempdir().unwrap();
        let shadow = first.path().join("xdg-open");
        std::fs::write(&shadow, "not a program").unwrap();
        std::fs::set_permissions(&shadow, std::fs::Permissions::from_mode(0o644)).unwrap();
        write_program(&second.path().join("xdg-open"));

        let paths = env::join_paths([first.path(), second.path()]).unwrap();
        assert_eq!(
            find_in_dirs("xdg-open", &paths),
            Some(second.path().join("xdg-open"))
        );
    }
}
