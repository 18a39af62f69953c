//! Host lookup for external programs.

use std::ffi::OsStr;
use std::path::{Path, PathBuf};

/// Find `program` the way a shell would.
///
/// Names containing a path separator are checked as-is. Bare names are
/// searched in each entry of `search_path` (a `PATH`-style list). When
/// `pathext` is given (a `PATHEXT`-style list such as `.COM;.EXE`), each
/// extension is also tried for names that have none.
#[must_use]
pub fn find_program(
    program: &str,
    search_path: Option<&OsStr>,
    pathext: Option<&OsStr>,
) -> Option<PathBuf> {
    if program.is_empty() {
        return None;
    }

    let names = candidate_names(program, pathext);

    if Path::new(program).components().count() > 1 {
        return names.into_iter().map(PathBuf::from).find(|candidate| is_executable(candidate));
    }

    std::env::split_paths(search_path?)
        .flat_map(|dir| names.iter().map(move |name| dir.join(name)))
        .find(|candidate| is_executable(candidate))
}

/// Resolve `program` against the current `PATH` (and `PATHEXT` off Unix).
#[must_use]
pub fn locate(program: &str) -> Option<PathBuf> {
    let path = std::env::var_os("PATH");
    let pathext = if cfg!(unix) { None } else { std::env::var_os("PATHEXT") };
    let found = find_program(program, path.as_deref(), pathext.as_deref());
    match found {
        Some(ref p) => tracing::debug!(program, path = %p.display(), "program found"),
        None => tracing::debug!(program, "program not found on PATH"),
    }
    found
}

/// `program` itself, followed by `program` + each `PATHEXT` extension if it has none.
fn candidate_names(program: &str, pathext: Option<&OsStr>) -> Vec<String> {
    let mut names = vec![program.to_string()];
    if Path::new(program).extension().is_none() {
        if let Some(exts) = pathext.and_then(OsStr::to_str) {
            names.extend(
                exts.split(';').filter(|ext| !ext.is_empty()).map(|ext| format!("{program}{ext}")),
            );
        }
    }
    names
}

#[cfg(unix)]
fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;

    std::fs::metadata(path).is_ok_and(|m| m.is_file() && m.permissions().mode() & 0o111 != 0)
}

#[cfg(not(unix))]
fn is_executable(path: &Path) -> bool {
    std::fs::metadata(path).is_ok_and(|m| m.is_file())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(name);
        let _ = std::fs::remove_dir_all(&dir);
        std::fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[cfg(unix)]
    fn make_executable(path: &Path) {
        use std::os::unix::fs::PermissionsExt;

        std::fs::write(path, "#!/bin/sh\n").unwrap();
        std::fs::set_permissions(path, std::fs::Permissions::from_mode(0o755)).unwrap();
    }

    #[test]
    fn empty_name_is_never_found() {
        assert!(find_program("", Some(OsStr::new("/usr/bin")), None).is_none());
    }

    #[test]
    fn missing_path_variable() {
        assert!(find_program("vhs", None, None).is_none());
    }

    #[test]
    fn missing_program() {
        let dir = scratch("steering_demo_probe_missing");
        let path = std::env::join_paths([&dir]).unwrap();
        assert!(find_program("definitely-not-here", Some(path.as_os_str()), None).is_none());
        let _ = std::fs::remove_dir_all(&dir);
    }

    #[cfg(unix)]
    #[test]
    fn finds_program_in_later_entry() {
        let empty = scratch("steering_demo_probe_empty");
        let bin = scratch("steering_demo_probe_bin");
        make_executable(&bin.join("vhs"));

        let path = std::env::join_paths([&empty, &bin]).unwrap();
        assert_eq!(find_program("vhs", Some(path.as_os_str()), None), Some(bin.join("vhs")));

        let _ = std::fs::remove_dir_all(&empty);
        let _ = std::fs::remove_dir_all(&bin);
    }

    #[cfg(unix)]
    #[test]
    fn skips_non_executable_file() {
        let dir = scratch("steering_demo_probe_noexec");
        std::fs::write(dir.join("vhs"), "not a program").unwrap();

        let path = std::env::join_paths([&dir]).unwrap();
        assert!(find_program("vhs", Some(path.as_os_str()), None).is_none());

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[cfg(unix)]
    #[test]
    fn explicit_path_ignores_search_path() {
        let dir = scratch("steering_demo_probe_explicit");
        let program = dir.join("recorder");
        make_executable(&program);

        let name = program.to_str().unwrap();
        assert_eq!(find_program(name, None, None), Some(program.clone()));

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn pathext_adds_extensions_to_bare_names() {
        let names = candidate_names("vhs", Some(OsStr::new(".COM;.EXE;;.BAT")));
        assert_eq!(names, ["vhs", "vhs.COM", "vhs.EXE", "vhs.BAT"]);
    }

    #[test]
    fn pathext_leaves_named_extension_alone() {
        let names = candidate_names("vhs.exe", Some(OsStr::new(".COM;.EXE")));
        assert_eq!(names, ["vhs.exe"]);
        assert_eq!(candidate_names("vhs", None), ["vhs"]);
    }

    #[test]
    fn finds_program_through_pathext() {
        let dir = scratch("steering_demo_lookup_pathext");
        let program = dir.join("vhs.EXE");
        std::fs::write(&program, "").unwrap();
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            std::fs::set_permissions(&program, std::fs::Permissions::from_mode(0o755)).unwrap();
        }

        let path = std::env::join_paths([&dir]).unwrap();
        let pathext = OsStr::new(".COM;.EXE");
        assert_eq!(find_program("vhs", Some(path.as_os_str()), Some(pathext)), Some(program));
        assert!(find_program("vhs", Some(path.as_os_str()), None).is_none());

        let _ = std::fs::remove_dir_all(&dir);
    }
}
