//! File-system resource helpers.
use std::io;
use std::path::Path;

/// Ensure the parent directory of `path` exists, creating it (and any
/// ancestors) if necessary.
///
/// # Errors
///
/// Returns an error if the directory cannot be created.
pub fn ensure_parent_dir(path: &Path) -> io::Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)?;
    }
    Ok(())
}

/// Return whether anything (including a broken symlink) occupies `path`.
///
/// # Errors
///
/// Returns an error for any failure other than "not found", such as a
/// permission problem on a parent directory.
pub fn occupied(path: &Path) -> io::Result<bool> {
    match path.symlink_metadata() {
        Ok(_) => Ok(true),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(false),
        Err(e) => Err(e),
    }
}

/// Remove an existing file or symlink at `path`, including broken symlinks.
///
/// Does nothing if `path` does not exist.
///
/// # Errors
///
/// Returns an error if the path exists but cannot be removed.
pub fn remove_existing(path: &Path) -> io::Result<()> {
    if occupied(path)? {
        std::fs::remove_file(path)?;
    }
    Ok(())
}

/// Write `content` to `path` and set its permission bits to exactly `mode`.
///
/// The mode is applied after the write so the process umask does not
/// narrow it. On non-Unix platforms the mode is ignored.
///
/// # Errors
///
/// Returns an error if the file cannot be written or its permissions set.
pub fn write_with_mode(path: &Path, content: &[u8], mode: u32) -> io::Result<()> {
    std::fs::write(path, content)?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        std::fs::set_permissions(path, std::fs::Permissions::from_mode(mode))?;
    }
    #[cfg(not(unix))]
    let _ = mode;

    Ok(())
}
