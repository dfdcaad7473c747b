use std::io;
use std::path::Path;

/// Creates every missing directory above `path`. A bare file name has nothing to create.
pub fn ensure_parent_exists(path: &Path) -> io::Result<()> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() && !parent.exists() => {
            std::fs::create_dir_all(parent)
        }
        _ => Ok(()),
    }
}
