//
//  Copyright (C) 2022-2024  Chase Ruskin
//
//  This program is free software: you can redistribute it and/or modify
//  it under the terms of the GNU General Public License as published by
//  the Free Software Foundation, either version 3 of the License, or
//  (at your option) any later version.
//
//  This program is distributed in the hope that it will be useful,
//  but WITHOUT ANY WARRANTY; without even the implied warranty of
//  MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
//  GNU General Public License for more details.
//
//  You should have received a copy of the GNU General Public License
//  along with this program.  If not, see <http://www.gnu.org/licenses/>.
//

use std::io::Write;
use std::path::{Path, PathBuf};

/// Converts the `path` into a string with forward slashes as separators.
pub fn into_std_str(path: PathBuf) -> String {
    path.display().to_string().replace('\\', "/")
}

/// Resolves a relative path into a full path if given relative to some `root` path.
///
/// Absolute paths are returned untouched.
pub fn resolve_rel_path(root: &Path, p: &Path) -> PathBuf {
    match p.is_relative() {
        true => root.join(p),
        false => p.to_path_buf(),
    }
}

/// Writes `contents` to the file at `path` without ever exposing a partially
/// written file.
///
/// The data is first written to a temporary file in the same directory, then
/// renamed over `path`. Missing parent directories are created.
///
/// An existing file at `path` keeps its permissions. A new file gets the
/// same permissions as one made by `File::create` (0o666 minus the umask on
/// unix).
pub fn write_atomic(path: &Path, contents: &str) -> std::io::Result<()> {
    let dir = match path.parent() {
        Some(p) if p.as_os_str().is_empty() == false => p.to_path_buf(),
        _ => PathBuf::from("."),
    };
    std::fs::create_dir_all(&dir)?;
    let mut builder = tempfile::Builder::new();
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        // the mode is masked by the umask on creation
        builder.permissions(std::fs::Permissions::from_mode(0o666));
    }
    let mut temp_file = builder.tempfile_in(&dir)?;
    if let Ok(meta) = std::fs::metadata(path) {
        temp_file.as_file().set_permissions(meta.permissions())?;
    }
    temp_file.write_all(contents.as_bytes())?;
    temp_file.flush()?;
    temp_file.persist(path).map_err(|e| e.error)?;
    Ok(())
}
