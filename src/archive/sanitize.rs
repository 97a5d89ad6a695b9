//! Entry path composition and zip-slip protection.

use crate::error::{Error, Result};

use std::path::{Component, Path, PathBuf, MAIN_SEPARATOR};

/// Compose the output path of an archive entry.
///
/// The entry name is appended to `target` with the platform separator and
/// surrounding whitespace is trimmed from the result. Names that are
/// absolute, or whose `..` segments climb above `target`, are rejected.
pub fn resolve_entry_path(target: &Path, name: &str) -> Result<PathBuf> {
    let composed = format!("{}{}{}", target.display(), MAIN_SEPARATOR, name);
    let resolved = PathBuf::from(composed.trim());

    if escapes_target(Path::new(name.trim_end())) {
        return Err(Error::ZipSlip {
            entry: name.to_owned(),
            resolved,
        });
    }
    Ok(resolved)
}

/// Walk the components and track depth below the target.
fn escapes_target(entry: &Path) -> bool {
    let mut depth: usize = 0;
    for component in entry.components() {
        match component {
            Component::Normal(_) => depth += 1,
            Component::CurDir => {}
            Component::ParentDir => match depth.checked_sub(1) {
                Some(parent) => depth = parent,
                None => return true,
            },
            Component::RootDir | Component::Prefix(_) => return true,
        }
    }
    false
}
