use std::fs;
use std::path::Path;

use crate::fs_op::error::FsOpError;
use crate::fs_op::outcome::OperationResult;
use crate::fs_op::path::PathResolver;

/// Remove a file or an empty directory at an already-resolved `path`.
///
/// Unlike a recursive delete this refuses non-empty directories, and a
/// missing path is an error (`NotFound`) rather than a no-op. Deletion is
/// permanent; nothing goes to a trash folder.
///
/// Failures are `NotFound`, `AccessDenied` or `Unknown`; see
/// [`FsOpError::classify_removal`].
pub fn remove_resolved(path: &Path) -> Result<(), FsOpError> {
    let res = fs::symlink_metadata(path).and_then(|md| {
        if md.is_dir() {
            fs::remove_dir(path)
        } else {
            fs::remove_file(path)
        }
    });
    res.map_err(|e| {
        tracing::debug!("remove {} failed: {}", path.display(), e);
        FsOpError::classify_removal(&e)
    })
}

/// Resolve `fragment` against `resolver` and remove it.
pub fn delete_file(resolver: &PathResolver, fragment: &str) -> OperationResult {
    let target = resolver.resolve(fragment);
    remove_resolved(Path::new(&target)).into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fs_op::path::Origin;
    use tempfile::tempdir;

    fn resolver_in(dir: &Path) -> PathResolver {
        let reference = dir.join("patch.file").to_string_lossy().into_owned();
        PathResolver::new(Origin::new(Some(reference), None))
    }

    #[test]
    fn delete_file_and_empty_dir() {
        let td = tempdir().expect("create temp dir");
        let dir = td.path().join("sub");
        std::fs::create_dir_all(&dir).expect("create subdir");
        let f = dir.join("f.txt");
        std::fs::write(&f, b"x").expect("write file");
        let r = resolver_in(td.path());

        assert!(delete_file(&r, "sub/f.txt").success);
        assert!(!f.exists(), "file should be removed");

        assert!(delete_file(&r, "sub").success);
        assert!(!dir.exists(), "dir should be removed");
    }

    #[test]
    fn delete_missing_is_not_found() {
        let td = tempdir().expect("tempdir");
        let r = resolver_in(td.path());
        let res = delete_file(&r, "missing.txt");
        assert_eq!(res, OperationResult::failed(FsOpError::NotFound));
    }

    #[test]
    fn delete_nul_byte_fragment_is_unknown() {
        let td = tempdir().expect("tempdir");
        let r = resolver_in(td.path());
        let res = delete_file(&r, "bad\0name.txt");
        assert_eq!(res, OperationResult::failed(FsOpError::Unknown(-1)));
    }

    #[test]
    fn delete_non_empty_dir_fails_and_keeps_contents() {
        let td = tempdir().expect("tempdir");
        let dir = td.path().join("full");
        std::fs::create_dir(&dir).expect("mkdir");
        std::fs::write(dir.join("keep.txt"), "x").expect("write");
        let r = resolver_in(td.path());

        let res = delete_file(&r, "full");
        assert!(!res.success);
        assert!(dir.join("keep.txt").exists());
    }

    #[test]
    fn delete_absolute_fragment_ignores_base_dir() {
        let td = tempdir().expect("tempdir");
        let other = tempdir().expect("tempdir");
        let f = other.path().join("abs.txt");
        std::fs::write(&f, "x").expect("write");
        let r = resolver_in(td.path());

        assert!(delete_file(&r, &f.to_string_lossy()).success);
        assert!(!f.exists());
    }
}
