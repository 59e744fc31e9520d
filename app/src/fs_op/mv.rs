use std::fs;
use std::path::Path;

use crate::fs_op::error::FsOpError;
use crate::fs_op::outcome::OperationResult;
use crate::fs_op::path::PathResolver;

/// Rename `src` to `dst`, both already resolved.
///
/// Destination collisions are platform-dependent. `std::fs::rename` replaces
/// an existing destination file on both POSIX (`rename(2)`) and Windows
/// (`MoveFileExW` with `MOVEFILE_REPLACE_EXISTING`), so an existing file is
/// overwritten silently there. `AlreadyExists` is only reported when the OS
/// refuses, e.g. renaming a directory onto a file on some systems.
pub fn rename_resolved(src: &Path, dst: &Path) -> Result<(), FsOpError> {
    fs::rename(src, dst).map_err(|e| {
        tracing::debug!("rename {} -> {} failed: {}", src.display(), dst.display(), e);
        FsOpError::from(e)
    })
}

/// Resolve both fragments against `resolver` and rename.
///
/// See [`rename_resolved`] for the overwrite caveat.
pub fn rename_file(resolver: &PathResolver, src: &str, dst: &str) -> OperationResult {
    let from = resolver.resolve(src);
    let to = resolver.resolve(dst);
    rename_resolved(Path::new(&from), Path::new(&to)).into()
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
    fn rename_relative_moves_content() {
        let td = tempdir().expect("tempdir");
        std::fs::write(td.path().join("a.txt"), "alpha").expect("write");
        let r = resolver_in(td.path());

        let res = rename_file(&r, "a.txt", "b.txt");
        assert_eq!(res, OperationResult::ok());
        assert!(!td.path().join("a.txt").exists());
        assert_eq!(std::fs::read_to_string(td.path().join("b.txt")).expect("read"), "alpha");
    }

    #[test]
    fn rename_missing_source_is_not_found() {
        let td = tempdir().expect("tempdir");
        let r = resolver_in(td.path());
        let res = rename_file(&r, "ghost.txt", "b.txt");
        assert_eq!(res, OperationResult::failed(FsOpError::NotFound));
    }

    #[test]
    fn rename_into_missing_folder_is_not_found() {
        let td = tempdir().expect("tempdir");
        std::fs::write(td.path().join("a.txt"), "x").expect("write");
        let r = resolver_in(td.path());
        let res = rename_file(&r, "a.txt", "no_such_dir/b.txt");
        assert_eq!(res.error, Some(FsOpError::NotFound));
        assert!(td.path().join("a.txt").exists());
    }

    #[cfg(unix)]
    #[test]
    fn rename_over_existing_file_replaces_it() {
        let td = tempdir().expect("tempdir");
        std::fs::write(td.path().join("a.txt"), "new").expect("write");
        std::fs::write(td.path().join("b.txt"), "old").expect("write");
        let r = resolver_in(td.path());
        assert!(rename_file(&r, "a.txt", "b.txt").success);
        assert_eq!(std::fs::read_to_string(td.path().join("b.txt")).expect("read"), "new");
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn rename_dir_onto_non_empty_dir_fails() {
        let td = tempdir().expect("tempdir");
        std::fs::create_dir(td.path().join("src")).expect("mkdir");
        std::fs::create_dir(td.path().join("dst")).expect("mkdir");
        std::fs::write(td.path().join("dst/keep.txt"), "x").expect("write");
        let r = resolver_in(td.path());
        let res = rename_file(&r, "src", "dst");
        assert!(!res.success);
        assert!(
            matches!(res.error, Some(FsOpError::Unknown(_)) | Some(FsOpError::AlreadyExists)),
            "unexpected error: {:?}",
            res.error
        );
    }
}
