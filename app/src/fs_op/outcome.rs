use crate::fs_op::error::FsOpError;

/// Result of one rename/delete/spawn, as reported on the status outlet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OperationResult {
    pub success: bool,
    pub error: Option<FsOpError>,
}

impl OperationResult {
    pub fn ok() -> Self {
        Self { success: true, error: None }
    }

    pub fn failed(error: FsOpError) -> Self {
        Self { success: false, error: Some(error) }
    }
}

impl From<Result<(), FsOpError>> for OperationResult {
    fn from(res: Result<(), FsOpError>) -> Self {
        match res {
            Ok(()) => OperationResult::ok(),
            Err(e) => OperationResult::failed(e),
        }
    }
}
