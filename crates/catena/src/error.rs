use alloc::collections::TryReserveError;
use core::{error::Error, fmt::Display};

#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u32)]
pub enum ListErrorKind {
    /// The node arena could not grow.
    AllocationFailure = 1,
    /// A negative index or a missing anchor.
    InvalidArgument,
    IndexOutOfBounds,
    /// The anchor is not linked into this list.
    NodeNotFound,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListError {
    kind: ListErrorKind,
}

impl ListError {
    pub fn kind(&self) -> ListErrorKind {
        self.kind
    }

    pub fn as_error_code(&self) -> u32 {
        self.kind() as u32
    }
}

impl Display for ListError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let msg = match self.kind {
            ListErrorKind::AllocationFailure => "out of memory for list node",
            ListErrorKind::InvalidArgument => "invalid argument",
            ListErrorKind::IndexOutOfBounds => "index out of bounds",
            ListErrorKind::NodeNotFound => "node not found in the list",
        };
        f.write_str(msg)
    }
}

impl From<ListErrorKind> for ListError {
    fn from(value: ListErrorKind) -> Self {
        ListError { kind: value }
    }
}

impl From<TryReserveError> for ListError {
    fn from(_: TryReserveError) -> Self {
        ListErrorKind::AllocationFailure.into()
    }
}

impl Error for ListError {}

pub type ListResult<T> = Result<T, ListError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_are_stable() {
        let err = ListError::from(ListErrorKind::AllocationFailure);
        assert_eq!(err.as_error_code(), 1);
        assert_eq!(ListError::from(ListErrorKind::NodeNotFound).as_error_code(), 4);
    }

    #[test]
    fn try_reserve_maps_to_allocation_failure() {
        let mut v: alloc::vec::Vec<u64> = alloc::vec::Vec::new();
        let err: ListError = v.try_reserve(usize::MAX).unwrap_err().into();
        assert_eq!(err.kind(), ListErrorKind::AllocationFailure);
    }
}
