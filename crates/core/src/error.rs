//! Error types for world construction

use thiserror::Error;

/// Errors raised while allocating a voxel grid.
///
/// Every other world operation is total: writes clip and lookups either wrap or
/// return empty.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WorldError {
    #[error("world extent must be non-zero on every axis (width={width}, depth={depth}, height={height})")]
    ZeroDimension {
        width: usize,
        depth: usize,
        height: usize,
    },

    #[error("world {axis} extent {extent} is too large")]
    TooLarge { axis: &'static str, extent: usize },
}
