use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum ClipperError {
    #[error("coordinate ({x}, {y}) is outside the supported range")]
    CoordinateOutOfRange { x: i64, y: i64 },
    #[error("open paths can only be added as subject paths")]
    OpenClipPath,
    #[error("open paths were added; use the tree form of execute")]
    OpenPathsRequirePolyTree,
    #[error("intersections in a scanbeam could not be ordered")]
    IntersectionOrder,
    #[error("execute is already running on this instance")]
    ExecuteLocked,
    #[error("local maximum has no matching pair edge")]
    MaximaPair,
    #[error("edge has no next bound segment to advance to")]
    InvalidEdgeUpdate,
    #[error("{0} is not a valid option value")]
    InvalidOption(u8),
}

pub type ClipperResult<T> = Result<T, ClipperError>;
