use thiserror::Error as ThisError;

/// Every failure the solver can report. The taxonomy is flat: one kind per
/// condition, each with a short human-readable message. Merge kinds
/// (`ComponentsNoSharedEdge`, `NotConvex`, `MergeTooManyPoints`,
/// `MergeError`) are swallowed by the merger, which skips the candidate;
/// everything else propagates to the caller.
#[derive(ThisError, Debug, Clone, PartialEq, Eq)]
pub enum Error {
  #[error("polygon needs at least 3 distinct points")]
  PolygonTooFewPoints,
  #[error("polygon is degenerate: signed area is zero")]
  PolygonDegenerate,
  #[error("polygon is not simple: {0}")]
  PolygonNotSimple(String),
  #[error("invalid coordinate: {0}")]
  InvalidCoordinate(String),
  #[error("point is not part of the ring")]
  PointNotInRing,
  #[error("no admissible bridge: {0}")]
  BridgeFailure(String),
  #[error("bridge coincides with an existing ring edge: {0}")]
  StitchWinnerSubsequence(String),
  #[error("ear clipping failed: {0}")]
  EarClippingFailure(String),
  #[error("components do not share an edge")]
  ComponentsNoSharedEdge,
  #[error("ring is not a counter-clockwise convex cycle")]
  NotConvex,
  #[error("components share more than a single edge")]
  MergeTooManyPoints,
  #[error("merge failed: {0}")]
  MergeError(String),
  #[error("guard coverage failure: {0}")]
  GuardCoverageFailure(String),
}
