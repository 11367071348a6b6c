/// Result of a delete request that did not fail outright.
///
/// Both courses and instructors report deletes through this type so the client can
/// treat the two confirmation views the same way.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// The record was removed by this request.
    Deleted,
    /// The record no longer existed; nothing was left to delete.
    AlreadyGone,
    /// The record exists but its concurrency token no longer matches.
    Conflict,
}
