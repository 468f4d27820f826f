// Candidate ↔ vacancy matching.
// The scorer is pure and synchronous; ranking and feedback analysis build on it,
// and handlers expose all three over HTTP.

pub mod feedback;
pub mod handlers;
pub mod keywords;
pub mod profiles;
pub mod ranking;
pub mod records;
pub mod scorer;
pub mod weights;
