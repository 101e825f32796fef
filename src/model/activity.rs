use serde::{Deserialize, Serialize};

/// Activity as presented by the listing endpoint.
///
/// The activity name is not part of the body; the listing endpoint keys its
/// response map by name. The participant list carries the enrolled emails and
/// should be treated as unordered by consumers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityDto {
    pub description: String,
    pub schedule: String,
    pub max_participants: i32,
    pub participants: Vec<String>,
}
