use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    OnTrack,
    Behind,
    NotApplicable,
}

pub const ON_TRACK_COLOR: &str = "rgba(34,197,94,0.85)";
pub const BEHIND_COLOR: &str = "rgba(239,68,68,0.85)";

impl Status {
    pub fn tag(self) -> &'static str {
        match self {
            Status::OnTrack => "on_track",
            Status::Behind => "behind",
            Status::NotApplicable => "n/a",
        }
    }

    // Neutral cells draw like on-track bars.
    pub fn color(self) -> &'static str {
        match self {
            Status::Behind => BEHIND_COLOR,
            Status::OnTrack | Status::NotApplicable => ON_TRACK_COLOR,
        }
    }
}
