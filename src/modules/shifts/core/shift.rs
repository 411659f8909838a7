use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// Roster shifts have a fixed length; the upstream only publishes starts.
pub const SHIFT_LENGTH_HOURS: i64 = 12;

/// Roster shift as served by the upstream `Shifts` route. `ShiftDate` is a
/// plain `YYYY-MM-DD` string and `ShiftStartTime` a wall-clock `HH:MM`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Shift {
    pub id: String,
    pub shift_date: String,
    pub shift_start_time: String,
    pub shift_name: String,
}

impl Shift {
    /// Combine date and start time into a UTC instant. Returns `None` when
    /// the upstream fields do not form a valid timestamp.
    pub fn start_instant(&self) -> Option<DateTime<Utc>> {
        let raw = format!("{}T{}:00Z", self.shift_date, self.shift_start_time);
        DateTime::parse_from_rfc3339(&raw)
            .ok()
            .map(|instant| instant.with_timezone(&Utc))
    }

    /// The window this shift covers, start inclusive.
    pub fn window(&self) -> Option<(DateTime<Utc>, DateTime<Utc>)> {
        let start = self.start_instant()?;
        Some((start, start + Duration::hours(SHIFT_LENGTH_HOURS)))
    }

    /// Label shown on the board, e.g. `2024-03-01: Day Shift`.
    pub fn display_name(&self) -> String {
        format!("{}: {}", self.shift_date, self.shift_name)
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ShiftsEnvelope {
    pub shifts: Vec<Shift>,
}
