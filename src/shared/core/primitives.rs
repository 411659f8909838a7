/// Inclusive date window as the upstream expects it: plain `YYYY-MM-DD`
/// strings relayed verbatim into `StartDate`/`EndDate` query parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateRange {
    pub start_date: String,
    pub end_date: String,
}

impl DateRange {
    pub const REQUIRED_MESSAGE: &'static str = "StartDate and EndDate are required.";

    pub fn new(start_date: impl Into<String>, end_date: impl Into<String>) -> Self {
        Self {
            start_date: start_date.into(),
            end_date: end_date.into(),
        }
    }

    /// Build a range from optional query parameters. An empty string counts
    /// as absent.
    pub fn require(
        start_date: Option<String>,
        end_date: Option<String>,
    ) -> Result<Self, &'static str> {
        match (start_date, end_date) {
            (Some(start), Some(end)) if !start.is_empty() && !end.is_empty() => {
                Ok(Self::new(start, end))
            }
            _ => Err(Self::REQUIRED_MESSAGE),
        }
    }
}
