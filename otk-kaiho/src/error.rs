use std::fmt;

/// Why extraction produced no records from a fetched page.
///
/// Distinct from an `Ok` empty batch: these mean the page did not carry
/// the expected structure at all, which callers treat as "no data" for
/// that fetch rather than a genuinely empty day.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum ExtractError {
    /// The 5-minute observation section was not present in the page text.
    SectionNotFound,
    /// The forecast table was not present in the parsed document.
    TableNotFound,
    /// The forecast table had the wrong row/column shape or a
    /// non-numeric level value.
    MalformedTable,
}

impl fmt::Display for ExtractError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExtractError::SectionNotFound => {
                write!(f, "observed-data section not found in gauge page")
            }
            ExtractError::TableNotFound => {
                write!(f, "forecast table not found in prediction page")
            }
            ExtractError::MalformedTable => {
                write!(f, "forecast table has an unexpected shape")
            }
        }
    }
}

impl std::error::Error for ExtractError {}
