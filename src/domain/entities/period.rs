//! Time period entity driving one pipeline run.

/// English month names in calendar order, used for search queries and
/// dataset directory names.
pub const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// A (year, month) unit of work for the pipeline.
///
/// One `Period` drives exactly one orchestrator run. Instances are created by
/// the run driver and consumed read-only; nothing mutates a period after
/// construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Period {
    pub year: i32,
    /// English month name, e.g. "June". Also the dataset subdirectory name.
    pub month_name: &'static str,
    /// 1-based month index (1 = January).
    pub month_index: u32,
}

impl Period {
    /// Creates a period from a year and a 1-based month index.
    ///
    /// Returns `None` if `month_index` is outside `1..=12`.
    pub fn new(year: i32, month_index: u32) -> Option<Self> {
        let month_name = *MONTH_NAMES.get(month_index.checked_sub(1)? as usize)?;
        Some(Self {
            year,
            month_name,
            month_index,
        })
    }

    /// Iterates every (year, month) period in the given year range,
    /// year-major, months January through December.
    pub fn all(years: std::ops::RangeInclusive<i32>) -> impl Iterator<Item = Period> {
        years.flat_map(|year| {
            MONTH_NAMES
                .iter()
                .enumerate()
                .map(move |(index, month_name)| Period {
                    year,
                    month_name,
                    month_index: index as u32 + 1,
                })
        })
    }

    /// Human-readable label, e.g. "June 2015".
    pub fn label(&self) -> String {
        format!("{} {}", self.month_name, self.year)
    }
}

impl std::fmt::Display for Period {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.month_name, self.year)
    }
}

/// Per-period result produced at the end of orchestration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub period: Period,
    /// Number of downloads that were fetched, validated, and kept.
    /// Never exceeds `quota`.
    pub success_count: usize,
    /// Target count of validated downloads for the period.
    pub quota: usize,
}
