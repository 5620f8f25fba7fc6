//! Timed result of a run and its console renderings.

use std::fmt::Write as _;
use std::time::Duration;

use serde::Serialize;

use crate::aggregate::PrimeSummary;
use crate::error::SieveError;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SieveReport {
    /// Wall-clock time of allocation, sieving and aggregation.
    #[serde(rename = "elapsed_ms", serialize_with = "serialize_millis")]
    pub elapsed: Duration,
    pub limit: usize,
    pub workers: usize,
    #[serde(flatten)]
    pub summary: PrimeSummary,
}

impl SieveReport {
    /// Elapsed milliseconds, saturating at `u64::MAX`.
    pub fn elapsed_ms(&self) -> u64 {
        saturating_millis(self.elapsed)
    }

    /// Two-line console format: timing, count and sum, then the largest
    /// primes each followed by a space.
    pub fn render_text(&self) -> String {
        let mut out = format!(
            "{}ms {} {}\n",
            self.elapsed_ms(),
            self.summary.count,
            self.summary.sum
        );
        for prime in &self.summary.largest {
            let _ = write!(out, "{prime} ");
        }
        out.push('\n');
        out
    }

    pub fn render_json(&self) -> Result<String, SieveError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

fn saturating_millis(elapsed: Duration) -> u64 {
    u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX)
}

fn serialize_millis<S>(elapsed: &Duration, serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    serializer.serialize_u64(saturating_millis(*elapsed))
}
