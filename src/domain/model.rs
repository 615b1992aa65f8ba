use crate::utils::error::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A zero-based line index that must contain `contains` before anything is removed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnchorCheck {
    pub index: usize,
    pub contains: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

impl AnchorCheck {
    pub fn new(index: usize, contains: impl Into<String>) -> Self {
        Self {
            index,
            contains: contains.into(),
            label: None,
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }
}

/// Half-open interval `[start, end)` of zero-based line indices.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExclusionRange {
    pub start: usize,
    pub end: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

impl ExclusionRange {
    pub fn new(start: usize, end: usize) -> Self {
        Self {
            start,
            end,
            label: None,
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Number of indices covered; reversed ranges are empty.
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl fmt::Display for ExclusionRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {})", self.start, self.end)?;
        if let Some(label) = &self.label {
            write!(f, " {}", label)?;
        }
        Ok(())
    }
}

/// Union of line indices to drop, kept as sorted, disjoint `[start, end)` intervals.
///
/// Membership never materializes individual indices, so a range reaching far
/// past the end of the file costs nothing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExclusionSet {
    intervals: Vec<(usize, usize)>,
}

impl ExclusionSet {
    pub fn insert_range(&mut self, range: &ExclusionRange) {
        if range.is_empty() {
            return;
        }
        self.intervals.push((range.start, range.end));
        self.intervals.sort_unstable();

        let mut merged: Vec<(usize, usize)> = Vec::with_capacity(self.intervals.len());
        for &(start, end) in &self.intervals {
            match merged.last_mut() {
                Some(last) if start <= last.1 => last.1 = last.1.max(end),
                _ => merged.push((start, end)),
            }
        }
        self.intervals = merged;
    }

    pub fn contains(&self, index: usize) -> bool {
        let after = self.intervals.partition_point(|&(start, _)| start <= index);
        after > 0 && index < self.intervals[after - 1].1
    }

    pub fn len(&self) -> usize {
        self.intervals.iter().map(|(start, end)| end - start).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.intervals.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.intervals.iter().flat_map(|&(start, end)| start..end)
    }
}

impl<'a> FromIterator<&'a ExclusionRange> for ExclusionSet {
    fn from_iter<I: IntoIterator<Item = &'a ExclusionRange>>(iter: I) -> Self {
        let mut set = ExclusionSet::default();
        for range in iter {
            set.insert_range(range);
        }
        set
    }
}

/// An anchor whose line did not contain the expected marker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnchorMismatch {
    pub index: usize,
    pub expected: String,
    /// `None` when the file is too short to have the line at all.
    pub found: Option<String>,
    pub label: Option<String>,
}

impl fmt::Display for AnchorMismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Error: Line {} (index {}) does not contain '{}'. Found: ",
            self.index + 1,
            self.index,
            self.expected
        )?;
        match &self.found {
            Some(line) => write!(f, "{:?}", line),
            None => write!(f, "<no such line>"),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct StripReport {
    pub path: String,
    pub total_lines: usize,
    pub removed_lines: usize,
    pub remaining_lines: usize,
    pub dry_run: bool,
    pub completed_at: DateTime<Utc>,
}

impl StripReport {
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}
