//! Rubric score types and the coercion of free-form judge output into them.

mod coerce;

pub use coerce::coerce;

use serde::{Serialize, Serializer};
use serde_json::Value;
use std::fmt;
use std::sync::Arc;

/// The fixed rubric. Declaration order is report order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Metric {
    Fluency,
    Coherence,
    Complexity,
    Engagement,
    Frustration,
}

impl Metric {
    pub const ALL: [Metric; 5] = [
        Metric::Fluency,
        Metric::Coherence,
        Metric::Complexity,
        Metric::Engagement,
        Metric::Frustration,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Metric::Fluency => "fluency",
            Metric::Coherence => "coherence",
            Metric::Complexity => "complexity",
            Metric::Engagement => "engagement",
            Metric::Frustration => "frustration",
        }
    }

    pub(crate) fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Score for one metric as reported by the judge.
///
/// `score` and `confidence` are kept as the raw JSON values the judge produced;
/// nothing checks that they are numbers or within range.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MetricScore {
    pub score: Value,
    pub confidence: Value,
    pub evidence: String,
}

impl MetricScore {
    /// Entry used when the judge said nothing about a metric.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Entry used when the judge output could not be read at all.
    pub fn unreadable(text: &str) -> Self {
        Self {
            score: Value::Null,
            confidence: Value::Null,
            evidence: text.to_string(),
        }
    }
}

/// All five metric scores, always complete and in [`Metric::ALL`] order.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreReport {
    entries: [Arc<MetricScore>; 5],
    fallback: bool,
}

impl ScoreReport {
    pub(crate) fn from_entries(entries: [Arc<MetricScore>; 5]) -> Self {
        Self {
            entries,
            fallback: false,
        }
    }

    /// Report for unreadable judge output: every metric shares one entry.
    pub(crate) fn fallback(text: &str) -> Self {
        let shared = Arc::new(MetricScore::unreadable(text));
        Self {
            entries: std::array::from_fn(|_| Arc::clone(&shared)),
            fallback: true,
        }
    }

    pub fn get(&self, metric: Metric) -> &MetricScore {
        &self.entries[metric.index()]
    }

    /// Shared handle to a metric entry; fallback reports hand out the same one for every metric.
    pub fn entry(&self, metric: Metric) -> &Arc<MetricScore> {
        &self.entries[metric.index()]
    }

    pub fn iter(&self) -> impl Iterator<Item = (Metric, &MetricScore)> + '_ {
        Metric::ALL
            .iter()
            .map(move |m| (*m, self.entries[m.index()].as_ref()))
    }

    pub fn is_fallback(&self) -> bool {
        self.fallback
    }
}

/// Wire shape of a report; field order is [`Metric::ALL`] order.
#[derive(Serialize)]
struct ReportView<'a> {
    fluency: &'a MetricScore,
    coherence: &'a MetricScore,
    complexity: &'a MetricScore,
    engagement: &'a MetricScore,
    frustration: &'a MetricScore,
}

impl Serialize for ScoreReport {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        ReportView {
            fluency: self.get(Metric::Fluency),
            coherence: self.get(Metric::Coherence),
            complexity: self.get(Metric::Complexity),
            engagement: self.get(Metric::Engagement),
            frustration: self.get(Metric::Frustration),
        }
        .serialize(serializer)
    }
}
