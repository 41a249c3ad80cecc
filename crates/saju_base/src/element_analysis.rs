//! Five-element distribution over the eight stem/branch slots.

use serde::ser::{Serialize, SerializeMap, SerializeStruct, Serializer};
use tracing::debug;

use crate::element::{ALL_ELEMENTS, Element};
use crate::pillar::FourPillars;

/// Stem + branch slots across the four pillars.
pub const PILLAR_SLOTS: u8 = 8;

/// Status tag for an element, keyed purely by its count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ElementStatus {
    /// Count 0.
    #[serde(rename = "none")]
    Absent,
    /// Count 1.
    Deficient,
    /// Count 2.
    Balanced,
    /// Count 3.
    Developed,
    /// Count 4 or more.
    Excessive,
}

impl ElementStatus {
    pub const fn from_count(count: u8) -> Self {
        match count {
            0 => Self::Absent,
            1 => Self::Deficient,
            2 => Self::Balanced,
            3 => Self::Developed,
            4.. => Self::Excessive,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Absent => "none",
            Self::Deficient => "deficient",
            Self::Balanced => "balanced",
            Self::Developed => "developed",
            Self::Excessive => "excessive",
        }
    }

    /// Whether the element is missing or thin (a candidate useful element).
    pub const fn is_lacking(self) -> bool {
        matches!(self, Self::Absent | Self::Deficient)
    }
}

/// Element counts of a chart, with derived percentages and status tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ElementDistribution {
    counts: [u8; 5],
}

impl ElementDistribution {
    /// Count the element of every stem and branch in `pillars`.
    pub fn from_pillars(pillars: &FourPillars) -> Self {
        let mut counts = [0u8; 5];
        for p in pillars.pillars() {
            counts[p.stem().element().index()] += 1;
            counts[p.branch().element().index()] += 1;
        }
        let dist = Self { counts };
        debug!(?counts, "element distribution");
        dist
    }

    /// Distribution from explicit counts in wood, fire, earth, metal, water order.
    pub const fn from_counts(counts: [u8; 5]) -> Self {
        Self { counts }
    }

    pub const fn count(&self, element: Element) -> u8 {
        self.counts[element.index()]
    }

    /// Sum of all counts; [`PILLAR_SLOTS`] for a distribution built from pillars.
    pub fn total(&self) -> u32 {
        self.counts.iter().map(|&c| u32::from(c)).sum()
    }

    /// Share of the total as a percentage rounded to one decimal.
    pub fn percentage(&self, element: Element) -> f64 {
        let total = self.total();
        if total == 0 {
            return 0.0;
        }
        let raw = f64::from(self.count(element)) / f64::from(total) * 100.0;
        (raw * 10.0).round() / 10.0
    }

    pub const fn status(&self, element: Element) -> ElementStatus {
        ElementStatus::from_count(self.count(element))
    }

    /// Elements with their counts, in generating order.
    pub fn counts(&self) -> impl Iterator<Item = (Element, u8)> + '_ {
        ALL_ELEMENTS.iter().map(|&e| (e, self.count(e)))
    }
}

struct ElementMap<'a, T>(&'a ElementDistribution, fn(&ElementDistribution, Element) -> T);

impl<T: Serialize> Serialize for ElementMap<'_, T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(ALL_ELEMENTS.len()))?;
        for e in ALL_ELEMENTS {
            map.serialize_entry(e.name(), &(self.1)(self.0, e))?;
        }
        map.end()
    }
}

impl Serialize for ElementDistribution {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut s = serializer.serialize_struct("ElementDistribution", 3)?;
        s.serialize_field("count", &ElementMap(self, |d, e| d.count(e)))?;
        s.serialize_field("percentage", &ElementMap(self, |d, e| d.percentage(e)))?;
        s.serialize_field("status", &ElementMap(self, |d, e| d.status(e)))?;
        s.end()
    }
}
