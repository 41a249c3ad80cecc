//! Useful (beneficial) and harmful elements derived from status tags.

use serde::ser::{Serialize, Serializer};
use tracing::debug;

use crate::element::{ALL_ELEMENTS, Element};
use crate::element_analysis::{ElementDistribution, ElementStatus};

/// Elements that would strengthen the chart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Beneficial {
    /// Elements tagged none or deficient, in generating order. Never empty.
    Elements(Vec<Element>),
    /// No element is lacking.
    AlreadyBalanced,
}

impl Serialize for Beneficial {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Elements(elements) => elements.serialize(serializer),
            Self::AlreadyBalanced => serializer.serialize_str("already_balanced"),
        }
    }
}

/// Useful-element recommendation for a chart.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct UsefulElements {
    pub beneficial: Beneficial,
    /// Elements tagged excessive.
    pub detrimental: Vec<Element>,
}

impl UsefulElements {
    pub fn is_balanced(&self) -> bool {
        self.beneficial == Beneficial::AlreadyBalanced
    }
}

/// Recommend elements from the distribution's status tags.
pub fn advise_useful_elements(distribution: &ElementDistribution) -> UsefulElements {
    let lacking: Vec<Element> = ALL_ELEMENTS
        .into_iter()
        .filter(|&e| distribution.status(e).is_lacking())
        .collect();
    let detrimental: Vec<Element> = ALL_ELEMENTS
        .into_iter()
        .filter(|&e| distribution.status(e) == ElementStatus::Excessive)
        .collect();
    debug!(?lacking, ?detrimental, "useful elements");
    let beneficial = if lacking.is_empty() {
        Beneficial::AlreadyBalanced
    } else {
        Beneficial::Elements(lacking)
    };
    UsefulElements {
        beneficial,
        detrimental,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lacking_and_excessive() {
        // wood 4, fire 1, earth 1, metal 0, water 2
        let u = advise_useful_elements(&ElementDistribution::from_counts([4, 1, 1, 0, 2]));
        assert_eq!(
            u.beneficial,
            Beneficial::Elements(vec![Element::Fire, Element::Earth, Element::Metal])
        );
        assert_eq!(u.detrimental, vec![Element::Wood]);
        assert!(!u.is_balanced());
    }

    #[test]
    fn balanced_sentinel_when_nothing_lacks() {
        let u = advise_useful_elements(&ElementDistribution::from_counts([2, 2, 2, 2, 2]));
        assert_eq!(u.beneficial, Beneficial::AlreadyBalanced);
        assert!(u.detrimental.is_empty());
        assert!(u.is_balanced());
    }

    #[test]
    fn developed_is_neither_useful_nor_harmful() {
        let u = advise_useful_elements(&ElementDistribution::from_counts([3, 3, 2, 0, 0]));
        assert_eq!(
            u.beneficial,
            Beneficial::Elements(vec![Element::Metal, Element::Water])
        );
        assert!(u.detrimental.is_empty());
    }
}
