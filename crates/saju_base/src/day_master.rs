//! Day-master strength: how well the day stem's element is represented.

use serde::Serialize;
use tracing::debug;

use crate::element::Element;
use crate::element_analysis::ElementDistribution;
use crate::pillar::FourPillars;
use crate::stem::HeavenlyStem;

/// Strength of the day master's element, by its count in the chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StrengthTier {
    ExtremeWeak,
    Weak,
    Balanced,
    Strong,
    ExtremeStrong,
}

impl StrengthTier {
    pub const fn from_count(count: u8) -> Self {
        match count {
            0 => Self::ExtremeWeak,
            1 => Self::Weak,
            2 => Self::Balanced,
            3 => Self::Strong,
            4.. => Self::ExtremeStrong,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::ExtremeWeak => "extremely weak",
            Self::Weak => "weak",
            Self::Balanced => "balanced",
            Self::Strong => "strong",
            Self::ExtremeStrong => "extremely strong",
        }
    }
}

/// The day stem's element and its strength in the chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DayMaster {
    pub stem: HeavenlyStem,
    pub element: Element,
    pub count: u8,
    pub tier: StrengthTier,
    /// One-line summary for display.
    pub description: String,
}

/// Classify the day stem's element against the chart's distribution.
pub fn evaluate_day_master(pillars: &FourPillars, distribution: &ElementDistribution) -> DayMaster {
    let stem = pillars.day_stem();
    let element = stem.element();
    let count = distribution.count(element);
    let tier = StrengthTier::from_count(count);
    debug!(%stem, %element, count, ?tier, "day master");
    DayMaster {
        stem,
        element,
        count,
        tier,
        description: format!(
            "Day stem '{}' ({}) is {}",
            stem.character(),
            element,
            tier.label()
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pillar::Pillar;

    #[test]
    fn tier_boundaries() {
        let expected = [
            StrengthTier::ExtremeWeak,
            StrengthTier::Weak,
            StrengthTier::Balanced,
            StrengthTier::Strong,
            StrengthTier::ExtremeStrong,
            StrengthTier::ExtremeStrong,
        ];
        for (count, tier) in expected.iter().enumerate() {
            assert_eq!(StrengthTier::from_count(count as u8), *tier);
        }
    }

    #[test]
    fn evaluates_day_stem_element() {
        // 庚午 戊寅 丙子 己亥: day stem 丙 (fire); fire = 丙 + 午 = 2
        let fp = FourPillars {
            year: Pillar::from_indices(6, 6).unwrap(),
            month: Pillar::from_indices(4, 2).unwrap(),
            day: Pillar::from_indices(2, 0).unwrap(),
            hour: Pillar::from_indices(5, 11).unwrap(),
        };
        let dist = ElementDistribution::from_pillars(&fp);
        let dm = evaluate_day_master(&fp, &dist);
        assert_eq!(dm.stem, HeavenlyStem::Byeong);
        assert_eq!(dm.element, Element::Fire);
        assert_eq!(dm.count, 2);
        assert_eq!(dm.tier, StrengthTier::Balanced);
        assert_eq!(dm.description, "Day stem '丙' (fire) is balanced");
    }

    #[test]
    fn description_uses_tier_label() {
        let fp = FourPillars {
            year: Pillar::from_indices(0, 2).unwrap(),
            month: Pillar::from_indices(1, 3).unwrap(),
            day: Pillar::from_indices(0, 2).unwrap(),
            hour: Pillar::from_indices(1, 3).unwrap(),
        };
        let dist = ElementDistribution::from_pillars(&fp);
        let dm = evaluate_day_master(&fp, &dist);
        assert_eq!(dm.count, 8);
        assert_eq!(dm.tier, StrengthTier::ExtremeStrong);
        assert_eq!(dm.description, "Day stem '甲' (wood) is extremely strong");
    }
}
