//! Fortune scores for wealth, career, love and health.
//!
//! Each domain score starts at 50 and gains half the combined share of
//! its two governing elements. Health instead penalizes imbalance: the
//! further the element shares spread from an even 20% each, the lower
//! the score. All scores are clamped to 40..=100, then rounded.

use serde::Serialize;
use tracing::debug;

use crate::element::Element;
use crate::element_analysis::ElementDistribution;

const SCORE_MIN: f64 = 40.0;
const SCORE_MAX: f64 = 100.0;
const DOMAIN_BASE: f64 = 50.0;
/// Even share of each element (100% / 5).
const TARGET_SHARE: f64 = 20.0;
const HEALTH_SPREAD_PENALTY: f64 = 3.0;

/// Letter grade of a fortune score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Grade {
    S,
    A,
    B,
    C,
}

impl Grade {
    pub const fn from_score(score: u8) -> Self {
        match score {
            90.. => Self::S,
            75..=89 => Self::A,
            60..=74 => Self::B,
            _ => Self::C,
        }
    }

    pub const fn letter(self) -> char {
        match self {
            Self::S => 'S',
            Self::A => 'A',
            Self::B => 'B',
            Self::C => 'C',
        }
    }
}

/// A score in 40..=100 with its grade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct FortuneField {
    pub score: u8,
    pub grade: Grade,
}

impl FortuneField {
    /// Clamp a raw score to 40..=100, round half up, and grade it.
    pub fn from_raw(raw: f64) -> Self {
        // Clamped value is positive, so round() is round-half-up.
        let score = raw.clamp(SCORE_MIN, SCORE_MAX).round() as u8;
        Self {
            score,
            grade: Grade::from_score(score),
        }
    }
}

/// Scores for the four fortune domains.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Fortune {
    pub wealth: FortuneField,
    pub career: FortuneField,
    pub love: FortuneField,
    pub health: FortuneField,
}

/// Element shares in percent (0..=100). They need not sum to exactly 100.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct ElementPercentages {
    pub wood: f64,
    pub fire: f64,
    pub earth: f64,
    pub metal: f64,
    pub water: f64,
}

impl ElementPercentages {
    pub fn from_distribution(distribution: &ElementDistribution) -> Self {
        Self {
            wood: distribution.percentage(Element::Wood),
            fire: distribution.percentage(Element::Fire),
            earth: distribution.percentage(Element::Earth),
            metal: distribution.percentage(Element::Metal),
            water: distribution.percentage(Element::Water),
        }
    }

    pub const fn as_array(&self) -> [f64; 5] {
        [self.wood, self.fire, self.earth, self.metal, self.water]
    }

    /// Mean squared deviation of the shares from an even 20% split.
    pub fn spread_variance(&self) -> f64 {
        let shares = self.as_array();
        shares
            .iter()
            .map(|p| (p - TARGET_SHARE).powi(2))
            .sum::<f64>()
            / shares.len() as f64
    }
}

/// Score the four fortune domains from element shares.
pub fn score_fortune(p: &ElementPercentages) -> Fortune {
    let wealth = DOMAIN_BASE + (p.earth + p.metal) / 2.0;
    let career = DOMAIN_BASE + (p.wood + p.fire) / 2.0;
    let love = DOMAIN_BASE + (p.water + p.wood) / 2.0;
    let health = SCORE_MAX - HEALTH_SPREAD_PENALTY * p.spread_variance().sqrt();
    debug!(wealth, career, love, health, "raw fortune scores");
    Fortune {
        wealth: FortuneField::from_raw(wealth),
        career: FortuneField::from_raw(career),
        love: FortuneField::from_raw(love),
        health: FortuneField::from_raw(health),
    }
}
