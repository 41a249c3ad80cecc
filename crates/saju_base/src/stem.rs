//! The ten heavenly stems (천간 / 天干).

use serde::Serialize;

use crate::element::{Element, Polarity};

/// The 10 heavenly stems, in cycle order starting from 甲.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum HeavenlyStem {
    Gap,
    Eul,
    Byeong,
    Jeong,
    Mu,
    Gi,
    Gyeong,
    Sin,
    Im,
    Gye,
}

/// All 10 stems in order (0 = 甲, 9 = 癸).
pub const ALL_STEMS: [HeavenlyStem; 10] = [
    HeavenlyStem::Gap,
    HeavenlyStem::Eul,
    HeavenlyStem::Byeong,
    HeavenlyStem::Jeong,
    HeavenlyStem::Mu,
    HeavenlyStem::Gi,
    HeavenlyStem::Gyeong,
    HeavenlyStem::Sin,
    HeavenlyStem::Im,
    HeavenlyStem::Gye,
];

const STEM_CHARS: [char; 10] = ['甲', '乙', '丙', '丁', '戊', '己', '庚', '辛', '壬', '癸'];
const STEM_KOREAN: [char; 10] = ['갑', '을', '병', '정', '무', '기', '경', '신', '임', '계'];
const STEM_NAMES: [&str; 10] = [
    "Gap", "Eul", "Byeong", "Jeong", "Mu", "Gi", "Gyeong", "Sin", "Im", "Gye",
];

impl HeavenlyStem {
    /// Stem at `index` (0..9).
    pub const fn from_index(index: u8) -> Option<Self> {
        if index < 10 {
            Some(ALL_STEMS[index as usize])
        } else {
            None
        }
    }

    /// 0-based index (甲=0 .. 癸=9).
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Chinese character (甲, 乙, ...).
    pub const fn character(self) -> char {
        STEM_CHARS[self as usize]
    }

    /// Korean reading (갑, 을, ...).
    pub const fn korean(self) -> char {
        STEM_KOREAN[self as usize]
    }

    /// Romanized Korean name.
    pub const fn name(self) -> &'static str {
        STEM_NAMES[self as usize]
    }

    /// Element: each element governs a consecutive yang/yin pair.
    pub const fn element(self) -> Element {
        match self {
            Self::Gap | Self::Eul => Element::Wood,
            Self::Byeong | Self::Jeong => Element::Fire,
            Self::Mu | Self::Gi => Element::Earth,
            Self::Gyeong | Self::Sin => Element::Metal,
            Self::Im | Self::Gye => Element::Water,
        }
    }

    pub const fn polarity(self) -> Polarity {
        Polarity::of_index(self.index())
    }
}

impl std::fmt::Display for HeavenlyStem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.character())
    }
}
