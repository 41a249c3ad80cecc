//! The twelve earthly branches (지지 / 地支).
//!
//! Each branch owns a two-hour slot of the day. Slots are whole-hour,
//! anchored at odd hours: 子 = 23:00-01:00, 丑 = 01:00-03:00, ...

use serde::Serialize;

use crate::element::{Element, Polarity};

/// The 12 earthly branches, in cycle order starting from 子.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EarthlyBranch {
    Ja,
    Chuk,
    In,
    Myo,
    Jin,
    Sa,
    O,
    Mi,
    Sin,
    Yu,
    Sul,
    Hae,
}

/// All 12 branches in order (0 = 子, 11 = 亥).
pub const ALL_BRANCHES: [EarthlyBranch; 12] = [
    EarthlyBranch::Ja,
    EarthlyBranch::Chuk,
    EarthlyBranch::In,
    EarthlyBranch::Myo,
    EarthlyBranch::Jin,
    EarthlyBranch::Sa,
    EarthlyBranch::O,
    EarthlyBranch::Mi,
    EarthlyBranch::Sin,
    EarthlyBranch::Yu,
    EarthlyBranch::Sul,
    EarthlyBranch::Hae,
];

const BRANCH_CHARS: [char; 12] = [
    '子', '丑', '寅', '卯', '辰', '巳', '午', '未', '申', '酉', '戌', '亥',
];
const BRANCH_KOREAN: [char; 12] = [
    '자', '축', '인', '묘', '진', '사', '오', '미', '신', '유', '술', '해',
];
const BRANCH_NAMES: [&str; 12] = [
    "Ja", "Chuk", "In", "Myo", "Jin", "Sa", "O", "Mi", "Sin", "Yu", "Sul", "Hae",
];
const BRANCH_ANIMALS: [&str; 12] = [
    "Rat", "Ox", "Tiger", "Rabbit", "Dragon", "Snake", "Horse", "Goat", "Monkey", "Rooster",
    "Dog", "Pig",
];
const BRANCH_TIME_LABELS: [&str; 12] = [
    "23:00-01:00",
    "01:00-03:00",
    "03:00-05:00",
    "05:00-07:00",
    "07:00-09:00",
    "09:00-11:00",
    "11:00-13:00",
    "13:00-15:00",
    "15:00-17:00",
    "17:00-19:00",
    "19:00-21:00",
    "21:00-23:00",
];

impl EarthlyBranch {
    /// Branch at `index` (0..11).
    pub const fn from_index(index: u8) -> Option<Self> {
        if index < 12 {
            Some(ALL_BRANCHES[index as usize])
        } else {
            None
        }
    }

    /// 0-based index (子=0 .. 亥=11).
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Chinese character (子, 丑, ...).
    pub const fn character(self) -> char {
        BRANCH_CHARS[self as usize]
    }

    /// Korean reading (자, 축, ...).
    pub const fn korean(self) -> char {
        BRANCH_KOREAN[self as usize]
    }

    /// Romanized Korean name.
    pub const fn name(self) -> &'static str {
        BRANCH_NAMES[self as usize]
    }

    /// Zodiac animal.
    pub const fn animal(self) -> &'static str {
        BRANCH_ANIMALS[self as usize]
    }

    pub const fn element(self) -> Element {
        match self {
            Self::In | Self::Myo => Element::Wood,
            Self::Sa | Self::O => Element::Fire,
            Self::Chuk | Self::Jin | Self::Mi | Self::Sul => Element::Earth,
            Self::Sin | Self::Yu => Element::Metal,
            Self::Hae | Self::Ja => Element::Water,
        }
    }

    pub const fn polarity(self) -> Polarity {
        Polarity::of_index(self.index())
    }

    /// Two-hour slot as `(start_hour, end_hour)`; 子 wraps midnight as `(23, 1)`.
    pub const fn time_range(self) -> (u8, u8) {
        let start = (self.index() * 2 + 23) % 24;
        (start, (start + 2) % 24)
    }

    /// Display label for the slot, e.g. `"23:00-01:00"`.
    pub const fn time_label(self) -> &'static str {
        BRANCH_TIME_LABELS[self as usize]
    }
}

impl std::fmt::Display for EarthlyBranch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.character())
    }
}
