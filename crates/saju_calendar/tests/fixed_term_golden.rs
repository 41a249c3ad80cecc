//! Golden values and properties for the fixed-term reference calendar.

use proptest::prelude::*;
use saju_calendar::{
    CalendarService, FixedTermCalendar, SolarDate, days_in_month, gregorian_to_jdn,
};

const CAL: FixedTermCalendar = FixedTermCalendar::new();

// ---------------------------------------------------------------------------
// Day cycle
// ---------------------------------------------------------------------------

#[test]
fn day_2024_01_01_is_jia_zi() {
    let d = CAL.day_indices(SolarDate::new(2024, 1, 1)).unwrap();
    assert_eq!(d.cycle_index(), 0);
}

#[test]
fn day_cycle_repeats_every_sixty_days() {
    let a = SolarDate::new(2024, 1, 1);
    let b = SolarDate::new(2024, 3, 1); // 31 + 29 = 60 days later
    assert_eq!(
        gregorian_to_jdn(b.year, b.month, b.day) - gregorian_to_jdn(a.year, a.month, a.day),
        60
    );
    assert_eq!(
        CAL.day_indices(a).unwrap(),
        CAL.day_indices(b).unwrap()
    );
}

// ---------------------------------------------------------------------------
// Year and month
// ---------------------------------------------------------------------------

#[test]
fn year_sweep_1984_to_2043_covers_whole_cycle() {
    for (i, year) in (1984..2044).enumerate() {
        let y = CAL.year_indices(SolarDate::new(year, 7, 1)).unwrap();
        assert_eq!(y.cycle_index() as usize, i, "year {year}");
    }
}

#[test]
fn month_pillars_through_2024() {
    // 甲辰 year: 丙寅 丁卯 戊辰 己巳 庚午 辛未 壬申 癸酉 甲戌 乙亥 丙子; Jan 2025 → 丁丑.
    let expected = [
        (2, 2),
        (3, 3),
        (4, 4),
        (5, 5),
        (6, 6),
        (7, 7),
        (8, 8),
        (9, 9),
        (0, 10),
        (1, 11),
        (2, 0),
    ];
    for (i, (stem, branch)) in expected.iter().enumerate() {
        let month = i as u32 + 2;
        let m = CAL.month_indices(SolarDate::new(2024, month, 20)).unwrap();
        assert_eq!((m.stem(), m.branch()), (*stem, *branch), "month {month}");
    }
    let jan = CAL.month_indices(SolarDate::new(2025, 1, 20)).unwrap();
    assert_eq!((jan.stem(), jan.branch()), (3, 1));
}

// ---------------------------------------------------------------------------
// Properties
// ---------------------------------------------------------------------------

fn valid_date() -> impl Strategy<Value = SolarDate> {
    (1900i32..2100, 1u32..=12).prop_flat_map(|(year, month)| {
        let max = days_in_month(year, month).unwrap();
        (Just(year), Just(month), 1..=max).prop_map(|(y, m, d)| SolarDate::new(y, m, d))
    })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: every resolved pillar pairs stems and branches of equal polarity.
    #[test]
    fn property_indices_share_polarity(date in valid_date()) {
        for idx in [
            CAL.year_indices(date).unwrap(),
            CAL.month_indices(date).unwrap(),
            CAL.day_indices(date).unwrap(),
        ] {
            prop_assert_eq!(idx.stem() % 2, idx.branch() % 2);
        }
    }

    /// PROPERTY: the day cycle position follows the day count exactly.
    #[test]
    fn property_day_cycle_is_continuous(a in valid_date(), b in valid_date()) {
        let da = CAL.day_indices(a).unwrap().cycle_index() as i64;
        let db = CAL.day_indices(b).unwrap().cycle_index() as i64;
        let days = gregorian_to_jdn(b.year, b.month, b.day) - gregorian_to_jdn(a.year, a.month, a.day);
        prop_assert_eq!((da + days).rem_euclid(60), db);
    }
}
