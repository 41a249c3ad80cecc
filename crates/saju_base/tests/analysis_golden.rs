//! The analysis chain (distribution, day master, useful elements,
//! fortune) over fixed pillar sets.

use approx::assert_relative_eq;
use saju_base::{
    Beneficial, Element, ElementDistribution, ElementPercentages, ElementStatus, FourPillars,
    Grade, Pillar, StrengthTier, advise_useful_elements, evaluate_day_master, score_fortune,
};

fn chart(names: &str) -> FourPillars {
    let p: Vec<Pillar> = names
        .split(' ')
        .map(|name| {
            (0..60)
                .filter_map(Pillar::from_cycle_index)
                .find(|p| p.name() == name)
                .unwrap()
        })
        .collect();
    FourPillars {
        year: p[0],
        month: p[1],
        day: p[2],
        hour: p[3],
    }
}

#[test]
fn metal_heavy_chart() {
    // 庚午 辛巳 庚辰 丙戌: metal 3, fire 3, earth 2
    let fp = chart("庚午 辛巳 庚辰 丙戌");
    let dist = ElementDistribution::from_pillars(&fp);
    let counts: Vec<u8> = dist.counts().map(|(_, n)| n).collect();
    assert_eq!(counts, [0, 3, 2, 3, 0]);
    assert_eq!(dist.status(Element::Fire), ElementStatus::Developed);

    let dm = evaluate_day_master(&fp, &dist);
    assert_eq!(dm.tier, StrengthTier::Strong);

    let useful = advise_useful_elements(&dist);
    assert_eq!(
        useful.beneficial,
        Beneficial::Elements(vec![Element::Wood, Element::Water])
    );
    assert!(useful.detrimental.is_empty());

    let pct = ElementPercentages::from_distribution(&dist);
    assert_relative_eq!(pct.fire, 37.5);
    let f = score_fortune(&pct);
    // wealth 50 + (25 + 37.5) / 2 = 81.25; career 50 + 37.5 / 2 = 68.75
    assert_eq!((f.wealth.score, f.wealth.grade), (81, Grade::A));
    assert_eq!((f.career.score, f.career.grade), (69, Grade::B));
    assert_eq!((f.love.score, f.love.grade), (50, Grade::C));
}

#[test]
fn four_elements_in_pairs() {
    // 甲寅 丙午 戊辰 庚申: wood 2, fire 2, earth 2, metal 2, water 0
    let fp = chart("甲寅 丙午 戊辰 庚申");
    let dist = ElementDistribution::from_pillars(&fp);
    assert_eq!(dist.total(), 8);
    assert_eq!(dist.status(Element::Water), ElementStatus::Absent);
    assert_eq!(
        advise_useful_elements(&dist).beneficial,
        Beneficial::Elements(vec![Element::Water])
    );
    let dm = evaluate_day_master(&fp, &dist);
    assert_eq!((dm.element, dm.tier), (Element::Earth, StrengthTier::Balanced));
    // shares 25/25/25/25/0: variance 100 → health 100 - 3·10 = 70
    let f = score_fortune(&ElementPercentages::from_distribution(&dist));
    assert_eq!(f.health.score, 70);
}
