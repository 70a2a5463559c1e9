use osu_helper_pp::{GameMode, HitCounts, HitDistribution};

use self::common::*;

mod common;

#[test]
fn full_accuracy_scenario() {
    let hits = HitDistribution::estimate(1000, 0, 1.0);

    assert_eq!(hits.n300, 1000);
    assert_eq!(hits.n100, 0);
    assert_eq!(hits.n50, 0);
    assert_eq!(hits.misses, 0);
}

#[test]
fn roundtrip_through_play() {
    let map = Osu::TEST_MAP;
    let play = Osu::test_play(NM);

    let acc = play.accuracy() / 100.0;
    let hits = HitDistribution::estimate(map.n_objects(), play.counts.misses, acc);
    let counts = HitCounts::from(hits);

    assert_eq!(hits.n_objects(), map.n_objects());
    assert_eq!(counts.misses, play.counts.misses);

    // One hit unit on 601 objects
    let tolerance = 100.0 / (6.0 * f64::from(map.n_objects()));
    assert_almost_eq(counts.accuracy(GameMode::Osu), play.accuracy(), tolerance);
}

#[test]
fn nan_accuracy_is_zero() {
    let hits = HitDistribution::estimate(300, 10, f64::NAN);

    assert_eq!(hits.n_objects(), 300);
    assert_eq!(hits.misses, 10);
    assert_eq!(hits.n300, 0);
    assert_eq!(hits.n100, 0);
}
