//! Property-based tests for the parse -> build -> count chain.

use orbit_map::{build_orbit_map, count_orbits, parse_orbit_pairs, OrbitPair};
use proptest::prelude::*;
use proptest::sample::Index;

/// 隨機產生一棵樹：第 i 個節點的父節點是前面某個節點，因此必定無環。
/// 回傳 (輸入行, 每個節點的深度總和)。
fn tree_strategy() -> impl Strategy<Value = (Vec<String>, u64)> {
    prop::collection::vec(any::<Index>(), 0..80).prop_map(|parents| {
        let mut depths: Vec<u64> = vec![0];
        let mut lines = Vec::with_capacity(parents.len());

        for (i, parent) in parents.iter().enumerate() {
            let parent = parent.index(i + 1);
            depths.push(depths[parent] + 1);
            lines.push(format!("N{})N{}", parent, i + 1));
        }

        (lines, depths.iter().sum())
    })
}

proptest! {
    #[test]
    fn prop_count_equals_sum_of_depths((lines, expected) in tree_strategy()) {
        let pairs = parse_orbit_pairs(&lines, ')').unwrap();
        let map = build_orbit_map(pairs);

        prop_assert_eq!(count_orbits(&map, "N0"), expected);
    }

    #[test]
    fn prop_count_is_idempotent((lines, _) in tree_strategy()) {
        let map = build_orbit_map(parse_orbit_pairs(&lines, ')').unwrap());

        prop_assert_eq!(count_orbits(&map, "N0"), count_orbits(&map, "N0"));
    }

    #[test]
    fn prop_absent_start_counts_zero((lines, _) in tree_strategy()) {
        let map = build_orbit_map(parse_orbit_pairs(&lines, ')').unwrap());

        // 樹中節點名稱都是 N 開頭
        prop_assert_eq!(count_orbits(&map, "NOT-A-BODY"), 0);
    }

    #[test]
    fn prop_input_order_does_not_matter((lines, expected) in tree_strategy()) {
        let mut reversed = lines.clone();
        reversed.reverse();
        let map = build_orbit_map(parse_orbit_pairs(&reversed, ')').unwrap());

        prop_assert_eq!(count_orbits(&map, "N0"), expected);
    }

    #[test]
    fn prop_parser_round_trip(center in "[A-Z0-9]{1,6}", satellite in "[A-Z0-9]{1,6}") {
        let line = format!("{}){}", center, satellite);

        let pairs = parse_orbit_pairs([line.as_str()], ')').unwrap();

        prop_assert_eq!(&pairs, &vec![OrbitPair::new(center, satellite)]);
        prop_assert_eq!(pairs[0].to_line(')'), line);
    }

    #[test]
    fn prop_one_bad_line_fails_everything(
        (lines, _) in tree_strategy(),
        bad in "[A-Z0-9]{0,6}",
        position in any::<Index>(),
    ) {
        let mut lines = lines;
        let at = position.index(lines.len() + 1);
        lines.insert(at, bad);

        prop_assert!(parse_orbit_pairs(&lines, ')').is_err());
    }
}
