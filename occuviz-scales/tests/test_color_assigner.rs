use occuviz_scales::{ColorAssigner, ColorPalette};
use proptest::prelude::*;
use rstest::rstest;

#[rstest]
#[case("Nurse", 5)]
#[case("Pilot", 0)]
#[case("Registered Nurses", 2)]
#[case("Nurse Anesthetists", 4)]
#[case("Pharmacists", 5)]
#[case("", 0)]
fn test_category10_indices(#[case] key: &str, #[case] expected: usize) {
    let assigner = ColorAssigner::default();
    assert_eq!(assigner.color_index_of(key), expected);
}

#[test]
fn test_collisions_are_allowed() {
    // "Aa" and "BB" share a hash
    let assigner = ColorAssigner::default();
    assert_eq!(assigner.color_index_of("Aa"), assigner.color_index_of("BB"));
}

#[test]
fn test_assign_carries_key() {
    let assignment = ColorAssigner::default().assign("Pilot");
    assert_eq!(assignment.key, "Pilot");
    assert_eq!(assignment.palette_index, 0);
}

#[test]
fn test_single_color_palette() {
    let assigner = ColorAssigner::new(ColorPalette::from_hex(&["#4682b4"]).unwrap());
    assert_eq!(assigner.color_index_of("Nurse"), 0);
    assert_eq!(assigner.style_for_key("Pilot"), "color: #4682b4");
}

proptest! {
    #[test]
    fn prop_index_is_deterministic(key in ".{0,40}") {
        let assigner = ColorAssigner::default();
        let first = assigner.color_index_of(&key);
        for _ in 0..8 {
            prop_assert_eq!(assigner.color_index_of(&key), first);
        }
        // A freshly built assigner agrees, independent of prior calls
        prop_assert_eq!(ColorAssigner::new(ColorPalette::category10()).color_index_of(&key), first);
    }

    #[test]
    fn prop_index_in_palette_range(key in ".{0,40}", size in 1usize..32) {
        let colors: Vec<String> = (0..size).map(|i| format!("#{:06x}", i * 1013)).collect();
        let assigner = ColorAssigner::new(ColorPalette::from_hex(&colors).unwrap());
        prop_assert!(assigner.color_index_of(&key) < size);
    }

    #[test]
    fn prop_call_order_does_not_matter(keys in prop::collection::vec("[a-z]{1,12}", 1..20)) {
        let assigner = ColorAssigner::default();
        let forward: Vec<_> = keys.iter().map(|k| assigner.color_index_of(k)).collect();
        let mut backward: Vec<_> = keys.iter().rev().map(|k| assigner.color_index_of(k)).collect();
        backward.reverse();
        prop_assert_eq!(forward, backward);
    }
}
