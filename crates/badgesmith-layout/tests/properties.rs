//! Property-based tests for badge geometry.

use badgesmith_layout::{ICON_RESERVED_WIDTH, PADDING, Rounding, char_width, layout};
use badgesmith_types::BadgeSpec;
use proptest::prelude::*;

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-6
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn total_width_is_sum_of_segments(
        text1 in "\\PC{0,30}",
        text2 in "\\PC{0,30}",
        icon in proptest::option::of("[a-z-]{1,12}"),
    ) {
        let mut spec = BadgeSpec::new(text1).with_secondary(text2);
        spec.icon = icon;
        let l = layout(&spec);
        prop_assert!(close(l.width, l.primary.width + l.secondary_width()));
    }

    #[test]
    fn widths_are_monotone_in_text_length(
        base in "[A-Za-z0-9]{0,15}",
        extra in "[A-Za-z0-9]{0,15}",
    ) {
        let longer = format!("{base}{extra}");
        let short = layout(&BadgeSpec::new(base.clone()).with_secondary(base.clone()));
        let long = layout(&BadgeSpec::new(longer.clone()).with_secondary(longer));
        prop_assert!(long.primary.width >= short.primary.width);
        prop_assert!(long.secondary_width() >= short.secondary_width());
        prop_assert!(long.width >= short.width);
    }

    #[test]
    fn icon_adds_exactly_twenty(text in "[A-Za-z ]{0,20}", name in "[a-z]{1,10}") {
        let plain = layout(&BadgeSpec::new(text.clone()));
        let with_icon = layout(&BadgeSpec::new(text).with_icon(name));
        prop_assert!(close(with_icon.primary.width - plain.primary.width, ICON_RESERVED_WIDTH));
    }

    #[test]
    fn primary_width_formula(text in "\\PC{0,40}") {
        let l = layout(&BadgeSpec::new(text.clone()));
        let expected = text.chars().count() as f64 * char_width() + 2.0 * PADDING;
        prop_assert!(close(l.primary.width, expected));
    }

    #[test]
    fn secondary_presence_controls_rounding(text2 in "[a-z]{0,6}") {
        let l = layout(&BadgeSpec::new("label").with_secondary(text2.clone()));
        if text2.is_empty() {
            prop_assert!(l.secondary.is_none());
            prop_assert_eq!(l.primary.rounding, Rounding::ALL);
            prop_assert_eq!(l.primary.path.matches(" A ").count(), 4);
        } else {
            prop_assert!(l.secondary.is_some());
            prop_assert_eq!(l.primary.rounding, Rounding::LEFT);
        }
    }

    #[test]
    fn labels_sit_on_vertical_center(text1 in "[a-z]{1,8}", text2 in "[a-z]{0,8}") {
        let l = layout(&BadgeSpec::new(text1).with_secondary(text2));
        prop_assert!(close(l.primary_label.y, 10.0));
        if let Some(second) = l.secondary_label {
            prop_assert!(close(second.y, 10.0));
            prop_assert!(second.x > l.primary.width);
            prop_assert!(second.x < l.width);
        }
    }
}
