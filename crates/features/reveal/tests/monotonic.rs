use dpi_kernel::animation::Tween;
use dpi_reveal::{NumberFormat, group_thousands};
use proptest::prelude::*;
use std::time::Duration;

proptest! {
    #[test]
    fn counter_frames_never_go_backwards(target in 1u32..5_000_000, mut ticks in prop::collection::vec(0u64..4000, 1..30)) {
        ticks.sort_unstable();
        let tween = Tween::linear(0.0, f64::from(target), Duration::ZERO, Duration::from_millis(2000));
        let shown: Vec<f64> = ticks.iter().map(|ms| tween.value_at(Duration::from_millis(*ms)).floor()).collect();

        prop_assert!(shown.windows(2).all(|w| w[0] <= w[1]));
        prop_assert_eq!(
            NumberFormat::Grouped.format(tween.value_at(Duration::from_millis(2000))),
            group_thousands(i64::from(target))
        );
    }

    #[test]
    fn grouping_only_inserts_commas(value in any::<i64>()) {
        let grouped = group_thousands(value);
        prop_assert_eq!(grouped.replace(',', ""), value.to_string());
    }
}
