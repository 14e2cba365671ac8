//! Property-based tests for the printer.
//!
//! Verifies the laws the printer promises independent of any particular
//! input: purity of `render`, the truncation length bound, and that
//! excluded types never surface in the output.

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "tests can panic")]
#![allow(
    clippy::redundant_closure_for_method_calls,
    reason = "proptest macros generate code with these patterns"
)]

use oprint::{Printer, Reflect};
use proptest::prelude::*;

#[derive(Reflect)]
struct Sample {
    pub label: String,
    pub count: i32,
    pub ratio: f64,
}

fn label_strategy() -> impl Strategy<Value = String> {
    // Printable, tab- and newline-free, so line-based assertions hold.
    prop::string::string_regex("[a-zA-Z0-9 ]{0,24}").expect("valid regex")
}

proptest! {
    #[test]
    fn render_is_a_pure_function_of_value_and_config(
        label in label_strategy(),
        count in any::<i32>(),
        ratio in any::<f64>(),
    ) {
        let sample = Sample { label, count, ratio };
        let printer = Printer::<Sample>::new()
            .exclude_type::<f64>()
            .format_type::<String>()
            .trim_to(8);
        prop_assert_eq!(printer.render(&sample), printer.render(&sample));
    }

    #[test]
    fn trim_to_emits_at_most_max_characters(
        label in label_strategy(),
        max in 0_usize..16,
    ) {
        let expected_len = label.chars().count().min(max);
        let sample = Sample { label, count: 0, ratio: 0.0 };
        let printer = Printer::<Sample>::new().format_type::<String>().trim_to(max);
        let out = printer.render(&sample);

        let line = out
            .lines()
            .find(|line| line.starts_with("\tlabel = "))
            .expect("label line present");
        let rendered = line.trim_start_matches("\tlabel = ");
        prop_assert_eq!(rendered.chars().count(), expected_len);
    }

    #[test]
    fn excluded_types_never_surface(
        label in label_strategy(),
        count in any::<i32>(),
        ratio in any::<f64>(),
    ) {
        let sample = Sample { label, count, ratio };
        let out = Printer::<Sample>::new().exclude_type::<i32>().render(&sample);
        prop_assert!(!out.contains("\tcount = "));
        prop_assert!(out.contains("\tlabel = "));
    }

    #[test]
    fn every_line_is_terminated(
        label in label_strategy(),
        count in any::<i32>(),
        ratio in any::<f64>(),
    ) {
        let sample = Sample { label, count, ratio };
        let out = Printer::<Sample>::new().render(&sample);
        prop_assert!(out.ends_with('\n'));
    }
}
