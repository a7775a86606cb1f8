//! Property-based tests for carousel index invariants
//!
//! Uses proptest to validate:
//! - The index never leaves `[0, max_index]` under navigation
//! - Disabled flags always mirror the index bounds
//! - `go_to` is idempotent
//! - Clamp-policy resizes preserve the invariant

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

use proptest::prelude::*;
use vitrine_core::breakpoints::ViewportWidth;
use vitrine_core::carousel::CarouselState;
use vitrine_core::config::CarouselConfig;

#[derive(Debug, Clone)]
enum Step {
    Next,
    Previous,
    GoTo(i64),
    Resize(f64),
}

fn step() -> impl Strategy<Value = Step> {
    prop_oneof![
        Just(Step::Next),
        Just(Step::Previous),
        (-3i64..12).prop_map(Step::GoTo),
        (0.0f64..2000.0).prop_map(Step::Resize),
    ]
}

fn state(slides: usize, width: f64) -> Result<CarouselState, TestCaseError> {
    let viewport = ViewportWidth::new(width).map_err(|e| TestCaseError::fail(e.to_string()))?;
    CarouselState::new(slides, 250.0, &CarouselConfig::slides(), viewport)
        .map_err(|e| TestCaseError::fail(e.to_string()))
}

fn apply(state: &mut CarouselState, step: &Step) -> Result<(), TestCaseError> {
    match step {
        Step::Next => {
            state.next();
        }
        Step::Previous => {
            state.previous();
        }
        Step::GoTo(index) => {
            state.go_to(*index);
        }
        Step::Resize(width) => {
            let viewport =
                ViewportWidth::new(*width).map_err(|e| TestCaseError::fail(e.to_string()))?;
            state.resize(viewport);
        }
    }
    Ok(())
}

proptest! {
    /// Property: the index stays in bounds and the flags follow it
    #[test]
    fn prop_index_stays_in_bounds(
        slides in 1usize..10,
        width in 0.0f64..2000.0,
        steps in prop::collection::vec(step(), 0..40),
    ) {
        let mut carousel = state(slides, width)?;

        for step in &steps {
            apply(&mut carousel, step)?;

            let index = carousel.current_index();
            prop_assert!(index <= carousel.max_index());

            let frame = carousel.frame();
            prop_assert_eq!(frame.prev_disabled, index == 0);
            prop_assert_eq!(frame.next_disabled, index == carousel.max_index());
            prop_assert_eq!(frame.active_indicator, index);
        }
    }

    /// Property: repeating a valid go_to changes nothing
    #[test]
    fn prop_go_to_idempotent(
        slides in 1usize..10,
        width in 0.0f64..2000.0,
        target in 0i64..10,
    ) {
        let mut once = state(slides, width)?;
        let first = once.go_to(target);

        let mut twice = once.clone();
        let second = twice.go_to(target);

        prop_assert_eq!(first, second);
        prop_assert_eq!(once.frame(), twice.frame());
    }
}
