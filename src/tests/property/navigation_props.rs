//! Property-based tests for navigation
//!
//! Tests invariants:
//! - The current index is always inside the projection
//! - Wrapping follows Euclidean remainder
//! - Engine and carousel stay in agreement

use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::core::navigation::{Direction, Navigator};
use crate::core::viewport::Viewport;
use crate::tests::common::{artwork, carousel_engine, catalog_of};
use crate::tui::widgets::carousel::CarouselState;

// ============================================================================
// Strategies for generating test inputs
// ============================================================================

#[derive(Debug, Clone)]
enum Op {
    GoTo(isize),
    Step(Direction),
    Shuffle,
    Drag(bool),
    ToggleLetter(char),
    Search(String),
}

fn arb_op() -> impl Strategy<Value = Op> {
    prop_oneof![
        (-50isize..50).prop_map(Op::GoTo),
        prop_oneof![Just(Direction::Prev), Just(Direction::Next)].prop_map(Op::Step),
        Just(Op::Shuffle),
        any::<bool>().prop_map(Op::Drag),
        prop::sample::select(vec!['A', 'B', 'C', 'Q']).prop_map(Op::ToggleLetter),
        prop_oneof![Just(String::new()), "[a-c]{1,2}"].prop_map(Op::Search),
    ]
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    /// Property: go_to lands on target mod len
    #[test]
    fn prop_go_to_wraps(len in 1usize..50, target in -1000isize..1000) {
        let mut nav: Navigator<CarouselState> = Navigator::new(len);
        nav.go_to(target);
        prop_assert_eq!(nav.current_index(), target.rem_euclid(len as isize) as usize);
    }

    /// Property: len steps in one direction return to the start
    #[test]
    fn prop_full_lap_returns_home(len in 1usize..30, start in 0usize..30, forward in any::<bool>()) {
        let mut nav: Navigator<CarouselState> = Navigator::new(len);
        nav.go_to(start as isize);
        let home = nav.current_index();
        let direction = if forward { Direction::Next } else { Direction::Prev };
        for _ in 0..len {
            nav.step(direction);
        }
        prop_assert_eq!(nav.current_index(), home);
    }

    /// Property: shuffle moves whenever there is somewhere to go
    #[test]
    fn prop_shuffle_never_repeats(len in 2usize..40, seed in any::<u64>(), rounds in 1usize..20) {
        let mut nav: Navigator<CarouselState> = Navigator::new(len);
        let mut rng = StdRng::seed_from_u64(seed);
        for _ in 0..rounds {
            let before = nav.current_index();
            prop_assert!(nav.shuffle(&mut rng));
            prop_assert_ne!(nav.current_index(), before);
            prop_assert!(nav.current_index() < len);
        }
    }

    /// Property: after any operation sequence and a sync, the carousel
    /// shows the engine's current index
    #[test]
    fn prop_engine_and_carousel_agree(ops in prop::collection::vec(arb_op(), 1..40)) {
        let mut engine = carousel_engine(catalog_of(vec![
            artwork("1", "Apple Orchard", "Cezanne", "1890"),
            artwork("2", "Blue Nude", "Matisse", "1907"),
            artwork("3", "Bathers", "Renoir", "1887"),
            artwork("4", "Cafe Terrace", "van Gogh", "1888"),
            artwork("5", "Starry", "van Gogh", "1889"),
            artwork("6", "Apples", "Cezanne", "1895"),
        ]));

        for op in ops {
            match op {
                Op::GoTo(i) => { engine.go_to(i); }
                Op::Step(d) => { engine.step(d); }
                Op::Shuffle => { engine.shuffle(); }
                Op::Drag(forward) => {
                    if let Some(carousel) = engine.viewport_mut() {
                        if forward { carousel.scroll_next() } else { carousel.scroll_prev() }
                    }
                }
                Op::ToggleLetter(l) => { engine.toggle_letter(l); }
                Op::Search(text) => engine.set_search_text(&text),
            }
            engine.sync_viewport();

            let len = engine.projection().len();
            let carousel = engine.viewport().unwrap();
            prop_assert_eq!(carousel.slide_count(), len);
            if len > 0 {
                prop_assert!(engine.current_index() < len);
                prop_assert_eq!(carousel.selected_scroll_snap(), engine.current_index());
            } else {
                prop_assert_eq!(engine.current_index(), 0);
            }
        }
    }
}
