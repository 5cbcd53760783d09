//! Selection state for the viewer.
//!
//! A single resource records which planet (if any) the user clicked last.
//! The info card renders from this state and nothing else.

use bevy::prelude::*;

/// Data copied from a planet at click time.
///
/// An independent value with no back-reference to the entity it came from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SelectedPlanet {
    pub name: String,
    pub description: String,
}

/// Resource tracking the currently selected planet, if any.
///
/// Two transitions exist: [`Selection::select`] unconditionally replaces any
/// prior selection, and [`Selection::dismiss`] clears it. Both are total; in
/// particular dismissing with nothing selected is a safe no-op.
#[derive(Resource, Default, Clone, Debug, PartialEq)]
pub struct Selection {
    selected: Option<SelectedPlanet>,
}

impl Selection {
    /// Select a planet, replacing any prior selection.
    pub fn select(&mut self, name: impl Into<String>, description: impl Into<String>) {
        self.selected = Some(SelectedPlanet {
            name: name.into(),
            description: description.into(),
        });
    }

    /// Clear the selection. No-op when nothing is selected.
    pub fn dismiss(&mut self) {
        self.selected = None;
    }

    /// The currently selected planet, if any.
    pub fn selected(&self) -> Option<&SelectedPlanet> {
        self.selected.as_ref()
    }

    /// Whether a selection is active (the info card is visible iff this holds).
    pub fn is_active(&self) -> bool {
        self.selected.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn starts_empty() {
        let selection = Selection::default();
        assert!(!selection.is_active());
        assert_eq!(selection.selected(), None);
    }

    #[test]
    fn select_sets_name_and_description() {
        let mut selection = Selection::default();
        selection.select("Mars", "The red planet.");
        let planet = selection.selected().unwrap();
        assert_eq!(planet.name, "Mars");
        assert_eq!(planet.description, "The red planet.");
    }

    #[test]
    fn second_select_replaces_wholesale() {
        let mut selection = Selection::default();
        selection.select("Mars", "The red planet.");
        selection.select("Jupiter", "The largest planet in our solar system.");
        let planet = selection.selected().unwrap();
        assert_eq!(planet.name, "Jupiter");
        assert_eq!(planet.description, "The largest planet in our solar system.");
    }

    #[test]
    fn dismiss_clears_selection() {
        let mut selection = Selection::default();
        selection.select("Saturn", "Known for its ring system.");
        selection.dismiss();
        assert!(!selection.is_active());
    }

    #[test]
    fn dismiss_without_selection_is_noop() {
        let mut selection = Selection::default();
        selection.dismiss();
        assert_eq!(selection, Selection::default());
        // And again, to confirm idempotence
        selection.dismiss();
        assert!(!selection.is_active());
    }

    /// Operations driving the selection state machine.
    #[derive(Clone, Debug)]
    enum Op {
        Select(usize),
        Dismiss,
    }

    const NAMES: [(&str, &str); 3] = [
        ("Earth", "Our home planet."),
        ("Mars", "The red planet."),
        ("Venus", "The second planet from the Sun."),
    ];

    fn op_strategy() -> impl Strategy<Value = Op> {
        prop_oneof![(0..NAMES.len()).prop_map(Op::Select), Just(Op::Dismiss)]
    }

    proptest! {
        /// The selection always equals the most recent select not followed
        /// by a dismiss, and never holds more than one planet.
        #[test]
        fn selection_tracks_last_select(ops in proptest::collection::vec(op_strategy(), 0..32)) {
            let mut selection = Selection::default();
            let mut expected: Option<usize> = None;

            for op in ops {
                match op {
                    Op::Select(i) => {
                        selection.select(NAMES[i].0, NAMES[i].1);
                        expected = Some(i);
                    }
                    Op::Dismiss => {
                        selection.dismiss();
                        expected = None;
                    }
                }

                match expected {
                    Some(i) => {
                        let planet = selection.selected().unwrap();
                        prop_assert_eq!(planet.name.as_str(), NAMES[i].0);
                        prop_assert_eq!(planet.description.as_str(), NAMES[i].1);
                    }
                    None => prop_assert!(!selection.is_active()),
                }
            }
        }
    }
}
