/// Position and current state of one `.reveal` element, read fresh on every evaluation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealProbe {
    /// Top edge relative to the viewport.
    pub top: f64,
    pub active: bool,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RevealSnapshot {
    pub viewport_height: f64,
    pub probes: Vec<RevealProbe>,
}

pub fn is_in_view(top: f64, viewport_height: f64, threshold: f64) -> bool {
    top < viewport_height - threshold
}

/// Indices of elements that should gain the active marker now.
/// Elements that are already active are skipped; nothing is ever deactivated.
pub fn newly_revealed(snapshot: &RevealSnapshot, threshold: f64) -> Vec<usize> {
    snapshot
        .probes
        .iter()
        .enumerate()
        .filter(|(_, probe)| !probe.active && is_in_view(probe.top, snapshot.viewport_height, threshold))
        .map(|(index, _)| index)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn probe(top: f64, active: bool) -> RevealProbe {
        RevealProbe { top, active }
    }

    #[test]
    fn boundary_is_exclusive() {
        assert!(is_in_view(649.9, 800.0, 150.0));
        assert!(!is_in_view(650.0, 800.0, 150.0));
    }

    #[test]
    fn only_inactive_visible_elements_are_reported() {
        let snapshot = RevealSnapshot {
            viewport_height: 800.0,
            probes: vec![probe(100.0, false), probe(100.0, true), probe(900.0, false), probe(-400.0, false)],
        };
        assert_eq!(newly_revealed(&snapshot, 150.0), vec![0, 3]);
    }

    #[test]
    fn empty_group_reveals_nothing() {
        assert!(newly_revealed(&RevealSnapshot::default(), 150.0).is_empty());
    }

    proptest! {
        #[test]
        fn activation_matches_threshold(top in -2000.0f64..4000.0, height in 0.0f64..3000.0) {
            let snapshot = RevealSnapshot { viewport_height: height, probes: vec![probe(top, false)] };
            let revealed = !newly_revealed(&snapshot, 150.0).is_empty();
            prop_assert_eq!(revealed, top < height - 150.0);
        }

        #[test]
        fn revealed_elements_stay_revealed(
            frames in prop::collection::vec((0.0f64..2000.0, prop::collection::vec(-1000.0f64..3000.0, 6)), 1..20)
        ) {
            let mut active = vec![false; 6];
            for (height, tops) in frames {
                let before = active.clone();
                let snapshot = RevealSnapshot {
                    viewport_height: height,
                    probes: tops.iter().zip(&active).map(|(top, on)| probe(*top, *on)).collect(),
                };
                for index in newly_revealed(&snapshot, 150.0) {
                    active[index] = true;
                }
                for (was, now) in before.iter().zip(&active) {
                    prop_assert!(!*was || *now);
                }
            }
        }
    }
}
