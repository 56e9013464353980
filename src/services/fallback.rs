use rand::Rng;

use crate::models::domain::DialogueType;

/// Chooses an index into a fallback list. Injected so tests can pin the choice.
pub trait FallbackSelector: Send + Sync {
    fn pick(&self, len: usize) -> usize;
}

/// Uniform choice over the list.
pub struct RandomFallbackSelector;

impl FallbackSelector for RandomFallbackSelector {
    fn pick(&self, len: usize) -> usize {
        if len == 0 {
            return 0;
        }
        rand::rng().random_range(0..len)
    }
}

/// Picks a line from the fallback list of `dialogue_type` only.
pub fn choose_fallback(selector: &dyn FallbackSelector, dialogue_type: DialogueType) -> &'static str {
    let lines = dialogue_type.fallbacks();
    let index = selector.pick(lines.len());

    lines
        .get(index)
        .or_else(|| lines.first())
        .copied()
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::fixtures::FixedSelector;

    #[test]
    fn random_selector_stays_in_bounds() {
        let selector = RandomFallbackSelector;
        for _ in 0..200 {
            assert!(selector.pick(3) < 3);
        }
        assert_eq!(selector.pick(0), 0);
    }

    #[test]
    fn fixed_selector_picks_exact_line() {
        let line = choose_fallback(&FixedSelector(1), DialogueType::CorrectAnswer);
        assert_eq!(line, "겨우 맞췄구나");
    }

    #[test]
    fn out_of_range_pick_falls_back_to_first_line() {
        let line = choose_fallback(&FixedSelector(99), DialogueType::MentalBreak);
        assert_eq!(line, DialogueType::MentalBreak.fallbacks()[0]);
    }

    #[test]
    fn random_choice_never_crosses_types() {
        for dialogue_type in DialogueType::ALL {
            for _ in 0..50 {
                let line = choose_fallback(&RandomFallbackSelector, dialogue_type);
                assert!(dialogue_type.fallbacks().contains(&line));
            }
        }
    }
}
