//! First appropriate key color selection
//!
//! Candidates are scanned in the order given, index 0 being the most
//! preferred, against a single context snapshot. The scan stops at the first
//! candidate the evaluator accepts.

use crate::color::Color;
use crate::core::evaluator::KeyColorEvaluator;
use crate::environment::EnvironmentContext;
use log::debug;

impl KeyColorEvaluator {
    /// First candidate that is appropriate under `context`, or `None` if the
    /// sequence is empty or nothing passes.
    pub fn first_appropriate<'a, I>(&self, colors: I, context: &EnvironmentContext) -> Option<Color>
    where
        I: IntoIterator<Item = &'a Color>,
    {
        let found = colors
            .into_iter()
            .enumerate()
            .find(|(_, color)| self.is_appropriate(color, context));

        match found {
            Some((index, color)) => {
                debug!("Selected key color {} at position {}", color, index);
                Some(*color)
            }
            None => {
                debug!("No appropriate key color among candidates ({})", context);
                None
            }
        }
    }

    /// Position of the candidate [`first_appropriate`](Self::first_appropriate) returns
    pub fn first_appropriate_index<'a, I>(
        &self,
        colors: I,
        context: &EnvironmentContext,
    ) -> Option<usize>
    where
        I: IntoIterator<Item = &'a Color>,
    {
        colors
            .into_iter()
            .position(|color| self.is_appropriate(color, context))
    }

    /// Every appropriate candidate, lazily, in the original order
    pub fn appropriate_colors<'a, I>(
        &'a self,
        colors: I,
        context: &EnvironmentContext,
    ) -> impl Iterator<Item = Color> + 'a
    where
        I: IntoIterator<Item = &'a Color>,
        I::IntoIter: 'a,
    {
        let context = *context;
        colors
            .into_iter()
            .filter(move |color| self.is_appropriate(color, &context))
            .copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    fn hex(value: &str) -> Color {
        Color::from_hex(value).unwrap()
    }

    #[test]
    fn test_empty_sequence() {
        let evaluator = KeyColorEvaluator::new();
        let none: [Color; 0] = [];
        assert_eq!(
            evaluator.first_appropriate(&none, &EnvironmentContext::light()),
            None
        );
        assert_eq!(
            evaluator.first_appropriate_index(&none, &EnvironmentContext::light()),
            None
        );
    }

    #[test]
    fn test_first_passing_candidate_wins() {
        let evaluator = KeyColorEvaluator::new();
        let candidates = [hex("#808080"), hex("#FF3B30"), hex("#007AFF")];
        let context = EnvironmentContext::light();

        assert_eq!(
            evaluator.first_appropriate(&candidates, &context),
            Some(candidates[1])
        );
        assert_eq!(
            evaluator.first_appropriate_index(&candidates, &context),
            Some(1)
        );
    }

    #[test]
    fn test_no_candidate_passes() {
        let evaluator = KeyColorEvaluator::new();
        let candidates = [Color::BLACK, Color::WHITE, hex("#777777")];
        assert_eq!(
            evaluator.first_appropriate(&candidates, &EnvironmentContext::dark()),
            None
        );
    }

    #[test]
    fn test_duplicates_allowed() {
        let evaluator = KeyColorEvaluator::new();
        let blue = hex("#007AFF");
        let candidates = [Color::WHITE, blue, blue];
        assert_eq!(
            evaluator.first_appropriate_index(&candidates, &EnvironmentContext::dark()),
            Some(1)
        );
    }

    #[test]
    fn test_selection_follows_context() {
        let evaluator = KeyColorEvaluator::new();
        let yellow = hex("#FFCC00");
        let blue = hex("#007AFF");
        let candidates = vec![yellow, blue];

        assert_eq!(
            evaluator.first_appropriate(&candidates, &EnvironmentContext::dark()),
            Some(yellow)
        );
        assert_eq!(
            evaluator.first_appropriate(&candidates, &EnvironmentContext::light()),
            Some(blue)
        );
    }

    #[test]
    fn test_returns_candidate_unchanged() {
        let evaluator = KeyColorEvaluator::new();
        let translucent = hex("#FF3B30").with_alpha(0.4);
        assert_eq!(
            evaluator.first_appropriate(&[translucent], &EnvironmentContext::light()),
            Some(translucent)
        );
    }

    #[test]
    fn test_scan_stops_at_first_match() {
        let evaluator = KeyColorEvaluator::new();
        let candidates = [Color::BLACK, hex("#007AFF"), hex("#FF3B30"), Color::WHITE];
        let pulled = Cell::new(0);
        let counted = candidates.iter().inspect(|_| pulled.set(pulled.get() + 1));

        evaluator.first_appropriate(counted, &EnvironmentContext::light());
        assert_eq!(pulled.get(), 2);
    }

    #[test]
    fn test_appropriate_colors_preserves_order() {
        let evaluator = KeyColorEvaluator::new();
        let candidates = [
            hex("#FF3B30"),
            Color::WHITE,
            hex("#34C759"),
            hex("#808080"),
            hex("#007AFF"),
        ];
        let context = EnvironmentContext::light();

        let passing: Vec<Color> = evaluator.appropriate_colors(&candidates, &context).collect();
        assert_eq!(passing, vec![candidates[0], candidates[2], candidates[4]]);
        assert_eq!(
            evaluator.first_appropriate(&candidates, &context),
            passing.first().copied()
        );
    }
}
