//! Resolution of an incoming category selector against the loaded categories.
//!
//! A selector arrives from a clicked range button, the URL or the persisted
//! preference. It is resolved once per distinct signal: the resolver moves
//! `Unconsumed -> Consuming -> Consumed` and ignores the same signal after
//! that, however often the caller re-runs it.

use crate::domain::a001_category::{Category, CategoryId};
use crate::domain::common::text::non_blank;

/// Identity of one incoming selector. A new click on the same button carries
/// a new generation and resolves again.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PresetKey {
    pub selector: String,
    pub generation: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum PresetPhase {
    #[default]
    Idle,
    /// Waiting for categories to load
    Unconsumed(PresetKey),
    Consuming(PresetKey),
    Consumed(PresetKey),
}

/// Candidate selectors for one resolution pass
#[derive(Debug, Clone, Copy, Default)]
pub struct PresetSignal<'a> {
    /// Selector passed directly by the page (button click or URL)
    pub direct: Option<&'a str>,
    /// Generation of `direct`, bumped by the caller on every new click
    pub generation: u64,
    /// Selector read from the durable client store
    pub persisted: Option<&'a str>,
}

impl<'a> PresetSignal<'a> {
    pub fn direct(selector: &'a str, generation: u64) -> Self {
        Self {
            direct: Some(selector),
            generation,
            persisted: None,
        }
    }

    pub fn persisted(selector: &'a str) -> Self {
        Self {
            persisted: Some(selector),
            ..Self::default()
        }
    }

    fn candidates(&self) -> Vec<String> {
        [self.direct, self.persisted]
            .into_iter()
            .filter_map(|s| non_blank(s.map(str::to_string)))
            .collect()
    }

    fn key(&self) -> Option<PresetKey> {
        if let Some(direct) = non_blank(self.direct.map(str::to_string)) {
            return Some(PresetKey {
                selector: direct,
                generation: self.generation,
            });
        }
        non_blank(self.persisted.map(str::to_string)).map(|selector| PresetKey {
            selector,
            generation: 0,
        })
    }
}

/// Result of consuming a signal
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PresetResolution {
    pub key: PresetKey,
    /// Category to select; `None` leaves the current selection alone
    pub category: Option<CategoryId>,
    /// Whether a selector matched, as opposed to a fallback
    pub matched: bool,
    /// The persisted selector was read and must be removed from the store
    pub clear_persisted: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PresetOutcome {
    /// No selector offered
    Idle,
    /// Categories are not loaded yet
    Deferred,
    /// This signal was consumed earlier
    AlreadyConsumed,
    Consumed(PresetResolution),
}

/// First category matching `selector` by slug, then exact name, then
/// containment in the name
pub fn match_category<'a>(selector: &str, categories: &'a [Category]) -> Option<&'a Category> {
    categories
        .iter()
        .find(|c| c.slug_matches(selector))
        .or_else(|| categories.iter().find(|c| c.name_matches(selector)))
        .or_else(|| categories.iter().find(|c| c.name_contains(selector)))
}

#[derive(Debug, Clone, Default)]
pub struct PresetResolver {
    phase: PresetPhase,
}

impl PresetResolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> &PresetPhase {
        &self.phase
    }

    fn already_consumed(&self, key: &PresetKey) -> bool {
        matches!(&self.phase, PresetPhase::Consumed(last) if last == key)
    }

    /// Resolve `signal` against `categories`.
    ///
    /// `current` is the category selected right now; the first category is
    /// only used as a fallback when nothing is selected.
    pub fn resolve(
        &mut self,
        signal: PresetSignal<'_>,
        categories: &[Category],
        current: Option<CategoryId>,
    ) -> PresetOutcome {
        let Some(key) = signal.key() else {
            return PresetOutcome::Idle;
        };
        if self.already_consumed(&key) {
            return PresetOutcome::AlreadyConsumed;
        }
        if categories.is_empty() {
            self.phase = PresetPhase::Unconsumed(key);
            return PresetOutcome::Deferred;
        }

        self.phase = PresetPhase::Consuming(key.clone());
        let matched = signal
            .candidates()
            .iter()
            .find_map(|selector| match_category(selector, categories))
            .map(|c| c.id);
        let category = match (matched, current) {
            (Some(id), _) => Some(id),
            (None, None) => categories.first().map(|c| c.id),
            (None, Some(_)) => None,
        };
        let resolution = PresetResolution {
            key: key.clone(),
            category,
            matched: matched.is_some(),
            clear_persisted: signal.persisted.is_some(),
        };
        self.phase = PresetPhase::Consumed(key);
        PresetOutcome::Consumed(resolution)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn categories() -> Vec<Category> {
        vec![
            Category::new(1, "Fixings", "fixings"),
            Category::new(2, "Power Tools", "power-tools"),
            Category::new(3, "Sealants & Adhesives", "sealants-adhesives"),
            Category::new(4, "Fire Rated Products", "fire-rated"),
        ]
    }

    fn consumed(outcome: PresetOutcome) -> PresetResolution {
        match outcome {
            PresetOutcome::Consumed(r) => r,
            other => panic!("expected consumption, got {other:?}"),
        }
    }

    #[test]
    fn test_match_order() {
        let cats = categories();
        assert_eq!(match_category("power-tools", &cats).map(|c| c.id.0), Some(2));
        assert_eq!(match_category("Power Tools", &cats).map(|c| c.id.0), Some(2));
        assert_eq!(match_category("sealants & adhesives", &cats).map(|c| c.id.0), Some(3));
        assert_eq!(match_category("fire rated", &cats).map(|c| c.id.0), Some(4));
        assert_eq!(match_category("Adhesives", &cats).map(|c| c.id.0), Some(3));
        assert!(match_category("plumbing", &cats).is_none());
    }

    #[test]
    fn test_direct_preferred_over_persisted() {
        let mut resolver = PresetResolver::new();
        let signal = PresetSignal {
            direct: Some("power-tools"),
            generation: 1,
            persisted: Some("Fixings"),
        };
        let r = consumed(resolver.resolve(signal, &categories(), None));
        assert_eq!(r.category, Some(CategoryId(2)));
        assert!(r.matched);
        assert!(r.clear_persisted);
    }

    #[test]
    fn test_falls_through_to_persisted_when_direct_misses() {
        let mut resolver = PresetResolver::new();
        let signal = PresetSignal {
            direct: Some("unknown"),
            generation: 1,
            persisted: Some("Fixings"),
        };
        let r = consumed(resolver.resolve(signal, &categories(), Some(CategoryId(3))));
        assert_eq!(r.category, Some(CategoryId(1)));
    }

    #[test]
    fn test_same_signal_applies_once() {
        let mut resolver = PresetResolver::new();
        let cats = categories();
        let signal = PresetSignal::direct("Power Tools", 7);

        let first = consumed(resolver.resolve(signal, &cats, None));
        assert_eq!(first.category, Some(CategoryId(2)));
        assert_eq!(
            resolver.resolve(signal, &cats, Some(CategoryId(2))),
            PresetOutcome::AlreadyConsumed
        );

        // a fresh click on the same button
        let again = consumed(resolver.resolve(
            PresetSignal::direct("Power Tools", 8),
            &cats,
            Some(CategoryId(1)),
        ));
        assert_eq!(again.category, Some(CategoryId(2)));
    }

    #[test]
    fn test_deferred_until_categories_load() {
        let mut resolver = PresetResolver::new();
        let signal = PresetSignal::persisted("fixings");
        assert_eq!(resolver.resolve(signal, &[], None), PresetOutcome::Deferred);
        assert!(matches!(resolver.phase(), PresetPhase::Unconsumed(_)));

        let r = consumed(resolver.resolve(signal, &categories(), None));
        assert_eq!(r.category, Some(CategoryId(1)));
        assert!(matches!(resolver.phase(), PresetPhase::Consumed(_)));
    }

    #[test]
    fn test_miss_falls_back_only_without_selection() {
        let cats = categories();

        let mut resolver = PresetResolver::new();
        let r = consumed(resolver.resolve(PresetSignal::direct("plumbing", 1), &cats, None));
        assert_eq!(r.category, Some(CategoryId(1)));
        assert!(!r.matched);

        let mut resolver = PresetResolver::new();
        let r = consumed(resolver.resolve(
            PresetSignal::direct("plumbing", 1),
            &cats,
            Some(CategoryId(3)),
        ));
        assert_eq!(r.category, None);
        assert!(!r.clear_persisted);
    }

    #[test]
    fn test_blank_signal_is_idle() {
        let mut resolver = PresetResolver::new();
        let signal = PresetSignal {
            direct: Some("  "),
            generation: 1,
            persisted: None,
        };
        assert_eq!(resolver.resolve(signal, &categories(), None), PresetOutcome::Idle);
        assert_eq!(resolver.phase(), &PresetPhase::Idle);
    }
}
