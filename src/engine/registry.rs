// src/engine/registry.rs
//! Uniform per-concept finder registry.
//!
//! Every concept module exposes a `FinderFamily` mapping the tier names
//! `"v1".."v5"` to plain function pointers, plus the two semantic aliases
//! `"high_recall"` (= v1) and `"high_precision"` (= v5). Callers that iterate
//! the ladder (the CLI harness, downstream annotation pipelines) only ever go
//! through this registry.

use super::Finding;

/// A tier finder: pure function of the input text, using the family's
/// default window/block parameters.
pub type FinderFn = fn(&str) -> Vec<Finding>;

/// The five-tier ladder of one concept family.
#[derive(Debug, Clone, Copy)]
pub struct FinderFamily {
    pub concept: &'static str,
    tiers: [(&'static str, FinderFn); 5],
}

impl FinderFamily {
    pub const fn new(
        concept: &'static str,
        v1: FinderFn,
        v2: FinderFn,
        v3: FinderFn,
        v4: FinderFn,
        v5: FinderFn,
    ) -> Self {
        Self {
            concept,
            tiers: [("v1", v1), ("v2", v2), ("v3", v3), ("v4", v4), ("v5", v5)],
        }
    }

    /// Looks up a tier by name: `"v1".."v5"`, `"high_recall"` or
    /// `"high_precision"`.
    pub fn get(&self, name: &str) -> Option<FinderFn> {
        match name {
            "high_recall" => Some(self.tiers[0].1),
            "high_precision" => Some(self.tiers[4].1),
            _ => self
                .tiers
                .iter()
                .find(|(n, _)| *n == name)
                .map(|&(_, f)| f),
        }
    }

    /// Tier name/function pairs in ladder order (v1 first).
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, FinderFn)> + '_ {
        self.tiers.iter().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn empty(_: &str) -> Vec<Finding> {
        Vec::new()
    }
    fn one(_: &str) -> Vec<Finding> {
        vec![Finding::new(0, 0, "x")]
    }

    const FAMILY: FinderFamily = FinderFamily::new("demo", one, empty, empty, empty, empty);

    #[test]
    fn test_get_by_tier_name() {
        assert_eq!(FAMILY.get("v1").unwrap()("t").len(), 1);
        assert!(FAMILY.get("v5").unwrap()("t").is_empty());
        assert!(FAMILY.get("v6").is_none());
    }

    #[test]
    fn test_aliases() {
        assert_eq!(FAMILY.get("high_recall").unwrap()("t").len(), 1);
        assert!(FAMILY.get("high_precision").unwrap()("t").is_empty());
    }

    #[test]
    fn test_iter_order() {
        let names: Vec<&str> = FAMILY.iter().map(|(n, _)| n).collect();
        assert_eq!(names, ["v1", "v2", "v3", "v4", "v5"]);
    }
}
