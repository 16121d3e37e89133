//! Pending invalidation raised by property changes.

/// What the host has to redo after a property change.
///
/// Levels are ordered: a relayout always implies a repaint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub enum Invalidation {
    /// Nothing changed.
    #[default]
    Clean,
    /// Only pixels changed; the last measurement is still valid.
    Repaint,
    /// Size-affecting change; measure again before drawing.
    Relayout,
}

impl Invalidation {
    /// Combine two pending invalidations, keeping the stronger one.
    pub fn merge(self, other: Invalidation) -> Invalidation {
        self.max(other)
    }

    pub fn needs_layout(self) -> bool {
        self == Invalidation::Relayout
    }

    pub fn needs_paint(self) -> bool {
        self != Invalidation::Clean
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merge_keeps_strongest() {
        assert_eq!(Invalidation::Clean.merge(Invalidation::Repaint), Invalidation::Repaint);
        assert_eq!(Invalidation::Relayout.merge(Invalidation::Repaint), Invalidation::Relayout);
        assert_eq!(Invalidation::Clean.merge(Invalidation::Clean), Invalidation::Clean);
    }

    #[test]
    fn test_relayout_implies_paint() {
        assert!(Invalidation::Relayout.needs_paint());
        assert!(Invalidation::Relayout.needs_layout());
        assert!(Invalidation::Repaint.needs_paint());
        assert!(!Invalidation::Repaint.needs_layout());
        assert!(!Invalidation::Clean.needs_paint());
    }
}
