//! Per-bar highlight tags

/// What the algorithm is currently doing with a bar.
///
/// The renderer maps each variant to one palette colour; the engine never
/// deals in colours directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Highlight {
    /// Untouched
    #[default]
    Neutral,
    /// Locked in by the finish sweep
    Sorted,
    /// Left bar of a bubble comparison
    ActiveA,
    /// Right bar of a bubble comparison, or the running selection minimum
    ActiveB,
    /// Scan position during a selection scan
    Pivot,
    /// Destination slot just written by a merge
    Merging,
}

impl Highlight {
    /// Every variant, in palette order
    pub const ALL: [Highlight; 6] = [
        Highlight::Neutral,
        Highlight::Sorted,
        Highlight::ActiveA,
        Highlight::ActiveB,
        Highlight::Pivot,
        Highlight::Merging,
    ];

    pub fn is_neutral(self) -> bool {
        self == Highlight::Neutral
    }
}
