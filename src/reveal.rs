//! One-shot scroll reveals.
//!
//! Every registered element holds its own subscription. The first
//! intersection report that meets the threshold cancels that subscription
//! and yields a [`Reveal`]; anything reported afterwards is ignored, so
//! scrolling away and back never replays the animation.

use std::fmt;

/// Class that carries the fadeInUp animation.
pub const REVEAL_CLASS: &str = "animate-in";
/// Attribute used to map observer entries back to their subscription.
pub const REVEAL_KEY_ATTR: &str = "data-reveal-key";

/// Margin applied around the viewport before intersections are computed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RootMargin {
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
    pub left: i32,
}

impl fmt::Display for RootMargin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}px {}px {}px {}px", self.top, self.right, self.bottom, self.left)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RevealOptions {
    pub threshold: f64,
    pub root_margin: RootMargin,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RevealKey(usize);

impl RevealKey {
    #[cfg(test)]
    pub fn index(self) -> usize {
        self.0
    }

    pub fn parse(raw: &str) -> Option<Self> {
        raw.parse().ok().map(RevealKey)
    }
}

impl fmt::Display for RevealKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Subscription {
    Observing,
    Revealed,
}

/// Instruction to apply the terminal presentation state and stop observing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Reveal {
    pub key: RevealKey,
}

#[derive(Debug)]
pub struct RevealScheduler {
    threshold: f64,
    subscriptions: Vec<Subscription>,
}

impl RevealScheduler {
    pub fn new(options: &RevealOptions) -> Self {
        Self {
            threshold: options.threshold,
            subscriptions: Vec::new(),
        }
    }

    /// Opens a subscription for `count` more elements.
    pub fn register(&mut self, count: usize) -> Vec<RevealKey> {
        let start = self.subscriptions.len();
        self.subscriptions
            .extend(std::iter::repeat(Subscription::Observing).take(count));
        (start..start + count).map(RevealKey).collect()
    }

    /// Feeds one intersection report for `key`.
    ///
    /// Returns `Some` exactly once per element: on the first report whose
    /// ratio reaches the threshold. Unknown keys are ignored.
    pub fn on_intersection(&mut self, key: RevealKey, is_intersecting: bool, ratio: f64) -> Option<Reveal> {
        let subscription = self.subscriptions.get_mut(key.0)?;
        if *subscription == Subscription::Revealed {
            return None;
        }
        // Ratio must reach the threshold, not just be non-zero. An element
        // taller than root height / threshold can never reach it and stays
        // pending; keep reveal targets card-sized.
        if !is_intersecting || ratio < self.threshold {
            return None;
        }
        *subscription = Subscription::Revealed;
        Some(Reveal { key })
    }

    #[cfg(test)]
    pub fn is_revealed(&self, key: RevealKey) -> bool {
        matches!(self.subscriptions.get(key.0), Some(Subscription::Revealed))
    }

    /// Number of elements still waiting for their first qualifying report.
    pub fn pending(&self) -> usize {
        self.subscriptions
            .iter()
            .filter(|s| **s == Subscription::Observing)
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scheduler() -> RevealScheduler {
        RevealScheduler::new(&RevealOptions {
            threshold: 0.1,
            root_margin: RootMargin { top: 0, right: 0, bottom: -50, left: 0 },
        })
    }

    #[test]
    fn root_margin_renders_css_shorthand() {
        let margin = RootMargin { top: 0, right: 0, bottom: -50, left: 0 };
        assert_eq!(margin.to_string(), "0px 0px -50px 0px");
    }

    #[test]
    fn reveals_only_after_threshold_is_met() {
        let mut s = scheduler();
        let keys = s.register(1);
        assert_eq!(s.on_intersection(keys[0], true, 0.05), None);
        assert!(!s.is_revealed(keys[0]));
        assert_eq!(s.on_intersection(keys[0], true, 0.1), Some(Reveal { key: keys[0] }));
        assert!(s.is_revealed(keys[0]));
    }

    #[test]
    fn non_intersecting_report_never_reveals() {
        let mut s = scheduler();
        let keys = s.register(1);
        assert_eq!(s.on_intersection(keys[0], false, 0.9), None);
        assert_eq!(s.pending(), 1);
    }

    #[test]
    fn reveal_is_one_shot() {
        let mut s = scheduler();
        let keys = s.register(2);
        assert!(s.on_intersection(keys[1], true, 0.5).is_some());
        // scrolled away and back
        assert!(s.on_intersection(keys[1], false, 0.0).is_none());
        assert!(s.on_intersection(keys[1], true, 1.0).is_none());
        assert!(s.is_revealed(keys[1]));
        assert_eq!(s.pending(), 1);
    }

    #[test]
    fn subscriptions_are_independent() {
        let mut s = scheduler();
        let keys = s.register(3);
        s.on_intersection(keys[0], true, 0.4);
        assert!(s.is_revealed(keys[0]));
        assert!(!s.is_revealed(keys[1]));
        assert!(!s.is_revealed(keys[2]));

        let more = s.register(2);
        assert_eq!(more[0].index(), 3);
        assert_eq!(s.pending(), 4);
    }

    #[test]
    fn intersecting_below_threshold_stays_pending() {
        let mut s = scheduler();
        let keys = s.register(1);
        // an element much taller than the viewport peaks below 0.1
        for ratio in [0.02, 0.05, 0.09] {
            assert_eq!(s.on_intersection(keys[0], true, ratio), None);
        }
        assert!(!s.is_revealed(keys[0]));
        assert_eq!(s.pending(), 1);
    }

    #[test]
    fn unknown_keys_are_ignored() {
        let mut s = scheduler();
        s.register(1);
        assert_eq!(s.on_intersection(RevealKey(7), true, 1.0), None);
        assert_eq!(RevealKey::parse("x"), None);
        assert_eq!(RevealKey::parse("0"), Some(RevealKey(0)));
    }
}
