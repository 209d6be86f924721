use crate::model::{Beverage, BeverageKind};
use tracing::debug;

/// Maps a menu keyword to a freshly made base beverage.
#[derive(Debug, Clone)]
pub struct BeverageFactory {
    kinds: Vec<BeverageKind>,
}

impl BeverageFactory {
    /// A factory serving only the given kinds, listed in the given order.
    pub fn new(kinds: Vec<BeverageKind>) -> Self {
        Self { kinds }
    }

    /// Keywords accepted by [`BeverageFactory::create`], in menu order.
    pub fn keywords(&self) -> Vec<&'static str> {
        self.kinds.iter().map(BeverageKind::keyword).collect()
    }

    /// Creates a base beverage (no toppings) for `keyword`, ignoring case.
    ///
    /// Returns `None` when no kind on this menu answers to the keyword.
    pub fn create(&self, keyword: &str) -> Option<Beverage> {
        let kind = keyword.parse::<BeverageKind>().ok()?;
        if !self.kinds.contains(&kind) {
            debug!(keyword, "Kind not served by this factory");
            return None;
        }
        Some(Beverage::new(kind))
    }
}

impl Default for BeverageFactory {
    fn default() -> Self {
        Self::new(BeverageKind::values())
    }
}
