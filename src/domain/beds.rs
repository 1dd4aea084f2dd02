//! Beds - Facility Bed Availability
//!
//! The facility aggregate is always derived from the three category pools:
//! `available` is their sum and `occupied` is `total - available`. Category
//! availability never leaves `[0, pool.total]`.

/// One of the three bed pools
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BedCategory {
    Icu,
    Emergency,
    General,
}

impl BedCategory {
    pub fn all() -> &'static [BedCategory] {
        &[BedCategory::Icu, BedCategory::Emergency, BedCategory::General]
    }

    /// Translation key under the `beds` namespace
    pub fn label_key(&self) -> &'static str {
        match self {
            BedCategory::Icu => "icu",
            BedCategory::Emergency => "emergency",
            BedCategory::General => "general",
        }
    }
}

/// Total and available beds of a single category
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BedPool {
    pub total: u32,
    pub available: u32,
}

impl BedPool {
    /// Create a pool, clamping `available` to `total`
    pub fn new(total: u32, available: u32) -> Self {
        Self {
            total,
            available: available.min(total),
        }
    }

    pub fn occupied(&self) -> u32 {
        self.total - self.available
    }
}

/// Result of an availability adjustment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AdjustOutcome {
    pub category: BedCategory,
    pub previous: u32,
    pub current: u32,
}

impl AdjustOutcome {
    pub fn changed(&self) -> bool {
        self.previous != self.current
    }

    /// The requested delta was cut short by a pool bound
    pub fn clamped(&self, delta: i32) -> bool {
        i64::from(self.current) - i64::from(self.previous) != i64::from(delta)
    }
}

/// Facility-wide bed counters
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BedStatus {
    total: u32,
    occupied: u32,
    available: u32,
    icu: BedPool,
    emergency: BedPool,
    general: BedPool,
}

impl BedStatus {
    /// Build the aggregate from the three pools; the facility total is their sum
    pub fn from_pools(icu: BedPool, emergency: BedPool, general: BedPool) -> Self {
        let mut status = Self {
            total: icu.total + emergency.total + general.total,
            occupied: 0,
            available: 0,
            icu,
            emergency,
            general,
        };
        status.recompute();
        status
    }

    pub fn total(&self) -> u32 {
        self.total
    }

    pub fn occupied(&self) -> u32 {
        self.occupied
    }

    pub fn available(&self) -> u32 {
        self.available
    }

    pub fn pool(&self, category: BedCategory) -> BedPool {
        match category {
            BedCategory::Icu => self.icu,
            BedCategory::Emergency => self.emergency,
            BedCategory::General => self.general,
        }
    }

    fn pool_mut(&mut self, category: BedCategory) -> &mut BedPool {
        match category {
            BedCategory::Icu => &mut self.icu,
            BedCategory::Emergency => &mut self.emergency,
            BedCategory::General => &mut self.general,
        }
    }

    /// Fraction of beds occupied, in `[0.0, 1.0]`
    pub fn occupancy_ratio(&self) -> f32 {
        if self.total == 0 {
            return 0.0;
        }
        self.occupied as f32 / self.total as f32
    }

    /// Move a category's availability by `delta`, clamped to the pool bounds.
    ///
    /// Totals never change. The aggregate counters are recomputed afterwards.
    pub fn adjust(&mut self, category: BedCategory, delta: i32) -> AdjustOutcome {
        let pool = self.pool_mut(category);
        let previous = pool.available;

        let candidate = i64::from(previous) + i64::from(delta);
        let clamped = candidate.clamp(0, i64::from(pool.total));
        // clamped lies within [0, pool.total], so it fits in u32
        pool.available = u32::try_from(clamped).unwrap_or(pool.total);
        let current = pool.available;

        self.recompute();

        AdjustOutcome {
            category,
            previous,
            current,
        }
    }

    fn recompute(&mut self) {
        self.available = self.icu.available + self.emergency.available + self.general.available;
        self.occupied = self.total - self.available;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn seeded() -> BedStatus {
        BedStatus::from_pools(BedPool::new(20, 5), BedPool::new(15, 3), BedPool::new(65, 17))
    }

    fn assert_consistent(status: &BedStatus) {
        let sum: u32 = BedCategory::all()
            .iter()
            .map(|c| status.pool(*c).available)
            .sum();
        assert_eq!(status.available(), sum);
        assert_eq!(status.occupied(), status.total() - status.available());
    }

    #[test]
    fn seed_aggregates() {
        let status = seeded();
        assert_eq!(status.total(), 100);
        assert_eq!(status.available(), 25);
        assert_eq!(status.occupied(), 75);
        assert!((status.occupancy_ratio() - 0.75).abs() < f32::EPSILON);
    }

    #[test]
    fn icu_clamps_at_zero() {
        let mut status = seeded();
        for expected in (0..5).rev() {
            let outcome = status.adjust(BedCategory::Icu, -1);
            assert_eq!(outcome.current, expected);
        }

        let outcome = status.adjust(BedCategory::Icu, -1);
        assert_eq!(outcome.previous, 0);
        assert_eq!(outcome.current, 0);
        assert!(!outcome.changed());
        assert!(outcome.clamped(-1));
        assert_eq!(status.pool(BedCategory::Icu).available, 0);
        assert_consistent(&status);
    }

    #[test]
    fn clamps_at_pool_total() {
        let mut status = seeded();
        let outcome = status.adjust(BedCategory::Emergency, 100);
        assert_eq!(outcome.current, 15);
        assert!(outcome.clamped(100));
        assert_eq!(status.occupied(), 100 - (5 + 15 + 17));
        assert_consistent(&status);
    }

    #[test]
    fn extreme_deltas_do_not_overflow() {
        let mut status = seeded();
        status.adjust(BedCategory::General, i32::MAX);
        assert_eq!(status.pool(BedCategory::General).available, 65);
        status.adjust(BedCategory::General, i32::MIN);
        assert_eq!(status.pool(BedCategory::General).available, 0);
        assert_consistent(&status);
    }

    #[test]
    fn adjust_touches_only_one_pool() {
        let mut status = seeded();
        status.adjust(BedCategory::General, 1);
        assert_eq!(status.pool(BedCategory::Icu), BedPool::new(20, 5));
        assert_eq!(status.pool(BedCategory::Emergency), BedPool::new(15, 3));
        assert_eq!(status.pool(BedCategory::General), BedPool::new(65, 18));
    }

    #[test]
    fn empty_facility_ratio_is_zero() {
        let status = BedStatus::from_pools(BedPool::new(0, 0), BedPool::new(0, 0), BedPool::new(0, 0));
        assert_eq!(status.occupancy_ratio(), 0.0);
    }

    fn category_strategy() -> impl Strategy<Value = BedCategory> {
        prop_oneof![
            Just(BedCategory::Icu),
            Just(BedCategory::Emergency),
            Just(BedCategory::General),
        ]
    }

    proptest! {
        #[test]
        fn unit_steps_stay_in_bounds(
            steps in prop::collection::vec((category_strategy(), prop_oneof![Just(-1i32), Just(1i32)]), 0..200)
        ) {
            let mut status = seeded();
            for (category, delta) in steps {
                status.adjust(category, delta);
                let pool = status.pool(category);
                prop_assert!(pool.available <= pool.total);
                prop_assert_eq!(status.total(), 100);
            }
        }

        #[test]
        fn aggregates_stay_consistent(
            steps in prop::collection::vec((category_strategy(), any::<i32>()), 0..100)
        ) {
            let mut status = seeded();
            for (category, delta) in steps {
                status.adjust(category, delta);
                let sum: u32 = BedCategory::all().iter().map(|c| status.pool(*c).available).sum();
                prop_assert_eq!(status.available(), sum);
                prop_assert_eq!(status.occupied(), status.total() - status.available());
                prop_assert_eq!(status.pool(BedCategory::Icu).total, 20);
                prop_assert_eq!(status.pool(BedCategory::Emergency).total, 15);
                prop_assert_eq!(status.pool(BedCategory::General).total, 65);
            }
        }
    }
}
