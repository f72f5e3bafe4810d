/// Core count assumed when the browser does not report one.
pub const DEFAULT_CORES: u32 = 4;
/// Below this viewport width the layout switches to the mobile arrangement.
pub const MOBILE_BREAKPOINT: f64 = 768.0;

/// Coarse animation budget of the viewing device.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DeviceTier {
    Slow,
    Mid,
    Fast,
}

impl DeviceTier {
    /// Tier used when no device profile can be read at all.
    pub fn fallback() -> Self {
        Self::Fast
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Slow => "slow",
            Self::Mid => "mid",
            Self::Fast => "fast",
        }
    }
}

/// Static capability signals, probed once at mount and passed in.
#[derive(Debug, Clone, PartialEq)]
pub struct DeviceProfile {
    pub cores: Option<u32>,
    pub pixel_ratio: f64,
    pub reduced_motion: bool,
    pub width: f64,
}

impl DeviceProfile {
    pub fn tier(&self) -> DeviceTier {
        let cores = self.cores.unwrap_or(DEFAULT_CORES);
        if cores < 4 || self.reduced_motion {
            DeviceTier::Slow
        } else if cores <= 6 || self.pixel_ratio < 1.5 || self.width < 1400.0 {
            DeviceTier::Mid
        } else {
            DeviceTier::Fast
        }
    }
}

pub fn is_mobile_width(width: f64) -> bool {
    width < MOBILE_BREAKPOINT
}

/// Number of extra decorative layers a component may animate per tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayerBudget {
    pub slow: usize,
    pub mid: usize,
    pub fast: usize,
}

pub const AURORA_BANDS: LayerBudget = LayerBudget {
    slow: 0,
    mid: 2,
    fast: 4,
};

pub const CLOUDS: LayerBudget = LayerBudget {
    slow: 0,
    mid: 2,
    fast: 4,
};

pub const BALLOONS: LayerBudget = LayerBudget {
    slow: 0,
    mid: 1,
    fast: 3,
};

pub const BUBBLES: LayerBudget = LayerBudget {
    slow: 0,
    mid: 4,
    fast: 8,
};

impl LayerBudget {
    pub fn for_tier(&self, tier: DeviceTier) -> usize {
        match tier {
            DeviceTier::Slow => self.slow,
            DeviceTier::Mid => self.mid,
            DeviceTier::Fast => self.fast,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile(cores: Option<u32>, pixel_ratio: f64, reduced_motion: bool, width: f64) -> DeviceProfile {
        DeviceProfile {
            cores,
            pixel_ratio,
            reduced_motion,
            width,
        }
    }

    #[test]
    fn test_two_cores_always_slow() {
        for ratio in [1.0, 2.0, 3.0] {
            for reduced in [false, true] {
                for width in [320.0, 1400.0, 2560.0] {
                    assert_eq!(profile(Some(2), ratio, reduced, width).tier(), DeviceTier::Slow);
                }
            }
        }
    }

    #[test]
    fn test_reduced_motion_is_slow() {
        assert_eq!(profile(Some(16), 2.0, true, 2560.0).tier(), DeviceTier::Slow);
    }

    #[test]
    fn test_mid_conditions() {
        assert_eq!(profile(Some(6), 2.0, false, 2560.0).tier(), DeviceTier::Mid);
        assert_eq!(profile(Some(8), 1.0, false, 2560.0).tier(), DeviceTier::Mid);
        assert_eq!(profile(Some(8), 2.0, false, 1399.0).tier(), DeviceTier::Mid);
    }

    #[test]
    fn test_fast() {
        assert_eq!(profile(Some(8), 1.5, false, 1400.0).tier(), DeviceTier::Fast);
    }

    #[test]
    fn test_unknown_cores_default_to_four() {
        assert_eq!(profile(None, 2.0, false, 2560.0).tier(), DeviceTier::Mid);
    }

    #[test]
    fn test_budgets_are_monotonic() {
        for budget in [AURORA_BANDS, CLOUDS, BALLOONS, BUBBLES] {
            assert_eq!(budget.for_tier(DeviceTier::Slow), 0);
            assert!(budget.for_tier(DeviceTier::Slow) <= budget.for_tier(DeviceTier::Mid));
            assert!(budget.for_tier(DeviceTier::Mid) <= budget.for_tier(DeviceTier::Fast));
        }
        assert_eq!(AURORA_BANDS.for_tier(DeviceTier::Mid), 2);
        assert_eq!(AURORA_BANDS.for_tier(DeviceTier::Fast), 4);
    }

    #[test]
    fn test_mobile_breakpoint() {
        assert!(is_mobile_width(767.0));
        assert!(!is_mobile_width(768.0));
    }
}
