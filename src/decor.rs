use crate::device::{DeviceTier, LayerBudget};

/// One decorative sprite in a scene: position in percent of the scene box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sprite {
    pub top: f64,
    pub left: f64,
    pub scale: f64,
    /// Seconds for one drift/float cycle.
    pub period: f64,
    /// 0 pins the sprite to the page, 1 scrolls it away at full speed.
    pub depth: f64,
}

const fn sprite(top: f64, left: f64, scale: f64, period: f64, depth: f64) -> Sprite {
    Sprite {
        top,
        left,
        scale,
        period,
        depth,
    }
}

// base layers first, tier extras after
pub const CLOUD_LAYERS: [Sprite; 6] = [
    sprite(8.0, 4.0, 1.2, 90.0, 0.15),
    sprite(22.0, 58.0, 0.9, 120.0, 0.25),
    sprite(12.0, 32.0, 0.7, 140.0, 0.35),
    sprite(35.0, 80.0, 1.0, 100.0, 0.2),
    sprite(48.0, 14.0, 0.6, 160.0, 0.45),
    sprite(5.0, 70.0, 0.8, 110.0, 0.3),
];
pub const CLOUD_BASE: usize = 2;

pub const BALLOON_LAYERS: [Sprite; 4] = [
    sprite(30.0, 86.0, 1.0, 9.0, 0.5),
    sprite(55.0, 8.0, 0.7, 12.0, 0.6),
    sprite(18.0, 46.0, 0.5, 15.0, 0.7),
    sprite(62.0, 66.0, 0.6, 11.0, 0.55),
];
pub const BALLOON_BASE: usize = 1;

pub const BUBBLE_LAYERS: [Sprite; 10] = [
    sprite(90.0, 10.0, 0.6, 7.0, 0.0),
    sprite(85.0, 48.0, 0.9, 9.0, 0.0),
    sprite(95.0, 22.0, 0.4, 6.0, 0.0),
    sprite(80.0, 73.0, 0.7, 8.0, 0.0),
    sprite(92.0, 35.0, 0.5, 10.0, 0.0),
    sprite(88.0, 60.0, 0.3, 5.5, 0.0),
    sprite(97.0, 88.0, 0.8, 7.5, 0.0),
    sprite(83.0, 5.0, 0.45, 6.5, 0.0),
    sprite(91.0, 94.0, 0.35, 8.5, 0.0),
    sprite(86.0, 41.0, 0.55, 9.5, 0.0),
];
pub const BUBBLE_BASE: usize = 2;

/// Colour stops for each aurora band, dimmest first.
pub const AURORA_BANDS: [(&str, &str); 5] = [
    ("#1de9b6", "#00b8d4"),
    ("#64ffda", "#18ffff"),
    ("#b388ff", "#536dfe"),
    ("#69f0ae", "#40c4ff"),
    ("#ea80fc", "#7c4dff"),
];
pub const AURORA_BASE: usize = 1;

/// The sprites a tier may animate: the base layers plus the tier's extras.
pub fn visible_layers<T>(table: &[T], base: usize, budget: LayerBudget, tier: DeviceTier) -> &[T] {
    let count = (base + budget.for_tier(tier)).min(table.len());
    &table[..count]
}

/// Vertical translation (px) for a layer at `depth` when the window has
/// scrolled `scroll_y` px.
pub fn parallax_offset(scroll_y: f64, depth: f64) -> f64 {
    -scroll_y.max(0.0) * depth.clamp(0.0, 1.0)
}

/// Off-screen animations are paused rather than removed.
pub fn play_state(in_viewport: bool) -> &'static str {
    if in_viewport {
        "running"
    } else {
        "paused"
    }
}

impl Sprite {
    pub fn to_css(&self, scroll_y: f64, in_viewport: bool) -> String {
        format!(
            "top: {}%; left: {}%; transform: translateY({:.1}px) scale({}); animation-duration: {}s; animation-play-state: {};",
            self.top,
            self.left,
            parallax_offset(scroll_y, self.depth),
            self.scale,
            self.period,
            play_state(in_viewport)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::device::{AURORA_BANDS as AURORA_BUDGET, BUBBLES, CLOUDS};

    #[test]
    fn test_slow_tier_keeps_only_base_layers() {
        assert_eq!(visible_layers(&CLOUD_LAYERS, CLOUD_BASE, CLOUDS, DeviceTier::Slow).len(), 2);
        assert_eq!(
            visible_layers(&AURORA_BANDS, AURORA_BASE, AURORA_BUDGET, DeviceTier::Slow).len(),
            1
        );
    }

    #[test]
    fn test_layer_count_grows_with_tier() {
        let slow = visible_layers(&BUBBLE_LAYERS, BUBBLE_BASE, BUBBLES, DeviceTier::Slow).len();
        let mid = visible_layers(&BUBBLE_LAYERS, BUBBLE_BASE, BUBBLES, DeviceTier::Mid).len();
        let fast = visible_layers(&BUBBLE_LAYERS, BUBBLE_BASE, BUBBLES, DeviceTier::Fast).len();
        assert!(slow < mid && mid < fast);
        assert_eq!(fast, BUBBLE_LAYERS.len());
    }

    #[test]
    fn test_layers_never_exceed_table() {
        let budget = LayerBudget {
            slow: 50,
            mid: 50,
            fast: 50,
        };
        assert_eq!(
            visible_layers(&CLOUD_LAYERS, CLOUD_BASE, budget, DeviceTier::Fast).len(),
            CLOUD_LAYERS.len()
        );
    }

    #[test]
    fn test_parallax() {
        assert_eq!(parallax_offset(200.0, 0.5), -100.0);
        assert_eq!(parallax_offset(200.0, 3.0), -200.0);
        assert_eq!(parallax_offset(-40.0, 0.5), 0.0);
    }

    #[test]
    fn test_offscreen_sprite_is_paused() {
        let css = CLOUD_LAYERS[0].to_css(0.0, false);
        assert!(css.contains("animation-play-state: paused"));
        assert!(CLOUD_LAYERS[0].to_css(0.0, true).contains("running"));
    }
}
