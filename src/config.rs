use log::Level;

/// Tunables for the hero intro, the carousel and the section reveal.
#[derive(Clone, Debug, PartialEq)]
pub struct SiteConfig {
    /// Viewports at or below this width skip the intro entirely.
    pub mobile_breakpoint: f64,
    pub settle_delay_ms: u32,
    /// Wheel delta needed to slide the hero images by one percent.
    pub wheel_units_per_percent: f64,
    /// Both image offsets must be closer than this to zero before settling.
    pub settle_tolerance: f64,
    /// Share of the viewport height a section has to rise past to be revealed.
    pub reveal_threshold: f64,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            mobile_breakpoint: 768.0,
            settle_delay_ms: 150,
            wheel_units_per_percent: 10.0,
            settle_tolerance: 1.0,
            reveal_threshold: 0.15,
        }
    }
}

impl SiteConfig {
    pub fn is_mobile(&self, viewport_width: f64) -> bool {
        viewport_width <= self.mobile_breakpoint
    }
}

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Verbose while running `trunk serve`
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn breakpoint_is_inclusive() {
        let config = SiteConfig::default();
        assert!(config.is_mobile(600.0));
        assert!(config.is_mobile(768.0));
        assert!(!config.is_mobile(768.5));
        assert!(!config.is_mobile(1200.0));
    }

    #[test]
    fn custom_breakpoint_moves_the_boundary() {
        let config = SiteConfig {
            mobile_breakpoint: 1024.0,
            ..SiteConfig::default()
        };
        assert!(config.is_mobile(1000.0));
        assert!(!config.is_mobile(1200.0));
    }
}
