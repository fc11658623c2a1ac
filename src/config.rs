use crate::error::ConfigError;

/// Viewport class, picked once from the initial window width.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layout {
    Compact,
    Full,
}

impl Layout {
    pub fn detect(viewport_width: f64, config: &VizConfig) -> Self {
        if viewport_width <= config.compact_width {
            Layout::Compact
        } else {
            Layout::Full
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VizConfig {
    /// Pixel step between potential samples.
    pub potential_res: usize,
    /// Pixel step between field samples.
    pub field_res: usize,
    /// Upper bound on the magnitude of a randomly placed charge.
    pub max_charge: f64,
    /// Viewports at most this wide use the compact layout.
    pub compact_width: f64,
    pub compact_brightness: f64,
    pub full_brightness: f64,
    pub line_width: f64,
    /// Opacity of the black fill that starts every frame.
    pub clear_alpha: f64,
}

impl Default for VizConfig {
    fn default() -> Self {
        Self {
            potential_res: 5,
            field_res: 35,
            max_charge: 3.0,
            compact_width: 760.0,
            compact_brightness: 5.0,
            full_brightness: 10.0,
            line_width: 2.0,
            clear_alpha: 1.0,
        }
    }
}

impl VizConfig {
    pub fn brightness(&self, layout: Layout) -> f64 {
        match layout {
            Layout::Compact => self.compact_brightness,
            Layout::Full => self.full_brightness,
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.potential_res == 0 {
            return Err(ConfigError::ZeroResolution {
                which: "potential_res",
            });
        }
        if self.field_res == 0 {
            return Err(ConfigError::ZeroResolution { which: "field_res" });
        }
        for (which, value) in [
            ("max_charge", self.max_charge),
            ("compact_brightness", self.compact_brightness),
            ("full_brightness", self.full_brightness),
            ("line_width", self.line_width),
        ] {
            if !(value > 0.0) {
                return Err(ConfigError::NonPositive { which, value });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let config = VizConfig::default();
        assert_eq!(config.validate(), Ok(()));
        assert_eq!(config.potential_res, 5);
        assert_eq!(config.field_res, 35);
    }

    #[test]
    fn layout_threshold_is_inclusive() {
        let config = VizConfig::default();
        assert_eq!(Layout::detect(760.0, &config), Layout::Compact);
        assert_eq!(Layout::detect(761.0, &config), Layout::Full);
        assert_eq!(config.brightness(Layout::Compact), 5.0);
        assert_eq!(config.brightness(Layout::Full), 10.0);
    }

    #[test]
    fn rejects_bad_values() {
        let config = VizConfig {
            field_res: 0,
            ..Default::default()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::ZeroResolution { which: "field_res" })
        );

        let config = VizConfig {
            max_charge: f64::NAN,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::NonPositive {
                which: "max_charge",
                ..
            })
        ));
    }
}
