//! Configuration for layout reconstruction.
//!
//! The thresholds here are tuned to one report layout (US-letter Primavera
//! lookahead exports) and are not expected to generalize to other page sizes
//! or coordinate scales without recalibration.

/// Vertical distance (coordinate units) beyond which a fragment starts a new
/// physical line.
pub const LINE_Y_TOLERANCE: f32 = 5.0;

/// Left edge of the activity-name column band.
pub const ACTIVITY_NAME_MIN_X: f32 = 100.0;

/// Left edge of the original-duration column band.
pub const ORIGINAL_DURATION_MIN_X: f32 = 300.0;

/// Left edge of the remaining-duration column band.
pub const REMAINING_DURATION_MIN_X: f32 = 400.0;

/// Left edge of the start-date column band.
pub const START_DATE_MIN_X: f32 = 500.0;

/// Left edge of the finish-date column band.
pub const FINISH_DATE_MIN_X: f32 = 600.0;

/// Token from the document's own running footer, excluded from
/// section-header detection.
pub const DEFAULT_FOOTER_TOKEN: &str = "REED";

/// Layout reconstruction configuration.
///
/// Column bands are half-open ranges `[min, next_min)` over fragment x
/// coordinates; the activity-id band is everything left of
/// `activity_name_min_x` and the finish-date band everything right of
/// `finish_date_min_x`. Bands never overlap by construction.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutConfig {
    /// Maximum |Δy| for two fragments to share a physical line.
    pub line_y_tolerance: f32,
    /// Left edge of the activity-name band.
    pub activity_name_min_x: f32,
    /// Left edge of the original-duration band.
    pub original_duration_min_x: f32,
    /// Left edge of the remaining-duration band.
    pub remaining_duration_min_x: f32,
    /// Left edge of the start-date band.
    pub start_date_min_x: f32,
    /// Left edge of the finish-date band.
    pub finish_date_min_x: f32,
    /// Running-footer token; all-caps lines containing it are not headers.
    pub footer_token: String,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl LayoutConfig {
    /// Create a configuration with the tuned defaults.
    pub fn new() -> Self {
        Self {
            line_y_tolerance: LINE_Y_TOLERANCE,
            activity_name_min_x: ACTIVITY_NAME_MIN_X,
            original_duration_min_x: ORIGINAL_DURATION_MIN_X,
            remaining_duration_min_x: REMAINING_DURATION_MIN_X,
            start_date_min_x: START_DATE_MIN_X,
            finish_date_min_x: FINISH_DATE_MIN_X,
            footer_token: DEFAULT_FOOTER_TOKEN.to_string(),
        }
    }

    /// Set the new-line y tolerance.
    pub fn with_line_y_tolerance(mut self, tolerance: f32) -> Self {
        self.line_y_tolerance = tolerance;
        self
    }

    /// Set the running-footer token excluded from header detection.
    pub fn with_footer_token(mut self, token: impl Into<String>) -> Self {
        self.footer_token = token.into();
        self
    }

    /// Set all five column band boundaries at once, left to right.
    pub fn with_column_bands(
        mut self,
        activity_name: f32,
        original_duration: f32,
        remaining_duration: f32,
        start_date: f32,
        finish_date: f32,
    ) -> Self {
        self.activity_name_min_x = activity_name;
        self.original_duration_min_x = original_duration;
        self.remaining_duration_min_x = remaining_duration;
        self.start_date_min_x = start_date;
        self.finish_date_min_x = finish_date;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_tuned_constants() {
        let config = LayoutConfig::default();
        assert_eq!(config.line_y_tolerance, 5.0);
        assert_eq!(config.activity_name_min_x, 100.0);
        assert_eq!(config.finish_date_min_x, 600.0);
        assert_eq!(config.footer_token, "REED");
    }

    #[test]
    fn test_builder_setters() {
        let config = LayoutConfig::new()
            .with_line_y_tolerance(3.0)
            .with_footer_token("ACME")
            .with_column_bands(80.0, 250.0, 350.0, 450.0, 550.0);
        assert_eq!(config.line_y_tolerance, 3.0);
        assert_eq!(config.footer_token, "ACME");
        assert_eq!(config.activity_name_min_x, 80.0);
        assert_eq!(config.finish_date_min_x, 550.0);
    }
}
