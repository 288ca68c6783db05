//! User preferences.
//!
//! Preferences are plain serde data so the UI layer can store them or
//! embed them in a shared link via [`crate::codec::encode_state`].

use serde::{Deserialize, Serialize};

use crate::color::ColorScheme;
use crate::scheduler::SchedulerConfig;

/// Settings that shape how the calendar is computed and colored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preferences {
    /// Chosen color scheme. `None` follows the system appearance.
    #[serde(default)]
    pub color_scheme: Option<ColorScheme>,
    /// Auto section assignment limits.
    #[serde(default)]
    pub scheduler: SchedulerConfig,
}

impl Preferences {
    /// Creates default preferences.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the color scheme.
    pub fn with_color_scheme(mut self, scheme: ColorScheme) -> Self {
        self.color_scheme = Some(scheme);
        self
    }

    /// Sets the scheduler limits.
    pub fn with_scheduler(mut self, scheduler: SchedulerConfig) -> Self {
        self.scheduler = scheduler;
        self
    }

    /// Color scheme in effect, given whether the system UI is dark.
    pub fn resolved_scheme(&self, system_dark: bool) -> ColorScheme {
        match self.color_scheme {
            Some(scheme) => scheme,
            None if system_dark => ColorScheme::ClassicDark,
            None => ColorScheme::Classic,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::{decode_state, encode_state};

    #[test]
    fn test_resolved_scheme() {
        let prefs = Preferences::new();
        assert_eq!(prefs.resolved_scheme(false), ColorScheme::Classic);
        assert_eq!(prefs.resolved_scheme(true), ColorScheme::ClassicDark);

        let prefs = prefs.with_color_scheme(ColorScheme::Dark);
        assert_eq!(prefs.resolved_scheme(false), ColorScheme::Dark);
    }

    #[test]
    fn test_deserialize_partial() {
        let prefs: Preferences = serde_json::from_str(r#"{"color_scheme": "Classic Dark"}"#).unwrap();
        assert_eq!(prefs.color_scheme, Some(ColorScheme::ClassicDark));
        assert_eq!(prefs.scheduler, SchedulerConfig::default());

        let empty: Preferences = serde_json::from_str("{}").unwrap();
        assert_eq!(empty, Preferences::default());
    }

    #[test]
    fn test_share_round_trip() {
        let prefs = Preferences::new()
            .with_color_scheme(ColorScheme::Light)
            .with_scheduler(SchedulerConfig::default().with_max_nodes(500));
        let text = encode_state(&prefs).unwrap();
        let decoded: Preferences = decode_state(&text).unwrap();
        assert_eq!(decoded, prefs);
    }
}
