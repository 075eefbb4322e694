use std::path::PathBuf;

use hud_engine::coords::Vec2;
use hud_engine::device::GpuInit;
use hud_engine::paint::Color;
use hud_engine::text::{find_system_font, MAX_FONT_SIZE};
use hud_engine::window::RuntimeConfig;
use winit::dpi::LogicalSize;

/// Overrides the font file.
pub const FONT_ENV: &str = "HUD_FONT";
/// Overrides the font point size.
pub const FONT_SIZE_ENV: &str = "HUD_FONT_SIZE";

/// Demo configuration: window, GPU and HUD parameters.
#[derive(Debug, Clone)]
pub struct HudConfig {
    pub title: String,
    pub width: f64,
    pub height: f64,
    pub vsync: bool,
    pub accelerated: bool,

    /// `None` when no font was configured or found; opening the font then
    /// fails at startup.
    pub font_path: Option<PathBuf>,
    pub font_size: f32,

    pub text: String,
    pub text_color: Color,
    /// Top-left of the HUD text in logical pixels.
    pub origin: Vec2,
    pub clear_color: Color,
}

impl Default for HudConfig {
    fn default() -> Self {
        Self {
            title: "HUD Example".to_string(),
            width: 800.0,
            height: 600.0,
            vsync: true,
            accelerated: true,
            font_path: None,
            font_size: 24.0,
            text: "Health: 100".to_string(),
            text_color: Color::from_rgba_u8(255, 255, 255, 255),
            origin: Vec2::new(10.0, 10.0),
            clear_color: Color::BLACK,
        }
    }
}

impl HudConfig {
    /// Defaults plus overrides from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(
            |key| std::env::var(key).ok(),
            |path| std::path::Path::new(path).is_file(),
        )
    }

    /// Defaults plus overrides from `lookup`; `exists` decides which of the
    /// system font candidates is usable.
    pub fn from_lookup(
        lookup: impl Fn(&str) -> Option<String>,
        exists: impl Fn(&str) -> bool,
    ) -> Self {
        let mut config = Self::default();

        config.font_path = match lookup(FONT_ENV).filter(|p| !p.trim().is_empty()) {
            Some(path) => Some(PathBuf::from(path)),
            None => find_system_font(exists).map(PathBuf::from),
        };

        if let Some(raw) = lookup(FONT_SIZE_ENV) {
            match raw.trim().parse::<f32>() {
                Ok(size) if size.is_finite() && size > 0.0 && size <= MAX_FONT_SIZE => {
                    config.font_size = size
                }
                _ => log::warn!(
                    "ignoring {FONT_SIZE_ENV}={raw:?}: expected a number in (0, {MAX_FONT_SIZE}]; using {}",
                    config.font_size
                ),
            }
        }

        config
    }

    pub fn runtime(&self) -> RuntimeConfig {
        RuntimeConfig {
            title: self.title.clone(),
            initial_size: LogicalSize::new(self.width, self.height),
            centered: true,
        }
    }

    pub fn gpu(&self) -> GpuInit {
        GpuInit {
            accelerated: self.accelerated,
            vsync: self.vsync,
            ..GpuInit::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    fn nothing_exists(_: &str) -> bool {
        false
    }

    #[test]
    fn defaults_match_the_demo() {
        let c = HudConfig::default();
        assert_eq!(c.title, "HUD Example");
        assert_eq!((c.width, c.height), (800.0, 600.0));
        assert_eq!(c.text, "Health: 100");
        assert_eq!(c.font_size, 24.0);
        assert_eq!(c.origin, Vec2::new(10.0, 10.0));
        assert_eq!(c.text_color, Color::WHITE);
        assert_eq!(c.clear_color, Color::BLACK);
        assert!(c.vsync && c.accelerated);
    }

    #[test]
    fn font_env_overrides_candidates() {
        let c = HudConfig::from_lookup(env(&[(FONT_ENV, "/tmp/custom.ttf")]), |_| true);
        assert_eq!(c.font_path, Some(PathBuf::from("/tmp/custom.ttf")));
    }

    #[test]
    fn blank_font_env_is_ignored() {
        let c = HudConfig::from_lookup(env(&[(FONT_ENV, "  ")]), nothing_exists);
        assert_eq!(c.font_path, None);
    }

    #[test]
    fn first_existing_candidate_is_used() {
        let second = hud_engine::text::SYSTEM_FONT_CANDIDATES[1];
        let c = HudConfig::from_lookup(env(&[]), |p| p == second);
        assert_eq!(c.font_path, Some(PathBuf::from(second)));
    }

    #[test]
    fn no_font_found_leaves_path_unset() {
        let c = HudConfig::from_lookup(env(&[]), nothing_exists);
        assert_eq!(c.font_path, None);
    }

    #[test]
    fn font_size_env_is_parsed() {
        let c = HudConfig::from_lookup(env(&[(FONT_SIZE_ENV, " 32.5 ")]), nothing_exists);
        assert_eq!(c.font_size, 32.5);
    }

    #[test]
    fn invalid_font_size_keeps_default() {
        for raw in ["abc", "0", "-4", "NaN", "inf"] {
            let c = HudConfig::from_lookup(env(&[(FONT_SIZE_ENV, raw)]), nothing_exists);
            assert_eq!(c.font_size, 24.0, "input {raw:?}");
        }
    }

    #[test]
    fn oversized_font_size_keeps_default() {
        for raw in ["100000", "1e6", "1024.5"] {
            let c = HudConfig::from_lookup(env(&[(FONT_SIZE_ENV, raw)]), nothing_exists);
            assert_eq!(c.font_size, 24.0, "input {raw:?}");
        }
    }

    #[test]
    fn max_font_size_is_accepted() {
        let c = HudConfig::from_lookup(env(&[(FONT_SIZE_ENV, "1024")]), nothing_exists);
        assert_eq!(c.font_size, MAX_FONT_SIZE);
    }

    #[test]
    fn runtime_and_gpu_configs_follow_fields() {
        let mut c = HudConfig::default();
        c.vsync = false;
        let rt = c.runtime();
        assert_eq!(rt.title, "HUD Example");
        assert_eq!(rt.initial_size, LogicalSize::new(800.0, 600.0));
        assert!(rt.centered);
        let gpu = c.gpu();
        assert!(!gpu.vsync);
        assert!(gpu.accelerated);
    }
}
