use std::time::Instant;

use anyhow::{Context, Result};

use hud_engine::core::{App, AppControl, FrameCtx, InitCtx};
use hud_engine::text::Font;
use hud_engine::time::FpsMeter;

use crate::config::{HudConfig, FONT_ENV};
use crate::hud::HudRenderer;

/// The demo application: one font, one HUD line, black background.
pub struct HudApp {
    config: HudConfig,
    font: Option<Font>,
    hud: HudRenderer,
    fps: FpsMeter,
}

impl HudApp {
    pub fn new(config: HudConfig) -> Self {
        let hud = HudRenderer::new(config.text.clone(), config.text_color, config.origin);
        Self {
            config,
            font: None,
            hud,
            fps: FpsMeter::default(),
        }
    }
}

impl App for HudApp {
    fn init(&mut self, ctx: &InitCtx<'_, '_>) -> Result<()> {
        let info = ctx.gpu.adapter_info();
        log::info!("rendering with {} ({:?})", info.name, info.backend);

        let path = self
            .config
            .font_path
            .as_deref()
            .with_context(|| format!("no font found; set {FONT_ENV} to a .ttf or .otf file"))?;

        let font = Font::open(path, self.config.font_size).context("failed to open font")?;
        log::info!("font loaded: {} ({} px)", path.display(), font.size());

        self.font = Some(font);
        Ok(())
    }

    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl {
        if let Some(fps) = self.fps.record(Instant::now()) {
            log::debug!("{fps:.1} fps");
        }

        let Some(font) = self.font.as_ref() else {
            log::error!("frame requested before the font was loaded");
            return AppControl::Exit;
        };

        let hud = &mut self.hud;
        ctx.render(self.config.clear_color, |rctx, target| hud.render(rctx, target, font))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn font_is_not_loaded_before_init() {
        let app = HudApp::new(HudConfig::default());
        assert!(app.font.is_none());
    }
}
