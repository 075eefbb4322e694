use hud_engine::coords::{Rect, Vec2};
use hud_engine::paint::Color;
use hud_engine::render::{BlitRenderer, RenderCtx, RenderTarget, SurfaceTexture};
use hud_engine::text::{Font, RenderMode};

/// Draws the fixed HUD text overlay.
///
/// Every frame the text is rasterized again, turned into a fresh texture,
/// blitted and released. Nothing but the blit pipeline survives the frame.
pub struct HudRenderer {
    blit: BlitRenderer,
    text: String,
    color: Color,
    origin: Vec2,
    mode: RenderMode,
    reported_failure: bool,
}

impl HudRenderer {
    pub fn new(text: impl Into<String>, color: Color, origin: Vec2) -> Self {
        Self {
            blit: BlitRenderer::new(),
            text: text.into(),
            color,
            origin,
            mode: RenderMode::Solid,
            reported_failure: false,
        }
    }

    pub fn render(&mut self, ctx: &RenderCtx<'_>, target: &mut RenderTarget<'_>, font: &Font) {
        let scale = ctx.scale_factor;

        let surface = match font.rasterize(&self.text, self.color, self.mode, scale) {
            Ok(surface) => surface,
            Err(e) => {
                self.report_failure("failed to render HUD text", &e);
                return;
            }
        };
        if surface.is_empty() {
            return;
        }

        let texture = match SurfaceTexture::from_surface(ctx, &surface) {
            Ok(texture) => texture,
            Err(e) => {
                self.report_failure("failed to create HUD texture", &format!("{e:#}"));
                return;
            }
        };

        let dst = hud_rect(self.origin, surface.width(), surface.height(), scale);
        self.blit.blit(ctx, target, &texture, dst, surface.color());

        drop(surface);
        drop(texture);
    }

    /// Logs once at error level; the same failure repeats every frame.
    fn report_failure(&mut self, what: &str, err: &dyn std::fmt::Display) {
        if !self.reported_failure {
            log::error!("{what}: {err}");
            self.reported_failure = true;
        } else {
            log::debug!("{what}: {err}");
        }
    }
}

/// Logical destination of a `width` x `height` physical-pixel surface drawn
/// at `origin`.
fn hud_rect(origin: Vec2, width: u32, height: u32, scale: f32) -> Rect {
    let size = Vec2::new(width as f32, height as f32) / scale.max(0.01);
    Rect::from_origin_size(origin, size)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rect_at_unit_scale_matches_surface() {
        let r = hud_rect(Vec2::new(10.0, 10.0), 131, 28, 1.0);
        assert_eq!(r, Rect::new(10.0, 10.0, 131.0, 28.0));
    }

    #[test]
    fn rect_on_hidpi_is_divided_by_scale() {
        let r = hud_rect(Vec2::new(10.0, 10.0), 262, 56, 2.0);
        assert_eq!(r, Rect::new(10.0, 10.0, 131.0, 28.0));
    }

    #[test]
    fn degenerate_scale_stays_finite() {
        let r = hud_rect(Vec2::new(10.0, 10.0), 10, 10, 0.0);
        assert!(r.is_finite());
    }

    #[test]
    fn renderer_defaults_to_solid_text() {
        let hud = HudRenderer::new("Health: 100", Color::WHITE, Vec2::new(10.0, 10.0));
        assert_eq!(hud.mode, RenderMode::Solid);
        assert_eq!(hud.text, "Health: 100");
    }

    #[test]
    fn failure_is_reported_once_at_error_level() {
        let mut hud = HudRenderer::new("Health: 100", Color::WHITE, Vec2::new(10.0, 10.0));
        assert!(!hud.reported_failure);
        hud.report_failure("failed to render HUD text", &"too large");
        assert!(hud.reported_failure);
        hud.report_failure("failed to render HUD text", &"too large");
        assert!(hud.reported_failure);
    }
}
