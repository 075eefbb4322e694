use anyhow::{ensure, Result};

use crate::text::TextSurface;

use super::RenderCtx;

/// GPU texture created from a [`TextSurface`].
///
/// Single-channel (`R8Unorm`) coverage; the text color travels with the draw
/// call. Dropping the value releases the texture once the GPU no longer
/// references it, so it may be dropped before the frame is submitted.
pub struct SurfaceTexture {
    view: wgpu::TextureView,
}

impl SurfaceTexture {
    /// Creates a texture of the surface's size and uploads its coverage.
    ///
    /// Fails for empty surfaces and surfaces larger than the device allows.
    pub fn from_surface(ctx: &RenderCtx<'_>, surface: &TextSurface) -> Result<Self> {
        let (width, height) = (surface.width(), surface.height());
        check_texture_size(width, height, ctx.device.limits().max_texture_dimension_2d)?;

        let size = wgpu::Extent3d { width, height, depth_or_array_layers: 1 };

        let texture = ctx.device.create_texture(&wgpu::TextureDescriptor {
            label: Some("hud surface texture"),
            size,
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: wgpu::TextureFormat::R8Unorm,
            usage: wgpu::TextureUsages::TEXTURE_BINDING | wgpu::TextureUsages::COPY_DST,
            view_formats: &[],
        });

        ctx.queue.write_texture(
            wgpu::TexelCopyTextureInfo {
                texture: &texture,
                mip_level: 0,
                origin: wgpu::Origin3d::ZERO,
                aspect: wgpu::TextureAspect::All,
            },
            surface.pixels(),
            wgpu::TexelCopyBufferLayout {
                offset: 0,
                bytes_per_row: Some(width),
                rows_per_image: Some(height),
            },
            size,
        );

        let view = texture.create_view(&wgpu::TextureViewDescriptor::default());

        Ok(Self { view })
    }

    pub(crate) fn view(&self) -> &wgpu::TextureView {
        &self.view
    }
}

/// Rejects sizes wgpu cannot create: zero area or a side above `max`.
fn check_texture_size(width: u32, height: u32, max: u32) -> Result<()> {
    ensure!(
        width > 0 && height > 0,
        "cannot create a texture from an empty {width}x{height} surface"
    );
    ensure!(
        width <= max && height <= max,
        "surface {width}x{height} exceeds the maximum texture size {max}"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const MAX: u32 = 8192;

    #[test]
    fn empty_surface_is_rejected() {
        for (w, h) in [(0, 0), (0, 28), (131, 0)] {
            let err = check_texture_size(w, h, MAX).unwrap_err();
            assert!(err.to_string().contains("empty"), "{w}x{h}: {err}");
        }
    }

    #[test]
    fn oversized_surface_is_rejected() {
        for (w, h) in [(MAX + 1, 28), (131, MAX + 1), (u32::MAX, u32::MAX)] {
            let err = check_texture_size(w, h, MAX).unwrap_err();
            assert!(err.to_string().contains("maximum texture size"), "{w}x{h}: {err}");
        }
    }

    #[test]
    fn surface_within_limit_is_accepted() {
        assert!(check_texture_size(131, 28, MAX).is_ok());
        assert!(check_texture_size(MAX, MAX, MAX).is_ok());
        assert!(check_texture_size(1, 1, MAX).is_ok());
    }
}
