/// Initialization parameters for the GPU layer.
///
/// Keep this structure small. Add flags only when a concrete platform or
/// backend requirement exists.
#[derive(Debug, Clone)]
pub struct GpuInit {
    /// Request a hardware adapter.
    ///
    /// When `false` a low-power adapter is preferred and wgpu may fall back to
    /// a software adapter.
    pub accelerated: bool,

    /// Synchronize presentation with the display refresh.
    ///
    /// `true` always selects FIFO. `false` picks the lowest-latency mode the
    /// surface supports and falls back to FIFO.
    pub vsync: bool,

    /// Prefer an sRGB surface format when available.
    pub prefer_srgb: bool,

    /// Optional alpha mode preference for the surface.
    ///
    /// If unsupported on the current surface, a supported mode is selected.
    pub alpha_mode: Option<wgpu::CompositeAlphaMode>,

    /// Required wgpu features. Empty for portability.
    pub required_features: wgpu::Features,

    /// Limits requested from the adapter/device.
    pub required_limits: wgpu::Limits,

    /// Desired maximum frame latency for the surface (a hint).
    pub desired_maximum_frame_latency: u32,
}

impl GpuInit {
    pub(crate) fn power_preference(&self) -> wgpu::PowerPreference {
        if self.accelerated {
            wgpu::PowerPreference::HighPerformance
        } else {
            wgpu::PowerPreference::LowPower
        }
    }
}

impl Default for GpuInit {
    fn default() -> Self {
        Self {
            accelerated: true,
            vsync: true,
            prefer_srgb: true,
            alpha_mode: None,
            required_features: wgpu::Features::empty(),
            required_limits: wgpu::Limits::default(),
            desired_maximum_frame_latency: 2,
        }
    }
}
