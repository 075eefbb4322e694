use winit::dpi::{PhysicalPosition, PhysicalSize};

/// Outer position that centers a window of `window` size on a monitor.
///
/// A window larger than the monitor is pinned to the monitor's top-left so
/// its title bar stays reachable.
pub(crate) fn centered_position(
    monitor_pos: PhysicalPosition<i32>,
    monitor_size: PhysicalSize<u32>,
    window: PhysicalSize<u32>,
) -> PhysicalPosition<i32> {
    let offset = |monitor: u32, window: u32| -> i32 {
        let free = i64::from(monitor) - i64::from(window);
        i32::try_from((free / 2).max(0)).unwrap_or(0)
    };

    PhysicalPosition::new(
        monitor_pos.x.saturating_add(offset(monitor_size.width, window.width)),
        monitor_pos.y.saturating_add(offset(monitor_size.height, window.height)),
    )
}
