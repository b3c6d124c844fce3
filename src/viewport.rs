use glam::Vec2;

/// Map normalized device coordinates to canvas pixels (y down).
#[inline]
pub fn ndc_to_px(ndc: Vec2, width: f32, height: f32) -> Vec2 {
    Vec2::new((ndc.x + 1.0) * 0.5 * width, (1.0 - ndc.y) * 0.5 * height)
}

/// On-screen radius of a sphere of `world_radius` at `distance` from the eye.
#[inline]
pub fn screen_radius_px(world_radius: f32, distance: f32, fovy_degrees: f32, height: f32) -> f32 {
    if distance <= world_radius {
        return height;
    }
    let half_fov_tan = (fovy_degrees.to_radians() * 0.5).tan();
    world_radius / (distance * half_fov_tan) * height * 0.5
}

/// Linear fade from 1 to 0 over `duration_ms`.
#[inline]
pub fn fade(elapsed_ms: f64, duration_ms: f64) -> f64 {
    if duration_ms <= 0.0 {
        return 0.0;
    }
    (1.0 - elapsed_ms / duration_ms).clamp(0.0, 1.0)
}
