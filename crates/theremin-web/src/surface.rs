/// Position of `(x, y)` inside a `width × height` surface normalized to
/// [0, 1] with y down, or `None` when the point lies outside it.
#[inline]
pub fn surface_uv(x: f32, y: f32, width: f32, height: f32) -> Option<(f32, f32)> {
    if width <= 0.0 || height <= 0.0 {
        return None;
    }
    let (u, v) = (x / width, y / height);
    ((0.0..=1.0).contains(&u) && (0.0..=1.0).contains(&v)).then_some((u, v))
}
