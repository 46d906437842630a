/// CSS `rgb()` string for a linear [0, 1] color; alpha is applied separately.
#[inline]
pub fn css_rgb(c: [f32; 4]) -> String {
    let to_byte = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
    format!("rgb({},{},{})", to_byte(c[0]), to_byte(c[1]), to_byte(c[2]))
}
