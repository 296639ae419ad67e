/// Check that `spec` names a color the terminal can render.
///
/// Accepts the X11 hex forms (`#rgb` up to `#rrrrggggbbbb`) plus anything
/// CSS understands: names, `rgb()`, `rgba()`, `hsl()`.
pub fn validate_color(spec: &str) -> Result<(), String> {
    if let Some(hex) = spec.strip_prefix('#') {
        if matches!(hex.len(), 9 | 12) {
            return if hex.chars().all(|c| c.is_ascii_hexdigit()) {
                Ok(())
            } else {
                Err("invalid hexadecimal color".to_string())
            };
        }
    }
    csscolorparser::parse(spec)
        .map(|_| ())
        .map_err(|e| e.to_string())
}
