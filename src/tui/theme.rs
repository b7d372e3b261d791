use ratatui::style::Color;

// Accent colors
pub const ACCENT_CORAL: Color = Color::Rgb(232, 131, 136);   // #E88388
pub const ACCENT_GOLD: Color = Color::Rgb(219, 171, 121);    // #DBAB79
pub const ACCENT_BLUE: Color = Color::Rgb(124, 175, 194);    // #7CAFC2
pub const ACCENT_MINT: Color = Color::Rgb(161, 193, 129);    // #A1C181

// UI colors
pub const TEXT_DIM: Color = Color::Rgb(136, 136, 136);       // #888888
pub const TEXT_WHITE: Color = Color::Rgb(255, 255, 255);     // #FFFFFF

const BACKGROUND: (u8, u8, u8) = (24, 24, 24);

/// `color` faded towards the background by `alpha` (1.0 = opaque).
pub fn fade(color: Color, alpha: f32) -> Color {
    let Color::Rgb(r, g, b) = color else {
        return color;
    };
    let alpha = alpha.clamp(0.0, 1.0);
    let mix = |fg: u8, bg: u8| (f32::from(bg) + (f32::from(fg) - f32::from(bg)) * alpha).round() as u8;
    Color::Rgb(
        mix(r, BACKGROUND.0),
        mix(g, BACKGROUND.1),
        mix(b, BACKGROUND.2),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fade_endpoints() {
        assert_eq!(fade(TEXT_WHITE, 1.0), TEXT_WHITE);
        assert_eq!(fade(TEXT_WHITE, 0.0), Color::Rgb(24, 24, 24));
        assert_eq!(fade(Color::Reset, 0.5), Color::Reset);
    }
}
