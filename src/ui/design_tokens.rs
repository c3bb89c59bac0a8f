// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

Design constants for the gallery screen.

## Organization

- **Palette**: Base colors
- **Opacity**: Standardized opacity levels
- **Spacing**: Spacing scale (4px grid)
- **Sizing**: Component sizes
- **Typography**: Font size scale
- **Radius**: Border radii

## Examples

```
use gesture_gallery::ui::design_tokens::{palette, spacing, opacity};
use iced::Color;

let pad_outline = Color {
    a: opacity::OUTLINE,
    ..palette::GRAY_400
};

let gap = spacing::LG; // 20px between panels
```
"#]

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    // Grayscale
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_400: Color = Color::from_rgb(0.4, 0.4, 0.4);
    pub const GRAY_200: Color = Color::from_rgb(0.75, 0.75, 0.75);

    // Accent blue used by the reset buttons
    pub const PRIMARY_400: Color = Color::from_rgb(0.2, 0.58, 1.0);
    pub const PRIMARY_500: Color = Color::from_rgb(0.0, 0.478, 1.0);
    pub const PRIMARY_600: Color = Color::from_rgb(0.0, 0.4, 0.85);

    pub const WARNING_500: Color = Color::from_rgb(0.945, 0.651, 0.125);
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    /// Pad outline while idle
    pub const OUTLINE: f32 = 0.25;
    /// Pad outline while the pointer hovers it
    pub const OUTLINE_HOVER: f32 = 0.6;
}

// ============================================================================
// Spacing Scale (4px baseline grid)
// ============================================================================

pub mod spacing {
    pub const XS: f32 = 8.0;
    pub const MD: f32 = 16.0;
    /// Vertical gap between gallery items
    pub const LG: f32 = 20.0;
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    /// The pad is taller than the image frame so a scaled or dragged image
    /// keeps some room before it is clipped.
    pub const PAD_HEIGHT_RATIO: f32 = 1.5;

    /// Thickness of the long-press progress bar
    pub const PROGRESS_BAR: f32 = 4.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    /// Panel headline
    pub const HEADLINE: f32 = 17.0;

    /// Reset button label, notices
    pub const BODY: f32 = 14.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    assert!(spacing::MD > spacing::XS);
    assert!(spacing::LG > spacing::MD);

    assert!(opacity::OUTLINE < opacity::OUTLINE_HOVER);

    assert!(sizing::PAD_HEIGHT_RATIO >= 1.0);
    assert!(typography::HEADLINE > typography::BODY);
    assert!(radius::MD > radius::SM);
};
