//! Glyph tables for the backdrop effects.

/// Glyphs used for digital rain trails.
pub const RAIN_CHARS: &[char] = &[
    'ア', 'イ', 'ウ', 'エ', 'オ', 'カ', 'キ', 'ク', 'ケ', 'コ', 'サ', 'シ', 'ス', 'セ', 'ソ', 'タ',
    'チ', 'ツ', 'テ', 'ト', '0', '1', '2', '3', '4', '5', '6', '7', '8', '9',
];

/// Glyphs for bokeh circles, ordered small to large.
pub const BOKEH_CHARS: &[char] = &['·', '∘', '○', '◎', '●'];

/// Infrastructure icons for the data-flow backdrop.
pub const INFRA_CHARS: &[char] = &['▤', '▦', '☁', '◫', '⊡'];

/// Icons for the floating-icons backdrop.
pub const ICON_CHARS: &[char] = &['♪', '✉', '☁', '♥', '◎', '✦', '⚙'];

/// Binary digits.
pub const BIT_CHARS: &[char] = &['0', '1'];

/// Dust filler glyphs.
pub const DUST_CHARS: &[char] = &['·', '∙', '.'];

/// Block ramp for radial glow shading, ordered bright to faint.
pub const GLOW_RAMP: &[char] = &['█', '▓', '▒', '░', '·'];
