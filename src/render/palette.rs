//! Glyph palettes ordered by ascending visual density.

/// An ordered, immutable glyph ramp: the first glyph is the emptiest, the
/// last the densest. Always at least two glyphs long, so luminance mapping
/// can special-case zero and still have a distinct top end.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Palette {
    glyphs: &'static [char],
}

impl Palette {
    /// 27 glyphs, underscore as the empty cell. Reads well on light
    /// terminal backgrounds.
    pub const MINIMAL: Palette = Palette {
        glyphs: &[
            '_', '.', ',', '-', '=', '+', ':', ';', 'c', 'b', 'a', '!', '?', '1', '2', '3', '4',
            '5', '6', '7', '8', '9', '$', 'W', '#', '@', 'N',
        ],
    };

    /// 44 glyphs, space as the empty cell. The default ramp.
    pub const STANDARD: Palette = Palette {
        glyphs: &[
            ' ', '.', '-', ',', ':', '+', '~', ';', '(', '%', 'x', '1', '*', 'n', 'u', 'T', '3',
            'J', '5', '$', 'S', '4', 'F', 'P', 'G', 'O', 'V', 'X', 'E', 'Z', '8', 'A', 'U', 'D',
            'H', 'K', 'W', '@', 'B', 'Q', '#', '0', 'M', 'N',
        ],
    };

    /// 70 glyphs for the smoothest gradient.
    pub const EXTENDED: Palette = Palette {
        glyphs: &[
            ' ', '.', '\'', '`', '^', '"', ',', ':', ';', 'I', 'l', '!', 'i', '>', '<', '~', '+',
            '_', '-', '?', ']', '[', '}', '{', '1', ')', '(', '|', '\\', '/', 't', 'f', 'j', 'r',
            'x', 'n', 'u', 'v', 'c', 'z', 'X', 'Y', 'U', 'J', 'C', 'L', 'Q', '0', 'O', 'Z', 'm',
            'w', 'q', 'p', 'd', 'b', 'k', 'h', 'a', 'o', '*', '#', 'M', 'W', '&', '8', '%', 'B',
            '@', '$',
        ],
    };

    /// Wrap a custom glyph ramp. Returns `None` for ramps shorter than two
    /// glyphs.
    pub const fn new(glyphs: &'static [char]) -> Option<Palette> {
        if glyphs.len() < 2 {
            None
        } else {
            Some(Palette { glyphs })
        }
    }

    pub const fn glyphs(&self) -> &'static [char] {
        self.glyphs
    }

    pub const fn len(&self) -> usize {
        self.glyphs.len()
    }

    pub const fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }

    /// Glyph at `index`. Panics if `index >= len()`.
    pub const fn glyph(&self, index: usize) -> char {
        self.glyphs[index]
    }
}

impl Default for Palette {
    fn default() -> Self {
        Palette::STANDARD
    }
}
