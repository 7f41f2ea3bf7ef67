//! Tag-to-color palettes.
//!
//! Entry 0 colors empty cells; the remaining entries color piece tags. A
//! palette shorter than the number of tags wraps: tag `t` uses entry
//! `1 + (t - 1) % (len - 1)`, so the five-entry classic table still paints all
//! seven kinds.

use crate::fb::Rgb;
use crate::types::{PieceKind, EMPTY_TAG};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    colors: Vec<Rgb>,
}

impl Palette {
    /// Needs an empty color plus at least one piece color.
    pub fn new(colors: Vec<Rgb>) -> Option<Self> {
        (colors.len() >= 2).then_some(Self { colors })
    }

    /// Empty color, then one color per kind in tag order (I T L J O S Z).
    pub fn full() -> Self {
        Self {
            colors: vec![
                Rgb::new(30, 30, 40),
                Rgb::new(80, 220, 220),
                Rgb::new(200, 120, 220),
                Rgb::new(255, 165, 0),
                Rgb::new(80, 120, 220),
                Rgb::new(240, 220, 80),
                Rgb::new(100, 220, 120),
                Rgb::new(220, 80, 80),
            ],
        }
    }

    /// Black, red, green, blue, yellow.
    pub fn classic() -> Self {
        Self {
            colors: vec![
                Rgb::new(0x00, 0x00, 0x00),
                Rgb::new(0xFF, 0x00, 0x00),
                Rgb::new(0x00, 0xFF, 0x00),
                Rgb::new(0x00, 0x00, 0xFF),
                Rgb::new(0xFF, 0xFF, 0x00),
            ],
        }
    }

    /// `full`, `classic`, or a comma-separated list of `#rrggbb` colors.
    ///
    /// ```
    /// use blockfall_term::{Palette, Rgb};
    ///
    /// assert_eq!(Palette::parse("classic"), Some(Palette::classic()));
    /// let custom = Palette::parse("#000000, #ffffff").unwrap();
    /// assert_eq!(custom.color(3), Rgb::new(255, 255, 255));
    /// assert_eq!(Palette::parse("#000000"), None);
    /// ```
    pub fn parse(name: &str) -> Option<Self> {
        match name.trim().to_lowercase().as_str() {
            "full" | "default" => Some(Self::full()),
            "classic" => Some(Self::classic()),
            list => list
                .split(',')
                .map(Rgb::from_hex)
                .collect::<Option<Vec<_>>>()
                .and_then(Self::new),
        }
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    pub fn empty_color(&self) -> Rgb {
        self.colors[0]
    }

    /// Color for a cell tag.
    pub fn color(&self, tag: u8) -> Rgb {
        if tag == EMPTY_TAG {
            return self.colors[0];
        }
        let slots = self.colors.len() - 1;
        self.colors[1 + (tag as usize - 1) % slots]
    }

    pub fn piece_color(&self, kind: PieceKind) -> Rgb {
        self.color(kind.tag())
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::full()
    }
}
