// File: crates/chart-core/src/theme.rs
// Summary: Colors: page theme plus the categorical palette used for markers and legend.

use std::fmt;

/// Opaque 8-bit RGB color, backend neutral.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub const fn from_hex(hex: u32) -> Self {
        Self::new((hex >> 16) as u8, (hex >> 8) as u8, hex as u8)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Tableau 10 qualitative scheme.
pub const TABLEAU10: [Rgb; 10] = [
    Rgb::from_hex(0x4e79a7),
    Rgb::from_hex(0xf28e2c),
    Rgb::from_hex(0xe15759),
    Rgb::from_hex(0x76b7b2),
    Rgb::from_hex(0x59a14f),
    Rgb::from_hex(0xedc949),
    Rgb::from_hex(0xaf7aa1),
    Rgb::from_hex(0xff9da7),
    Rgb::from_hex(0x9c755f),
    Rgb::from_hex(0xbab0ab),
];

/// Ordinal scale: keys get scheme colors in first-seen order.
#[derive(Clone, Debug, PartialEq)]
pub struct OrdinalPalette<K> {
    scheme: &'static [Rgb],
    domain: Vec<K>,
}

impl<K: Copy + PartialEq> OrdinalPalette<K> {
    pub fn new(scheme: &'static [Rgb]) -> Self {
        Self { scheme, domain: Vec::new() }
    }

    /// Build the domain from keys in encounter order.
    pub fn from_keys(scheme: &'static [Rgb], keys: impl IntoIterator<Item = K>) -> Self {
        let mut p = Self::new(scheme);
        for k in keys {
            p.insert(k);
        }
        p
    }

    /// Add `key` to the domain if unseen; returns its index.
    pub fn insert(&mut self, key: K) -> usize {
        match self.domain.iter().position(|k| *k == key) {
            Some(i) => i,
            None => {
                self.domain.push(key);
                self.domain.len() - 1
            }
        }
    }

    /// Color for `key`. An unseen key gets the color it would receive next.
    pub fn color(&self, key: K) -> Rgb {
        let i = self.domain.iter().position(|k| *k == key).unwrap_or(self.domain.len());
        self.scheme[i % self.scheme.len()]
    }

    pub fn domain(&self) -> &[K] {
        &self.domain
    }
}

/// Non-data colors of the rendered chart.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Theme {
    pub name: &'static str,
    pub background: Rgb,
    pub axis_line: Rgb,
    pub axis_label: Rgb,
    pub caption: Rgb,
    pub tooltip_background: Rgb,
    pub tooltip_text: Rgb,
    pub rule: Rgb,
}

impl Theme {
    pub fn light() -> Self {
        Self {
            name: "light",
            background: Rgb::new(255, 255, 255),
            axis_line: Rgb::new(0, 0, 0),
            axis_label: Rgb::new(0, 0, 0),
            caption: Rgb::new(51, 51, 51),
            tooltip_background: Rgb::from_hex(0xf5deb3), // wheat
            tooltip_text: Rgb::new(34, 34, 34),
            rule: Rgb::from_hex(0xeeeeee),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::light()
    }
}
