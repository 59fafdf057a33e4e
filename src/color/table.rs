//! Named color registry
//!
//! The static table holds the CSS named colors plus the Pantone
//! Color-of-the-Year names. Several names may share one hex value.

use std::collections::HashMap;
use std::sync::OnceLock;

use rand::Rng;

use super::rgb::{Color, ColorError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NamedColor {
    pub name: &'static str,
    pub color: Color,
}

/// Immutable name -> color index, built once and shared by reference.
#[derive(Debug)]
pub struct ColorTable {
    entries: Vec<NamedColor>,
    index: HashMap<&'static str, usize>,
}

static GLOBAL_TABLE: OnceLock<ColorTable> = OnceLock::new();

impl ColorTable {
    /// Build the table from the static name list.
    pub fn builtin() -> Result<Self, ColorError> {
        Self::from_pairs(NAMED_COLORS)
    }

    pub(crate) fn from_pairs(pairs: &[(&'static str, &'static str)]) -> Result<Self, ColorError> {
        if pairs.is_empty() {
            return Err(ColorError::InvariantViolation("empty color table".into()));
        }

        let mut entries = Vec::with_capacity(pairs.len());
        let mut index = HashMap::with_capacity(pairs.len());

        for &(name, hex) in pairs {
            let color = Color::from_hex(hex).map_err(|_| {
                ColorError::InvariantViolation(format!("bad hex {hex} for {name}"))
            })?;
            if index.insert(name, entries.len()).is_some() {
                return Err(ColorError::InvariantViolation(format!(
                    "duplicate color name {name}"
                )));
            }
            entries.push(NamedColor { name, color });
        }

        if entries.len() != pairs.len() || index.len() != entries.len() {
            return Err(ColorError::InvariantViolation(format!(
                "table size mismatch: {} entries for {} names",
                entries.len(),
                pairs.len()
            )));
        }

        Ok(Self { entries, index })
    }

    /// Process-wide table. The first caller builds it; concurrent first
    /// callers block until it is ready.
    pub fn global() -> &'static ColorTable {
        GLOBAL_TABLE.get_or_init(|| {
            tracing::debug!(names = NAMED_COLORS.len(), "building color table");
            match Self::builtin() {
                Ok(table) => table,
                Err(e) => panic!("{e}"),
            }
        })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<NamedColor> {
        self.entries.get(index).copied()
    }

    pub fn entries(&self) -> &[NamedColor] {
        &self.entries
    }

    /// Look a color up by name (case-insensitive).
    pub fn lookup(&self, name: &str) -> Option<Color> {
        let key = name.trim().to_lowercase();
        self.index.get(key.as_str()).map(|&ix| self.entries[ix].color)
    }

    /// Accepts `#rrggbb`, `rrggbb`, `#rgb`, `rgb` or a table name.
    ///
    /// Unrecognized input yields `(Color::DEFAULT_GRAY, false)`.
    pub fn parse_color(&self, s: &str) -> (Color, bool) {
        match self.resolve(s) {
            Ok(color) => (color, true),
            Err(_) => (Color::DEFAULT_GRAY, false),
        }
    }

    /// Like [`parse_color`](Self::parse_color) but reports what went wrong.
    pub fn resolve(&self, s: &str) -> Result<Color, ColorError> {
        let trimmed = s.trim();
        if let Ok(color) = Color::from_hex(trimmed) {
            return Ok(color);
        }
        if let Some(color) = Color::from_short_hex(trimmed) {
            return Ok(color);
        }
        self.lookup(trimmed)
            .ok_or_else(|| ColorError::NotFound(s.to_string()))
    }

    /// Uniformly pick one entry.
    pub fn random_named<R: Rng + ?Sized>(&self, rng: &mut R) -> NamedColor {
        self.entries[rng.gen_range(0..self.entries.len())]
    }
}

const NAMED_COLORS: &[(&str, &str)] = &[
    ("aliceblue", "#f0f8ff"),
    ("antiquewhite", "#faebd7"),
    ("aqua", "#00ffff"),
    ("aquamarine", "#7fffd4"),
    ("azure", "#f0ffff"),
    ("beige", "#f5f5dc"),
    ("bisque", "#ffe4c4"),
    ("black", "#000000"),
    ("blanchedalmond", "#ffebcd"),
    ("blue", "#0000ff"),
    ("blueviolet", "#8a2be2"),
    ("brown", "#a52a2a"),
    ("burlywood", "#deb887"),
    ("cadetblue", "#5f9ea0"),
    ("chartreuse", "#7fff00"),
    ("chocolate", "#d2691e"),
    ("coral", "#ff7f50"),
    ("cornflowerblue", "#6495ed"),
    ("cornsilk", "#fff8dc"),
    ("crimson", "#dc143c"),
    ("cyan", "#00ffff"),
    ("darkblue", "#00008b"),
    ("darkcyan", "#008b8b"),
    ("darkgoldenrod", "#b8860b"),
    ("darkgray", "#a9a9a9"),
    ("darkgreen", "#006400"),
    ("darkgrey", "#a9a9a9"),
    ("darkkhaki", "#bdb76b"),
    ("darkmagenta", "#8b008b"),
    ("darkolivegreen", "#556b2f"),
    ("darkorange", "#ff8c00"),
    ("darkred", "#8b0000"),
    ("darksalmon", "#e9967a"),
    ("darkseagreen", "#8fbc8f"),
    ("darkslateblue", "#483d8b"),
    ("darkslategray", "#2f4f4f"),
    ("darkslategrey", "#2f4f4f"),
    ("darkturquoise", "#00ced1"),
    ("darkviolet", "#9400d3"),
    ("deeppink", "#ff1493"),
    ("deepskyblue", "#00bfff"),
    ("dimgray", "#696969"),
    ("dimgrey", "#696969"),
    ("dodgerblue", "#1e90ff"),
    ("firebrick", "#b22222"),
    ("floralwhite", "#fffaf0"),
    ("forestgreen", "#228b22"),
    ("fuchsia", "#ff00ff"),
    ("gainsboro", "#dcdcdc"),
    ("ghostwhite", "#f8f8ff"),
    ("gold", "#ffd700"),
    ("goldenrod", "#daa520"),
    ("gray", "#808080"),
    ("grey", "#808080"),
    ("green", "#008000"),
    ("greenyellow", "#adff2f"),
    ("honeydew", "#f0fff0"),
    ("hotpink", "#ff69b4"),
    ("indianred", "#cd5c5c"),
    ("indigo", "#4b0082"),
    ("ivory", "#fffff0"),
    ("khaki", "#f0e68c"),
    ("lavender", "#e6e6fa"),
    ("lavenderblush", "#fff0f5"),
    ("lawngreen", "#7cfc00"),
    ("lemonchiffon", "#fffacd"),
    ("lightblue", "#add8e6"),
    ("lightcoral", "#f08080"),
    ("lightcyan", "#e0ffff"),
    ("lightgoldenrodyellow", "#fafad2"),
    ("lightgray", "#d3d3d3"),
    ("lightgreen", "#90ee90"),
    ("lightgrey", "#d3d3d3"),
    ("lightpink", "#ffb6c1"),
    ("lightsalmon", "#ffa07a"),
    ("lightseagreen", "#20b2aa"),
    ("lightskyblue", "#87cefa"),
    ("lightslategray", "#778899"),
    ("lightslategrey", "#778899"),
    ("lightsteelblue", "#b0c4de"),
    ("lightyellow", "#ffffe0"),
    ("lime", "#00ff00"),
    ("limegreen", "#32cd32"),
    ("linen", "#faf0e6"),
    ("magenta", "#ff00ff"),
    ("maroon", "#800000"),
    ("mediumaquamarine", "#66cdaa"),
    ("mediumblue", "#0000cd"),
    ("mediumorchid", "#ba55d3"),
    ("mediumpurple", "#9370db"),
    ("mediumseagreen", "#3cb371"),
    ("mediumslateblue", "#7b68ee"),
    ("mediumspringgreen", "#00fa9a"),
    ("mediumturquoise", "#48d1cc"),
    ("mediumvioletred", "#c71585"),
    ("midnightblue", "#191970"),
    ("mintcream", "#f5fffa"),
    ("mistyrose", "#ffe4e1"),
    ("moccasin", "#ffe4b5"),
    ("navajowhite", "#ffdead"),
    ("navy", "#000080"),
    ("oldlace", "#fdf5e6"),
    ("olive", "#808000"),
    ("olivedrab", "#6b8e23"),
    ("orange", "#ffa500"),
    ("orangered", "#ff4500"),
    ("orchid", "#da70d6"),
    ("palegoldenrod", "#eee8aa"),
    ("palegreen", "#98fb98"),
    ("paleturquoise", "#afeeee"),
    ("palevioletred", "#db7093"),
    ("papayawhip", "#ffefd5"),
    ("peachpuff", "#ffdab9"),
    ("peru", "#cd853f"),
    ("pink", "#ffc0cb"),
    ("plum", "#dda0dd"),
    ("powderblue", "#b0e0e6"),
    ("purple", "#800080"),
    ("rebeccapurple", "#663399"),
    ("red", "#ff0000"),
    ("rosybrown", "#bc8f8f"),
    ("royalblue", "#4169e1"),
    ("saddlebrown", "#8b4513"),
    ("salmon", "#fa8072"),
    ("sandybrown", "#f4a460"),
    ("seagreen", "#2e8b57"),
    ("seashell", "#fff5ee"),
    ("sienna", "#a0522d"),
    ("silver", "#c0c0c0"),
    ("skyblue", "#87ceeb"),
    ("slateblue", "#6a5acd"),
    ("slategray", "#708090"),
    ("slategrey", "#708090"),
    ("snow", "#fffafa"),
    ("springgreen", "#00ff7f"),
    ("steelblue", "#4682b4"),
    ("tan", "#d2b48c"),
    ("teal", "#008080"),
    ("thistle", "#d8bfd8"),
    ("tomato", "#ff6347"),
    ("violet", "#ee82ee"),
    ("wheat", "#f5deb3"),
    ("white", "#ffffff"),
    ("whitesmoke", "#f5f5f5"),
    ("yellow", "#ffff00"),
    ("yellowgreen", "#9acd32"),
    ("cerulean", "#9bb7d6"),
    ("fuschia rose", "#c94476"),
    ("true red", "#c02034"),
    ("aqua sky", "#7ac5c5"),
    ("tigerlily", "#e4583e"),
    ("blue turquoise", "#4fb0ae"),
    ("sand dollar", "#decdbf"),
    ("chili pepper", "#9c1b31"),
    ("blue iris", "#595ca1"),
    ("mimosa", "#f0bf59"),
    ("pantone turquoise", "#41b6ab"),
    ("honeysuckle", "#da4f70"),
    ("tangerine tango", "#f05442"),
    ("emerald", "#169c78"),
    ("radiant orchid", "#b565a7"),
    ("marsala", "#955251"),
    ("rose quartz", "#939597"),
    ("serenity", "#8ca4cf"),
    ("greenery", "#88b04b"),
    ("ultra violet", "#5f4b8b"),
    ("living coral", "#ff6f61"),
    ("classic blue", "#0f4c81"),
    ("ultimate grey", "#939597"),
    ("illuminating", "#f5df4d"),
    ("very peri", "#6667ab"),
    ("vivid magenta", "#ba2649"),
    ("peach fuzz", "#f87c56"),
];
