//! Image references and the synthetic filler image generator.
//!
//! The engine never looks inside an image. A `Photo` is whatever key the
//! host uses to render it (a data URL, a path, an album blob id). A `Filler`
//! is a placeholder generated from nothing but its index, so it can be
//! rendered on demand and is stable across calls.

use serde::{Deserialize, Serialize};

/// Background colours of filler tiles, cycled by index.
pub const FILLER_PALETTE: [&str; 15] = [
    "#E57373", "#81C784", "#64B5F6", "#FFB74D", "#BA68C8",
    "#4DB6AC", "#FF8A65", "#A1887F", "#90A4AE", "#F06292",
    "#AED581", "#7986CB", "#FFD54F", "#4DD0E1", "#CE93D8",
];

/// Letter glyphs of filler tiles, cycled by index.
pub const FILLER_LABELS: [char; 15] = [
    'A', 'B', 'C', 'D', 'E',
    'F', 'G', 'H', 'I', 'J',
    'K', 'L', 'M', 'N', 'O',
];

/// Edge length of a rendered filler tile, in pixels.
pub const FILLER_SIZE: u32 = 400;

/// An opaque reference to a card face.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ImageRef {
    /// A user-supplied image, identified by a host-defined key.
    Photo(String),
    /// A generated placeholder.
    Filler(FillerImage),
}

impl ImageRef {
    /// Create a photo reference.
    pub fn photo(key: impl Into<String>) -> Self {
        ImageRef::Photo(key.into())
    }

    /// Create the filler with the given index.
    #[must_use]
    pub const fn filler(index: usize) -> Self {
        ImageRef::Filler(FillerImage::new(index))
    }

    /// Is this a generated placeholder?
    #[must_use]
    pub fn is_filler(&self) -> bool {
        matches!(self, ImageRef::Filler(_))
    }

    /// A renderable source string: the photo key, or a filler data URL.
    #[must_use]
    pub fn to_src(&self) -> String {
        match self {
            ImageRef::Photo(key) => key.clone(),
            ImageRef::Filler(filler) => filler.to_data_url(),
        }
    }
}

impl std::fmt::Display for ImageRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ImageRef::Photo(key) => write!(f, "Photo({key})"),
            ImageRef::Filler(filler) => write!(f, "{filler}"),
        }
    }
}

/// A deterministic placeholder tile: flat colour, a letter and a number.
///
/// Everything about the tile is a pure function of `index`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FillerImage {
    index: usize,
}

impl FillerImage {
    /// Create the filler with the given 0-based index.
    #[must_use]
    pub const fn new(index: usize) -> Self {
        Self { index }
    }

    /// Generate `count` fillers with indices `0..count`.
    #[must_use]
    pub fn generate(count: usize) -> Vec<ImageRef> {
        Self::generate_from(0, count)
    }

    /// Generate `count` fillers with indices `start..start + count`.
    #[must_use]
    pub fn generate_from(start: usize, count: usize) -> Vec<ImageRef> {
        (start..start + count).map(ImageRef::filler).collect()
    }

    /// The 0-based index.
    #[must_use]
    pub const fn index(self) -> usize {
        self.index
    }

    /// Background colour (hex).
    #[must_use]
    pub fn color(self) -> &'static str {
        FILLER_PALETTE[self.index % FILLER_PALETTE.len()]
    }

    /// Letter glyph.
    #[must_use]
    pub fn label(self) -> char {
        FILLER_LABELS[self.index % FILLER_LABELS.len()]
    }

    /// 1-based number shown in the caption.
    #[must_use]
    pub const fn number(self) -> usize {
        self.index + 1
    }

    /// Render the tile as an SVG document.
    #[must_use]
    pub fn to_svg(self) -> String {
        let size = FILLER_SIZE;
        let mid = size / 2;
        format!(
            concat!(
                r##"<svg xmlns="http://www.w3.org/2000/svg" width="{size}" height="{size}" viewBox="0 0 {size} {size}">"##,
                r##"<rect width="{size}" height="{size}" fill="{color}"/>"##,
                r##"<circle cx="{mid}" cy="{mid}" r="120" fill="rgba(255,255,255,0.2)"/>"##,
                r##"<text x="{mid}" y="{mid}" fill="#fff" font-family="sans-serif" font-weight="bold" font-size="120" text-anchor="middle" dominant-baseline="central">{label}</text>"##,
                r##"<text x="{mid}" y="340" fill="#fff" font-family="sans-serif" font-size="32" text-anchor="middle" dominant-baseline="central">No.{number}</text>"##,
                "</svg>"
            ),
            size = size,
            mid = mid,
            color = self.color(),
            label = self.label(),
            number = self.number(),
        )
    }

    /// Render the tile as an inline `data:` URL.
    #[must_use]
    pub fn to_data_url(self) -> String {
        let svg = self.to_svg();
        let mut url = String::with_capacity(svg.len() + 32);
        url.push_str("data:image/svg+xml;utf8,");
        for ch in svg.chars() {
            match ch {
                '%' => url.push_str("%25"),
                '#' => url.push_str("%23"),
                '<' => url.push_str("%3C"),
                '>' => url.push_str("%3E"),
                '"' => url.push_str("%22"),
                _ => url.push(ch),
            }
        }
        url
    }
}

impl std::fmt::Display for FillerImage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Filler({} No.{})", self.label(), self.number())
    }
}
