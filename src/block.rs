//! Code point to Unicode block lookup
//!
//! A static table of half-open ranges `[start, end)`. The table covers the
//! blocks the exporters and dataset definitions care about; anything outside
//! it resolves to [`UNKNOWN_BLOCK`].

/// Block name for code points outside every range in [`BLOCKS`]
pub const UNKNOWN_BLOCK: &str = "Unknown Block";

/// One named block
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockRange {
    /// First code point in the block
    pub start: u32,
    /// One past the last code point in the block
    pub end: u32,
    /// Block name as spelled in Blocks.txt
    pub name: &'static str,
}

impl BlockRange {
    const fn new(start: u32, end: u32, name: &'static str) -> Self {
        Self { start, end, name }
    }

    /// Whether `code_point` falls inside this block
    #[inline]
    pub fn contains(&self, code_point: u32) -> bool {
        self.start <= code_point && code_point < self.end
    }
}

/// Block table, ordered by start and non-overlapping
pub static BLOCKS: &[BlockRange] = &[
    BlockRange::new(0x0000, 0x0080, "Basic Latin"),
    BlockRange::new(0x0080, 0x0100, "Latin-1 Supplement"),
    BlockRange::new(0x0100, 0x0180, "Latin Extended-A"),
    BlockRange::new(0x0180, 0x0250, "Latin Extended-B"),
    BlockRange::new(0x0250, 0x02B0, "IPA Extensions"),
    BlockRange::new(0x02B0, 0x0300, "Spacing Modifier Letters"),
    BlockRange::new(0x0300, 0x0370, "Combining Diacritical Marks"),
    BlockRange::new(0x0370, 0x0400, "Greek and Coptic"),
    BlockRange::new(0x0400, 0x0500, "Cyrillic"),
    BlockRange::new(0x0500, 0x0530, "Cyrillic Supplement"),
    BlockRange::new(0x0530, 0x0590, "Armenian"),
    BlockRange::new(0x0590, 0x0600, "Hebrew"),
    BlockRange::new(0x0600, 0x0700, "Arabic"),
    BlockRange::new(0x0900, 0x0980, "Devanagari"),
    BlockRange::new(0x0980, 0x0A00, "Bengali"),
    BlockRange::new(0x0E00, 0x0E80, "Thai"),
    BlockRange::new(0x10A0, 0x1100, "Georgian"),
    BlockRange::new(0x1100, 0x1200, "Hangul Jamo"),
    BlockRange::new(0x1E00, 0x1F00, "Latin Extended Additional"),
    BlockRange::new(0x1F00, 0x2000, "Greek Extended"),
    BlockRange::new(0x2000, 0x2070, "General Punctuation"),
    BlockRange::new(0x2070, 0x20A0, "Superscripts and Subscripts"),
    BlockRange::new(0x20A0, 0x20D0, "Currency Symbols"),
    BlockRange::new(0x20D0, 0x2100, "Combining Diacritical Marks for Symbols"),
    BlockRange::new(0x2100, 0x2150, "Letterlike Symbols"),
    BlockRange::new(0x2150, 0x2190, "Number Forms"),
    BlockRange::new(0x2190, 0x2200, "Arrows"),
    BlockRange::new(0x2200, 0x2300, "Mathematical Operators"),
    BlockRange::new(0x2300, 0x2400, "Miscellaneous Technical"),
    BlockRange::new(0x2400, 0x2440, "Control Pictures"),
    BlockRange::new(0x2440, 0x2460, "Optical Character Recognition"),
    BlockRange::new(0x2460, 0x2500, "Enclosed Alphanumerics"),
    BlockRange::new(0x2500, 0x2580, "Box Drawing"),
    BlockRange::new(0x2580, 0x25A0, "Block Elements"),
    BlockRange::new(0x25A0, 0x2600, "Geometric Shapes"),
    BlockRange::new(0x2600, 0x2700, "Miscellaneous Symbols"),
    BlockRange::new(0x2700, 0x27C0, "Dingbats"),
    BlockRange::new(0x27C0, 0x27F0, "Miscellaneous Mathematical Symbols-A"),
    BlockRange::new(0x27F0, 0x2800, "Supplemental Arrows-A"),
    BlockRange::new(0x2800, 0x2900, "Braille Patterns"),
    BlockRange::new(0x2900, 0x2980, "Supplemental Arrows-B"),
    BlockRange::new(0x2980, 0x2A00, "Miscellaneous Mathematical Symbols-B"),
    BlockRange::new(0x2A00, 0x2B00, "Supplemental Mathematical Operators"),
    BlockRange::new(0x2B00, 0x2C00, "Miscellaneous Symbols and Arrows"),
    BlockRange::new(0x3000, 0x3040, "CJK Symbols and Punctuation"),
    BlockRange::new(0x3040, 0x30A0, "Hiragana"),
    BlockRange::new(0x30A0, 0x3100, "Katakana"),
    BlockRange::new(0x4E00, 0xA000, "CJK Unified Ideographs"),
    BlockRange::new(0xAC00, 0xD7B0, "Hangul Syllables"),
    BlockRange::new(0xE000, 0xF900, "Private Use Area"),
    BlockRange::new(0xFB00, 0xFB50, "Alphabetic Presentation Forms"),
    BlockRange::new(0xFF00, 0xFFF0, "Halfwidth and Fullwidth Forms"),
    BlockRange::new(0xFFF0, 0x10000, "Specials"),
    BlockRange::new(0x1D400, 0x1D800, "Mathematical Alphanumeric Symbols"),
    BlockRange::new(0x1F000, 0x1F030, "Mahjong Tiles"),
    BlockRange::new(0x1F030, 0x1F0A0, "Domino Tiles"),
    BlockRange::new(0x1F0A0, 0x1F100, "Playing Cards"),
    BlockRange::new(0x1F100, 0x1F200, "Enclosed Alphanumeric Supplement"),
    BlockRange::new(0x1F300, 0x1F600, "Miscellaneous Symbols and Pictographs"),
    BlockRange::new(0x1F600, 0x1F650, "Emoticons"),
    BlockRange::new(0x1F650, 0x1F680, "Ornamental Dingbats"),
    BlockRange::new(0x1F680, 0x1F700, "Transport and Map Symbols"),
    BlockRange::new(0x1F700, 0x1F780, "Alchemical Symbols"),
    BlockRange::new(0x1F780, 0x1F800, "Geometric Shapes Extended"),
    BlockRange::new(0x1F800, 0x1F900, "Supplemental Arrows-C"),
    BlockRange::new(0x1F900, 0x1FA00, "Supplemental Symbols and Pictographs"),
    BlockRange::new(0x1FA70, 0x1FB00, "Symbols and Pictographs Extended-A"),
];

/// Resolve the block name for a code point.
///
/// Linear scan; the first range containing `code_point` wins. Total over all
/// `u32` inputs.
pub fn resolve_block(code_point: u32) -> &'static str {
    BLOCKS
        .iter()
        .find(|block| block.contains(code_point))
        .map(|block| block.name)
        .unwrap_or(UNKNOWN_BLOCK)
}

/// Names of all known blocks, in table order
pub fn known_blocks() -> impl Iterator<Item = &'static str> {
    BLOCKS.iter().map(|block| block.name)
}

/// Whether `name` is a block in the table
pub fn is_known_block(name: &str) -> bool {
    BLOCKS.iter().any(|block| block.name == name)
}
