//! Fixed colour palette used to tag buckets.

/// Colour of the remainder ("Personal Use") slice in the overview chart.
pub const PERSONAL_USE_COLOR: &str = "#096b32";

const DEFAULT_COLORS: [&str; 12] = [
    "#0088FE", "#FFBB28", "#FF8042", "#A020F0", "#FF4444", "#8884D8", "#82ca9d", "#00C49F",
    "#FF69B4", "#CD5C5C", "#FFD700", "#40E0D0",
];

/// Ordered, non-empty list of display colours.
///
/// Colours are picked by position modulo palette size, so the sequence
/// repeats once every colour has been handed out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    colors: Vec<String>,
}

impl Palette {
    /// Builds a palette from caller-provided colours.
    ///
    /// Returns `None` when `colors` is empty.
    pub fn new<I, S>(colors: I) -> Option<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let colors: Vec<String> = colors.into_iter().map(Into::into).collect();
        if colors.is_empty() {
            return None;
        }
        Some(Self { colors })
    }

    /// Number of distinct colours.
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Returns `true` when the palette holds no colours.
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Returns the colour for a zero-based position, cycling past the end.
    pub fn color_at(&self, index: usize) -> &str {
        &self.colors[index % self.colors.len()]
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            colors: DEFAULT_COLORS.iter().map(|c| (*c).to_string()).collect(),
        }
    }
}
