//! Text measurement seam and wrapped text blocks.

/// A single wrapped line of a [`TextBlock`].
#[derive(Debug, Clone, PartialEq)]
pub struct TextLine {
    /// The text shown on this line (without the break character).
    pub text: String,
    /// Top of the line, relative to the block origin.
    pub top: f32,
    /// Baseline of the line, relative to the block origin.
    pub baseline: f32,
    /// Advance width of the line's glyphs.
    pub width: f32,
    /// Line height.
    pub height: f32,
}

/// A word-wrapped, start-aligned block of text ready for drawing.
///
/// The block's width is the width it was wrapped to, not the width of its
/// widest line. A zero-width block has no lines and is never drawn.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TextBlock {
    width: u32,
    height: u32,
    font_size: f32,
    lines: Vec<TextLine>,
}

impl TextBlock {
    /// A block with no lines and zero size.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build a block from wrapped lines. The height is the rounded-up bottom
    /// of the last line.
    pub fn new(width: u32, font_size: f32, lines: Vec<TextLine>) -> Self {
        if width == 0 {
            return Self::empty();
        }
        let bottom = lines
            .iter()
            .map(|line| line.top + line.height)
            .fold(0.0_f32, f32::max);
        Self {
            width,
            height: bottom.ceil() as u32,
            font_size,
            lines,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn font_size(&self) -> f32 {
        self.font_size
    }

    pub fn lines(&self) -> &[TextLine] {
        &self.lines
    }

    /// Whether the block has nothing to draw.
    pub fn is_empty(&self) -> bool {
        self.width == 0
    }
}

/// Text metrics provided by the rendering host.
pub trait TextMeasurer {
    /// Width of `text` laid out on a single line at `size` pixels.
    fn line_width(&mut self, text: &str, size: f32) -> f32;

    /// Word-wrap `text` at `size` pixels into lines no wider than
    /// `max_width` (start aligned, line spacing 1.0).
    fn wrap(&mut self, text: &str, size: f32, max_width: u32) -> TextBlock;
}

/// Fixed-advance text metrics.
///
/// Every character advances by `advance_ratio * size` and every line is
/// `line_height_ratio * size` tall. Used when no font engine is available
/// and as a deterministic engine for tests.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MonospaceMeasurer {
    pub advance_ratio: f32,
    pub line_height_ratio: f32,
}

impl Default for MonospaceMeasurer {
    fn default() -> Self {
        Self {
            advance_ratio: 0.6,
            line_height_ratio: 1.2,
        }
    }
}

impl MonospaceMeasurer {
    pub fn new() -> Self {
        Self::default()
    }

    fn advance(&self, size: f32) -> f32 {
        self.advance_ratio * size
    }

    fn width_of(&self, text: &str, size: f32) -> f32 {
        text.chars().count() as f32 * self.advance(size)
    }

    /// Greedy wrap of one paragraph into `out`. Words wider than the line
    /// are broken between characters.
    fn wrap_paragraph(&self, paragraph: &str, size: f32, max_width: f32, out: &mut Vec<String>) {
        let max_chars = ((max_width / self.advance(size)).floor() as usize).max(1);
        let mut line = String::new();

        for word in paragraph.split(' ') {
            let candidate = if line.is_empty() {
                word.to_string()
            } else {
                format!("{line} {word}")
            };
            if candidate.chars().count() <= max_chars {
                line = candidate;
                continue;
            }

            if !line.is_empty() {
                out.push(std::mem::take(&mut line));
            }
            let chars: Vec<char> = word.chars().collect();
            let mut chunks = chars.chunks(max_chars).peekable();
            while let Some(chunk) = chunks.next() {
                let piece: String = chunk.iter().collect();
                if chunks.peek().is_some() {
                    out.push(piece);
                } else {
                    line = piece;
                }
            }
        }
        out.push(line);
    }
}

impl TextMeasurer for MonospaceMeasurer {
    fn line_width(&mut self, text: &str, size: f32) -> f32 {
        text.lines()
            .map(|line| self.width_of(line, size))
            .fold(0.0, f32::max)
    }

    fn wrap(&mut self, text: &str, size: f32, max_width: u32) -> TextBlock {
        if max_width == 0 || size <= 0.0 {
            return TextBlock::empty();
        }

        let mut wrapped = Vec::new();
        for paragraph in text.split('\n') {
            self.wrap_paragraph(paragraph, size, max_width as f32, &mut wrapped);
        }

        let line_height = self.line_height_ratio * size;
        let lines = wrapped
            .into_iter()
            .enumerate()
            .map(|(i, text)| {
                let top = i as f32 * line_height;
                TextLine {
                    width: self.width_of(&text, size),
                    text,
                    top,
                    baseline: top + size,
                    height: line_height,
                }
            })
            .collect();
        TextBlock::new(max_width, size, lines)
    }
}
