// * Fixed-width text layout measured in terminal display cells.
// * Wide characters (CJK, most emoji) take two cells, combining marks none.

use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

pub fn display_width(s: &str) -> usize {
    UnicodeWidthStr::width(s)
}

/// Pads with spaces up to `width` cells. Longer text is left untouched.
pub fn pad_to_width(s: &str, width: usize) -> String {
    let used = display_width(s);
    let mut out = String::with_capacity(s.len() + width.saturating_sub(used));
    out.push_str(s);
    out.extend(std::iter::repeat(' ').take(width.saturating_sub(used)));
    out
}

/// Cuts on grapheme boundaries so the result never exceeds `width` cells, then pads.
pub fn fit_to_width(s: &str, width: usize) -> String {
    if display_width(s) <= width {
        return pad_to_width(s, width);
    }

    let mut used = 0;
    let mut out = String::new();
    for grapheme in s.graphemes(true) {
        let w = display_width(grapheme);
        if used + w > width {
            break;
        }
        used += w;
        out.push_str(grapheme);
    }
    pad_to_width(&out, width)
}

/// Column-aligned table. Every column but the last is fitted to its width.
pub struct TextTable<'a> {
    widths: &'a [usize],
    lines: Vec<String>,
}

impl<'a> TextTable<'a> {
    pub fn new(widths: &'a [usize]) -> Self {
        Self {
            widths,
            lines: Vec::new(),
        }
    }

    pub fn row<S: AsRef<str>>(&mut self, cells: &[S]) -> &mut Self {
        let last = cells.len().saturating_sub(1);
        let line: String = cells
            .iter()
            .enumerate()
            .map(|(i, cell)| match self.widths.get(i) {
                Some(&w) if i < last => fit_to_width(cell.as_ref(), w),
                _ => cell.as_ref().to_string(),
            })
            .collect::<Vec<_>>()
            .join(" ");
        self.lines.push(line.trim_end().to_string());
        self
    }

    pub fn render(&self) -> String {
        self.lines.join("\n")
    }
}
