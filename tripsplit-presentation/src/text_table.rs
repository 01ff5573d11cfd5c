use std::{borrow::Cow, fmt::Write};

const COLUMN_GAP: &str = "  ";
const RULE: char = '-';

/// Builds a plain-text table with a header row and a rule beneath it.
///
/// Column widths are measured in terminal cells: wide East Asian characters
/// count as two. Trailing spaces are trimmed from every line.
#[derive(Default)]
pub struct TextTableBuilder<'a, Seq> {
    headers: &'a [Cow<'a, str>],
    rows: Vec<Seq>,
    alignments: Cow<'a, [Alignment]>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Alignment {
    #[default]
    Left,
    Center,
    Right,
}

impl<'a, Seq> TextTableBuilder<'a, Seq>
where
    Seq: AsRef<[Cow<'a, str>]> + Default,
{
    pub fn new() -> Self {
        Self::default()
    }

    pub fn alignments(mut self, alignments: &'a [Alignment]) -> Self {
        self.alignments = Cow::Borrowed(alignments);
        self
    }

    pub fn headers(mut self, headers: &'a [Cow<'a, str>]) -> Self {
        self.headers = headers;
        if self.alignments.is_empty() {
            self.alignments = Cow::Owned(vec![Alignment::default(); self.headers.len()]);
        }
        self
    }

    pub fn row(mut self, row: Seq) -> Self {
        self.rows.push(row);
        self
    }

    pub fn rows(mut self, rows: impl IntoIterator<Item = Seq>) -> Self {
        self.rows.extend(rows);
        self
    }

    pub fn build(self) -> String {
        let col_count = self.headers.len();
        if col_count == 0 {
            return String::new();
        }

        let mut col_widths: Vec<usize> = self.headers.iter().map(|h| display_width(h)).collect();
        for row in &self.rows {
            for (width, cell) in col_widths.iter_mut().zip(row.as_ref()) {
                *width = (*width).max(display_width(cell));
            }
        }

        let mut table = String::with_capacity(256);
        self.write_line(&mut table, self.headers, &col_widths);

        let rule: Vec<String> = col_widths
            .iter()
            .map(|width| RULE.to_string().repeat(*width))
            .collect();
        let _ = writeln!(&mut table, "{}", rule.join(COLUMN_GAP));

        for row in &self.rows {
            self.write_line(&mut table, row.as_ref(), &col_widths);
        }

        table.truncate(table.trim_end().len());
        table
    }

    fn write_line(&self, out: &mut String, cells: &[Cow<'_, str>], col_widths: &[usize]) {
        let mut line = String::new();
        for (i, width) in col_widths.iter().enumerate() {
            if i > 0 {
                line.push_str(COLUMN_GAP);
            }
            let cell = cells.get(i).map_or("", |c| &**c);
            let alignment = self.alignments.get(i).copied().unwrap_or_default();
            pad(&mut line, cell, *width, alignment);
        }
        let _ = writeln!(out, "{}", line.trim_end());
    }
}

fn pad(out: &mut String, cell: &str, width: usize, alignment: Alignment) {
    let slack = width.saturating_sub(display_width(cell));
    let (before, after) = match alignment {
        Alignment::Left => (0, slack),
        Alignment::Center => (slack / 2, slack - slack / 2),
        Alignment::Right => (slack, 0),
    };
    out.extend(std::iter::repeat_n(' ', before));
    out.push_str(cell);
    out.extend(std::iter::repeat_n(' ', after));
}

fn display_width(text: &str) -> usize {
    text.chars().map(char_width).sum()
}

fn char_width(c: char) -> usize {
    match u32::from(c) {
        0x1100..=0x115F
        | 0x2E80..=0x303E
        | 0x3041..=0x33FF
        | 0x3400..=0x4DBF
        | 0x4E00..=0x9FFF
        | 0xA000..=0xA4CF
        | 0xAC00..=0xD7A3
        | 0xF900..=0xFAFF
        | 0xFE30..=0xFE4F
        | 0xFF00..=0xFF60
        | 0xFFE0..=0xFFE6 => 2,
        _ => 1,
    }
}

/// Stacks rendered sections with a blank line between them, skipping empty ones.
pub fn join_sections<'s>(sections: impl IntoIterator<Item = &'s str>) -> String {
    sections
        .into_iter()
        .filter(|section| !section.is_empty())
        .collect::<Vec<_>>()
        .join("\n\n")
}
