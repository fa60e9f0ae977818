//! Printable reference manual of the 25-pair color code, for field
//! technicians identifying wire pairs.
//!
//! ```
//! use pair_color_code::manual::{ManualOptions, Format};
//! let text = pair_color_code::manual::format_reference_manual();
//! assert!(text.starts_with("Color Coding Reference Manual\n"));
//! let html = ManualOptions::new().format(Format::Html).render();
//! assert!(html.contains("background-color: #708090"));
//! ```

use rgb::RGB8;
use crate::{pairs, Palette};

const DEFAULT_TITLE: &str = "Color Coding Reference Manual";
const PAIR_LABEL: &str = "Pair Number";
const MAJOR_LABEL: &str = "Major Color";
const MINOR_LABEL: &str = "Minor Color";

/// Output format of the manual.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Format {
    /// Plain text table with aligned columns.
    #[default]
    Text,
    /// Standalone HTML page with color swatches.
    Html,
}

/// Set how the manual is rendered.
#[derive(Clone, Debug)]
pub struct ManualOptions {
    title: String,
    format: Format,
}

impl Default for ManualOptions {
    fn default() -> Self {
        ManualOptions { title: DEFAULT_TITLE.to_string(), format: Format::Text }
    }
}

impl ManualOptions {
    pub fn new() -> Self { Self::default() }

    /// Set the title printed above the table.
    pub fn title(mut self, title: &str) -> Self {
        self.title = title.to_string();
        self
    }

    pub fn format(mut self, format: Format) -> Self {
        self.format = format;
        self
    }

    /// Return the manual listing all pairs by increasing number.
    pub fn render(&self) -> String {
        match self.format {
            Format::Text => text(&self.title),
            Format::Html => html(&self.title),
        }
    }
}

/// Return the plain text manual with the default title.
pub fn format_reference_manual() -> String {
    ManualOptions::default().render()
}

fn text(title: &str) -> String {
    let pair_w = PAIR_LABEL.len();
    let major_w = MAJOR_LABEL.len().max(Palette::major().name_width());
    let minor_w = MINOR_LABEL.len().max(Palette::minor().name_width());
    let rule_w = pair_w + major_w + minor_w + 6; // two " | "
    let mut lines = Vec::with_capacity(crate::PAIR_COUNT + 4);
    lines.push(title.to_string());
    lines.push("=".repeat(rule_w));
    lines.push(format!("{PAIR_LABEL:<pair_w$} | {MAJOR_LABEL:<major_w$} \
                        | {MINOR_LABEL}"));
    lines.push("-".repeat(rule_w));
    for (n, pair) in pairs() {
        let number = format!("{:>2}", n.get());
        lines.push(format!("{number:<pair_w$} | {:<major_w$} | {}",
                           pair.major().name(), pair.minor().name()));
    }
    let mut manual = lines.join("\n");
    manual.push('\n');
    manual
}

fn css_string(c: RGB8) -> String {
    format!("#{:02x}{:02x}{:02x}", c.r, c.g, c.b)
}

fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            c => out.push(c),
        }
    }
    out
}

fn swatch(c: RGB8) -> String {
    format!("<td style=\"width: 40px; height: 20px; \
             background-color: {}\"></td>", css_string(c))
}

fn html(title: &str) -> String {
    let title = escape(title);
    let mut lines = vec![
        "<html>".to_string(),
        "<head>".to_string(),
        format!("<title>{title}</title>"),
        "</head>".to_string(),
        "<body>".to_string(),
        format!("<h3>{title}</h3>"),
        "<table style=\"border-spacing: 4px\">".to_string(),
        format!("<tr><th>{PAIR_LABEL}</th><th>{MAJOR_LABEL}</th>\
                 <th>{MINOR_LABEL}</th><th colspan=\"2\"></th></tr>"),
    ];
    for (n, pair) in pairs() {
        let (major, minor) = (pair.major(), pair.minor());
        lines.push(format!("<tr><td>{n}</td><td>{major}</td><td>{minor}</td>\
                            {}{}</tr>",
                           swatch(major.rgb()), swatch(minor.rgb())));
    }
    lines.push("</table>".to_string());
    lines.push("</body>".to_string());
    lines.push("</html>".to_string());
    let mut page = lines.join("\n");
    page.push('\n');
    page
}


#[cfg(test)]
mod tests {
    use std::collections::HashSet;
    use super::*;

    fn rows(manual: &str) -> Vec<&str> { manual.lines().skip(4).collect() }

    #[test]
    fn layout() {
        let manual = format_reference_manual();
        let lines: Vec<_> = manual.lines().collect();
        assert_eq!(lines[0], "Color Coding Reference Manual");
        assert_eq!(lines[2], "Pair Number | Major Color | Minor Color");
        assert_eq!(lines[1], "=".repeat(lines[2].len()));
        assert_eq!(lines[3], "-".repeat(lines[2].len()));
        assert_eq!(lines[4], " 1          | White       | Blue");
        assert_eq!(lines[28], "25          | Violet      | Slate");
        assert!(manual.ends_with("Slate\n"));
        assert!(lines.iter().all(|l| !l.ends_with(' ')));
    }

    #[test]
    fn one_row_per_pair() {
        let manual = format_reference_manual();
        let rows = rows(&manual);
        assert_eq!(rows.len(), 25);
        let mut seen = HashSet::new();
        for (i, row) in rows.iter().enumerate() {
            let cols: Vec<_> = row.split('|').map(str::trim).collect();
            assert_eq!(cols.len(), 3);
            assert_eq!(cols[0].parse::<usize>().unwrap(), i + 1);
            assert!(seen.insert((cols[1].to_string(), cols[2].to_string())),
                    "duplicate pair in row {row:?}");
        }
    }

    #[test]
    fn columns_aligned() {
        let manual = format_reference_manual();
        let header = manual.lines().nth(2).unwrap();
        let bars: Vec<_> = header.match_indices('|').map(|(i, _)| i).collect();
        for row in rows(&manual) {
            let row_bars: Vec<_> = row.match_indices('|').map(|(i, _)| i).collect();
            assert_eq!(row_bars, bars, "misaligned row {row:?}");
        }
    }

    #[test]
    fn custom_title() {
        let manual = ManualOptions::new().title("Field card").render();
        assert!(manual.starts_with("Field card\n===="));
        assert_eq!(rows(&manual).len(), 25);
    }

    #[test]
    fn html_page() {
        let page = ManualOptions::new().title("A & B").format(Format::Html)
            .render();
        assert!(page.contains("<title>A &amp; B</title>"));
        assert_eq!(page.matches("<tr><td>").count(), 25);
        assert!(page.contains("<tr><td>12</td><td>Black</td><td>Orange</td>"));
        assert!(page.contains("background-color: #ffa500"));
        assert!(page.ends_with("</html>\n"));
    }

    #[test]
    fn css() {
        assert_eq!(css_string(RGB8 { r: 139, g: 0, b: 255 }), "#8b00ff");
    }
}
