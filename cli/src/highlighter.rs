use nu_ansi_term::{Color, Style};
use reedline::StyledText;

#[derive(Debug)]
struct PaletteItem<'a> {
    name: &'a str,
    fg: Color,
}

const PALETTE: &[PaletteItem] = &[
    PaletteItem { name: "", fg: Color::White },
    PaletteItem { name: "operator", fg: Color::Magenta },
    PaletteItem { name: "punctuation", fg: Color::White },
    PaletteItem { name: "number", fg: Color::Cyan },
    PaletteItem { name: "property", fg: Color::Red },
];

fn style(name: &str) -> Style {
    let fg = PALETTE
        .iter()
        .find(|item| item.name == name)
        .map_or(PALETTE[0].fg, |item| item.fg);
    Style::new().fg(fg)
}

/// Colors the parts of a dotted path: the `^` prefix, names, positions and dots.
pub struct Highlighter;

impl reedline::Highlighter for Highlighter {
    fn highlight(&self, line: &str, _: usize) -> StyledText {
        let mut output = StyledText::new();

        let rest = match line.strip_prefix('^') {
            Some(rest) => {
                output.push((style("operator"), "^".to_string()));
                rest
            }
            None => line,
        };

        for (i, segment) in rest.split('.').enumerate() {
            if i > 0 {
                output.push((style("punctuation"), ".".to_string()));
            }
            if segment.is_empty() {
                continue;
            }
            let kind = if segment.trim().parse::<i64>().is_ok() {
                "number"
            } else {
                "property"
            };
            output.push((style(kind), segment.to_string()));
        }

        output
    }
}
