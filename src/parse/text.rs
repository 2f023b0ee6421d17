//! Residual text extraction and the contrast rule.
//!
//! Runs after every geometric phase: whatever still sits in the grid is
//! text by definition, including stray edge cells that never joined a
//! detected object.

use crate::color;
use crate::diagram::{Path, Point, PointFlags, Text};
use crate::grid::BLANK;

use super::Parser;

#[cfg(feature = "tracing")]
use tracing::debug;

#[cfg(not(feature = "tracing"))]
macro_rules! debug {
    ($($event:tt)*) => {};
}

/// Empirical baseline nudge aligning a monospaced glyph cell with the
/// SVG text origin.
const ANCHOR_NUDGE_X: f64 = -0.6;
const ANCHOR_NUDGE_Y: f64 = 0.3;

impl Parser {
    /// Sweep the leftover grid into text runs. A single blank joins two
    /// words into one run; a second blank ends it.
    pub(super) fn parse_text(&mut self, boxes: &[Path]) -> Vec<Text> {
        let mut texts = Vec::new();
        for row in 0..self.grid.row_count() as isize {
            let width = self.grid.row_len(row as usize) as isize;
            let mut col = 0;
            while col < width {
                if self.grid.get(row, col) == BLANK {
                    col += 1;
                    continue;
                }
                let start = col;
                let mut content = String::new();
                loop {
                    let ch = self.grid.get(row, col);
                    if ch != BLANK {
                        content.push(ch);
                        col += 1;
                    } else if self.grid.get(row, col + 1) != BLANK {
                        content.push(BLANK);
                        col += 1;
                    } else {
                        break;
                    }
                }
                texts.push(self.finish_text(row, start, content, boxes));
                col += 1;
            }
        }
        texts
    }

    fn finish_text(&self, row: isize, col: isize, content: String, boxes: &[Path]) -> Text {
        let anchor = Point::new(
            col as f64 + ANCHOR_NUDGE_X,
            row as f64 + ANCHOR_NUDGE_Y,
            PointFlags::POINT,
            self.scale,
        );
        let mut text = Text::new(anchor, content);
        if let Some(enclosing) = boxes.iter().find(|b| b.contains(anchor.canvas)) {
            if let Some(fill) = enclosing.options.get("fill") {
                if color::needs_light_text(fill) {
                    debug!(row, col, "light text over dark fill");
                    text.options
                        .insert("fill".to_string(), "#fff".to_string());
                }
            }
        }
        text
    }
}

#[cfg(test)]
mod tests {
    use crate::parse::Parser;
    use crate::scale::Scale;

    #[test]
    fn single_blank_joins_words() {
        let diagram = Parser::run("hello there  world", Scale::default());
        assert_eq!(diagram.texts.len(), 2);
        assert_eq!(diagram.texts[0].content, "hello there");
        assert_eq!(diagram.texts[1].content, "world");
    }

    #[test]
    fn anchor_carries_the_baseline_nudge() {
        let diagram = Parser::run("+---+\n|foo|\n+---+", Scale::default());
        assert_eq!(diagram.texts.len(), 1);
        let anchor = diagram.texts[0].anchor;
        assert!((anchor.grid.x - 0.4).abs() < 1e-9);
        assert!((anchor.grid.y - 1.3).abs() < 1e-9);
    }

    #[test]
    fn text_in_dark_box_turns_white() {
        let source = "+------+\n|[1]foo|\n+------+\n[1]: {\"fill\":\"#000\"}";
        let diagram = Parser::run(source, Scale::default());
        assert_eq!(diagram.boxes.len(), 1);
        assert_eq!(diagram.texts.len(), 1);
        assert_eq!(diagram.texts[0].content, "foo");
        assert_eq!(
            diagram.texts[0].options.get("fill").map(String::as_str),
            Some("#fff")
        );
    }

    #[test]
    fn text_in_light_box_keeps_default_fill() {
        let source = "+------+\n|[1]foo|\n+------+\n[1]: {\"fill\":\"#ffc\"}";
        let diagram = Parser::run(source, Scale::default());
        assert_eq!(diagram.texts.len(), 1);
        assert!(diagram.texts[0].options.get("fill").is_none());
    }

    #[test]
    fn text_outside_any_box_keeps_default_fill() {
        let source = "label\n\n+--+\n|  |\n+--+\n[1]: {\"fill\":\"#000\"}";
        let diagram = Parser::run(source, Scale::default());
        assert_eq!(diagram.texts.len(), 1);
        assert!(diagram.texts[0].options.get("fill").is_none());
    }
}
