use crate::domain::{Cell, Generation};

/// Characters used to draw live and dead cells
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Glyphs {
    pub live: char,
    pub dead: char,
}

impl Default for Glyphs {
    fn default() -> Self {
        Self {
            live: '\u{25A3}', // ▣
            dead: '\u{25A2}', // ▢
        }
    }
}

impl Glyphs {
    pub const fn new(live: char, dead: char) -> Self {
        Self { live, dead }
    }
}

/// Glyph for a single cell of `generation`
pub fn glyph_for(cell: Cell, generation: &Generation, glyphs: &Glyphs) -> char {
    if generation.contains(cell) {
        glyphs.live
    } else {
        glyphs.dead
    }
}

/// Draw the bounding box of a generation, highest row first.
/// Every glyph is followed by a space and every row ends with a newline.
pub fn render(generation: &Generation, glyphs: &Glyphs) -> String {
    let bounds = generation.bounds();
    // Each glyph can take up to 3 bytes in UTF-8, plus its separator
    let mut out = String::with_capacity(bounds.height() * (bounds.width() * 4 + 1));

    for y in (bounds.bottom_left.y..=bounds.top_right.y).rev() {
        for x in bounds.bottom_left.x..=bounds.top_right.x {
            out.push(glyph_for(Cell::new(x, y), generation, glyphs));
            out.push(' ');
        }
        out.push('\n');
    }
    out
}

/// Render a whole sequence, separating generations with a blank line
pub fn render_sequence(sequence: &[Generation], glyphs: &Glyphs) -> String {
    sequence
        .iter()
        .map(|generation| render(generation, glyphs) + "\n")
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::presets;

    const ASCII: Glyphs = Glyphs::new('#', '.');

    #[test]
    fn test_empty_renders_single_dead_cell() {
        assert_eq!(render(&Generation::default(), &ASCII), ".\x20\n");
        assert_eq!(render(&Generation::default(), &Glyphs::default()), "\u{25A2} \n");
    }

    #[test]
    fn test_square_fills_its_box() {
        let square = presets::square().seed();
        assert_eq!(render(&square, &ASCII), "# # \n# # \n");
    }

    #[test]
    fn test_higher_rows_print_first() {
        let generation = Generation::seed([(0, 0), (1, 1)]);
        assert_eq!(render(&generation, &ASCII), ". # \n# . \n");
    }

    #[test]
    fn test_rpentomino() {
        let seed = presets::r_pentomino().seed();
        let expected = concat!(
            ". # # \n",
            "# # . \n",
            ". # . \n",
        );
        assert_eq!(render(&seed, &ASCII), expected);
    }

    #[test]
    fn test_glyph_for() {
        let square = presets::square().seed();
        assert_eq!(glyph_for(Cell::new(1, 1), &square, &ASCII), '#');
        assert_eq!(glyph_for(Cell::new(0, 0), &square, &ASCII), '.');
    }

    #[test]
    fn test_sequence_separated_by_blank_lines() {
        let blinker = presets::blinker().seed();
        let sequence = vec![blinker.clone(), blinker.evolve()];
        let expected = concat!(
            "# # # \n",
            "\n",
            "# \n",
            "# \n",
            "# \n",
            "\n",
        );
        assert_eq!(render_sequence(&sequence, &ASCII), expected);
    }
}
