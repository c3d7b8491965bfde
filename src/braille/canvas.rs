use crate::map::Rgba;

/// Braille Unicode canvas for high-resolution terminal graphics.
/// Each character cell represents a 2x4 dot grid (8 dots) plus one foreground
/// colour for its dots and one background colour for the cell.
/// Unicode Braille patterns: U+2800 to U+28FF
#[derive(Debug, Clone)]
pub struct BrailleCanvas {
    width: usize,  // Characters
    height: usize, // Characters
    dots: Vec<u8>, // Bit pattern per cell, row-major
    fg: Vec<Rgba>,
    bg: Vec<Rgba>,
}

/// One resolved terminal cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub symbol: char,
    pub fg: Rgba,
    pub bg: Rgba,
}

impl BrailleCanvas {
    /// Create a new canvas with the given character dimensions.
    /// Effective dot resolution: width*2 x height*4
    pub fn new(width: usize, height: usize) -> Self {
        let cells = width * height;
        Self {
            width,
            height,
            dots: vec![0; cells],
            fg: vec![Rgba::rgb(255, 255, 255); cells],
            bg: vec![Rgba::rgb(0, 0, 0); cells],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Dot resolution (x, y)
    pub fn pixel_size(&self) -> (usize, usize) {
        (self.width * 2, self.height * 4)
    }

    /// Wipe all dots and paint every cell background.
    pub fn clear(&mut self, bg: Rgba) {
        self.dots.fill(0);
        self.bg.fill(bg);
    }

    fn index(&self, cx: usize, cy: usize) -> Option<usize> {
        (cx < self.width && cy < self.height).then(|| cy * self.width + cx)
    }

    /// Set a dot at the given coordinates and take over the cell's foreground.
    /// Braille dot layout per character:
    /// ```text
    /// (0,0) (1,0)   bits: 0x01 0x08
    /// (0,1) (1,1)   bits: 0x02 0x10
    /// (0,2) (1,2)   bits: 0x04 0x20
    /// (0,3) (1,3)   bits: 0x40 0x80
    /// ```
    pub fn set_pixel(&mut self, x: usize, y: usize, color: Rgba) {
        let Some(idx) = self.index(x / 2, y / 4) else {
            return;
        };

        let bit = match (x % 2, y % 4) {
            (0, 0) => 0x01,
            (1, 0) => 0x08,
            (0, 1) => 0x02,
            (1, 1) => 0x10,
            (0, 2) => 0x04,
            (1, 2) => 0x20,
            (0, 3) => 0x40,
            (1, 3) => 0x80,
            _ => 0,
        };

        self.dots[idx] |= bit;
        self.fg[idx] = color.over(self.bg[idx]);
    }

    /// Set a dot using signed coordinates (ignores negative values)
    pub fn set_pixel_signed(&mut self, x: i32, y: i32, color: Rgba) {
        if x >= 0 && y >= 0 {
            self.set_pixel(x as usize, y as usize, color);
        }
    }

    /// Composite `color` over a cell's background.
    pub fn blend_cell(&mut self, cx: usize, cy: usize, color: Rgba) {
        if let Some(idx) = self.index(cx, cy) {
            self.bg[idx] = color.over(self.bg[idx]);
        }
    }

    /// Center of a cell in dot coordinates
    pub fn cell_center(cx: usize, cy: usize) -> (f64, f64) {
        (cx as f64 * 2.0 + 1.0, cy as f64 * 4.0 + 2.0)
    }

    pub fn cell(&self, cx: usize, cy: usize) -> Option<Cell> {
        let idx = self.index(cx, cy)?;
        Some(Cell {
            symbol: braille_char(self.dots[idx]),
            fg: self.fg[idx],
            bg: self.bg[idx],
        })
    }

    /// Get a specific row as a string (for line-by-line rendering)
    pub fn row_to_string(&self, row: usize) -> String {
        if row >= self.height {
            return String::new();
        }
        let start = row * self.width;
        self.dots[start..start + self.width].iter().map(|&b| braille_char(b)).collect()
    }

    /// Get all rows as an iterator of strings
    pub fn rows(&self) -> impl Iterator<Item = String> + '_ {
        (0..self.height).map(|i| self.row_to_string(i))
    }
}

fn braille_char(bits: u8) -> char {
    char::from_u32(0x2800 + bits as u32).unwrap_or(' ')
}

#[cfg(test)]
mod tests {
    use super::*;

    const WHITE: Rgba = Rgba::rgb(255, 255, 255);

    fn text(canvas: &BrailleCanvas) -> String {
        canvas.rows().collect::<Vec<_>>().join("\n")
    }

    #[test]
    fn test_single_pixel() {
        let mut canvas = BrailleCanvas::new(1, 1);
        canvas.set_pixel(0, 0, WHITE);
        assert_eq!(text(&canvas), "⠁"); // U+2801
    }

    #[test]
    fn test_all_dots() {
        let mut canvas = BrailleCanvas::new(1, 1);
        for x in 0..2 {
            for y in 0..4 {
                canvas.set_pixel(x, y, WHITE);
            }
        }
        assert_eq!(text(&canvas), "⣿"); // U+28FF (all dots)
    }

    #[test]
    fn test_diagonal() {
        let mut canvas = BrailleCanvas::new(2, 1);
        canvas.set_pixel(0, 0, WHITE);
        canvas.set_pixel(1, 1, WHITE);
        canvas.set_pixel(2, 2, WHITE);
        canvas.set_pixel(3, 3, WHITE);
        // First char: (0,0) and (1,1) = 0x01 | 0x10 = 0x11
        // Second char: (0,2) and (1,3) = 0x04 | 0x80 = 0x84
        assert_eq!(text(&canvas), "⠑⢄");
    }

    #[test]
    fn test_colors_and_clipping() {
        let mut canvas = BrailleCanvas::new(2, 2);
        canvas.clear(Rgba::rgb(10, 20, 30));
        canvas.set_pixel(3, 5, Rgba::rgb(200, 0, 0));
        canvas.set_pixel_signed(-1, 0, WHITE);
        canvas.set_pixel(100, 100, WHITE);

        let cell = canvas.cell(1, 1).expect("in range");
        assert_eq!(cell.fg, Rgba::rgb(200, 0, 0));
        assert_eq!(cell.bg, Rgba::rgb(10, 20, 30));
        assert_eq!(canvas.cell(0, 0).map(|c| c.symbol), Some('\u{2800}'));
        assert!(canvas.cell(2, 0).is_none());

        canvas.blend_cell(0, 0, Rgba::rgb(110, 20, 30).with_opacity(0.5));
        let bg = canvas.cell(0, 0).expect("in range").bg;
        assert!(bg.r > 50 && bg.r < 70);
    }
}
