//! RouteTranspositionCipher: columnar route transposition.
//!
//! The text is written into a rectangular grid row by row and read back
//! column by column (decoding mirrors this). The key is the number of grid
//! columns. The cipher rearranges positions only, so it accepts any
//! character; unfilled cells of the last row are padded with spaces.

use tracing::{debug, trace};

use crate::cipher::TextCipher;
use crate::error::CipherError;

/// Character used to fill the cells past the end of the text.
pub const PAD: char = ' ';

/// Largest grid (in cells) a single call may allocate.
pub const MAX_GRID_CELLS: usize = 1 << 28;

/// Row-major `rows × columns` character buffer.
///
/// Owned by a single encode/decode call and dropped on return.
struct Grid {
    cells: Vec<char>,
    rows: usize,
    columns: usize,
}

impl Grid {
    /// Allocates a space-filled grid large enough for `len` characters.
    ///
    /// # Errors
    /// Returns [`CipherError::InvalidText`] if the grid would exceed
    /// [`MAX_GRID_CELLS`] or the allocation fails.
    fn for_len(len: usize, columns: usize) -> Result<Self, CipherError> {
        let rows = len.div_ceil(columns);
        let size = rows
            .checked_mul(columns)
            .filter(|&size| size <= MAX_GRID_CELLS)
            .ok_or_else(|| too_large(rows as u128 * columns as u128))?;
        trace!(rows, columns, "allocating transposition grid");
        let mut cells = Vec::new();
        cells
            .try_reserve_exact(size)
            .map_err(|_| too_large(size as u128))?;
        cells.resize(size, PAD);
        Ok(Grid {
            cells,
            rows,
            columns,
        })
    }

    fn index(&self, row: usize, col: usize) -> usize {
        row * self.columns + col
    }

    /// Writes `text` left to right, top to bottom.
    fn write_rows(&mut self, text: &[char]) {
        // Row-major order is the buffer's own order.
        self.cells[..text.len()].copy_from_slice(text);
    }

    /// Writes `text` top to bottom, left to right.
    fn write_columns(&mut self, text: &[char]) {
        let mut chars = text.iter();
        for col in 0..self.columns {
            for row in 0..self.rows {
                let idx = self.index(row, col);
                match chars.next() {
                    Some(&c) => self.cells[idx] = c,
                    None => return,
                }
            }
        }
    }

    fn read_rows(&self) -> String {
        self.cells.iter().collect()
    }

    fn read_columns(&self) -> String {
        let mut out = String::with_capacity(self.cells.len());
        for col in 0..self.columns {
            for row in 0..self.rows {
                out.push(self.cells[self.index(row, col)]);
            }
        }
        out
    }
}

fn too_large(cells: u128) -> CipherError {
    CipherError::InvalidText(format!("grid of {} cells is too large", cells))
}

/// Route (columnar) transposition cipher keyed by a column count.
///
/// # Examples
///
/// ```
/// use cyrcipher::RouteTranspositionCipher;
///
/// let cipher = RouteTranspositionCipher::new(5).unwrap();
/// let encoded = cipher.encode("pROceSsIng").unwrap();
/// assert_eq!(encoded, "pSRsOIcneg");
/// assert_eq!(cipher.decode(&encoded).unwrap(), "pROceSsIng");
/// ```
///
/// Texts whose length is not a multiple of the key come back padded:
///
/// ```
/// use cyrcipher::RouteTranspositionCipher;
///
/// let cipher = RouteTranspositionCipher::new(7).unwrap();
/// let encoded = cipher.encode("pROceSsIng").unwrap();
/// assert_eq!(cipher.decode(&encoded).unwrap(), "pROceSsIng    ");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteTranspositionCipher {
    columns: usize,
}

impl RouteTranspositionCipher {
    /// Creates a cipher with `key` grid columns.
    ///
    /// # Errors
    /// Returns [`CipherError::InvalidKey`] if `key <= 0`.
    ///
    /// ```
    /// use cyrcipher::RouteTranspositionCipher;
    ///
    /// assert!(RouteTranspositionCipher::new(0).is_err());
    /// assert!(RouteTranspositionCipher::new(-3).is_err());
    /// ```
    pub fn new(key: i64) -> Result<Self, CipherError> {
        if key <= 0 {
            return Err(CipherError::InvalidKey(format!(
                "column count must be positive, got {}",
                key
            )));
        }
        let columns = usize::try_from(key).map_err(|_| {
            CipherError::InvalidKey(format!("column count {} does not fit in memory", key))
        })?;
        Ok(RouteTranspositionCipher { columns })
    }

    /// Returns the column count.
    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Encodes `text`: row-major write, column-major read.
    ///
    /// The output has `ceil(len / key) * key` characters.
    ///
    /// # Errors
    /// Returns [`CipherError::InvalidText`] if `text` is empty or the grid
    /// would exceed [`MAX_GRID_CELLS`]. Whitespace-only text is valid.
    pub fn encode(&self, text: &str) -> Result<String, CipherError> {
        let chars = self.valid_text(text)?;
        if chars.len() < self.columns {
            debug!(
                len = chars.len(),
                columns = self.columns,
                "key exceeds text length, single padded row"
            );
        }
        let mut grid = Grid::for_len(chars.len(), self.columns)?;
        grid.write_rows(&chars);
        Ok(grid.read_columns())
    }

    /// Decodes `text`: column-major write, row-major read.
    ///
    /// Padding added by [`encode`](Self::encode) is kept in the output.
    ///
    /// # Errors
    /// Returns [`CipherError::InvalidText`] if `text` is empty or its length
    /// is not a multiple of the key (it could not have come from `encode`),
    /// or if the grid would exceed [`MAX_GRID_CELLS`].
    pub fn decode(&self, text: &str) -> Result<String, CipherError> {
        let chars = self.valid_text(text)?;
        if !chars.len().is_multiple_of(self.columns) {
            return Err(CipherError::InvalidText(format!(
                "cipher text length {} is not a multiple of key {}",
                chars.len(),
                self.columns
            )));
        }
        let mut grid = Grid::for_len(chars.len(), self.columns)?;
        grid.write_columns(&chars);
        Ok(grid.read_rows())
    }

    fn valid_text(&self, text: &str) -> Result<Vec<char>, CipherError> {
        if text.is_empty() {
            return Err(CipherError::InvalidText("empty text".to_string()));
        }
        Ok(text.chars().collect())
    }
}

impl TextCipher for RouteTranspositionCipher {
    fn encipher(&self, text: &str) -> Result<String, CipherError> {
        self.encode(text)
    }

    fn decipher(&self, text: &str) -> Result<String, CipherError> {
        self.decode(text)
    }
}
