/// The state of a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum CellState {
    /// The cell is dead.
    #[default]
    Dead,

    /// The cell is alive.
    Alive,
}

impl CellState {
    /// Whether the cell is alive.
    #[inline]
    pub const fn is_alive(self) -> bool {
        matches!(self, Self::Alive)
    }

    /// The glyph used in plaintext patterns.
    ///
    /// - Dead cells are represented by `.`.
    /// - Alive cells are represented by `o`.
    #[inline]
    pub const fn glyph(self) -> char {
        match self {
            Self::Dead => '.',
            Self::Alive => 'o',
        }
    }

    /// Read a glyph of a plaintext pattern.
    ///
    /// `o`, `O`, `*` and `#` mean alive. `.`, `b`, `_` and space mean dead.
    pub(crate) const fn from_glyph(glyph: char) -> Option<Self> {
        match glyph {
            'o' | 'O' | '*' | '#' => Some(Self::Alive),
            '.' | 'b' | '_' | ' ' => Some(Self::Dead),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_glyph() {
        for state in [CellState::Dead, CellState::Alive] {
            assert_eq!(CellState::from_glyph(state.glyph()), Some(state));
        }

        assert_eq!(CellState::from_glyph('#'), Some(CellState::Alive));
        assert_eq!(CellState::from_glyph(' '), Some(CellState::Dead));
        assert_eq!(CellState::from_glyph('x'), None);
    }
}
