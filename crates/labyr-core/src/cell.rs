//! Cell states.

/// State of a single grid cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Cell {
    /// Passable.
    #[default]
    Open,
    /// Impassable.
    Wall,
}

impl Cell {
    /// Decode the binary matrix encoding: `0` is Open, `1` is Wall.
    ///
    /// Any other value yields `None`.
    pub fn from_bit(bit: u8) -> Option<Self> {
        match bit {
            0 => Some(Self::Open),
            1 => Some(Self::Wall),
            _ => None,
        }
    }

    /// Inverse of [`from_bit`](Self::from_bit).
    pub fn to_bit(self) -> u8 {
        match self {
            Self::Open => 0,
            Self::Wall => 1,
        }
    }

    /// Decode the text encoding: `0` or `.` is Open, `1` or `#` is Wall.
    pub fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            '0' | '.' => Some(Self::Open),
            '1' | '#' => Some(Self::Wall),
            _ => None,
        }
    }

    /// Canonical rendering symbol: `.` for Open, `#` for Wall.
    pub fn symbol(self) -> char {
        match self {
            Self::Open => '.',
            Self::Wall => '#',
        }
    }

    /// Whether the cell can be walked through.
    pub fn is_open(self) -> bool {
        matches!(self, Self::Open)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bit_encoding() {
        assert_eq!(Cell::from_bit(0), Some(Cell::Open));
        assert_eq!(Cell::from_bit(1), Some(Cell::Wall));
        assert_eq!(Cell::from_bit(2), None);
        assert_eq!(Cell::Wall.to_bit(), 1);
        assert_eq!(Cell::Open.to_bit(), 0);
    }

    #[test]
    fn symbol_encoding_accepts_both_alphabets() {
        for (sym, cell) in [('0', Cell::Open), ('.', Cell::Open), ('1', Cell::Wall), ('#', Cell::Wall)] {
            assert_eq!(Cell::from_symbol(sym), Some(cell));
        }
        assert_eq!(Cell::from_symbol('x'), None);
        assert_eq!(Cell::Open.symbol(), '.');
        assert_eq!(Cell::Wall.symbol(), '#');
    }
}
