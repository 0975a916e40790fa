use thiserror::Error;

/// An error that can occur when building or reading a grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum GridError {
    /// The width or the height is negative, or the grid has too many cells.
    #[error("Invalid grid dimensions {width}x{height}")]
    InvalidDimension {
        /// The requested width.
        width: isize,
        /// The requested height.
        height: isize,
    },

    /// The coordinate is outside the grid.
    #[error("The coordinate ({x}, {y}) is outside the {width}x{height} grid")]
    OutOfRangeCoordinate {
        /// The horizontal coordinate.
        x: isize,
        /// The vertical coordinate.
        y: isize,
        /// The width of the grid.
        width: usize,
        /// The height of the grid.
        height: usize,
    },
}

/// An error that can occur when parsing a plaintext pattern.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum ParseGridError {
    /// The pattern contains a character that is neither a live nor a dead glyph.
    #[error("Invalid glyph {glyph:?} at line {line}, column {column}")]
    InvalidGlyph {
        /// The offending character.
        glyph: char,
        /// The line number, starting from 1.
        line: usize,
        /// The column number, starting from 1.
        column: usize,
    },
}

/// An error that can occur when parsing a coordinate of the form `X,Y`.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("Invalid coordinate {0:?}, expected X,Y")]
pub struct ParseCoordError(pub String);

/// An error that can occur when initializing a simulation from a configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// The width or height is zero.
    #[error("The width or height is zero")]
    InvalidSize,

    /// The densities are not percentages, or the minimum is larger than the maximum.
    #[error("The densities must satisfy 0 <= min <= max <= 100")]
    InvalidDensity,

    /// The pattern does not fit in the grid.
    #[error("The pattern does not fit in the grid")]
    PatternTooLarge,

    /// A live cell is outside the grid.
    #[error(transparent)]
    Grid(#[from] GridError),

    /// The pattern cannot be parsed.
    #[error(transparent)]
    Pattern(#[from] ParseGridError),
}
