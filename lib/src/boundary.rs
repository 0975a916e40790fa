use crate::grid::Coord;
#[cfg(feature = "clap")]
use clap::ValueEnum;
use strum::{Display, EnumIter, EnumString};

/// How neighbors outside the grid are treated.
///
/// The policy is chosen by the caller and passed to every step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, EnumIter, EnumString)]
#[strum(ascii_case_insensitive)]
#[cfg_attr(feature = "clap", derive(ValueEnum))]
pub enum Boundary {
    /// Cells outside the grid are permanently dead.
    ///
    /// Denoted by `dead-border`.
    #[default]
    #[strum(to_string = "dead-border", serialize = "dead", serialize = "clipped")]
    #[cfg_attr(feature = "clap", value(name = "dead-border", aliases = ["dead", "clipped"]))]
    DeadBorder,

    /// The grid wraps around at its edges, so that it behaves as a torus.
    ///
    /// Denoted by `toroidal`.
    #[strum(to_string = "toroidal", serialize = "torus", serialize = "wrap")]
    #[cfg_attr(feature = "clap", value(name = "toroidal", aliases = ["torus", "wrap"]))]
    Toroidal,
}

impl Boundary {
    /// Resolve the neighbor of `coord` at the given offset in a `width` by `height` grid.
    ///
    /// Returns [`None`] if the neighbor is clipped out, i.e. it is outside the grid
    /// under the [`DeadBorder`](Boundary::DeadBorder) policy, or the grid is empty.
    pub fn resolve(self, coord: Coord, offset: Coord, width: usize, height: usize) -> Option<Coord> {
        if width == 0 || height == 0 {
            return None;
        }

        let (w, h) = (width as isize, height as isize);
        let (x, y) = (coord.0 + offset.0, coord.1 + offset.1);

        match self {
            Self::DeadBorder => ((0..w).contains(&x) && (0..h).contains(&y)).then_some((x, y)),
            Self::Toroidal => Some((x.rem_euclid(w), y.rem_euclid(h))),
        }
    }
}
