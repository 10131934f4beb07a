//! Just the `Pos` type.

use core::{
    fmt,
    ops::{Add, AddAssign, Sub, SubAssign},
};

/// A cell position (or offset), with an X (column) and a Y (row) component.
///
/// Unlike a screen size, a position can be anywhere, including off the top or left of the screen, so both components
/// are signed. Writes to positions outside the screen are simply dropped by the backends.
///
/// You can add and subtract `Pos`es elementwise (e.g. `Pos(2, 3) + Pos(4, 5) == Pos(6, 8)`), or with scalars, which
/// apply to both components (e.g. `Pos(2, 3) - 1 == Pos(1, 2)`). Arithmetic saturates at the `isize` limits, which are
/// far off-screen anyway.
///
/// `Pos(0, 0)` is at the top left of the screen, and `Pos(0, 1)` is just below it -- the usual "graphics axes".
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Pos(pub isize, pub isize);

impl Pos {
    /// The X component, i.e. the column
    pub const fn x(&self) -> isize {
        self.0
    }

    /// The Y component, i.e. the row
    pub const fn y(&self) -> isize {
        self.1
    }

    /// If this position is inside a grid of the given size, the index of its cell in row-major order.
    pub fn index_in(&self, size: Pos) -> Option<usize> {
        if self.0 < 0 || self.1 < 0 || self.0 >= size.0 || self.1 >= size.1 {
            return None;
        }
        Some((self.1 * size.0 + self.0) as usize)
    }
}

macro_rules! pos_op {
    ( $(
        $trait:ident($fn:ident) => $sat:ident
    );* $(;)? ) => {
        $(
            impl $trait for Pos {
                type Output = Pos;
                #[cfg_attr(coverage, no_coverage)]
                fn $fn(self, rhs: Pos) -> Pos {
                    Pos(self.0.$sat(rhs.0), self.1.$sat(rhs.1))
                }
            }

            impl $trait<(isize, isize)> for Pos {
                type Output = Pos;
                #[cfg_attr(coverage, no_coverage)]
                fn $fn(self, rhs: (isize, isize)) -> Pos {
                    Pos(self.0.$sat(rhs.0), self.1.$sat(rhs.1))
                }
            }

            impl $trait<isize> for Pos {
                type Output = Pos;
                #[cfg_attr(coverage, no_coverage)]
                fn $fn(self, rhs: isize) -> Pos {
                    Pos(self.0.$sat(rhs), self.1.$sat(rhs))
                }
            }

            paste::paste! {
                impl [< $trait Assign >] for Pos {
                    #[cfg_attr(coverage, no_coverage)]
                    fn [< $fn _assign >] (&mut self, rhs: Pos) {
                        *self = $trait::$fn(*self, rhs);
                    }
                }
                impl [< $trait Assign >] <(isize, isize)> for Pos {
                    #[cfg_attr(coverage, no_coverage)]
                    fn [< $fn _assign >] (&mut self, rhs: (isize, isize)) {
                        *self = $trait::$fn(*self, rhs);
                    }
                }
            }
        )*
    };
}

pos_op! {
    Add(add) => saturating_add;
    Sub(sub) => saturating_sub;
}

impl fmt::Display for Pos {
    #[cfg_attr(coverage, no_coverage)]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.0, self.1)
    }
}

impl fmt::Debug for Pos {
    #[cfg_attr(coverage, no_coverage)]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Pos({}, {})", self.0, self.1)
    }
}

impl From<(isize, isize)> for Pos {
    #[cfg_attr(coverage, no_coverage)]
    fn from(f: (isize, isize)) -> Pos {
        Pos(f.0, f.1)
    }
}

impl From<Pos> for (isize, isize) {
    #[cfg_attr(coverage, no_coverage)]
    fn from(val: Pos) -> Self {
        (val.0, val.1)
    }
}
