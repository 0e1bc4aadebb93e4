/// A position in a 2D coordinate system.
///
/// The axis order is defined by the provider that created the position. DWD
/// stations store longitude in `x1` and latitude in `x2`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Position2D {
    pub x1: f64,
    pub x2: f64,
}

impl Position2D {
    pub fn new(x1: f64, x2: f64) -> Self {
        Self { x1, x2 }
    }
}
