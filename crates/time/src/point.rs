//! Mutable 2-D point exposed through accessors.
//!
//! The public `Point` never hands out its fields. Writes go through setters,
//! which is where the finiteness check lives. The private `Coordinates`
//! struct underneath uses plain fields since nothing outside this module can
//! see it.

use wallclock_core::{DomainError, DomainResult};

#[derive(Debug, Clone, Copy, PartialEq)]
struct Coordinates {
    x: f64,
    y: f64,
}

/// A point in the plane with finite coordinates.
///
/// ```
/// use wallclock_time::Point;
///
/// let mut p = Point::new(1.5, -2.0).unwrap();
/// p.set_x(3.0).unwrap();
/// assert_eq!(p.x(), 3.0);
/// assert!(p.set_y(f64::NAN).is_err());
/// assert_eq!(p.to_string(), "(3, -2)");
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    coords: Coordinates,
}

fn finite(axis: &str, value: f64) -> DomainResult<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(DomainError::invalid_argument(format!("{axis}: {value}")))
    }
}

impl Point {
    pub fn new(x: f64, y: f64) -> DomainResult<Self> {
        Ok(Self {
            coords: Coordinates {
                x: finite("X", x)?,
                y: finite("Y", y)?,
            },
        })
    }

    pub fn x(&self) -> f64 {
        self.coords.x
    }

    pub fn y(&self) -> f64 {
        self.coords.y
    }

    /// Replaces the x coordinate. A rejected value leaves the point unchanged.
    pub fn set_x(&mut self, x: f64) -> DomainResult<()> {
        self.coords.x = finite("X", x)?;
        Ok(())
    }

    /// Replaces the y coordinate. A rejected value leaves the point unchanged.
    pub fn set_y(&mut self, y: f64) -> DomainResult<()> {
        self.coords.y = finite("Y", y)?;
        Ok(())
    }
}

impl core::fmt::Display for Point {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "({}, {})", self.coords.x, self.coords.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accessors_return_constructed_coordinates() {
        let p = Point::new(1.5, -2.0).unwrap();
        assert_eq!(p.x(), 1.5);
        assert_eq!(p.y(), -2.0);
        assert_eq!(p.to_string(), "(1.5, -2)");
    }

    #[test]
    fn setters_replace_coordinates() {
        let mut p = Point::new(0.0, 0.0).unwrap();
        p.set_x(4.0).unwrap();
        p.set_y(-7.25).unwrap();
        assert_eq!((p.x(), p.y()), (4.0, -7.25));
    }

    #[test]
    fn non_finite_constructor_input_is_rejected() {
        let err = Point::new(f64::INFINITY, 0.0).unwrap_err();
        assert_eq!(err.message(), "X: inf");

        let err = Point::new(0.0, f64::NEG_INFINITY).unwrap_err();
        assert_eq!(err.message(), "Y: -inf");
    }

    #[test]
    fn rejected_setter_leaves_point_unchanged() {
        let mut p = Point::new(2.0, 3.0).unwrap();
        let before = p;

        let err = p.set_x(f64::NAN).unwrap_err();
        match err {
            DomainError::InvalidArgument(msg) => assert_eq!(msg, "X: NaN"),
        }
        assert!(p.set_y(f64::INFINITY).is_err());
        assert_eq!(p, before);
    }
}
