use std::{fmt::Display, ops};

use ordered_float::OrderedFloat;

/// `0.0` as a complex number.
pub const ZERO: ComplexNumber = ComplexNumber::new(0.0, 0.0);
/// `1.0` as a complex number.
pub const ONE: ComplexNumber = ComplexNumber::new(1.0, 0.0);
/// The imaginary unit.
pub const I: ComplexNumber = ComplexNumber::new(0.0, 1.0);

/// Represents a complex number with real and imaginary parts.
#[derive(Debug, Clone, Copy)]
pub struct ComplexNumber {
    /// The real part of the number.
    pub real:      f64,
    /// The imaginary part of the number.
    pub imaginary: f64,
}

impl Display for ComplexNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match (self.real, self.imaginary) {
            (0.0, 0.0) => write!(f, "0"),
            (real, 0.0) => write!(f, "{real}"),
            (0.0, imaginary) => write!(f, "{imaginary}i",),
            (real, imaginary) if imaginary > 0.0 => write!(f, "{real} + {imaginary}i"),
            (real, imaginary) => write!(f, "{real} - {}i", -imaginary),
        }
    }
}

impl ComplexNumber {
    /// Constructs a new complex number from real and imaginary components.
    ///
    /// # Example
    /// ```
    /// use graph_gen::interpreter::value::ComplexNumber;
    /// let c = ComplexNumber::new(5.0, -1.0);
    /// assert_eq!(c.real, 5.0);
    /// assert_eq!(c.imaginary, -1.0);
    /// ```
    #[must_use]
    pub const fn new(real: f64, imaginary: f64) -> Self {
        Self { real, imaginary }
    }

    /// Whether the imaginary part is exactly zero.
    #[must_use]
    pub const fn is_real(&self) -> bool {
        self.imaginary == 0.0
    }

    /// Whether both parts are exactly zero.
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.real == 0.0 && self.imaginary == 0.0
    }

    /// Whether both parts are finite.
    #[must_use]
    pub const fn is_finite(&self) -> bool {
        self.real.is_finite() && self.imaginary.is_finite()
    }

    /// Returns the absolute value (magnitude) of the complex number.
    ///
    /// # Example
    /// ```
    /// use graph_gen::interpreter::value::ComplexNumber;
    /// let c = ComplexNumber::new(3.0, 4.0);
    /// assert_eq!(c.abs(), 5.0);
    /// ```
    #[must_use]
    pub fn abs(&self) -> f64 {
        self.real.hypot(self.imaginary)
    }

    /// Returns the argument (phase angle) in radians.
    #[must_use]
    pub fn arg(self) -> f64 {
        self.imaginary.atan2(self.real)
    }

    /// Returns the reciprocal (1/z) of the complex number.
    #[must_use]
    pub const fn recip(&self) -> Self {
        let coj_squared = self.real * self.real + self.imaginary * self.imaginary;

        Self { real:      self.real / coj_squared,
               imaginary: -(self.imaginary / coj_squared), }
    }

    /// Raises the complex number to an integer power by repeated squaring.
    ///
    /// Returns `None` when an intermediate result stops being finite, or when
    /// zero is raised to a negative power.
    ///
    /// # Example
    /// ```
    /// use graph_gen::interpreter::value::{ComplexNumber, complex::ONE};
    /// let c = ComplexNumber::new(2.0, 0.0);
    /// assert_eq!(c.checked_powi(0), Some(ONE));
    /// assert_eq!(c.checked_powi(3), Some(ComplexNumber::new(8.0, 0.0)));
    /// assert_eq!(ComplexNumber::new(0.0, 0.0).checked_powi(-1), None);
    /// ```
    #[must_use]
    pub fn checked_powi(self, exp: i64) -> Option<Self> {
        if exp == 0 {
            return Some(ONE);
        }

        if self.is_zero() && exp < 0 {
            return None;
        }

        let mut base = self;
        let mut result = ONE;
        let mut n = exp.unsigned_abs();

        while n > 0 {
            if n % 2 == 1 {
                result *= base;
                if !result.is_finite() {
                    return None;
                }
            }
            n /= 2;
            if n > 0 {
                base = base * base;
                if !base.is_finite() {
                    return None;
                }
            }
        }

        if exp < 0 {
            result = result.recip();
        }

        result.is_finite().then_some(result)
    }

    /// Principal value of `self ^ exp` for an arbitrary complex exponent.
    ///
    /// The base must not be zero.
    #[must_use]
    pub fn powc(self, exp: Self) -> Self {
        (exp * self.ln()).exp()
    }

    /// Returns the exponential of the complex number.
    #[must_use]
    pub fn exp(self) -> Self {
        let exp_r = self.real.exp();
        Self { real:      exp_r * self.imaginary.cos(),
               imaginary: exp_r * self.imaginary.sin(), }
    }

    /// Returns the natural logarithm (ln) of the complex number.
    ///
    /// # Example
    /// ```
    /// use graph_gen::interpreter::value::ComplexNumber;
    /// let z = ComplexNumber::new(1.0, 0.0);
    /// let ln = z.ln();
    /// assert!((ln.real).abs() < 1e-10); // ln(1) == 0
    /// assert!((ln.imaginary).abs() < 1e-10);
    /// ```
    #[must_use]
    pub fn ln(self) -> Self {
        Self { real:      self.abs().ln(),
               imaginary: self.arg(), }
    }
}

impl ops::Neg for ComplexNumber {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self { real:      -self.real,
               imaginary: -self.imaginary, }
    }
}

impl ops::Add for ComplexNumber {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self { real:      self.real + rhs.real,
               imaginary: self.imaginary + rhs.imaginary, }
    }
}

impl ops::Sub for ComplexNumber {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self { real:      self.real - rhs.real,
               imaginary: self.imaginary - rhs.imaginary, }
    }
}

impl ops::Mul for ComplexNumber {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        Self { real:      self.real
                              .mul_add(rhs.real, -(self.imaginary * rhs.imaginary)),
               imaginary: self.real.mul_add(rhs.imaginary, self.imaginary * rhs.real), }
    }
}

impl ops::MulAssign for ComplexNumber {
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl ops::Div for ComplexNumber {
    type Output = Self;

    fn div(self, rhs: Self) -> Self::Output {
        if rhs.is_real() {
            return Self { real:      self.real / rhs.real,
                          imaginary: self.imaginary / rhs.real, };
        }
        let denom = rhs.real.mul_add(rhs.real, rhs.imaginary * rhs.imaginary);
        Self { real:      self.real.mul_add(rhs.real, self.imaginary * rhs.imaginary) / denom,
               imaginary: self.imaginary
                              .mul_add(rhs.real, -(self.real * rhs.imaginary))
                          / denom, }
    }
}

impl From<f64> for ComplexNumber {
    fn from(value: f64) -> Self {
        Self { real:      value,
               imaginary: 0.0, }
    }
}

impl PartialEq for ComplexNumber {
    fn eq(&self, other: &Self) -> bool {
        OrderedFloat(self.real) == OrderedFloat(other.real)
        && OrderedFloat(self.imaginary) == OrderedFloat(other.imaginary)
    }
}

impl Eq for ComplexNumber {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integer_powers_are_exact() {
        assert_eq!(ComplexNumber::from(2.0).checked_powi(10),
                   Some(ComplexNumber::from(1024.0)));
        assert_eq!(I.checked_powi(2), Some(ComplexNumber::new(-1.0, 0.0)));
        assert_eq!(ComplexNumber::from(2.0).checked_powi(-2),
                   Some(ComplexNumber::from(0.25)));
    }

    #[test]
    fn integer_power_overflow_is_detected() {
        assert_eq!(ComplexNumber::from(10.0).checked_powi(400), None);
    }

    #[test]
    fn complex_power_of_i() {
        // i^i = e^(-pi/2)
        let r = I.powc(I);
        assert!((r.real - (-std::f64::consts::FRAC_PI_2).exp()).abs() < 1e-12);
        assert!(r.imaginary.abs() < 1e-12);
    }

    #[test]
    fn division_by_real_keeps_parts_separate() {
        let q = ComplexNumber::new(3.0, 6.0) / ComplexNumber::from(3.0);
        assert_eq!(q, ComplexNumber::new(1.0, 2.0));
    }

    #[test]
    fn display_forms() {
        assert_eq!(ZERO.to_string(), "0");
        assert_eq!(ComplexNumber::new(1.5, 0.0).to_string(), "1.5");
        assert_eq!(ComplexNumber::new(0.0, 2.0).to_string(), "2i");
        assert_eq!(ComplexNumber::new(1.0, -2.0).to_string(), "1 - 2i");
    }
}
