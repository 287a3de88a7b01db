//! Two-operand arithmetic summary.

/// Results of combining two operands. Division by zero is an expected outcome,
/// carried as `quotient: None` instead of an error or an infinite value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Arithmetic {
    pub first: f64,
    pub second: f64,
    pub sum: f64,
    pub difference: f64,
    pub product: f64,
    pub quotient: Option<f64>,
    pub average: f64,
}

impl Arithmetic {
    pub fn compute(first: f64, second: f64) -> Self {
        let quotient = if second != 0.0 {
            Some(first / second)
        } else {
            None
        };

        Self {
            first,
            second,
            sum: first + second,
            difference: first - second,
            product: first * second,
            quotient,
            average: (first + second) / 2.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ten_and_four() {
        let result = Arithmetic::compute(10.0, 4.0);
        assert_eq!(result.sum, 14.0);
        assert_eq!(result.difference, 6.0);
        assert_eq!(result.product, 40.0);
        assert_eq!(result.quotient, Some(2.5));
        assert_eq!(result.average, 7.0);
    }

    #[test]
    fn test_division_by_zero_is_reported_not_computed() {
        let result = Arithmetic::compute(5.0, 0.0);
        assert_eq!(result.quotient, None);
        assert_eq!(result.average, 2.5);
    }

    #[test]
    fn test_negative_zero_divisor_is_still_zero() {
        let result = Arithmetic::compute(1.0, -0.0);
        assert_eq!(result.quotient, None);
    }
}
