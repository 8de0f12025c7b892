//! The standard catalog entries.

use newton_core::DomainError;

use crate::FunctionSpec;

/// `x³ - x - 2`, with a single real root near `1.5214`.
pub const POLYNOMIAL: FunctionSpec = FunctionSpec::new(
    "polynomial",
    "Polynomial: x³ - x - 2",
    |x| Ok(x.powi(3) - x - 2.0),
    |x| Ok(3.0 * x * x - 1.0),
);

/// `cos(x) - x`, with its root (the Dottie number) near `0.7391`.
pub const TRIGONOMETRIC: FunctionSpec = FunctionSpec::new(
    "trigonometric",
    "Trigonometric: cos(x) - x",
    |x| Ok(x.cos() - x),
    |x| Ok(-x.sin() - 1.0),
);

/// `eˣ - 3x`, with roots near `0.6191` and `1.5121`.
pub const EXPONENTIAL: FunctionSpec = FunctionSpec::new(
    "exponential",
    "Exponential: e^x - 3x",
    |x| DomainError::check_finite(x, x.exp() - 3.0 * x),
    |x| DomainError::check_finite(x, x.exp() - 3.0),
);

/// `ln(x) + x² - 3`, defined for `x > 0`, with its root near `1.5921`.
pub const LOGARITHMIC: FunctionSpec = FunctionSpec::new(
    "logarithmic",
    "Logarithmic: ln(x) + x² - 3",
    logarithmic,
    logarithmic_derivative,
);

/// All standard entries, in display order.
pub const ALL: [FunctionSpec; 4] = [POLYNOMIAL, TRIGONOMETRIC, EXPONENTIAL, LOGARITHMIC];

fn logarithmic(x: f64) -> Result<f64, DomainError> {
    if x <= 0.0 {
        return Err(DomainError::undefined(x, "ln(x) requires x > 0"));
    }
    Ok(x.ln() + x * x - 3.0)
}

fn logarithmic_derivative(x: f64) -> Result<f64, DomainError> {
    #[allow(clippy::float_cmp)]
    if x == 0.0 {
        return Err(DomainError::undefined(x, "1/x requires x != 0"));
    }
    Ok(1.0 / x + 2.0 * x)
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use newton_core::Differentiable;
    use newton_solvers::equation::newton::{self, Config, Status};

    /// Central finite difference of `spec`'s value at `x`.
    fn numeric_derivative(spec: &FunctionSpec, x: f64) -> f64 {
        let h = 1e-6;
        let ahead = spec.value(x + h).expect("defined");
        let behind = spec.value(x - h).expect("defined");
        (ahead - behind) / (2.0 * h)
    }

    #[test]
    fn derivatives_match_finite_differences() {
        for spec in &ALL {
            for x in [0.3, 0.9, 1.5, 2.7] {
                let analytic = spec.derivative(x).expect("defined");
                assert_relative_eq!(
                    analytic,
                    numeric_derivative(spec, x),
                    epsilon = 1e-5,
                    max_relative = 1e-6
                );
            }
        }
    }

    #[test]
    fn logarithmic_rejects_non_positive_arguments() {
        assert!(matches!(
            LOGARITHMIC.value(0.0),
            Err(DomainError::Undefined { .. })
        ));
        assert!(matches!(
            LOGARITHMIC.value(-1.0),
            Err(DomainError::Undefined { .. })
        ));
        assert!(matches!(
            LOGARITHMIC.derivative(0.0),
            Err(DomainError::Undefined { .. })
        ));
    }

    #[test]
    fn exponential_reports_overflow() {
        assert!(matches!(
            EXPONENTIAL.value(1000.0),
            Err(DomainError::NonFinite { .. })
        ));
    }

    #[test]
    fn every_entry_converges_from_default_guess() {
        let config = Config::new(50, 1e-10).expect("valid config");

        for spec in &ALL {
            let run = newton::solve_unobserved(spec, newton::DEFAULT_INITIAL_GUESS, &config);

            assert_eq!(run.status(), Status::Converged, "{spec}");
            let root = run.root().expect("converged root");
            assert_relative_eq!(spec.value(root).expect("defined"), 0.0, epsilon = 1e-9);
        }
    }

    #[test]
    fn known_roots() {
        let config = Config::new(50, 1e-12).expect("valid config");
        let cases = [
            (POLYNOMIAL, 1.5, 1.521_379_706_804_567),
            (TRIGONOMETRIC, 1.0, 0.739_085_133_215_160_6),
            (EXPONENTIAL, 0.0, 0.619_061_286_735_945),
            (LOGARITHMIC, 1.0, 1.592_142_937_058_094),
        ];

        for (spec, x0, expected) in cases {
            let run = newton::solve_unobserved(&spec, x0, &config);
            assert_relative_eq!(run.root().expect("root"), expected, epsilon = 1e-9);
        }
    }

    #[test]
    fn logarithmic_from_negative_guess_is_a_domain_error() {
        let run = newton::solve_unobserved(&LOGARITHMIC, -1.0, &Config::default());

        assert_eq!(run.status(), Status::DomainError);
        assert!(run.records().is_empty());
    }
}
