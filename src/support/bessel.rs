//! Modified Bessel functions of the first kind.
//!
//! Polynomial approximations from Abramowitz & Stegun (9.8.1 to 9.8.4),
//! accurate to roughly `1e-7` relative error. They are used by the
//! two-dimensional overall heat-transfer correlation.

const BREAK: f64 = 3.75;

/// Modified Bessel function `I₀(x)`.
#[must_use]
pub fn i0(x: f64) -> f64 {
    let ax = x.abs();
    if ax < BREAK {
        let y = (x / BREAK).powi(2);
        1.0 + y
            * (3.515_622_9
                + y * (3.089_942_4
                    + y * (1.206_749_2 + y * (0.265_973_2 + y * (0.036_076_8 + y * 0.004_581_3)))))
    } else {
        let y = BREAK / ax;
        (ax.exp() / ax.sqrt())
            * (0.398_942_28
                + y * (0.013_285_92
                    + y * (0.002_253_19
                        + y * (-0.001_575_65
                            + y * (0.009_162_81
                                + y * (-0.020_577_06
                                    + y * (0.026_355_37
                                        + y * (-0.016_476_33 + y * 0.003_923_77))))))))
    }
}

/// Modified Bessel function `I₁(x)`.
#[must_use]
pub fn i1(x: f64) -> f64 {
    let ax = x.abs();
    let magnitude = if ax < BREAK {
        let y = (x / BREAK).powi(2);
        ax * (0.5
            + y * (0.878_905_94
                + y * (0.514_988_69
                    + y * (0.150_849_34
                        + y * (0.026_587_33 + y * (0.003_015_32 + y * 0.000_324_11))))))
    } else {
        let y = BREAK / ax;
        (ax.exp() / ax.sqrt())
            * (0.398_942_28
                + y * (-0.039_880_24
                    + y * (-0.003_620_18
                        + y * (0.001_638_01
                            + y * (-0.010_315_55
                                + y * (0.022_829_67
                                    + y * (-0.028_953_12
                                        + y * (0.017_876_54 - y * 0.004_200_59))))))))
    };

    if x < 0.0 { -magnitude } else { magnitude }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn values_at_origin() {
        assert_relative_eq!(i0(0.0), 1.0);
        assert_relative_eq!(i1(0.0), 0.0);
    }

    #[test]
    fn small_arguments() {
        assert_relative_eq!(i0(1.0), 1.266_065_878, max_relative = 1e-6);
        assert_relative_eq!(i1(1.0), 0.565_159_104, max_relative = 1e-6);
    }

    #[test]
    fn large_arguments() {
        assert_relative_eq!(i0(5.0), 27.239_871_82, max_relative = 1e-6);
        assert_relative_eq!(i1(5.0), 24.335_642_14, max_relative = 1e-6);
    }

    #[test]
    fn symmetry() {
        assert_relative_eq!(i0(-2.0), i0(2.0));
        assert_relative_eq!(i1(-2.0), -i1(2.0));
        assert_relative_eq!(i1(-4.5), -i1(4.5));
    }
}
