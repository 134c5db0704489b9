use crate::misc::FloatingPoint;

/// Fresnel integrals `C(x) = int cos(pi/2 t^2) dt` and `S(x) = int sin(pi/2 t^2) dt`
/// over `[0, x]`, the basis of the clothoid plan-view geometry.
///
/// Small arguments are summed by the power series, large arguments by the
/// asymptotic auxiliary series around `C, S -> 1/2`. The crossover at 3.2 keeps
/// the series cancellation and the asymptotic truncation error both below the
/// geometric tolerances used here.
pub fn fresnel<T: FloatingPoint>(x: T) -> (T, T) {
    let magnitude = x.abs();
    let threshold = T::from_f64(3.2).unwrap();
    let (c, s) = if magnitude <= threshold {
        fresnel_power_series(magnitude)
    } else {
        fresnel_asymptotic(magnitude)
    };
    if x < T::zero() {
        (-c, -s)
    } else {
        (c, s)
    }
}

fn fresnel_power_series<T: FloatingPoint>(x: T) -> (T, T) {
    let half_pi = T::pi() / T::from_f64(2.0).unwrap();
    let u = half_pi * x * x;
    let u_squared = u * u;
    let cutoff = T::from_f64(1e-18).unwrap();

    // C(x) = x * sum (-1)^n u^(2n) / ((2n)! (4n+1))
    // S(x) = x * sum (-1)^n u^(2n+1) / ((2n+1)! (4n+3))
    let mut c_term = T::one();
    let mut s_term = u;
    let mut c_sum = T::zero();
    let mut s_sum = T::zero();
    for n in 0..64usize {
        let four_n = T::from_usize(4 * n).unwrap();
        c_sum += c_term / (four_n + T::one());
        s_sum += s_term / (four_n + T::from_f64(3.0).unwrap());
        if c_term.abs() < cutoff && s_term.abs() < cutoff {
            break;
        }
        let two_n = T::from_usize(2 * n).unwrap();
        let two = T::from_f64(2.0).unwrap();
        let three = T::from_f64(3.0).unwrap();
        c_term = -c_term * u_squared / ((two_n + T::one()) * (two_n + two));
        s_term = -s_term * u_squared / ((two_n + two) * (two_n + three));
    }
    (x * c_sum, x * s_sum)
}

fn fresnel_asymptotic<T: FloatingPoint>(x: T) -> (T, T) {
    let half = T::from_f64(0.5).unwrap();
    let z = T::pi() * half * x * x;
    let w = T::one() / (T::pi() * x * x);
    let w_squared = w * w;
    let scale = T::one() / (T::pi() * x);

    // f ~ scale * sum (-1)^m (4m-1)!! w^(2m),  g ~ scale * sum (-1)^m (4m+1)!! w^(2m+1);
    // both summed until the terms stop decreasing.
    let mut f = T::zero();
    let mut g = T::zero();
    let mut f_term = T::one();
    let mut g_term = w;
    for m in 0..16usize {
        f += f_term;
        g += g_term;
        let four_m = 4 * m;
        let next_f =
            -f_term * w_squared * T::from_usize((four_m + 1) * (four_m + 3)).unwrap();
        let next_g =
            -g_term * w_squared * T::from_usize((four_m + 3) * (four_m + 5)).unwrap();
        if next_f.abs() >= f_term.abs() || next_g.abs() >= g_term.abs() {
            break;
        }
        f_term = next_f;
        g_term = next_g;
    }
    f *= scale;
    g *= scale;

    let (sin_z, cos_z) = (z.sin(), z.cos());
    let c = half + f * sin_z - g * cos_z;
    let s = half - f * cos_z - g * sin_z;
    (c, s)
}
