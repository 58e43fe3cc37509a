#[inline]
pub fn fmod(x: f64, y: f64) -> f64 {
    libm::fmod(x, y)
}

#[inline]
pub fn floor(x: f64) -> f64 {
    libm::floor(x)
}

/// Number of decimal digits in the integer part of a non-negative `x`.
///
/// Zero and values below one count as a single digit. Infinity counts as
/// one more digit than `f64::MAX` has.
#[inline]
pub fn integer_digits(x: f64) -> usize {
    if !x.is_finite() {
        return f64::MAX_10_EXP as usize + 1;
    }
    if x < 10.0 {
        return 1;
    }
    let d = libm::floor(libm::log10(x)) as usize + 1;
    // log10 can land one short just below a power of ten and vice versa.
    if 10f64.powi(d as i32 - 1) > x {
        d - 1
    } else if 10f64.powi(d as i32) <= x {
        d + 1
    } else {
        d
    }
}

#[inline]
pub fn u64_digits(mut n: u64) -> usize {
    let mut d = 1;
    while n >= 10 {
        n /= 10;
        d += 1;
    }
    d
}
