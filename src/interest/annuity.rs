/// present value of one unit paid at the end of each of `periods` periods
///
/// `(1 - (1 + r)^-n) / r`, taken as its limit `n` when the rate is zero
pub fn present_value_factor(rate: f64, periods: u32) -> f64 {
    let n = periods as f64;
    if rate == 0.0 {
        return n;
    }
    (1.0 - (1.0 + rate).powf(-n)) / rate
}

/// fixed installment that amortizes `principal` over `periods` at `rate`
///
/// `r * P / (1 - (1 + r)^-n)`, or an even split of principal at zero rate.
/// with no periods the whole principal is due as one payment
pub fn installment_for_rate(principal: f64, rate: f64, periods: u32) -> f64 {
    if periods == 0 {
        return principal;
    }
    principal / present_value_factor(rate, periods)
}
