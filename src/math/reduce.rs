/// Unlike `f64::min`, a single NaN makes the result NaN.
pub fn min_nan<I>(values: I) -> f64
where
    I: IntoIterator<Item = f64>,
{
    let mut out = f64::INFINITY;
    for v in values {
        if v.is_nan() {
            return f64::NAN;
        }
        if v < out {
            out = v;
        }
    }
    out
}

pub fn sum<I>(values: I) -> f64
where
    I: IntoIterator<Item = f64>,
{
    values.into_iter().fold(0.0, |acc, v| acc + v)
}
