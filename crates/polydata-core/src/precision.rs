//! Compact number formatting for diagnostics.
//!
//! Follows the `Number.prototype.toPrecision` rules used by WebKit: `p`
//! significant digits, switching to scientific notation when the decimal
//! exponent is below -2 or at least `p`.

/// Formats `x` with `p` significant digits.
///
/// ```
/// use polydata_core::precision::precision;
/// assert_eq!(precision(3.14159, 3), "3.14");
/// assert_eq!(precision(1234.5, 2), "1.2e+3");
/// ```
#[must_use]
pub fn precision(x: f64, p: usize) -> String {
    precision_in_range(x, p, None)
}

/// Formats `x` with `p` significant digits, printing `"0"` when `|x|` is
/// negligible compared to `vrange`, the range the value lives in.
#[must_use]
pub fn precision_in_range(x: f64, p: usize, vrange: Option<f64>) -> String {
    if !x.is_finite() {
        return x.to_string();
    }
    let p = p.clamp(1, 17);
    let pi = p as i32;

    if x == 0.0 || vrange.is_some_and(|r| x.abs() < r / 10f64.powi(pi)) {
        return "0".to_string();
    }

    let mut out = String::new();
    let mut x = x;
    if x < 0.0 {
        out.push('-');
        x = -x;
    }

    let mut e = x.log10() as i32;
    let mut tens = 10f64.powf(f64::from(e - pi + 1));
    let mut n = (x / tens).floor();

    if n < 10f64.powf(f64::from(pi - 1)) {
        e -= 1;
        tens = 10f64.powf(f64::from(e - pi + 1));
        n = (x / tens).floor();
    }

    if ((n + 1.0) * tens - x).abs() <= (n * tens - x).abs() {
        n += 1.0;
    }

    if n >= 10f64.powf(f64::from(pi)) {
        n /= 10.0;
        e += 1;
    }

    let m = format!("{}", n as u64);

    if e < -2 || e >= pi {
        out.push_str(&m[..1]);
        if p > 1 {
            out.push('.');
            out.push_str(m.get(1..p).unwrap_or(&m[1..]));
        }
        out.push('e');
        if e > 0 {
            out.push('+');
        }
        out.push_str(&e.to_string());
    } else if e == pi - 1 {
        out.push_str(&m);
    } else if e >= 0 {
        let cut = ((e + 1) as usize).min(m.len());
        out.push_str(&m[..cut]);
        if cut < m.len() {
            out.push('.');
            out.push_str(&m[cut..]);
        }
    } else {
        out.push_str("0.");
        out.push_str(&"0".repeat((-(e + 1)) as usize));
        out.push_str(&m);
    }
    out
}

/// Formats a sequence as `"(a, b, c)"`, each value with `p` significant digits.
#[must_use]
pub fn precision_seq(values: &[f64], p: usize) -> String {
    let parts: Vec<String> = values.iter().map(|&v| precision(v, p)).collect();
    format!("({})", parts.join(", "))
}
