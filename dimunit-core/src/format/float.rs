//! printf-compatible rendering of `f64` values.
//!
//! Digits come from Rust's shortest round-trip (`{:e}`) or correctly rounded (`{:.Ne}`) formatting; this module
//! only lays them out. Without a precision every style uses the shortest representation that round-trips.

/// Number layout selected by a verb.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Style {
    /// `d.ddde±XX`
    Exponent { upper: bool },
    /// `ddd.ddd`
    Fixed,
    /// Exponent or fixed, whichever suits the magnitude; trailing zeros removed.
    General { upper: bool },
}

/// Renders `v` in `style`. `precision` is the number of fraction digits for exponent and fixed styles and the
/// number of significant digits for the general style.
pub(crate) fn format_float(v: f64, style: Style, precision: Option<usize>) -> String {
    if v.is_nan() {
        return "NaN".to_owned();
    }
    if v.is_infinite() {
        return if v > 0.0 { "+Inf" } else { "-Inf" }.to_owned();
    }

    let sign = if v.is_sign_negative() { "-" } else { "" };
    let abs = v.abs();
    let body = match style {
        Style::Exponent { upper } => {
            let raw = match precision {
                Some(p) => format!("{abs:.p$e}"),
                None => format!("{abs:e}"),
            };
            let (mantissa, exp) = split_exponent(&raw);
            with_exponent(mantissa, exp, upper)
        }
        Style::Fixed => match precision {
            Some(p) => format!("{abs:.p$}"),
            None => format!("{abs}"),
        },
        Style::General { upper } => general(abs, precision, upper),
    };
    format!("{sign}{body}")
}

/// `%g`: decimal digits of `abs` laid out in exponent form when the exponent is below -4 or at least the
/// precision (6 for shortest), otherwise in fixed form.
fn general(abs: f64, precision: Option<usize>, upper: bool) -> String {
    let raw = match precision {
        Some(p) => format!("{abs:.prec$e}", prec = p.max(1) - 1),
        None => format!("{abs:e}"),
    };
    let (mantissa, exp) = split_exponent(&raw);
    let mut digits: String = mantissa.chars().filter(char::is_ascii_digit).collect();
    while digits.len() > 1 && digits.ends_with('0') {
        digits.pop();
    }

    let nd = digits.len() as i32;
    let dp = exp + 1;
    let eprec = match precision {
        None => 6,
        Some(p) => {
            let p = p.max(1) as i32;
            if p > nd && nd >= dp {
                nd
            } else {
                p
            }
        }
    };

    if exp < -4 || exp >= eprec {
        let mantissa = if digits.len() > 1 {
            format!("{}.{}", &digits[..1], &digits[1..])
        } else {
            digits
        };
        return with_exponent(&mantissa, exp, upper);
    }

    if dp <= 0 {
        format!("0.{}{}", "0".repeat((-dp) as usize), digits)
    } else if dp >= nd {
        format!("{}{}", digits, "0".repeat((dp - nd) as usize))
    } else {
        let (int, frac) = digits.split_at(dp as usize);
        format!("{int}.{frac}")
    }
}

/// Splits Rust's `1.5e-3` form into mantissa and exponent.
fn split_exponent(raw: &str) -> (&str, i32) {
    match raw.split_once('e') {
        Some((mantissa, exp)) => (mantissa, exp.parse().unwrap_or(0)),
        None => (raw, 0),
    }
}

/// Appends an exponent with explicit sign and at least two digits.
fn with_exponent(mantissa: &str, exp: i32, upper: bool) -> String {
    let e = if upper { 'E' } else { 'e' };
    let sign = if exp < 0 { '-' } else { '+' };
    format!("{mantissa}{e}{sign}{:02}", exp.abs())
}
