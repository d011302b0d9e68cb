//! printf-style formatting of quantities.
//!
//! A quantity renders as `"<number> <dimensions>"`, or just the number when it is dimensionless. The number is
//! laid out according to a verb:
//!
//! | verb       | layout                                   |
//! |------------|------------------------------------------|
//! | `v`        | shortest general form                    |
//! | `e`, `E`   | exponent form                            |
//! | `f`, `F`   | fixed-point form                         |
//! | `g`, `G`   | general form (exponent for large/small)  |
//!
//! Width and precision apply to the number only. `%#v` produces a type-tagged literal such as `Length(1.5)`, and
//! any other verb produces a diagnostic like `%!s(Quantity=1.5 m^2)`.
//!
//! ```rust
//! use dimunit_core::{dims, FormatSpec, HasDimensions, Quantity};
//!
//! let g = Quantity::new(9.81, dims::KILOGRAM.with(dimunit_core::BaseDimension::Time, -2));
//! assert_eq!(g.format(&"%.1f".parse::<FormatSpec>()?), "9.8 kg s^-2");
//! assert_eq!(format!("{g}"), "9.81 kg s^-2");
//! # Ok::<(), dimunit_core::FormatError>(())
//! ```

mod float;

use crate::quantity::Quantity;
use crate::typed::named_type;
use core::fmt::{self, Display, Formatter, LowerExp, UpperExp};
use core::iter::Peekable;
use core::str::{Chars, FromStr};
use float::{format_float, Style};

/// Verb to number-layout table.
const VERBS: [(char, Style); 7] = [
    ('v', Style::General { upper: false }),
    ('e', Style::Exponent { upper: false }),
    ('E', Style::Exponent { upper: true }),
    ('f', Style::Fixed),
    ('F', Style::Fixed),
    ('g', Style::General { upper: false }),
    ('G', Style::General { upper: true }),
];

fn style_for(verb: char) -> Option<Style> {
    VERBS.iter().find(|(v, _)| *v == verb).map(|(_, style)| *style)
}

/// Error returned when a printf directive cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormatError {
    /// The directive does not start with `%`.
    #[error("format directive must start with '%': {0:?}")]
    MissingPercent(String),

    /// The directive ends before the verb.
    #[error("format directive has no verb: {0:?}")]
    MissingVerb(String),

    /// Only the `#` flag is understood.
    #[error("unsupported flag {flag:?} in {directive:?}")]
    UnsupportedFlag {
        /// The offending flag character.
        flag: char,
        /// The directive being parsed.
        directive: String,
    },

    /// Something follows the verb.
    #[error("trailing characters after verb in {0:?}")]
    TrailingCharacters(String),

    /// Width or precision does not fit in `usize`.
    #[error("width or precision out of range in {0:?}")]
    OutOfRange(String),
}

/// A parsed printf directive: verb, optional width and precision, and the `#` flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatSpec {
    /// Conversion character.
    pub verb: char,
    /// Minimum width of the numeric part.
    pub width: Option<usize>,
    /// Precision of the numeric part.
    pub precision: Option<usize>,
    /// The `#` flag.
    pub alternate: bool,
}

impl FormatSpec {
    /// Spec for `verb` with no width, precision or flags.
    pub const fn new(verb: char) -> Self {
        Self {
            verb,
            width: None,
            precision: None,
            alternate: false,
        }
    }

    /// Sets the width.
    pub const fn with_width(mut self, width: usize) -> Self {
        self.width = Some(width);
        self
    }

    /// Sets the precision.
    pub const fn with_precision(mut self, precision: usize) -> Self {
        self.precision = Some(precision);
        self
    }

    /// Sets the `#` flag.
    pub const fn with_alternate(mut self) -> Self {
        self.alternate = true;
        self
    }

    /// `true` when the verb is one of the supported number verbs.
    pub fn is_supported(&self) -> bool {
        style_for(self.verb).is_some()
    }
}

impl Default for FormatSpec {
    fn default() -> Self {
        Self::new('v')
    }
}

impl FromStr for FormatSpec {
    type Err = FormatError;

    /// Parses `%[#][width][.precision]verb`. An empty precision after `.` means zero.
    fn from_str(directive: &str) -> Result<Self, FormatError> {
        let rest = directive
            .strip_prefix('%')
            .ok_or_else(|| FormatError::MissingPercent(directive.to_owned()))?;

        let mut spec = FormatSpec::default();
        let mut chars = rest.chars().peekable();

        while let Some(&c) = chars.peek() {
            match c {
                '#' => spec.alternate = true,
                '+' | '-' | ' ' | '0' => {
                    return Err(FormatError::UnsupportedFlag {
                        flag: c,
                        directive: directive.to_owned(),
                    })
                }
                _ => break,
            }
            chars.next();
        }

        spec.width = parse_count(&mut chars, directive)?;
        if chars.peek() == Some(&'.') {
            chars.next();
            spec.precision = Some(parse_count(&mut chars, directive)?.unwrap_or(0));
        }

        spec.verb = chars
            .next()
            .ok_or_else(|| FormatError::MissingVerb(directive.to_owned()))?;
        if chars.next().is_some() {
            return Err(FormatError::TrailingCharacters(directive.to_owned()));
        }
        Ok(spec)
    }
}

/// Consumes a run of decimal digits.
fn parse_count(chars: &mut Peekable<Chars<'_>>, directive: &str) -> Result<Option<usize>, FormatError> {
    let mut value: Option<usize> = None;
    while let Some(d) = chars.peek().and_then(|c| c.to_digit(10)) {
        let next = value
            .unwrap_or(0)
            .checked_mul(10)
            .and_then(|v| v.checked_add(d as usize))
            .ok_or_else(|| FormatError::OutOfRange(directive.to_owned()))?;
        value = Some(next);
        chars.next();
    }
    Ok(value)
}

/// Renders `q` according to `spec`.
pub(crate) fn format_quantity(q: &Quantity, spec: &FormatSpec) -> String {
    if spec.verb == 'v' && spec.alternate {
        return go_syntax(q);
    }
    match style_for(spec.verb) {
        Some(style) => {
            let number = pad(format_float(q.value(), style, spec.precision), spec.width);
            with_dimensions(number, q)
        }
        None => bad_verb(q, spec.verb),
    }
}

/// `Length(1.5)` for quantities whose dimensions name a typed quantity, the `Debug` dump otherwise.
fn go_syntax(q: &Quantity) -> String {
    match named_type(&q.dimensions()) {
        Some(name) => format!("{name}({})", shortest(q.value())),
        None => format!("{q:?}"),
    }
}

fn bad_verb(q: &Quantity, verb: char) -> String {
    let name = named_type(&q.dimensions()).unwrap_or("Quantity");
    let rendered = with_dimensions(shortest(q.value()), q);
    format!("%!{verb}({name}={rendered})")
}

fn shortest(v: f64) -> String {
    format_float(v, Style::General { upper: false }, None)
}

fn with_dimensions(number: String, q: &Quantity) -> String {
    if q.is_dimensionless() {
        number
    } else {
        format!("{number} {}", q.dimensions())
    }
}

fn pad(number: String, width: Option<usize>) -> String {
    match width {
        Some(w) if number.len() < w => format!("{number:>w$}"),
        _ => number,
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// core::fmt integration
// ─────────────────────────────────────────────────────────────────────────────

/// `{}` is `%v`, `{:.N}` is `%.Nf`, `{:#}` is `%#v`; width applies to the number.
impl Display for Quantity {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let spec = FormatSpec {
            verb: if f.precision().is_some() { 'f' } else { 'v' },
            width: f.width(),
            precision: f.precision(),
            alternate: f.alternate(),
        };
        f.write_str(&format_quantity(self, &spec))
    }
}

impl LowerExp for Quantity {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let spec = FormatSpec {
            verb: 'e',
            width: f.width(),
            precision: f.precision(),
            alternate: false,
        };
        f.write_str(&format_quantity(self, &spec))
    }
}

impl UpperExp for Quantity {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let spec = FormatSpec {
            verb: 'E',
            width: f.width(),
            precision: f.precision(),
            alternate: false,
        };
        f.write_str(&format_quantity(self, &spec))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dimension::{dims, BaseDimension, DimensionVector};

    fn spec(directive: &str) -> FormatSpec {
        directive.parse().unwrap()
    }

    fn planck() -> Quantity {
        Quantity::new(
            6.62606957e-34,
            DimensionVector::of(BaseDimension::Mass, 2).with(BaseDimension::Time, -1),
        )
    }

    fn gravity() -> Quantity {
        Quantity::new(9.81, DimensionVector::of(BaseDimension::Mass, 1).with(BaseDimension::Time, -2))
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Golden table
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn golden_format_table() {
        let e = Quantity::dimensionless(core::f64::consts::E);
        let cases = [
            (gravity(), "%f", "9.81 kg s^-2"),
            (gravity(), "%1.f", "10 kg s^-2"),
            (gravity(), "%.1f", "9.8 kg s^-2"),
            (planck(), "%e", "6.62606957e-34 kg^2 s^-1"),
            (planck(), "%.3e", "6.626e-34 kg^2 s^-1"),
            (planck(), "%v", "6.62606957e-34 kg^2 s^-1"),
            (planck(), "%s", "%!s(Quantity=6.62606957e-34 kg^2 s^-1)"),
            (e, "%v", "2.718281828459045"),
            (e, "%#v", "Dimless(2.718281828459045)"),
            (e, "%s", "%!s(Dimless=2.718281828459045)"),
            (Quantity::new(1.0, dims::KILOGRAM), "%v", "1 kg"),
            (Quantity::new(1.0, dims::KILOGRAM), "%#v", "Mass(1)"),
            (Quantity::new(1.0, dims::KILOGRAM), "%s", "%!s(Mass=1 kg)"),
            (Quantity::new(1.61619926e-35, dims::METER), "%v", "1.61619926e-35 m"),
            (Quantity::new(1.61619926e-35, dims::METER), "%#v", "Length(1.61619926e-35)"),
            (Quantity::new(1.61619926e-35, dims::METER), "%s", "%!s(Length=1.61619926e-35 m)"),
            (Quantity::new(15.2, dims::SECOND), "%v", "15.2 s"),
            (Quantity::new(15.2, dims::SECOND), "%#v", "Time(15.2)"),
            (Quantity::new(15.2, dims::SECOND), "%s", "%!s(Time=15.2 s)"),
        ];
        for (q, directive, expected) in cases {
            assert_eq!(format_quantity(&q, &spec(directive)), expected, "{directive}");
        }
    }

    #[test]
    fn explicit_zero_dimensions_do_not_render() {
        let q = Quantity::new(
            9.81,
            DimensionVector::from_pairs([
                (BaseDimension::Mass, 1),
                (BaseDimension::Time, -2),
                (BaseDimension::Length, 0),
            ]),
        );
        assert_eq!(format_quantity(&q, &spec("%f")), "9.81 kg s^-2");
    }

    #[test]
    fn go_syntax_dump_for_unnamed_dimensions() {
        assert_eq!(
            format_quantity(&planck(), &spec("%#v")),
            "Quantity { value: 6.62606957e-34, dimensions: {Mass: 2, Time: -1} }"
        );
    }

    #[test]
    fn width_pads_number_only() {
        assert_eq!(format_quantity(&gravity(), &spec("%8.2f")), "    9.81 kg s^-2");
        assert_eq!(format_quantity(&gravity(), &spec("%2f")), "9.81 kg s^-2");
        assert_eq!(format_quantity(&Quantity::dimensionless(1.5), &spec("%5g")), "  1.5");
    }

    #[test]
    fn upper_case_verbs() {
        assert_eq!(format_quantity(&planck(), &spec("%.2E")), "6.63E-34 kg^2 s^-1");
        assert_eq!(format_quantity(&Quantity::new(2.5e7, dims::METER), &spec("%G")), "2.5E+07 m");
        assert_eq!(format_quantity(&gravity(), &spec("%F")), "9.81 kg s^-2");
    }

    #[test]
    fn nan_renders_with_dimensions() {
        let q = Quantity::new(f64::NAN, dims::METER);
        assert_eq!(format_quantity(&q, &spec("%v")), "NaN m");
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Directive parsing
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn parse_directives() {
        assert_eq!(spec("%v"), FormatSpec::new('v'));
        assert_eq!(spec("%#v"), FormatSpec::new('v').with_alternate());
        assert_eq!(spec("%1.f"), FormatSpec::new('f').with_width(1).with_precision(0));
        assert_eq!(spec("%12.3e"), FormatSpec::new('e').with_width(12).with_precision(3));
        assert!(!spec("%s").alternate);
        assert!(!spec("%s").is_supported());
    }

    #[test]
    fn parse_errors() {
        assert_eq!("v".parse::<FormatSpec>(), Err(FormatError::MissingPercent("v".into())));
        assert_eq!("%.3".parse::<FormatSpec>(), Err(FormatError::MissingVerb("%.3".into())));
        assert_eq!("%vv".parse::<FormatSpec>(), Err(FormatError::TrailingCharacters("%vv".into())));
        assert!(matches!(
            "%+v".parse::<FormatSpec>(),
            Err(FormatError::UnsupportedFlag { flag: '+', .. })
        ));
        assert!(matches!(
            "%99999999999999999999999v".parse::<FormatSpec>(),
            Err(FormatError::OutOfRange(_))
        ));
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Rust formatting traits
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn display_traits() {
        assert_eq!(format!("{}", gravity()), "9.81 kg s^-2");
        assert_eq!(format!("{:.1}", gravity()), "9.8 kg s^-2");
        assert_eq!(format!("{:6.1}", gravity()), "   9.8 kg s^-2");
        assert_eq!(format!("{:#}", Quantity::new(15.2, dims::SECOND)), "Time(15.2)");
        assert_eq!(format!("{:.3e}", planck()), "6.626e-34 kg^2 s^-1");
        assert_eq!(format!("{:E}", planck()), "6.62606957E-34 kg^2 s^-1");
        assert_eq!(format!("{}", Quantity::dimensionless(core::f64::consts::E)), "2.718281828459045");
    }
}
