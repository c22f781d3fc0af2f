//! Positional-argument interpolation with locale-aware numeric grouping.

/// A positional argument supplied to [`Translator::translate`].
///
/// Numeric variants render with thousands grouping in the active locale;
/// strings render verbatim.
///
/// [`Translator::translate`]: crate::Translator::translate
#[derive(Debug, Clone, PartialEq)]
pub enum Argument {
    /// A signed integer.
    Int(i64),
    /// An unsigned integer.
    Uint(u64),
    /// A floating-point number; the fraction is never grouped.
    Float(f64),
    /// A plain string, rendered as supplied.
    Str(String),
}

impl Argument {
    /// Render the argument with `separator` as the grouping character.
    pub fn render(&self, separator: char) -> String {
        match self {
            Self::Int(value) => group_digits(&value.to_string(), separator),
            Self::Uint(value) => group_digits(&value.to_string(), separator),
            Self::Float(value) => {
                let rendered = value.to_string();
                match rendered.split_once('.') {
                    Some((whole, fraction)) => {
                        format!("{}.{fraction}", group_digits(whole, separator))
                    }
                    None => group_digits(&rendered, separator),
                }
            }
            Self::Str(value) => value.clone(),
        }
    }
}

impl From<i64> for Argument {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<i32> for Argument {
    fn from(value: i32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<u64> for Argument {
    fn from(value: u64) -> Self {
        Self::Uint(value)
    }
}

impl From<u32> for Argument {
    fn from(value: u32) -> Self {
        Self::Uint(u64::from(value))
    }
}

impl From<usize> for Argument {
    fn from(value: usize) -> Self {
        Self::Uint(value as u64)
    }
}

impl From<f64> for Argument {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<&str> for Argument {
    fn from(value: &str) -> Self {
        Self::Str(value.to_string())
    }
}

impl From<String> for Argument {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

/// Build a `Vec<Argument>` from a list of values convertible into
/// [`Argument`].
///
/// ```
/// use lingo_intl::{args, Argument};
///
/// let args = args![1337, "mana"];
/// assert_eq!(args, vec![Argument::Int(1337), Argument::Str("mana".into())]);
/// ```
#[macro_export]
macro_rules! args {
    () => {
        ::std::vec::Vec::<$crate::Argument>::new()
    };
    ($($value:expr),+ $(,)?) => {
        <[_]>::into_vec(::std::boxed::Box::new([
            $($crate::Argument::from($value)),+
        ]))
    };
}

/// Replace literal `{index}` placeholders in `template` with the rendered
/// positional arguments.
///
/// A placeholder whose index has no corresponding argument is left
/// unresolved so that partial invocation is possible; extra arguments beyond
/// the highest index are ignored.
pub fn interpolate(template: &str, args: &[Argument], separator: char) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let tail = &rest[open..];

        let placeholder = tail.find('}').and_then(|close| {
            let inner = &tail[1..close];
            let is_index = !inner.is_empty() && inner.bytes().all(|b| b.is_ascii_digit());

            is_index
                .then(|| inner.parse::<usize>().ok())
                .flatten()
                .map(|index| (close, index))
        });

        match placeholder {
            Some((close, index)) => {
                match args.get(index) {
                    Some(arg) => out.push_str(&arg.render(separator)),
                    // No argument for this index: leave the token unresolved.
                    None => out.push_str(&tail[..=close]),
                }
                rest = &tail[close + 1..];
            }
            None => {
                out.push('{');
                rest = &tail[1..];
            }
        }
    }

    out.push_str(rest);
    out
}

fn group_digits(value: &str, separator: char) -> String {
    let (sign, digits) = value
        .strip_prefix('-')
        .map_or(("", value), |digits| ("-", digits));

    // Exponent-form floats are passed through untouched.
    if !digits.bytes().all(|b| b.is_ascii_digit()) {
        return value.to_string();
    }

    let mut grouped = String::with_capacity(value.len() + digits.len() / 3);
    grouped.push_str(sign);

    let lead = digits.len() % 3;
    for (i, ch) in digits.chars().enumerate() {
        if i != 0 && (i + 3 - lead) % 3 == 0 {
            grouped.push(separator);
        }
        grouped.push(ch);
    }

    grouped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grouping() {
        assert_eq!(Argument::Int(0).render(','), "0");
        assert_eq!(Argument::Int(666).render(','), "666");
        assert_eq!(Argument::Int(1337).render(','), "1,337");
        assert_eq!(Argument::Int(-1337).render(','), "-1,337");
        assert_eq!(Argument::Uint(1_234_567).render(','), "1,234,567");
        assert_eq!(Argument::Int(1337).render('.'), "1.337");
    }

    #[test]
    fn test_float_fraction_not_grouped() {
        assert_eq!(Argument::Float(1234.5).render(','), "1,234.5");
        assert_eq!(Argument::Float(2.0).render(','), "2");
    }

    #[test]
    fn test_interpolate_positional() {
        let rendered = interpolate(
            "{0} health, {1} energy, {2} damage",
            &args![1337, 666, 255],
            ',',
        );

        assert_eq!(rendered, "1,337 health, 666 energy, 255 damage");
    }

    #[test]
    fn test_interpolate_string_arguments() {
        assert_eq!(
            interpolate("Hello {0}!", &args!["World"], ','),
            "Hello World!"
        );
    }

    #[test]
    fn test_missing_argument_left_unresolved() {
        assert_eq!(
            interpolate("{0} of {1}", &args![3], ','),
            "3 of {1}"
        );
    }

    #[test]
    fn test_extra_arguments_ignored() {
        assert_eq!(interpolate("{0}", &args![1, 2, 3], ','), "1");
    }

    #[test]
    fn test_non_placeholder_braces_kept() {
        assert_eq!(interpolate("{foo} {0}", &args![7], ','), "{foo} 7");
        assert_eq!(interpolate("open { brace", &args![], ','), "open { brace");
        assert_eq!(interpolate("{-1}", &args![5], ','), "{-1}");
    }

    #[test]
    fn test_no_args_returns_template() {
        assert_eq!(
            interpolate("{0} health, {1} energy, {2} damage", &args![], ','),
            "{0} health, {1} energy, {2} damage"
        );
    }
}
