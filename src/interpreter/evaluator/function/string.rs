use regex::Regex;

use crate::{
    error::EvalError,
    interpreter::{
        evaluator::{core::EvalResult, utils::arguments},
        value::core::Primitive,
    },
    util::num::{f64_to_i64_checked, f64_to_usize_clamped, usize_to_f64_checked},
};

/// Longest string, in characters, that `repeat` and the padding functions
/// will build.
pub const MAX_STRING_LENGTH: usize = 1 << 20;

/// Fails unless a string of `length` characters fits [`MAX_STRING_LENGTH`].
fn check_length(function: &str, length: Option<usize>) -> EvalResult<()> {
    match length {
        Some(length) if length <= MAX_STRING_LENGTH => Ok(()),
        _ => Err(EvalError::InvalidArgument { details: format!("{function} result exceeds {MAX_STRING_LENGTH} characters") }),
    }
}

/// Number of characters in a string.
pub fn length(args: &[Primitive]) -> EvalResult<Primitive> {
    let [text] = arguments::<1>(args)?;
    Ok(Primitive::Number(usize_to_f64_checked(text.as_str()?.chars().count())?))
}

/// The characters between two positions.
///
/// Positions are clamped to the string, and swapped when the start lies
/// after the end, so `substring("hello", 4, 1)` is `"ell"`.
///
/// # Example
/// ```
/// use parametra::interpreter::{evaluator::function::string::substring, value::Primitive};
///
/// let args = [Primitive::from("parametric"), Primitive::Number(0.0), Primitive::Number(5.0)];
/// assert_eq!(substring(&args).unwrap(), Primitive::from("param"));
/// ```
pub fn substring(args: &[Primitive]) -> EvalResult<Primitive> {
    let [text, start, end] = arguments::<3>(args)?;
    let text = text.as_str()?;

    let count = text.chars().count();
    let start = f64_to_usize_clamped(start.as_magnitude()?)?.min(count);
    let end = f64_to_usize_clamped(end.as_magnitude()?)?.min(count);
    let (from, to) = if start > end { (end, start) } else { (start, end) };

    Ok(text.chars().skip(from).take(to - from).collect::<String>().into())
}

/// Joins two strings.
pub fn concat(args: &[Primitive]) -> EvalResult<Primitive> {
    let [left, right] = arguments::<2>(args)?;
    Ok(format!("{}{}", left.as_str()?, right.as_str()?).into())
}

/// Character position of the first occurrence of `needle`, or `-1`.
pub fn find(args: &[Primitive]) -> EvalResult<Primitive> {
    let [text, needle] = arguments::<2>(args)?;
    let text = text.as_str()?;

    match text.find(needle.as_str()?) {
        Some(byte) => Ok(Primitive::Number(usize_to_f64_checked(text[..byte].chars().count())?)),
        None => Ok(Primitive::Number(-1.0)),
    }
}

/// The first match of a regular expression, or an empty string.
pub fn regex_find(args: &[Primitive]) -> EvalResult<Primitive> {
    let [text, pattern] = arguments::<2>(args)?;
    let found = compile(pattern)?.find(text.as_str()?)
                                 .map_or("", |m| m.as_str())
                                 .to_string();
    Ok(found.into())
}

/// Whether a regular expression matches anywhere in the string.
pub fn regex_match(args: &[Primitive]) -> EvalResult<Primitive> {
    let [text, pattern] = arguments::<2>(args)?;
    Ok(compile(pattern)?.is_match(text.as_str()?).into())
}

/// Replaces every match of a regular expression. The replacement may refer to
/// capture groups as `$1` or `${name}`.
///
/// # Example
/// ```
/// use parametra::interpreter::{evaluator::function::string::regex_replace, value::Primitive};
///
/// let args = [Primitive::from("M8x1.25"), Primitive::from(r"\d"), Primitive::from("#")];
/// assert_eq!(regex_replace(&args).unwrap(), Primitive::from("M#x#.##"));
/// ```
pub fn regex_replace(args: &[Primitive]) -> EvalResult<Primitive> {
    let [text, pattern, replacement] = arguments::<3>(args)?;
    let replaced = compile(pattern)?.replace_all(text.as_str()?, replacement.as_str()?)
                                    .into_owned();
    Ok(replaced.into())
}

fn compile(pattern: &Primitive) -> EvalResult<Regex> {
    let pattern = pattern.as_str()?;
    Regex::new(pattern).map_err(|err| EvalError::InvalidArgument { details: format!("invalid regular expression '{pattern}': {err}") })
}

/// Pads the start of a string with repetitions of `fill` up to `length`
/// characters.
pub fn pad_start(args: &[Primitive]) -> EvalResult<Primitive> {
    let [text, length, fill] = arguments::<3>(args)?;
    let text = text.as_str()?;
    let padding = padding("pad_start", text, length, fill)?;
    Ok(format!("{padding}{text}").into())
}

/// Pads the end of a string with repetitions of `fill` up to `length`
/// characters.
pub fn pad_end(args: &[Primitive]) -> EvalResult<Primitive> {
    let [text, length, fill] = arguments::<3>(args)?;
    let text = text.as_str()?;
    let padding = padding("pad_end", text, length, fill)?;
    Ok(format!("{text}{padding}").into())
}

/// The fill characters needed to bring `text` up to `length` characters. An
/// empty fill or a string that is already long enough needs none.
fn padding(function: &str, text: &str, length: &Primitive, fill: &Primitive) -> EvalResult<String> {
    let target = f64_to_usize_clamped(length.as_magnitude()?)?;
    let missing = target.saturating_sub(text.chars().count());
    let fill = fill.as_str()?;
    if missing > 0 && !fill.is_empty() {
        check_length(function, Some(target))?;
    }
    Ok(fill.chars().cycle().take(missing).collect())
}

/// Repeats a string `count` times.
///
/// # Errors
/// `InvalidArgument` for a negative count, or when the result would be longer
/// than [`MAX_STRING_LENGTH`] characters.
pub fn repeat(args: &[Primitive]) -> EvalResult<Primitive> {
    let [text, count] = arguments::<2>(args)?;
    let count = f64_to_i64_checked(count.as_magnitude()?)?;
    let count = usize::try_from(count).map_err(|_| EvalError::InvalidArgument { details: format!("repeat count {count} must not be negative") })?;
    let text = text.as_str()?;
    check_length("repeat", text.chars().count().checked_mul(count))?;
    Ok(text.repeat(count).into())
}

/// Upper-case conversion.
pub fn to_upper(args: &[Primitive]) -> EvalResult<Primitive> {
    let [text] = arguments::<1>(args)?;
    Ok(text.as_str()?.to_uppercase().into())
}

/// Lower-case conversion.
pub fn to_lower(args: &[Primitive]) -> EvalResult<Primitive> {
    let [text] = arguments::<1>(args)?;
    Ok(text.as_str()?.to_lowercase().into())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn s(text: &str) -> Primitive {
        Primitive::from(text)
    }

    fn n(value: f64) -> Primitive {
        Primitive::Number(value)
    }

    #[test]
    fn lengths_count_characters() {
        assert_eq!(length(&[s("Ø12")]), Ok(n(3.0)));
        assert_eq!(find(&[s("Ø12 mm"), s("mm")]), Ok(n(4.0)));
        assert_eq!(find(&[s("abc"), s("z")]), Ok(n(-1.0)));
    }

    #[test]
    fn substring_clamps_and_swaps() {
        assert_eq!(substring(&[s("hello"), n(4.0), n(1.0)]), Ok(s("ell")));
        assert_eq!(substring(&[s("hello"), n(-3.0), n(99.0)]), Ok(s("hello")));
        assert_eq!(substring(&[s("hello"), n(2.0), n(2.0)]), Ok(s("")));
    }

    #[test]
    fn regexes() {
        assert_eq!(regex_find(&[s("part-042"), s(r"\d+")]), Ok(s("042")));
        assert_eq!(regex_find(&[s("part"), s(r"\d+")]), Ok(s("")));
        assert_eq!(regex_match(&[s("part-042"), s(r"^part")]), Ok(Primitive::Boolean(true)));
        assert_eq!(regex_replace(&[s("a-b-c"), s("-"), s("+")]), Ok(s("a+b+c")));
        assert!(matches!(regex_match(&[s("x"), s("(")]), Err(EvalError::InvalidArgument { .. })));
    }

    #[test]
    fn padding_cycles_the_fill() {
        assert_eq!(pad_start(&[s("7"), n(3.0), s("0")]), Ok(s("007")));
        assert_eq!(pad_end(&[s("ab"), n(7.0), s("xyz")]), Ok(s("abxyzxy")));
        assert_eq!(pad_start(&[s("long"), n(2.0), s("0")]), Ok(s("long")));
        assert_eq!(pad_end(&[s("ab"), n(5.0), s("")]), Ok(s("ab")));
    }

    #[test]
    fn padding_is_capped() {
        assert!(matches!(pad_start(&[s(""), n(1e15), s("x")]), Err(EvalError::InvalidArgument { .. })));
        assert!(matches!(pad_end(&[s("a"), n(4e6), s("xy")]), Err(EvalError::InvalidArgument { .. })));
        assert_eq!(pad_end(&[s("ab"), n(1e15), s("")]), Ok(s("ab")));

        let limit = usize_to_f64_checked(MAX_STRING_LENGTH).unwrap();
        let Ok(Primitive::String(padded)) = pad_start(&[s(""), n(limit), s("0")]) else {
            panic!("padding up to the limit failed");
        };
        assert_eq!(padded.len(), MAX_STRING_LENGTH);
    }

    #[test]
    fn repeat_and_case() {
        assert_eq!(repeat(&[s("ab"), n(3.0)]), Ok(s("ababab")));
        assert!(matches!(repeat(&[s("ab"), n(-1.0)]), Err(EvalError::InvalidArgument { .. })));
        assert!(matches!(repeat(&[s("ab"), n(5e18)]), Err(EvalError::InvalidArgument { .. })));
        assert_eq!(repeat(&[s(""), n(5e18)]), Ok(s("")));
        assert_eq!(to_upper(&[s("m8")]), Ok(s("M8")));
        assert_eq!(to_lower(&[s("M8")]), Ok(s("m8")));
        assert_eq!(concat(&[s("M"), s("8")]), Ok(s("M8")));
    }
}
