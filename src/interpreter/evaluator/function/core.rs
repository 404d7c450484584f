use crate::interpreter::evaluator::{
    function::{math, string, trig},
    handler::{ANGLE_OR_NUMBER, Callable, NUMBER, ORDERED, SCALAR, STRING},
};

/// Defines the builtin function catalogue.
///
/// Each entry provides:
/// - a string name,
/// - the accepted kinds of every argument position, which also fixes the
///   arity,
/// - a function pointer implementing the builtin.
///
/// The macro produces:
/// - `BUILTIN_TABLE` (the callables, in declaration order),
/// - `BUILTIN_FUNCTIONS` (public list of builtin names).
macro_rules! builtin_functions {
    (
        $(
            $name:literal => {
                kinds: $kinds:expr,
                func: $func:expr $(,)?
            }
        ),* $(,)?
    ) => {
        /// Every builtin function, in declaration order.
        pub static BUILTIN_TABLE: &[Callable] = &[
            $(
                Callable::new($name, $kinds, $func),
            )*
        ];

        /// The names of all builtin functions.
        pub const BUILTIN_FUNCTIONS: &[&str] = &[
            $($name,)*
        ];
    };
}

builtin_functions! {
    "round"         => { kinds: &[SCALAR], func: math::round },
    "floor"         => { kinds: &[SCALAR], func: math::floor },
    "ceil"          => { kinds: &[SCALAR], func: math::ceil },
    "trunc"         => { kinds: &[SCALAR], func: math::trunc },
    "abs"           => { kinds: &[SCALAR], func: math::abs },
    "sign"          => { kinds: &[SCALAR], func: math::sign },
    "min"           => { kinds: &[ORDERED, ORDERED], func: math::min },
    "max"           => { kinds: &[ORDERED, ORDERED], func: math::max },
    "pow"           => { kinds: &[SCALAR, NUMBER], func: math::pow },
    "sqrt"          => { kinds: &[NUMBER], func: math::sqrt },
    "cbrt"          => { kinds: &[NUMBER], func: math::cbrt },
    "exp"           => { kinds: &[NUMBER], func: math::exp },
    "ln"            => { kinds: &[NUMBER], func: math::ln },
    "log2"          => { kinds: &[NUMBER], func: math::log2 },
    "log10"         => { kinds: &[NUMBER], func: math::log10 },
    "log"           => { kinds: &[NUMBER, NUMBER], func: math::log },
    "sinh"          => { kinds: &[NUMBER], func: math::sinh },
    "cosh"          => { kinds: &[NUMBER], func: math::cosh },
    "tanh"          => { kinds: &[NUMBER], func: math::tanh },
    "asinh"         => { kinds: &[NUMBER], func: math::asinh },
    "acosh"         => { kinds: &[NUMBER], func: math::acosh },
    "atanh"         => { kinds: &[NUMBER], func: math::atanh },
    "sin"           => { kinds: &[ANGLE_OR_NUMBER], func: trig::sin },
    "cos"           => { kinds: &[ANGLE_OR_NUMBER], func: trig::cos },
    "tan"           => { kinds: &[ANGLE_OR_NUMBER], func: trig::tan },
    "asin"          => { kinds: &[NUMBER], func: trig::asin },
    "acos"          => { kinds: &[NUMBER], func: trig::acos },
    "atan"          => { kinds: &[NUMBER], func: trig::atan },
    "atan2"         => { kinds: &[NUMBER, NUMBER], func: trig::atan2 },
    "length"        => { kinds: &[STRING], func: string::length },
    "substring"     => { kinds: &[STRING, NUMBER, NUMBER], func: string::substring },
    "concat"        => { kinds: &[STRING, STRING], func: string::concat },
    "find"          => { kinds: &[STRING, STRING], func: string::find },
    "regex_find"    => { kinds: &[STRING, STRING], func: string::regex_find },
    "regex_match"   => { kinds: &[STRING, STRING], func: string::regex_match },
    "regex_replace" => { kinds: &[STRING, STRING, STRING], func: string::regex_replace },
    "pad_start"     => { kinds: &[STRING, NUMBER, STRING], func: string::pad_start },
    "pad_end"       => { kinds: &[STRING, NUMBER, STRING], func: string::pad_end },
    "repeat"        => { kinds: &[STRING, NUMBER], func: string::repeat },
    "to_upper"      => { kinds: &[STRING], func: string::to_upper },
    "to_lower"      => { kinds: &[STRING], func: string::to_lower },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_and_names_agree() {
        assert_eq!(BUILTIN_TABLE.len(), BUILTIN_FUNCTIONS.len());
        for (callable, name) in BUILTIN_TABLE.iter().zip(BUILTIN_FUNCTIONS) {
            assert_eq!(callable.name, *name);
        }
    }

    #[test]
    fn names_are_unique() {
        for (i, name) in BUILTIN_FUNCTIONS.iter().enumerate() {
            assert!(!BUILTIN_FUNCTIONS[i + 1..].contains(name), "duplicate builtin {name}");
        }
    }

    #[test]
    fn arity_follows_the_kinds() {
        let arity = |name: &str| BUILTIN_TABLE.iter().find(|f| f.name == name).map(Callable::arity);
        assert_eq!(arity("sin"), Some(1));
        assert_eq!(arity("atan2"), Some(2));
        assert_eq!(arity("regex_replace"), Some(3));
    }
}
