// Compares a script result against either an expected value or a pattern.
#[macro_export]
macro_rules! assert_case {
    ($result:expr, { Err($($pattern:tt)*) }) => {
        match $result {
            Err($($pattern)*) => {},
            other => panic!("Expected Err({}) but got {:#?}", stringify!($($pattern)*), other),
        }
    };

    // Default case - treat as expression for equality comparison
    ($result:expr, { $expected:expr }) => {
        match $result {
            Ok(actual) => {
                pretty_assertions::assert_eq!($expected, actual, "Expected {:#?} but got {:#?}\n\n< expected / got >", $expected, actual);
            },
            other => panic!("Expected Ok(...) but got {:?}", other),
        }
    };
}

// Generates one test function per assertion field.
#[macro_export]
macro_rules! handle_case {
    ([$($attrs:meta)*] output, $expected:tt) => {
        $(#[$attrs])*
        #[test]
        fn validate_output() {
            let mut session = dynarray::Session::new(initial(), options());
            let result = session.run(input()).map(|lines| lines.join("\n"));
            assert_case!(result.as_deref(), $expected);
        }
    };

    ([$($attrs:meta)*] failure, $expected:tt) => {
        $(#[$attrs])*
        #[test]
        fn validate_failure() {
            let mut session = dynarray::Session::new(initial(), options());
            let result = session.run(input());
            assert_case!(result, $expected);
        }
    };

    ([$($attrs:meta)*] rendered, [$($fragment:expr),* $(,)?]) => {
        $(#[$attrs])*
        #[test]
        fn validate_rendered() {
            let mut session = dynarray::Session::new(initial(), options());
            let err = match session.run(input()) {
                Err(e) => e,
                Ok(lines) => panic!("Expected a script error, but the script printed {:?}", lines),
            };
            let mut buf = Vec::new();
            let config = dynarray::RenderConfig {
                color: false,
                charset: dynarray::CharSet::Ascii,
                ..Default::default()
            };
            dynarray::render_error_to(&err, input(), &mut buf, &config).unwrap();
            let rendered = String::from_utf8_lossy(&buf);
            $(
                assert!(
                    rendered.contains($fragment),
                    "Expected {:?} in rendered error:\n{}",
                    $fragment,
                    rendered
                );
            )*
        }
    };

    // Generic case for unknown field names
    ([$($attrs:meta)*] $field_name:ident, $expected:tt) => {
        compile_error!(concat!("Unknown test case field: ", stringify!($field_name)));
    };
}

// Recursively parses assertion fields
#[macro_export]
macro_rules! parse_assertions {
    // Base case: no more fields to parse
    (@parse [$($test_functions:tt)*]) => {
        $($test_functions)*
    };

    (@parse [$($test_functions:tt)*] $(#[$attr:meta])* $field_name:ident: $field_value:tt, $($rest:tt)*) => {
        parse_assertions! {@parse [
            $($test_functions)*
            handle_case! {[$($attr)*] $field_name, $field_value}
        ] $($rest)*}
    };
}

// Main macro - name, starting array, optional bounds and script, then any
// assertions in any order
#[macro_export]
macro_rules! test_case {
    (
        name: $name:ident,
        initial: $initial:expr,
        $(options: $options:expr,)?
        input: $input:expr,
        $($assertion_fields:tt)*
    ) => {
        mod $name {
            #![allow(unused_imports, dead_code)]

            use super::*;

            fn initial() -> &'static str {
                $initial
            }

            fn options() -> dynarray::ArrayOptions {
                #[allow(unused_mut)]
                let mut options = dynarray::ArrayOptions::default();
                $(options = $options;)?
                options
            }

            fn input() -> &'static str {
                $input
            }

            parse_assertions! {@parse [] $($assertion_fields)*}
        }
    };
}
