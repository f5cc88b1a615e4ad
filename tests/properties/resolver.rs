//! Property tests for deploy token resolution.

use proptest::prelude::*;

use otto::models::DeployDefaults;
use otto::resolver::{resolve_with, RecordingSink};

fn token_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("local".to_string()),
        Just("debug".to_string()),
        Just("dev".to_string()),
        Just("development".to_string()),
        Just("prod".to_string()),
        Just("production".to_string()),
        Just("-l".to_string()),
        Just("-d".to_string()),
        Just("-b".to_string()),
        Just("--blocking".to_string()),
        Just("-p".to_string()),
        Just("-y".to_string()),
        Just("--skip-build".to_string()),
        Just("--skip-push".to_string()),
        "[a-zA-Z0-9_-]{0,12}",
        ".*",
    ]
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: resolution is total and deterministic over arbitrary
    /// token sequences, warnings included.
    #[test]
    fn property_resolution_total_and_deterministic(
        tokens in proptest::collection::vec(token_strategy(), 0..8),
    ) {
        let mut first_sink = RecordingSink::default();
        let first = resolve_with(&tokens, &DeployDefaults::default(), &mut first_sink);

        let mut second_sink = RecordingSink::default();
        let second = resolve_with(&tokens, &DeployDefaults::default(), &mut second_sink);

        prop_assert_eq!(&first, &second);
        prop_assert_eq!(&first_sink.warnings, &second_sink.warnings);
    }

    /// PROPERTY: with a target set and no explicit flag token in the
    /// input, the flag is derived from the target.
    #[test]
    fn property_flag_derived_from_target(
        tokens in proptest::collection::vec(token_strategy(), 0..8),
    ) {
        let mut sink = RecordingSink::default();
        let directive = resolve_with(&tokens, &DeployDefaults::default(), &mut sink);

        if let Some(target) = directive.target {
            prop_assert!(!directive.flag.is_empty());

            let explicit_flag_seen = tokens.iter().any(|t| {
                matches!(
                    t.as_str(),
                    "-l" | "-d" | "-p" | "-y" | "--skip-build" | "--skip-push"
                )
            });
            if !explicit_flag_seen {
                prop_assert_eq!(directive.flag.as_str(), target.short_flag());
            }
        }
    }

    /// PROPERTY: once a positional token has been consumed, trailing
    /// positionals change nothing.
    #[test]
    fn property_trailing_positionals_are_inert(
        tokens in proptest::collection::vec(token_strategy(), 1..6),
        extra in "[a-z]{1,8}",
    ) {
        prop_assume!(tokens.iter().any(|t| !t.starts_with('-')));

        let mut base_sink = RecordingSink::default();
        let base = resolve_with(&tokens, &DeployDefaults::default(), &mut base_sink);

        let mut extended = tokens.clone();
        extended.push(extra);
        let mut extended_sink = RecordingSink::default();
        let with_extra = resolve_with(&extended, &DeployDefaults::default(), &mut extended_sink);

        prop_assert_eq!(&base, &with_extra);
        prop_assert_eq!(&base_sink.warnings, &extended_sink.warnings);
    }

    /// PROPERTY: the environment slot never depends on target tokens -
    /// prepending a legacy target flag leaves it untouched.
    #[test]
    fn property_target_flags_leave_environment_alone(
        tokens in proptest::collection::vec(token_strategy(), 0..6),
    ) {
        let mut plain_sink = RecordingSink::default();
        let plain = resolve_with(&tokens, &DeployDefaults::default(), &mut plain_sink);

        let mut prefixed = vec!["-l".to_string()];
        prefixed.extend(tokens.clone());
        let mut prefixed_sink = RecordingSink::default();
        let with_flag = resolve_with(&prefixed, &DeployDefaults::default(), &mut prefixed_sink);

        prop_assert_eq!(&plain.environment, &with_flag.environment);
        prop_assert_eq!(plain.mode, with_flag.mode);
    }
}
