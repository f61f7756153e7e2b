//! Property-based tests for configuration merging.

use super::merger::ConfigMerger;
use super::schema::{Config, OutputFormat};
use proptest::prelude::*;

fn output_format_strategy() -> impl Strategy<Value = OutputFormat> {
    prop_oneof![
        Just(OutputFormat::Path),
        Just(OutputFormat::Lines),
        Just(OutputFormat::Json),
        Just(OutputFormat::Export),
    ]
}

fn config_strategy() -> impl Strategy<Value = Config> {
    (
        prop::option::of("[A-Z_][A-Z0-9_]{0,15}"),
        prop::option::of(any::<bool>()),
        prop::option::of(any::<bool>()),
        prop::option::of(output_format_strategy()),
        prop::option::of(prop_oneof![Just("bash"), Just("zsh"), Just("fish")]),
    )
        .prop_map(|(variable, validate, relocate, output_format, shell)| Config {
            variable,
            validate,
            relocate,
            output_format,
            shell: shell.map(str::to_string),
        })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 2000,
        .. ProptestConfig::default()
    })]

    // Every field set in the higher layer wins; unset fields fall through.
    #[test]
    fn config_merge_higher_precedence_wins(low in config_strategy(), high in config_strategy()) {
        let merged = ConfigMerger::merge(&[low.clone(), high.clone()]);
        prop_assert_eq!(merged.variable, high.variable.or(low.variable));
        prop_assert_eq!(merged.validate, high.validate.or(low.validate));
        prop_assert_eq!(merged.relocate, high.relocate.or(low.relocate));
        prop_assert_eq!(merged.output_format, high.output_format.or(low.output_format));
        prop_assert_eq!(merged.shell, high.shell.or(low.shell));
    }

    #[test]
    fn config_merge_with_empty_is_identity(config in config_strategy()) {
        let mut target = config.clone();
        ConfigMerger::merge_into(&mut target, &Config::default());
        prop_assert_eq!(target, config);
    }

    #[test]
    fn config_yaml_roundtrip(config in config_strategy()) {
        let yaml = serde_yaml::to_string(&config).unwrap();
        let parsed: Config = serde_yaml::from_str(&yaml).unwrap();
        prop_assert_eq!(parsed, config);
    }
}
