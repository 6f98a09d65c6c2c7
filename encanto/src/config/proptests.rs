//! Property-based tests for configuration system.

use super::merger::ConfigMerger;
use super::schema::{Config, DatabaseSettings, OutputFormat};
use crate::logging::LogLevel;
use proptest::prelude::*;
use std::path::PathBuf;

fn output_format_strategy() -> impl Strategy<Value = OutputFormat> {
    prop_oneof![
        Just(OutputFormat::Json),
        Just(OutputFormat::Csv),
        Just(OutputFormat::Tsv),
        Just(OutputFormat::Table),
    ]
}

fn log_level_strategy() -> impl Strategy<Value = LogLevel> {
    prop_oneof![
        Just(LogLevel::Quiet),
        Just(LogLevel::Normal),
        Just(LogLevel::Verbose),
    ]
}

fn database_strategy() -> impl Strategy<Value = DatabaseSettings> {
    (
        prop::option::of("[a-z]{1,10}"),
        prop::option::of("/[a-z]{1,10}\\.db"),
        prop::option::of(1u64..=60_000),
    )
        .prop_map(|(backend, path, busy_timeout_ms)| DatabaseSettings {
            backend,
            path: path.map(PathBuf::from),
            busy_timeout_ms,
        })
}

fn config_strategy() -> impl Strategy<Value = Config> {
    (
        prop::option::of(database_strategy()),
        prop::option::of("[./>|]{1,3}"),
        prop::option::of(output_format_strategy()),
        prop::option::of(log_level_strategy()),
        prop::option::of(any::<bool>()),
    )
        .prop_map(
            |(database, path_separator, output_format, log_mode, disable_autoinit)| Config {
                database,
                path_separator,
                output_format,
                log_mode,
                disable_autoinit,
            },
        )
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 2000,
        .. ProptestConfig::default()
    })]

    // Set fields of the higher-precedence config always win.
    #[test]
    fn higher_precedence_wins(low in config_strategy(), high in config_strategy()) {
        let mut merged = low.clone();
        ConfigMerger::merge_into(&mut merged, &high);

        if high.output_format.is_some() {
            prop_assert_eq!(merged.output_format, high.output_format);
        } else {
            prop_assert_eq!(merged.output_format, low.output_format);
        }
        if high.path_separator.is_some() {
            prop_assert_eq!(&merged.path_separator, &high.path_separator);
        }
        if let Some(timeout) = high.database.as_ref().and_then(|d| d.busy_timeout_ms) {
            prop_assert_eq!(merged.database.unwrap().busy_timeout_ms, Some(timeout));
        }
    }

    #[test]
    fn merge_with_default_is_identity(config in config_strategy()) {
        let mut merged = config.clone();
        ConfigMerger::merge_into(&mut merged, &Config::default());
        prop_assert_eq!(merged, config);
    }

    #[test]
    fn yaml_round_trip(config in config_strategy()) {
        let yaml = serde_yaml::to_string(&config).unwrap();
        let parsed: Config = serde_yaml::from_str(&yaml).unwrap();
        prop_assert_eq!(parsed, config);
    }
}
