//! Property-based tests for settings persistence.
//!
//! Any settings value written through the engine reads back identically from disk.

use linkshelf::services::settings_engine::{SettingsEngine, SettingsEngineTrait};
use linkshelf::types::settings::{
    GeneralSettings, IdScheme, LinkshelfSettings, LoggingSettings, RpcSettings,
};
use proptest::prelude::*;
use tempfile::TempDir;

fn arb_settings() -> impl Strategy<Value = LinkshelfSettings> {
    (
        any::<bool>(),
        prop_oneof![Just(IdScheme::Uuid), Just(IdScheme::Sequential)],
        prop_oneof![
            Just("info".to_string()),
            Just("debug".to_string()),
            "linkshelf=(trace|debug|warn)",
        ],
        1..10_000u32,
    )
        .prop_map(|(seed, scheme, filter, rate)| LinkshelfSettings {
            general: GeneralSettings {
                seed_sample_links: seed,
                id_scheme: scheme,
            },
            logging: LoggingSettings { filter },
            rpc: RpcSettings {
                max_requests_per_second: rate,
            },
        })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(20))]

    #[test]
    fn settings_survive_save_and_load(settings in arb_settings()) {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("settings.json").to_string_lossy().to_string();

        let mut engine = SettingsEngine::new(Some(path.clone()));
        engine.load().unwrap();
        engine.set_value("general", serde_json::to_value(&settings.general).unwrap()).unwrap();
        engine.set_value("logging", serde_json::to_value(&settings.logging).unwrap()).unwrap();
        engine.set_value("rpc", serde_json::to_value(&settings.rpc).unwrap()).unwrap();

        let mut reloaded = SettingsEngine::new(Some(path));
        prop_assert_eq!(reloaded.load().unwrap(), settings);
    }
}
