//! Fuzz target: `TowerConfig::from_json`
//!
//! Feeds arbitrary bytes to the config loader.
//!
//! Invariants checked:
//! - No panics under any byte sequence
//! - Every accepted config passes `validate()`
//! - Every accepted config survives a `to_json` / `from_json` round trip
//!
//! cargo fuzz run fuzz_config_json

#![no_main]

use laser_tower::TowerConfig;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(text) = core::str::from_utf8(data) else {
        return;
    };
    let Ok(config) = TowerConfig::from_json(text) else {
        return;
    };

    assert!(config.validate().is_ok(), "accepted config must validate");

    let json = config.to_json().expect("valid config must serialise");
    let again = TowerConfig::from_json(&json).expect("serialised config must reload");
    assert_eq!(config, again);
});
