#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &str| {
    // Fuzz TOML parsing of Settings and ensure it never panics and rejects invalids gracefully.
    let parsed = toml::from_str::<pt_config::Settings>(data);
    match parsed {
        Ok(cfg) => {
            let _ = cfg.validate();
        }
        Err(_e) => {}
    }
});
