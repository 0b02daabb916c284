//! Fuzz target: URI validation.
//!
//! `uri` must never panic, and whatever it accepts must start with an
//! http(s) scheme and carry an in-range port when one is present.
#![no_main]

use libfuzzer_sys::fuzz_target;
use util::{uri, UriError};

fuzz_target!(|data: &[u8]| {
    let Ok(input) = std::str::from_utf8(data) else {
        return;
    };
    match uri(input) {
        Ok(scheme) => {
            let lower = input.to_ascii_lowercase();
            assert!(lower.starts_with(&format!("{}://", scheme.as_str())));
            let authority = lower
                .split_once("://")
                .map(|(_, rest)| rest.trim_end_matches('/'))
                .unwrap_or_default();
            if let Some((_, port)) = authority.rsplit_once(':') {
                let port: u32 = port.parse().expect("accepted port is numeric");
                assert!((1..=65_535).contains(&port));
            }
        }
        Err(UriError::InvalidScheme(_)) | Err(UriError::InvalidPort(_)) => {}
    }
});
