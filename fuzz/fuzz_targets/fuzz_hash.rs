//! Fuzz target: stable hash is reproducible and agrees with its hex form.
#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|input: String| {
    let h = util::hash(&input);
    assert_eq!(h, util::hash(&input), "hash must be reproducible");
    assert_eq!(util::hash_hex(&input), format!("{h:08x}"));
});
