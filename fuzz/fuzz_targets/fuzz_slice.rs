//! Fuzz target: a pushed value is gone after `remove_string`.
#![no_main]

use libfuzzer_sys::fuzz_target;
use util::{contains_string, remove_string};

fuzz_target!(|input: String| {
    let mut list: Vec<String> = ["aaaaa", "1234!", "234234234", "sdkfhsdfsd", "23423432"]
        .iter()
        .map(|s| s.to_string())
        .collect();
    list.push(input.clone());
    assert!(contains_string(&list, &input), "expected to contain {input:?}");
    let list = remove_string(&list, &input);
    assert!(!contains_string(&list, &input), "expected not to contain {input:?}");
});
