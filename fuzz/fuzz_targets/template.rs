#![no_main]

use libfuzzer_sys::fuzz_target;
use segue_interpolate::{interpolate_string, Value};

fuzz_target!(|input: (String, String, f64)| {
    let (a, b, t) = input;
    let interpolator = interpolate_string(a.as_str(), b.as_str());

    // the end string comes back verbatim at t = 1 unless numbers were re-rendered
    let Value::String(end) = interpolator.at(1.0) else {
        panic!("template produced a non-string");
    };
    if interpolator.is_constant() {
        assert_eq!(end, b);
    }
    let _ = interpolator.at(t);
});
