#![no_main]

use libfuzzer_sys::fuzz_target;
use segue_fuzz::dispatch_input;
use segue_interpolate::interpolate;

fuzz_target!(|data: &[u8]| {
    let Ok(input) = dispatch_input(data) else {
        return;
    };
    let (a, b) = (input.a.to_value(), input.b.to_value());
    let interpolator = interpolate(&a, &b);

    for t in input.samples.iter().copied().chain([0.0, 0.5, 1.0]) {
        let first = format!("{:?}", interpolator.at(t));
        let second = format!("{:?}", interpolator.at(t));
        assert_eq!(first, second, "sampling must be repeatable");
    }
});
