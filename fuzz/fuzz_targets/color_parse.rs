#![no_main]

use libfuzzer_sys::fuzz_target;
use segue_color::parse_color;

fuzz_target!(|data: &[u8]| {
    if let Ok(text) = std::str::from_utf8(data) {
        if let Ok(color) = parse_color(text) {
            // rendering then parsing again lands on the same text
            let rendered = color.to_string();
            let reparsed = parse_color(&rendered).expect("rendered color must parse");
            assert_eq!(reparsed.to_string(), rendered);
        }
    }
});
