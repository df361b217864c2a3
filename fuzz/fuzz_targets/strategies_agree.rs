#![no_main]

use libfuzzer_sys::fuzz_target;
use prefix_bench::Strategy;

// First byte picks where the input splits into subject and prefix.
fuzz_target!(|data: &[u8]| {
    let Some((&split, rest)) = data.split_first() else {
        return;
    };
    let Ok(text) = std::str::from_utf8(rest) else {
        return;
    };

    let mut at = usize::from(split).min(text.len());
    while !text.is_char_boundary(at) {
        at -= 1;
    }
    let (subject, prefix) = text.split_at(at);

    let expected = subject.starts_with(prefix);
    for strategy in Strategy::ALL {
        assert_eq!(
            strategy.matches(subject, prefix),
            expected,
            "{strategy} disagrees on {subject:?} / {prefix:?}"
        );
    }
});
