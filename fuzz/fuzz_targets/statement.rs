#![no_main]

use graphprose::Matcher;
use libfuzzer_sys::fuzz_target;

// Compile an arbitrary statement, run arbitrary text through it, and hold
// the is_match/matches agreement invariant the whole way.
fuzz_target!(|data: &str| {
    let Some((statement, text)) = data.split_once('\n') else {
        return;
    };
    let Ok(matcher) = Matcher::new(statement, "") else {
        return;
    };
    assert_eq!(matcher.is_match(text), matcher.matches(text).is_ok());
});
