#![no_main]

use graphprose::{Discourse, NodeLiteral};
use libfuzzer_sys::fuzz_target;

// Resolution must reject arbitrary input with an error, never a panic.
fuzz_target!(|data: &str| {
    let ctx = Discourse::new("Person", "name");
    let _ = NodeLiteral::from_text(data, &ctx);
    let _ = NodeLiteral::from_capture(data, "Person", &ctx);
    let _ = graphprose::default_tag(data);
});
