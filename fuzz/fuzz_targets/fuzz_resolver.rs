#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(content) = std::str::from_utf8(data) {
        // Resolution is total - any token sequence must yield a directive
        let tokens: Vec<&str> = content.split_whitespace().collect();
        let mut sink = otto::RecordingSink::default();
        let _ = otto::resolve_with(&tokens, &otto::DeployDefaults::default(), &mut sink);
    }
});
