#![no_main]

use libfuzzer_sys::fuzz_target;
use publications_sync::models::PaperPage;

fuzz_target!(|data: &[u8]| {
    // Arbitrary bytes as a works page: Ok or Err, never a panic
    let _ = serde_json::from_slice::<PaperPage>(data);
});
