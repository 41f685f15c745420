#![no_main]

use libfuzzer_sys::fuzz_target;
use publications_sync::models::AuthorSearchResult;

fuzz_target!(|data: &[u8]| {
    let _ = serde_json::from_slice::<AuthorSearchResult>(data);
});
