#![no_main]

use libfuzzer_sys::fuzz_target;
use publications_sync::formatters::render_html_at;
use publications_sync::grouping::group_by_year;
use publications_sync::models::PaperPage;

fuzz_target!(|data: &[u8]| {
    if let Ok(page) = serde_json::from_slice::<PaperPage>(data) {
        let grouped = group_by_year(&page.data);
        let html = render_html_at(&grouped, "fuzz");
        assert!(html.contains(&format!("Total publications: {}", page.data.len())));
    }
});
