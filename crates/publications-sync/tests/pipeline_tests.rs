//! End-to-end pipeline tests against a mocked API.

use std::fs;

use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use publications_sync::config::Config;
use publications_sync::models::Paper;
use publications_sync::pipeline::{self, RunOutcome};

fn fixture() -> serde_json::Value {
    json!({
        "offset": 0,
        "data": [
            {
                "paperId": "p2020",
                "title": "Causal discovery in gene networks",
                "year": 2020,
                "authors": [{"authorId": "1", "name": "Thuc Duy Le"}],
                "venue": "Bioinformatics",
                "externalIds": {
                    "DOI": "10.1093/bioinformatics/x",
                    "PubMed": "32000000",
                    "CorpusId": 1
                },
                "url": "https://www.semanticscholar.org/paper/p2020",
                "citationCount": 10,
                "abstract": null
            },
            {
                "paperId": "p2021",
                "title": "Naïve Bayes für Uplift",
                "year": 2021,
                "authors": [
                    {"authorId": "1", "name": "Thuc Duy Le"},
                    {"authorId": null, "name": "Jiuyong Li"}
                ],
                "venue": "",
                "externalIds": {"ArXiv": "2101.00001"},
                "url": "https://www.semanticscholar.org/paper/p2021",
                "citationCount": 2
            },
            {
                "paperId": "pnone",
                "title": "Undated preprint",
                "year": null,
                "authors": [],
                "venue": null,
                "externalIds": {},
                "url": null
            }
        ]
    })
}

async fn mount_works(server: &MockServer, author: &str) {
    Mock::given(method("GET"))
        .and(path(format!("/graph/v1/author/{author}/papers")))
        .and(query_param("offset", "0"))
        .respond_with(ResponseTemplate::new(200).set_body_json(fixture()))
        .mount(server)
        .await;

    Mock::given(method("GET"))
        .and(path(format!("/graph/v1/author/{author}/papers")))
        .and(query_param("offset", "100"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"offset": 100, "data": []})))
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_end_to_end_writes_both_files() {
    let server = MockServer::start().await;
    mount_works(&server, "A1").await;

    let dir = tempfile::tempdir().unwrap();
    let config = Config::for_testing(&server.uri())
        .with_author("A1", "Thuc Duy Le")
        .with_output_dir(dir.path());

    let outcome = pipeline::run(&config).await.unwrap();
    let RunOutcome::Published(summary) = outcome else {
        panic!("expected publications to be written");
    };
    assert_eq!(summary.total, 3);
    assert_eq!(summary.buckets, 3);
    assert!(!summary.used_fallback);

    let html = fs::read_to_string(dir.path().join("publications.html")).unwrap();
    let unknown = html.find("<h3>Unknown</h3>").unwrap();
    let y2021 = html.find("<h3>2021</h3>").unwrap();
    let y2020 = html.find("<h3>2020</h3>").unwrap();
    assert!(unknown < y2021 && y2021 < y2020);
    assert_eq!(html.matches("<h3>").count(), 3);
    assert!(html.contains("Total publications: 3"));
    assert!(html.contains("https://doi.org/10.1093/bioinformatics/x"));
    assert!(html.contains("https://pubmed.ncbi.nlm.nih.gov/32000000"));

    let json = fs::read_to_string(dir.path().join("publications.json")).unwrap();
    assert!(json.contains("Naïve Bayes für Uplift"));
    assert!(json.starts_with("[\n  {\n"));

    // Backup keeps fetch order, not grouped order.
    let saved: Vec<Paper> = serde_json::from_str(&json).unwrap();
    let ids: Vec<_> = saved.iter().filter_map(|p| p.paper_id.as_deref()).collect();
    assert_eq!(ids, vec!["p2020", "p2021", "pnone"]);
    let raw: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(raw[0]["externalIds"]["CorpusId"], 1);
}

#[tokio::test]
async fn test_fallback_run_reports_found_author() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/graph/v1/author/stale/papers"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/graph/v1/author/search"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "total": 1,
            "offset": 0,
            "data": [{"authorId": "fresh", "name": "Thuc Duy Le"}]
        })))
        .mount(&server)
        .await;
    mount_works(&server, "fresh").await;

    let dir = tempfile::tempdir().unwrap();
    let config = Config::for_testing(&server.uri())
        .with_author("stale", "Thuc Duy Le")
        .with_output_dir(dir.path().join("nested/out"));

    let RunOutcome::Published(summary) = pipeline::run(&config).await.unwrap() else {
        panic!("expected publications to be written");
    };
    assert_eq!(summary.author_id, "fresh");
    assert!(summary.used_fallback);
    assert!(summary.files.html_path.exists());
}

#[tokio::test]
async fn test_no_publications_writes_nothing() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/graph/v1/author/A1/papers"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"offset": 0, "data": []})))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/graph/v1/author/search"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let config = Config::for_testing(&server.uri())
        .with_author("A1", "Nobody")
        .with_output_dir(dir.path());

    let outcome = pipeline::run(&config).await.unwrap();

    assert_eq!(outcome, RunOutcome::NoPublications);
    assert!(!dir.path().join("publications.json").exists());
    assert!(!dir.path().join("publications.html").exists());
}

#[tokio::test]
async fn test_unwritable_output_is_fatal() {
    let server = MockServer::start().await;
    mount_works(&server, "A1").await;

    let dir = tempfile::tempdir().unwrap();
    let blocker = dir.path().join("not-a-dir");
    fs::write(&blocker, "file in the way").unwrap();

    let config =
        Config::for_testing(&server.uri()).with_author("A1", "X").with_output_dir(&blocker);
    let err = pipeline::run(&config).await.unwrap_err();

    assert!(err.to_string().contains("not-a-dir"));
}
