use std::{
    io::{BufRead, BufReader, Write},
    net::TcpListener,
    thread,
};

use code2diagram::{
    config::GithubConfig,
    github::{FetchError, RepoFetcher, RepoRef},
};

const USER_AGENT: &str = "code2diagram-test";

/// Starts a blocking HTTP/1.1 server on a free local port and returns its
/// base URL. Each request is answered by `handler(base, path, headers)`
/// with header names lowercased; every connection is closed after one
/// response.
fn serve<F>(handler: F) -> String
where
    F: Fn(&str, &str, &[String]) -> (u16, String) + Send + 'static,
{
    let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind stub server");
    let base = format!("http://{}", listener.local_addr().unwrap());
    let server_base = base.clone();

    thread::spawn(move || {
        for stream in listener.incoming() {
            let Ok(mut stream) = stream else { continue };
            let mut reader = BufReader::new(stream.try_clone().unwrap());

            let mut request_line = String::new();
            if reader.read_line(&mut request_line).is_err() {
                continue;
            }
            let mut headers = Vec::new();
            loop {
                let mut line = String::new();
                match reader.read_line(&mut line) {
                    Ok(0) | Err(_) => break,
                    Ok(_) if line.trim_end().is_empty() => break,
                    Ok(_) => headers.push(line.trim_end().to_ascii_lowercase()),
                }
            }

            let path = request_line.split_whitespace().nth(1).unwrap_or("/");
            let (status, body) = handler(&server_base, path, &headers);
            let response = format!(
                "HTTP/1.1 {status} Stub\r\nContent-Type: application/json\r\n\
                 Content-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len()
            );
            let _ = stream.write_all(response.as_bytes());
        }
    });

    base
}

fn listing_entry(base: &str, name: &str) -> String {
    format!(
        r#"{{"name":"{name}","path":"{name}","type":"file","download_url":"{base}/raw/{name}"}}"#
    )
}

/// `o/r` lists three script files and a markdown file; `b.ts` fails to
/// download. `o/gone` is missing, `o/limited` is rate limited and
/// `o/broken` answers with a server error.
fn github_stub(base: &str, path: &str, headers: &[String]) -> (u16, String) {
    let accepts_v3 = headers
        .iter()
        .any(|h| h == "accept: application/vnd.github.v3+json");
    let has_agent = headers
        .iter()
        .any(|h| *h == format!("user-agent: {USER_AGENT}"));

    match path {
        "/repos/o/r/contents" if accepts_v3 && has_agent => {
            let entries = [
                listing_entry(base, "a.js"),
                listing_entry(base, "b.ts"),
                listing_entry(base, "c.md"),
                listing_entry(base, "d.tsx"),
                r#"{"name":"src","path":"src","type":"dir","download_url":null}"#.to_string(),
            ];
            (200, format!("[{}]", entries.join(",")))
        }
        "/repos/o/r/contents" => (406, "{}".to_string()),
        "/repos/o/gone/contents" => (404, r#"{"message":"Not Found"}"#.to_string()),
        "/repos/o/limited/contents" => (403, r#"{"message":"rate limit"}"#.to_string()),
        "/repos/o/broken/contents" => (500, "{}".to_string()),
        "/raw/a.js" => (200, "class A {}".to_string()),
        "/raw/d.tsx" => (200, "function d() {}".to_string()),
        _ => (404, String::new()),
    }
}

fn github_config(base: &str, max_files: usize) -> GithubConfig {
    toml::from_str(&format!(
        "api_base = \"{base}/\"\nuser_agent = \"{USER_AGENT}\"\nmax_files = {max_files}\nconcurrency = 2\n"
    ))
    .expect("valid github config")
}

fn fetcher(max_files: usize) -> RepoFetcher {
    let base = serve(github_stub);
    RepoFetcher::new(&github_config(&base, max_files)).expect("Failed to build fetcher")
}

#[tokio::test]
async fn test_fetch_downloads_first_script_files_in_listing_order() {
    let content = fetcher(2)
        .fetch(&RepoRef::parse("o/r").unwrap())
        .await
        .expect("listing should succeed");

    assert_eq!(content.repo().to_string(), "o/r");
    // a.js, b.ts and d.tsx are scripts; c.md and the directory are not
    assert_eq!(content.total_files(), 3);

    let files = content.files();
    assert_eq!(files.len(), 2);

    assert_eq!(files[0].name(), "a.js");
    assert_eq!(files[0].content(), "class A {}");
    assert_eq!(files[0].language(), "javascript");

    assert_eq!(files[1].name(), "b.ts");
    assert!(
        files[1].content().starts_with("// Error loading file: "),
        "unexpected content {:?}",
        files[1].content()
    );
    assert_eq!(files[1].language(), "javascript");
}

#[tokio::test]
async fn test_fetch_without_limit_keeps_every_script() {
    let content = fetcher(10)
        .fetch(&RepoRef::parse("o/r").unwrap())
        .await
        .expect("listing should succeed");

    let names: Vec<&str> = content.files().iter().map(|f| f.name()).collect();
    assert_eq!(names, ["a.js", "b.ts", "d.tsx"]);
    assert_eq!(content.files()[2].content(), "function d() {}");
    assert_eq!(content.files()[2].language(), "javascript");
}

#[tokio::test]
async fn test_fetch_maps_missing_repository_to_not_found() {
    let result = fetcher(2).fetch(&RepoRef::parse("o/gone").unwrap()).await;

    match result {
        Err(FetchError::NotFound(repo)) => assert_eq!(repo, "o/gone"),
        other => panic!("Expected NotFound, got {other:?}"),
    }
}

#[tokio::test]
async fn test_fetch_maps_forbidden_listing_to_rate_limited() {
    let result = fetcher(2).fetch(&RepoRef::parse("o/limited").unwrap()).await;
    assert!(matches!(result, Err(FetchError::RateLimited)));
}

#[tokio::test]
async fn test_fetch_maps_other_failures_to_upstream() {
    let result = fetcher(2).fetch(&RepoRef::parse("o/broken").unwrap()).await;

    match result {
        Err(FetchError::Upstream(reason)) => assert!(reason.contains("500")),
        other => panic!("Expected Upstream, got {other:?}"),
    }
}
