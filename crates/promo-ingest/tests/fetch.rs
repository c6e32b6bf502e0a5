//! Fetch tests against a one-shot local HTTP responder.

use std::io::{Read, Write};
use std::net::TcpListener;
use std::thread;

use promo_ingest::{
    DEFAULT_TIMEOUT, IngestError, SheetClient, SheetSource, load_recovery, load_tables,
};

const SHEET: &str = "Partner_ID,Partner_Name,Status\nP1,Acme Bank,Active\n";

/// Serves exactly one HTTP response and returns the URL to request.
fn serve_once(status_line: &str, body: &str) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    let response = format!(
        "HTTP/1.1 {status_line}\r\nContent-Type: text/csv\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
        body.len()
    );
    thread::spawn(move || {
        if let Ok((mut stream, _)) = listener.accept() {
            let mut buf = [0u8; 4096];
            let _ = stream.read(&mut buf);
            let _ = stream.write_all(response.as_bytes());
            let _ = stream.flush();
        }
    });
    format!("http://{addr}/sheet.csv")
}

/// Client that never routes loopback requests through a proxy.
fn local_client() -> SheetClient {
    let client = reqwest::Client::builder()
        .no_proxy()
        .timeout(DEFAULT_TIMEOUT)
        .build()
        .unwrap();
    SheetClient::from_client(client)
}

#[tokio::test]
async fn load_recovery_from_success_response() {
    let url = serve_once("200 OK", SHEET);
    let client = local_client();

    let recovery = load_recovery(&client, &SheetSource::Url(url)).await.unwrap();

    assert_eq!(recovery.tables.partners.len(), 1);
    assert_eq!(recovery.tables.partners[0].name, "Acme Bank");
    assert_eq!(recovery.stats.headers, 1);
}

#[tokio::test]
async fn non_success_status_is_fetch_failure() {
    let url = serve_once("404 Not Found", "missing");
    let client = local_client();

    let err = client.fetch_text(&url).await.unwrap_err();

    assert!(matches!(err, IngestError::FetchFailure { status: 404, .. }));
    assert!(err.user_message().contains("HTTP 404"));
}

#[tokio::test]
async fn refused_connection_is_transport_error() {
    let addr = {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap()
    };
    let client = local_client();

    let err = client
        .fetch_text(&format!("http://{addr}/sheet.csv"))
        .await
        .unwrap_err();

    assert!(matches!(err, IngestError::Transport { .. }));
    assert!(err.is_transport());
}

#[tokio::test]
async fn load_recovery_reads_local_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "{SHEET}").unwrap();
    let client = local_client();

    let recovery = load_recovery(&client, &SheetSource::File(file.path().to_path_buf()))
        .await
        .unwrap();

    assert_eq!(recovery.tables.partners.len(), 1);
    assert_eq!(recovery.stats.headers, 1);
}

#[tokio::test]
async fn load_tables_from_url_source() {
    let url = serve_once("200 OK", SHEET);
    let client = local_client();

    let tables = load_tables(&client, &SheetSource::Url(url)).await.unwrap();

    assert_eq!(tables.partners[0].partner_id, "P1");
    assert!(tables.cards.is_empty());
}

#[tokio::test]
async fn load_recovery_missing_file() {
    let client = local_client();
    let err = load_recovery(
        &client,
        &SheetSource::File("/nonexistent/promo/sheet.csv".into()),
    )
    .await
    .unwrap_err();
    assert!(matches!(err, IngestError::FileRead { .. }));
}
