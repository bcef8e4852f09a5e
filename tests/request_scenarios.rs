use datamuse::{ApiClient, DatamuseError, Query, Relation, Result, Transport};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

/// Fake transport recording every URL it is asked for
#[derive(Clone)]
struct RecordingTransport {
    response: std::result::Result<&'static str, &'static str>,
    calls: Arc<AtomicUsize>,
    urls: Arc<Mutex<Vec<String>>>,
}

impl RecordingTransport {
    fn ok(body: &'static str) -> Self {
        Self {
            response: Ok(body),
            calls: Arc::new(AtomicUsize::new(0)),
            urls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    fn failing(message: &'static str) -> Self {
        Self {
            response: Err(message),
            ..Self::ok("")
        }
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn last_url(&self) -> Option<String> {
        self.urls.lock().unwrap().last().cloned()
    }
}

impl Transport for RecordingTransport {
    fn get(&self, url: &str) -> Result<Vec<u8>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.urls.lock().unwrap().push(url.to_string());
        match self.response {
            Ok(body) => Ok(body.as_bytes().to_vec()),
            Err(message) => Err(DatamuseError::transport(url, message)),
        }
    }
}

const DUCK_WORDS: &str = r#"[
    {"word":"bufflehead","score":1189,"tags":["n"]},
    {"word":"bird","score":1051},
    {"word":"blue","score":890}
]"#;

#[test]
fn test_words_query_scenario() {
    let transport = RecordingTransport::ok(DUCK_WORDS);
    let client = ApiClient::with_transport(transport.clone());
    let query = Query::new().means_like("duck").spelled_like("b*").max(10);

    let value = client.request("words", &query).unwrap();

    assert_eq!(transport.calls(), 1);
    assert_eq!(
        transport.last_url().as_deref(),
        Some("https://api.datamuse.com/words?ml=duck&sp=b%2A&max=10")
    );
    let entries = value.as_array().unwrap();
    assert_eq!(entries.len(), 3);
    assert!(entries.iter().all(|entry| entry.get("word").is_some()));
}

#[test]
fn test_suggestion_scenario() {
    let transport =
        RecordingTransport::ok(r#"[{"word":"relationship","score":4},{"word":"relative","score":3}]"#);
    let client = ApiClient::with_transport(transport.clone());

    let value = client.request("sug", &Query::new().param("s", "rel")).unwrap();

    assert_eq!(
        transport.last_url().as_deref(),
        Some("https://api.datamuse.com/sug?s=rel")
    );
    assert_eq!(value[0]["word"], "relationship");
}

#[test]
fn test_bogus_endpoint_scenario() {
    let transport = RecordingTransport::ok("[]");
    let client = ApiClient::with_transport(transport.clone());

    let err = client.request("bogus", &Query::new()).unwrap_err();

    assert!(matches!(err, DatamuseError::InvalidEndpoint(ref name) if name == "bogus"));
    assert!(err.is_validation());
    assert_eq!(transport.calls(), 0);
}

#[test]
fn test_bad_metadata_scenario() {
    let transport = RecordingTransport::ok("[]");
    let client = ApiClient::with_transport(transport.clone());
    let query = Query::new()
        .related(Relation::PopularNouns, "duck")
        .param("md", "xyz");

    let err = client.request("words", &query).unwrap_err();

    assert!(matches!(err, DatamuseError::InvalidMetadataFlag('x')));
    assert_eq!(transport.calls(), 0);
}

#[test]
fn test_unknown_parameter_sends_nothing() {
    let transport = RecordingTransport::ok("[]");
    let client = ApiClient::with_transport(transport.clone());

    let err = client
        .request("words", &Query::new().means_like("duck").param("color", "red"))
        .unwrap_err();

    assert!(matches!(err, DatamuseError::InvalidParameter(ref name) if name == "color"));
    assert_eq!(transport.calls(), 0);
}

#[test]
fn test_transport_failure_is_surfaced_once() {
    let transport = RecordingTransport::failing("connection refused");
    let client = ApiClient::with_transport(transport.clone());

    let err = client
        .request("words", &Query::new().means_like("duck"))
        .unwrap_err();

    match err {
        DatamuseError::Transport { url, source } => {
            assert_eq!(url, "https://api.datamuse.com/words?ml=duck");
            assert_eq!(source.to_string(), "connection refused");
        }
        other => panic!("expected transport error, got {other:?}"),
    }
    // no retry
    assert_eq!(transport.calls(), 1);
}

#[test]
fn test_malformed_body_is_decode_failure() {
    let transport = RecordingTransport::ok("[{\"word\": ");
    let client = ApiClient::with_transport(transport.clone());

    let err = client
        .request("words", &Query::new().means_like("duck"))
        .unwrap_err();

    assert!(matches!(err, DatamuseError::Decode(_)));
    assert_eq!(transport.calls(), 1);
}

#[test]
fn test_client_is_reusable_after_errors() {
    let transport = RecordingTransport::ok(DUCK_WORDS);
    let client = ApiClient::with_transport(transport.clone());

    assert!(client.request("bogus", &Query::new()).is_err());
    let words = client.words(&Query::new().means_like("duck")).unwrap();

    assert_eq!(words.len(), 3);
    assert_eq!(words[0].word, "bufflehead");
    assert_eq!(words[0].parts_of_speech(), vec!["n"]);
    assert_eq!(transport.calls(), 1);
}

#[test]
fn test_query_is_not_consumed_by_request() {
    let transport = RecordingTransport::ok("[]");
    let client = ApiClient::with_transport(transport.clone());
    let query = Query::new().sounds_like("jirraf").max(3);

    client.request("words", &query).unwrap();
    client.request("words", &query).unwrap();

    assert_eq!(query.get("max"), Some("3"));
    let urls = transport.urls.lock().unwrap();
    assert_eq!(urls[0], urls[1]);
}
