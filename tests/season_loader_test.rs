//! Season loader retry behaviour against a scripted CSV source.

use std::{
    collections::VecDeque,
    sync::{Arc, Mutex},
    time::Duration,
};

use archivo::{
    error::LoadError,
    loader::{
        RetryPolicy, SeasonLoader, Sleeper,
        source::{CsvDocument, CsvSource, parse_csv},
    },
    model::Season,
};

const BASE: &str = "https://cdn/audio";
const URL: &str = "https://cdn/audio/s02.csv";

const GOOD_CSV: &str = "id,place,date,filename,lenght,link,isAvalable
1,Laguna,2023-06-21,REC_150854.mp3,1:00:00,/s02/REC_150854.mp3,TRUE
,Cerro,2023-06-22,REC_160000.mp3,1:00:00,/s02/REC_160000.mp3,TRUE
3,Arroyo,2023-06-23,REC_170000.mp3,0:30:00,/s02/REC_170000.mp3,FALSE
";

/// Replays a fixed list of responses and records the URLs it was asked for.
///
/// Clones share their script and request log.
#[derive(Clone)]
struct ScriptedSource {
    responses: Arc<Mutex<VecDeque<Result<CsvDocument, LoadError>>>>,
    requests: Arc<Mutex<Vec<String>>>,
}

impl ScriptedSource {
    fn new(responses: Vec<Result<CsvDocument, LoadError>>) -> Self {
        Self {
            responses: Arc::new(Mutex::new(responses.into())),
            requests: Arc::new(Mutex::new(vec![])),
        }
    }

    fn request_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

impl CsvSource for ScriptedSource {
    fn fetch(&self, url: &str) -> Result<CsvDocument, LoadError> {
        self.requests.lock().unwrap().push(url.to_string());
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(LoadError::Download("script exhausted".to_string())))
    }
}

fn recording_sleeper() -> (Sleeper, Arc<Mutex<Vec<Duration>>>) {
    let sleeps = Arc::new(Mutex::new(vec![]));
    let recorded = Arc::clone(&sleeps);
    let sleeper: Sleeper = Arc::new(move |d: Duration| recorded.lock().unwrap().push(d));
    (sleeper, sleeps)
}

fn loader(
    responses: Vec<Result<CsvDocument, LoadError>>,
) -> (
    SeasonLoader<ScriptedSource>,
    ScriptedSource,
    Arc<Mutex<Vec<Duration>>>,
) {
    let source = ScriptedSource::new(responses);
    let (sleeper, sleeps) = recording_sleeper();
    let loader = SeasonLoader::with_sleeper(
        source.clone(),
        BASE,
        RetryPolicy::default(),
        sleeper,
    );
    (loader, source, sleeps)
}

fn download_error() -> Result<CsvDocument, LoadError> {
    Err(LoadError::Download("connection reset".to_string()))
}

#[test]
fn success_maps_rows_in_order() {
    let (loader, source, sleeps) = loader(vec![Ok(parse_csv(GOOD_CSV))]);

    let result = loader.load(Season::Winter, URL);

    assert_eq!(result.season, Season::Winter);
    assert_eq!(result.error, None);
    let ids: Vec<&str> = result.tracks.iter().map(|t| t.id.as_str()).collect();
    assert_eq!(ids, vec!["1", "3"]);
    assert_eq!(result.tracks[0].link, "https://cdn/audio/s02/REC_150854.mp3");
    assert_eq!(result.tracks[0].length, "1:00:00");
    assert_eq!(result.tracks[0].season.as_deref(), Some("winter"));
    assert_eq!(result.tracks[1].is_available, "FALSE");

    assert_eq!(source.request_count(), 1);
    assert!(sleeps.lock().unwrap().is_empty());
}

#[test]
fn download_failures_exhaust_three_attempts() {
    let (loader, source, sleeps) =
        loader(vec![download_error(), download_error(), download_error()]);

    let result = loader.load(Season::Winter, URL);

    assert!(result.tracks.is_empty());
    assert_eq!(result.error.as_deref(), Some("Download error: connection reset"));
    assert_eq!(source.request_count(), 3);
    assert_eq!(
        *sleeps.lock().unwrap(),
        vec![Duration::from_secs(1), Duration::from_secs(1)]
    );
}

#[test]
fn parse_errors_are_retried_and_reported() {
    let bad = || {
        Ok(CsvDocument {
            rows: vec![],
            errors: vec!["Too few fields".to_string(), "Too many fields".to_string()],
        })
    };
    let (loader, source, _) = loader(vec![bad(), bad(), bad()]);

    let result = loader.load(Season::Spring, URL);

    assert_eq!(
        result.error.as_deref(),
        Some("Parse errors: Too few fields, Too many fields")
    );
    assert!(result.tracks.is_empty());
    assert_eq!(source.request_count(), 3);
}

#[test]
fn recovers_after_a_failed_attempt() {
    let (loader, source, sleeps) = loader(vec![download_error(), Ok(parse_csv(GOOD_CSV))]);

    let result = loader.load(Season::Winter, URL);

    assert_eq!(result.error, None);
    assert_eq!(result.tracks.len(), 2);
    assert_eq!(source.request_count(), 2);
    assert_eq!(sleeps.lock().unwrap().len(), 1);
}

#[test]
fn attempt_bound_is_configurable() {
    let source = ScriptedSource::new(vec![]);
    let (sleeper, sleeps) = recording_sleeper();
    let loader = SeasonLoader::with_sleeper(
        source.clone(),
        BASE,
        RetryPolicy {
            max_attempts: 5,
            delay: Duration::from_millis(10),
        },
        sleeper,
    );

    let result = loader.load(Season::Autumn, URL);

    assert!(result.error.is_some());
    assert_eq!(source.request_count(), 5);
    assert_eq!(sleeps.lock().unwrap().len(), 4);
}

#[test]
fn always_requests_the_given_url() {
    let (loader, source, _) = loader(vec![download_error(), download_error(), download_error()]);

    loader.load(Season::Winter, URL);

    let requests = source.requests.lock().unwrap();
    assert!(requests.iter().all(|r| r == URL));
}
