//! Local Launch Library 2 stand-in for integration tests.
//!
//! Serves canned JSON from a `tiny_http` server on a random port. Any
//! `{base}` in a body is replaced with the server's own base URL so
//! follow-up links (vehicle configuration URLs) point back at it.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;

use nis_api::SpaceClient;
use nis_config::ApiConfig;

pub const EVENTS: &str = include_str!("../data/events.json");
pub const LAUNCHES: &str = include_str!("../data/launches.json");
pub const LAUNCHER: &str = include_str!("../data/launcher.json");

pub const EVENTS_PATH: &str = "/event/upcoming";
pub const LAUNCHES_PATH: &str = "/launch";
pub const LAUNCHER_PATH: &str = "/config/launcher/164/";

#[derive(Debug, Clone)]
pub struct Route {
    status: u16,
    body: String,
    headers: Vec<(String, String)>,
}

impl Route {
    pub fn json(body: &str) -> Self {
        Self {
            status: 200,
            body: body.to_string(),
            headers: vec![("Content-Type".into(), "application/json".into())],
        }
    }

    pub fn status(status: u16, body: &str) -> Self {
        Self {
            status,
            body: body.to_string(),
            headers: Vec::new(),
        }
    }

    pub fn header(mut self, name: &str, value: &str) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }
}

pub struct FixtureServer {
    base_url: String,
    requests: Arc<Mutex<Vec<String>>>,
    server: Arc<tiny_http::Server>,
    handle: Option<JoinHandle<()>>,
}

impl FixtureServer {
    /// Start serving `routes`, keyed by path without the query string.
    /// Unknown paths get a 404.
    pub fn start(routes: Vec<(&str, Route)>) -> Self {
        let server = Arc::new(tiny_http::Server::http("127.0.0.1:0").unwrap());
        let port = server.server_addr().to_ip().unwrap().port();
        let base_url = format!("http://127.0.0.1:{port}");

        let routes: HashMap<String, Route> = routes
            .into_iter()
            .map(|(path, mut route)| {
                route.body = route.body.replace("{base}", &base_url);
                (path.to_string(), route)
            })
            .collect();

        let requests = Arc::new(Mutex::new(Vec::new()));
        let handle = {
            let server = Arc::clone(&server);
            let requests = Arc::clone(&requests);
            std::thread::spawn(move || {
                while let Ok(request) = server.recv() {
                    let url = request.url().to_string();
                    requests.lock().unwrap().push(url.clone());

                    let path = url.split('?').next().unwrap_or_default();
                    let response = match routes.get(path) {
                        Some(route) => {
                            let mut response = tiny_http::Response::from_string(route.body.clone())
                                .with_status_code(route.status);
                            for (name, value) in &route.headers {
                                response = response.with_header(
                                    tiny_http::Header::from_bytes(name.as_bytes(), value.as_bytes())
                                        .unwrap(),
                                );
                            }
                            response
                        }
                        None => tiny_http::Response::from_string(r#"{"detail":"Not found."}"#)
                            .with_status_code(404),
                    };
                    let _ = request.respond(response);
                }
            })
        };

        Self {
            base_url,
            requests,
            server,
            handle: Some(handle),
        }
    }

    /// The three standard fixtures: events, launches and one launcher.
    pub fn standard() -> Self {
        Self::start(vec![
            (EVENTS_PATH, Route::json(EVENTS)),
            (LAUNCHES_PATH, Route::json(LAUNCHES)),
            (LAUNCHER_PATH, Route::json(LAUNCHER)),
        ])
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn client(&self) -> SpaceClient {
        SpaceClient::new(&ApiConfig {
            base_url: self.base_url.clone(),
            timeout_secs: 5,
            ..ApiConfig::default()
        })
        .unwrap()
    }

    /// Request URLs received so far (path and query), in arrival order.
    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }

    pub fn requests_to(&self, path: &str) -> Vec<String> {
        self.requests()
            .into_iter()
            .filter(|url| url.split('?').next() == Some(path))
            .collect()
    }
}

impl Drop for FixtureServer {
    fn drop(&mut self) {
        self.server.unblock();
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}
