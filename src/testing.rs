//! Stand-in for the OpenTripMap API, served on an ephemeral local port.

use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use axum::routing::get;
use axum::Router;
use serde_json::{json, Value};
use url::Url;

type Recorded = Arc<Mutex<Vec<(String, HashMap<String, String>)>>>;

pub struct StubPlaces {
    geoname: (StatusCode, Value),
    radius: (StatusCode, Value),
    delay: Option<Duration>,
}

struct StubState {
    geoname: (StatusCode, Value),
    radius: (StatusCode, Value),
    delay: Option<Duration>,
    recorded: Recorded,
}

pub struct RunningStub {
    addr: SocketAddr,
    recorded: Recorded,
}

impl Default for StubPlaces {
    fn default() -> Self {
        let unset = (
            StatusCode::INTERNAL_SERVER_ERROR,
            json!({"error": "stub endpoint not configured"}),
        );
        Self {
            geoname: unset.clone(),
            radius: unset,
            delay: None,
        }
    }
}

impl StubPlaces {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn geoname(mut self, status: StatusCode, body: Value) -> Self {
        self.geoname = (status, body);
        self
    }

    pub fn radius(mut self, status: StatusCode, body: Value) -> Self {
        self.radius = (status, body);
        self
    }

    pub fn delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub async fn spawn(self) -> RunningStub {
        let recorded: Recorded = Arc::default();
        let state = Arc::new(StubState {
            geoname: self.geoname,
            radius: self.radius,
            delay: self.delay,
            recorded: recorded.clone(),
        });

        let app = Router::new()
            .route("/geoname", get(geoname))
            .route("/radius", get(radius))
            .with_state(state);

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        RunningStub { addr, recorded }
    }
}

impl RunningStub {
    pub fn base_url(&self) -> Url {
        Url::parse(&format!("http://{}/", self.addr)).unwrap()
    }

    /// Query strings received on `endpoint`, oldest first
    pub fn requests(&self, endpoint: &str) -> Vec<HashMap<String, String>> {
        self.recorded
            .lock()
            .unwrap()
            .iter()
            .filter(|(name, _)| name == endpoint)
            .map(|(_, query)| query.clone())
            .collect()
    }
}

impl StubState {
    async fn reply(
        &self,
        endpoint: &str,
        query: HashMap<String, String>,
        (status, body): &(StatusCode, Value),
    ) -> Response {
        self.recorded
            .lock()
            .unwrap()
            .push((endpoint.to_string(), query));
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        (*status, Json(body.clone())).into_response()
    }
}

async fn geoname(
    State(state): State<Arc<StubState>>,
    Query(query): Query<HashMap<String, String>>,
) -> Response {
    state.reply("geoname", query, &state.geoname).await
}

async fn radius(
    State(state): State<Arc<StubState>>,
    Query(query): Query<HashMap<String, String>>,
) -> Response {
    state.reply("radius", query, &state.radius).await
}
