//! Test fixtures for the Recreio workspace
//!
//! - [`RecordingHost`]: records alerts and navigations
//! - [`ScriptedTransport`]: replays queued responses, records requests
//! - [`form_with_fields`]: quick form fixtures

#![allow(missing_docs)]

use async_trait::async_trait;
use parking_lot::Mutex;
use recreio_client::{ApiRequest, ApiResponse, Transport, TransportError};
use recreio_form::{Constraint, Field, Form, Host, InputKind};
use serde_json::Value;
use std::collections::VecDeque;

/// Something the page was asked to do
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostEvent {
    Alert(String),
    Navigate(String),
}

/// [`Host`] that records alerts and navigations
#[derive(Debug, Default)]
pub struct RecordingHost {
    events: Mutex<Vec<HostEvent>>,
}

impl RecordingHost {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<HostEvent> {
        self.events.lock().clone()
    }

    pub fn alerts(&self) -> Vec<String> {
        self.events
            .lock()
            .iter()
            .filter_map(|e| match e {
                HostEvent::Alert(message) => Some(message.clone()),
                HostEvent::Navigate(_) => None,
            })
            .collect()
    }

    pub fn locations(&self) -> Vec<String> {
        self.events
            .lock()
            .iter()
            .filter_map(|e| match e {
                HostEvent::Navigate(route) => Some(route.clone()),
                HostEvent::Alert(_) => None,
            })
            .collect()
    }
}

impl Host for RecordingHost {
    fn alert(&self, message: &str) {
        self.events.lock().push(HostEvent::Alert(message.to_string()));
    }

    fn replace_location(&self, route: &str) {
        self.events.lock().push(HostEvent::Navigate(route.to_string()));
    }
}

enum Step {
    Respond(ApiResponse),
    Fail(String),
    Hang,
}

/// [`Transport`] that replays scripted responses in order and records requests
#[derive(Default)]
pub struct ScriptedTransport {
    script: Mutex<VecDeque<Step>>,
    requests: Mutex<Vec<ApiRequest>>,
}

impl ScriptedTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a JSON response
    pub fn respond(self, status: u16, body: Value) -> Self {
        self.respond_raw(status, &body.to_string())
    }

    /// Queue a response with a raw body
    pub fn respond_raw(self, status: u16, body: &str) -> Self {
        self.script
            .lock()
            .push_back(Step::Respond(ApiResponse::new(status, body.as_bytes().to_vec())));
        self
    }

    /// Queue a connection failure
    pub fn fail(self, reason: &str) -> Self {
        self.script.lock().push_back(Step::Fail(reason.to_string()));
        self
    }

    /// Queue a request that never completes
    pub fn hang(self) -> Self {
        self.script.lock().push_back(Step::Hang);
        self
    }

    pub fn requests(&self) -> Vec<ApiRequest> {
        self.requests.lock().clone()
    }

    pub fn request_count(&self) -> usize {
        self.requests.lock().len()
    }

    /// JSON body of the n-th request
    pub fn request_json(&self, index: usize) -> Option<Value> {
        let requests = self.requests.lock();
        let body = requests.get(index)?.body.as_ref()?;
        serde_json::from_slice(body).ok()
    }
}

#[async_trait]
impl Transport for ScriptedTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, TransportError> {
        self.requests.lock().push(request);
        let step = self.script.lock().pop_front();
        match step {
            Some(Step::Respond(response)) => Ok(response),
            Some(Step::Fail(reason)) => Err(TransportError::Connection(reason)),
            Some(Step::Hang) => std::future::pending().await,
            None => Err(TransportError::Connection("no scripted response".to_string())),
        }
    }
}

/// Form with one required text control per key
pub fn form_with_fields(id: &str, keys: &[&str]) -> Form {
    keys.iter().fold(Form::new(id, "Enviar"), |form, key| {
        form.with_field(Field::new(*key, InputKind::Text).with_constraint(Constraint::Required))
            .unwrap()
    })
}
