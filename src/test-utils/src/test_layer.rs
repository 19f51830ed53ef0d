// Copyright 2025 Google LLC
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     https://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use tracing::{Event, Level, Subscriber, field};
use tracing_subscriber::{Layer, layer::Context, prelude::*};

/// A captured tracing event.
#[derive(Clone, Debug, PartialEq)]
pub struct CapturedEvent {
    /// The level of the event.
    pub level: Level,
    /// The formatted message, empty if the event has none.
    pub message: String,
    /// The other fields in the event, formatted as strings.
    pub fields: HashMap<String, String>,
}

/// Extracts the fields of an event as strings.
struct TestVisitor<'a> {
    message: &'a mut String,
    fields: &'a mut HashMap<String, String>,
}

impl field::Visit for TestVisitor<'_> {
    fn record_str(&mut self, field: &field::Field, value: &str) {
        self.insert(field, value.to_string());
    }

    fn record_debug(&mut self, field: &field::Field, value: &dyn std::fmt::Debug) {
        self.insert(field, format!("{value:?}"));
    }

    fn record_i64(&mut self, field: &field::Field, value: i64) {
        self.insert(field, value.to_string());
    }

    fn record_u64(&mut self, field: &field::Field, value: u64) {
        self.insert(field, value.to_string());
    }

    fn record_bool(&mut self, field: &field::Field, value: bool) {
        self.insert(field, value.to_string());
    }
}

impl TestVisitor<'_> {
    fn insert(&mut self, field: &field::Field, value: String) {
        if field.name() == "message" {
            *self.message = value;
        } else {
            self.fields.insert(field.name().to_string(), value);
        }
    }
}

/// A tracing layer that captures events for inspection in tests.
///
/// The layer is installed as the default subscriber for the current thread
/// only, so tests running in parallel do not see each other's events. Use a
/// current thread runtime in async tests.
///
/// # Example
///
/// ```rust
/// use reservation_test_utils::test_layer::TestLayer;
///
/// let (layer, _guard) = TestLayer::initialize();
/// tracing::debug!(page_token = "t1", "fetching next page");
///
/// let captured = layer.capture();
/// assert_eq!(captured.len(), 1);
/// assert_eq!(captured[0].message, "fetching next page");
/// assert_eq!(captured[0].fields.get("page_token").map(String::as_str), Some("t1"));
/// ```
#[derive(Clone, Debug, Default)]
pub struct TestLayer {
    events: Arc<Mutex<Vec<CapturedEvent>>>,
}

impl TestLayer {
    /// Installs a new `TestLayer` as the default subscriber for this thread.
    ///
    /// The layer captures events, at any level, until the guard is dropped.
    pub fn initialize() -> (Self, tracing::subscriber::DefaultGuard) {
        let layer = TestLayer::default();
        let subscriber = tracing_subscriber::registry().with(layer.clone());
        let guard = tracing::subscriber::set_default(subscriber);
        (layer, guard)
    }

    /// Retrieves and removes all the events captured so far.
    pub fn capture(&self) -> Vec<CapturedEvent> {
        std::mem::take(&mut *self.events.lock().unwrap())
    }

    /// Returns the captured events with the given message, without removing
    /// them.
    pub fn with_message(&self, message: &str) -> Vec<CapturedEvent> {
        self.events
            .lock()
            .unwrap()
            .iter()
            .filter(|e| e.message == message)
            .cloned()
            .collect()
    }
}

impl<S> Layer<S> for TestLayer
where
    S: Subscriber,
{
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let mut message = String::new();
        let mut fields = HashMap::new();
        event.record(&mut TestVisitor {
            message: &mut message,
            fields: &mut fields,
        });
        self.events.lock().unwrap().push(CapturedEvent {
            level: *event.metadata().level(),
            message,
            fields,
        });
    }
}
