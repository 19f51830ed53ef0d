// Copyright 2024 Google LLC
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

//! Per request options.
//!
//! Applications may need to attach metadata to each call made via a client,
//! for example to propagate tracing context, or to route requests through a
//! proxy. The `*Builder` returned by each client method implements the
//! [RequestOptionsBuilder] trait where applications can set these options.
//!
//! The paginators hold on to the options used for the initial request, and
//! send the same options, unmodified, with each request for a subsequent page.

/// A set of options configuring a single request.
///
/// Applications only use this class directly in mocks, where they may want to
/// verify their application has configured all the right request options, and
/// when using the blocking client.
///
/// All other code uses this type indirectly, via the per-request builders.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RequestOptions {
    metadata: Vec<(String, String)>,
    user_agent: Option<String>,
}

impl RequestOptions {
    /// Gets the metadata attached to each call, in insertion order.
    pub fn metadata(&self) -> &[(String, String)] {
        &self.metadata
    }

    /// Appends a key-value pair to the metadata sent with each call.
    ///
    /// Keys may repeat, the pairs are sent in the order they were added.
    pub fn add_metadata<K, V>(&mut self, key: K, value: V)
    where
        K: Into<String>,
        V: Into<String>,
    {
        self.metadata.push((key.into(), value.into()));
    }

    /// Replaces all the metadata sent with each call.
    pub fn set_metadata<I, K, V>(&mut self, v: I)
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.metadata = v.into_iter().map(|(k, v)| (k.into(), v.into())).collect();
    }

    /// Prepends this prefix to the user agent header value.
    pub fn set_user_agent<T: Into<String>>(&mut self, v: T) {
        self.user_agent = Some(v.into());
    }

    /// Gets the current user-agent prefix
    pub fn user_agent(&self) -> &Option<String> {
        &self.user_agent
    }
}

/// Setting this environment variable to `true` enables tracing in all clients.
pub const LOGGING_VAR: &str = "GOOGLE_CLOUD_RUST_LOGGING";

/// Configuration shared by all the requests made by a client.
///
/// # Example
/// ```
/// # use reservation_gax::options::ClientConfig;
/// let config = ClientConfig::default().with_tracing();
/// assert!(config.tracing_enabled());
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ClientConfig {
    tracing: bool,
}

impl ClientConfig {
    /// Enables tracing for every RPC made by the client.
    ///
    /// The client wraps its stub in a decorator that records each RPC, with
    /// its request and result, as a `DEBUG` span.
    pub fn with_tracing(mut self) -> Self {
        self.tracing = true;
        self
    }

    /// Returns true if the configuration or the environment enables tracing.
    ///
    /// Set [LOGGING_VAR] to `true` to enable tracing without code changes.
    pub fn tracing_enabled(&self) -> bool {
        if self.tracing {
            return true;
        }
        std::env::var(LOGGING_VAR)
            .map(|v| v == "true")
            .unwrap_or(false)
    }
}

/// Implementations of this trait provide setters to configure request options.
///
/// The client library provides a builder for each RPC. These builders can be
/// used to set the request parameters, e.g., the parent resource, as well as
/// any options affecting the request, such as additional metadata.
pub trait RequestOptionsBuilder: internal::RequestBuilder {
    /// Appends a key-value pair to the metadata sent with each call.
    fn with_metadata<K: Into<String>, V: Into<String>>(self, key: K, value: V) -> Self;

    /// Set the user agent header.
    fn with_user_agent<V: Into<String>>(self, v: V) -> Self;
}

pub mod internal {
    //! This module contains implementation details. It is not part of the
    //! public API. Types and functions in this module may be changed or removed
    //! without warnings. Applications should not use any types contained
    //! within.
    use super::RequestOptions;

    /// Simplify implementation of the [super::RequestOptionsBuilder] trait in
    /// the request builders.
    ///
    /// This is an implementation detail, most applications have little need to
    /// worry about or use this trait.
    pub trait RequestBuilder {
        fn request_options(&mut self) -> &mut RequestOptions;
    }
}

/// Implements the sealed [RequestOptionsBuilder] trait.
impl<T> RequestOptionsBuilder for T
where
    T: internal::RequestBuilder,
{
    fn with_metadata<K: Into<String>, V: Into<String>>(mut self, key: K, value: V) -> Self {
        self.request_options().add_metadata(key, value);
        self
    }

    fn with_user_agent<V: Into<String>>(mut self, v: V) -> Self {
        self.request_options().set_user_agent(v);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::internal::*;
    use super::*;
    use pretty_assertions::assert_eq;
    use scoped_env::ScopedEnv;

    #[derive(Debug, Default)]
    struct TestBuilder {
        request_options: RequestOptions,
    }
    impl RequestBuilder for TestBuilder {
        fn request_options(&mut self) -> &mut RequestOptions {
            &mut self.request_options
        }
    }

    fn pairs(v: &[(&str, &str)]) -> Vec<(String, String)> {
        v.iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn request_options() {
        let mut opts = RequestOptions::default();
        assert!(opts.metadata().is_empty(), "{opts:?}");
        assert_eq!(opts.user_agent(), &None);

        opts.add_metadata("x-goog-request-params", "parent=projects/p");
        opts.add_metadata("traceparent", "00-abc-def-01");
        opts.add_metadata("x-goog-request-params", "again");
        assert_eq!(
            opts.metadata(),
            pairs(&[
                ("x-goog-request-params", "parent=projects/p"),
                ("traceparent", "00-abc-def-01"),
                ("x-goog-request-params", "again"),
            ])
        );

        opts.set_metadata([("k1", "v1")]);
        assert_eq!(opts.metadata(), pairs(&[("k1", "v1")]));

        opts.set_user_agent("test-only");
        assert_eq!(opts.user_agent().as_deref(), Some("test-only"));
    }

    // This test must run serially because it manipulates the environment.
    #[test]
    #[serial_test::serial]
    fn config_tracing() {
        let _e = ScopedEnv::remove(LOGGING_VAR);
        let config = ClientConfig::default();
        assert!(!config.tracing_enabled(), "expected tracing to be disabled");
        let config = ClientConfig::default().with_tracing();
        assert!(config.tracing_enabled(), "expected tracing to be enabled");

        let _e = ScopedEnv::set(LOGGING_VAR, "true");
        let config = ClientConfig::default();
        assert!(config.tracing_enabled(), "expected tracing to be enabled");

        let _e = ScopedEnv::set(LOGGING_VAR, "not-true");
        let config = ClientConfig::default();
        assert!(!config.tracing_enabled(), "expected tracing to be disabled");
    }

    #[test]
    fn request_options_builder() {
        let mut builder = TestBuilder::default();
        assert!(builder.request_options().metadata().is_empty());
        assert_eq!(builder.request_options().user_agent(), &None);

        let mut builder = TestBuilder::default()
            .with_metadata("k1", "v1")
            .with_metadata("k2", "v2");
        assert_eq!(
            builder.request_options().metadata(),
            pairs(&[("k1", "v1"), ("k2", "v2")])
        );
        assert_eq!(builder.request_options().user_agent(), &None);

        let mut builder = TestBuilder::default().with_user_agent("test-only");
        assert_eq!(
            builder.request_options().user_agent().as_deref(),
            Some("test-only")
        );
        assert!(builder.request_options().metadata().is_empty());
    }
}
