//! Transport settings for a `JsonClient`.
//!
//! `HttpConfig` is plain data: it can be deserialized from a settings file and
//! handed to `JsonClient::from_config`. Unset fields keep reqwest's
//! own behavior, so an empty config means no client-side timeout.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::time::Duration;

/// Settings applied once, when the `reqwest::Client` behind a `JsonClient` is built.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HttpConfig {
    /// Whole-exchange deadline; written as seconds
    #[serde(default, with = "seconds")]
    pub timeout: Option<Duration>,
    /// TCP/TLS connect deadline; written as seconds
    #[serde(default, with = "seconds")]
    pub connect_timeout: Option<Duration>,
    /// Sent on every request unless the request sets the same name
    #[serde(default)]
    pub headers: HashMap<String, String>,
    /// Proxy URL for all schemes
    #[serde(default)]
    pub proxy: Option<String>,
    #[serde(default)]
    pub user_agent: Option<String>,
}

impl HttpConfig {
    pub fn builder() -> HttpConfigBuilder {
        HttpConfigBuilder::default()
    }
}

/// Fluent construction of an [`HttpConfig`] in code.
#[derive(Debug, Clone, Default)]
pub struct HttpConfigBuilder {
    config: HttpConfig,
}

impl HttpConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn timeout(mut self, timeout: Option<Duration>) -> Self {
        self.config.timeout = timeout;
        self
    }

    pub fn connect_timeout(mut self, connect_timeout: Option<Duration>) -> Self {
        self.config.connect_timeout = connect_timeout;
        self
    }

    pub fn user_agent<S: Into<String>>(mut self, user_agent: Option<S>) -> Self {
        self.config.user_agent = user_agent.map(Into::into);
        self
    }

    pub fn proxy<S: Into<String>>(mut self, proxy: Option<S>) -> Self {
        self.config.proxy = proxy.map(Into::into);
        self
    }

    /// Add one default header; a repeated name replaces the earlier value.
    pub fn header<K: Into<String>, V: Into<String>>(mut self, name: K, value: V) -> Self {
        self.config.headers.insert(name.into(), value.into());
        self
    }

    pub fn headers(mut self, headers: HashMap<String, String>) -> Self {
        self.config.headers.extend(headers);
        self
    }

    pub fn build(self) -> HttpConfig {
        self.config
    }
}

/// `Option<Duration>` as an optional number of whole seconds.
mod seconds {
    use serde::{Deserialize, Deserializer, Serializer};
    use std::time::Duration;

    pub fn serialize<S: Serializer>(
        value: &Option<Duration>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match value {
            Some(d) => serializer.serialize_u64(d.as_secs()),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<Duration>, D::Error> {
        Ok(Option::<u64>::deserialize(deserializer)?.map(Duration::from_secs))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_collects_fields() {
        let cfg = HttpConfig::builder()
            .timeout(Some(Duration::from_secs(30)))
            .user_agent(Some("agent/1.0"))
            .header("X-Trace", "1")
            .build();
        assert_eq!(cfg.timeout, Some(Duration::from_secs(30)));
        assert_eq!(cfg.connect_timeout, None);
        assert_eq!(cfg.user_agent.as_deref(), Some("agent/1.0"));
        assert_eq!(cfg.headers.get("X-Trace").map(String::as_str), Some("1"));
    }

    #[test]
    fn durations_serialize_as_seconds() {
        let cfg = HttpConfig {
            timeout: Some(Duration::from_secs(5)),
            ..Default::default()
        };
        let v = serde_json::to_value(&cfg).unwrap();
        assert_eq!(v["timeout"], serde_json::json!(5));

        let back: HttpConfig = serde_json::from_value(v).unwrap();
        assert_eq!(back, cfg);

        let sparse: HttpConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(sparse, HttpConfig::default());
    }
}
