// Copyright 2025 JiangLong.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::path::PathBuf;
use thiserror::Error;
pub type Result<T> = std::result::Result<T, TopologyError>;

#[derive(Error, Debug)]
pub enum TopologyError {
    #[error("could not open file {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("could not unmarshal {origin} as json: {source}")]
    Decode {
        origin: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("expected `name:address` pairs but got {0:?}")]
    MalformedEntry(String),

    #[error("{}", format_aggregate(.0))]
    Aggregate(Vec<TopologyError>),

    #[error("{kind} '{name}' already exists")]
    AlreadyExists { kind: String, name: String },

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

fn format_aggregate(errors: &[TopologyError]) -> String {
    let header = if errors.len() == 1 {
        "1 error occurred:".to_string()
    } else {
        format!("{} errors occurred:", errors.len())
    };

    errors.iter().fold(header, |mut out, err| {
        out.push_str(&format!("\n\t* {}", err));
        out
    })
}

impl TopologyError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub fn decode(origin: impl Into<String>, source: serde_json::Error) -> Self {
        Self::Decode {
            origin: origin.into(),
            source,
        }
    }

    pub fn validation(context: impl Into<String>) -> Self {
        Self::Validation(context.into())
    }

    pub fn config_error(context: impl Into<String>) -> Self {
        Self::Config(context.into())
    }

    pub fn already_exists(kind: impl Into<String>, name: impl Into<String>) -> Self {
        Self::AlreadyExists {
            kind: kind.into(),
            name: name.into(),
        }
    }

    /// Collapse accumulated per-entry errors into one value, `None` when there are none.
    pub fn aggregate(errors: Vec<TopologyError>) -> Option<Self> {
        if errors.is_empty() {
            None
        } else {
            Some(Self::Aggregate(errors))
        }
    }

    /// Individual errors carried by this value; a non-aggregate yields itself.
    pub fn errors(&self) -> Vec<&TopologyError> {
        match self {
            Self::Aggregate(errors) => errors.iter().collect(),
            other => vec![other],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_aggregate_empty_is_none() {
        assert!(TopologyError::aggregate(Vec::new()).is_none());
    }

    #[test]
    fn test_aggregate_message_lists_every_entry() {
        let err = TopologyError::aggregate(vec![
            TopologyError::MalformedEntry("bad".to_string()),
            TopologyError::MalformedEntry("a:b:c".to_string()),
        ])
        .unwrap();

        let msg = err.to_string();
        assert!(msg.starts_with("2 errors occurred:"));
        assert!(msg.contains("\t* expected `name:address` pairs but got \"bad\""));
        assert!(msg.contains("\"a:b:c\""));
        assert_eq!(err.errors().len(), 2);
    }

    #[test]
    fn test_io_error_names_path() {
        let err = TopologyError::io(
            "/tmp/missing.json",
            std::io::Error::new(std::io::ErrorKind::NotFound, "no such file"),
        );
        assert!(err.to_string().contains("\"/tmp/missing.json\""));
        assert_eq!(err.errors().len(), 1);
    }
}
