// Licensed to the Apache Software Foundation (ASF) under one
// or more contributor license agreements.  See the NOTICE file
// distributed with this work for additional information
// regarding copyright ownership.  The ASF licenses this file
// to you under the Apache License, Version 2.0 (the
// "License"); you may not use this file except in compliance
// with the License.  You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing,
// software distributed under the License is distributed on an
// "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied.  See the License for the
// specific language governing permissions and limitations
// under the License.

use thiserror::Error;

#[derive(Debug, Error)]
#[error(transparent)]
pub struct Error(#[from] InnerError);

impl From<anyhow::Error> for Error {
    fn from(source: anyhow::Error) -> Self {
        Self(InnerError::Other { source })
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorKind {
    InvalidArgument,
    InvalidConfig,
    Internal,
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self.0 {
            InnerError::ReservedKey { .. } | InnerError::InvalidScore { .. } => {
                ErrorKind::InvalidArgument
            }
            InnerError::InvalidConfig { .. } => ErrorKind::InvalidConfig,
            InnerError::Other { .. } => ErrorKind::Internal,
        }
    }
}

/// Works like anyhow's `ensure`, but converts into [Error].
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $msg:literal) => {
        if !$cond {
            return Err(anyhow::anyhow!($msg).into());
        }
    };
    ($cond:expr, $err:expr) => {
        if !$cond {
            return Err($err.into());
        }
    };
    ($cond:expr, $fmt:expr, $($arg:tt)*) => {
        if !$cond {
            return Err(anyhow::anyhow!($fmt, $($arg)*).into());
        }
    };
}

#[derive(Error, Debug)]
pub(crate) enum InnerError {
    #[error("key is reserved for a sentinel, key:{key}")]
    ReservedKey { key: String },

    #[error("score must be finite, score:{score}")]
    InvalidScore { score: f64 },

    #[error("failed to parse config")]
    InvalidConfig {
        #[source]
        source: toml::de::Error,
    },

    #[error(transparent)]
    Other {
        #[from]
        source: anyhow::Error,
    },
}
