/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

use thiserror::Error;

/// Error carrying a domain and a numeric code, raised from test transforms.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{domain} error {code}")]
pub struct DomainError {
    pub domain: &'static str,
    pub code: i64,
}

impl DomainError {
    pub fn new(code: i64) -> Self {
        Self {
            domain: "transform",
            code,
        }
    }
}
