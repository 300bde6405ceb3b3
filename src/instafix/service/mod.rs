//! # Fix Request Service
//!
//! Turns a problem statement into a [`FixPayload`] by asking a hosted model for
//! structured output. The service is stateless: every call is one fresh request,
//! with no retries and no caching.
//!
//! Failures are distinct [`FixError`](crate::error::FixError) variants:
//!
//! | Condition                                   | Variant          |
//! |---------------------------------------------|------------------|
//! | No API key (checked before any network I/O) | `Configuration`  |
//! | Network failure or non-success HTTP status  | `Transport`      |
//! | No candidate text in the reply              | `EmptyResponse`  |
//! | Reply text is not JSON matching the schema  | `Format`         |
//!
//! The caller is responsible for trimming and for not sending empty problems.

use crate::error::Result;
use crate::model::FixPayload;
use async_trait::async_trait;

pub mod gemini;
pub mod prompt;

/// Anything that can turn a problem statement into a fix.
///
/// The controller is generic over this so tests can script replies.
#[async_trait(?Send)]
pub trait FixGenerator {
    async fn generate_fix(&self, problem: &str) -> Result<FixPayload>;
}
