//! Codeforces HTTP Client Library
//!
//! This library wraps the public Codeforces API endpoint used to list a user's
//! submissions, and reduces the raw history to the set of problems the user
//! has solved.
//!
//! # Features
//!
//! - Accepted-problem fetching for any handle
//! - Deduplication by `(contest_id, index)`, keeping the first occurrence
//! - Stable ordering by problem rating, unrated problems last
//! - Secure TLS using rustls (no OpenSSL dependencies)
//! - Blocking synchronous API with a bounded request timeout
//! - Well-typed errors using thiserror
//!
//! # Example
//!
//! ```no_run
//! use cf_http_client::CfClient;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let client = CfClient::new()?;
//!
//! for problem in client.accepted_problems("tourist")? {
//!     println!("{}{} {} ({})", problem.contest_id, problem.index, problem.name, problem.rating_label());
//! }
//! # Ok(())
//! # }
//! ```

mod client;
mod error;
mod parser;

pub use client::{CfClient, CfClientBuilder, DEFAULT_BASE_URL, DEFAULT_TIMEOUT};
pub use error::CfError;
pub use parser::{RemoteProblem, problem_url};
