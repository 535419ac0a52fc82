//! # ATHAR
//!
//! Turns a short free-text development vision into candidate project
//! ideas, one fully expanded proposal with a line-item budget, and two
//! exported artifacts (a Word-compatible document and an
//! Excel-compatible workbook).
//!
//! This crate is the application layer on top of the engine crates:
//!
//! - **Pipeline** - the two-phase generation flow as an explicit
//!   three-state sequence: `Input -> Ideas(batch) -> Proposal(resolved)`.
//! - **Credential store** - the active provider/key/proxy snapshot,
//!   persisted as TOML under `~/.athar/`.
//! - **Credential transaction** - the only writer of that store: a live
//!   verification round trip that commits on success and leaves the
//!   prior snapshot untouched on failure.
//! - **CLI** - `athar configure`, `athar ideas`, `athar generate`.
//!
//! Everything except the transaction is a pure function of its explicit
//! inputs; no component reads ambient settings.

pub mod cli;
pub mod error;
pub mod pipeline;
pub mod store;
pub mod transaction;

pub use error::{AtharError, Result};
pub use pipeline::{FlowState, Pipeline};
pub use store::FileCredentialStore;
pub use transaction::CredentialTransaction;
