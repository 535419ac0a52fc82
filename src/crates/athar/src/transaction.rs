//! The credential transaction: verify a candidate triple with a live
//! round trip, then commit or discard it atomically.
//!
//! This is the only place in the system that writes the credential
//! store. The candidate is probed first and written only on success, so
//! a failed attempt leaves the previously active triple byte-identical -
//! all three fields together, never partially.

use crate::error::{AtharError, Result};
use crate::store::FileCredentialStore;
use athar_core::{Credentials, Language};
use llm::ProposalModel;
use tracing::{info, warn};

/// Fixed inputs for the verification round trip.
const PROBE_VISION: &str = "test";
const PROBE_COUNTRY: &str = "test";

/// A test-and-commit operation over the credential store.
pub struct CredentialTransaction<'a> {
    store: &'a FileCredentialStore,
}

impl<'a> CredentialTransaction<'a> {
    pub fn new(store: &'a FileCredentialStore) -> Self {
        Self { store }
    }

    /// Verify `candidate` by one `generate_ideas` round trip through
    /// `probe` (an adapter the caller built from the candidate values),
    /// committing the candidate as the new active credentials on
    /// success.
    ///
    /// On any adapter failure the store is not touched and the adapter's
    /// error is returned unchanged, so its message can be reported
    /// verbatim.
    pub async fn test_and_commit(
        &self,
        candidate: &Credentials,
        probe: &dyn ProposalModel,
    ) -> Result<()> {
        info!(provider = %candidate.provider, "testing candidate credentials");

        match probe
            .generate_ideas(PROBE_VISION, PROBE_COUNTRY, Language::English)
            .await
        {
            Ok(_) => {
                self.store.save(candidate)?;
                info!(provider = %candidate.provider, "candidate credentials committed");
                Ok(())
            }
            Err(e) => {
                warn!(provider = %candidate.provider, error = %e, "candidate credentials rejected");
                Err(AtharError::Llm(e))
            }
        }
    }
}
