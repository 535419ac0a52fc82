//! Credential transaction: commit on success, no write at all on
//! failure.

mod common;

use athar::{AtharError, CredentialTransaction, FileCredentialStore};
use athar_core::{Credentials, ProviderKind};
use common::{AcceptingModel, RejectingModel};
use tempfile::TempDir;

fn store_in(dir: &TempDir) -> FileCredentialStore {
    FileCredentialStore::at_path(dir.path().join("credentials.toml"))
}

#[tokio::test]
async fn accepted_candidate_becomes_the_active_triple() {
    let dir = TempDir::new().unwrap();
    let store = store_in(&dir);

    let candidate = Credentials::new(ProviderKind::Gemini, "new-key")
        .with_proxy("https://bridge.example");

    CredentialTransaction::new(&store)
        .test_and_commit(&candidate, &AcceptingModel)
        .await
        .unwrap();

    assert_eq!(store.load().unwrap(), Some(candidate));
}

#[tokio::test]
async fn rejected_candidate_leaves_the_prior_triple_untouched() {
    let dir = TempDir::new().unwrap();
    let store = store_in(&dir);

    let active = Credentials::new(ProviderKind::Gemini, "old-key")
        .with_proxy("https://old-bridge.example");
    store.save(&active).unwrap();

    let candidate = Credentials::new(ProviderKind::OpenAi, "bad-key");
    let err = CredentialTransaction::new(&store)
        .test_and_commit(&candidate, &RejectingModel { message: "invalid api key" })
        .await
        .unwrap_err();

    // All three fields restored together - provider, key and proxy.
    assert_eq!(store.load().unwrap(), Some(active));
    // The reported message is the adapter's, verbatim.
    assert_eq!(err.to_string(), "Authentication failed: invalid api key");
}

#[tokio::test]
async fn rejected_candidate_with_empty_store_stays_unconfigured() {
    let dir = TempDir::new().unwrap();
    let store = store_in(&dir);

    let candidate = Credentials::new(ProviderKind::Groq, "bad-key");
    let err = CredentialTransaction::new(&store)
        .test_and_commit(&candidate, &RejectingModel { message: "denied" })
        .await
        .unwrap_err();

    assert!(matches!(err, AtharError::Llm(_)));
    assert_eq!(store.load().unwrap(), None);
}
