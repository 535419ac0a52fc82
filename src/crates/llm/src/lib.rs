//! LLM provider adapters for the ATHAR proposal engine.
//!
//! This crate normalizes four incompatible vendor APIs behind one
//! structured-output contract:
//!
//! - **OpenAI** - chat completions with JSON response mode
//! - **Gemini** - Google's `generateContent` API, optionally routed
//!   through a contract-compatible proxy endpoint
//! - **Groq** - OpenAI-compatible chat completions
//! - **OpenRouter** - unified OpenAI-compatible routing API
//!
//! Two seams are exposed. [`CompletionClient`] is the transport seam: one
//! implementation per [`ProviderKind`](athar_core::ProviderKind), each
//! turning a [`CompletionRequest`] into a single HTTP round trip and a
//! plain-text answer. [`ProposalModel`] is the contract seam: the
//! [`Generator`] facade builds a structured-output prompt, issues exactly
//! one call and parses the response into the typed entity.
//!
//! No call is retried internally and no conversational state is kept
//! between calls. Failures map to exactly one of the four
//! [`LlmError`] kinds.
//!
//! # Example
//!
//! ```rust,ignore
//! use athar_core::{Credentials, Language, ProviderKind};
//! use llm::{Generator, ProposalModel};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let credentials = Credentials::new(ProviderKind::OpenAi, "sk-...");
//!     let generator = Generator::from_credentials(&credentials);
//!
//!     let ideas = generator
//!         .generate_ideas("clean water for rural villages", "Yemen", Language::English)
//!         .await?;
//!     for idea in &ideas {
//!         println!("{}: {}", idea.sector, idea.name);
//!     }
//!
//!     let proposal = generator
//!         .generate_proposal(&ideas[0], "Yemen", Language::English)
//!         .await?;
//!     println!("{}", proposal.title);
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod generator;
pub mod json;
pub mod prompts;
pub mod providers;

pub use client::{CompletionClient, CompletionRequest};
pub use config::ProviderConfig;
pub use error::{LlmError, Result};
pub use generator::{Generator, ProposalModel};
pub use providers::client_for;
