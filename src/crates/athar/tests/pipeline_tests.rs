//! Pipeline flow: the three-state sequence, its refusals, and the
//! renderer contracts observed through it.

mod common;

use athar::{AtharError, FlowState, Pipeline};
use athar_core::Language;
use common::{AcceptingModel, RejectingModel};

#[tokio::test]
async fn explore_moves_input_to_ideas() {
    let mut pipeline = Pipeline::new();
    assert_eq!(*pipeline.state(), FlowState::Input);

    pipeline
        .explore(&AcceptingModel, "vision", "Yemen", Language::English)
        .await
        .unwrap();

    let ids: Vec<&str> = pipeline.ideas().iter().map(|i| i.id.as_str()).collect();
    assert_eq!(ids, vec!["idea-1", "idea-2"]);
}

#[tokio::test]
async fn explore_failure_leaves_state_unchanged() {
    let mut pipeline = Pipeline::new();
    let err = pipeline
        .explore(&RejectingModel { message: "down" }, "v", "c", Language::English)
        .await
        .unwrap_err();

    assert!(matches!(err, AtharError::Llm(_)));
    assert_eq!(*pipeline.state(), FlowState::Input);
}

#[tokio::test]
async fn expand_resolves_the_selected_idea() {
    let mut pipeline = Pipeline::new();
    pipeline
        .explore(&AcceptingModel, "vision", "Yemen", Language::English)
        .await
        .unwrap();
    pipeline
        .expand(&AcceptingModel, "idea-2", "Yemen", Language::English)
        .await
        .unwrap();

    let proposal = pipeline.proposal().unwrap();
    assert_eq!(proposal.title, "School meals Programme");
}

#[tokio::test]
async fn expand_requires_a_batch() {
    let mut pipeline = Pipeline::new();
    let err = pipeline
        .expand(&AcceptingModel, "idea-1", "Yemen", Language::English)
        .await
        .unwrap_err();
    assert!(matches!(err, AtharError::NoIdeaBatch));
}

#[tokio::test]
async fn expand_rejects_an_unknown_id_and_keeps_the_batch() {
    let mut pipeline = Pipeline::new();
    pipeline
        .explore(&AcceptingModel, "vision", "Yemen", Language::English)
        .await
        .unwrap();

    let err = pipeline
        .expand(&AcceptingModel, "idea-9", "Yemen", Language::English)
        .await
        .unwrap_err();

    assert!(matches!(err, AtharError::UnknownIdea(_)));
    assert_eq!(pipeline.ideas().len(), 2);
}

#[tokio::test]
async fn expand_failure_keeps_the_ideas_state() {
    let mut pipeline = Pipeline::new();
    pipeline
        .explore(&AcceptingModel, "vision", "Yemen", Language::English)
        .await
        .unwrap();

    let err = pipeline
        .expand(&RejectingModel { message: "quota" }, "idea-1", "Yemen", Language::English)
        .await
        .unwrap_err();

    assert!(matches!(err, AtharError::Llm(_)));
    assert_eq!(pipeline.ideas().len(), 2);
    assert!(matches!(pipeline.proposal(), Err(AtharError::ProposalNotReady)));
}

#[tokio::test]
async fn exports_refuse_without_a_resolved_proposal() {
    let pipeline = Pipeline::new();

    assert!(matches!(
        pipeline.export_document(Language::Arabic),
        Err(AtharError::ProposalNotReady)
    ));
    assert!(matches!(
        pipeline.export_workbook(Language::Arabic),
        Err(AtharError::ProposalNotReady)
    ));
}

#[tokio::test]
async fn new_vision_discards_the_resolved_proposal() {
    let mut pipeline = Pipeline::new();
    pipeline
        .explore(&AcceptingModel, "vision", "Yemen", Language::English)
        .await
        .unwrap();
    pipeline
        .expand(&AcceptingModel, "idea-1", "Yemen", Language::English)
        .await
        .unwrap();
    assert!(pipeline.proposal().is_ok());

    pipeline
        .explore(&AcceptingModel, "another vision", "Yemen", Language::English)
        .await
        .unwrap();
    assert!(matches!(pipeline.proposal(), Err(AtharError::ProposalNotReady)));
}

#[tokio::test]
async fn full_flow_exports_both_artifacts() {
    let mut pipeline = Pipeline::new();
    pipeline
        .explore(&AcceptingModel, "vision", "Yemen", Language::English)
        .await
        .unwrap();
    pipeline
        .expand(&AcceptingModel, "idea-1", "Yemen", Language::English)
        .await
        .unwrap();

    let document = pipeline.export_document(Language::English).unwrap();
    let workbook = pipeline.export_workbook(Language::English).unwrap();

    assert_eq!(document.filename, "ATHAR_Proposal_Village_wells_Programme.docx");
    assert_eq!(workbook.filename, "ATHAR_Budget_Village wells P.xlsx");
    assert!(!document.bytes.is_empty());
    assert!(!workbook.bytes.is_empty());

    // Rendering is idempotent: a second export carries the same
    // structural content.
    assert_eq!(pipeline.export_document(Language::English).unwrap().filename, document.filename);
}
