use std::sync::Arc;

use scriba::application::ports::FileLoaderError;
use scriba::application::services::{
    CombinedDispatch, GenerationConfig, StudyError, StudyService,
};
use scriba::domain::{Chapter, DocumentInput, TargetWordCount};
use scriba::infrastructure::llm::MockLlmClient;
use scriba::infrastructure::text_processing::MockFileLoader;

fn service(
    loader: Arc<MockFileLoader>,
    llm: Arc<MockLlmClient>,
    dispatch: CombinedDispatch,
) -> StudyService<MockFileLoader, MockLlmClient> {
    let config = GenerationConfig {
        combined_dispatch: dispatch,
        ..GenerationConfig::default()
    };
    StudyService::new(loader, llm, config)
}

#[tokio::test]
async fn given_unsupported_suffix_when_resolving_then_fails_before_extraction() {
    let loader = Arc::new(MockFileLoader::new());
    let svc = service(
        Arc::clone(&loader),
        Arc::new(MockLlmClient::new()),
        CombinedDispatch::Sequential,
    );

    let result = svc
        .resolve_text(DocumentInput::File {
            filename: "slides.pptx".to_string(),
            data: b"irrelevant".to_vec(),
        })
        .await;

    assert!(matches!(result, Err(StudyError::UnsupportedFormat(name)) if name == "slides.pptx"));
    assert_eq!(loader.calls(), 0);
}

#[tokio::test]
async fn given_supported_file_when_resolving_then_extracts_once() {
    let loader = Arc::new(MockFileLoader::new());
    let svc = service(
        Arc::clone(&loader),
        Arc::new(MockLlmClient::new()),
        CombinedDispatch::Sequential,
    );

    let text = svc
        .resolve_text(DocumentInput::File {
            filename: "lecture.TXT".to_string(),
            data: b"Osmosis moves water.".to_vec(),
        })
        .await
        .unwrap();

    assert_eq!(text, "Osmosis moves water.");
    assert_eq!(loader.calls(), 1);
}

#[tokio::test]
async fn given_blank_extraction_or_text_when_resolving_then_returns_empty_content() {
    let svc = service(
        Arc::new(MockFileLoader::new()),
        Arc::new(MockLlmClient::new()),
        CombinedDispatch::Sequential,
    );

    let from_file = svc
        .resolve_text(DocumentInput::File {
            filename: "blank.txt".to_string(),
            data: b"\n\n  ".to_vec(),
        })
        .await;
    let from_text = svc.resolve_text(DocumentInput::Text("\t".to_string())).await;

    assert!(matches!(from_file, Err(StudyError::EmptyContent)));
    assert!(matches!(from_text, Err(StudyError::EmptyContent)));
}

#[tokio::test]
async fn given_undecodable_file_when_resolving_then_surfaces_extraction_error() {
    let svc = service(
        Arc::new(MockFileLoader::new()),
        Arc::new(MockLlmClient::new()),
        CombinedDispatch::Sequential,
    );

    let result = svc
        .resolve_text(DocumentInput::File {
            filename: "bad.txt".to_string(),
            data: vec![0xC3, 0x28],
        })
        .await;

    assert!(matches!(
        result,
        Err(StudyError::Extraction(FileLoaderError::DecodeFailed(_)))
    ));
}

#[tokio::test]
async fn given_unconfigured_client_when_checking_then_returns_not_configured() {
    let svc = service(
        Arc::new(MockFileLoader::new()),
        Arc::new(MockLlmClient::new().unconfigured()),
        CombinedDispatch::Sequential,
    );

    assert!(matches!(
        svc.ensure_configured(),
        Err(StudyError::NotConfigured)
    ));
}

#[tokio::test]
async fn given_text_when_summarizing_then_counts_words_of_generated_summary() {
    let llm = Arc::new(MockLlmClient::new().with_response("  one two three four  "));
    let svc = service(
        Arc::new(MockFileLoader::new()),
        Arc::clone(&llm),
        CombinedDispatch::Sequential,
    );

    let summary = svc
        .summarize("Body text.", &Chapter::whole_document(), TargetWordCount::default())
        .await
        .unwrap();

    assert_eq!(summary.word_count, 4);
    let request = &llm.requests()[0];
    assert_eq!(request.model, "llama-3.1-70b-versatile");
    assert_eq!(request.max_tokens, 2000);
}

#[tokio::test]
async fn given_text_when_creating_notes_then_uses_notes_budget() {
    let llm = Arc::new(MockLlmClient::new().with_response("- point"));
    let svc = service(
        Arc::new(MockFileLoader::new()),
        Arc::clone(&llm),
        CombinedDispatch::Sequential,
    );

    let notes = svc
        .create_notes("Body text.", &Chapter::whole_document())
        .await
        .unwrap();

    assert_eq!(notes.text, "- point");
    assert_eq!(llm.requests()[0].max_tokens, 3000);
}

#[tokio::test]
async fn given_sequential_dispatch_when_combining_then_summary_request_precedes_notes() {
    let llm = Arc::new(MockLlmClient::new());
    let svc = service(
        Arc::new(MockFileLoader::new()),
        Arc::clone(&llm),
        CombinedDispatch::Sequential,
    );

    let pack = svc
        .summarize_and_notes("Body text.", &Chapter::whole_document(), TargetWordCount::default())
        .await
        .unwrap();

    assert_eq!(pack.summary.text, "Mock answer");
    assert_eq!(pack.notes.text, "Mock answer");
    let requests = llm.requests();
    assert_eq!(requests.len(), 2);
    assert!(requests[0].user_prompt.contains("300-word summary"));
    assert!(requests[1].user_prompt.contains("topic-wise notes"));
}

#[tokio::test]
async fn given_sequential_dispatch_and_failing_summary_when_combining_then_notes_are_never_requested()
 {
    let llm = Arc::new(MockLlmClient::new().failing_from(0));
    let svc = service(
        Arc::new(MockFileLoader::new()),
        Arc::clone(&llm),
        CombinedDispatch::Sequential,
    );

    let result = svc
        .summarize_and_notes("Body text.", &Chapter::whole_document(), TargetWordCount::default())
        .await;

    assert!(matches!(result, Err(StudyError::Completion(_))));
    assert_eq!(llm.calls(), 1);
}

#[tokio::test]
async fn given_concurrent_dispatch_and_one_failure_when_combining_then_returns_error() {
    let llm = Arc::new(MockLlmClient::new().failing_from(1));
    let svc = service(
        Arc::new(MockFileLoader::new()),
        Arc::clone(&llm),
        CombinedDispatch::Concurrent,
    );

    let result = svc
        .summarize_and_notes("Body text.", &Chapter::whole_document(), TargetWordCount::default())
        .await;

    assert!(matches!(result, Err(StudyError::Completion(_))));
}
