use recall_core::errors::RecallResult;
use recall_core::models::Passage;
use recall_core::traits::ISourceProvider;

/// Provider serving a fixed passage set regardless of query.
///
/// Used in tests and for offline operation.
pub struct FixtureProvider {
    passages: Vec<Passage>,
}

impl FixtureProvider {
    pub fn new(passages: Vec<Passage>) -> Self {
        Self { passages }
    }

    /// The reference passage set: three short texts about Swift, SwiftUI,
    /// and RAG. The scenario suite leans on this exact content and order.
    pub fn reference_set() -> Self {
        Self::new(vec![
            Passage::new(
                "Swift is a powerful and intuitive programming language for iOS, iPadOS, \
                 macOS, tvOS, and watchOS. Writing Swift code is interactive and fun, the \
                 syntax is concise yet expressive.",
                "developer.apple.com",
            ),
            Passage::new(
                "SwiftUI is a modern way to declare user interfaces for any Apple platform. \
                 Create beautiful, dynamic apps faster than ever before.",
                "developer.apple.com/swiftui",
            ),
            Passage::new(
                "Retrieval-Augmented Generation (RAG) is an AI framework for retrieving \
                 facts from an external knowledge base to ground large language models.",
                "research.meta.com",
            ),
        ])
    }
}

impl ISourceProvider for FixtureProvider {
    fn search(&self, _query: &str) -> RecallResult<Vec<Passage>> {
        Ok(self.passages.clone())
    }

    fn name(&self) -> &str {
        "fixture"
    }
}
