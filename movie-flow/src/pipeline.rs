use std::sync::Arc;

use tracing::{info, warn};

use crate::assemble::assemble;
use crate::error::{GenerationError, Result};
use crate::generation::Generator;
use crate::normalize::normalize;
use crate::poster::PosterProvider;
use crate::prompt::build_prompt;
use crate::types::{DisplayPayload, SearchQuery};

/// Single-shot orchestration: prompt → generation + poster lookup →
/// cleanup → display payload. One run per submitted title, nothing retained
/// across runs.
pub struct MoviePipeline {
    generator: Option<Arc<dyn Generator>>,
    poster: Arc<dyn PosterProvider>,
}

impl MoviePipeline {
    /// `generator` is `None` when no credential was available at startup;
    /// running the pipeline then reports `MissingCredential` without any
    /// network activity.
    pub fn new(generator: Option<Arc<dyn Generator>>, poster: Arc<dyn PosterProvider>) -> Self {
        Self { generator, poster }
    }

    pub fn generation_available(&self) -> bool {
        self.generator.is_some()
    }

    pub async fn run(&self, query: &SearchQuery) -> Result<DisplayPayload> {
        let generator = self
            .generator
            .as_ref()
            .ok_or(GenerationError::MissingCredential)?;

        info!(title = %query, "running movie info pipeline");
        let prompt = build_prompt(query);

        // The generation call and the poster scrape are independent; run
        // them concurrently. A failed poster lookup is already None here.
        let (generated, poster) = tokio::join!(
            generator.generate(&prompt),
            self.poster.find_poster(query)
        );

        let text = normalize(&generated?);
        if text.is_empty() {
            return Err(GenerationError::EmptyResponse);
        }

        let payload = assemble(&text, poster.as_deref());
        if !payload.structured {
            warn!(title = %query, "generated text does not match the expected section layout");
        }
        Ok(payload)
    }
}
