pub mod assemble;
pub mod config;
pub mod error;
pub mod generation;
pub mod normalize;
pub mod pipeline;
pub mod poster;
pub mod prompt;
pub mod types;

// Re-export commonly used types
pub use assemble::{POSTER_PLACEHOLDER, SECTION_TITLES, assemble, has_expected_sections};
pub use config::{CREDENTIAL_ENV_VAR, Config, Credential};
pub use error::{GenerationError, Result};
pub use generation::{GeminiClient, Generator};
pub use normalize::normalize;
pub use pipeline::MoviePipeline;
pub use poster::{ImdbPosterProvider, PosterProvider};
pub use prompt::build_prompt;
pub use types::{DisplayPayload, PosterUrl, SearchQuery};
