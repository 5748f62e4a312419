use thiserror::Error;

pub type Result<T> = std::result::Result<T, GenerationError>;

/// Failure taxonomy for the generation path. Poster lookup failures are not
/// represented here: they degrade to an absent poster at the source.
#[derive(Error, Debug)]
pub enum GenerationError {
    #[error("generation credential is missing")]
    MissingCredential,

    #[error("could not reach the generation service: {0}")]
    Connectivity(String),

    #[error("generation quota exhausted")]
    QuotaExceeded,

    #[error("generation service returned no text")]
    EmptyResponse,

    #[error("generation failed: {0}")]
    Generation(String),
}

const MISSING_CREDENTIAL_MESSAGE: &str =
    "⚠️ No se puede realizar la búsqueda porque el servicio de IA no está disponible.";

const CONNECTIVITY_MESSAGE: &str = "⚠️ Error de Conexión: No se pudo conectar con el servicio de IA. \
     Por favor, verifica tu conexión a internet e inténtalo de nuevo.";

const QUOTA_MESSAGE: &str = "⚠️ Límite de Cuota Alcanzado: Hemos alcanzado el límite de consultas permitidas. \
     Por favor, intenta más tarde.";

const EMPTY_RESPONSE_MESSAGE: &str = "Lo siento, no pude generar información para esta película. \
     Por favor, intenta con otra película.";

impl GenerationError {
    /// Text rendered in place of results. Every variant maps to a message;
    /// nothing on the generation path reaches the user as a crash.
    pub fn user_message(&self) -> String {
        match self {
            Self::MissingCredential => MISSING_CREDENTIAL_MESSAGE.to_string(),
            Self::Connectivity(_) => CONNECTIVITY_MESSAGE.to_string(),
            Self::QuotaExceeded => QUOTA_MESSAGE.to_string(),
            Self::EmptyResponse => EMPTY_RESPONSE_MESSAGE.to_string(),
            Self::Generation(detail) => format!(
                "⚠️ Error Inesperado: {detail}. Por favor, intenta de nuevo en unos momentos."
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_response_maps_to_exact_fallback_text() {
        assert_eq!(
            GenerationError::EmptyResponse.user_message(),
            "Lo siento, no pude generar información para esta película. \
     Por favor, intenta con otra película."
        );
    }

    #[test]
    fn each_kind_gets_a_distinct_message() {
        let messages = [
            GenerationError::MissingCredential.user_message(),
            GenerationError::Connectivity("refused".into()).user_message(),
            GenerationError::QuotaExceeded.user_message(),
            GenerationError::EmptyResponse.user_message(),
            GenerationError::Generation("boom".into()).user_message(),
        ];
        for (i, a) in messages.iter().enumerate() {
            for b in &messages[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn generic_message_carries_the_detail() {
        let message = GenerationError::Generation("backend exploded".into()).user_message();
        assert!(message.contains("backend exploded"));
        assert!(message.starts_with("⚠️ Error Inesperado"));
    }
}
