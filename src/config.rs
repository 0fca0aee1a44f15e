use std::env;

use crate::summarize::ollama::DEFAULT_MODEL;

/// Contact address for NCBI E-utilities requests.
pub const ENV_ENTREZ_EMAIL: &str = "ENTREZ_EMAIL";
/// Bearer key for the hosted Ollama endpoint; AI analysis is disabled
/// without it.
pub const ENV_OLLAMA_API_KEY: &str = "OLLAMA_API_KEY";
/// Ollama model name.
pub const ENV_OLLAMA_MODEL: &str = "OLLAMA_MODEL";
/// Ollama endpoint override, e.g. a local daemon.
pub const ENV_OLLAMA_HOST: &str = "OLLAMA_HOST";

/// Process-environment settings for the CLI. Flags override these.
#[derive(Clone)]
pub struct Settings {
    /// NCBI contact email, required before any PubMed call.
    pub entrez_email: Option<String>,
    /// Ollama bearer key.
    pub ollama_api_key: Option<String>,
    /// Ollama model name.
    pub ollama_model: String,
    /// Ollama endpoint, `None` means the hosted default.
    pub ollama_host: Option<String>,
}

impl std::fmt::Debug for Settings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // the key itself never reaches logs
        f.debug_struct("Settings")
            .field("entrez_email", &self.entrez_email)
            .field("ollama_api_key", &self.ollama_api_key.as_ref().map(|_| "***"))
            .field("ollama_model", &self.ollama_model)
            .field("ollama_host", &self.ollama_host)
            .finish()
    }
}

impl Settings {
    /// Read settings from the environment, with defaults where the
    /// original system had them.
    pub fn from_env() -> Self {
        Self {
            entrez_email: non_empty(env::var(ENV_ENTREZ_EMAIL).ok()),
            ollama_api_key: non_empty(env::var(ENV_OLLAMA_API_KEY).ok()),
            ollama_model: non_empty(env::var(ENV_OLLAMA_MODEL).ok())
                .unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            ollama_host: non_empty(env::var(ENV_OLLAMA_HOST).ok()),
        }
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn env_round_trip_and_defaults() {
        // one test so the process environment is touched from one place
        env::remove_var(ENV_ENTREZ_EMAIL);
        env::remove_var(ENV_OLLAMA_API_KEY);
        env::remove_var(ENV_OLLAMA_MODEL);
        env::remove_var(ENV_OLLAMA_HOST);

        let settings = Settings::from_env();
        assert_eq!(settings.entrez_email, None);
        assert_eq!(settings.ollama_api_key, None);
        assert_eq!(settings.ollama_model, DEFAULT_MODEL);
        assert_eq!(settings.ollama_host, None);

        env::set_var(ENV_ENTREZ_EMAIL, "user@example.com");
        env::set_var(ENV_OLLAMA_MODEL, "gpt-oss:120b");
        let settings = Settings::from_env();
        assert_eq!(settings.entrez_email.as_deref(), Some("user@example.com"));
        assert_eq!(settings.ollama_model, "gpt-oss:120b");

        // blank values count as unset
        env::set_var(ENV_OLLAMA_API_KEY, "   ");
        let settings = Settings::from_env();
        assert_eq!(settings.ollama_api_key, None);

        env::remove_var(ENV_ENTREZ_EMAIL);
        env::remove_var(ENV_OLLAMA_MODEL);
        env::remove_var(ENV_OLLAMA_API_KEY);
    }

    #[test]
    fn debug_output_redacts_the_key() {
        let settings = Settings {
            entrez_email: None,
            ollama_api_key: Some("secret".to_string()),
            ollama_model: DEFAULT_MODEL.to_string(),
            ollama_host: None,
        };
        let rendered = format!("{settings:?}");
        assert!(!rendered.contains("secret"));
        assert!(rendered.contains("***"));
    }
}
