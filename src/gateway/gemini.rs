//! Gemini REST client
//!
//! Calls the generateContent endpoint of the Generative Language API.
//! Prompts and model choices are fixed by the portal.

use serde::{Deserialize, Serialize};

use super::{ChatMessage, ChatRole, GatewayError, SearchLink, SearchResult};

const BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

const DESCRIPTION_MODEL: &str = "gemini-2.5-flash";
const SEARCH_MODEL: &str = "gemini-2.5-flash";
const IMAGE_MODEL: &str = "gemini-3-pro-image-preview";
const CHAT_MODEL: &str = "gemini-3-pro-preview";

const CHAT_SYSTEM_INSTRUCTION: &str = "You are a helpful assistant for P.A. College of Engineering (PACE) event management system. You help students find events, clubs plan them, and answer questions about the college. Keep answers concise.";

// =========================================================================
// Wire types
// =========================================================================

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateRequest {
    contents: Vec<Content>,
    #[serde(skip_serializing_if = "Option::is_none")]
    system_instruction: Option<Content>,
    #[serde(skip_serializing_if = "Option::is_none")]
    tools: Option<Vec<Tool>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    generation_config: Option<GenerationConfig>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Content {
    #[serde(skip_serializing_if = "Option::is_none")]
    role: Option<String>,
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Part {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    inline_data: Option<InlineData>,
}

#[derive(Debug, Serialize, Deserialize)]
struct InlineData {
    data: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct Tool {
    google_search: serde_json::Value,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    image_config: ImageConfig,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ImageConfig {
    aspect_ratio: String,
    image_size: String,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Candidate {
    content: Option<Content>,
    #[serde(default)]
    grounding_metadata: Option<GroundingMetadata>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GroundingMetadata {
    #[serde(default)]
    grounding_chunks: Vec<GroundingChunk>,
}

#[derive(Debug, Deserialize)]
struct GroundingChunk {
    web: Option<WebSource>,
}

#[derive(Debug, Deserialize)]
struct WebSource {
    #[serde(default)]
    title: String,
    uri: String,
}

impl GenerateRequest {
    fn prompt(text: impl Into<String>) -> Self {
        Self {
            contents: vec![Content {
                role: Some("user".to_string()),
                parts: vec![Part {
                    text: Some(text.into()),
                    inline_data: None,
                }],
            }],
            system_instruction: None,
            tools: None,
            generation_config: None,
        }
    }
}

impl GenerateResponse {
    /// First candidate's concatenated text parts
    fn text(&self) -> Option<String> {
        let content = self.candidates.first()?.content.as_ref()?;
        let text: String = content
            .parts
            .iter()
            .filter_map(|p| p.text.as_deref())
            .collect();

        if text.is_empty() {
            None
        } else {
            Some(text)
        }
    }

    /// First inline image payload, as a data URI
    fn image_data_uri(&self) -> Option<String> {
        let content = self.candidates.first()?.content.as_ref()?;
        content
            .parts
            .iter()
            .find_map(|p| p.inline_data.as_ref())
            .map(|d| format!("data:image/png;base64,{}", d.data))
    }

    fn grounding_links(&self) -> Vec<SearchLink> {
        self.candidates
            .first()
            .and_then(|c| c.grounding_metadata.as_ref())
            .map(|m| {
                m.grounding_chunks
                    .iter()
                    .filter_map(|chunk| chunk.web.as_ref())
                    .map(|web| SearchLink {
                        title: web.title.clone(),
                        url: web.uri.clone(),
                    })
                    .collect()
            })
            .unwrap_or_default()
    }
}

// =========================================================================
// Gateway client
// =========================================================================

/// Client for the portal's generative features
#[derive(Debug, Clone)]
pub struct GeminiGateway {
    client: reqwest::Client,
    api_key: Option<String>,
    base_url: String,
}

impl GeminiGateway {
    pub fn new(api_key: Option<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key,
            base_url: BASE_URL.to_string(),
        }
    }

    /// Point the client at a different endpoint (tests)
    #[cfg(test)]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }

    /// Write a short event description; never fails
    pub async fn generate_description(&self, title: &str, category: &str) -> String {
        if !self.is_configured() {
            return "API Key missing. Cannot generate description.".to_string();
        }

        let prompt = format!(
            "Write a catchy, short event description (max 50 words) for a college event titled \"{}\" in the category \"{}\" at P.A. College of Engineering (PACE).",
            title, category
        );

        match self.generate(DESCRIPTION_MODEL, GenerateRequest::prompt(prompt)).await {
            Ok(response) => response
                .text()
                .unwrap_or_else(|| "No description generated.".to_string()),
            Err(e) => {
                tracing::error!("Description generation failed: {}", e);
                "Failed to generate description.".to_string()
            }
        }
    }

    /// Generate a poster image, returned as a PNG data URI
    ///
    /// Unlike the text surfaces this propagates failure; the caller shows
    /// its own error state instead of a placeholder string.
    pub async fn generate_image(
        &self,
        prompt: &str,
        aspect_ratio: &str,
    ) -> Result<String, GatewayError> {
        if !self.is_configured() {
            return Err(GatewayError::Unconfigured);
        }

        let mut request = GenerateRequest::prompt(prompt);
        request.generation_config = Some(GenerationConfig {
            image_config: ImageConfig {
                aspect_ratio: aspect_ratio.to_string(),
                image_size: "1K".to_string(),
            },
        });

        let response = self.generate(IMAGE_MODEL, request).await?;

        response
            .image_data_uri()
            .ok_or_else(|| GatewayError::Malformed("No image data found in response".to_string()))
    }

    /// Search the web with grounding; never fails
    pub async fn grounded_search(&self, query: &str) -> SearchResult {
        if !self.is_configured() {
            return SearchResult {
                text: "API Key missing".to_string(),
                links: Vec::new(),
            };
        }

        let mut request = GenerateRequest::prompt(query);
        request.tools = Some(vec![Tool {
            google_search: serde_json::json!({}),
        }]);

        match self.generate(SEARCH_MODEL, request).await {
            Ok(response) => SearchResult {
                links: response.grounding_links(),
                text: response
                    .text()
                    .unwrap_or_else(|| "No results found.".to_string()),
            },
            Err(e) => {
                tracing::error!("Grounded search failed: {}", e);
                SearchResult {
                    text: "Error performing search.".to_string(),
                    links: Vec::new(),
                }
            }
        }
    }

    /// Continue an assistant conversation; never fails
    pub async fn chat(&self, history: &[ChatMessage], message: &str) -> String {
        if !self.is_configured() {
            return "API Key missing.".to_string();
        }

        let mut contents: Vec<Content> = history
            .iter()
            .map(|msg| Content {
                role: Some(
                    match msg.role {
                        ChatRole::User => "user",
                        ChatRole::Model => "model",
                    }
                    .to_string(),
                ),
                parts: vec![Part {
                    text: Some(msg.text.clone()),
                    inline_data: None,
                }],
            })
            .collect();
        contents.push(Content {
            role: Some("user".to_string()),
            parts: vec![Part {
                text: Some(message.to_string()),
                inline_data: None,
            }],
        });

        let request = GenerateRequest {
            contents,
            system_instruction: Some(Content {
                role: None,
                parts: vec![Part {
                    text: Some(CHAT_SYSTEM_INSTRUCTION.to_string()),
                    inline_data: None,
                }],
            }),
            tools: None,
            generation_config: None,
        };

        match self.generate(CHAT_MODEL, request).await {
            Ok(response) => response
                .text()
                .unwrap_or_else(|| "I didn't understand that.".to_string()),
            Err(e) => {
                tracing::error!("Chat failed: {}", e);
                "Sorry, I'm having trouble connecting right now.".to_string()
            }
        }
    }

    async fn generate(
        &self,
        model: &str,
        request: GenerateRequest,
    ) -> Result<GenerateResponse, GatewayError> {
        let key = self.api_key.as_deref().ok_or(GatewayError::Unconfigured)?;
        let url = format!("{}/models/{}:generateContent", self.base_url, model);

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", key)
            .json(&request)
            .send()
            .await?
            .error_for_status()?;

        Ok(response.json().await?)
    }
}
