use reqwest::Client;
use std::error::Error;
use std::fmt;
use termimad::MadSkin;

use crate::diagnostics;
use crate::types::{ChatRequest, ChatResponse, Message};
use crate::utils;

pub const DEFAULT_API_URL: &str = "https://api.openai.com/v1/chat/completions";

const TEST_MODEL: &str = "gpt-4o";
const TEST_MAX_TOKENS: u32 = 50;
const TEST_TEMPERATURE: f32 = 0.7;
const SYSTEM_PROMPT: &str = "You are a helpful assistant. Respond briefly.";
const USER_PROMPT: &str = "Hello, this is a test. Please respond with 'API test successful!'";

#[derive(Debug)]
pub enum CheckError {
    RequestFailed(String),
    MalformedResponse(String),
}

impl fmt::Display for CheckError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            CheckError::RequestFailed(msg) => write!(f, "{}", msg),
            CheckError::MalformedResponse(msg) => write!(f, "unexpected response format: {}", msg),
        }
    }
}

impl Error for CheckError {}

/// Runs the full connectivity diagnostic: credential presence, one test
/// completion against `api_url`, result reporting. Returns the overall
/// outcome; the caller maps it to the process exit code.
pub async fn run_check(api_key: Option<&str>, api_url: &str) -> bool {
    println!("{}", "=".repeat(60));
    println!("Testing OpenAI API Configuration");
    println!("{}", "=".repeat(60));

    // Fail fast on a missing credential, before any network activity.
    let api_key = match api_key {
        Some(key) if !key.is_empty() => key,
        _ => {
            println!("❌ ERROR: OPENAI_API_KEY environment variable not found!");
            println!("\nPlease set your OpenAI API key:");
            println!("  export OPENAI_API_KEY='sk-your-key-here'");
            println!("\nOr create a .env file with:");
            println!("  OPENAI_API_KEY=sk-your-key-here");
            return false;
        }
    };

    println!("✅ API Key found: {}", utils::mask_api_key(api_key));

    println!("\n📡 Initializing OpenAI client...");
    let client = match Client::builder().build() {
        Ok(client) => client,
        Err(e) => {
            println!("❌ ERROR: Failed to initialize HTTP client: {}", e);
            return false;
        }
    };
    println!("✅ Client initialized successfully");

    println!("\n🧪 Testing API call with a simple completion...");
    println!("   Sending test message: 'Hello, this is a test'");

    match send_test_completion(&client, api_key, api_url).await {
        Ok(response) => {
            println!("\n✅ API call successful!");
            println!("📝 Response:");
            let skin = MadSkin::default();
            skin.print_text(response.reply_text().unwrap_or_default());
            println!("📊 Model used: {}", response.model);
            match response.total_tokens() {
                Some(total) => println!("📊 Tokens used: {}", total),
                None => println!("📊 Tokens used: N/A"),
            }
            true
        }
        Err(e) => {
            let message = e.to_string();
            let hint = diagnostics::classify(&message);
            println!("\n❌ ERROR: API call failed: {}", message);
            println!("   Error category: {}", hint);
            diagnostics::print_hint(hint);
            false
        }
    }
}

/// Sends the single fixed test completion. A non-2xx status is surfaced as
/// an error carrying the status line and response body, so classification
/// can see markers like `insufficient_quota` in the server's payload.
async fn send_test_completion(
    client: &Client,
    api_key: &str,
    api_url: &str,
) -> Result<ChatResponse, Box<dyn Error>> {
    let mut request = ChatRequest::new(TEST_MODEL, TEST_MAX_TOKENS, TEST_TEMPERATURE);
    request.messages.push(Message::new("system", SYSTEM_PROMPT));
    request.messages.push(Message::new("user", USER_PROMPT));

    let response = client
        .post(api_url)
        .bearer_auth(api_key)
        .json(&request)
        .send()
        .await?;

    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(Box::new(CheckError::RequestFailed(format!(
            "{} - {}",
            status, body
        ))));
    }

    let parsed: ChatResponse = response
        .json()
        .await
        .map_err(|e| CheckError::MalformedResponse(e.to_string()))?;

    if parsed.choices.is_empty() {
        return Err(Box::new(CheckError::MalformedResponse(
            "no choices in response".to_string(),
        )));
    }

    Ok(parsed)
}
