//! Utility binary for verifying Gemini API access
//! This is a utility binary, not part of the main application

use mitk_backend::config::{Config, GeminiConfig};
use mitk_backend::gemini::{build_transcript, GeminiClient};
use mitk_backend::knowledge::score_confidence;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("Testing Gemini API access from Rust...\n");

    // Test 1: Check if API key is available
    println!("1. Checking for GEMINI_API_KEY environment variable...");
    let config: GeminiConfig = match Config::from_env() {
        Ok(config) => {
            println!(
                "   ✓ GEMINI_API_KEY is set (length: {} chars)",
                config.gemini.api_key.len()
            );
            config.gemini
        }
        Err(e) => {
            eprintln!("   ✗ {}", e);
            eprintln!("   Make sure to export it: export GEMINI_API_KEY=\"your-key\"");
            return Err(e.into());
        }
    };

    // Test 2: Execute a query
    let question = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "What courses does MITK offer? Answer in one sentence.".to_string());
    println!("\n2. Executing test query...");
    println!("   Model: {}", config.model);
    println!("   Query: '{}'", question);

    let client = GeminiClient::new(&config)?;
    let transcript = build_transcript(&question, &[], 0, None);

    match client.generate(&transcript).await {
        Ok(answer) => {
            println!("   ✓ Response received:");
            println!("   {}", answer.trim());
            println!("\n   Heuristic confidence: {}%", score_confidence(&answer));
        }
        Err(e) if e.is_timeout() => {
            eprintln!("   ✗ Request timed out after {:?}", config.timeout);
        }
        Err(e) => {
            eprintln!("   ✗ Query failed: {}", e);
            eprintln!("\n   Troubleshooting:");
            eprintln!("   - Make sure GEMINI_API_KEY is valid: echo $GEMINI_API_KEY");
            eprintln!("   - Check GEMINI_MODEL and GEMINI_API_BASE_URL if overridden");
        }
    }

    println!("\n✓ All tests completed!");
    Ok(())
}
