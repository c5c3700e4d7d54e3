use dotenv::dotenv;
use std::env;

use llmcheck::{check, cli};

#[tokio::main]
async fn main() {
    dotenv().ok();

    // No flags or subcommands; this still gives -h/-V and rejects stray args.
    cli::build_cli().get_matches();

    let api_key = env::var("OPENAI_API_KEY").ok();
    let api_url =
        env::var("OPENAI_API_URL").unwrap_or_else(|_| check::DEFAULT_API_URL.to_string());

    println!("\n🚀 Starting OpenAI API test...\n");

    let success = check::run_check(api_key.as_deref(), &api_url).await;

    println!("\n{}", "=".repeat(60));
    if success {
        println!("✅ All tests passed! OpenAI API is configured correctly.");
    } else {
        println!("❌ Tests failed. Please check the errors above.");
    }
    println!("{}\n", "=".repeat(60));

    std::process::exit(if success { 0 } else { 1 });
}
