use anyhow::{Context, Result};
use chrono::Utc;
use fitbro::api_connection::endpoints::Provider;
use fitbro::charts::weekly_usage_series;
use fitbro::cli::parse_args;
use fitbro::recommender::{submit, GeminiClient, GOOGLE_API_KEY_ENV_VAR};
use fitbro::usage::UsageTracker;

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok(); // Load .env file for API keys

    let cli_args = parse_args();
    let profile = cli_args.to_profile();

    let client = GeminiClient::new(
        Provider::gemini(GOOGLE_API_KEY_ENV_VAR),
        cli_args.model.clone(),
    );
    let mut tracker = UsageTracker::new();

    println!(
        "Requesting diet and workout recommendations for {} (model: {})...",
        profile.name,
        client.model()
    );

    match submit(&client, &profile, &mut tracker, Utc::now()).await {
        Ok(submission) => {
            println!("\nRecommendations:\n{}", submission.recommendation);
            println!(
                "\nYour BMI is {:.2}, which falls under the category: {}",
                submission.bmi.bmi, submission.bmi.category
            );

            let scatter_json = serde_json::to_string_pretty(&submission.scatter)
                .context("Failed to serialize BMI scatter point")?;
            println!("\nBMI scatter point:\n{}", scatter_json);
        }
        Err(e) => {
            eprintln!("\nError processing submission: {}", e);
            return Err(anyhow::anyhow!("Submission failed: {}", e));
        }
    }

    let usage_series = weekly_usage_series(Utc::now().date_naive());
    let usage_json = serde_json::to_string_pretty(&usage_series)
        .context("Failed to serialize weekly usage series")?;
    println!("\nWeekly usage tracking:\n{}", usage_json);
    println!("Submissions this session: {}", tracker.submission_count());

    Ok(())
}
