use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use chrono::Utc;
use fitbro::bmi::BmiCategory;
use fitbro::profile::{DietPreference, Gender, UserProfile};
use fitbro::prompt_builder::{build_recommendation_prompt, PromptError, INPUT_VARIABLES};
use fitbro::recommender::{submit, GenerationFailed, RecommendationClient, SubmissionError};
use fitbro::usage::UsageTracker;

fn sample_profile() -> UserProfile {
    UserProfile {
        name: "Arjun".to_string(),
        age: 24,
        gender: Gender::Male,
        weight_kg: 70.0,
        height_cm: 175.0,
        diet_preference: DietPreference::Veg,
        disease: "none".to_string(),
        region: "South".to_string(),
        state: "Karnataka".to_string(),
        allergies: "peanuts".to_string(),
        food_type: "rice-based".to_string(),
    }
}

/// Fake generation service that counts calls and records the last prompt.
struct CountingClient {
    calls: AtomicUsize,
    last_prompt: Mutex<Option<String>>,
    reply: String,
}

impl CountingClient {
    fn new(reply: &str) -> Self {
        Self {
            calls: AtomicUsize::new(0),
            last_prompt: Mutex::new(None),
            reply: reply.to_string(),
        }
    }

    fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl RecommendationClient for CountingClient {
    async fn generate(&self, prompt: &str) -> Result<String, GenerationFailed> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_prompt.lock().unwrap() = Some(prompt.to_string());
        Ok(self.reply.clone())
    }
}

struct FailingClient;

impl RecommendationClient for FailingClient {
    async fn generate(&self, _prompt: &str) -> Result<String, GenerationFailed> {
        Err(GenerationFailed::new("simulated quota exhaustion"))
    }
}

#[test]
fn prompt_contains_field_values_and_counts() {
    let fields = sample_profile().to_field_map();
    let prompt = build_recommendation_prompt(&fields).expect("all fields present");

    for phrase in [
        "6 restaurant names",
        "6 breakfast names",
        "5 dinner names",
        "6 workout names",
    ] {
        assert!(prompt.contains(phrase), "prompt missing phrase: {}", phrase);
    }

    for value in [
        "Arjun",
        "24",
        "Male",
        "70",
        "175",
        "Veg",
        "none",
        "South",
        "Karnataka",
        "peanuts",
        "rice-based",
    ] {
        assert!(prompt.contains(value), "prompt missing value: {}", value);
    }
}

#[test]
fn prompt_fails_on_each_missing_field() {
    let fields = sample_profile().to_field_map();
    for variable in INPUT_VARIABLES {
        let mut partial = fields.clone();
        partial.remove(variable);
        let result = build_recommendation_prompt(&partial);
        assert_eq!(
            result,
            Err(PromptError::MissingField(variable)),
            "expected MissingField for {}",
            variable
        );
    }
}

#[test]
fn prompt_is_deterministic() {
    let fields = sample_profile().to_field_map();
    let first = build_recommendation_prompt(&fields).unwrap();
    let second = build_recommendation_prompt(&fields).unwrap();
    assert_eq!(first, second);
}

#[tokio::test]
async fn validation_failure_makes_no_client_call() {
    let client = CountingClient::new("should never be returned");
    let mut tracker = UsageTracker::new();

    let mut profile = sample_profile();
    profile.disease = String::new();

    let result = submit(&client, &profile, &mut tracker, Utc::now()).await;
    assert!(matches!(result, Err(SubmissionError::Validation(_))));
    assert_eq!(client.call_count(), 0);
    assert_eq!(tracker.submission_count(), 0);
}

#[tokio::test]
async fn whitespace_only_field_fails_validation() {
    let client = CountingClient::new("unused");
    let mut tracker = UsageTracker::new();

    let mut profile = sample_profile();
    profile.region = "   ".to_string();

    let result = submit(&client, &profile, &mut tracker, Utc::now()).await;
    assert!(matches!(result, Err(SubmissionError::Validation(_))));
    assert_eq!(client.call_count(), 0);
}

#[tokio::test]
async fn successful_submission_calls_client_once() {
    let client = CountingClient::new("1. Saravana Bhavan\n2. ...");
    let mut tracker = UsageTracker::new();
    let profile = sample_profile();

    let submission = submit(&client, &profile, &mut tracker, Utc::now())
        .await
        .expect("submission should succeed");

    assert_eq!(client.call_count(), 1);
    assert_eq!(tracker.submission_count(), 1);
    assert_eq!(submission.recommendation, "1. Saravana Bhavan\n2. ...");

    // 70 kg at 175 cm
    assert!((submission.bmi.bmi - 22.857).abs() < 1e-3);
    assert_eq!(submission.bmi.category, BmiCategory::NormalWeight);
    assert_eq!(submission.scatter.color, "green");
    assert_eq!(submission.scatter.age, 24);

    let sent = client.last_prompt.lock().unwrap().clone().unwrap();
    assert!(sent.contains("Person name: Arjun"));
    assert!(sent.contains("Person veg_or_nonveg: Veg"));
}

#[tokio::test]
async fn invalid_height_is_rejected_before_the_client_call() {
    let client = CountingClient::new("unused");
    let mut tracker = UsageTracker::new();

    let mut profile = sample_profile();
    profile.height_cm = 0.0;

    let result = submit(&client, &profile, &mut tracker, Utc::now()).await;
    assert!(matches!(result, Err(SubmissionError::Bmi(_))));
    assert_eq!(client.call_count(), 0);
}

#[tokio::test]
async fn generation_failure_surfaces_as_generation_error() {
    let mut tracker = UsageTracker::new();
    let profile = sample_profile();

    let result = submit(&FailingClient, &profile, &mut tracker, Utc::now()).await;
    match result {
        Err(SubmissionError::Generation(err)) => {
            assert!(err.to_string().contains("simulated quota exhaustion"));
        }
        other => panic!("expected Generation error, got {:?}", other.map(|s| s.recommendation)),
    }
}
