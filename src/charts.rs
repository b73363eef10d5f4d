use chrono::{Duration, NaiveDate};
use serde::Serialize;

use crate::bmi::{BmiCategory, BmiResult};

/// Single marker for the 3-D BMI scatter chart (age, weight, bmi), colored
/// by category. This is the data handed to whatever renders the chart; no
/// drawing happens here.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct BmiScatterPoint {
    pub age: u32,
    pub weight_kg: f32,
    pub bmi: f32,
    pub category: BmiCategory,
    pub color: &'static str,
    pub hover_text: String,
}

pub fn bmi_scatter_point(age: u32, weight_kg: f32, result: &BmiResult) -> BmiScatterPoint {
    BmiScatterPoint {
        age,
        weight_kg,
        bmi: result.bmi,
        category: result.category,
        color: result.category.marker_color(),
        hover_text: format!(
            "Age: {}<br>Weight: {} kg<br>BMI: {:.2}<br>Category: {}",
            age, weight_kg, result.bmi, result.category
        ),
    }
}

/// Placeholder weekly usage counts. The bar chart is not driven by real
/// telemetry; these values stand in for it.
pub const USAGE_PLACEHOLDER_COUNTS: [u32; 15] =
    [10, 20, 15, 25, 30, 5, 10, 8, 15, 18, 8, 15, 10, 20, 22];

/// First Monday of the tracked period.
const USAGE_SERIES_START: (i32, u32, u32) = (2024, 1, 1);

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct WeeklyUsageSeries {
    pub weeks: Vec<String>,
    pub counts: Vec<u32>,
}

/// Builds the weekly usage bar series: Mondays from 2024-01-01 through
/// `today`, paired element-wise with the placeholder counts. The shorter of
/// the two lists bounds the series, matching what the chart renderer would
/// pair up anyway.
pub fn weekly_usage_series(today: NaiveDate) -> WeeklyUsageSeries {
    let (y, m, d) = USAGE_SERIES_START;
    let start = NaiveDate::from_ymd_opt(y, m, d).expect("fixed series start date is valid");

    let mut mondays = Vec::new();
    let mut week = start;
    while week <= today {
        mondays.push(week.format("%Y-%m-%d").to_string());
        week = week + Duration::weeks(1);
    }

    let len = mondays.len().min(USAGE_PLACEHOLDER_COUNTS.len());
    mondays.truncate(len);
    WeeklyUsageSeries {
        weeks: mondays,
        counts: USAGE_PLACEHOLDER_COUNTS[..len].to_vec(),
    }
}
