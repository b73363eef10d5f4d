use std::collections::HashMap;
use std::error::Error;
use std::fmt;

/// Template variables the recommendation prompt substitutes, in the order
/// they appear in the rendered text.
pub const INPUT_VARIABLES: [&str; 11] = [
    "name",
    "age",
    "gender",
    "weight",
    "height",
    "veg_or_nonveg",
    "disease",
    "region",
    "state",
    "allergics",
    "foodtype",
];

#[derive(Debug, PartialEq, Eq)]
pub enum PromptError {
    MissingField(&'static str),
}

impl fmt::Display for PromptError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PromptError::MissingField(field) => {
                write!(f, "Missing prompt field: {}", field)
            }
        }
    }
}

impl Error for PromptError {}

/// Renders the fixed recommendation instruction from the eleven named
/// fields. Values are substituted verbatim, no escaping. Fails if any of
/// the eleven keys is absent from the mapping; empty values are the
/// validation layer's concern, not this one's.
pub fn build_recommendation_prompt(
    fields: &HashMap<String, String>,
) -> Result<String, PromptError> {
    for variable in INPUT_VARIABLES {
        if !fields.contains_key(variable) {
            return Err(PromptError::MissingField(variable));
        }
    }
    let get = |key: &str| fields[key].as_str();

    Ok(format!(
        "Diet Recommendation System:\n\
         I want you to recommend 6 restaurant names, 6 breakfast names, 5 dinner names, \
         and 6 workout names, based on the following criteria:\n\
         Person name: {}\n\
         Person age: {}\n\
         Person gender: {}\n\
         Person weight: {}\n\
         Person height: {}\n\
         Person veg_or_nonveg: {}\n\
         Person generic disease: {}\n\
         Person region: {}\n\
         Person state: {}\n\
         Person allergics: {}\n\
         Person foodtype: {}.",
        get("name"),
        get("age"),
        get("gender"),
        get("weight"),
        get("height"),
        get("veg_or_nonveg"),
        get("disease"),
        get("region"),
        get("state"),
        get("allergics"),
        get("foodtype"),
    ))
}
