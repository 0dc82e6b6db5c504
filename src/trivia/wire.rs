use serde::{Deserialize, Serialize};

use crate::error::{TriviaError, TriviaResult};
use crate::model::{Category, Difficulty};

/// A question exactly as the service sends it; text is still HTML-escaped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawQuestion {
    pub question: String,
    pub correct_answer: String,
    pub incorrect_answers: Vec<String>,
    pub category: String,
    pub difficulty: Difficulty,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
}

#[derive(Debug, Deserialize)]
struct QuestionsResponse {
    response_code: i64,
    #[serde(default)]
    results: Vec<RawQuestion>,
}

#[derive(Debug, Deserialize)]
struct CategoriesResponse {
    #[serde(default)]
    trivia_categories: Vec<Category>,
}

fn check_status(status: u16) -> TriviaResult<()> {
    if (200..300).contains(&status) {
        Ok(())
    } else {
        Err(TriviaError::Network(format!("HTTP error! status: {status}")))
    }
}

fn map_response_code(code: i64) -> TriviaResult<()> {
    match code {
        0 => Ok(()),
        1 => Err(TriviaError::NoResults),
        2 => Err(TriviaError::InvalidParameter),
        3 => Err(TriviaError::SessionExpired),
        4 => Err(TriviaError::ResultsExhausted),
        other => Err(TriviaError::UnknownApi(other)),
    }
}

/// Interprets a response from the questions endpoint.
pub fn parse_questions(status: u16, body: &str) -> TriviaResult<Vec<RawQuestion>> {
    check_status(status)?;
    let response: QuestionsResponse =
        serde_json::from_str(body).map_err(|err| TriviaError::Decode(err.to_string()))?;
    map_response_code(response.response_code)?;
    Ok(response.results)
}

/// Interprets a response from the category listing endpoint.
pub fn parse_categories(status: u16, body: &str) -> TriviaResult<Vec<Category>> {
    check_status(status)?;
    let response: CategoriesResponse =
        serde_json::from_str(body).map_err(|err| TriviaError::Decode(err.to_string()))?;
    Ok(response.trivia_categories)
}

#[cfg(test)]
mod tests {
    use super::*;

    const ONE_QUESTION: &str = r#"{
        "response_code": 0,
        "results": [{
            "type": "multiple",
            "difficulty": "easy",
            "category": "Science &amp; Nature",
            "question": "What is H&#039;2O?",
            "correct_answer": "Water",
            "incorrect_answers": ["Salt", "Sand", "Air"]
        }]
    }"#;

    #[test]
    fn success_returns_raw_undecoded_results() {
        let results = parse_questions(200, ONE_QUESTION).expect("valid payload");
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].category, "Science &amp; Nature");
        assert_eq!(results[0].difficulty, Difficulty::Easy);
        assert_eq!(results[0].kind.as_deref(), Some("multiple"));
    }

    #[test]
    fn response_codes_map_to_distinct_errors() {
        let cases = [
            (1, TriviaError::NoResults),
            (2, TriviaError::InvalidParameter),
            (3, TriviaError::SessionExpired),
            (4, TriviaError::ResultsExhausted),
            (5, TriviaError::UnknownApi(5)),
        ];
        for (code, expected) in cases {
            let body = format!(r#"{{"response_code": {code}, "results": []}}"#);
            assert_eq!(parse_questions(200, &body).unwrap_err(), expected);
        }
    }

    #[test]
    fn http_failure_is_a_network_error() {
        let err = parse_questions(503, "Service Unavailable").unwrap_err();
        assert!(matches!(err, TriviaError::Network(msg) if msg.contains("503")));
    }

    #[test]
    fn malformed_payload_is_a_decode_error() {
        assert!(matches!(
            parse_questions(200, "<html>").unwrap_err(),
            TriviaError::Decode(_)
        ));
        assert!(matches!(
            parse_categories(200, r#"{"trivia_categories": 3}"#).unwrap_err(),
            TriviaError::Decode(_)
        ));
    }

    #[test]
    fn missing_lists_are_empty() {
        assert!(parse_questions(200, r#"{"response_code": 0}"#)
            .expect("no results field")
            .is_empty());
        assert!(parse_categories(200, "{}").expect("no categories field").is_empty());
    }

    #[test]
    fn categories_parse() {
        let body = r#"{"trivia_categories":[{"id":9,"name":"General Knowledge"},{"id":10,"name":"Entertainment: Books"}]}"#;
        let categories = parse_categories(200, body).expect("valid categories");
        assert_eq!(
            categories[0],
            Category {
                id: 9,
                name: "General Knowledge".into()
            }
        );
        assert_eq!(categories.len(), 2);
    }
}
