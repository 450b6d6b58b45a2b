//! Wire format of the trivia service.
//!
//! Records are decoded leniently (unknown fields ignored, nullable fields as `Option`) and then checked on the way
//! into the typed records of `jeopardy-core`, so a drift in the service's schema surfaces as a
//! [`GameError::MalformedRecord`] instead of as an odd board.

use jeopardy_core::{CategoryDetail, CategoryId, CategorySummary, ClueData, GameError, Result};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

pub const DEFAULT_BASE_URL: &str = "https://jservice.io/api/";

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RawCategorySummary {
    pub id: CategoryId,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub clues_count: Option<u32>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RawClue {
    #[serde(default)]
    pub id: Option<u64>,
    #[serde(default)]
    pub question: Option<String>,
    #[serde(default)]
    pub answer: Option<String>,
    #[serde(default)]
    pub value: Option<u32>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RawCategoryDetail {
    pub id: CategoryId,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub clues: Vec<RawClue>,
}

/// URL listing `count` categories.
pub fn categories_url(base: &str, count: u16) -> String {
    format!("{}categories?count={}", with_trailing_slash(base), count)
}

/// URL of a single category with its clues.
pub fn category_url(base: &str, id: CategoryId) -> String {
    format!("{}category?id={}", with_trailing_slash(base), id)
}

fn with_trailing_slash(base: &str) -> String {
    if base.ends_with('/') {
        base.to_string()
    } else {
        format!("{base}/")
    }
}

fn decode<T: DeserializeOwned>(body: &str) -> Result<T> {
    serde_json::from_str(body).map_err(|err| GameError::MalformedRecord(err.to_string()))
}

fn required(field: Option<String>, what: impl FnOnce() -> String) -> Result<String> {
    match field {
        Some(value) => Ok(value.trim().to_string()),
        None => Err(GameError::MalformedRecord(what())),
    }
}

impl From<RawCategorySummary> for CategorySummary {
    fn from(raw: RawCategorySummary) -> Self {
        Self {
            id: raw.id,
            title: raw.title.map(|title| title.trim().to_string()),
        }
    }
}

impl TryFrom<RawCategoryDetail> for CategoryDetail {
    type Error = GameError;

    fn try_from(raw: RawCategoryDetail) -> Result<Self> {
        let id = raw.id;
        let title = required(raw.title, || format!("category {id} has no title"))?;
        let clues = raw
            .clues
            .into_iter()
            .enumerate()
            .map(|(n, clue)| {
                let question = required(clue.question, || format!("clue {n} of category {id} has no question"))?;
                let answer = required(clue.answer, || format!("clue {n} of category {id} has no answer"))?;
                Ok(ClueData { question, answer })
            })
            .collect::<Result<_>>()?;
        Ok(Self { title, clues })
    }
}

/// Decodes the body of a category listing.
pub fn decode_category_list(body: &str) -> Result<Vec<CategorySummary>> {
    let raw: Vec<RawCategorySummary> = decode(body)?;
    Ok(raw.into_iter().map(CategorySummary::from).collect())
}

/// Decodes and validates the body of a single category.
pub fn decode_category_detail(body: &str) -> Result<CategoryDetail> {
    let raw: RawCategoryDetail = decode(body)?;
    raw.try_into()
}

#[cfg(test)]
mod tests {
    use super::*;

    const LISTING: &str = r#"[
        {"id": 11531, "title": "mixed bag", "clues_count": 5},
        {"id": 11532, "title": "let's \"ch\"at", "clues_count": 5},
        {"id": 5412, "title": null, "clues_count": 10}
    ]"#;

    const DETAIL: &str = r#"{
        "id": 11531,
        "title": " mixed bag ",
        "clues_count": 2,
        "clues": [
            {"id": 98, "answer": "Shakespeare", "question": "Hamlet author", "value": 200,
             "airdate": "2010-02-02T12:00:00.000Z", "category_id": 11531, "game_id": null, "invalid_count": null},
            {"id": 99, "answer": "Plath", "question": "Bell Jar author", "value": null,
             "airdate": "2010-02-02T12:00:00.000Z", "category_id": 11531, "game_id": null, "invalid_count": null}
        ]
    }"#;

    #[test]
    fn urls_follow_the_service_layout() {
        assert_eq!(
            categories_url(DEFAULT_BASE_URL, 100),
            "https://jservice.io/api/categories?count=100"
        );
        assert_eq!(
            category_url("http://localhost:3000/api", 7),
            "http://localhost:3000/api/category?id=7"
        );
    }

    #[test]
    fn listing_keeps_ids_and_optional_titles() {
        let summaries = decode_category_list(LISTING).unwrap();

        let ids: Vec<_> = summaries.iter().map(|summary| summary.id).collect();
        assert_eq!(ids, [11531, 11532, 5412]);
        assert_eq!(summaries[1].title.as_deref(), Some("let's \"ch\"at"));
        assert_eq!(summaries[2].title, None);
    }

    #[test]
    fn detail_is_trimmed_and_ignores_extra_fields() {
        let detail = decode_category_detail(DETAIL).unwrap();

        assert_eq!(detail.title, "mixed bag");
        assert_eq!(
            detail.clues,
            [
                ClueData {
                    question: "Hamlet author".to_string(),
                    answer: "Shakespeare".to_string(),
                },
                ClueData {
                    question: "Bell Jar author".to_string(),
                    answer: "Plath".to_string(),
                },
            ]
        );
    }

    #[test]
    fn detail_without_title_is_malformed() {
        let err = decode_category_detail(r#"{"id": 3, "title": null, "clues": []}"#).unwrap_err();

        assert_eq!(err, GameError::MalformedRecord("category 3 has no title".to_string()));
    }

    #[test]
    fn clue_without_answer_is_malformed() {
        let body = r#"{"id": 4, "title": "x", "clues": [{"question": "q", "answer": "a"}, {"question": "q"}]}"#;

        let err = decode_category_detail(body).unwrap_err();

        assert_eq!(
            err,
            GameError::MalformedRecord("clue 1 of category 4 has no answer".to_string())
        );
    }

    #[test]
    fn body_of_the_wrong_shape_is_malformed() {
        assert!(matches!(
            decode_category_list(r#"{"error": "rate limited"}"#),
            Err(GameError::MalformedRecord(_))
        ));
        assert!(matches!(
            decode_category_detail("<html>502 Bad Gateway</html>"),
            Err(GameError::MalformedRecord(_))
        ));
    }
}
