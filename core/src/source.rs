use alloc::string::String;
use alloc::vec::Vec;
use core::future::Future;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::*;

/// One entry of the category listing.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategorySummary {
    pub id: CategoryId,
    pub title: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClueData {
    pub question: String,
    pub answer: String,
}

/// A category with every clue the service has for it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryDetail {
    pub title: String,
    pub clues: Vec<ClueData>,
}

/// Read access to a remote trivia service.
///
/// Each call is a single request: no caching, no retries. Transport failures and non-success responses are reported
/// as [`GameError::Network`], records of the wrong shape as [`GameError::MalformedRecord`].
pub trait TriviaSource {
    /// Lists up to `count` category summaries.
    fn list_categories(&self, count: u16) -> impl Future<Output = Result<Vec<CategorySummary>>>;

    fn category_detail(&self, id: CategoryId) -> impl Future<Output = Result<CategoryDetail>>;
}

/// Fetches and samples a complete board.
///
/// Category details are fetched one after another, and the first failure aborts the whole load so that no partial
/// board ever comes out of here.
pub async fn load_board<S, R>(source: &S, config: &GameConfig, rng: &mut R) -> Result<Board>
where
    S: TriviaSource + ?Sized,
    R: Rng + ?Sized,
{
    let summaries = source.list_categories(config.category_pool).await?;
    log::debug!("listed {} categories", summaries.len());

    let ids: Vec<CategoryId> = summaries.iter().map(|summary| summary.id).collect();
    let picked = sample(&ids, config.categories.into(), rng)?;

    let mut categories = Vec::with_capacity(picked.len());
    for id in picked {
        let detail = source.category_detail(id).await?;
        log::trace!("category {} has {} clues", id, detail.clues.len());
        let clues = sample(&detail.clues, config.clues_per_category.into(), rng)?;
        categories.push(Category::new(detail.title, clues.into_iter().map(Clue::from)));
    }

    Board::new(*config, categories)
}
