use crate::config::ApiConfig;
use crate::error::TriviaResult;
#[cfg(not(target_arch = "wasm32"))]
use crate::error::TriviaError;
use crate::model::{Category, CategoryChoice, DifficultyChoice, QuizSettings};
use crate::trivia::wire::{RawQuestion, parse_categories, parse_questions};

/// Anything that can hand out trivia questions.
///
/// Native builds talk to Open Trivia DB through [`OpenTdbClient`]; tests plug
/// in canned sources.
pub trait TriviaSource {
    fn fetch_categories(&self) -> TriviaResult<Vec<Category>>;
    fn fetch_questions(&self, settings: &QuizSettings) -> TriviaResult<Vec<RawQuestion>>;
}

#[derive(Debug, Clone)]
pub struct OpenTdbClient {
    api: ApiConfig,
    #[cfg(not(target_arch = "wasm32"))]
    http: reqwest::blocking::Client,
}

/// Query string for the questions endpoint. `Any` filters are left out.
pub fn questions_query(settings: &QuizSettings) -> String {
    let mut query = format!("amount={}&type=multiple", settings.amount());
    if let CategoryChoice::Id(id) = settings.category() {
        query.push_str(&format!("&category={id}"));
    }
    if let DifficultyChoice::Only(difficulty) = settings.difficulty() {
        query.push_str(&format!("&difficulty={}", difficulty.as_str()));
    }
    query
}

impl OpenTdbClient {
    pub fn questions_url(&self, settings: &QuizSettings) -> String {
        format!(
            "{}?{}",
            self.api.questions_url.trim_end_matches('?'),
            questions_query(settings)
        )
    }

    pub fn categories_url(&self) -> &str {
        &self.api.categories_url
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl OpenTdbClient {
    pub fn new(api: ApiConfig) -> TriviaResult<Self> {
        let http = reqwest::blocking::Client::builder()
            .timeout(std::time::Duration::from_secs(api.timeout_secs))
            .user_agent(concat!("trivia-quiz/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|err| TriviaError::Network(err.to_string()))?;
        Ok(Self { api, http })
    }

    fn get_text(&self, url: &str) -> TriviaResult<(u16, String)> {
        log::debug!("GET {url}");
        let response = self
            .http
            .get(url)
            .send()
            .map_err(|err| TriviaError::Network(err.to_string()))?;
        let status = response.status().as_u16();
        let body = response
            .text()
            .map_err(|err| TriviaError::Network(err.to_string()))?;
        Ok((status, body))
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl TriviaSource for OpenTdbClient {
    fn fetch_categories(&self) -> TriviaResult<Vec<Category>> {
        let (status, body) = self.get_text(self.categories_url())?;
        parse_categories(status, &body)
    }

    fn fetch_questions(&self, settings: &QuizSettings) -> TriviaResult<Vec<RawQuestion>> {
        let (status, body) = self.get_text(&self.questions_url(settings))?;
        parse_questions(status, &body)
    }
}

#[cfg(target_arch = "wasm32")]
impl OpenTdbClient {
    pub fn new(api: ApiConfig) -> TriviaResult<Self> {
        Ok(Self { api })
    }

    pub async fn fetch_categories_async(&self) -> TriviaResult<Vec<Category>> {
        let (status, body) = fetch_text(self.categories_url()).await?;
        parse_categories(status, &body)
    }

    pub async fn fetch_questions_async(
        &self,
        settings: &QuizSettings,
    ) -> TriviaResult<Vec<RawQuestion>> {
        let (status, body) = fetch_text(&self.questions_url(settings)).await?;
        parse_questions(status, &body)
    }
}

#[cfg(target_arch = "wasm32")]
async fn fetch_text(url: &str) -> TriviaResult<(u16, String)> {
    use crate::error::TriviaError;
    use wasm_bindgen::JsCast;
    use wasm_bindgen_futures::JsFuture;
    use web_sys::{Request, RequestInit, RequestMode, Response};

    let opts = RequestInit::new();
    opts.set_method("GET");
    opts.set_mode(RequestMode::Cors);

    let window = web_sys::window()
        .ok_or_else(|| TriviaError::Network("no window in this environment".into()))?;
    let request = Request::new_with_str_and_init(url, &opts)
        .map_err(|err| TriviaError::Network(format!("could not build request: {err:?}")))?;

    let resp_value = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|err| TriviaError::Network(format!("fetch failed: {err:?}")))?;
    let response: Response = resp_value
        .dyn_into()
        .map_err(|_| TriviaError::Network("fetch did not return a Response".into()))?;

    let promise = response
        .text()
        .map_err(|err| TriviaError::Network(format!("could not read body: {err:?}")))?;
    let text = JsFuture::from(promise)
        .await
        .map_err(|err| TriviaError::Network(format!("could not read body: {err:?}")))?
        .as_string()
        .ok_or_else(|| TriviaError::Decode("response body is not text".into()))?;

    Ok((response.status(), text))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Difficulty;

    fn api() -> ApiConfig {
        ApiConfig {
            questions_url: "https://opentdb.com/api.php".into(),
            categories_url: "https://opentdb.com/api_category.php".into(),
            timeout_secs: 5,
        }
    }

    #[test]
    fn any_filters_are_omitted() {
        let settings =
            QuizSettings::new(10, CategoryChoice::Any, DifficultyChoice::Any).expect("valid");
        assert_eq!(questions_query(&settings), "amount=10&type=multiple");
    }

    #[test]
    fn explicit_filters_are_sent() {
        let settings = QuizSettings::new(
            5,
            CategoryChoice::Id(23),
            DifficultyChoice::Only(Difficulty::Hard),
        )
        .expect("valid");
        let client = OpenTdbClient::new(api()).expect("client builds");
        assert_eq!(
            client.questions_url(&settings),
            "https://opentdb.com/api.php?amount=5&type=multiple&category=23&difficulty=hard"
        );
    }
}
