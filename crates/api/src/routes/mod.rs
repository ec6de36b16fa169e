pub mod dataset;
pub mod datapoint;
pub mod evaluation;
pub mod evaluator;
pub mod evaluator_prompt;
pub mod feedback;
pub mod health;
pub mod media;
pub mod metric;
pub mod model;
pub mod model_prompt;
pub mod prompt;
pub mod prompt_tag;
pub mod provider;
pub mod response;
pub mod score;
pub mod tag;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /providers                                   list, create (GET, POST)
/// /providers/{id}                              get, update, delete
///
/// /models                                      list, create (GET, POST)
/// /models/{id}                                 get (with provider), update, delete
///
/// /prompts                                     list, create (GET, POST)
/// /prompts/{id}                                get, update, delete
///
/// /evaluators                                  list, create (GET, POST)
/// /evaluators/{id}                             get, update, delete
///
/// /model-prompts                               list, create (GET, POST)
/// /model-prompts/{model_id}/{prompt_id}        get, update (sort order), delete
///
/// /evaluator-prompts                           list, create (GET, POST)
/// /evaluator-prompts/{evaluator_id}/{prompt_id}  get, delete
///
/// /datasets                                    list, create (GET, POST)
/// /datasets/{id}                               get, update, delete
///
/// /datapoints                                  list, create (GET, POST)
/// /datapoints/{id}                             get, update, delete
///
/// /responses                                   list, create (GET, POST)
/// /responses/{id}                              get, update, delete
///
/// /media                                       list, create (GET, POST)
/// /media/{id}                                  get, update, delete
///
/// /feedback                                    list, create (GET, POST)
/// /feedback/{id}                               get, update, delete
///
/// /evaluations/single                          list, create (GET, POST)
/// /evaluations/single/{id}                     get, update, delete
/// /evaluations/pairwise                        list, create (GET, POST)
/// /evaluations/pairwise/{id}                   get, update, delete
///
/// /metrics                                     list, create (GET, POST)
/// /metrics/{id}                                get, update, delete
///
/// /scores                                      list, create (GET, POST)
/// /scores/{id}                                 get, update (value), delete
///
/// /tags                                        list, create (GET, POST)
/// /tags/{id}                                   get, update, delete
///
/// /prompt-tags                                 list, create (GET, POST)
/// /prompt-tags/{prompt_id}/{tag_id}            get, delete
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Catalog resources.
        .nest("/providers", provider::router())
        .nest("/models", model::router())
        .nest("/prompts", prompt::router())
        .nest("/evaluators", evaluator::router())
        // Junction tables between catalog resources.
        .nest("/model-prompts", model_prompt::router())
        .nest("/evaluator-prompts", evaluator_prompt::router())
        // Datasets and their datapoints.
        .nest("/datasets", dataset::router())
        .nest("/datapoints", datapoint::router())
        // Model outputs and attachments.
        .nest("/responses", response::router())
        .nest("/media", media::router())
        .nest("/feedback", feedback::router())
        // Single and pairwise evaluation records.
        .nest("/evaluations", evaluation::router())
        // Quantitative metrics and scores.
        .nest("/metrics", metric::router())
        .nest("/scores", score::router())
        // Tagging.
        .nest("/tags", tag::router())
        .nest("/prompt-tags", prompt_tag::router())
}
