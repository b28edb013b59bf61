//! Demo wiring for the skeletor core: restore the session, walk the
//! login/guard/navigation flow, and exercise the repository contract.

use std::sync::{Arc, RwLock};

use skeletor_auth::{GuardOutcome, Role, Session, SessionStore, guard, nav, post_login_target, routes};
use skeletor_client::{HttpClient, HttpExampleRepository, SessionTokenSource};
use skeletor_example::{CreateExample, ExampleRepository, ListParams, LocalExampleRepository, UpdateExample};
use skeletor_store::{JsonFileStore, KeyValueStore};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    skeletor_observability::init();

    let store: Arc<dyn KeyValueStore> = match std::env::var("SKELETOR_DATA_DIR") {
        Ok(dir) => Arc::new(JsonFileStore::open(dir)?),
        Err(_) => {
            tracing::info!("SKELETOR_DATA_DIR not set; using platform data dir");
            Arc::new(JsonFileStore::open_default()?)
        }
    };

    let session = Arc::new(RwLock::new(Session::restore(SessionStore::new(store.clone()))));

    // The repository backing is selected by configuration; callers only see
    // the trait.
    let repo: Arc<dyn ExampleRepository> = match std::env::var("SKELETOR_API_BASE_URL") {
        Ok(base_url) => {
            tracing::info!(%base_url, "using HTTP repository");
            let tokens = Arc::new(SessionTokenSource::new(session.clone()));
            Arc::new(HttpExampleRepository::new(HttpClient::new(base_url, tokens)))
        }
        Err(_) => Arc::new(LocalExampleRepository::new(store)),
    };

    // An anonymous visit to a protected path redirects and preserves origin.
    let target = routes::EXAMPLE;
    let preserved = match guard(&session.read().unwrap().state(), target) {
        GuardOutcome::Allow => None,
        GuardOutcome::Redirect { to, from } => {
            tracing::info!(to, from = %from, "navigation denied; redirecting to login");
            Some(from)
        }
    };

    session
        .write()
        .unwrap()
        .login("demo@example.com", "password", Role::Admin);
    let state = session.read().unwrap().state();
    tracing::info!(
        destination = post_login_target(preserved.as_deref()),
        role = %state.role.map(|r| r.to_string()).unwrap_or_default(),
        "logged in"
    );

    for item in nav::default_nav() {
        tracing::info!(path = item.path, visible = item.is_visible(&state), "nav item");
    }

    let items = repo.list(ListParams::default()).await?;
    tracing::info!(count = items.len(), "listed example records");

    let created = repo
        .create(CreateExample::new("Demo record", "Created by the demo binary.")?)
        .await?;
    tracing::info!(id = %created.id, "created record");

    let updated = repo
        .update(&created.id, UpdateExample::description("Updated by the demo binary.")?)
        .await?;
    tracing::info!(found = updated.is_some(), "updated record");

    let found = repo.list(ListParams::search("demo")).await?;
    tracing::info!(count = found.len(), "search results");

    session.write().unwrap().logout();
    match guard(&session.read().unwrap().state(), routes::DASHBOARD) {
        GuardOutcome::Redirect { .. } => tracing::info!("logged out; navigation gated again"),
        GuardOutcome::Allow => unreachable!("anonymous session must not pass the guard"),
    }

    Ok(())
}
