use dioxus::prelude::*;
use tracing::{info, warn};

use crate::{
    domain::AppState,
    infra::{nba_api::NbaApiClient, query::QueryClient},
    ui::{
        pages::{LookupPage, SettingsPage},
        shell::Shell,
    },
    util::{assets, config::AppConfig},
};

/// Query client shared by every impact widget in the app.
pub type ImpactQueryClient = QueryClient<NbaApiClient>;

#[derive(Routable, Clone, PartialEq)]
pub enum Route {
    #[route("/")]
    Lookup {},
    #[route("/settings")]
    Settings {},
}

#[component]
pub fn App() -> Element {
    let config = use_context::<AppConfig>();

    let state = use_signal(AppState::default);
    use_context_provider(|| state);

    let client = use_hook(|| build_query_client(&config));
    use_context_provider(|| client);

    rsx! {
        document::Link { rel: "icon", href: assets::favicon_data_uri() }
        document::Style { "{assets::main_css()}" }
        Router::<Route> {}
    }
}

/// `None` when the HTTP client cannot be built; widgets then stay silent.
fn build_query_client(config: &AppConfig) -> Option<ImpactQueryClient> {
    match NbaApiClient::from_config(config) {
        Ok(api) => {
            info!(
                "[app] analytics API at {} (ttl {:?}, {} retries)",
                api.base_url(),
                config.cache_ttl,
                config.retry_attempts
            );
            Some(QueryClient::from_config(api, config))
        }
        Err(err) => {
            warn!("[app] failed to initialise analytics client: {err}");
            None
        }
    }
}

#[component]
pub fn Lookup() -> Element {
    rsx! { Shell { LookupPage {} } }
}

#[component]
pub fn Settings() -> Element {
    rsx! { Shell { SettingsPage {} } }
}
