use std::time::{Duration, SystemTime};

use dioxus::prelude::*;
use tracing::info;

use crate::{app::ImpactQueryClient, util::config::AppConfig};

#[component]
pub fn SettingsPage() -> Element {
    let config = use_context::<AppConfig>();
    let client = use_context::<Option<ImpactQueryClient>>();
    let mut refresh_tick = use_signal(|| 0_u32);

    let cache_entries = use_resource({
        let client = client.clone();
        move || {
            let client = client.clone();
            let _tick = refresh_tick();
            async move {
                match client {
                    Some(client) => client
                        .cached_entries()
                        .await
                        .into_iter()
                        .map(|(key, fetched_at)| (key.to_string(), humanize_age(fetched_at)))
                        .collect::<Vec<_>>(),
                    None => Vec::new(),
                }
            }
        }
    });

    let on_clear_cache = move |_| {
        let client = client.clone();
        spawn(async move {
            if let Some(client) = client {
                client.clear().await;
                info!("[settings] cleared cached impact analyses");
            }
            refresh_tick.with_mut(|tick| *tick += 1);
        });
    };

    let entries = cache_entries.read().clone().unwrap_or_default();
    let rows = [
        ("Analytics API", config.api_base_url.to_string()),
        ("Request timeout", format_duration(config.request_timeout)),
        ("Cache TTL", format_duration(config.cache_ttl)),
        ("Retry attempts", config.retry_attempts.to_string()),
        ("Retry backoff", format_duration(config.retry_backoff)),
        ("Log filter", config.log_level.clone()),
    ];

    rsx! {
        div { class: "stack",
            section {
                class: "panel",
                h2 { class: "panel-title", "Configuration" }
                p { class: "hint", "Read from the environment (or a .env file) at start-up." }
                dl { class: "config-list",
                    for (label, value) in rows {
                        div { key: "{label}", class: "config-row",
                            dt { class: "field-label", "{label}" }
                            dd { class: "config-value", "{value}" }
                        }
                    }
                }
            }

            section {
                class: "panel",
                h2 { class: "panel-title", "Cached Analyses" }
                if entries.is_empty() {
                    p { class: "hint", "No cached analyses yet." }
                } else {
                    ul { class: "cache-list",
                        for (label, age) in entries {
                            li { key: "{label}", class: "cache-row",
                                span { "{label}" }
                                span { class: "muted", "{age}" }
                            }
                        }
                    }
                }
                div { class: "actions",
                    button { class: "btn btn--warning", onclick: on_clear_cache, "Clear Cache" }
                }
            }
        }
    }
}

fn humanize_age(fetched_at: SystemTime) -> String {
    let age = SystemTime::now()
        .duration_since(fetched_at)
        .unwrap_or_default()
        .as_secs();
    if age < 60 {
        format!("{age}s ago")
    } else if age < 3_600 {
        format!("{}m ago", age / 60)
    } else if age < 86_400 {
        format!("{}h ago", age / 3_600)
    } else {
        format!("{}d ago", age / 86_400)
    }
}

fn format_duration(duration: Duration) -> String {
    let millis = duration.as_millis();
    if millis == 0 {
        "0s".to_string()
    } else if millis % 1000 != 0 {
        format!("{millis}ms")
    } else {
        format!("{}s", millis / 1000)
    }
}
