use dioxus::prelude::*;

use crate::{domain::AppState, ui::components::impact_summary::PlayerImpactSummary};

#[component]
pub fn LookupPage() -> Element {
    let mut state = use_context::<Signal<AppState>>();
    let snapshot = state();

    let team_id = snapshot.team_id().map(str::to_string);
    let player_id = snapshot.player_id();
    let ready = snapshot.lookup_key().is_some();

    rsx! {
        div { class: "stack",
            section {
                class: "panel",
                h2 { class: "panel-title", "Missing Player Impact" }
                p { class: "hint", "How does the team perform when this player sits out?" }
                div { class: "field-grid",
                    div {
                        label { class: "field-label", "Team ID" }
                        input {
                            class: "field-input",
                            placeholder: "LAL",
                            value: snapshot.team_input.clone(),
                            oninput: move |evt| state.with_mut(|st| st.team_input = evt.value()),
                        }
                    }
                    div {
                        label { class: "field-label", "Player ID" }
                        input {
                            class: "field-input",
                            placeholder: "2544",
                            value: snapshot.player_input.clone(),
                            oninput: move |evt| state.with_mut(|st| st.player_input = evt.value()),
                        }
                    }
                }
                div { class: "actions",
                    button {
                        class: "btn btn--secondary",
                        onclick: move |_| state.with_mut(|st| st.clear()),
                        "Clear"
                    }
                }
            }

            section {
                class: "panel",
                h2 { class: "panel-title", "Impact" }
                if !ready {
                    p { class: "hint", "Enter a team and a player id to analyse." }
                }
                PlayerImpactSummary { team_id, player_id }
            }
        }
    }
}
