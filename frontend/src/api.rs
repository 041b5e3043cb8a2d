use gloo_console::error;
use gloo_net::http::Request;
use shared::HealthResponse;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

const DEFAULT_API_BASE: &str = "http://localhost:8000";

/// Base URL of the analysis service, overridable at build time with
/// `MALARIA_API_URL`.
pub fn api_base() -> &'static str {
    option_env!("MALARIA_API_URL")
        .unwrap_or(DEFAULT_API_BASE)
        .trim_end_matches('/')
}

#[derive(Clone, PartialEq)]
enum ServiceStatus {
    Checking,
    Online(String),
    Offline,
}

#[function_component(HealthStatus)]
pub fn health_status() -> Html {
    let status = use_state(|| ServiceStatus::Checking);

    {
        let status = status.clone();
        use_effect_with((), move |_| {
            spawn_local(async move {
                match Request::get(&format!("{}/api/health", api_base())).send().await {
                    Ok(resp) if resp.ok() => match resp.json::<HealthResponse>().await {
                        Ok(health) => {
                            let label = health.message.unwrap_or(health.status);
                            status.set(ServiceStatus::Online(label));
                        }
                        Err(e) => {
                            error!(format!("Health response parse error: {:?}", e));
                            status.set(ServiceStatus::Offline);
                        }
                    },
                    Ok(resp) => {
                        error!(format!("Health check returned status {}", resp.status()));
                        status.set(ServiceStatus::Offline);
                    }
                    Err(e) => {
                        error!(format!("Health check failed: {:?}", e));
                        status.set(ServiceStatus::Offline);
                    }
                }
            });
            || ()
        });
    }

    html! {
        <p class="service-status">
            {
                match &*status {
                    ServiceStatus::Checking => html! { <span class="status-checking">{"Checking analysis service..."}</span> },
                    ServiceStatus::Online(label) => html! { <span class="status-online">{ format!("Service online: {}", label) }</span> },
                    ServiceStatus::Offline => html! { <span class="status-offline">{"Analysis service unreachable"}</span> },
                }
            }
        </p>
    }
}
