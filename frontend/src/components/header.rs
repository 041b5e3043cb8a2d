use yew::prelude::*;

/// Renders the application header
pub fn render_header() -> Html {
    html! {
        <header class="app-header">
            <h1><i class="fa-solid fa-microscope"></i> {" Malaria PDF Analyzer"}</h1>
            <p class="subtitle">{"Upload a blood smear report (PDF) for parasite screening"}</p>
        </header>
    }
}
