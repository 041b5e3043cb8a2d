use gloo_file::File as GlooFile;
use shared::{AnalysisResult, UploadError};
use web_sys::DragEvent;
use yew::prelude::*;

mod api;
mod components;

use api::HealthStatus;
use components::handlers;
use components::header::render_header;
use components::results::render_results;
use components::upload_section::render_upload_section;
use components::utils::render_error_message;

/// Lifecycle of the current upload attempt. Exactly one variant is active,
/// so "loading" and "error" can never both be shown.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum UploadState {
    Idle,
    Submitting,
    Failed(String),
}

impl UploadState {
    pub fn is_submitting(&self) -> bool {
        matches!(self, UploadState::Submitting)
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            UploadState::Failed(message) => Some(message),
            _ => None,
        }
    }
}

// Yew msg components
pub enum Msg {
    // File selection
    FileSelected(GlooFile),
    ClearFile,

    // Submission lifecycle
    Submit,
    AnalysisComplete(AnalysisResult),
    UploadFailed(UploadError),

    // UI states
    SetDragging(bool),

    // Input events
    HandleDrop(DragEvent),
}

// Main component
pub struct Model {
    pub selected_file: Option<GlooFile>,
    pub upload_state: UploadState,
    pub result: Option<AnalysisResult>,
    pub is_dragging: bool,
}

impl Model {
    fn new() -> Self {
        Self {
            selected_file: None,
            upload_state: UploadState::Idle,
            result: None,
            is_dragging: false,
        }
    }
}

impl Component for Model {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self::new()
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            // File selection
            Msg::FileSelected(file) => handlers::handle_file_selected(self, file),
            Msg::ClearFile => handlers::handle_clear_file(self),

            // Submission lifecycle
            Msg::Submit => handlers::handle_submit(self, ctx),
            Msg::AnalysisComplete(result) => handlers::handle_analysis_complete(self, result),
            Msg::UploadFailed(err) => handlers::handle_upload_failed(self, err),

            // UI states
            Msg::SetDragging(is_dragging) => {
                self.is_dragging = is_dragging;
                true
            }

            // Input events
            Msg::HandleDrop(event) => handlers::handle_drop(self, ctx, event),
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        html! {
            <div class="container">
                { render_header() }

                <main class="main-content">
                    { render_upload_section(self, ctx) }
                    { render_error_message(self) }
                    { render_results(self) }
                </main>

                <footer class="app-footer">
                    <p>{"Malaria PDF Analyzer | Rust WASM"}</p>
                    <HealthStatus />
                </footer>
            </div>
        }
    }
}

fn main() {
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("App starting...");
    yew::Renderer::<Model>::new().render();
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::Diagnosis;

    fn result_fixture() -> AnalysisResult {
        AnalysisResult {
            diagnosis: Diagnosis::Negative,
            parasites_detected: vec![],
            parasite_count: 0,
            confidence: 0.95,
            images_analyzed: 3,
        }
    }

    #[test]
    fn starts_idle_with_nothing_selected() {
        let model = Model::new();
        assert!(model.selected_file.is_none());
        assert_eq!(model.upload_state, UploadState::Idle);
        assert!(model.result.is_none());
    }

    #[test]
    fn failed_state_exposes_its_message() {
        let state = UploadState::Failed("corrupt file".into());
        assert_eq!(state.error(), Some("corrupt file"));
        assert!(!state.is_submitting());
        assert_eq!(UploadState::Idle.error(), None);
        assert!(UploadState::Submitting.is_submitting());
    }

    #[test]
    fn upload_failure_replaces_submitting_state() {
        let mut model = Model::new();
        model.upload_state = UploadState::Submitting;
        handlers::handle_upload_failed(&mut model, UploadError::Analysis("corrupt file".into()));
        assert_eq!(model.upload_state, UploadState::Failed("corrupt file".into()));
        assert!(model.result.is_none());
    }

    #[test]
    fn successful_analysis_returns_to_idle_and_stores_result() {
        let mut model = Model::new();
        model.upload_state = UploadState::Submitting;
        handlers::handle_analysis_complete(&mut model, result_fixture());
        assert_eq!(model.upload_state, UploadState::Idle);
        assert_eq!(model.result, Some(result_fixture()));
    }

    #[test]
    fn new_result_replaces_old_result_wholesale() {
        let mut model = Model::new();
        handlers::handle_analysis_complete(&mut model, result_fixture());
        let second = AnalysisResult {
            diagnosis: Diagnosis::Positive,
            parasites_detected: vec!["P. vivax".into()],
            parasite_count: 2,
            confidence: 0.7,
            images_analyzed: 1,
        };
        handlers::handle_analysis_complete(&mut model, second.clone());
        assert_eq!(model.result, Some(second));
    }

    #[test]
    fn clearing_the_file_also_clears_the_error() {
        let mut model = Model::new();
        model.upload_state = UploadState::Failed("corrupt file".into());
        handlers::handle_clear_file(&mut model);
        assert!(model.selected_file.is_none());
        assert_eq!(model.upload_state, UploadState::Idle);
    }
}
