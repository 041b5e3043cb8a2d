use super::super::{Model, Msg, UploadState};
use crate::api::api_base;
use crate::components::utils::pick_dropped_file;
use gloo_file::File as GlooFile;
use gloo_net::http::Request;
use shared::{error_from_body, validate_selection, AnalysisResult, AnalyzeResponse, UploadError};
use wasm_bindgen_futures::spawn_local;
use web_sys::DragEvent;
use yew::prelude::*;

pub fn handle_file_selected(model: &mut Model, file: GlooFile) -> bool {
    // Replaces any earlier pick unconditionally; type problems surface on submit.
    model.selected_file = Some(file);
    model.upload_state = UploadState::Idle;
    true
}

pub fn handle_clear_file(model: &mut Model) -> bool {
    model.selected_file = None;
    model.upload_state = UploadState::Idle;
    true
}

pub fn handle_submit(model: &mut Model, ctx: &Context<Model>) -> bool {
    // One request in flight at most; the button is disabled as well.
    if model.upload_state.is_submitting() {
        return false;
    }

    let media_type = model.selected_file.as_ref().map(|f| f.raw_mime_type());
    match validate_selection(media_type.as_deref()) {
        Err(err) => {
            model.upload_state = UploadState::Failed(err.to_string());
            true
        }
        Ok(()) => {
            if let Some(file) = model.selected_file.clone() {
                model.upload_state = UploadState::Submitting;
                send_analyze_request(ctx, file);
            }
            true
        }
    }
}

pub fn handle_analysis_complete(model: &mut Model, result: AnalysisResult) -> bool {
    model.result = Some(result);
    model.upload_state = UploadState::Idle;
    true
}

pub fn handle_upload_failed(model: &mut Model, err: UploadError) -> bool {
    log::warn!("Upload failed: {}", err);
    model.upload_state = UploadState::Failed(err.to_string());
    true
}

pub fn handle_drop(model: &mut Model, ctx: &Context<Model>, event: DragEvent) -> bool {
    event.prevent_default();
    model.is_dragging = false;

    if let Some(data_transfer) = event.data_transfer() {
        if let Some(file_list) = data_transfer.files() {
            if let Some(file) = pick_dropped_file(&file_list) {
                ctx.link().send_message(Msg::FileSelected(file));
            }
        }
    }

    true
}

pub fn send_analyze_request(ctx: &Context<Model>, file: GlooFile) {
    spawn_local({
        let link = ctx.link().clone();

        async move {
            let form_data = web_sys::FormData::new().unwrap();
            form_data
                .append_with_blob_and_filename("file", file.as_ref(), &file.name())
                .unwrap();

            let processing_error =
                |e: gloo_net::Error| UploadError::Analysis(format!("Error processing file: {}", e));

            let request = match Request::post(&format!("{}/api/analyze", api_base())).body(form_data) {
                Ok(request) => request,
                Err(e) => {
                    link.send_message(Msg::UploadFailed(processing_error(e)));
                    return;
                }
            };

            match request.send().await {
                Ok(response) if response.ok() => {
                    match response.json::<AnalyzeResponse>().await {
                        Ok(parsed) => link.send_message(Msg::AnalysisComplete(parsed.results)),
                        Err(e) => link.send_message(Msg::UploadFailed(processing_error(e))),
                    }
                }
                Ok(response) => {
                    let body = response.text().await.unwrap_or_default();
                    link.send_message(Msg::UploadFailed(UploadError::Analysis(error_from_body(
                        &body,
                    ))));
                }
                Err(e) => {
                    gloo_console::error!(format!("Analyze request failed: {:?}", e));
                    link.send_message(Msg::UploadFailed(processing_error(e)));
                }
            }
        }
    });
}
