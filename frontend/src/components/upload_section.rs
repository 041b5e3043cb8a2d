use super::super::Model;
use super::super::Msg;
use super::utils::{debounce, first_file, format_file_size};
use shared::PDF_MIME;
use wasm_bindgen::JsCast;
use web_sys::{DragEvent, HtmlInputElement};
use yew::prelude::*;

pub fn render_upload_section(model: &Model, ctx: &Context<Model>) -> Html {
    html! {
        <div class="upload-section">
            { render_file_input_area(model, ctx) }
            { render_selected_file(model, ctx) }
        </div>
    }
}

fn render_file_input_area(model: &Model, ctx: &Context<Model>) -> Html {
    let link = ctx.link();
    let handle_change = link.batch_callback(|e: Event| {
        let input: HtmlInputElement = e.target_unchecked_into();
        let file = input.files().as_ref().and_then(first_file);

        input.set_value("");

        file.map(Msg::FileSelected)
    });

    let handle_drag_over = link.callback(|e: DragEvent| {
        e.prevent_default();
        Msg::SetDragging(true)
    });

    let handle_drag_leave = link.callback(|e: DragEvent| {
        e.prevent_default();
        Msg::SetDragging(false)
    });

    let handle_drop = link.callback(Msg::HandleDrop);
    let trigger_file_input = Callback::from(|_| {
        if let Some(input) = web_sys::window()
            .unwrap()
            .document()
            .unwrap()
            .get_element_by_id("file-input")
        {
            if let Ok(html_input) = input.dyn_into::<web_sys::HtmlElement>() {
                html_input.click();
            }
        }
    });

    html! {
        <>
            <input
                type="file"
                id="file-input"
                accept={PDF_MIME}
                style="display: none;"
                onchange={handle_change}
            />

            <button
                id="upload-button"
                class="analyze-btn"
                onclick={debounce(300, {
                    let trigger_file_input = trigger_file_input.clone();
                    move || trigger_file_input.emit(())
                })}
            >
                <i class="fa-solid fa-upload"></i> {" Select PDF"}
            </button>

            <div
                id="drop-zone"
                class={classes!("upload-area", model.is_dragging.then_some("drag-over"))}
                ondragover={handle_drag_over}
                ondragleave={handle_drag_leave}
                ondrop={handle_drop}
                onclick={debounce(300, {
                    let trigger_file_input = trigger_file_input.clone();
                    move || trigger_file_input.emit(())
                })}
            >
                <div class="upload-placeholder">
                    <i class="fa-solid fa-file-pdf"></i>
                    <p>{"Drag & drop a PDF report here, or click to browse"}</p>
                    <p class="file-types">{"Supported format: PDF"}</p>
                </div>
            </div>
        </>
    }
}

fn render_selected_file(model: &Model, ctx: &Context<Model>) -> Html {
    let Some(file) = &model.selected_file else {
        return html! {};
    };

    let link = ctx.link().clone();
    let submitting = model.upload_state.is_submitting();

    html! {
        <div class="selected-file">
            <p class="selected-file-name">
                <i class="fa-solid fa-file-pdf"></i>
                { format!(" {} ({})", file.name(), format_file_size(file.size())) }
            </p>
            <div class="button-container">
                <button
                    class="analyze-btn"
                    style="background-color: var(--danger-color);"
                    disabled={submitting}
                    onclick={link.callback(|_| Msg::ClearFile)}
                >
                    <i class="fa-solid fa-trash"></i>{" Remove"}
                </button>
                <button
                    class="analyze-btn"
                    disabled={submitting}
                    onclick={debounce(300, {
                        let link = link.clone();
                        move || link.callback(|_| Msg::Submit).emit(())
                    })}
                >
                    { render_submit_button_content(submitting) }
                </button>
            </div>
        </div>
    }
}

fn render_submit_button_content(submitting: bool) -> Html {
    if submitting {
        html! { <><i class="fa-solid fa-spinner fa-spin"></i>{" Analyzing..."}</> }
    } else {
        html! { <><i class="fa-solid fa-magnifying-glass"></i>{" Analyze Report"}</> }
    }
}
