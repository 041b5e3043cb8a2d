use super::super::Model;
use gloo_file::File as GlooFile;
use gloo_timers::callback::Timeout;
use shared::PDF_MIME;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys::FileList;
use yew::prelude::*;

// Debounce function to limit button events
pub fn debounce<F>(duration: u32, callback: F) -> Callback<MouseEvent>
where
    F: Fn() + Clone + 'static,
{
    let timeout = Rc::new(RefCell::new(None::<Timeout>));

    Callback::from(move |_| {
        let mut timeout_ref = timeout.borrow_mut();

        if let Some(old_timeout) = timeout_ref.take() {
            old_timeout.cancel();
        }

        let inner_callback = callback.clone();
        *timeout_ref = Some(Timeout::new(duration, move || {
            inner_callback();
        }));
    })
}

pub fn first_file(file_list: &FileList) -> Option<GlooFile> {
    file_list.item(0).map(GlooFile::from)
}

/// Which file of a multi-file drop to select: the first PDF if any,
/// otherwise the first file so the wrong-type error surfaces on submit.
pub fn preferred_drop_index(media_types: &[String]) -> Option<usize> {
    media_types
        .iter()
        .position(|mt| mt == PDF_MIME)
        .or(if media_types.is_empty() { None } else { Some(0) })
}

pub fn pick_dropped_file(file_list: &FileList) -> Option<GlooFile> {
    let media_types: Vec<String> = (0..file_list.length())
        .filter_map(|i| file_list.item(i))
        .map(|file| file.type_())
        .collect();

    preferred_drop_index(&media_types)
        .and_then(|i| file_list.item(i as u32))
        .map(GlooFile::from)
}

pub fn format_file_size(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;

    if bytes >= MB {
        format!("{:.1} MB", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.1} KB", bytes as f64 / KB as f64)
    } else {
        format!("{} B", bytes)
    }
}

pub fn render_error_message(model: &Model) -> Html {
    if let Some(error_msg) = model.upload_state.error() {
        html! {
            <div class="error-message">
                <i class="fa-solid fa-circle-exclamation"></i>
                <p>{ error_msg }</p>
            </div>
        }
    } else {
        html! {}
    }
}
