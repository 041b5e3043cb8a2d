use super::super::Model;
use shared::Diagnosis;
use yew::prelude::*;

pub fn render_results(model: &Model) -> Html {
    let Some(result) = &model.result else {
        return html! {};
    };

    let positive = result.diagnosis == Diagnosis::Positive;
    let confidence = result.confidence_percent();
    let icon = match result.diagnosis {
        Diagnosis::Positive => "fa-virus",
        Diagnosis::Negative => "fa-circle-check",
        Diagnosis::Inconclusive => "fa-circle-question",
    };

    html! {
        <div class={classes!("results-container", if positive { "positive" } else { "not-positive" })}>
            <div class="result-header">
                <h2>
                    <i class={classes!("fa-solid", icon)}></i>
                    { format!(" {}", result.diagnosis) }
                </h2>
                <div class="confidence-meter">
                    <div class="meter-label">{"Confidence:"}</div>
                    <div class="meter">
                        <div class="meter-fill" style={format!("width: {}%", confidence)}></div>
                    </div>
                    <div class="meter-value">{ format!("{}%", confidence) }</div>
                </div>
            </div>
            <div class="detailed-results">
                <p class="images-analyzed">
                    { format!("Images analyzed: {}", result.images_analyzed) }
                </p>
                {
                    if positive {
                        html! {
                            <>
                                <p class="parasite-names">
                                    { format!("Parasites detected: {}", result.parasite_names()) }
                                </p>
                                <p class="parasite-count">
                                    { format!("Parasite count: {}", result.parasite_count) }
                                </p>
                            </>
                        }
                    } else {
                        html! {}
                    }
                }
                <p class="result-summary">{ result.summary() }</p>
            </div>
        </div>
    }
}
