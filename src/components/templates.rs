use leptos::{component, view, IntoView, Signal, SignalGet};
use crate::constants::DELETE_ICON_CLASS;
use crate::models::{Line, LineOption};

/// `<option>` of the line select
#[component]
pub fn LineOptionItem(option: LineOption, #[prop(into)] selected: Signal<bool>) -> impl IntoView {
    view! {
        <option value=option.value prop:selected=move || selected.get()>{option.label}</option>
    }
}

/// Slider page listing a line's stations
///
/// Each station row is a `.list-item` carrying the line and station ids, so a
/// click on its delete icon can be resolved from the slider container.
#[component]
pub fn SubwayLineSlide(line: Line) -> impl IntoView {
    let header_class = format!("slide-header {}", line.header_color());
    let line_id = line.id.to_string();
    let delete_class = format!("mdi {DELETE_ICON_CLASS} delete-station-button");

    view! {
        <div class="subway-line-slide">
            <div class=header_class>{line.name}</div>
            <ul class="station-list">
                {line.stations.into_iter().map(|station| {
                    view! {
                        <li
                            class="list-item"
                            data-line-id=line_id.clone()
                            data-station-id=station.id.to_string()
                        >
                            <span class="station-name">{station.name}</span>
                            <span class=delete_class.clone() title="Remove station"></span>
                        </li>
                    }
                }).collect::<Vec<_>>()}
            </ul>
        </div>
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use leptos::{create_runtime, create_rw_signal, html, web_sys, wasm_bindgen, HtmlElement, SignalSet};
    use wasm_bindgen::JsCast;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_option_selection_follows_signal() {
        let runtime = create_runtime();
        let selected = create_rw_signal(false);
        let option = LineOption {
            value: "2".to_string(),
            label: "Line 2".to_string(),
        };
        let select: HtmlElement<html::Select> = view! {
            <select>
                <option value="">"Select a line"</option>
                <LineOptionItem option=option selected=selected />
            </select>
        };
        let line_option = select
            .query_selector("option[value='2']")
            .expect("Failed to query option")
            .and_then(|el| el.dyn_into::<web_sys::HtmlOptionElement>().ok())
            .expect("Missing line option");

        assert!(!line_option.selected());
        selected.set(true);
        assert!(line_option.selected());
        assert_eq!(line_option.text(), "Line 2");

        runtime.dispose();
    }
}
