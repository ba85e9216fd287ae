use leptos::{component, view, IntoView, Signal, SignalGet, SignalGetUntracked, SignalSet, SignalUpdate, SignalWith, create_signal, create_rw_signal, store_value, spawn_local, event_target_value, Callback, web_sys, wasm_bindgen};
use wasm_bindgen::JsCast;
use crate::admin_edge::{apply_removal, fetch_line_options, fetch_slider_lines, remove_station, submit_edge_form, DeleteTarget, EdgeForm};
use crate::api::HttpApi;
use crate::carousel::CarouselConfig;
use crate::components::carousel::Carousel;
use crate::components::modal_overlay::ModalOverlay;
use crate::components::templates::{LineOptionItem, SubwayLineSlide};
use crate::components::toast::{show_toast, Toast, ToastNotification};
use crate::components::window::Window;
use crate::constants::{DELETE_ICON_CLASS, LINE_SELECT_ID, LIST_ITEM_SELECTOR};
use crate::models::{Line, LineOption};

/// Resolve the station row whose delete icon was clicked
fn delete_target(ev: &web_sys::MouseEvent) -> Option<DeleteTarget> {
    let element = ev.target()?.dyn_into::<web_sys::Element>().ok()?;
    let is_delete_icon = element.class_list().contains(DELETE_ICON_CLASS);
    if !is_delete_icon {
        return None;
    }
    let item = element.closest(LIST_ITEM_SELECTOR).ok()??;
    DeleteTarget::resolve(
        is_delete_icon,
        item.get_attribute("data-line-id").as_deref(),
        item.get_attribute("data-station-id").as_deref(),
    )
}

#[component]
#[allow(clippy::too_many_lines)]
pub fn AdminEdge(api: HttpApi) -> impl IntoView {
    let api = store_value(api);
    let (lines, set_lines) = create_signal(Vec::<Line>::new());
    let (line_options, set_line_options) = create_signal(Vec::<LineOption>::new());
    let form = create_rw_signal(EdgeForm::default());
    let (is_dialog_open, set_is_dialog_open) = create_signal(false);
    let (is_submitting, set_is_submitting) = create_signal(false);
    let (toast, set_toast) = create_signal(Toast::default());

    let report_error = move |context: &str, e: String| {
        leptos::logging::error!("{context}: {e}");
        show_toast(set_toast, Toast::error(format!("{context}: {e}")));
    };

    let load_slider = move || {
        let api = api.get_value();
        spawn_local(async move {
            match fetch_slider_lines(&api).await {
                Ok(loaded) => set_lines.set(loaded),
                Err(e) => report_error("Failed to load lines", e),
            }
        });
    };

    let load_line_options = move || {
        let api = api.get_value();
        spawn_local(async move {
            match fetch_line_options(&api).await {
                Ok(options) => set_line_options.set(options),
                Err(e) => report_error("Failed to load line options", e),
            }
        });
    };

    // Both loads run independently; the listeners below are live before either finishes
    let initialize = move || {
        load_slider();
        load_line_options();
    };
    initialize();

    let on_slider_click = Callback::new(move |ev: web_sys::MouseEvent| {
        let Some(target) = delete_target(&ev) else { return };
        let api = api.get_value();
        spawn_local(async move {
            match remove_station(&api, target).await {
                Ok(()) => {
                    set_lines.update(|lines| {
                        apply_removal(lines, target);
                    });
                    show_toast(set_toast, Toast::info("Station removed"));
                }
                Err(e) => report_error("Failed to remove station", e),
            }
        });
    });

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if is_submitting.get_untracked() {
            return;
        }
        set_is_submitting.set(true);

        let api = api.get_value();
        let mut edge_form = form.get_untracked();
        spawn_local(async move {
            let result = submit_edge_form(&api, &mut edge_form).await;
            form.set(edge_form);
            set_is_submitting.set(false);
            match result {
                Ok(_) => {
                    set_is_dialog_open.set(false);
                    show_toast(set_toast, Toast::info("Section added"));
                    load_slider();
                }
                Err(e) => report_error("Failed to add section", e),
            }
        });
    };

    let close_dialog = move || set_is_dialog_open.set(false);

    view! {
        <div class="admin-edge">
            <div class="admin-edge-toolbar">
                <h2>"Subway line sections"</h2>
                <button
                    id="create-edge-button"
                    class="primary"
                    on:click=move |_| set_is_dialog_open.set(true)
                >
                    "Add section"
                </button>
            </div>

            <Carousel
                items=Signal::derive(move || lines.get())
                render=|line: Line| view! { <SubwayLineSlide line=line /> }.into_view()
                config=CarouselConfig::subway_lines()
                on_click=on_slider_click
            />

            <ModalOverlay
                is_open=Signal::derive(move || is_dialog_open.get())
                on_dismiss=Callback::new(move |()| close_dialog())
            >
                <Window title="Add section" on_close=close_dialog>
                    <form class="edge-form" on:submit=on_submit>
                        <label for=LINE_SELECT_ID>"Line"</label>
                        <select
                            id=LINE_SELECT_ID
                            on:change=move |ev| form.update(|f| f.line_id = event_target_value(&ev))
                        >
                            {move || line_options.get().into_iter().map(|option| {
                                let value = option.value.clone();
                                let selected = Signal::derive(move || form.with(|f| f.line_id == value));
                                view! { <LineOptionItem option=option selected=selected /> }
                            }).collect::<Vec<_>>()}
                            <option
                                value=""
                                disabled=true
                                prop:selected=move || form.with(|f| f.line_id.is_empty())
                            >
                                "Select a line"
                            </option>
                        </select>

                        <label for="depart-station-name">"Preceding station"</label>
                        <input
                            id="depart-station-name"
                            type="text"
                            autocomplete="off"
                            prop:value=move || form.with(|f| f.pre_station_name.clone())
                            on:input=move |ev| form.update(|f| f.pre_station_name = event_target_value(&ev))
                        />

                        <label for="arrival-station-name">"Station"</label>
                        <input
                            id="arrival-station-name"
                            type="text"
                            autocomplete="off"
                            prop:value=move || form.with(|f| f.station_name.clone())
                            on:input=move |ev| form.update(|f| f.station_name = event_target_value(&ev))
                        />

                        <div class="edge-form-buttons">
                            <button type="button" class="cancel-button" on:click=move |_| close_dialog()>
                                "Cancel"
                            </button>
                            <button
                                id="submit-button"
                                type="submit"
                                class="primary"
                                disabled=move || is_submitting.get()
                            >
                                "Confirm"
                            </button>
                        </div>
                    </form>
                </Window>
            </ModalOverlay>

            <ToastNotification toast=toast />
        </div>
    }
}
