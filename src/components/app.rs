use leptos::{component, view, IntoView};
use leptos_meta::{provide_meta_context, Stylesheet, Title};
use crate::api::HttpApi;
use crate::components::admin_edge::AdminEdge;

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let page = match HttpApi::from_window() {
        Ok(api) => view! { <AdminEdge api=api /> }.into_view(),
        Err(e) => {
            leptos::logging::error!("Failed to set up API client: {e}");
            view! { <p class="error">"Unable to reach the subway API: " {e}</p> }.into_view()
        }
    };

    view! {
        <Stylesheet id="leptos" href="/pkg/subway_admin.css"/>
        <Title text="Subway Admin - Sections"/>

        <div class="app">
            {page}
        </div>
    }
}
