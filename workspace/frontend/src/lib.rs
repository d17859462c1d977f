use yew::prelude::*;

pub mod common;
pub mod components;
pub mod mock_data;
pub mod settings;

pub use components::analytics::{Analytics, AnalyticsProps};

#[function_component(App)]
pub fn app() -> Html {
    let settings = settings::get_settings();
    log::debug!("Demo state: {:?}", settings.demo_state);

    let props = AnalyticsProps::from(mock_data::demo_snapshot(settings.demo_state));

    html! {
        <main class="container mx-auto max-w-6xl">
            <Analytics ..props />
        </main>
    }
}

#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn run_app() {
    // Initialize settings first
    settings::init_settings();

    // Initialize logger with settings
    let settings = settings::get_settings();
    wasm_logger::init(wasm_logger::Config::new(settings.log_level));

    log::info!("=== Donation Analytics Frontend Starting ===");
    log::info!("Application settings: {:?}", settings);

    log::trace!("Initializing Yew renderer");
    yew::Renderer::<App>::new().render();
    log::info!("Application initialized successfully");
}
