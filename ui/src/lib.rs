pub mod app;
pub mod components;
pub mod config;
pub mod dropdown;
pub mod error;
pub mod model;
pub mod navigation;
pub mod remote;

pub use crate::app::App;
pub use crate::components::{Footer, Header};
pub use crate::dropdown::{CLOSE_DELAY, DropdownController, DropdownState};
pub use crate::remote::{RemoteList, RemoteListLoader};

#[cfg(feature = "web")]
mod entry {
    use leptos::mount::mount_to_body;
    use leptos::prelude::*;
    use wasm_bindgen::prelude::*;

    use crate::App;

    #[wasm_bindgen(start)]
    pub fn main() {
        console_error_panic_hook::set_once();
        mount_to_body(|| view! { <App/> });
    }
}
