//! WASM entry point for the Leptos CSR app
//!
//! Trunk compiles this to WASM; it installs the panic hook and console
//! logging, then mounts the App component to the document body.

use leptos::prelude::*;
use orin_ui::App;

fn main() {
    // Set up panic hook for better error messages in browser console
    console_error_panic_hook::set_once();
    orin_ui::init_tracing();

    mount_to_body(|| {
        view! {
            <App />
        }
    });
}
