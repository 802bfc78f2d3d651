//! Storefront entry point: mount the app into the document body.

fn main() {
    console_error_panic_hook::set_once();

    leptos::mount::mount_to_body(storefront::app::App);
}
