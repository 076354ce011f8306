//! Browser entry point. Built by `trunk` with the `csr` feature enabled.

fn main() {
    #[cfg(feature = "csr")]
    {
        console_error_panic_hook::set_once();
        let _ = console_log::init_with_level(log::Level::Debug);
        log::info!("coursehub starting");
        leptos::mount::mount_to_body(coursehub::app::App);
    }
}
