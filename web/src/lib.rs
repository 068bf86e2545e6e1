use clap::Parser;
use wasm_bindgen::prelude::*;

mod audio;
mod effects;
mod page;
mod theme;
mod utils;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// What log level to use
    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity,

    /// Force a color scheme instead of the stored preference
    #[arg(long, value_enum)]
    theme: Option<theme::Theme>,

    #[command(flatten)]
    page: page::PageProps,
}

#[wasm_bindgen(start)]
pub fn run_app() {
    use gloo::utils::{document, window};

    #[cfg(feature = "console_error_panic_hook")]
    {
        console_error_panic_hook::set_once();
    }

    let location_hash = window()
        .location()
        .hash()
        .unwrap_or_else(|_| "".to_string());

    let args = Args::try_parse_from(location_hash.split(['#', '&'])).expect("Could not parse args");
    if let Some(log_level) = args.verbose.log_level() {
        console_log::init_with_level(log_level).expect("Error initializing logger");
    }

    match args.theme {
        Some(theme) => theme::Theme::apply(Some(theme)),
        None => theme::Theme::init(),
    }

    let root = document()
        .get_element_by_id("page")
        .expect("Could not find id=\"page\" element");

    log::debug!("App started");
    yew::Renderer::<page::PageView>::with_root_and_props(root, args.page).render();
}
