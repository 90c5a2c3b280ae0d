#![allow(non_snake_case)]

use dioxus::prelude::*;

mod config;
mod router;
mod views;

use router::Route;

fn main() {
    dioxus_logger::init(config::LOG_LEVEL).expect("failed to init logger");

    if let Err(err) = router::validate_route_table() {
        for cause in err.iter_chain() {
            log::error!("{}", cause);
        }
        std::process::exit(1);
    }

    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! { Router::<Route> { config: config::router_config } }
}
