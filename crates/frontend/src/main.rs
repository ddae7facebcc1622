mod app;
mod auth;
mod client;
mod client_wrapper;
mod components;
mod config;
mod pages;
mod routes;
mod services;

use app::App;

fn main() {
    wasm_logger::init(wasm_logger::Config::default());
    yew::Renderer::<App>::new().render();
}
