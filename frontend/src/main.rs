use crate::app::App;

mod api;
mod app;
mod components;
mod species_grid;
mod toast;
mod tops_sheet;

fn main() {
    yew::Renderer::<App>::new().render();
}
