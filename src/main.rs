mod config;
mod contact;
mod greeting;
mod nav;
mod projects;
mod routes;
mod scroll;
mod theme;
mod typing;

fn main() {
    dioxus::launch(routes::App);
}
