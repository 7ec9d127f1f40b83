#[cfg(any(target_arch = "wasm32", test))]
mod config;
#[cfg(any(target_arch = "wasm32", test))]
mod contact_form;
#[cfg(any(target_arch = "wasm32", test))]
mod controller;
#[cfg(any(target_arch = "wasm32", test))]
mod dom;
#[cfg(any(target_arch = "wasm32", test))]
mod interactions;
#[cfg(any(target_arch = "wasm32", test))]
mod logging;
#[cfg(any(target_arch = "wasm32", test))]
mod navigation;
#[cfg(any(target_arch = "wasm32", test))]
mod parallax;
#[cfg(any(target_arch = "wasm32", test))]
mod particles;
#[cfg(any(target_arch = "wasm32", test))]
mod reveal;
#[cfg(any(target_arch = "wasm32", test))]
mod scheduler;
#[cfg(any(target_arch = "wasm32", test))]
mod scroll;
#[cfg(any(target_arch = "wasm32", test))]
mod styles;
#[cfg(test)]
mod testing;
#[cfg(any(target_arch = "wasm32", test))]
mod viewport;

#[cfg(target_arch = "wasm32")]
mod frontend;

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    eprintln!("This project is frontend-only. Run `trunk serve` or `trunk build --release`.");
}

#[cfg(target_arch = "wasm32")]
fn main() {
    frontend::run();
}
