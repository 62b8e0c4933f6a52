//! Host-side helper: `cargo run` compiles the WASM bundle, then serves the
//! site locally and (when installed) exposes it through an ngrok tunnel.

use std::process::{Command, Stdio};
use std::{thread, time::Duration};

const SERVE_DIR: &str = "static";
const PORT: &str = "8000";

fn build_bundle() {
    println!("Compiling the wasm bundle …");
    match Command::new("wasm-pack")
        .args(["build", "--release", "--target", "web", "--out-dir", "static/pkg"])
        .status()
    {
        Ok(status) if status.success() => {}
        Ok(_) => {
            eprintln!(
                "wasm-pack reported errors; see https://rustwasm.github.io/wasm-pack/ for setup."
            );
            std::process::exit(1);
        }
        Err(_) => {
            eprintln!("wasm-pack not found in PATH; serving whatever bundle is already present.");
        }
    }
}

fn serve() {
    println!("Serving the portfolio at http://127.0.0.1:{PORT} …");
    let server = Command::new("python3")
        .args(["-m", "http.server", PORT, "--directory", SERVE_DIR])
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn();
    if server.is_err() {
        eprintln!("failed to start the local http server (python3 required)");
        std::process::exit(1);
    }
}

fn tunnel() {
    match Command::new("ngrok")
        .args(["http", PORT])
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .spawn()
    {
        Ok(_) => println!("ngrok tunnel starting …"),
        Err(_) => eprintln!("ngrok not found. Install it to share the site over the internet."),
    }
}

fn main() {
    build_bundle();
    serve();
    tunnel();

    // Children are detached; keep the foreground process alive for them.
    loop {
        thread::sleep(Duration::from_secs(60));
    }
}
