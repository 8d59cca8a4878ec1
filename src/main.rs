use std::process;

fn main() {
    if let Err(e) = cipher_toolkit::ui::cli::run() {
        eprintln!("Error: {:#}", e);
        process::exit(1);
    }
}
