use std::env;
use std::ffi::OsString;
use std::process;

fn main() {
    hexembed_cli::init_logging();

    let args: Vec<OsString> = env::args_os().collect();

    if let Err(err) = hexembed_cli::run(&args) {
        eprintln!("Error: {:#}", err);
        process::exit(1);
    }
}
