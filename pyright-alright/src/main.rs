//! `pyright`: run the bundled Pyright with the given arguments.

fn main() {
    match pyright_alright::run_launcher() {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            eprintln!("{e:?}");
            std::process::exit(1);
        }
    }
}
