//! `build-pyright`: fetch, build and place a Pyright release into the wrapper
//! package.

fn main() {
    if let Err(e) = pyright_alright::run_build_cli() {
        eprintln!("{e:?}");
        std::process::exit(pyright_alright::exit_code_for(&e));
    }
}
