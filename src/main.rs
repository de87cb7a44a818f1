use std::io;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let outcome = rc::get_args().and_then(rc::run);
    std::process::exit(rc::emit(&outcome, &mut io::stdout().lock()));
}
