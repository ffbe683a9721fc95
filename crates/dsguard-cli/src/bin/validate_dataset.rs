use dsguard_cli::cli::ValidateCli;
use dsguard_core::logging;

fn main() {
    let target = logging::init();
    tracing::debug!("logging to {:?}", target);

    std::process::exit(ValidateCli::run_from_args());
}
