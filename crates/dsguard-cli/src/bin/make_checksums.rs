use dsguard_cli::cli::ChecksumsCli;
use dsguard_core::logging;

fn main() {
    let target = logging::init();
    tracing::debug!("logging to {:?}", target);

    std::process::exit(ChecksumsCli::run_from_args());
}
