//! # EuReject
//!
//! Command-line rejection sampler for Approximate Bayesian Computation.
//!
//! ## Usage
//!
//! ```bash
//! # Keep the 1000 simulated rows closest to the observed statistics
//! eureject -f observed.txt -k 1000 sims-1.txt sims-2.txt > posterior.txt
//!
//! # Report the standardization means and standard deviations only
//! eureject -f observed.txt -k 0 -n 50000 sims-1.txt
//! ```

use clap::error::ErrorKind;
use clap::Parser;

mod cli;

use cli::Cli;

fn main() {
    let parsed = Cli::try_parse().and_then(|cli| cli.check_usage().map(|()| cli));
    let cli = match parsed {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            let code = match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => 0,
                _ => 1,
            };
            std::process::exit(code);
        }
    };

    cli::init_logging(cli.verbosity());

    if let Err(e) = cli::dispatch(cli) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}
