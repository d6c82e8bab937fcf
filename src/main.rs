#[macro_use]
extern crate clap;

use {
    anyhow::{Context, Result},
    cice_zero_ic::{
        parameters::Parameters,
        resolve::{Overrides, RunConfig},
    },
    log::{debug, error},
    simplelog::{Config as LogConfig, LevelFilter, TermLogger, TerminalMode},
    std::fs::File,
};

#[quit::main]
fn main() {
    let matches = clap_app!(cice_zero_ic =>
        (version: crate_version!())
        (about: "Copies a CICE restart file and zeroes its sea-ice state in place with NCO, keeping iceumask and scale_factor.")
        (@arg SRC: --src +takes_value "Source iced restart file (vk83).")
        (@arg DST: --dst +takes_value "Destination path under ~/AFIM_input/...")
        (@arg CONFIG: -c --config +takes_value "YAML file overriding default paths and NCO executables.")
        (@arg OVERWRITE: --overwrite "Overwrite dst if it exists.")
        (@arg DRY_RUN: --("dry-run") "Print commands only.")
        (@arg VERIFY: --verify "Run quick NCO checks after zeroing.")
        (@arg VERBOSE: -v --verbose "Log debug output.")
    )
    .get_matches();

    TermLogger::init(
        if matches.is_present("VERBOSE") {
            LevelFilter::Debug
        } else {
            LevelFilter::Info
        },
        LogConfig::default(),
        TerminalMode::Mixed,
    )
    .expect("Failed to initialize logger");

    let params = match matches.value_of("CONFIG") {
        Some(path) => load_parameters(path).unwrap_or_else(|e| {
            error!("{:#}", e);
            quit::with_code(1);
        }),
        None => Parameters::default(),
    };

    let config = RunConfig::resolve(
        Overrides {
            src: matches.value_of_os("SRC").map(Into::into),
            dst: matches.value_of_os("DST").map(Into::into),
            overwrite: matches.is_present("OVERWRITE"),
            dry_run: matches.is_present("DRY_RUN"),
            verify: matches.is_present("VERIFY"),
        },
        &params,
    );
    debug!("Resolved run configuration: \n{:#?}", config);

    cice_zero_ic::run(&config, &params.tools).unwrap_or_else(|e| {
        error!("{}", e);
        quit::with_code(e.exit_code());
    });
}

fn load_parameters(path: &str) -> Result<Parameters> {
    let file = File::open(path).with_context(|| format!("Failed to open {}", path))?;

    serde_yaml::from_reader::<_, Parameters>(file)
        .with_context(|| format!("Failed to parse parameters from {}", path))
}
