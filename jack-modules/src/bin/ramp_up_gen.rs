//! # Ramp Up Gen
//!
//! Generate a ramp in the interval [0, 1) with the frequency provided via the `frequency` port
//! (or OSC) and write it into the `phase` port.

#[macro_use]
extern crate anyhow;
#[macro_use]
extern crate clap;
extern crate crossbeam_channel;
extern crate jack;
extern crate jack_modules;
#[macro_use]
extern crate slog;
#[macro_use]
extern crate slog_scope;
extern crate synth_modules;

use anyhow::{Context, Result};
use clap::{App, Arg, ArgMatches};
use jack_modules::config::Config;
use jack_modules::notification::Notification;
use jack_modules::osc::{self, Latest};
use jack_modules::process::{FrequencyInput, RampProcess};
use jack_modules::registry::Registry;
use synth_modules::prelude::*;

pub fn main() {
    let matches = App::new("RampUpGen")
        .version(crate_version!())
        .author("Ruslan Prokopchuk <fer.obbee@gmail.com>")
        .about("Generate phase in [0, 1) interval with the input frequency")
        .arg(
            Arg::with_name("NAME")
                .long("name")
                .help("Client name")
                .takes_value(true),
        ).arg(
            Arg::with_name("RATE")
                .long("rate")
                .help("Rate of the frequency input")
                .possible_values(&["audio", "control", "ar", "kr"])
                .takes_value(true),
        ).arg(
            Arg::with_name("FREQUENCY")
                .long("frequency")
                .help("Frequency at construction time, in Hz")
                .takes_value(true),
        ).arg(
            Arg::with_name("OSC")
                .long("osc")
                .help("Address to listen for /frequency OSC messages (control rate only)")
                .takes_value(true),
        ).arg(
            Arg::with_name("CONNECT")
                .long("connect")
                .help("Port to connect the phase output to")
                .multiple(true)
                .number_of_values(1)
                .takes_value(true),
        ).arg(
            Arg::with_name("CONFIG")
                .long("config")
                .help("Config file")
                .takes_value(true),
        ).arg(
            Arg::with_name("v")
                .short("v")
                .multiple(true)
                .help("Sets the level of verbosity"),
        ).get_matches();

    let guard = match jack_modules::logging::init(matches.occurrences_of("v")) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("{:#}", e);
            std::process::exit(1);
        }
    };

    let result = run(&matches);
    if let Err(ref e) = result {
        error!("{:#}", e);
    }
    // Flush the logger before exiting.
    drop(guard);
    if result.is_err() {
        std::process::exit(1);
    }
}

fn run(matches: &ArgMatches) -> Result<()> {
    let registry = Registry::load()?;
    let unit = registry.resolve(RampUpGen::UNIT.name)?;

    let config = match matches.value_of("CONFIG") {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };
    let settings = config.merge(flags(matches)?).settings(unit)?;
    debug!("{:?}", settings);

    let (client, status) = jack::Client::new(
        &settings.name,
        jack::ClientOptions::NO_START_SERVER | jack::ClientOptions::USE_EXACT_NAME,
    ).context("Failed to connect to JACK.")?;
    debug!("JACK client status: {:?}.", status);

    let sample_rate = client.sample_rate() as Sample;
    let module = RampUpGen::new(settings.rate, sample_rate, settings.frequency);
    info!(
        "{} running at {} Hz with {:?}-rate frequency.",
        settings.name, sample_rate, settings.rate
    );
    debug!("Initialization sample: {}.", module.initialization_sample());

    let frequency = match settings.osc {
        Some(address) => {
            let (tx, rx) = crossbeam_channel::bounded(64);
            // Detached: lives as long as the process.
            let _listener = osc::spawn(osc::bind(address)?, tx)?;
            FrequencyInput::Osc(Latest::new(rx, settings.frequency))
        }
        None => FrequencyInput::Port(
            client
                .register_port("frequency", jack::AudioIn::default())
                .context("Failed to register input port.")?,
        ),
    };

    let phase = client
        .register_port("phase", jack::AudioOut::default())
        .context("Failed to register output port.")?;
    let phase_name = phase.name().context("Failed to get output port name.")?;

    let process = RampProcess::new(module, frequency, phase);
    let (notification, shutdown) = Notification::new();
    let active_client = client
        .activate_async(notification, process)
        .context("Failed to activate JACK client.")?;

    for port in &settings.connect {
        active_client
            .as_client()
            .connect_ports_by_name(&phase_name, port)
            .with_context(|| format!("Failed to connect {} to {}.", phase_name, port))?;
        info!("Connected {} to {}.", phase_name, port);
    }

    match shutdown.recv() {
        Ok(status) => warn!("JACK shut the client down: {:?}.", status),
        Err(_) => debug!("Notification handler dropped."),
    }

    active_client
        .deactivate()
        .map_err(|e| anyhow!("Failed to deactivate JACK client: {:?}.", e))?;
    Ok(())
}

/// Settings given on the command line. They override the config file.
fn flags(matches: &ArgMatches) -> Result<Config> {
    let frequency = match matches.value_of("FREQUENCY") {
        Some(frequency) => Some(
            frequency
                .parse::<Frequency>()
                .with_context(|| format!("Frequency must be a number, got `{}`.", frequency))?,
        ),
        None => None,
    };
    Ok(Config {
        name: matches.value_of("NAME").map(String::from),
        rate: matches.value_of("RATE").map(String::from),
        frequency,
        osc: matches.value_of("OSC").map(String::from),
        connect: matches
            .values_of("CONNECT")
            .map(|ports| ports.map(String::from).collect()),
    })
}

