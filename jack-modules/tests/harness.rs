extern crate crossbeam_channel;
extern crate jack_modules;
extern crate rosc;
extern crate synth_modules;

use jack_modules::config::Config;
use jack_modules::osc::{self, Latest};
use jack_modules::registry::Registry;
use rosc::{OscMessage, OscPacket, OscType};
use std::fs;
use std::net::UdpSocket;
use std::time::Duration;
use synth_modules::prelude::*;

fn frequency_message(frequency: f32) -> OscPacket {
    OscPacket::Message(OscMessage {
        addr: osc::FREQUENCY_ADDRESS.to_string(),
        args: vec![OscType::Float(frequency)],
    })
}

#[test]
fn loads_config_file() {
    let path = std::env::temp_dir().join(format!("ramp-up-gen-{}.toml", std::process::id()));
    fs::write(&path, "name = \"lfo\"\nrate = \"audio\"\nfrequency = 2.0\n").unwrap();
    let config = Config::load(&path);
    fs::remove_file(&path).unwrap();

    let registry = Registry::load().unwrap();
    let unit = registry.resolve("RampUpGen").unwrap();
    let settings = config.unwrap().settings(unit).unwrap();
    assert_eq!(settings.name, "lfo");
    assert_eq!(settings.rate, Rate::Audio);
    assert_eq!(settings.frequency, 2.0);
}

#[test]
fn missing_config_file_names_the_path() {
    let err = Config::load("/nonexistent/ramp-up-gen.toml").unwrap_err();
    assert!(format!("{:#}", err).contains("/nonexistent/ramp-up-gen.toml"));
}

/// What the process handler does with OSC control, minus JACK.
#[test]
fn osc_frequency_ramps_over_next_period() {
    let sample_rate = 48000.0;
    let period = 128;
    let (tx, rx) = crossbeam_channel::bounded(64);
    let mut latest = Latest::new(rx, 480.0);
    let mut module = RampUpGen::new(Rate::Control, sample_rate, 480.0);
    let mut output = vec![0.0; period];

    module.process(&[latest.poll()], &mut output);
    assert_eq!(module.frequency(), 480.0);
    let start = module.phase();

    assert!(osc::handle_packet(frequency_message(960.0), &tx));
    module.process(&[latest.poll()], &mut output);
    assert_eq!(module.frequency(), 960.0);

    let mut phase = start;
    let mut slope = Slope::new(960.0, 480.0, period);
    for value in &output {
        assert_eq!(*value, phase as f32);
        phase = advance(phase, slope.consume(), sample_rate);
    }
    assert_eq!(module.phase(), phase);
}

#[test]
fn periods_of_any_size_join_up() {
    let mut whole = RampUpGen::new(Rate::Audio, 44100.0, 0.0);
    let mut split = RampUpGen::new(Rate::Audio, 44100.0, 0.0);
    let frequencies = (0..384).map(|i| 50.0 + i as f32).collect::<Vec<_>>();

    let mut expected = vec![0.0; frequencies.len()];
    whole.process(&frequencies, &mut expected);

    let mut output = vec![0.0; frequencies.len()];
    let mut offset = 0;
    for &period in &[64, 128, 32, 160] {
        let range = offset..offset + period;
        split.process(&frequencies[range.clone()], &mut output[range]);
        offset += period;
    }
    assert_eq!(offset, frequencies.len());
    assert_eq!(output, expected);
}

#[test]
fn listener_survives_garbage_datagrams() {
    let socket = osc::bind("127.0.0.1:0".parse().unwrap()).unwrap();
    let address = socket.local_addr().unwrap();
    let (tx, rx) = crossbeam_channel::bounded(4);
    osc::spawn(socket, tx).unwrap();

    let sender = UdpSocket::bind("127.0.0.1:0").unwrap();
    sender.send_to(b"not osc", address).unwrap();
    let packet = rosc::encoder::encode(&frequency_message(220.0)).unwrap();
    sender.send_to(&packet, address).unwrap();

    assert_eq!(rx.recv_timeout(Duration::from_secs(5)), Ok(220.0));
}
