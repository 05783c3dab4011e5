//! # OSC
//!
//! Control-rate frequency over OSC. A listener thread decodes `/frequency` messages and passes
//! the values on to the process callback, which picks up the latest one at the start of each
//! block.
use anyhow::{Context, Result};
use crossbeam_channel::{Receiver, Sender, TrySendError};
use rosc::{OscMessage, OscPacket, OscType};
use std::net::{SocketAddr, UdpSocket};
use std::thread;
use synth_modules::prelude::*;

pub const FREQUENCY_ADDRESS: &str = "/frequency";

/// Bind the OSC socket.
pub fn bind(address: SocketAddr) -> Result<UdpSocket> {
    UdpSocket::bind(address).with_context(|| format!("Failed to bind OSC socket to {}.", address))
}

/// Forward every frequency received on `socket` to `tx` from a background thread.
pub fn spawn(socket: UdpSocket, tx: Sender<Frequency>) -> Result<thread::JoinHandle<()>> {
    let address = socket
        .local_addr()
        .context("Failed to get OSC socket address.")?;
    info!("Listening for OSC messages on {}.", address);
    let handle = thread::Builder::new()
        .name("osc".to_string())
        .spawn(move || listen(&socket, &tx))
        .context("Failed to spawn OSC thread.")?;
    Ok(handle)
}

fn listen(socket: &UdpSocket, tx: &Sender<Frequency>) {
    let mut buf = [0u8; rosc::decoder::MTU];
    loop {
        match socket.recv_from(&mut buf) {
            Ok((size, _addr)) => match rosc::decoder::decode_udp(&buf[..size]) {
                Ok((_, packet)) => {
                    if !handle_packet(packet, tx) {
                        debug!("Frequency receiver is gone, stopping OSC listener.");
                        break;
                    }
                }
                Err(e) => error!("Failed to decode OSC packet: {:?}.", e),
            },
            Err(e) => {
                error!("Error receiving from socket: {}.", e);
                break;
            }
        }
    }
}

/// Route `packet`, sending any frequency it carries. Return false once nobody listens to `tx`.
pub fn handle_packet(packet: OscPacket, tx: &Sender<Frequency>) -> bool {
    match packet {
        OscPacket::Message(msg) => {
            if msg.addr != FREQUENCY_ADDRESS {
                debug!("Ignoring OSC address: {}.", msg.addr);
                return true;
            }
            match frequency(&msg) {
                Some(frequency) => match tx.try_send(frequency) {
                    Ok(()) => true,
                    Err(TrySendError::Full(_)) => {
                        warn!("Dropping frequency {}: process callback is behind.", frequency);
                        true
                    }
                    Err(TrySendError::Disconnected(_)) => false,
                },
                None => {
                    warn!("Expected a number to set frequency, but got {:?}.", msg.args);
                    true
                }
            }
        }
        OscPacket::Bundle(bundle) => bundle
            .content
            .into_iter()
            .all(|packet| handle_packet(packet, tx)),
    }
}

/// Frequency carried by the first argument of `msg`.
pub fn frequency(msg: &OscMessage) -> Option<Frequency> {
    if msg.args.len() > 1 {
        warn!("Extra arguments to {} will be ignored.", msg.addr);
    }
    match msg.args.first() {
        Some(&OscType::Float(f)) => Some(f),
        Some(&OscType::Double(f)) => Some(f as Frequency),
        Some(&OscType::Int(i)) => Some(i as Frequency),
        Some(&OscType::Long(i)) => Some(i as Frequency),
        _ => None,
    }
}

/// Latest value received on a channel, for the real-time side.
pub struct Latest {
    rx: Receiver<Frequency>,
    value: Frequency,
}

impl Latest {
    pub fn new(rx: Receiver<Frequency>, initial: Frequency) -> Self {
        Latest { rx, value: initial }
    }

    /// Drain pending values without blocking and return the newest one seen so far.
    #[inline]
    pub fn poll(&mut self) -> Frequency {
        while let Ok(value) = self.rx.try_recv() {
            self.value = value;
        }
        self.value
    }
}
