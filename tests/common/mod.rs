//! Shared mock camera for integration tests.
//!
//! Models the device's two endpoints with loopback listeners. The control
//! side records every command it is sent; the results side serves one
//! canned reply per connection and closes, which is how the real camera
//! ends a results read.

use std::io::{Read, Write};
use std::net::TcpListener;
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

pub struct MockCamera {
    pub control_port: u16,
    pub results_port: u16,
    commands: mpsc::Receiver<Vec<u8>>,
}

impl MockCamera {
    /// Start the endpoint pair. One control connection is accepted and one
    /// results reply is served per entry in `results_replies`.
    pub fn start(results_replies: Vec<Vec<u8>>) -> Self {
        let command_count = results_replies.len();

        let control_listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let control_port = control_listener.local_addr().unwrap().port();

        let results_listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let results_port = results_listener.local_addr().unwrap().port();

        let (tx, commands) = mpsc::channel();

        thread::spawn(move || {
            for _ in 0..command_count {
                if let Ok((mut stream, _)) = control_listener.accept() {
                    let mut data = Vec::new();
                    let _ = stream.read_to_end(&mut data);
                    let _ = tx.send(data);
                }
            }
        });

        thread::spawn(move || {
            for reply in results_replies {
                if let Ok((mut stream, _)) = results_listener.accept() {
                    let _ = stream.write_all(&reply);
                }
            }
        });

        Self {
            control_port,
            results_port,
            commands,
        }
    }

    /// Next command the control port received
    pub fn received_command(&self) -> Vec<u8> {
        self.commands
            .recv_timeout(Duration::from_secs(2))
            .expect("no command reached the control port")
    }
}
