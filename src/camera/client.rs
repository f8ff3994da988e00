//! Blocking TCP client for communicating with the camera.
//!
//! The camera exposes two endpoints: a control port that accepts
//! CRLF-terminated command strings, and a results port that streams the
//! outcome of the most recent command until the camera closes the
//! connection. Every command is one full cycle across both.

use crate::utils::config::{COMMAND_TERMINATOR, DEFAULT_CAMERA_TIMEOUT};
use crate::utils::error::CameraError;
use log::{debug, info};
use std::io::{Read, Write};
use std::net::{SocketAddr, TcpStream, ToSocketAddrs};
use std::time::Duration;

/// Client for sending commands to the camera and collecting results
pub struct CameraClient {
    host: String,
    control_port: u16,
    results_port: u16,
    timeout: Duration,
}

impl CameraClient {
    /// Create a new client for the given camera endpoints
    pub fn new(host: impl Into<String>, control_port: u16, results_port: u16) -> Self {
        Self {
            host: host.into(),
            control_port,
            results_port,
            timeout: DEFAULT_CAMERA_TIMEOUT,
        }
    }

    /// Replace the default connect/read/write timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Send a command to the control port and collect the reply from the
    /// results port
    ///
    /// **Public** - the one transport operation everything else builds on
    ///
    /// # Arguments
    /// * `command` - Command text; the CRLF terminator is appended if missing
    ///
    /// # Returns
    /// Raw response bytes, which may be empty if the camera closed the
    /// results connection without sending anything
    ///
    /// # Errors
    /// * `CameraError::AddressResolution` - Host does not resolve
    /// * `CameraError::ConnectFailed` - Either endpoint refused or timed out
    /// * `CameraError::SendFailed` - Write to the control port failed
    /// * `CameraError::ReceiveFailed` - Read from the results port failed
    pub fn send_command(&self, command: &str) -> Result<Vec<u8>, CameraError> {
        info!("Sending command: {}", command.trim_end());

        self.send_to_control(frame_command(command).as_bytes())?;
        self.receive_from_results()
    }

    /// Open a fresh connection to the control port and write `data`
    ///
    /// **Private** - transport detail of send_command
    fn send_to_control(&self, data: &[u8]) -> Result<(), CameraError> {
        let addr = self.resolve(self.control_port)?;

        let mut stream = TcpStream::connect_timeout(&addr, self.timeout)
            .map_err(|e| CameraError::ConnectFailed(addr.to_string(), e))?;
        stream
            .set_write_timeout(Some(self.timeout))
            .map_err(|e| CameraError::SendFailed(addr.to_string(), e))?;

        stream
            .write_all(data)
            .map_err(|e| CameraError::SendFailed(addr.to_string(), e))?;

        debug!("Sent {} bytes to {}", data.len(), addr);

        Ok(())
    }

    /// Open a fresh connection to the results port and read until the
    /// camera closes it
    ///
    /// **Private** - transport detail of send_command
    fn receive_from_results(&self) -> Result<Vec<u8>, CameraError> {
        let addr = self.resolve(self.results_port)?;

        let mut stream = TcpStream::connect_timeout(&addr, self.timeout)
            .map_err(|e| CameraError::ConnectFailed(addr.to_string(), e))?;
        stream
            .set_read_timeout(Some(self.timeout))
            .map_err(|e| CameraError::ReceiveFailed(addr.to_string(), e))?;

        let mut response = Vec::new();
        stream
            .read_to_end(&mut response)
            .map_err(|e| CameraError::ReceiveFailed(addr.to_string(), e))?;

        debug!("Received {} bytes from {}", response.len(), addr);

        Ok(response)
    }

    /// Resolve the camera host against one of its ports
    fn resolve(&self, port: u16) -> Result<SocketAddr, CameraError> {
        let endpoint = format!("{}:{}", self.host, port);

        (self.host.as_str(), port)
            .to_socket_addrs()
            .map_err(|e| CameraError::AddressResolution(format!("{}: {}", endpoint, e)))?
            .next()
            .ok_or(CameraError::AddressResolution(endpoint))
    }
}

/// Frame a command the way the camera expects it on the wire
///
/// Appends the CRLF terminator unless the command already carries one.
pub fn frame_command(command: &str) -> String {
    if command.ends_with(COMMAND_TERMINATOR) {
        command.to_string()
    } else {
        format!("{}{}", command, COMMAND_TERMINATOR)
    }
}
