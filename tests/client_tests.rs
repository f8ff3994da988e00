mod common;

use std::io::Read;
use std::net::TcpListener;
use std::thread;
use std::time::Duration;

use common::MockCamera;
use zebra_cam::camera::{frame_command, CameraClient};
use zebra_cam::utils::CameraError;

#[test]
fn test_send_command_round_trip() {
    let camera = MockCamera::start(vec![b"RESULT:PASS\r\n".to_vec()]);

    let client = CameraClient::new("127.0.0.1", camera.control_port, camera.results_port)
        .with_timeout(Duration::from_secs(2));
    let response = client.send_command("TRIGGER").unwrap();

    assert_eq!(response, b"RESULT:PASS\r\n");
    assert_eq!(camera.received_command(), b"TRIGGER\r\n");
}

#[test]
fn test_send_command_does_not_double_terminate() {
    let camera = MockCamera::start(vec![Vec::new()]);

    let client = CameraClient::new("127.0.0.1", camera.control_port, camera.results_port)
        .with_timeout(Duration::from_secs(2));
    client.send_command("TRIGGER\r\n").unwrap();

    assert_eq!(camera.received_command(), b"TRIGGER\r\n");
}

#[test]
fn test_send_command_reports_connect_failure() {
    // Bind then drop to get a port with nothing listening on it
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);

    let client =
        CameraClient::new("127.0.0.1", port, port).with_timeout(Duration::from_millis(200));
    let result = client.send_command("TRIGGER");

    assert!(matches!(result, Err(CameraError::ConnectFailed(_, _))));
}

#[test]
fn test_send_command_times_out_on_silent_results_port() {
    let control_listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let control_port = control_listener.local_addr().unwrap().port();

    let results_listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let results_port = results_listener.local_addr().unwrap().port();

    thread::spawn(move || {
        if let Ok((mut stream, _)) = control_listener.accept() {
            let mut data = Vec::new();
            let _ = stream.read_to_end(&mut data);
        }
    });
    thread::spawn(move || {
        // Accept but never write and never close
        if let Ok((stream, _)) = results_listener.accept() {
            thread::sleep(Duration::from_secs(5));
            drop(stream);
        }
    });

    let client = CameraClient::new("127.0.0.1", control_port, results_port)
        .with_timeout(Duration::from_millis(200));
    let result = client.send_command("TRIGGER");

    assert!(matches!(result, Err(CameraError::ReceiveFailed(_, _))));
}

#[test]
fn test_frame_command_appends_terminator() {
    assert_eq!(frame_command("TRIGGER"), "TRIGGER\r\n");
    assert_eq!(frame_command("getresultimage\r\n"), "getresultimage\r\n");
}
