use crate::realtime_probe::websocket_url;

#[test]
fn http_base_maps_to_ws() {
    assert_eq!(
        websocket_url("http://localhost:8080"),
        "ws://localhost:8080/ws"
    );
}

#[test]
fn https_base_maps_to_wss() {
    assert_eq!(
        websocket_url("https://messages.example.com"),
        "wss://messages.example.com/ws"
    );
}

#[test]
fn trailing_slash_is_trimmed() {
    assert_eq!(
        websocket_url("http://localhost:8080/"),
        "ws://localhost:8080/ws"
    );
}
