use super::*;
use crate::state::test_helpers::{seed_connected, test_app_state};
use futures::StreamExt;

#[test]
fn part_wraps_jpeg_with_boundary_and_header() {
    let part = multipart_part(b"JPEG");
    assert_eq!(&part[..], b"--frame\r\nContent-Type: image/jpeg\r\n\r\nJPEG\r\n");
}

#[tokio::test]
async fn stream_yields_parts_while_connected() {
    let state = test_app_state();
    seed_connected(&state, 0).await;
    let device = state.device(0).await.unwrap();

    let parts: Vec<_> = frame_stream(state, 0, device).take(3).collect().await;

    assert_eq!(parts.len(), 3);
    for part in parts {
        let part = part.unwrap();
        assert!(part.starts_with(b"--frame\r\nContent-Type: image/jpeg\r\n\r\n\xFF\xD8"));
        assert!(part.ends_with(b"\xFF\xD9\r\n"));
    }
}

#[tokio::test]
async fn stream_ends_after_disconnect() {
    let state = test_app_state();
    seed_connected(&state, 0).await;
    let device = state.device(0).await.unwrap();
    let mut stream = Box::pin(frame_stream(state.clone(), 0, device));

    assert!(stream.next().await.is_some());
    state.cameras.write().await.remove(&0);

    assert!(stream.next().await.is_none());
}

#[tokio::test]
async fn stream_ends_when_camera_is_reconnected() {
    let state = test_app_state();
    seed_connected(&state, 0).await;
    let device = state.device(0).await.unwrap();
    let mut stream = Box::pin(frame_stream(state.clone(), 0, device));

    state.cameras.write().await.remove(&0);
    seed_connected(&state, 0).await;

    assert!(stream.next().await.is_none());
}

#[tokio::test]
async fn stream_route_requires_connection() {
    let state = test_app_state();
    let response = stream_camera(State(state), Path(0)).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn stream_route_sets_multipart_content_type() {
    let state = test_app_state();
    seed_connected(&state, 2).await;

    let response = stream_camera(State(state), Path(2)).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers()[CONTENT_TYPE], STREAM_CONTENT_TYPE);
}
