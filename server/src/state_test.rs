use super::test_helpers::*;

#[tokio::test]
async fn starts_with_nothing_connected() {
    let state = test_app_state();
    assert!(state.connected_ids().await.is_empty());
    assert!(state.device(0).await.is_none());
}

#[tokio::test]
async fn connected_ids_are_sorted() {
    let state = test_app_state();
    seed_connected(&state, 2).await;
    seed_connected(&state, 0).await;
    assert_eq!(state.connected_ids().await, vec![0, 2]);
    assert!(state.device(2).await.is_some());
}

#[tokio::test]
async fn release_all_empties_map_and_releases_devices() {
    let state = test_app_state();
    seed_connected(&state, 1).await;
    let device = state.device(1).await.expect("connected");

    state.release_all().await;

    assert!(state.connected_ids().await.is_empty());
    assert!(device.lock().await.frame().is_none());
}
