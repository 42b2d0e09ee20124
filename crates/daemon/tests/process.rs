use std::net::SocketAddr;
use std::time::Duration;

use jsonstash_daemon::{start_service, ServiceConfig};

#[tokio::test]
async fn test_programmatic_shutdown_drains_service() {
    let config = ServiceConfig {
        listen_addr: SocketAddr::from(([127, 0, 0, 1], 0)),
        ..ServiceConfig::default()
    };

    let (state, handle) = start_service(&config).await.unwrap();
    state.stash().add("users").unwrap();
    assert!(!state.is_shutting_down());

    handle.shutdown();
    tokio::time::timeout(Duration::from_secs(5), handle.wait())
        .await
        .expect("service did not stop in time")
        .unwrap();

    assert!(state.is_shutting_down());
    // The stash outlives the server for anyone still holding the state
    assert_eq!(state.stash().list_names(), vec!["users".to_string()]);
}
