// App state for Axum server
use crate::sidecar::SidecarRunner;

#[derive(Clone)]
pub struct AppState {
    pub sidecar: SidecarRunner,
}
