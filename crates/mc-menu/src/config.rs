//! Tunables for the menu driver.

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct MenuConfig {
    /// How far behind the player the fake container is placed, in blocks.
    #[serde(default = "default_distance")]
    pub distance: f32,
    /// Send a server-initiated ContainerClose for a menu that is replaced by
    /// one at a different position. Clients accept a new ContainerOpen
    /// without it, so this is off by default.
    #[serde(default)]
    pub send_close_packet: bool,
}

fn default_distance() -> f32 {
    2.0
}

impl Default for MenuConfig {
    fn default() -> Self {
        Self {
            distance: default_distance(),
            send_close_packet: false,
        }
    }
}
