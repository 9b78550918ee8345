//! The three container kinds a menu can be displayed as.

use std::fmt;

use mc_menu_proto::packets::ContainerType;
use mc_menu_world::block::{chest_state, dropper_state, hopper_state};
use mc_menu_world::BlockState;
use serde::Deserialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContainerKind {
    Chest,
    Hopper,
    Dropper,
}

impl ContainerKind {
    pub const ALL: [ContainerKind; 3] = [
        ContainerKind::Chest,
        ContainerKind::Hopper,
        ContainerKind::Dropper,
    ];

    /// Block shown at the fake position.
    pub fn visual_block(self) -> BlockState {
        match self {
            ContainerKind::Chest => chest_state(),
            ContainerKind::Hopper => hopper_state(),
            ContainerKind::Dropper => dropper_state(),
        }
    }

    pub fn visual_runtime_id(self) -> u32 {
        self.visual_block().runtime_id()
    }

    /// Window type sent in ContainerOpen.
    pub fn protocol_type(self) -> u8 {
        match self {
            ContainerKind::Chest => ContainerType::CONTAINER,
            ContainerKind::Hopper => ContainerType::HOPPER,
            ContainerKind::Dropper => ContainerType::DROPPER,
        }
    }

    /// Block entity `id` the client expects for this container.
    pub fn nbt_id(self) -> &'static str {
        match self {
            ContainerKind::Chest => "Chest",
            ContainerKind::Hopper => "Hopper",
            ContainerKind::Dropper => "Dropper",
        }
    }

    /// Number of slots the client window renders.
    pub fn capacity(self) -> usize {
        match self {
            ContainerKind::Chest => 27,
            ContainerKind::Hopper => 5,
            ContainerKind::Dropper => 9,
        }
    }
}

impl fmt::Display for ContainerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.nbt_id())
    }
}
