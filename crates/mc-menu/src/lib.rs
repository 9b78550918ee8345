//! Server-defined inventory menus shown through fake containers.
//!
//! Bedrock has no packet for a custom inventory UI, so a menu borrows the
//! machinery of real containers: a chest, hopper or dropper block is shown
//! to one player just behind them, the client is told a block entity lives
//! there, and a container window is opened on it. Slot clicks on that window
//! land in a private inventory whose handler turns them into
//! [`Submittable::submit`] calls instead of storing anything.
//!
//! ```ignore
//! let menu = Menu::new(Arc::new(MyShop), "Shop", ContainerKind::Chest)
//!     .with_stacks(vec![diamond, emerald]);
//! let menu = mc_menu::send_menu(&mut connection, menu)?;
//! ```

pub mod blocks;
pub mod config;
pub mod driver;
pub mod error;
pub mod handler;
pub mod kind;
pub mod menu;
pub mod session;
pub mod tracker;

#[cfg(test)]
mod testutil;

pub use blocks::register_menu_blocks;
pub use config::MenuConfig;
pub use driver::{close_menu, send_menu, update_menu, MenuDriver};
pub use error::MenuError;
pub use kind::ContainerKind;
pub use menu::{Closer, Menu, Submittable};
pub use session::{FakeContainer, MenuSession, MenuViewer, SessionId, WindowIdAllocator};
pub use tracker::{MenuTracker, TrackedMenu};
