//! The menu value and the callbacks it drives.

use std::fmt;
use std::sync::Arc;

use mc_menu_nbt::NbtCompound;
use mc_menu_proto::item_stack::ItemStack;
use mc_menu_proto::types::BlockPos;

use crate::error::MenuError;
use crate::kind::ContainerKind;
use crate::session::MenuViewer;

/// Receives the stack a player put into a menu slot.
///
/// The change itself is never stored: the menu's contents stay as sent.
pub trait Submittable: Send + Sync {
    fn submit(&self, player: &MenuViewer, item: ItemStack);

    /// Close notifications, for submittables that want them.
    fn closer(&self) -> Option<&dyn Closer> {
        None
    }
}

/// Notified when a menu stops being shown, either because the player closed
/// it or because another menu replaced it.
pub trait Closer: Send + Sync {
    fn close(&self, player: &MenuViewer);
}

/// A server-defined inventory menu.
///
/// A `Menu` is a plain value: building or cloning one sends nothing. The
/// copy returned by [`send_menu`](crate::send_menu) carries the position and
/// window id it was opened with.
#[derive(Clone)]
pub struct Menu {
    name: String,
    kind: ContainerKind,
    submittable: Arc<dyn Submittable>,
    items: Vec<ItemStack>,
    position: Option<BlockPos>,
    window_id: Option<u8>,
}

impl Menu {
    pub fn new(
        submittable: Arc<dyn Submittable>,
        name: impl Into<String>,
        kind: ContainerKind,
    ) -> Self {
        Self {
            name: name.into(),
            kind,
            submittable,
            items: Vec::new(),
            position: None,
            window_id: None,
        }
    }

    /// Replace the stacks shown, in slot order.
    pub fn with_stacks(mut self, stacks: impl IntoIterator<Item = ItemStack>) -> Self {
        self.items = stacks.into_iter().collect();
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> ContainerKind {
        self.kind
    }

    pub fn items(&self) -> &[ItemStack] {
        &self.items
    }

    pub fn submittable(&self) -> &Arc<dyn Submittable> {
        &self.submittable
    }

    /// Where the fake container was placed, once opened.
    pub fn position(&self) -> Option<BlockPos> {
        self.position
    }

    pub fn window_id(&self) -> Option<u8> {
        self.window_id
    }

    pub(crate) fn opened_at(mut self, position: BlockPos, window_id: u8) -> Self {
        self.position = Some(position);
        self.window_id = Some(window_id);
        self
    }

    pub(crate) fn check_capacity(&self) -> Result<(), MenuError> {
        let capacity = self.kind.capacity();
        if self.items.len() > capacity {
            return Err(MenuError::TooManyItems {
                kind: self.kind,
                count: self.items.len(),
                capacity,
            });
        }
        Ok(())
    }

    /// Forward a close to the submittable's closer. Returns whether one ran.
    pub(crate) fn notify_close(&self, viewer: &MenuViewer) -> bool {
        match self.submittable.closer() {
            Some(closer) => {
                closer.close(viewer);
                true
            }
            None => false,
        }
    }

    /// Block entity data that makes the client render the menu title.
    pub fn block_entity_nbt(&self, position: BlockPos) -> NbtCompound {
        let mut nbt = NbtCompound::new();
        nbt.insert("CustomName".into(), self.name.as_str().into());
        nbt.insert("id".into(), self.kind.nbt_id().into());
        nbt.insert("x".into(), position.x.into());
        nbt.insert("y".into(), position.y.into());
        nbt.insert("z".into(), position.z.into());
        nbt
    }
}

impl fmt::Debug for Menu {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Menu")
            .field("name", &self.name)
            .field("kind", &self.kind)
            .field("items", &self.items.len())
            .field("position", &self.position)
            .field("window_id", &self.window_id)
            .finish_non_exhaustive()
    }
}
