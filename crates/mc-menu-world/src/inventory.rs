//! Fixed-size item inventories with change notification.
//!
//! Two write paths exist. [`Inventory::set_item`] is the server writing a
//! slot: it stores the stack and fires the change callback. Changes the
//! client asks for go through [`Inventory::apply_client_change`], which first
//! consults the installed [`InventoryHandler`] and only stores the stack if
//! the handler lets it through.

use std::sync::{Arc, Mutex, PoisonError, RwLock};

use mc_menu_proto::item_stack::ItemStack;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum InventoryError {
    #[error("slot {slot} out of range for inventory of size {size}")]
    SlotOutOfRange { slot: usize, size: usize },
}

/// Callback fired after a slot was written: `(slot, before, after)`.
pub type SlotChangeFn = dyn Fn(usize, &ItemStack, &ItemStack) + Send + Sync;

/// Outcome holder passed to an [`InventoryHandler`].
#[derive(Debug, Default)]
pub struct ChangeContext {
    cancelled: bool,
}

impl ChangeContext {
    /// Prevent the change from being stored.
    pub fn cancel(&mut self) {
        self.cancelled = true;
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled
    }
}

/// Intercepts slot changes that originate from the client.
pub trait InventoryHandler: Send + Sync {
    /// `before` is the stack currently in `slot`, `after` the one the client
    /// wants there.
    fn handle_client_change(
        &self,
        ctx: &mut ChangeContext,
        slot: usize,
        before: &ItemStack,
        after: &ItemStack,
    );
}

/// A fixed-size, internally synchronized slot array.
pub struct Inventory {
    slots: Mutex<Vec<ItemStack>>,
    on_change: Box<SlotChangeFn>,
    handler: RwLock<Option<Arc<dyn InventoryHandler>>>,
}

impl Inventory {
    /// Create an inventory of `size` empty slots.
    pub fn new(
        size: usize,
        on_change: impl Fn(usize, &ItemStack, &ItemStack) + Send + Sync + 'static,
    ) -> Self {
        Self {
            slots: Mutex::new(vec![ItemStack::empty(); size]),
            on_change: Box::new(on_change),
            handler: RwLock::new(None),
        }
    }

    /// An inventory whose change callback does nothing.
    pub fn nop(size: usize) -> Self {
        Self::new(size, |_, _, _| {})
    }

    pub fn size(&self) -> usize {
        self.lock_slots().len()
    }

    /// Copy of the stack in `slot`.
    pub fn item(&self, slot: usize) -> Result<ItemStack, InventoryError> {
        let slots = self.lock_slots();
        slots
            .get(slot)
            .cloned()
            .ok_or(InventoryError::SlotOutOfRange {
                slot,
                size: slots.len(),
            })
    }

    /// Copy of every slot, in order.
    pub fn items(&self) -> Vec<ItemStack> {
        self.lock_slots().clone()
    }

    /// Server-side write. Stores the stack and fires the change callback.
    pub fn set_item(&self, slot: usize, stack: ItemStack) -> Result<(), InventoryError> {
        let before = {
            let mut slots = self.lock_slots();
            let size = slots.len();
            let entry = slots
                .get_mut(slot)
                .ok_or(InventoryError::SlotOutOfRange { slot, size })?;
            std::mem::replace(entry, stack.clone())
        };
        // Fired without the lock held so the callback may read the inventory.
        (self.on_change)(slot, &before, &stack);
        Ok(())
    }

    /// Install the handler consulted for client-originated changes.
    pub fn set_handler(&self, handler: Arc<dyn InventoryHandler>) {
        *self
            .handler
            .write()
            .unwrap_or_else(PoisonError::into_inner) = Some(handler);
    }

    pub fn has_handler(&self) -> bool {
        self.handler
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .is_some()
    }

    /// A change requested by the client for `slot`.
    ///
    /// Returns `Ok(true)` if the stack was stored, `Ok(false)` if the handler
    /// cancelled it and the client needs to be resynced.
    pub fn apply_client_change(
        &self,
        slot: usize,
        stack: ItemStack,
    ) -> Result<bool, InventoryError> {
        let before = self.item(slot)?;
        let handler = self
            .handler
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone();
        if let Some(handler) = handler {
            let mut ctx = ChangeContext::default();
            handler.handle_client_change(&mut ctx, slot, &before, &stack);
            if ctx.is_cancelled() {
                return Ok(false);
            }
        }
        self.set_item(slot, stack)?;
        Ok(true)
    }

    fn lock_slots(&self) -> std::sync::MutexGuard<'_, Vec<ItemStack>> {
        self.slots.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl std::fmt::Debug for Inventory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Inventory")
            .field("slots", &self.items())
            .field("has_handler", &self.has_handler())
            .finish()
    }
}
