//! Turns client slot changes on a menu window into submissions.

use std::sync::Arc;

use mc_menu_proto::item_stack::ItemStack;
use mc_menu_world::{ChangeContext, InventoryHandler};
use tracing::debug;

use crate::menu::Submittable;
use crate::session::MenuViewer;

/// Handler installed on every menu inventory.
///
/// Every client change is cancelled, then handed to the submittable along
/// with the player who made it. Taking a stack out of a slot submits the
/// stack the menu showed there; anything else submits what the client put
/// in.
pub struct MenuInterceptor {
    viewer: MenuViewer,
    submittable: Arc<dyn Submittable>,
}

impl MenuInterceptor {
    pub fn new(viewer: MenuViewer, submittable: Arc<dyn Submittable>) -> Self {
        Self { viewer, submittable }
    }
}

impl InventoryHandler for MenuInterceptor {
    fn handle_client_change(
        &self,
        ctx: &mut ChangeContext,
        slot: usize,
        before: &ItemStack,
        after: &ItemStack,
    ) {
        ctx.cancel();
        let chosen = if after.is_empty() { before } else { after };
        debug!(
            "{} ({}) submitted slot {slot} of a menu",
            self.viewer.name, self.viewer.session
        );
        self.submittable.submit(&self.viewer, chosen.clone());
    }
}
