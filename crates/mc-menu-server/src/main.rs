mod config;
mod connection;

use bytes::Bytes;
use config::ServerConfig;
use connection::PlayerConnection;
use mc_menu::{
    register_menu_blocks, Closer, ContainerKind, Menu, MenuDriver, MenuTracker, MenuViewer,
    SessionId, Submittable,
};
use mc_menu_proto::item_stack::ItemStack;
use mc_menu_proto::types::Rotation;
use mc_menu_world::BlockRegistry;
use std::sync::Arc;
use tokio::sync::mpsc::{self, UnboundedReceiver};
use tracing::{debug, error, info};

/// Logs what the player picked and when they walked away.
struct ShopHandler {
    shop: &'static str,
}

impl Submittable for ShopHandler {
    fn submit(&self, player: &MenuViewer, item: ItemStack) {
        info!(
            "{} picked item {} x{} in {}",
            player.name, item.runtime_id, item.count, self.shop
        );
    }

    fn closer(&self) -> Option<&dyn Closer> {
        Some(self)
    }
}

impl Closer for ShopHandler {
    fn close(&self, player: &MenuViewer) {
        info!("{} left {}", player.name, self.shop);
    }
}

/// Stands in for the batch writer: logs every queued sub-packet.
async fn drain_outbound(mut rx: UnboundedReceiver<Bytes>) -> usize {
    let mut sent = 0;
    while let Some(sub_packet) = rx.recv().await {
        debug!(
            "Batch writer: packet 0x{:02X}, {} bytes",
            sub_packet.first().copied().unwrap_or_default(),
            sub_packet.len()
        );
        sent += 1;
    }
    sent
}

#[tokio::main]
async fn main() {
    let config = match ServerConfig::load("menu.toml") {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load menu.toml: {e}");
            std::process::exit(1);
        }
    };

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.logging.level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .init();

    info!("MC-Menu demo v{} starting", env!("CARGO_PKG_VERSION"));
    info!(
        "Menus placed {} blocks behind the player, explicit close packet: {}",
        config.menu.distance, config.menu.send_close_packet
    );

    let mut registry = BlockRegistry::vanilla();
    register_menu_blocks(&mut registry);
    info!("Block registry holds {} states", registry.len());

    let driver = MenuDriver::new(MenuTracker::global(), config.menu.clone());
    let (tx, rx) = mpsc::unbounded_channel();
    let writer = tokio::spawn(drain_outbound(rx));

    let demo = &config.demo;
    let mut conn = PlayerConnection::new(
        SessionId(1),
        demo.player.clone(),
        demo.position,
        Rotation::new(demo.yaw, demo.pitch),
        tx,
    );
    info!("{} joined at {}", conn.name(), demo.position);

    if let Err(e) = run_script(&driver, &mut conn) {
        error!("Menu script failed: {e}");
    }

    driver.forget_session(SessionId(1));
    drop(conn);
    match writer.await {
        Ok(sent) => info!("Demo finished, {sent} packets written"),
        Err(e) => error!("Batch writer task failed: {e}"),
    }
}

/// Walk one player through opening, clicking, refreshing, replacing and
/// closing menus.
fn run_script(
    driver: &MenuDriver,
    conn: &mut PlayerConnection,
) -> Result<(), Box<dyn std::error::Error>> {
    let loot = Menu::new(
        Arc::new(ShopHandler { shop: "loot chest" }),
        "Loot",
        ContainerKind::Chest,
    )
    .with_stacks(vec![ItemStack::new(304, 1), ItemStack::new(305, 16)]);
    let loot = driver.send_menu(conn, loot)?;
    let window = loot.window_id().unwrap_or_default();

    conn.handle_slot_change(window, 1, ItemStack::empty())?;

    let loot = driver.update_menu(conn, loot.with_stacks(vec![ItemStack::new(304, 1)]))?;
    debug!("Loot menu now shows {} stacks", loot.items().len());

    let turned = Rotation::new(conn.rotation.yaw + 180.0, conn.rotation.pitch);
    conn.set_transform(conn.position, turned);
    let output = Menu::new(
        Arc::new(ShopHandler { shop: "output hopper" }),
        "Output",
        ContainerKind::Hopper,
    );
    let output = driver.send_menu(conn, output)?;

    let close = [output.window_id().unwrap_or_default(), 0];
    conn.handle_container_close(driver, &mut &close[..])?;
    Ok(())
}
